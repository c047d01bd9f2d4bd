pub mod route_table;
pub mod static_store;
pub mod traits;

pub use route_table::*;
pub use static_store::*;
pub use traits::*;
