pub mod catalog_handlers;
pub mod handlers;
pub mod routes;

pub use catalog_handlers::*;
pub use handlers::*;
pub use routes::*;
