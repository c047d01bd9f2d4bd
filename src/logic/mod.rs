pub mod navigation;
pub mod validate;

pub use navigation::*;
pub use validate::*;
