//! Chart aggregate: the symbol, the request built from it and the payload it returns.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
