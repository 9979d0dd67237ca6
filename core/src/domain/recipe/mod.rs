pub mod entities;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod invoker;
pub mod policies;
pub mod ports;
pub mod prompt;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
