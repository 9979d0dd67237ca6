pub mod common;
pub mod model_probe;
pub mod recipe;
