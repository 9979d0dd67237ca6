pub mod health;
pub mod models;
pub mod recipe;
pub mod server;
