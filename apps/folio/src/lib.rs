pub mod config;
pub mod errors;
pub mod interaction;
pub mod models;
pub mod render;
