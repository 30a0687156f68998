pub mod engine;
pub mod env;
pub mod error;
pub mod explorer;
pub mod logger;
pub mod models;
