pub mod category;
pub mod config;
pub mod database;
pub mod middleware;
pub mod post;
pub mod router;
pub mod seed;
pub mod state;
pub mod stats;
pub mod utils;
