pub mod db;
pub mod memory;

pub use db::{Database, connect_to_mongo};
