pub mod error;
pub mod helpers;
pub mod slug;
pub mod timestamp;
