pub mod controller;
pub mod data;
pub mod index;
pub mod service;
