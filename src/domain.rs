pub mod models;
pub mod requests;
mod timestamp;
