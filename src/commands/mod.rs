pub mod config;
pub mod list;
pub mod open;
pub mod setup;
