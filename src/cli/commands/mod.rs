pub mod config;
pub mod show;
