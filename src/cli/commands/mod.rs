pub mod blocks;
pub mod config;
pub mod session;
