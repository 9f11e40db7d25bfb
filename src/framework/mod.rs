pub mod config;
pub use config::Config;

pub mod data;

pub mod event_handler;

pub mod logging;

pub mod poise;
