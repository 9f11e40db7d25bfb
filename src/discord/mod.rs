pub mod commands;

pub mod watchers;
