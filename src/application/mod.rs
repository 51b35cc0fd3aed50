pub mod commands;
pub mod ports;
