pub mod commands;
pub mod error_message;
pub mod navigator;
pub mod renderer;
