pub mod command;
pub mod common;
pub mod render;
pub mod shell;
