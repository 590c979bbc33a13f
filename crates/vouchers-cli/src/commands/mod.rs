pub mod config;
pub mod generate;
pub mod input;
pub mod preview;
