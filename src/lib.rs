pub mod cli;
pub mod config;
pub mod manifest;
pub mod package;
pub mod scaffold;
pub mod util;
pub mod validate;
