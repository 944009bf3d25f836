pub mod camera;
pub mod commands;
pub mod instance;
