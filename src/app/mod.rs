pub mod app;
pub mod args;
pub mod settings;
pub mod settings_io;
