pub mod app;
pub mod changelog;
pub mod config;
pub mod editor;
pub mod git;
pub mod logging;
pub mod project;
pub mod version;
