pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod global;
pub mod normalizer;
pub mod subtitle;
pub mod transcript;
