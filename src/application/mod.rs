/// Application configuration module
pub mod config;
