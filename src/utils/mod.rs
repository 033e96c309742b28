/// Configuration loading (TOML file, `.env`, environment).
pub mod config;
