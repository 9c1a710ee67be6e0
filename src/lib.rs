pub mod config;
pub mod error;
pub mod eslintrc;
pub mod fixer;
pub mod installer;
pub mod locator;
pub mod manifest;
pub mod migrate;
pub mod runtime;
