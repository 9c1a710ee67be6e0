//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over system operations,
//! enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `env` - Process environment (current directory)
//! - `fs` - File system operations (read, write, existence checks)
//! - `process` - External command execution

mod env;
mod fs;
mod process;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use process::CommandOutput;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn current_dir(&self) -> Result<PathBuf>;

    // File System
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn exists(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;

    // Processes
    /// Run `program` with `args` inside `dir`, blocking until it exits.
    /// A non-zero exit is reported through [`CommandOutput`], not as an error;
    /// only a failure to spawn the process is an `Err`.
    fn run_command(&self, dir: &Path, program: &str, args: &[String]) -> Result<CommandOutput>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir_impl()
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.is_file_impl(path)
    }

    fn run_command(&self, dir: &Path, program: &str, args: &[String]) -> Result<CommandOutput> {
        self.run_command_impl(dir, program, args)
    }
}
