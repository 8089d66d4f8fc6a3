pub mod attributes;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod template;
pub mod vocabulary;

pub use error::{DrsGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;
