//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against a loaded database.

pub mod file;
pub mod find;
pub mod settings;
pub mod tag;

use crate::DirtagError;

type Result<T> = std::result::Result<T, DirtagError>;

// Re-export execute functions for convenience
pub use file::{new_file, remove_file};
pub use find::execute as find_tag;
pub use settings::execute as init_settings;
pub use tag::{add_tag, clear_tag};
