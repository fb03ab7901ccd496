//! Core editing and scanning logic, independent of the CLI.
//!
//! - `php`: class file editing (class declarations, method insertion)
//! - `i18n`: literal scanning and translation catalogs
//! - `fs`: atomic file replacement shared by both

pub mod fs;
pub mod i18n;
pub mod php;
