//! plugkit - scaffolding and i18n tooling for Jeedom-style PHP plugins
//!
//! plugkit is a CLI tool and library that edits PHP class files (declaring
//! classes, adding method skeletons) and keeps per-locale translation
//! catalogs in sync with the strings marked for translation in a plugin.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Class file editing and translation scanning

pub mod cli;
pub mod config;
pub mod core;
