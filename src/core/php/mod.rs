//! PHP class file editing.
//!
//! Classes and methods are located with line-anchored patterns and a brace
//! matcher, not a PHP parser. This is enough for the conventional plugin
//! layout: one declaration per line, braces balanced outside of strings.

mod braces;
mod class_file;
mod method;

pub use class_file::{
    EditOutcome, class_exists, ensure_class_declared, insert_method, method_exists,
};
pub use method::{MethodDescriptor, Visibility};
