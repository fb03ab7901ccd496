use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::bail;
use clap::ValueEnum;

/// PHP member visibility keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "protected" => Ok(Visibility::Protected),
            "private" => Ok(Visibility::Private),
            other => bail!("Unknown visibility: \"{}\"", other),
        }
    }
}

/// Everything needed to add one method to a class file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub class_name: String,
    pub method_name: String,
    pub method_visibility: Visibility,
    pub method_is_static: bool,
    pub class_file_path: PathBuf,
}

impl MethodDescriptor {
    /// A public, non-static method.
    pub fn new(
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        class_file_path: impl AsRef<Path>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: method_name.into(),
            method_visibility: Visibility::default(),
            method_is_static: false,
            class_file_path: class_file_path.as_ref().to_path_buf(),
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.method_visibility = visibility;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.method_is_static = is_static;
        self
    }

    /// `public static function name()` style declaration, without a body.
    pub fn signature(&self) -> String {
        let static_kw = if self.method_is_static { "static " } else { "" };
        format!(
            "{} {}function {}()",
            self.method_visibility, static_kw, self.method_name
        )
    }

    /// Full method text with an empty body, each line prefixed by `indent`.
    pub fn render(&self, indent: &str) -> String {
        format!("{indent}{}\n{indent}{{\n{indent}}}\n", self.signature())
    }
}
