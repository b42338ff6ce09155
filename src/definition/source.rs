//! Where a definition comes from
//!
//! The single command line argument is either a file path or, when it starts
//! with `{`, the definition itself. With no argument the definition is read
//! from stdin, provided stdin is not an interactive terminal.
//!
//! Relative file targets resolve against the directory holding the definition
//! file, or against the working directory for inline and stdin definitions.

use std::env;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use log::debug;

use super::Definition;
use crate::error::ConfigError;

/// Origin of a definition document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionSource {
    /// A JSON file on disk
    File(PathBuf),
    /// JSON passed directly as the argument
    Inline(String),
    /// JSON piped on standard input
    Stdin,
}

/// A parsed definition and the directory relative paths resolve against
#[derive(Debug, Clone)]
pub struct LoadedDefinition {
    /// The definition
    pub definition: Definition,
    /// Base directory for relative file targets
    pub base_dir: PathBuf,
}

impl DefinitionSource {
    /// Classify the command line argument
    #[must_use]
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("") => Self::Stdin,
            Some(s) if s.trim_start().starts_with('{') => Self::Inline(s.to_string()),
            Some(s) => Self::File(PathBuf::from(s)),
        }
    }

    /// Read and parse the definition
    pub fn load(&self) -> Result<LoadedDefinition, ConfigError> {
        match self {
            Self::File(path) => {
                let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadDefinition {
                    path: path.clone(),
                    source,
                })?;
                debug!("loaded definition from {}", path.display());
                Self::parse(&content, definition_dir(path))
            },
            Self::Inline(json) => Self::parse(json, working_dir()?),
            Self::Stdin => {
                let mut stdin = io::stdin();
                if stdin.is_terminal() {
                    return Err(ConfigError::NoDefinition);
                }
                let mut content = String::new();
                stdin.read_to_string(&mut content).map_err(|source| ConfigError::ReadDefinition {
                    path: PathBuf::from("-"),
                    source,
                })?;
                Self::parse(&content, working_dir()?)
            },
        }
    }

    fn parse(content: &str, base_dir: PathBuf) -> Result<LoadedDefinition, ConfigError> {
        Ok(LoadedDefinition {
            definition: Definition::parse(content)?,
            base_dir,
        })
    }
}

fn definition_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn working_dir() -> Result<PathBuf, ConfigError> {
    env::current_dir().map_err(|source| ConfigError::ReadDefinition {
        path: PathBuf::from("."),
        source,
    })
}
