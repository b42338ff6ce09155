//! Target entry expansion
//!
//! URLs pass through untouched. Anything else is a filesystem path, resolved
//! against the definition's base directory when relative. Entries containing
//! glob metacharacters expand into zero or more concrete files; literal paths
//! are kept as-is, existing or not, so a missing file surfaces as a read
//! failure. Expansion happens before binding so that check patterns see, and
//! substitute from, the concrete path.
//!
//! Every resolved path is cleaned lexically (`.` dropped, `..` folded into
//! its parent) so literal and globbed entries come out in the same shape:
//! `index.html` against base `.` is `index.html`, not `./index.html`.

use std::path::{Component, Path, PathBuf};

use glob::Pattern;
use log::{debug, warn};

use crate::core::models::is_remote;
use crate::error::FetchError;

/// One expanded target entry
#[derive(Debug)]
pub enum Expanded {
    /// A URL or file path
    Concrete(String),
    /// An entry that could not be expanded; checked as a failed target
    Invalid {
        /// The entry as written in the definition
        raw: String,
        /// Why it could not be expanded
        error: FetchError,
    },
}

/// Expand every entry, preserving entry order
///
/// Files matched by one glob come back in glob order (alphabetical).
pub fn expand_identifiers<'a, I>(entries: I, base_dir: &Path) -> Vec<Expanded>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = Vec::new();
    for entry in entries {
        if is_remote(entry) {
            out.push(Expanded::Concrete(entry.to_string()));
            continue;
        }

        if !is_glob(entry) {
            out.push(Expanded::Concrete(resolve_literal(entry, base_dir)));
            continue;
        }

        let pattern = resolve_pattern(entry, base_dir);
        match glob::glob(&pattern) {
            Ok(paths) => {
                let before = out.len();
                for path in paths {
                    match path {
                        Ok(path) => out.push(Expanded::Concrete(clean(&path))),
                        Err(err) => warn!("skipping {}: {}", err.path().display(), err.error()),
                    }
                }
                match out.len() - before {
                    0 => warn!("{entry} matched no files"),
                    n => debug!("{entry} expanded to {n} files"),
                }
            },
            Err(err) => out.push(Expanded::Invalid {
                raw: entry.to_string(),
                error: FetchError::InvalidGlob {
                    pattern,
                    reason: err.to_string(),
                },
            }),
        }
    }
    out
}

fn is_glob(entry: &str) -> bool {
    entry.contains(['*', '?', '['])
}

fn resolve_literal(entry: &str, base_dir: &Path) -> String {
    clean(&base_dir.join(entry))
}

/// Lexically clean a path, without touching disk
fn clean(path: &Path) -> String {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                },
                // `/..` is `/`
                Some(Component::RootDir | Component::Prefix(_)) => {},
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return ".".to_string();
    }
    parts.iter().collect::<PathBuf>().to_string_lossy().into_owned()
}

/// Join a relative entry onto the base directory, escaping the base so it is
/// never read as a glob itself
fn resolve_pattern(entry: &str, base_dir: &Path) -> String {
    if Path::new(entry).is_absolute() {
        return entry.to_string();
    }
    let base = Pattern::escape(&base_dir.to_string_lossy());
    Path::new(&base).join(entry).to_string_lossy().into_owned()
}
