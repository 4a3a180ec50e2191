//! Output destination configuration

use std::path::{Component, Path, PathBuf};

/// Where a logger writes its records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Process standard output (`-` or `stdout`)
    Stdout,
    /// Process standard error (`stderr`)
    Stderr,
    /// File created or truncated at build time
    File(PathBuf),
}

impl Output {
    /// Interpret an output string.
    ///
    /// Anything that is not one of the stream names is a file path. The path
    /// is lexically cleaned (`a//b/./c` becomes `a/b/c`); `..` is kept.
    #[must_use]
    pub fn parse(output: &str) -> Self {
        match output {
            "-" | "stdout" => Self::Stdout,
            "stderr" => Self::Stderr,
            path => Self::File(clean_path(Path::new(path))),
        }
    }
}

fn clean_path(path: &Path) -> PathBuf {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}
