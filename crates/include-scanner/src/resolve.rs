//! Resolution of include names against the including file.

use std::path::{Component, MAIN_SEPARATOR_STR, Path, PathBuf};

/// Turn an include name into a path using the platform separator.
///
/// Names are written with `/` in sources regardless of platform. A leading root (or drive
/// prefix) is kept, so absolute names stay absolute.
pub fn native_name(name: &str) -> PathBuf {
    PathBuf::from(name.replace('/', MAIN_SEPARATOR_STR))
}

/// Remove `.` components and fold `..` into the preceding component without touching the
/// filesystem. A `..` that would climb above the root is dropped; one that leads a relative
/// path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Resolve `name` against the directory of `including_file`. Absolute names are used as is.
///
/// Returns the normalized path when it names an existing regular file.
pub fn resolve_include(name: &str, including_file: &Path) -> Option<PathBuf> {
    let native = native_name(name);
    let candidate = if native.is_relative() {
        let dir = including_file.parent().unwrap_or_else(|| Path::new(""));
        normalize(&dir.join(native))
    } else {
        normalize(&native)
    };
    candidate.is_file().then_some(candidate)
}
