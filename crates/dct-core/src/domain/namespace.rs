//! Namespace inference.
//!
//! A namespace is the base namespace of the project followed by the output
//! directory's path relative to the project root, with every path separator
//! turned into a `.`:
//!
//! | base             | root | output              | namespace                          |
//! |------------------|------|---------------------|------------------------------------|
//! | `Base.Namespace` | `.`  | `Features/Commands` | `Base.Namespace.Features.Commands` |
//! | `Base.Namespace` | `.`  | `.`                 | `Base.Namespace`                   |
//!
//! Everything here is lexical: neither path has to exist.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Base namespace used when the project root has no project file.
pub const DEFAULT_NAMESPACE: &str = "Default.Namespace";

/// Namespace delimiter.
pub const DELIMITER: char = '.';

/// A dot-delimited namespace built from a base and a directory-derived suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredNamespace {
    base: String,
    suffix: String,
}

impl InferredNamespace {
    /// Combine `base` and `suffix`. The suffix is stripped of leading and
    /// trailing delimiters; a blank suffix collapses to the base alone.
    pub fn new(base: impl Into<String>, suffix: &str) -> Self {
        let suffix = suffix.trim_matches(DELIMITER);
        let suffix = if suffix.trim().is_empty() {
            String::new()
        } else {
            suffix.to_string()
        };

        Self {
            base: base.into(),
            suffix,
        }
    }

    pub fn suffix(&self) -> Option<&str> {
        (!self.suffix.is_empty()).then_some(self.suffix.as_str())
    }
}

impl fmt::Display for InferredNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suffix() {
            Some(suffix) => write!(f, "{}{DELIMITER}{}", self.base, suffix),
            None => f.write_str(&self.base),
        }
    }
}

/// Derive the namespace for files written to `output_dir`.
pub fn infer_namespace(base: &str, output_dir: &Path, project_root: &Path) -> InferredNamespace {
    let relative = relative_path(project_root, output_dir);
    let suffix = relative
        .to_string_lossy()
        .replace(['/', '\\', std::path::MAIN_SEPARATOR], ".");

    InferredNamespace::new(base, &suffix)
}

/// Lexical relative path from `base` to `target`.
///
/// `.` components are dropped and `..` cancels the preceding segment where
/// one exists. A target outside `base` yields leading `..` segments. When the
/// two paths have different roots (one absolute, one relative, or different
/// drive prefixes) there is nothing to relativise against and the normalised
/// target is returned.
pub fn relative_path(base: &Path, target: &Path) -> PathBuf {
    let (base_anchor, base_parts) = normalize(base);
    let (target_anchor, target_parts) = normalize(target);

    if base_anchor != target_anchor {
        let mut out = target_anchor;
        out.extend(target_parts);
        return out;
    }

    let common = base_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..base_parts.len() {
        out.push("..");
    }
    out.extend(&target_parts[common..]);
    out
}

/// Lexically resolve `.` and `..` in `path`. A `..` with nothing left to
/// cancel is kept on relative paths and dropped at the filesystem root.
pub fn normalize_path(path: &Path) -> PathBuf {
    let (mut out, parts) = normalize(path);
    out.extend(parts);
    out
}

/// Split a path into its root (prefix + root dir, possibly empty) and
/// its lexically resolved segments.
fn normalize(path: &Path) -> (PathBuf, Vec<&OsStr>) {
    let mut anchor = PathBuf::new();
    let mut parts: Vec<&OsStr> = Vec::new();
    let parent = OsStr::new("..");

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => anchor.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.last().is_some_and(|last| *last != parent) {
                    parts.pop();
                } else if anchor.as_os_str().is_empty() {
                    parts.push(parent);
                }
                // otherwise `..` above the filesystem root stays at the root
            }
            Component::Normal(part) => parts.push(part),
        }
    }

    (anchor, parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_commands_under_dot_root() {
        let ns = infer_namespace(
            "Base.Namespace",
            Path::new("Features/Commands"),
            Path::new("."),
        );
        assert_eq!(ns.to_string(), "Base.Namespace.Features.Commands");
    }

    #[test]
    fn output_equal_to_root_collapses_to_base() {
        for (out, root) in [
            (".", "."),
            ("/tmp/proj", "/tmp/proj"),
            ("/tmp/proj/", "/tmp/proj"),
            ("src/..", "."),
            ("./a/./b", "a/b"),
        ] {
            let ns = infer_namespace("My.App", Path::new(out), Path::new(root));
            assert_eq!(ns.to_string(), "My.App", "out={out} root={root}");
            assert_eq!(ns.suffix(), None);
        }
    }

    #[test]
    fn absolute_paths_are_relativised() {
        let ns = infer_namespace(
            "My.App",
            Path::new("/work/app/Features/Orders"),
            Path::new("/work/app"),
        );
        assert_eq!(ns.to_string(), "My.App.Features.Orders");
    }

    #[test]
    fn alternate_separators_are_delimited() {
        let ns = infer_namespace("My.App", Path::new("Features\\Orders/Queries"), Path::new("."));
        assert_eq!(ns.to_string(), "My.App.Features.Orders.Queries");
    }

    #[test]
    fn sibling_output_is_joined_not_rejected() {
        // `../Other/Thing` -> `...Other.Thing` -> trimmed to `Other.Thing`
        let ns = infer_namespace(
            "My.App",
            Path::new("/work/Other/Thing"),
            Path::new("/work/app"),
        );
        assert_eq!(ns.to_string(), "My.App.Other.Thing");
    }

    #[test]
    fn relative_path_cases() {
        assert_eq!(relative_path(Path::new("."), Path::new(".")), PathBuf::new());
        assert_eq!(
            relative_path(Path::new("/a/b"), Path::new("/a/c/d")),
            PathBuf::from("../c/d")
        );
        assert_eq!(
            relative_path(Path::new("a"), Path::new("a/b/../c")),
            PathBuf::from("c")
        );
        assert_eq!(
            relative_path(Path::new("/a"), Path::new("rel/x")),
            PathBuf::from("rel/x")
        );
        assert_eq!(
            relative_path(Path::new("."), Path::new("../x")),
            PathBuf::from("../x")
        );
    }

    #[test]
    fn parent_above_root_stays_at_root() {
        assert_eq!(
            relative_path(Path::new("/"), Path::new("/../a")),
            PathBuf::from("a")
        );
    }

    #[test]
    fn normalize_path_resolves_parent_segments() {
        assert_eq!(normalize_path(Path::new("/tmp/a/..")), PathBuf::from("/tmp"));
        assert_eq!(normalize_path(Path::new("/w/app/../x/./y")), PathBuf::from("/w/x/y"));
        assert_eq!(normalize_path(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(normalize_path(Path::new("/..")), PathBuf::from("/"));
    }

    #[test]
    fn namespace_new_trims_delimiters() {
        let ns = InferredNamespace::new("Base", ".Feature.");
        assert_eq!(ns.to_string(), "Base.Feature");
        assert_eq!(InferredNamespace::new("Base", "  ").to_string(), "Base");
        assert_eq!(InferredNamespace::new("Base", "...").to_string(), "Base");
    }
}
