//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use dct_core::{
    application::{ApplicationError, ports::Filesystem},
    error::DctResult,
};

/// In-memory filesystem for testing.
///
/// Paths are stored as given; callers should use absolute paths. Clones share
/// the same contents, so a test can keep a handle after boxing one into a
/// service.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug)]
struct MemoryFilesystemInner {
    cwd: PathBuf,
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create an empty filesystem whose working directory is `/`.
    pub fn new() -> Self {
        Self::with_current_dir("/")
    }

    /// Create an empty filesystem with the given working directory, which is
    /// created along with its ancestors.
    pub fn with_current_dir(cwd: impl Into<PathBuf>) -> Self {
        let cwd = cwd.into();
        let directories = cwd.ancestors().map(Path::to_path_buf).collect();
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner {
                cwd,
                files: BTreeMap::new(),
                directories,
            })),
        }
    }

    /// Change the working directory (testing helper).
    pub fn set_current_dir(&self, cwd: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.cwd = cwd.into();
        }
    }

    /// Add a file and its parent directories (testing helper).
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            for ancestor in path.ancestors().skip(1) {
                inner.directories.insert(ancestor.to_path_buf());
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All file paths, sorted.
    pub fn all_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn current_dir(&self) -> DctResult<PathBuf> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        Ok(inner.cwd.clone())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.directories.contains(path))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.files.contains_key(path))
    }

    fn read_to_string(&self, path: &Path) -> DctResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> DctResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> DctResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn list_files(&self, path: &Path) -> DctResult<Vec<PathBuf>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Directory does not exist".into(),
            }
            .into());
        }

        Ok(inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file(Path::new("/a/b.txt"), "x").unwrap();
        assert_eq!(fs.read_file("/a/b.txt").as_deref(), Some("x"));
    }

    #[test]
    fn add_file_creates_parents() {
        let fs = MemoryFilesystem::with_current_dir("/work");
        fs.add_file("/work/.dct/templates/command.tera", "t");

        assert!(fs.is_dir(Path::new("/work/.dct")));
        assert!(fs.is_dir(Path::new("/work/.dct/templates")));
        assert!(fs.is_file(Path::new("/work/.dct/templates/command.tera")));
        assert!(!fs.is_dir(Path::new("/work/.dct/templates/command.tera")));
    }

    #[test]
    fn list_files_is_not_recursive() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/p/App.csproj", "");
        fs.add_file("/p/src/Other.csproj", "");

        let files = fs.list_files(Path::new("/p")).unwrap();
        assert_eq!(files, vec![PathBuf::from("/p/App.csproj")]);
    }

    #[test]
    fn working_directory_is_settable() {
        let fs = MemoryFilesystem::with_current_dir("/a");
        assert_eq!(fs.current_dir().unwrap(), PathBuf::from("/a"));
        assert!(fs.is_dir(Path::new("/")));

        fs.set_current_dir("/b");
        assert_eq!(fs.current_dir().unwrap(), PathBuf::from("/b"));
    }
}
