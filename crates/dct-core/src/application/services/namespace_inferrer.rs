//! Namespace Inferrer - base namespace from the project file, suffix from the
//! output directory.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, trace, warn};

use crate::{
    application::ports::{Filesystem, ProjectFileParser},
    domain::{DEFAULT_NAMESPACE, InferredNamespace, MAX_ASCENT, infer_namespace},
    error::DctResult,
};

pub struct NamespaceInferrer<'a> {
    filesystem: &'a dyn Filesystem,
    parser: &'a dyn ProjectFileParser,
}

impl<'a> NamespaceInferrer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, parser: &'a dyn ProjectFileParser) -> Self {
        Self { filesystem, parser }
    }

    /// Base namespace of the project rooted at `project_root`.
    ///
    /// Three tiers, each used only when the one before it yields nothing:
    ///
    /// 1. non-blank root namespace declared in the project file
    /// 2. the project file's name without extension
    /// 3. [`DEFAULT_NAMESPACE`] when there is no project file
    ///
    /// With several project files the lexically first file name wins.
    #[instrument(skip(self), fields(root = %project_root.display()))]
    pub fn base_namespace(&self, project_root: &Path) -> DctResult<String> {
        let Some(project_file) = self.find_project_file(project_root)? else {
            debug!(
                namespace = DEFAULT_NAMESPACE,
                "no project file, using default namespace"
            );
            return Ok(DEFAULT_NAMESPACE.to_string());
        };

        let content = self.filesystem.read_to_string(&project_file)?;
        if let Some(declared) = self.parser.root_namespace(&content, &project_file)? {
            let declared = declared.trim();
            if !declared.is_empty() {
                debug!(namespace = declared, "using declared root namespace");
                return Ok(declared.to_string());
            }
        }

        let stem = project_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        debug!(namespace = %stem, "using project file name");
        Ok(stem)
    }

    /// Full namespace for files generated into `output_dir`.
    pub fn infer(&self, output_dir: &Path, project_root: &Path) -> DctResult<InferredNamespace> {
        let base = self.base_namespace(project_root)?;
        let namespace = infer_namespace(&base, output_dir, project_root);
        debug!(namespace = %namespace, "inferred namespace");
        Ok(namespace)
    }

    /// Nearest directory at or above `output_dir` holding a project file.
    ///
    /// Examines at most [`MAX_ASCENT`] directories. Directories that do not
    /// exist yet are skipped, so an output path about to be created still
    /// finds the project it belongs to.
    #[instrument(skip(self), fields(output = %output_dir.display()))]
    pub fn find_project_root(&self, output_dir: &Path) -> DctResult<Option<PathBuf>> {
        for (depth, dir) in output_dir.ancestors().take(MAX_ASCENT).enumerate() {
            trace!(depth, dir = %dir.display(), "looking for project file");
            if !self.filesystem.is_dir(dir) {
                continue;
            }
            if let Some(file) = self.project_files(dir)?.into_iter().next() {
                debug!(project = %file.display(), depth, "found project file");
                return Ok(Some(dir.to_path_buf()));
            }
        }

        debug!("no project file above output directory");
        Ok(None)
    }

    /// Lexically first file in `project_root` with the parser's extension.
    fn find_project_file(&self, project_root: &Path) -> DctResult<Option<PathBuf>> {
        if !self.filesystem.is_dir(project_root) {
            warn!(
                root = %project_root.display(),
                "project root is not a directory"
            );
            return Ok(None);
        }

        let candidates = self.project_files(project_root)?;
        if candidates.len() > 1 {
            debug!(
                count = candidates.len(),
                chosen = %candidates[0].display(),
                "multiple project files, using the first by name"
            );
        }

        Ok(candidates.into_iter().next())
    }

    /// Files directly in `dir` with the parser's extension, sorted by name.
    fn project_files(&self, dir: &Path) -> DctResult<Vec<PathBuf>> {
        let extension = self.parser.extension();
        let mut files: Vec<PathBuf> = self
            .filesystem
            .list_files(dir)?
            .into_iter()
            .filter(|p| {
                p.extension()
                    .is_some_and(|e| e.to_string_lossy().eq_ignore_ascii_case(extension))
            })
            .collect();

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockProjectFileParser};

    fn parser_returning(ns: Option<&'static str>) -> MockProjectFileParser {
        let mut parser = MockProjectFileParser::new();
        parser.expect_extension().return_const("csproj");
        parser
            .expect_root_namespace()
            .returning(move |_, _| Ok(ns.map(String::from)));
        parser
    }

    fn fs_with_files(files: &'static [&'static str]) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_list_files()
            .returning(move |root| Ok(files.iter().map(|f| root.join(f)).collect()));
        fs.expect_read_to_string()
            .returning(|_| Ok("<Project />".to_string()));
        fs
    }

    #[test]
    fn no_project_file_gives_default() {
        let fs = fs_with_files(&["README.md", "Program.cs"]);
        let parser = parser_returning(None);

        let base = NamespaceInferrer::new(&fs, &parser)
            .base_namespace(Path::new("/p"))
            .unwrap();
        assert_eq!(base, "Default.Namespace");
    }

    #[test]
    fn project_file_without_root_namespace_gives_file_stem() {
        let fs = fs_with_files(&["TestProject.csproj"]);
        let parser = parser_returning(None);

        let base = NamespaceInferrer::new(&fs, &parser)
            .base_namespace(Path::new("/p"))
            .unwrap();
        assert_eq!(base, "TestProject");
    }

    #[test]
    fn declared_root_namespace_wins() {
        let fs = fs_with_files(&["TestProject.csproj"]);
        let parser = parser_returning(Some("  Company.Product  "));

        let base = NamespaceInferrer::new(&fs, &parser)
            .base_namespace(Path::new("/p"))
            .unwrap();
        assert_eq!(base, "Company.Product");
    }

    #[test]
    fn blank_root_namespace_falls_back_to_stem() {
        let fs = fs_with_files(&["Shop.Api.csproj"]);
        let parser = parser_returning(Some("   "));

        let base = NamespaceInferrer::new(&fs, &parser)
            .base_namespace(Path::new("/p"))
            .unwrap();
        assert_eq!(base, "Shop.Api");
    }

    #[test]
    fn multiple_project_files_pick_lexically_first() {
        let fs = fs_with_files(&["Zeta.csproj", "Alpha.csproj", "Mid.CSPROJ"]);
        let parser = parser_returning(None);

        let base = NamespaceInferrer::new(&fs, &parser)
            .base_namespace(Path::new("/p"))
            .unwrap();
        assert_eq!(base, "Alpha");
    }

    #[test]
    fn missing_root_gives_default() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_list_files().never();
        let parser = parser_returning(None);

        let base = NamespaceInferrer::new(&fs, &parser)
            .base_namespace(Path::new("/nope"))
            .unwrap();
        assert_eq!(base, DEFAULT_NAMESPACE);
    }

    #[test]
    fn infer_appends_relative_output_dir() {
        let fs = fs_with_files(&["Shop.csproj"]);
        let parser = parser_returning(None);

        let ns = NamespaceInferrer::new(&fs, &parser)
            .infer(Path::new("/p/Features/Orders"), Path::new("/p"))
            .unwrap();
        assert_eq!(ns.to_string(), "Shop.Features.Orders");
    }

    /// Filesystem where only the listed directories exist, each holding the
    /// given files.
    fn fs_with_tree(tree: &'static [(&'static str, &'static [&'static str])]) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .returning(move |p| tree.iter().any(|(dir, _)| p == Path::new(dir)));
        fs.expect_list_files().returning(move |p| {
            Ok(tree
                .iter()
                .filter(|(dir, _)| p == Path::new(dir))
                .flat_map(|(dir, files)| files.iter().map(move |f| Path::new(dir).join(f)))
                .collect())
        });
        fs
    }

    #[test]
    fn project_root_is_nearest_directory_with_project_file() {
        let fs = fs_with_tree(&[
            ("/sln", &["Shop.sln"]),
            ("/sln/src/Shop.Api", &["Shop.Api.csproj"]),
            ("/sln/src/Shop.Api/Features", &[]),
        ]);
        let parser = parser_returning(None);

        let root = NamespaceInferrer::new(&fs, &parser)
            .find_project_root(Path::new("/sln/src/Shop.Api/Features/Orders"))
            .unwrap();
        assert_eq!(root, Some(PathBuf::from("/sln/src/Shop.Api")));
    }

    #[test]
    fn project_root_search_is_bounded() {
        let deep: PathBuf = (0..12).fold(PathBuf::from("/p"), |p, i| p.join(format!("d{i}")));
        let fs = fs_with_tree(&[("/p", &["Far.csproj"])]);
        let parser = parser_returning(None);

        let root = NamespaceInferrer::new(&fs, &parser)
            .find_project_root(&deep)
            .unwrap();
        assert_eq!(root, None);
    }
}
