// Directory Port - file enumeration (for testability)

use std::path::{Path, PathBuf};

use crate::domain::{SearchOption, MATCH_ALL};
use crate::error::Result;

/// Directory enumeration interface
///
/// Only `enumerate_files_with` must be implemented; the other two forms
/// delegate to it with `*` and `TopDirectoryOnly`.
pub trait Directory: Send + Sync {
    /// All files directly inside `path`
    fn enumerate_files(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.enumerate_files_with(path, MATCH_ALL, SearchOption::TopDirectoryOnly)
    }

    /// Files directly inside `path` whose name matches `search_pattern`
    fn enumerate_files_matching(&self, path: &Path, search_pattern: &str) -> Result<Vec<PathBuf>> {
        self.enumerate_files_with(path, search_pattern, SearchOption::TopDirectoryOnly)
    }

    /// Files under `path` whose name matches `search_pattern`
    ///
    /// # Errors
    /// - FacadeError::InvalidPattern if the pattern is empty or names a path
    /// - FacadeError::Io if `path` cannot be read
    fn enumerate_files_with(
        &self,
        path: &Path,
        search_pattern: &str,
        search_option: SearchOption,
    ) -> Result<Vec<PathBuf>>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::domain::SearchPattern;
    use crate::error::FacadeError;
    use std::collections::BTreeSet;

    /// Directory backed by a fixed set of file paths
    #[derive(Default)]
    pub struct InMemoryDirectory {
        files: BTreeSet<PathBuf>,
    }

    impl InMemoryDirectory {
        pub fn new<I, P>(files: I) -> Self
        where
            I: IntoIterator<Item = P>,
            P: Into<PathBuf>,
        {
            Self {
                files: files.into_iter().map(Into::into).collect(),
            }
        }
    }

    impl Directory for InMemoryDirectory {
        fn enumerate_files_with(
            &self,
            path: &Path,
            search_pattern: &str,
            search_option: SearchOption,
        ) -> Result<Vec<PathBuf>> {
            let pattern = SearchPattern::parse(search_pattern)?;

            if !self.files.iter().any(|file| file.starts_with(path)) {
                return Err(FacadeError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("directory not found: {}", path.display()),
                )));
            }

            Ok(self
                .files
                .iter()
                .filter(|file| match search_option {
                    SearchOption::TopDirectoryOnly => file.parent() == Some(path),
                    SearchOption::AllDirectories => file.starts_with(path) && *file != path,
                })
                .filter(|file| {
                    file.file_name()
                        .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
                })
                .cloned()
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::InMemoryDirectory;
    use super::*;
    use crate::error::FacadeError;

    fn tree() -> InMemoryDirectory {
        InMemoryDirectory::new([
            "/srv/app/main.rs",
            "/srv/app/README.md",
            "/srv/app/src/lib.rs",
            "/srv/app/src/deep/mod.rs",
        ])
    }

    #[test]
    fn test_default_forms_delegate() {
        let dir = tree();

        let top = dir.enumerate_files(Path::new("/srv/app")).unwrap();
        assert_eq!(
            top,
            vec![
                PathBuf::from("/srv/app/README.md"),
                PathBuf::from("/srv/app/main.rs")
            ]
        );

        let rs = dir
            .enumerate_files_matching(Path::new("/srv/app"), "*.rs")
            .unwrap();
        assert_eq!(rs, vec![PathBuf::from("/srv/app/main.rs")]);
    }

    #[test]
    fn test_all_directories() {
        let rs = tree()
            .enumerate_files_with(Path::new("/srv/app"), "*.rs", SearchOption::AllDirectories)
            .unwrap();
        assert_eq!(rs.len(), 3);
    }

    #[test]
    fn test_missing_directory() {
        let err = tree().enumerate_files(Path::new("/nope")).unwrap_err();
        assert!(matches!(err, FacadeError::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_names_are_listed() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = InMemoryDirectory::new([
            Path::new("/data").join("ok.txt"),
            Path::new("/data").join(OsStr::from_bytes(b"bad\xff.txt")),
        ]);

        assert_eq!(dir.enumerate_files(Path::new("/data")).unwrap().len(), 2);
        assert_eq!(
            dir.enumerate_files_matching(Path::new("/data"), "*.txt")
                .unwrap()
                .len(),
            2
        );
    }
}
