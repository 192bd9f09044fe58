// Directory implementation backed by std::fs
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use system_facade_core::domain::{SearchOption, SearchPattern};
use system_facade_core::error::Result;
use system_facade_core::port::Directory;

/// Directory enumeration over the real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemDirectory;

impl FileSystemDirectory {
    pub fn new() -> Self {
        Self
    }

    /// Collect matching files in `dir`, descending when asked
    ///
    /// Files of one directory come before its subdirectories; both sorted by name.
    /// Symlinks are classified by their target. `ancestors` holds the resolved
    /// directories on the current descent, so a link back into one of them is
    /// not followed again.
    fn walk(
        dir: &Path,
        pattern: &SearchPattern,
        option: SearchOption,
        ancestors: &mut Vec<PathBuf>,
        out: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let mut files = Vec::new();
        let mut subdirs = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if Self::is_directory(&entry.file_type()?, &path) {
                subdirs.push(path);
            } else if pattern.matches(&entry.file_name().to_string_lossy()) {
                files.push(path);
            }
        }

        files.sort();
        out.extend(files);

        if option == SearchOption::AllDirectories {
            subdirs.sort();
            for subdir in subdirs {
                let resolved = fs::canonicalize(&subdir)?;
                if ancestors.contains(&resolved) {
                    debug!(path = %subdir.display(), "Skipping symlink cycle");
                    continue;
                }
                ancestors.push(resolved);
                Self::walk(&subdir, pattern, option, ancestors, out)?;
                ancestors.pop();
            }
        }
        Ok(())
    }

    fn is_directory(file_type: &fs::FileType, path: &Path) -> bool {
        if !file_type.is_symlink() {
            return file_type.is_dir();
        }
        match fs::metadata(path) {
            Ok(target) => target.is_dir(),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Dangling symlink listed as file");
                false
            }
        }
    }
}

impl Directory for FileSystemDirectory {
    fn enumerate_files_with(
        &self,
        path: &Path,
        search_pattern: &str,
        search_option: SearchOption,
    ) -> Result<Vec<PathBuf>> {
        let pattern = SearchPattern::parse(search_pattern)?;

        let mut out = Vec::new();
        let mut ancestors = vec![fs::canonicalize(path)?];
        Self::walk(path, &pattern, search_option, &mut ancestors, &mut out)?;

        debug!(
            path = %path.display(),
            pattern = %pattern.as_str(),
            option = ?search_option,
            count = out.len(),
            "Files enumerated"
        );

        Ok(out)
    }
}
