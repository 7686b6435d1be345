use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{GatherError, Result};
use crate::models::SourceFile;

/// Collector that discovers matching files under the source directory
pub struct SourceCollector<'a> {
    config: &'a Config,
}

impl<'a> SourceCollector<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Fail unless the source directory exists and is a directory
    pub fn check_source(&self) -> Result<()> {
        let dir_path = &self.config.source_dir;

        if !dir_path.exists() {
            return Err(GatherError::Collector(format!(
                "Source directory does not exist: {}",
                dir_path.display()
            )));
        }

        if !dir_path.is_dir() {
            return Err(GatherError::Collector(format!(
                "Source path is not a directory: {}",
                dir_path.display()
            )));
        }

        Ok(())
    }

    /// Collect all matching files in traversal order
    pub fn collect(&self) -> Result<Vec<SourceFile>> {
        self.check_source()?;

        let root = self.config.source_dir.as_path();
        let mut walker = WalkDir::new(root).min_depth(1);
        if self.config.sort_entries {
            walker = walker.sort_by_file_name();
        }

        let output = resolve_output(&self.config.output_file);
        let mut files = Vec::new();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable path: {}", e);
                    continue;
                }
            };

            // Symlinked directories are listed but never descended into
            if entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
            {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if !self.config.matches(&file_name) {
                debug!(path = %entry.path().display(), "skipping non-matching file");
                continue;
            }

            // A previous run's output inside the tree must not feed the next run
            if output.is_some()
                && entry.path().canonicalize().ok().as_deref() == output.as_deref()
            {
                debug!(path = %entry.path().display(), "skipping output file");
                continue;
            }

            let relative_path = relative_to(entry.path(), root)?;
            debug!(path = %relative_path.display(), "selected");

            files.push(SourceFile {
                path: entry.into_path(),
                relative_path,
            });
        }

        Ok(files)
    }
}

/// Absolute location of the output file, whether or not it exists yet
fn resolve_output(output: &Path) -> Option<PathBuf> {
    if let Ok(path) = output.canonicalize() {
        return Some(path);
    }

    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let name = output.file_name()?;
    parent.canonicalize().ok().map(|dir| dir.join(name))
}

fn relative_to(path: &Path, root: &Path) -> Result<PathBuf> {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| {
            GatherError::Collector(format!(
                "'{}' is outside of '{}'",
                path.display(),
                root.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(dir: &Path) -> Config {
        Config {
            source_dir: dir.to_path_buf(),
            ..Config::default()
        }
    }

    fn relative_paths(files: &[SourceFile]) -> Vec<PathBuf> {
        files.iter().map(|f| f.relative_path.clone()).collect()
    }

    #[test]
    fn test_missing_source_directory() {
        let temp = TempDir::new().unwrap();
        let config = config_for(&temp.path().join("missing"));
        let collector = SourceCollector::new(&config);

        let err = collector.collect().unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_source_is_a_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("lib.rs");
        fs::write(&file, "").unwrap();
        let config = config_for(&file);

        let err = SourceCollector::new(&config).collect().unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_empty_directory() {
        let temp = TempDir::new().unwrap();
        let config = config_for(temp.path());

        let files = SourceCollector::new(&config).collect().unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_selects_only_matching_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("shader.wgsl"), "// noop").unwrap();
        fs::write(temp.path().join("lib.rs"), "fn main() {}").unwrap();
        fs::write(temp.path().join("readme.txt"), "docs").unwrap();
        fs::write(temp.path().join("lib.rs.bak"), "old").unwrap();
        fs::write(temp.path().join("MOD.RS"), "upper").unwrap();

        let config = config_for(temp.path());
        let files = SourceCollector::new(&config).collect().unwrap();

        assert_eq!(
            relative_paths(&files),
            vec![PathBuf::from("lib.rs"), PathBuf::from("shader.wgsl")]
        );
    }

    #[test]
    fn test_recurses_into_subdirectories() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("lighting").join("shaders");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("mod.rs"), "").unwrap();
        fs::write(temp.path().join("lighting").join("csm.rs"), "").unwrap();
        fs::write(nested.join("shadow.wgsl"), "").unwrap();

        let config = config_for(temp.path());
        let files = SourceCollector::new(&config).collect().unwrap();

        assert_eq!(
            relative_paths(&files),
            vec![
                PathBuf::from("lighting").join("csm.rs"),
                PathBuf::from("lighting").join("shaders").join("shadow.wgsl"),
                PathBuf::from("mod.rs"),
            ]
        );
        assert_eq!(files[0].path, temp.path().join("lighting").join("csm.rs"));
    }

    #[test]
    fn test_directory_with_matching_name_is_not_selected() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("weird.rs")).unwrap();
        fs::write(temp.path().join("weird.rs").join("inner.rs"), "").unwrap();

        let config = config_for(temp.path());
        let files = SourceCollector::new(&config).collect().unwrap();

        assert_eq!(
            relative_paths(&files),
            vec![PathBuf::from("weird.rs").join("inner.rs")]
        );
    }

    #[test]
    fn test_unsorted_traversal_finds_same_files() {
        let temp = TempDir::new().unwrap();
        for name in ["c.rs", "a.wgsl", "b.rs", "z.txt"] {
            fs::write(temp.path().join(name), name).unwrap();
        }

        let mut config = config_for(temp.path());
        config.sort_entries = false;
        let mut found = relative_paths(&SourceCollector::new(&config).collect().unwrap());
        found.sort();

        assert_eq!(
            found,
            vec![
                PathBuf::from("a.wgsl"),
                PathBuf::from("b.rs"),
                PathBuf::from("c.rs"),
            ]
        );
    }

    #[test]
    fn test_custom_suffixes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.glsl"), "").unwrap();
        fs::write(temp.path().join("b.rs"), "").unwrap();

        let mut config = config_for(temp.path());
        config.suffixes = vec![".glsl".to_string()];
        let files = SourceCollector::new(&config).collect().unwrap();

        assert_eq!(relative_paths(&files), vec![PathBuf::from("a.glsl")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_not_followed() {
        let temp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("hidden.rs"), "").unwrap();
        std::os::unix::fs::symlink(outside.path(), temp.path().join("link.rs")).unwrap();
        fs::write(temp.path().join("real.rs"), "").unwrap();

        let config = config_for(temp.path());
        let files = SourceCollector::new(&config).collect().unwrap();

        assert_eq!(relative_paths(&files), vec![PathBuf::from("real.rs")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_selected() {
        let temp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let target = outside.path().join("target.wgsl");
        fs::write(&target, "").unwrap();
        std::os::unix::fs::symlink(&target, temp.path().join("alias.wgsl")).unwrap();

        let config = config_for(temp.path());
        let files = SourceCollector::new(&config).collect().unwrap();

        assert_eq!(relative_paths(&files), vec![PathBuf::from("alias.wgsl")]);
    }

    #[test]
    fn test_output_inside_source_is_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.rs"), "").unwrap();
        fs::write(temp.path().join("z.rs"), "stale output").unwrap();

        let mut config = config_for(temp.path());
        config.output_file = temp.path().join("z.rs");
        let files = SourceCollector::new(&config).collect().unwrap();

        assert_eq!(relative_paths(&files), vec![PathBuf::from("a.rs")]);
    }

    #[test]
    fn test_resolve_output_for_missing_file() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out.rs");

        let resolved = resolve_output(&output).unwrap();
        assert_eq!(
            resolved,
            temp.path().canonicalize().unwrap().join("out.rs")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let locked = temp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("hidden.rs"), "").unwrap();
        fs::write(temp.path().join("open.rs"), "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to root
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let config = config_for(temp.path());
        let result = SourceCollector::new(&config).collect();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(
            relative_paths(&result.unwrap()),
            vec![PathBuf::from("open.rs")]
        );
    }
}
