//! Local icon directory loader.
//!
//! Every file matching the configured glob (default `**/*.svg`) below the icon
//! directory becomes one icon. The icon name is the file path relative to the
//! directory with the extension removed, using `/` as separator:
//!
//! ```text
//! src/icons/logo.svg            → "logo"
//! src/icons/brand/wordmark.svg  → "brand/wordmark"
//! ```

use std::io;
use std::path::{Component, Path, PathBuf};

use super::{parse_svg, LoaderError, LocalRequest, LocalSource};
use crate::collection::{IconCollection, LOCAL_PREFIX};

/// Loads the local collection from a directory of SVG files.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDirectorySource;

impl LocalDirectorySource {
    pub fn new() -> Self {
        Self
    }
}

impl LocalSource for LocalDirectorySource {
    async fn load(&self, request: LocalRequest<'_>) -> Result<IconCollection, LoaderError> {
        let dir = request.directory;

        match tokio::fs::metadata(dir).await {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => return Err(LoaderError::DirectoryNotFound(dir.to_path_buf())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LoaderError::DirectoryNotFound(dir.to_path_buf()))
            }
            Err(e) => return Err(LoaderError::io(dir, e)),
        }

        let files = find_icon_files(dir.to_path_buf(), request.options.pattern.clone()).await?;
        if files.is_empty() {
            return Err(LoaderError::NoIcons(dir.to_path_buf()));
        }

        let mut collection = IconCollection::new(LOCAL_PREFIX);
        for (name, path) in files {
            let text = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| LoaderError::io(&path, e))?;
            let icon = parse_svg(&path, &text)?;
            collection.icons.insert(name, icon);
        }

        tracing::debug!(
            dir = %dir.display(),
            icons = collection.icon_count(),
            "Loaded local icons"
        );

        Ok(collection)
    }
}

/// Find files matching `pattern` below `dir`, returned as (icon name, path)
/// sorted by name.
async fn find_icon_files(
    dir: PathBuf,
    pattern: String,
) -> Result<Vec<(String, PathBuf)>, LoaderError> {
    // Directory walking is blocking I/O
    tokio::task::spawn_blocking(move || scan(&dir, &pattern))
        .await
        .map_err(|e| LoaderError::io(PathBuf::new(), io::Error::other(e)))?
}

fn scan(dir: &Path, pattern: &str) -> Result<Vec<(String, PathBuf)>, LoaderError> {
    let full_pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        pattern.trim_start_matches('/')
    );

    let paths = glob::glob(&full_pattern).map_err(|e| LoaderError::Pattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            LoaderError::io(path, e.into_error())
        })?;

        if !path.is_file() {
            continue;
        }

        if let Some(name) = icon_name(dir, &path) {
            files.push((name, path));
        }
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// Derive the icon name from a file path relative to the icon directory.
fn icon_name(dir: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(dir).ok()?.with_extension("");

    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();

    if parts.is_empty() || parts.iter().any(|part| part.starts_with('.')) {
        return None;
    }

    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocalOptions;
    use tempfile::TempDir;

    const LOGO: &str = r#"<svg viewBox="0 0 32 32"><circle r="16"/></svg>"#;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    async fn load(dir: &Path, options: &LocalOptions) -> Result<IconCollection, LoaderError> {
        LocalDirectorySource::new()
            .load(LocalRequest {
                directory: dir,
                options,
            })
            .await
    }

    #[tokio::test]
    async fn test_loads_nested_icons() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "logo.svg", LOGO);
        write(temp.path(), "brand/wordmark.svg", LOGO);
        write(temp.path(), "notes.txt", "not an icon");

        let collection = load(temp.path(), &LocalOptions::default()).await.unwrap();

        assert_eq!(collection.prefix, "local");
        assert_eq!(
            collection.icon_names().collect::<Vec<_>>(),
            vec!["brand/wordmark", "logo"]
        );
        assert_eq!(collection.icons["logo"].body, "<circle r=\"16\"/>");
        assert_eq!(collection.icons["logo"].width, Some(32.0));
    }

    #[tokio::test]
    async fn test_pattern_limits_depth() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "logo.svg", LOGO);
        write(temp.path(), "brand/wordmark.svg", LOGO);

        let options = LocalOptions {
            pattern: "*.svg".to_string(),
        };
        let collection = load(temp.path(), &options).await.unwrap();

        assert_eq!(collection.icon_names().collect::<Vec<_>>(), vec!["logo"]);
    }

    #[tokio::test]
    async fn test_missing_directory() {
        let temp = TempDir::new().unwrap();

        let err = load(&temp.path().join("icons"), &LocalOptions::default())
            .await
            .unwrap_err();

        assert!(err.is_missing_source());
    }

    #[tokio::test]
    async fn test_empty_directory_has_no_icons() {
        let temp = TempDir::new().unwrap();

        let err = load(temp.path(), &LocalOptions::default()).await.unwrap_err();

        assert!(matches!(err, LoaderError::NoIcons(_)));
        assert!(!err.is_missing_source());
    }

    #[tokio::test]
    async fn test_corrupt_icon_is_invalid() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "broken.svg", "<not-svg/>");

        let err = load(temp.path(), &LocalOptions::default()).await.unwrap_err();

        assert!(matches!(err, LoaderError::InvalidIcon { .. }));
    }

    #[test]
    fn test_icon_name_strips_extension_only() {
        let dir = Path::new("/icons");
        assert_eq!(
            icon_name(dir, Path::new("/icons/logo.dark.svg")),
            Some("logo.dark".to_string())
        );
        assert_eq!(
            icon_name(dir, Path::new("/icons/a/b/c.svg")),
            Some("a/b/c".to_string())
        );
        assert_eq!(icon_name(dir, Path::new("/icons/.hidden/x.svg")), None);
        assert_eq!(icon_name(dir, Path::new("/elsewhere/x.svg")), None);
    }
}
