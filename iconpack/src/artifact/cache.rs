//! Fingerprint-gated regeneration of the declaration file.

use std::path::{Path, PathBuf};

use super::declaration::{icon_identifiers, render_declaration};
use super::header::parse_header;
use crate::collection::{IconCollection, LOCAL_PREFIX};
use crate::config::IntegrationConfig;
use crate::error::{IconpackError, IconpackResult};
use crate::fingerprint::Fingerprint;
use crate::module::VIRTUAL_MODULE_ID;

/// Result of a reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The file already matched the icon set; nothing was written.
    Unchanged(Fingerprint),
    /// The file was (re)generated.
    Written(Fingerprint),
}

impl ReconcileOutcome {
    /// Fingerprint of the icon set the file now describes.
    pub fn fingerprint(&self) -> &Fingerprint {
        match self {
            ReconcileOutcome::Unchanged(fp) | ReconcileOutcome::Written(fp) => fp,
        }
    }

    pub fn was_written(&self) -> bool {
        matches!(self, ReconcileOutcome::Written(_))
    }
}

/// Freshness of the declaration file, without writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
    /// The file matches the icon set.
    Fresh(Fingerprint),
    /// The file is missing, foreign or describes a different icon set.
    Stale {
        current: Fingerprint,
        previous: Option<Fingerprint>,
    },
}

impl ArtifactStatus {
    pub fn is_fresh(&self) -> bool {
        matches!(self, ArtifactStatus::Fresh(_))
    }
}

/// Keeps a declaration file in sync with an icon set.
///
/// The file embeds the fingerprint it was rendered from, so no sidecar state
/// is needed: a reconcile with an unchanged icon set reads the header, finds
/// a match and leaves the file (and its modification time) alone.
#[derive(Debug, Clone)]
pub struct ArtifactCache {
    path: PathBuf,
    default_pack: String,
    module_id: String,
}

impl ArtifactCache {
    /// Create a cache for the declaration at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            default_pack: LOCAL_PREFIX.to_string(),
            module_id: VIRTUAL_MODULE_ID.to_string(),
        }
    }

    /// Create the cache described by an integration config.
    pub fn from_config(config: &IntegrationConfig) -> Self {
        Self::new(config.artifact_file()).with_default_pack(config.default_pack.clone())
    }

    /// Set the collection referenced without a prefix.
    pub fn with_default_pack(mut self, prefix: impl Into<String>) -> Self {
        self.default_pack = prefix.into();
        self
    }

    /// Set the module name the declaration augments.
    pub fn with_module_id(mut self, module_id: impl Into<String>) -> Self {
        self.module_id = module_id.into();
        self
    }

    /// Path of the declaration file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fingerprint embedded in the current file, if any.
    ///
    /// Missing, unreadable and malformed files all yield `None`.
    pub async fn previous_fingerprint(&self) -> Option<Fingerprint> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => {
                let parsed = parse_header(&text);
                if parsed.is_none() {
                    tracing::debug!(
                        path = %self.path.display(),
                        "Declaration header not recognised"
                    );
                }
                parsed
            }
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "No readable declaration");
                None
            }
        }
    }

    /// Compare the file against an icon set without writing.
    pub async fn status<'a>(
        &self,
        collections: impl IntoIterator<Item = &'a IconCollection>,
    ) -> ArtifactStatus {
        let current = Fingerprint::compute(collections);
        let previous = self.previous_fingerprint().await;

        if previous.as_ref() == Some(&current) {
            ArtifactStatus::Fresh(current)
        } else {
            ArtifactStatus::Stale { current, previous }
        }
    }

    /// Regenerate the file if it does not describe `collections`.
    ///
    /// Idempotent: a second call with the same icon set performs no write.
    pub async fn reconcile<'a>(
        &self,
        collections: impl IntoIterator<Item = &'a IconCollection>,
    ) -> IconpackResult<ReconcileOutcome> {
        let collections: Vec<&IconCollection> = collections.into_iter().collect();
        let current = Fingerprint::compute(collections.iter().copied());

        if self.previous_fingerprint().await.as_ref() == Some(&current) {
            tracing::debug!(
                path = %self.path.display(),
                fingerprint = %current.short(),
                "Icon declarations up to date"
            );
            return Ok(ReconcileOutcome::Unchanged(current));
        }

        let identifiers = icon_identifiers(collections.iter().copied(), &self.default_pack);
        let contents = render_declaration(&current, &self.module_id, &identifiers)?;

        self.ensure_parent_dir().await;
        self.write(&contents).await?;

        tracing::info!(
            path = %self.path.display(),
            icons = identifiers.len(),
            fingerprint = %current.short(),
            "Generated icon declarations"
        );

        Ok(ReconcileOutcome::Written(current))
    }

    /// Create the parent directory.
    ///
    /// Failures are ignored as long as the directory exists afterwards; if it
    /// does not, the following write reports the error.
    async fn ensure_parent_dir(&self) {
        let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return;
        };

        if let Err(e) = tokio::fs::create_dir_all(parent).await {
            if !parent.is_dir() {
                tracing::debug!(
                    dir = %parent.display(),
                    error = %e,
                    "Failed to create declaration directory"
                );
            }
        }
    }

    /// Replace the file contents via a temporary file and rename.
    async fn write(&self, contents: &str) -> IconpackResult<()> {
        let temp_path = self.path.with_extension("tmp");

        tokio::fs::write(&temp_path, contents)
            .await
            .map_err(|source| IconpackError::ArtifactWrite {
                path: self.path.clone(),
                source,
            })?;

        if let Err(source) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(IconpackError::ArtifactWrite {
                path: self.path.clone(),
                source,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::IconData;
    use filetime::FileTime;
    use tempfile::TempDir;

    fn collection(prefix: &str, names: &[&str]) -> IconCollection {
        names.iter().fold(IconCollection::new(prefix), |c, name| {
            c.with_icon(*name, IconData::new("<g/>"))
        })
    }

    fn sample() -> Vec<IconCollection> {
        vec![
            collection("mdi", &["home", "account"]),
            collection("local", &["logo"]),
        ]
    }

    #[tokio::test]
    async fn test_first_reconcile_writes() {
        let temp = TempDir::new().unwrap();
        let cache = ArtifactCache::new(temp.path().join(".iconpack/icons.d.ts"));

        let outcome = cache.reconcile(&sample()).await.unwrap();

        assert!(outcome.was_written());
        let text = std::fs::read_to_string(cache.path()).unwrap();
        assert!(text.contains("| \"mdi:home\""));
        assert!(text.contains("| \"mdi:account\""));
        assert!(text.contains("| \"logo\""));
        assert_eq!(parse_header(&text).as_ref(), Some(outcome.fingerprint()));
    }

    #[tokio::test]
    async fn test_second_reconcile_is_noop() {
        let temp = TempDir::new().unwrap();
        let cache = ArtifactCache::new(temp.path().join("icons.d.ts"));

        cache.reconcile(&sample()).await.unwrap();
        let pinned = FileTime::from_unix_time(1_000_000_000, 0);
        filetime::set_file_mtime(cache.path(), pinned).unwrap();
        let before = std::fs::read_to_string(cache.path()).unwrap();

        let outcome = cache.reconcile(&sample()).await.unwrap();

        assert!(!outcome.was_written());
        let metadata = std::fs::metadata(cache.path()).unwrap();
        assert_eq!(FileTime::from_last_modification_time(&metadata), pinned);
        assert_eq!(std::fs::read_to_string(cache.path()).unwrap(), before);
    }

    #[tokio::test]
    async fn test_reordered_icons_do_not_rewrite() {
        let temp = TempDir::new().unwrap();
        let cache = ArtifactCache::new(temp.path().join("icons.d.ts"));

        cache.reconcile(&sample()).await.unwrap();
        let reordered = vec![
            collection("mdi", &["account", "home"]),
            collection("local", &["logo"]),
        ];

        let outcome = cache.reconcile(&reordered).await.unwrap();

        assert!(!outcome.was_written());
    }

    #[tokio::test]
    async fn test_changed_icons_rewrite() {
        let temp = TempDir::new().unwrap();
        let cache = ArtifactCache::new(temp.path().join("icons.d.ts"));

        let first = cache.reconcile(&sample()).await.unwrap();
        let mut changed = sample();
        changed[1] = collection("local", &["logo", "wordmark"]);

        let second = cache.reconcile(&changed).await.unwrap();

        assert!(second.was_written());
        assert_ne!(first.fingerprint(), second.fingerprint());
        let text = std::fs::read_to_string(cache.path()).unwrap();
        assert!(text.contains("| \"wordmark\""));
    }

    #[tokio::test]
    async fn test_foreign_file_is_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("icons.d.ts");
        std::fs::write(&path, "export type Icon = string;\n").unwrap();
        let cache = ArtifactCache::new(&path);

        let outcome = cache.reconcile(&sample()).await.unwrap();

        assert!(outcome.was_written());
        assert!(!std::fs::read_to_string(&path).unwrap().contains("string"));
    }

    #[tokio::test]
    async fn test_empty_set_declares_never() {
        let temp = TempDir::new().unwrap();
        let cache = ArtifactCache::new(temp.path().join("icons.d.ts"));

        cache.reconcile(&[] as &[IconCollection]).await.unwrap();

        let text = std::fs::read_to_string(cache.path()).unwrap();
        assert!(text.contains("export type Icon = never;"));
    }

    #[tokio::test]
    async fn test_custom_default_pack_and_module() {
        let temp = TempDir::new().unwrap();
        let cache = ArtifactCache::new(temp.path().join("icons.d.ts"))
            .with_default_pack("mdi")
            .with_module_id("virtual:icons");

        cache.reconcile(&sample()).await.unwrap();

        let text = std::fs::read_to_string(cache.path()).unwrap();
        assert!(text.contains("declare module 'virtual:icons'"));
        assert!(text.contains("| \"home\""));
        assert!(text.contains("| \"local:logo\""));
    }

    #[tokio::test]
    async fn test_status_does_not_write() {
        let temp = TempDir::new().unwrap();
        let cache = ArtifactCache::new(temp.path().join("icons.d.ts"));

        let status = cache.status(&sample()).await;
        assert!(matches!(status, ArtifactStatus::Stale { previous: None, .. }));
        assert!(!cache.path().exists());

        cache.reconcile(&sample()).await.unwrap();
        assert!(cache.status(&sample()).await.is_fresh());
    }

    #[tokio::test]
    async fn test_unwritable_target_propagates() {
        let temp = TempDir::new().unwrap();
        // Parent "directory" is a regular file
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let cache = ArtifactCache::new(blocker.join("icons.d.ts"));

        let err = cache.reconcile(&sample()).await.unwrap_err();

        assert!(matches!(err, IconpackError::ArtifactWrite { .. }));
    }

    #[test]
    fn test_from_config_resolves_against_root() {
        let config = IntegrationConfig::new("/project").with_artifact_path("types/icons.d.ts");

        let cache = ArtifactCache::from_config(&config);

        assert_eq!(cache.path(), Path::new("/project/types/icons.d.ts"));
    }

    #[tokio::test]
    async fn test_existing_directory_is_reused() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join(".iconpack")).unwrap();
        let cache = ArtifactCache::new(temp.path().join(".iconpack/icons.d.ts"));

        assert!(cache.reconcile(&sample()).await.unwrap().was_written());
    }
}
