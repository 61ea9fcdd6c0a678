use crate::application::ports::KeyValueStore;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// One JSON file per key under a namespace directory.
///
/// Each write goes to its own temp file in the same directory, which is then
/// renamed over the target. A reader sees either the previous value or the new
/// one. Concurrent writers are not coordinated; the last rename wins.
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

fn storage_error(path: &Path, err: std::io::Error) -> AppError {
    AppError::Storage(format!("{}: {err}", path.display()))
}

fn write_atomically(root: &Path, final_path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    std::fs::create_dir_all(root).map_err(|err| storage_error(root, err))?;
    let mut tmp = NamedTempFile::new_in(root).map_err(|err| storage_error(root, err))?;
    tmp.write_all(bytes)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|err| storage_error(tmp.path(), err))?;
    // The temp file is removed on drop if the rename fails; the target is never touched.
    tmp.persist(final_path)
        .map_err(|err| storage_error(final_path, err.error))?;
    Ok(())
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn store(&self, key: &str, value: &str) -> Result<(), AppError> {
        let root = self.root.clone();
        let final_path = self.path_for(key);
        let bytes = value.as_bytes().to_vec();
        debug!("FileKeyValueStore: writing {:?}", final_path);

        tokio::task::spawn_blocking(move || write_atomically(&root, &final_path, &bytes))
            .await
            .map_err(|err| AppError::Internal(format!("storage write task failed: {err}")))?
    }

    async fn retrieve(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_error(&path, err)),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_error(&path, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn store_retrieve_and_overwrite() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("ns"));

        assert!(store.retrieve("k").await.unwrap().is_none());
        store.store("k", "[1]").await.unwrap();
        store.store("k", "[2]").await.unwrap();
        assert_eq!(store.retrieve("k").await.unwrap().as_deref(), Some("[2]"));
        assert_eq!(file_names(&dir.path().join("ns")), vec!["k.json".to_string()]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_stores_never_lose_the_file() {
        let dir = tempdir().unwrap();
        let store = Arc::new(FileKeyValueStore::new(dir.path()));
        let large = serde_json::to_string(&(0..20_000).collect::<Vec<u32>>()).unwrap();

        for round in 0..100 {
            let first = {
                let store = Arc::clone(&store);
                let value = large.clone();
                tokio::spawn(async move { store.store("rb_drafts", &value).await })
            };
            let second = {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.store("rb_drafts", "[2]").await })
            };
            first.await.unwrap().unwrap();
            second.await.unwrap().unwrap();

            let stored = store
                .retrieve("rb_drafts")
                .await
                .unwrap()
                .unwrap_or_else(|| panic!("file missing after round {round}"));
            assert!(stored == large || stored == "[2]", "torn value in round {round}");
        }
        assert_eq!(file_names(dir.path()), vec!["rb_drafts.json".to_string()]);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());
        store.store("k", "x").await.unwrap();
        store.delete("k").await.unwrap();
        store.delete("k").await.unwrap();
        assert!(store.retrieve("k").await.unwrap().is_none());
    }
}
