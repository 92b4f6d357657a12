//! File-backed collection store.
//!
//! Each collection lives at `<data_dir>/<key>.json`. Writes go to a staged
//! file first and are moved into place with remove-then-rename, so a crash
//! mid-write never leaves a half document under the final name.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use uuid::Uuid;

use crate::domain::ports::{CollectionKey, CollectionStore, CollectionStoreError};

/// Collection store over a capability-scoped directory.
pub struct JsonFileStore {
    dir: Arc<Dir>,
}

impl JsonFileStore {
    /// Open (creating if needed) the data directory.
    pub fn open(data_dir: &Path) -> io::Result<Self> {
        Dir::create_ambient_dir_all(data_dir, ambient_authority())?;
        let dir = Dir::open_ambient_dir(data_dir, ambient_authority())?;
        Ok(Self { dir: Arc::new(dir) })
    }

    fn file_name(key: CollectionKey) -> PathBuf {
        PathBuf::from(format!("{key}.json"))
    }
}

#[async_trait]
impl CollectionStore for JsonFileStore {
    async fn read(&self, key: CollectionKey) -> Result<Option<String>, CollectionStoreError> {
        match self.dir.read_to_string(Self::file_name(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(CollectionStoreError::read(key.as_str(), err.to_string())),
        }
    }

    async fn write(&self, key: CollectionKey, json: &str) -> Result<(), CollectionStoreError> {
        let staged = PathBuf::from(format!(".tmp-{key}-{}.json", Uuid::new_v4().simple()));
        let write_error = |err: io::Error| CollectionStoreError::write(key.as_str(), err.to_string());

        self.dir.write(&staged, json.as_bytes()).map_err(write_error)?;

        let result = replace_file(&self.dir, &staged, &Self::file_name(key)).map_err(write_error);
        if result.is_err() {
            let _cleanup_result = self.dir.remove_file(&staged);
        }
        result
    }
}

fn replace_file(dir: &Dir, from: &Path, to: &Path) -> io::Result<()> {
    match dir.remove_file(to) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(from, dir, to)
}
