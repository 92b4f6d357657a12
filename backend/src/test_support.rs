//! Test utilities for the backend crate.
//!
//! Shared helpers for unit tests (in `src/`) and integration tests (in
//! `tests/`).

use std::sync::Arc;

use mockable::DefaultClock;

use crate::domain::{Portal, RecordStore};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::InMemoryStore;

/// A [`RecordStore`] over a fresh in-memory collection store.
#[must_use]
pub fn service_records() -> RecordStore {
    RecordStore::new(Arc::new(InMemoryStore::new()))
}

/// HTTP state over an in-memory portal, for handler tests.
#[must_use]
pub fn test_state() -> HttpState {
    HttpState::new(Portal::new(service_records(), Arc::new(DefaultClock)))
}

pub mod cap_fs {
    //! Capability-safe filesystem helpers for tests.
    //!
    //! The backend forbids direct `std::fs` calls. These helpers cover the
    //! read/list/existence operations tests need, built on
    //! `cap_std::fs::Dir`.

    use std::ffi::OsString;
    use std::io;
    use std::path::Path;

    use cap_std::{ambient_authority, fs::Dir};

    /// Read a UTF-8 text file through `cap_std`.
    pub fn read_file_to_string(path: &Path) -> io::Result<String> {
        let (parent, file_name) = parent_and_file_name(path)?;
        let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
        directory.read_to_string(Path::new(&file_name))
    }

    /// Write bytes to a file through `cap_std`.
    pub fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
        let (parent, file_name) = parent_and_file_name(path)?;
        let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
        directory.write(Path::new(&file_name), contents)
    }

    /// Return true when `path` exists, false when it does not.
    pub fn path_exists(path: &Path) -> bool {
        let Ok((parent, file_name)) = parent_and_file_name(path) else {
            return false;
        };
        let Ok(directory) = Dir::open_ambient_dir(parent, ambient_authority()) else {
            return false;
        };
        directory.exists(Path::new(&file_name))
    }

    /// File names directly under `path`, skipping entries whose names are
    /// not valid UTF-8.
    pub fn list_file_names(path: &Path) -> io::Result<Vec<String>> {
        let directory = Dir::open_ambient_dir(path, ambient_authority())?;
        let mut names = Vec::new();
        for entry in directory.entries()? {
            let entry = entry?;
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }

    fn parent_and_file_name(path: &Path) -> io::Result<(&Path, OsString)> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let file_name = path.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "path must include a file or directory name",
            )
        })?;
        Ok((parent, file_name.to_os_string()))
    }
}
