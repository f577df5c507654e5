//! Directory-backed key-value storage.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

use crate::board::ports::{StorageError, StorageResult, TaskStorage};

const VALUE_EXTENSION: &str = "json";

/// Storage keeping one `<key>.json` file per key inside a single directory.
///
/// Access is capability-scoped to the opened directory; keys that would
/// escape it are rejected.
#[derive(Debug)]
pub struct DirectoryStorage {
    dir: Dir,
}

impl DirectoryStorage {
    /// Opens `path`, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] when the directory cannot be created
    /// or opened.
    pub fn open(path: &Utf8Path) -> StorageResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(|err| StorageError::read(path.as_str(), err))?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(|err| StorageError::read(path.as_str(), err))?;
        Ok(Self { dir })
    }

    /// Wraps an already opened directory capability.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

fn value_file(key: &str) -> Result<Utf8PathBuf, std::io::Error> {
    let is_plain = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
    if !is_plain {
        return Err(std::io::Error::new(
            ErrorKind::InvalidInput,
            format!("storage key '{key}' is not a plain file name"),
        ));
    }
    Ok(Utf8PathBuf::from(format!("{key}.{VALUE_EXTENSION}")))
}

impl TaskStorage for DirectoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let file = value_file(key).map_err(|err| StorageError::read(key, err))?;
        match self.dir.read_to_string(&file) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::read(key, err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let file = value_file(key).map_err(|err| StorageError::write(key, err))?;
        let staging = Utf8PathBuf::from(format!(".{file}.tmp"));
        self.dir
            .write(&staging, value)
            .map_err(|err| StorageError::write(key, err))?;
        // Rename within the directory so readers never see a partial value.
        self.dir
            .rename(&staging, &self.dir, &file)
            .map_err(|err| StorageError::write(key, err))
    }
}
