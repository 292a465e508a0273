use crate::config::Config;
use crate::ports::outbound::token_store::{StorageError, TokenStore};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const TOKEN_FILE: &str = "token";

pub struct FileSystem {
    path: PathBuf,
}

impl FileSystem {
    #[must_use]
    pub fn create(config: &Config) -> Self {
        Self::at(config.data_dir.join(TOKEN_FILE))
    }

    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TokenStore for FileSystem {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                (!token.is_empty()).then(|| token.to_string())
            }
            Err(why) if why.kind() == ErrorKind::NotFound => None,
            Err(why) => {
                log::warn!("Error reading token from {:?} {why:?}", self.path);
                None
            }
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|why| {
                StorageError::new(format!("Unable to create {}: {why}", dir.display()))
            })?;
        }

        fs::write(&self.path, token).map_err(|why| {
            StorageError::new(format!("Unable to write {}: {why}", self.path.display()))
        })
    }

    fn remove(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(why) if why.kind() == ErrorKind::NotFound => Ok(()),
            Err(why) => Err(StorageError::new(format!(
                "Unable to remove {}: {why}",
                self.path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystem::at(dir.path().join("token"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystem::at(dir.path().join("nested").join("token"));

        store.save("test-token").unwrap();

        assert_eq!(store.load().as_deref(), Some("test-token"));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystem::at(dir.path().join("token"));

        store.save("old-token").unwrap();
        store.save("new-token").unwrap();

        assert_eq!(store.load().as_deref(), Some("new-token"));
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        let store = FileSystem::at(&path);

        store.save("test-token").unwrap();
        store.remove().unwrap();

        assert!(!path.exists());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_remove_missing_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystem::at(dir.path().join("token"));
        assert!(store.remove().is_ok());
    }

    #[test]
    fn test_blank_file_is_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "  \n").unwrap();

        assert_eq!(FileSystem::at(&path).load(), None);
    }

    #[test]
    fn test_create_uses_data_dir() {
        let config = Config::from_lookup(|var| {
            (var == "KEEPCUT_DATA_DIR").then(|| String::from("/var/lib/keepcut"))
        })
        .unwrap();

        assert_eq!(
            FileSystem::create(&config).path,
            PathBuf::from("/var/lib/keepcut/token")
        );
    }
}
