/*
 *  storage.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Persistence of the adjustable settings
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::menu::settings::Settings;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("settings I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("settings YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Where saved settings live between runs
pub trait SettingsStore {
    /// Saved settings, or `None` if nothing was saved yet
    fn load(&self) -> Result<Option<Settings>, StorageError>;

    fn save(&mut self, settings: &Settings) -> Result<(), StorageError>;
}

/// Settings as a small YAML document on disk
#[derive(Debug, Clone)]
pub struct YamlSettingsStore {
    path: PathBuf,
}

impl YamlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io { path: self.path.clone(), source }
    }
}

impl SettingsStore for YamlSettingsStore {
    fn load(&self) -> Result<Option<Settings>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no saved settings at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };
        let settings: Settings = serde_yaml::from_str(&text)?;
        Ok(Some(settings))
    }

    fn save(&mut self, settings: &Settings) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let text = serde_yaml::to_string(settings)?;

        // write beside, then swap in
        let tmp = self.path.with_extension("yaml.tmp");
        fs::write(&tmp, text).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        info!("Settings saved to {}", self.path.display());
        Ok(())
    }
}

/// Keeps settings for the life of the process; `--headless` runs and tests use it
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    saved: Option<Settings>,
    saves: usize,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(settings: Settings) -> Self {
        Self { saved: Some(settings), saves: 0 }
    }

    /// How many times `save` was called
    pub fn saves(&self) -> usize {
        self.saves
    }

    pub fn saved(&self) -> Option<Settings> {
        self.saved
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Option<Settings>, StorageError> {
        Ok(self.saved)
    }

    fn save(&mut self, settings: &Settings) -> Result<(), StorageError> {
        self.saves += 1;
        self.saved = Some(*settings);
        Ok(())
    }
}

/// Headless runs keep settings in memory so they never touch the card
pub fn open_store(headless: bool, path: impl Into<PathBuf>) -> Box<dyn SettingsStore> {
    if headless {
        info!("Headless: settings kept in memory");
        Box::new(MemorySettingsStore::new())
    } else {
        let store = YamlSettingsStore::new(path);
        info!("Settings file {}", store.path().display());
        Box::new(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lightpainter-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir.join("state").join("settings.yaml")
    }

    #[test]
    fn test_yaml_store_missing_file_is_none() {
        let store = YamlSettingsStore::new(scratch_file("missing"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_yaml_store_save_then_load() {
        let path = scratch_file("roundtrip");
        let mut store = YamlSettingsStore::new(&path);
        let settings = Settings { brightness: 10, speed: 20, delay: 30 };
        store.save(&settings).unwrap();

        let reopened = YamlSettingsStore::new(&path);
        assert_eq!(reopened.load().unwrap(), Some(settings));
        assert!(!path.with_extension("yaml.tmp").exists());

        if let Some(dir) = path.parent().and_then(Path::parent) {
            fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn test_yaml_store_rejects_garbage() {
        let path = scratch_file("garbage");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "brightness: [not, a, number]\n").unwrap();

        let store = YamlSettingsStore::new(&path);
        assert!(matches!(store.load(), Err(StorageError::Yaml(_))));

        if let Some(dir) = path.parent().and_then(Path::parent) {
            fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemorySettingsStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save(&Settings::default()).unwrap();
        store.save(&Settings::default()).unwrap();
        assert_eq!(store.saves(), 2);
        assert_eq!(store.saved(), Some(Settings::default()));
    }

    #[test]
    fn test_headless_store_leaves_disk_alone() {
        let path = scratch_file("headless");
        let mut store = open_store(true, &path);
        store.save(&Settings::default()).unwrap();
        assert_eq!(store.load().unwrap(), Some(Settings::default()));
        assert!(!path.exists());

        let mut store = open_store(false, &path);
        store.save(&Settings::default()).unwrap();
        assert!(path.exists());

        if let Some(dir) = path.parent().and_then(Path::parent) {
            fs::remove_dir_all(dir).ok();
        }
    }
}
