/*
 *  menu/catalog.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  File catalog - the images available for painting
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

use log::{debug, info, warn};

/// Ordered, read-only list of image file names
pub trait FileCatalog {
    fn count(&self) -> usize;

    fn name_at(&self, index: usize) -> Option<&str>;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Re-read the backing store, if there is one
    fn refresh(&mut self) {}
}

impl FileCatalog for Vec<String> {
    fn count(&self) -> usize {
        self.len()
    }

    fn name_at(&self, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }
}

/// Regular files of one directory, sorted by name.
///
/// This is the card the web interface uploads to. A missing or unreadable
/// directory reads as an empty catalog.
#[derive(Debug, Clone)]
pub struct DirCatalog {
    root: PathBuf,
    names: Vec<String>,
}

impl DirCatalog {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let mut catalog = Self { root: root.into(), names: Vec::new() };
        catalog.refresh();
        catalog
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn scan(root: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) if !name.starts_with('.') => names.push(name),
                Ok(_) => {}
                Err(raw) => debug!("Skipping non UTF-8 file name {:?}", raw),
            }
        }
        names.sort();
        Ok(names)
    }
}

impl FileCatalog for DirCatalog {
    fn count(&self) -> usize {
        self.names.len()
    }

    fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    fn refresh(&mut self) {
        match Self::scan(&self.root) {
            Ok(names) => {
                if names != self.names {
                    info!("Catalog {}: {} file(s)", self.root.display(), names.len());
                }
                self.names = names;
            }
            Err(e) => {
                warn!("Cannot list {}: {}", self.root.display(), e);
                self.names.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lightpainter-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_vec_catalog() {
        let names = vec!["a.bmp".to_string(), "b.bmp".to_string()];
        assert_eq!(names.count(), 2);
        assert_eq!(names.name_at(1), Some("b.bmp"));
        assert_eq!(names.name_at(2), None);
        assert!(!FileCatalog::is_empty(&names));
    }

    #[test]
    fn test_dir_catalog_lists_sorted_files() {
        let dir = scratch_dir("catalog");
        fs::write(dir.join("zebra.bmp"), b"z").unwrap();
        fs::write(dir.join("apple.bmp"), b"a").unwrap();
        fs::write(dir.join(".hidden"), b"h").unwrap();
        fs::create_dir(dir.join("subdir")).unwrap();

        let mut catalog = DirCatalog::open(&dir);
        assert_eq!(catalog.count(), 2);
        assert_eq!(catalog.name_at(0), Some("apple.bmp"));
        assert_eq!(catalog.name_at(1), Some("zebra.bmp"));

        fs::write(dir.join("mango.bmp"), b"m").unwrap();
        catalog.refresh();
        assert_eq!(catalog.name_at(1), Some("mango.bmp"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let catalog = DirCatalog::open("/nonexistent/lightpainter/images");
        assert!(catalog.is_empty());
    }
}
