//! Flat-file data access.
//!
//! Every call reads the files from disk again; nothing is cached between
//! requests, so edits to the JSON files show up on the next page load.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::config::DataConfig;
use crate::models::{Film, Picture, Theme};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DataError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// Read and parse one JSON file.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let raw = tokio::fs::read(path).await.map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = raw.len(), "Read data file");

    serde_json::from_slice(&raw).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse each file in order. The result is index-aligned with
/// `paths`; the first failure aborts the whole load.
pub async fn load_json_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Value>, DataError> {
    let mut values = Vec::with_capacity(paths.len());
    for path in paths {
        values.push(read_json(path.as_ref()).await?);
    }
    Ok(values)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFile {
    Films,
    Pictures,
    /// Themes as curated, without film membership.
    Themes,
    /// Themes augmented with `films` by the theme-films join.
    ThemeFilms,
}

impl DataFile {
    pub const ALL: [Self; 4] = [Self::Films, Self::Pictures, Self::Themes, Self::ThemeFilms];
}

/// Locations of the data files, resolved against a root directory.
#[derive(Debug, Clone)]
pub struct DataStore {
    root: PathBuf,
    films_file: String,
    pictures_file: String,
    themes_file: String,
    theme_films_file: String,
}

impl DataStore {
    #[must_use]
    pub fn new(config: &DataConfig) -> Self {
        Self {
            root: PathBuf::from(&config.data_dir),
            films_file: config.films_file.clone(),
            pictures_file: config.pictures_file.clone(),
            themes_file: config.themes_file.clone(),
            theme_films_file: config.theme_films_file.clone(),
        }
    }

    #[must_use]
    pub fn path(&self, file: DataFile) -> PathBuf {
        let name = match file {
            DataFile::Films => &self.films_file,
            DataFile::Pictures => &self.pictures_file,
            DataFile::Themes => &self.themes_file,
            DataFile::ThemeFilms => &self.theme_films_file,
        };
        self.root.join(name)
    }

    pub async fn films(&self) -> Result<Vec<Film>, DataError> {
        read_json(&self.path(DataFile::Films)).await
    }

    pub async fn pictures(&self) -> Result<Vec<Picture>, DataError> {
        read_json(&self.path(DataFile::Pictures)).await
    }

    pub async fn themes(&self) -> Result<Vec<Theme>, DataError> {
        read_json(&self.path(DataFile::Themes)).await
    }

    pub async fn theme_films(&self) -> Result<Vec<Theme>, DataError> {
        read_json(&self.path(DataFile::ThemeFilms)).await
    }

    /// Untyped load of several files, index-aligned with `files`.
    pub async fn load_raw(&self, files: &[DataFile]) -> Result<Vec<Value>, DataError> {
        let paths: Vec<PathBuf> = files.iter().map(|f| self.path(*f)).collect();
        load_json_files(&paths).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store_in(dir: &Path) -> DataStore {
        DataStore::new(&DataConfig {
            data_dir: dir.display().to_string(),
            ..DataConfig::default()
        })
    }

    #[tokio::test]
    async fn test_load_json_files_is_index_aligned() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), r#"[1, 2]"#).unwrap();
        fs::write(dir.path().join("b.json"), r#"{"k": "v"}"#).unwrap();

        let values = load_json_files(&[dir.path().join("b.json"), dir.path().join("a.json")])
            .await
            .unwrap();

        assert_eq!(values.len(), 2);
        assert_eq!(values[0]["k"], "v");
        assert_eq!(values[1][1], 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let err = store.films().await.unwrap_err();
        assert!(matches!(err, DataError::Read { .. }));
        assert!(err.path().ends_with("filmdata.json"));
    }

    #[tokio::test]
    async fn test_malformed_file_aborts_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("filmdata.json"), "[]").unwrap();
        fs::write(dir.path().join("pics.json"), "[{").unwrap();
        let store = store_in(dir.path());

        let err = store
            .load_raw(&[DataFile::Films, DataFile::Pictures])
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
        assert!(err.path().ends_with("pics.json"));
    }

    #[tokio::test]
    async fn test_typed_pictures() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("pics.json"),
            r#"[{"type": "poster", "film": "Laura", "origin": "Belgian"}]"#,
        )
        .unwrap();

        let pictures = store_in(dir.path()).pictures().await.unwrap();
        assert_eq!(pictures.len(), 1);
        assert!(pictures[0].is_poster());
    }
}
