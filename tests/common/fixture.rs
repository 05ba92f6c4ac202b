//! Temp-directory backed store fixture

use std::path::PathBuf;
use tempfile::TempDir;
use vocabtape::storage::FileStore;
use vocabtape::{App, Config, Store};

/// JSON array of `rows` objects with `fr`, `de` and `en` fields.
pub fn deck_json(rows: usize) -> String {
    let rows: Vec<String> = (0..rows)
        .map(|i| format!(r#"{{"fr": "fr-{i}", "de": "de-{i}", "en": "en-{i}"}}"#))
        .collect();
    format!("[{}]", rows.join(", "))
}

/// A state directory that lives as long as the fixture.
pub struct TestFixture {
    dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Result<Self, std::io::Error> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn state_dir(&self) -> PathBuf {
        self.dir.path().join("storage")
    }

    pub fn file_store(&self) -> FileStore {
        FileStore::new(self.state_dir())
    }

    /// A fresh store over the fixture directory, as after a restart.
    pub fn store(&self) -> Store {
        Store::load(Box::new(self.file_store()))
    }

    pub fn app(&self) -> App {
        App::new(Config::default(), self.store())
    }
}
