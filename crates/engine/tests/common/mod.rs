//! Shared helpers for engine integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use modegrid_engine::api::UiBridge;
use modegrid_engine::config::GridConfig;
use modegrid_engine::infrastructure::memory::{InMemoryHost, SceneDocument};
use modegrid_engine::App;

/// Load a JSON fixture from the `test_data` directory.
pub fn load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> T {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path);
    let content = std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

/// A bridge over an in-memory host seeded from a fixture
pub struct Harness {
    pub host: Arc<InMemoryHost>,
    pub bridge: UiBridge,
}

impl Harness {
    pub fn new(fixture: &str) -> Self {
        Self::with_config(fixture, GridConfig::default())
    }

    pub fn with_config(fixture: &str, config: GridConfig) -> Self {
        let document: SceneDocument = load_fixture(fixture);
        let host = Arc::new(InMemoryHost::new(document));
        let app = App::new(host.clone(), host.clone(), config);
        Self {
            host,
            bridge: UiBridge::new(Arc::new(app)),
        }
    }

    pub fn document(&self) -> SceneDocument {
        self.host.snapshot().unwrap()
    }
}

// Well-known ids in card_scene.json
pub const THEME: &str = "6d0f2a10-1c1e-4a51-9d43-0a7c1b0e0001";
pub const DYNAMIC_TYPE: &str = "6d0f2a10-1c1e-4a51-9d43-0a7c1b0e0002";
pub const DENSITY: &str = "6d0f2a10-1c1e-4a51-9d43-0a7c1b0e0003";
pub const DARK: &str = "6d0f2a10-1c1e-4a51-9d43-0a7c1b0e0102";
pub const CARD: &str = "f1a7d9e0-3b2c-4d5e-8f90-1a2b3c4d0001";
pub const CAPTION: &str = "f1a7d9e0-3b2c-4d5e-8f90-1a2b3c4d0003";
