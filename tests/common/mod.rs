//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use catalog_indexer::IndexConfig;
use tempfile::TempDir;

/// Builder for creating test catalog data roots (`aartis/`, `varta/84/`, `varta/252/`)
pub struct CatalogDirBuilder {
    temp_dir: TempDir,
}

impl CatalogDirBuilder {
    /// Create a new builder with an empty data root
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the data root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a raw file into a folder below the root, creating the folder if needed
    pub fn with_file(self, folder: &str, filename: &str, content: &str) -> Self {
        let dir = self.temp_dir.path().join(folder);
        fs::create_dir_all(&dir).expect("Failed to create collection dir");
        fs::write(dir.join(filename), content).expect("Failed to write content file");
        self
    }

    /// Create an empty folder below the root
    pub fn with_folder(self, folder: &str) -> Self {
        fs::create_dir_all(self.temp_dir.path().join(folder)).expect("Failed to create dir");
        self
    }

    /// Add an aarti file named `<id>.json`
    pub fn with_aarti(self, aarti: AartiBuilder) -> Self {
        let filename = format!("{}.json", aarti.id);
        self.with_file("aartis", &filename, &aarti.to_json())
    }

    /// Add a prasang file to `varta/<label>/`
    pub fn with_prasang(self, label: &str, filename: &str, prasang: PrasangBuilder) -> Self {
        self.with_file(&format!("varta/{}", label), filename, &prasang.to_json())
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for CatalogDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for aarti content files
pub struct AartiBuilder {
    id: String,
    title: String,
    artist: String,
    category: String,
    subtitle: Option<String>,
}

impl AartiBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: format!("Title {}", id),
            artist: "Test Artist".to_string(),
            category: "Morning".to_string(),
            subtitle: None,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn to_json(&self) -> String {
        let mut value = serde_json::json!({
            "id": self.id,
            "title": self.title,
            "artist": self.artist,
            "category": self.category,
            "lyrics": ["line one", "line two"],
        });
        if let Some(subtitle) = &self.subtitle {
            value["subtitle"] = serde_json::Value::String(subtitle.clone());
        }
        value.to_string()
    }
}

/// Builder for prasang (grouped child) content files
pub struct PrasangBuilder {
    title: String,
    vaishnav_name: Option<String>,
    bio: Option<String>,
}

impl PrasangBuilder {
    pub fn new(title: &str) -> Self {
        Self { title: title.to_string(), vaishnav_name: None, bio: None }
    }

    pub fn vaishnav_name(mut self, name: &str) -> Self {
        self.vaishnav_name = Some(name.to_string());
        self
    }

    pub fn bio(mut self, bio: &str) -> Self {
        self.bio = Some(bio.to_string());
        self
    }

    pub fn to_json(&self) -> String {
        let mut value = serde_json::json!({ "title": self.title, "content": "..." });
        if let Some(name) = &self.vaishnav_name {
            value["vaishnavName"] = serde_json::Value::String(name.clone());
        }
        if let Some(bio) = &self.bio {
            value["bio"] = serde_json::Value::String(bio.clone());
        }
        value.to_string()
    }
}

/// Standard config rooted at a test directory
pub fn config_for(root: &Path) -> IndexConfig {
    IndexConfig::for_root(root)
}

/// Parse a written index file as untyped JSON
pub fn read_json(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("Failed to read index file");
    serde_json::from_str(&content).expect("Index file is not valid JSON")
}

/// Realistic data root with all three collections populated
pub fn realistic_catalog_dir() -> TempDir {
    CatalogDirBuilder::new()
        .with_aarti(AartiBuilder::new("a10").title("Shayan"))
        .with_aarti(AartiBuilder::new("a2").title("Shringar").subtitle("Rajbhog"))
        .with_aarti(AartiBuilder::new("a1").title("Mangla"))
        .with_prasang(
            "84",
            "v84_1_p1.json",
            PrasangBuilder::new("First meeting").vaishnav_name("Damodardas").bio("Bio one"),
        )
        .with_prasang("84", "v84_1_p2.json", PrasangBuilder::new("Second meeting"))
        .with_prasang("84", "v84_2_p1.json", PrasangBuilder::new("Another story"))
        .with_prasang("252", "v252_1_p1.json", PrasangBuilder::new("Story").vaishnav_name("Gopaldas"))
        .build()
}
