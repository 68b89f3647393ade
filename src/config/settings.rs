//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across threads.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// ExtractionMode
// ---------------------------------------------------------------------------

/// Selects which extraction strategy turns a transcript into order candidates.
///
/// | Variant    | Pipeline                                        | Needs LLM |
/// |------------|-------------------------------------------------|-----------|
/// | Transcript | transcript → segment heuristics → fuzzy match   | No        |
/// | Assisted   | transcript → LLM JSON reply → fuzzy match       | Yes       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionMode {
    /// Direct transcript parsing — segments below the match threshold are
    /// silently dropped.
    Transcript,
    /// LLM-assisted parsing — unmatched item names are kept raw at price 0.
    Assisted,
}

impl Default for ExtractionMode {
    fn default() -> Self {
        Self::Transcript
    }
}

// ---------------------------------------------------------------------------
// MenuEntry
// ---------------------------------------------------------------------------

/// One configured menu item: canonical name and unit price.
///
/// The configured list is ordered; when the same name appears twice the
/// most recently listed price wins (see `MenuCatalog`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Item name as spoken/displayed; lowercased on catalog ingest.
    pub name: String,
    /// Unit price in whole currency units.
    pub price: u32,
}

impl MenuEntry {
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// The stock nine-item menu used when no menu is configured.
fn default_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("chicken burger", 50),
        MenuEntry::new("veg momos", 60),
        MenuEntry::new("french fries", 65),
        MenuEntry::new("veg sandwich", 50),
        MenuEntry::new("chicken juicy burger", 40),
        MenuEntry::new("veg pizza", 80),
        MenuEntry::new("burrito", 70),
        MenuEntry::new("paneer momos", 65),
        MenuEntry::new("vadapav", 45),
    ]
}

// ---------------------------------------------------------------------------
// MatchConfig
// ---------------------------------------------------------------------------

/// Fuzzy-match acceptance thresholds (0–100) per extraction variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Transcript variant: segments scoring below this are dropped.
    pub transcript_threshold: u8,
    /// Assisted variant: item names scoring below this keep their raw text.
    ///
    /// Looser than the transcript threshold because assisted inference is
    /// assumed higher-precision on item identity and lower-precision on the
    /// exact menu wording.
    pub assisted_threshold: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            transcript_threshold: 40,
            assisted_threshold: 50,
        }
    }
}

// ---------------------------------------------------------------------------
// TranscriberConfig
// ---------------------------------------------------------------------------

/// Settings for the external speech-to-text collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriberConfig {
    /// Base URL of the transcription service; WAV audio is POSTed to
    /// `{base_url}/transcribe`.
    pub base_url: String,
    /// Maximum seconds to wait for a transcription before timing out.
    pub timeout_secs: u64,
}

impl Default for TranscriberConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            timeout_secs: 60,
        }
    }
}

// ---------------------------------------------------------------------------
// InferenceConfig
// ---------------------------------------------------------------------------

/// Settings for the item-inference collaborator (Assisted mode only).
///
/// Any OpenAI-compatible `/v1/chat/completions` endpoint works — Ollama
/// (OpenAI mode), OpenAI, Groq, LM Studio, vLLM, etc.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the API endpoint.
    ///
    /// - Ollama default: `http://localhost:11434`
    /// - OpenAI: `https://api.openai.com`
    pub base_url: String,
    /// API key — `None` for local providers such as Ollama.
    pub api_key: Option<String>,
    /// Model identifier sent to the API (e.g. `"gemma3:1b"`, `"gpt-4o-mini"`).
    pub model: String,
    /// Sampling temperature (0.0 – 1.0).  Lower = more deterministic.
    pub temperature: f32,
    /// Maximum seconds to wait for a reply before timing out.
    pub timeout_secs: u64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".into(),
            api_key: None,
            model: "gemma3:1b".into(),
            temperature: 0.2,
            timeout_secs: 30,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use quickorder::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Selected extraction strategy.
    pub mode: ExtractionMode,
    /// Ordered menu entries; loaded once at startup into the `MenuCatalog`.
    pub menu: Vec<MenuEntry>,
    /// Fuzzy-match thresholds.
    pub matching: MatchConfig,
    /// Transcription collaborator settings.
    pub transcriber: TranscriberConfig,
    /// Item-inference collaborator settings.
    pub inference: InferenceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: ExtractionMode::default(),
            menu: default_menu(),
            matching: MatchConfig::default(),
            transcriber: TranscriberConfig::default(),
            inference: InferenceConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// (first-run scenario) so callers never need to special-case a missing
    /// file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns `true` when no `settings.toml` file exists yet.
    pub fn is_first_run() -> bool {
        !AppPaths::new().settings_file.exists()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Verify that a default `AppConfig` can be serialised to TOML and
    /// deserialised back without any data loss.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(original.mode, loaded.mode);
        assert_eq!(original.menu, loaded.menu);
        assert_eq!(original.matching, loaded.matching);
        assert_eq!(original.transcriber, loaded.transcriber);
        assert_eq!(original.inference.base_url, loaded.inference.base_url);
        assert_eq!(original.inference.api_key, loaded.inference.api_key);
        assert_eq!(original.inference.model, loaded.inference.model);
        assert_eq!(original.inference.timeout_secs, loaded.inference.timeout_secs);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        let default = AppConfig::default();

        assert_eq!(config.mode, default.mode);
        assert_eq!(config.menu, default.menu);
        assert_eq!(config.matching, default.matching);
    }

    /// Verify the documented default values.
    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.mode, ExtractionMode::Transcript);
        assert_eq!(cfg.menu.len(), 9);
        assert_eq!(cfg.menu[0], MenuEntry::new("chicken burger", 50));
        assert_eq!(cfg.menu[1], MenuEntry::new("veg momos", 60));
        assert_eq!(cfg.matching.transcript_threshold, 40);
        assert_eq!(cfg.matching.assisted_threshold, 50);
        assert_eq!(cfg.transcriber.base_url, "http://localhost:8000");
        assert_eq!(cfg.inference.base_url, "http://localhost:11434");
        assert_eq!(cfg.inference.model, "gemma3:1b");
        assert!(cfg.inference.api_key.is_none());
    }

    /// Verify that modified non-default values survive a round trip.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.mode = ExtractionMode::Assisted;
        cfg.menu.push(MenuEntry::new("masala dosa", 55));
        cfg.matching.transcript_threshold = 60;
        cfg.transcriber.base_url = "https://stt.example.com".into();
        cfg.inference.api_key = Some("sk-test".into());
        cfg.inference.model = "gpt-4o-mini".into();

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.mode, ExtractionMode::Assisted);
        assert_eq!(loaded.menu.last(), Some(&MenuEntry::new("masala dosa", 55)));
        assert_eq!(loaded.matching.transcript_threshold, 60);
        assert_eq!(loaded.transcriber.base_url, "https://stt.example.com");
        assert_eq!(loaded.inference.api_key, Some("sk-test".into()));
        assert_eq!(loaded.inference.model, "gpt-4o-mini");
    }
}
