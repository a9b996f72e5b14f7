use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_u16(profile: &str, key: &str, default: u16) -> u16 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_usize(profile: &str, key: &str, default: usize) -> usize {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_bool(profile: &str, key: &str, default: bool) -> bool {
    match profiled_env_opt(profile, key) {
        Some(v) => matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        None => default,
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub server: ServerConfig,
    pub ocr: OcrConfig,
    pub summarize: SummarizeConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `DOCSUM_PROFILE` env var. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("DOCSUM_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            server: ServerConfig::from_env_profiled(p),
            ocr: OcrConfig::from_env_profiled(p),
            summarize: SummarizeConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  server:     {}:{}, static_dir={}, max_upload={}MB",
            self.server.host,
            self.server.port,
            self.server.static_dir.display(),
            self.server.max_upload_mb
        );
        tracing::info!(
            "  ocr:        enabled={}, tesseract={}, pdftoppm={}, lang={}, page_limit={}",
            self.ocr.enabled,
            self.ocr.tesseract_bin,
            self.ocr.pdftoppm_bin,
            self.ocr.language,
            self.ocr.page_limit
        );
        tracing::info!(
            "  summarize:  default_length={}, fallback_lines={}",
            self.summarize.default_length,
            self.summarize.fallback_lines
        );
    }

    /// Return a view safe for API responses.
    pub fn redacted_summary(&self) -> serde_json::Value {
        serde_json::json!({
            "profile": self.profile_label(),
            "server": {
                "port": self.server.port,
                "max_upload_mb": self.server.max_upload_mb,
            },
            "ocr": {
                "enabled": self.ocr.enabled,
                "language": self.ocr.language,
                "page_limit": self.ocr.page_limit,
            },
            "summarize": {
                "default_length": self.summarize.default_length,
            },
        })
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    /// Directory holding the browser frontend, served as the route fallback.
    pub static_dir: PathBuf,
    pub max_upload_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            cors_origin: "*".to_string(),
            static_dir: PathBuf::from("frontend"),
            max_upload_mb: 25,
        }
    }
}

impl ServerConfig {
    fn from_env_profiled(p: &str) -> Self {
        let d = Self::default();
        Self {
            host: profiled_env_or(p, "HOST", &d.host),
            port: profiled_env_u16(p, "PORT", d.port),
            cors_origin: profiled_env_or(p, "CORS_ORIGIN", &d.cors_origin),
            static_dir: profiled_env_opt(p, "STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(d.static_dir),
            max_upload_mb: profiled_env_usize(p, "MAX_UPLOAD_MB", d.max_upload_mb),
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

// ── OCR (external tesseract / poppler) ────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    pub enabled: bool,
    pub tesseract_bin: String,
    pub pdftoppm_bin: String,
    /// Tesseract language code.
    pub language: String,
    /// Number of leading PDF pages rasterised when a PDF has no text layer.
    pub page_limit: usize,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tesseract_bin: "tesseract".to_string(),
            pdftoppm_bin: "pdftoppm".to_string(),
            language: "eng".to_string(),
            page_limit: 3,
        }
    }
}

impl OcrConfig {
    fn from_env_profiled(p: &str) -> Self {
        let d = Self::default();
        Self {
            enabled: profiled_env_bool(p, "OCR_ENABLED", d.enabled),
            tesseract_bin: profiled_env_or(p, "TESSERACT_BIN", &d.tesseract_bin),
            pdftoppm_bin: profiled_env_or(p, "PDFTOPPM_BIN", &d.pdftoppm_bin),
            language: profiled_env_or(p, "OCR_LANG", &d.language),
            page_limit: profiled_env_usize(p, "OCR_PAGE_LIMIT", d.page_limit).max(1),
        }
    }
}

// ── Summarization defaults ────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeConfig {
    /// Length tier used when a request omits one.
    pub default_length: String,
    /// Raw lines substituted when the engine produces an empty summary.
    pub fallback_lines: usize,
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self {
            default_length: "medium".to_string(),
            fallback_lines: 5,
        }
    }
}

impl SummarizeConfig {
    fn from_env_profiled(p: &str) -> Self {
        let d = Self::default();
        Self {
            default_length: profiled_env_or(p, "DEFAULT_LENGTH", &d.default_length).to_lowercase(),
            fallback_lines: profiled_env_usize(p, "FALLBACK_LINES", d.fallback_lines),
        }
    }
}
