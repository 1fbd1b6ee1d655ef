// sondeo-core/src/domain/project.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// `settings.default_language` values accepted by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "es" => Ok(Self::Es),
            "en" => Ok(Self::En),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

/// Project-level settings, loaded from `sondeo.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProjectConfig {
    #[validate(length(min = 1, message = "Project name cannot be empty"))]
    pub name: String,

    /// Delegación / commercial zone; appended to the form title.
    #[serde(default)]
    pub delegacion: String,

    /// File name referenced by `media::image`; must match the file placed in
    /// the Survey123 project's `media/` folder.
    #[serde(default = "default_logo_media")]
    pub logo_media: String,

    #[serde(default)]
    pub language: Language,

    /// `settings.version`; a build timestamp when unset.
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default = "default_target_path")]
    pub target_path: String,

    /// Directories scanned for catalog batch files.
    #[serde(default = "default_catalog_paths")]
    pub catalog_paths: Vec<String>,
}

fn default_logo_media() -> String {
    "001.png".to_string()
}

fn default_target_path() -> String {
    "target".to_string()
}

fn default_catalog_paths() -> Vec<String> {
    vec!["catalog".to_string()]
}

impl ProjectConfig {
    pub fn form_title(&self) -> String {
        let delegacion = self.delegacion.trim();
        if delegacion.is_empty() {
            "Encuesta comercio".to_string()
        } else {
            format!("Encuesta comercio – {delegacion}")
        }
    }

    /// Explicit version, or a `%Y%m%d%H%M` timestamp.
    pub fn resolved_version(&self) -> String {
        self.version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| chrono::Local::now().format("%Y%m%d%H%M").to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> ProjectConfig {
        serde_yaml::from_str("name: encuesta_comercio").unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = config();
        assert_eq!(cfg.logo_media, "001.png");
        assert_eq!(cfg.language, Language::Es);
        assert_eq!(cfg.target_path, "target");
        assert_eq!(cfg.catalog_paths, vec!["catalog".to_string()]);
    }

    #[test]
    fn test_form_title_with_and_without_delegacion() {
        let mut cfg = config();
        assert_eq!(cfg.form_title(), "Encuesta comercio");

        cfg.delegacion = "San Carlos Oeste".into();
        assert_eq!(cfg.form_title(), "Encuesta comercio – San Carlos Oeste");
    }

    #[test]
    fn test_resolved_version_prefers_explicit() {
        let mut cfg = config();
        cfg.version = Some("2026-v3".into());
        assert_eq!(cfg.resolved_version(), "2026-v3");

        cfg.version = Some("  ".into());
        let auto = cfg.resolved_version();
        assert_eq!(auto.len(), 12); // %Y%m%d%H%M
    }
}
