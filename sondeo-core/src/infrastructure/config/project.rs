// sondeo-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::domain::project::ProjectConfig;
use crate::infrastructure::error::InfrastructureError;

// --- LOADER ---

#[instrument(skip(project_dir))]
pub fn load_project_config(project_dir: &Path) -> Result<ProjectConfig, InfrastructureError> {
    // 1. Découverte du fichier principal
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading project configuration");

    // 2. Chargement YAML
    let content = fs::read_to_string(&config_path).map_err(InfrastructureError::Io)?;
    let mut config: ProjectConfig = serde_yaml::from_str(&content)?;

    // 3. Override via Variables d'Environnement (Pattern 'Layering')
    // Permet de faire: SONDEO_VERSION=piloto-2 sondeo build
    apply_env_overrides(&mut config);

    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    let candidates = ["sondeo.yaml", "sondeo.yml"];
    for filename in candidates {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, candidates
    )))
}

fn apply_env_overrides(config: &mut ProjectConfig) {
    if let Ok(val) = std::env::var("SONDEO_TARGET_PATH") {
        info!(old = ?config.target_path, new = ?val, "Overriding target path via ENV");
        config.target_path = val;
    }
    if let Ok(val) = std::env::var("SONDEO_VERSION") {
        info!(old = ?config.version, new = ?val, "Overriding version via ENV");
        config.version = Some(val);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::project::Language;
    use tempfile::tempdir;

    #[test]
    fn test_load_full_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("sondeo.yaml"),
            "name: encuesta_comercio\n\
             delegacion: San Carlos Oeste\n\
             logo_media: logo_fp.png\n\
             language: en\n\
             version: 'piloto-1'\n\
             target_path: out\n\
             catalog_paths: [catalogo]\n",
        )
        .unwrap();

        let config = load_project_config(dir.path()).unwrap();
        assert_eq!(config.name, "encuesta_comercio");
        assert_eq!(config.delegacion, "San Carlos Oeste");
        assert_eq!(config.logo_media, "logo_fp.png");
        assert_eq!(config.language, Language::En);
        assert_eq!(config.version.as_deref(), Some("piloto-1"));
        assert_eq!(config.target_path, "out");
        assert_eq!(config.catalog_paths, vec!["catalogo".to_string()]);
    }

    #[test]
    fn test_missing_config_reports_candidates() {
        let dir = tempdir().unwrap();
        let err = load_project_config(dir.path()).unwrap_err();
        assert!(matches!(err, InfrastructureError::ConfigNotFound(_)));
        assert!(err.to_string().contains("sondeo.yaml"));
    }

    #[test]
    fn test_yml_extension_also_accepted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("sondeo.yml"), "name: encuesta").unwrap();
        assert!(load_project_config(dir.path()).is_ok());
    }
}
