// sondeo-core/src/infrastructure/config/batches.rs
//
// Catalog batches live as small YAML files under the project's catalog
// directories, one canton per file:
//
//   canton: San Carlos
//   distritos:
//     - Quesada
//     - Florencia

use std::fs;
use std::path::Path;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::domain::catalog::CatalogBatch;
use crate::domain::project::ProjectConfig;
use crate::infrastructure::error::InfrastructureError;

/// Scans every configured catalog path for batch files. Files are visited in
/// path order so the exported catalog is deterministic. Missing directories
/// are fine (a project may keep its whole catalog in the snapshot instead).
pub fn load_catalog_batches(
    project_dir: &Path,
    config: &ProjectConfig,
) -> Result<Vec<CatalogBatch>, InfrastructureError> {
    let mut batches = Vec::new();

    for catalog_path in &config.catalog_paths {
        let dir = project_dir.join(catalog_path);
        if !dir.exists() {
            warn!(path = ?dir, "Catalog directory not found, skipping");
            continue;
        }

        let walker = WalkDir::new(&dir).follow_links(true).sort_by_file_name();
        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
            {
                continue;
            }

            let content = fs::read_to_string(path).map_err(InfrastructureError::Io)?;
            let batch: CatalogBatch = serde_yaml::from_str(&content).map_err(|e| {
                InfrastructureError::Config(format!(
                    "Invalid catalog batch {:?}: {}",
                    path, e
                ))
            })?;
            batches.push(batch);
        }
    }

    info!(count = batches.len(), "Catalog batches loaded");
    Ok(batches)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config() -> ProjectConfig {
        serde_yaml::from_str("name: encuesta").unwrap()
    }

    #[test]
    fn test_loads_batches_in_file_name_order() {
        let dir = tempdir().unwrap();
        let catalog = dir.path().join("catalog");
        fs::create_dir(&catalog).unwrap();
        fs::write(
            catalog.join("02_perez_zeledon.yaml"),
            "canton: Pérez Zeledón\ndistritos: [San Isidro de El General]\n",
        )
        .unwrap();
        fs::write(
            catalog.join("01_san_carlos.yaml"),
            "canton: San Carlos\ndistritos: [Quesada, Florencia]\n",
        )
        .unwrap();

        let batches = load_catalog_batches(dir.path(), &config()).unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].canton, "San Carlos");
        assert_eq!(batches[1].canton, "Pérez Zeledón");
        assert_eq!(batches[0].distritos.len(), 2);
    }

    #[test]
    fn test_missing_catalog_dir_is_empty() {
        let dir = tempdir().unwrap();
        let batches = load_catalog_batches(dir.path(), &config()).unwrap();
        assert!(batches.is_empty());
    }

    #[test]
    fn test_invalid_batch_file_is_an_error() {
        let dir = tempdir().unwrap();
        let catalog = dir.path().join("catalog");
        fs::create_dir(&catalog).unwrap();
        fs::write(catalog.join("broken.yaml"), "canton: [not, a, string]\n").unwrap();

        let err = load_catalog_batches(dir.path(), &config()).unwrap_err();
        assert!(matches!(err, InfrastructureError::Config(_)));
    }
}
