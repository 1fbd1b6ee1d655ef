// sondeo/src/commands/init.rs
//
// USE CASE: Scaffold a new survey project directory.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use sondeo_core::application::{save_snapshot, Snapshot};
use sondeo_core::domain::naming::slugify;

pub fn execute(project_dir: PathBuf, delegacion: Option<String>) -> anyhow::Result<()> {
    fs::create_dir_all(&project_dir)?;

    let config_path = project_dir.join("sondeo.yaml");
    if config_path.exists() {
        anyhow::bail!(
            "❌ {} already exists; refusing to overwrite it.",
            config_path.display()
        );
    }

    let name = project_dir
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| slugify(&n.to_string_lossy())))
        .unwrap_or_else(|| "encuesta_comercio".to_string());
    let delegacion = delegacion.unwrap_or_default();

    let config = format!(
        "name: {name}\n\
         delegacion: '{delegacion}'\n\
         logo_media: 001.png\n\
         language: es\n\
         # version: fija la versión; sin ella se usa un timestamp\n\
         target_path: target\n\
         catalog_paths:\n\
         \x20 - catalog\n"
    );
    fs::write(&config_path, config)
        .with_context(|| format!("Failed to write {:?}", config_path))?;

    let catalog_dir = project_dir.join("catalog");
    fs::create_dir_all(&catalog_dir)?;
    let example = catalog_dir.join("san_carlos.yaml");
    if !example.exists() {
        fs::write(
            &example,
            "# Un lote: un cantón y sus distritos.\n\
             canton: San Carlos\n\
             distritos:\n\
             \x20 - Quesada\n\
             \x20 - Florencia\n",
        )?;
    }

    save_snapshot(&project_dir, &Snapshot::default())?;

    println!("🏗️  Project scaffolded in {}", project_dir.display());
    println!("   sondeo.yaml, catalog/san_carlos.yaml, snapshot.json");
    println!("👉 Edit sondeo.yaml, add catalog batches, then run 'sondeo build'.");
    Ok(())
}
