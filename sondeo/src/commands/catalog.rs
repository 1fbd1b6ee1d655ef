// sondeo/src/commands/catalog.rs
//
// USE CASE: Maintain the canton → distrito catalog held in the snapshot.
// Batches can also live as YAML files under catalog/; those are read-only
// from here and merged at build time.

use std::path::PathBuf;

use comfy_table::Table;
use sondeo_core::application::{load_snapshot, save_snapshot};

use crate::cli::CatalogAction;

pub fn execute(project_dir: PathBuf, action: CatalogAction) -> anyhow::Result<()> {
    match action {
        CatalogAction::Add { canton, distritos } => {
            let mut snapshot = load_snapshot(&project_dir)?;
            let summary = snapshot.catalog.add_batch(&canton, &distritos)?;
            save_snapshot(&project_dir, &snapshot)?;
            println!(
                "📚 Lote agregado: {} → {} distrito(s).",
                summary.canton, summary.districts_added
            );
        }

        CatalogAction::List => {
            let snapshot = load_snapshot(&project_dir)?;
            if snapshot.catalog.is_empty() {
                println!("📚 Catálogo vacío. Use 'sondeo catalog add' o archivos en catalog/.");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["list_name", "name", "label", "canton_key"]);
            for row in snapshot.catalog.rows() {
                table.add_row(vec![
                    row.list_name.as_str(),
                    row.name.as_str(),
                    row.label.as_str(),
                    row.canton_key.as_deref().unwrap_or(""),
                ]);
            }
            println!("{table}");
        }
    }
    Ok(())
}
