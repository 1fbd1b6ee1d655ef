// sondeo/src/commands/preview.rs
//
// USE CASE: Print an assembled sheet without writing the workbook.

use std::path::PathBuf;

use anyhow::Context;
use comfy_table::Table;
use sondeo_core::application::{assemble, load_snapshot};
use sondeo_core::domain::form::{Settings, SURVEY_COLUMNS};
use sondeo_core::infrastructure::config::{load_catalog_batches, load_project_config};

pub fn execute(project_dir: PathBuf, sheet: String, limit: usize) -> anyhow::Result<()> {
    let config = load_project_config(&project_dir)
        .with_context(|| format!("Failed to load project configuration from {:?}", project_dir))?;
    let snapshot = load_snapshot(&project_dir)?;
    let batches = load_catalog_batches(&project_dir, &config)?;
    let form = assemble(&config, &snapshot, &batches)?;

    let mut table = Table::new();
    let total = match sheet.as_str() {
        "survey" => {
            table.set_header(SURVEY_COLUMNS.to_vec());
            for row in rows_within(limit, &form.survey) {
                table.add_row(row.cells().to_vec());
            }
            form.survey.len()
        }
        "choices" => {
            table.set_header(form.choice_columns());
            for row in rows_within(limit, &form.choices) {
                table.add_row(form.choice_cells(row));
            }
            form.choices.len()
        }
        "settings" => {
            table.set_header(Settings::COLUMNS.to_vec());
            table.add_row(form.settings.cells().to_vec());
            1
        }
        other => anyhow::bail!(
            "Unknown sheet '{}'. Expected: survey | choices | settings",
            other
        ),
    };

    println!("{table}");
    if limit > 0 && limit < total {
        println!("   … {} of {} rows shown", limit, total);
    }
    Ok(())
}

fn rows_within<T>(limit: usize, rows: &[T]) -> &[T] {
    if limit == 0 || limit >= rows.len() {
        rows
    } else {
        &rows[..limit]
    }
}
