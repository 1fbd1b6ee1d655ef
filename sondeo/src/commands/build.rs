// sondeo/src/commands/build.rs
//
// USE CASE: Build the XLSForm workbook.

use std::path::PathBuf;

use anyhow::Context;
use sondeo_core::application::{assemble, has_errors, load_snapshot, validate_project};
use sondeo_core::infrastructure::config::{load_catalog_batches, load_project_config};
use sondeo_core::infrastructure::xlsx::XlsxFormWriter;
use sondeo_core::ports::FormWriter;
use tracing::debug;

use super::validate::print_findings;

pub fn execute(project_dir: PathBuf, out: Option<PathBuf>) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Load the project (Infra)
    println!("⚙️  Loading configuration...");
    let config = load_project_config(&project_dir)
        .with_context(|| format!("Failed to load project configuration from {:?}", project_dir))?;
    println!("   Project: {} → \"{}\"", config.name, config.form_title());

    let snapshot = load_snapshot(&project_dir)?;
    let batches = load_catalog_batches(&project_dir, &config)?;

    // B. Validate before assembling; errors block the export.
    let findings = validate_project(&config, &snapshot, &batches);
    print_findings(&findings);
    if has_errors(&findings) {
        eprintln!("\n❌ FAILURE. Fix the errors above and build again.");
        std::process::exit(1);
    }

    // C. Assemble and write (Application + Adapter)
    let form = assemble(&config, &snapshot, &batches)?;
    debug!(version = %form.settings.version, "Form assembled");
    println!(
        "   Sheets: survey={} rows, choices={} rows",
        form.survey.len(),
        form.choices.len()
    );

    let dest = out.unwrap_or_else(|| project_dir.join(&config.target_path));
    if dest.extension().is_some() {
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
    } else {
        std::fs::create_dir_all(&dest)?;
    }

    let written = XlsxFormWriter::new()
        .write(&form, &dest)
        .with_context(|| format!("Failed to write workbook to {:?}", dest))?;

    println!(
        "\n✨ SUCCESS! XLSForm written to {} in {:.2?}",
        written.display(),
        start.elapsed()
    );
    Ok(())
}
