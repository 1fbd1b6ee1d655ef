// sondeo/src/commands/validate.rs
//
// USE CASE: Validate the project and print findings.

use std::path::PathBuf;

use anyhow::Context;
use sondeo_core::application::{has_errors, load_snapshot, validate_project, Finding, Severity};
use sondeo_core::infrastructure::config::{load_catalog_batches, load_project_config};

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    let config = load_project_config(&project_dir)
        .with_context(|| format!("Failed to load project configuration from {:?}", project_dir))?;
    let snapshot = load_snapshot(&project_dir)?;
    let batches = load_catalog_batches(&project_dir, &config)?;

    let findings = validate_project(&config, &snapshot, &batches);
    print_findings(&findings);

    if has_errors(&findings) {
        eprintln!("\n❌ Validation failed.");
        std::process::exit(1);
    }

    println!("✅ Project is valid.");
    Ok(())
}

pub fn print_findings(findings: &[Finding]) {
    for finding in findings {
        match finding.severity {
            Severity::Warning => println!("   ⚠️  [{}] {}", finding.code, finding.message),
            Severity::Error => eprintln!("   ❌ [{}] {}", finding.code, finding.message),
        }
    }
}
