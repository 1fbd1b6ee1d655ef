// sondeo-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(sondeo::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(sondeo::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    Yaml(#[from] serde_yaml::Error),

    // --- SNAPSHOT / JSON ---
    #[error("JSON Parsing Error: {0}")]
    #[diagnostic(
        code(sondeo::infra::json),
        help("The snapshot file is corrupted; re-export it or fix it by hand.")
    )]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Project configuration not found at '{0}'")]
    #[diagnostic(code(sondeo::infra::config_missing))]
    ConfigNotFound(String),

    // --- WORKBOOK OUTPUT ---
    #[error("Workbook Error: {0}")]
    #[diagnostic(
        code(sondeo::infra::xlsx),
        help("The .xlsx artifact could not be written; check the target path.")
    )]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
