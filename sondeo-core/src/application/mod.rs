// sondeo-core/src/application/mod.rs

pub mod assembler;
pub mod snapshot;
pub mod validation;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Cela permet au CLI de faire :
// `use sondeo_core::application::{assemble, validate_project, Snapshot};`
// sans avoir à connaître la structure interne des fichiers.

pub use assembler::assemble;
pub use snapshot::{load_snapshot, save_snapshot, Snapshot, SNAPSHOT_FILE};
pub use validation::{has_errors, validate_project, Finding, Severity};
