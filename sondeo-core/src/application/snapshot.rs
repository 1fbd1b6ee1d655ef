// sondeo-core/src/application/snapshot.rs
//
// The project snapshot is the persisted form of the editing session: custom
// questions, rules and the user catalog, serialized as-is. No schema
// evolution; the file is rewritten whole on every change.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::domain::catalog::ChoiceCatalog;
use crate::domain::form::{FinishRule, Question, VisibilityRule};
use crate::error::SondeoError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;

pub const SNAPSHOT_FILE: &str = "snapshot.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub visibility_rules: Vec<VisibilityRule>,
    #[serde(default)]
    pub finish_rules: Vec<FinishRule>,
    #[serde(default)]
    pub catalog: ChoiceCatalog,
}

/// Loads the snapshot; a missing file is an empty session, not an error.
pub fn load_snapshot(project_dir: &Path) -> Result<Snapshot, SondeoError> {
    let path = project_dir.join(SNAPSHOT_FILE);
    if !path.exists() {
        return Ok(Snapshot::default());
    }
    let content = std::fs::read_to_string(&path).map_err(InfrastructureError::Io)?;
    let snapshot: Snapshot =
        serde_json::from_str(&content).map_err(InfrastructureError::Json)?;
    info!(
        questions = snapshot.questions.len(),
        catalog_rows = snapshot.catalog.rows().len(),
        "Snapshot loaded"
    );
    Ok(snapshot)
}

pub fn save_snapshot(project_dir: &Path, snapshot: &Snapshot) -> Result<(), SondeoError> {
    let path = project_dir.join(SNAPSHOT_FILE);
    let content =
        serde_json::to_string_pretty(snapshot).map_err(InfrastructureError::Json)?;
    atomic_write(&path, content)?;
    Ok(())
}
