use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::Path;

/// Atomic file write: the content lands in a temp file next to the target,
/// then an atomic rename swaps it in. The snapshot is rewritten whole on
/// every catalog change, so a crash mid-write must never leave a truncated
/// file behind.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = path.parent().unwrap_or_else(|| Path::new("."));

    // Same directory as the target, so the rename stays on one filesystem.
    let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(InfrastructureError::Io)?;
    temp_file
        .write_all(content.as_ref())
        .map_err(InfrastructureError::Io)?;
    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_creates_file() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("snapshot.json");
        let content = "{\"questions\": []}";

        atomic_write(&file_path, content)?;

        assert_eq!(fs::read_to_string(file_path)?, content);
        Ok(())
    }

    #[test]
    fn test_atomic_write_overwrites_existing() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("snapshot.json");

        atomic_write(&file_path, "{}")?;
        atomic_write(&file_path, "{\"finish_rules\": []}")?;

        assert_eq!(fs::read_to_string(file_path)?, "{\"finish_rules\": []}");
        Ok(())
    }
}
