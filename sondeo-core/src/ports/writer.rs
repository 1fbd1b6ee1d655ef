// sondeo-core/src/ports/writer.rs

use std::path::{Path, PathBuf};

use crate::domain::form::XlsForm;
use crate::error::SondeoError;

/// Output port for the assembled form. The application layer produces an
/// `XlsForm`; how it lands on disk is an adapter concern.
pub trait FormWriter {
    /// Writes the three sheets to `dest`. A directory destination resolves to
    /// a default file name inside it. Returns the path actually written.
    fn write(&self, form: &XlsForm, dest: &Path) -> Result<PathBuf, SondeoError>;
}
