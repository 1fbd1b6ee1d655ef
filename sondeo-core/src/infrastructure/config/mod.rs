pub mod batches;
pub mod project;

pub use crate::domain::project::ProjectConfig;
pub use batches::load_catalog_batches;
pub use project::load_project_config;
