// sondeo/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sondeo")]
#[command(about = "Survey-as-Code: builds Survey123 XLSForm workbooks", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🏗️ Scaffolds a new survey project (sondeo.yaml + catalog/ + snapshot)
    Init {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Delegación / commercial zone shown in the form title
        #[arg(long)]
        delegacion: Option<String>,
    },

    /// 📦 Builds the XLSForm workbook (survey / choices / settings)
    Build {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Output .xlsx file or directory (default: the project's target_path)
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// 🧪 Validates the project and prints findings
    Validate {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// 📚 Manages the canton → distrito catalog stored in the snapshot
    Catalog {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        #[command(subcommand)]
        action: CatalogAction,
    },

    /// 🔍 Prints an assembled sheet as a table
    Preview {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Sheet to print: survey | choices | settings
        #[arg(long, default_value = "survey")]
        sheet: String,

        /// Number of rows to display (0 = all)
        #[arg(long, default_value = "0")]
        limit: usize,
    },
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// Adds one batch (a canton and its districts)
    Add {
        /// Canton label (once)
        #[arg(long)]
        canton: String,

        /// District labels, comma-separated
        #[arg(long, value_delimiter = ',', required = true)]
        distritos: Vec<String>,
    },

    /// Lists the catalog rows stored in the snapshot
    List,
}
