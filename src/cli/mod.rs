//! Command-line interface definitions
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{Availability, ProjectStatus, WorkStyle};

pub mod commands;

pub use commands::{execute, load_catalog};

/// Score and rank talent/project pairings from a JSON catalog
#[derive(Parser, Debug)]
#[command(name = "talent-match")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog file with `projects` and `talents` (default: data.catalog_path)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Config file path (default: config/default.toml + config/local.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Score one project/talent pair and check the project's requirements
    Score {
        #[arg(long)]
        project: String,
        #[arg(long)]
        talent: String,
    },

    /// Rank talents for a project, or open projects for a talent
    Suggest {
        #[arg(long, conflicts_with = "talent", required_unless_present = "talent")]
        project: Option<String>,
        #[arg(long)]
        talent: Option<String>,
        /// Maximum number of suggestions (default: matching.default_limit)
        #[arg(long)]
        limit: Option<u16>,
    },

    /// Search projects
    Projects {
        /// Case-insensitive substring of title, company or a required skill
        #[arg(long, short)]
        query: Option<String>,
        #[arg(long, value_enum)]
        status: Option<ProjectStatus>,
        #[arg(long, value_enum)]
        work_style: Option<WorkStyle>,
    },

    /// Search talents
    Talents {
        /// Case-insensitive substring of name, title or a skill
        #[arg(long, short)]
        query: Option<String>,
        #[arg(long, value_enum)]
        availability: Option<Availability>,
        #[arg(long, value_enum)]
        work_style: Option<WorkStyle>,
    },
}
