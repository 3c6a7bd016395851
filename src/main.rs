//! Binary entry point for causeway.
//!
//! This binary provides the CLI interface for the causeway project
//! registry.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print output in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use causeway::config::CausewayConfig;
use causeway::models::{NewProject, Project, TagList};
use causeway::observability::{self, InitOptions};
use causeway::storage::{JsonStore, ProjectFilter, ProjectStore};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Causeway - a registry for open-source volunteer projects.
#[derive(Parser)]
#[command(name = "causeway")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Register a project from its GitHub URL.
    Add {
        /// Project display name.
        name: String,

        /// GitHub repository URL, e.g. `https://github.com/owner/repo`.
        url: String,

        /// Short description.
        #[arg(short, long)]
        description: Option<String>,

        /// Technology tags (comma-separated).
        #[arg(short, long)]
        technologies: Option<String>,

        /// Cause tags (comma-separated).
        #[arg(long)]
        causes: Option<String>,
    },

    /// List registered projects.
    List {
        /// Only approved projects.
        #[arg(long)]
        approved: bool,

        /// Only approved, active projects.
        #[arg(long)]
        active: bool,

        /// Only active projects owned by an organization.
        #[arg(long)]
        featured: bool,
    },

    /// Show a project by slug.
    Show {
        /// The project slug.
        slug: String,
    },

    /// Replace a project's tag lists.
    Tag {
        /// The project slug.
        slug: String,

        /// Technology tags (comma-separated).
        #[arg(short, long)]
        technologies: Option<String>,

        /// Cause tags (comma-separated).
        #[arg(long)]
        causes: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    observability::init(InitOptions {
        verbose: cli.verbose,
    });

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> causeway::Result<()> {
    let config = match &cli.config {
        Some(path) => CausewayConfig::from_file(path)?,
        None => CausewayConfig::load()?,
    };
    let mut store = JsonStore::open(&config.data_dir)?;

    match &cli.command {
        Commands::Add {
            name,
            url,
            description,
            technologies,
            causes,
        } => {
            let project = store.insert(NewProject {
                name: name.clone(),
                submitted_github_url: url.clone(),
                description: description.clone(),
                technologies: technologies.as_deref().map(TagList::parse).unwrap_or_default(),
                causes: causes.as_deref().map(TagList::parse).unwrap_or_default(),
                ..Default::default()
            })?;
            println!("added {} ({})", project.slug, project.github_repo);
        }

        Commands::List {
            approved,
            active,
            featured,
        } => {
            let filter = if *featured {
                ProjectFilter::featured()
            } else if *active {
                ProjectFilter::active()
            } else if *approved {
                ProjectFilter::approved()
            } else {
                ProjectFilter::all()
            };
            let mut projects = store.list(filter)?;
            projects.sort_by(|a, b| a.slug.cmp(&b.slug));
            for project in projects {
                println!("{}\t{}", project.slug, project.github_repo);
            }
        }

        Commands::Show { slug } => {
            let project = store
                .find_by_slug(slug)?
                .ok_or_else(|| causeway::Error::NotFound(format!("project {slug}")))?;
            print_project(&project);
        }

        Commands::Tag {
            slug,
            technologies,
            causes,
        } => {
            let mut project = store
                .find_by_slug(slug)?
                .ok_or_else(|| causeway::Error::NotFound(format!("project {slug}")))?;
            if let Some(list) = technologies {
                project.technologies = TagList::parse(list);
            }
            if let Some(list) = causes {
                project.causes = TagList::parse(list);
            }
            let updated = store.update(&project)?;
            println!(
                "tagged {}: technologies [{}], causes [{}]",
                updated.slug, updated.technologies, updated.causes
            );
        }
    }

    Ok(())
}

fn print_project(project: &Project) {
    println!("{}", project.name);
    println!("  slug:         {}", project.slug);
    println!("  github repo:  {}", project.github_repo);
    if let Some(description) = &project.description {
        println!("  description:  {description}");
    }
    if !project.technologies.is_empty() {
        println!("  technologies: {}", project.technologies);
    }
    if !project.causes.is_empty() {
        println!("  causes:       {}", project.causes);
    }
    println!("  approved:     {}", project.is_approved);
    println!("  active:       {}", project.is_active);
    println!("  created:      {}", project.created_at.to_rfc3339());
}
