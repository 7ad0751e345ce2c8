//! Vue Inliner CLI
//!
//! Usage:
//!   vue-inliner [OPTIONS] <TEMPLATES> <ROOT>
//!
//! Resolves the dependencies of a root component against a directory of
//! `.vue` template files and prints the registration script a served page
//! would embed.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use vue_inliner::{build_catalog, list_template_sources, resolve_and_render, VueConfig};

#[derive(Parser)]
#[command(name = "vue-inliner")]
#[command(about = "Server-side dependency resolver for inlined Vue component templates")]
struct Cli {
    /// Directory containing .vue component templates
    templates: PathBuf,

    /// Root component to resolve (bare name or usage tag)
    root: Option<String>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render app-scoped registrations targeting this application object
    #[arg(short, long)]
    app_name: Option<String>,

    /// Disable dependency optimization and register every known component
    #[arg(long)]
    no_optimize: bool,

    /// List the components found in the template directory and exit
    #[arg(short, long)]
    list: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match VueConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => VueConfig::default(),
    };
    if cli.no_optimize {
        config.optimize_dependencies = false;
    }
    if let Some(app_name) = cli.app_name {
        config.app_name = Some(app_name);
    }

    let sources = match list_template_sources(&cli.templates) {
        Ok(sources) => sources,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let catalog = build_catalog(&sources);

    if cli.list {
        for definition in catalog.definitions() {
            println!("{} ({})", definition.name, definition.origin);
        }
        return;
    }

    let Some(root) = cli.root else {
        eprintln!("Error: a root component is required unless --list is given");
        process::exit(1);
    };

    println!("{}", resolve_and_render(&root, &catalog, &config));
}
