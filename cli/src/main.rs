use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;
use vigil_core::config::AppConfig;
use vigil_core::{ActiveIgnore, IgnoreSet};
use vigil_watch::FileWatcher;

#[derive(Parser, Debug)]
#[command(author, version, about = "Vigil - filtered filesystem watcher", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Watch a directory tree and print the events that survive filtering
    Watch {
        /// Root to watch (defaults to the configured or current directory)
        path: Option<PathBuf>,
    },
    /// Report whether paths would be ignored under the current rules
    Check {
        /// Paths to test, absolute or relative to the watch root
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Print the compiled pattern list in precedence order
    Patterns,
}

/// Rule sources, in override order: built-in defaults, then `.gitignore`,
/// then the configured ignore file.
fn build_set(config: &AppConfig, root: &Path) -> IgnoreSet {
    let mut set = if config.use_defaults {
        IgnoreSet::with_defaults(root)
    } else {
        IgnoreSet::new(root)
    };
    // The tool's own ignore file is noise too.
    set.add_pattern(&config.ignore_file);

    for name in [".gitignore", config.ignore_file.as_str()] {
        let path = root.join(name);
        if let Err(e) = set.load_ignore_file(&path) {
            warn!("vigil: skipping unreadable {}: {}", path.display(), e);
        }
    }
    set
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    vigil_core::init();

    let args = Args::parse();
    let config = AppConfig::load().context("failed to load configuration")?;

    match args.command.unwrap_or(Commands::Watch { path: None }) {
        Commands::Watch { path } => {
            let root = path.unwrap_or_else(|| config.root());
            let set = build_set(&config, &root);

            let ignore = ActiveIgnore::new();
            ignore.install(Arc::new(set));

            let (watcher, mut rx) = FileWatcher::new(root, ignore);
            tokio::spawn(async move {
                while let Some(event) = rx.recv().await {
                    println!("{:8} {}", event.kind.as_str(), event.path.display());
                }
            });
            watcher.start().await?;
        }
        Commands::Check { paths } => {
            let root = config.root();
            let set = build_set(&config, &root);
            for path in paths {
                let full = if path.is_absolute() {
                    path.clone()
                } else {
                    root.join(&path)
                };
                let verdict = if set.should_ignore(&full) {
                    "ignored"
                } else {
                    "watched"
                };
                println!("{:8} {}", verdict, path.display());
            }
        }
        Commands::Patterns => {
            let root = config.root();
            let set = build_set(&config, &root);
            for pattern in set.patterns() {
                println!("{:>3}  {}", pattern.order, pattern.raw.trim());
            }
        }
    }

    Ok(())
}
