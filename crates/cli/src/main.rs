mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cms-seed")]
#[command(version, about = "Seed content and admin config for git-backed headless CMSs", long_about = None)]
struct Cli {
    /// Project root; source files and outputs resolve against it
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Project file (default: <root>/cms-seed.toml, optional)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Write a cms-seed.toml with the default settings
    Init {
        /// Repository the admin UI commits to (owner/name)
        #[arg(long)]
        repo: Option<String>,

        /// Comma-separated locales; the first one is the reference locale
        #[arg(long, value_delimiter = ',')]
        locales: Option<Vec<String>>,
    },

    /// Generate dummy snippets and a flat Sveltia collection for load tests
    Snippets {
        /// Number of files to generate
        #[arg(short, long)]
        count: Option<usize>,
    },

    /// Split locale dictionaries and generate Sveltia CMS config (one collection per folder)
    Sveltia,

    /// Split locale dictionaries and generate TinaCMS config (one collection per top-level folder and locale)
    Tina,

    /// Load the locale dictionaries and report what would be generated
    Validate,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    // WARN by default so skipped locales show up; RUST_LOG overrides
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let root = cli.root;
    let config = cli.config;

    match cli.command {
        Command::Init { repo, locales } => commands::init::run(&root, repo, locales),
        Command::Snippets { count } => commands::snippets::run(&root, config.as_deref(), count),
        Command::Sveltia => commands::sveltia::run(&root, config.as_deref()),
        Command::Tina => commands::tina::run(&root, config.as_deref()),
        Command::Validate => commands::validate::run(&root, config.as_deref()),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "cms-seed", &mut io::stdout());
            Ok(())
        }
    }
}
