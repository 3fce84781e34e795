//! launchpad-comparer: differences between two Sling launchpad releases
//!
//! Lists added, removed and changed bundles and attributes first-party
//! changes to JIRA issues through the git history of each bundle.

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use launchpad_comparer::{
    cli,
    config::{AppConfig, CompareConfig, DEFAULT_FIRST_VERSION, DEFAULT_SECOND_VERSION},
    parsers::ManifestFormat,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "launchpad-comparer")]
#[command(version)]
#[command(about = "Compare two Sling launchpad releases", long_about = None)]
#[command(after_help = "A release is either a launchpad version, downloaded from the Maven \
repositories, or a path to a manifest file.

EXAMPLES:
    # Compare the default releases with checkouts next to this one
    launchpad-comparer

    # Compare two releases, checkouts under ~/src/sling
    launchpad-comparer 11 12 -c ~/src/sling

    # Compare local manifests, ticket ids only, as JSON
    launchpad-comparer old.slingosgifeature new.slingosgifeature --no-tickets -o json")]
struct Cli {
    /// Older release
    #[arg(default_value = DEFAULT_FIRST_VERSION)]
    first: String,

    /// Newer release
    #[arg(default_value = DEFAULT_SECOND_VERSION)]
    second: String,

    /// Output format [default: plaintext]
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Directory holding one git checkout per bundle [default: ..]
    #[arg(short, long)]
    checkout: Option<PathBuf>,

    /// Manifest format [default: auto]
    #[arg(long)]
    manifest_format: Option<ManifestFormat>,

    /// Group whose changed bundles are attributed to tickets [default: org.apache.sling]
    #[arg(long)]
    first_party_group: Option<String>,

    /// Project key commit subjects start with [default: SLING]
    #[arg(long)]
    ticket_prefix: Option<String>,

    /// Issue tracker base URL
    #[arg(long, env = "LAUNCHPAD_COMPARER_TRACKER_URL")]
    tracker_url: Option<String>,

    /// Skip issue tracker lookups and report ticket ids only
    #[arg(long)]
    no_tickets: bool,

    /// Directory for downloaded manifests
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Print the JSON Schema of the config file and exit
    #[arg(long)]
    print_config_schema: bool,
}

impl Cli {
    /// Settings given on the command line, defaults elsewhere.
    fn overrides(&self) -> AppConfig {
        let mut builder = AppConfig::builder()
            .no_tickets(self.no_tickets)
            .no_color(self.no_color)
            .output_file(self.output_file.clone())
            .cache_dir(self.cache_dir.clone());
        if let Some(format) = self.output {
            builder = builder.output_format(format);
        }
        if let Some(format) = self.manifest_format {
            builder = builder.manifest_format(format);
        }
        if let Some(checkout) = &self.checkout {
            builder = builder.checkout(checkout.clone());
        }
        if let Some(group) = &self.first_party_group {
            builder = builder.first_party_group(group.as_str());
        }
        if let Some(prefix) = &self.ticket_prefix {
            builder = builder.ticket_prefix(prefix.as_str());
        }
        if let Some(url) = &self.tracker_url {
            builder = builder.tracker_url(url.as_str());
        }
        builder.build()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; the report owns stdout
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if let Some(shell) = cli.completions {
        generate(shell, &mut Cli::command(), "launchpad-comparer", &mut io::stdout());
        return Ok(());
    }

    if cli.print_config_schema {
        println!("{}", launchpad_comparer::config::generate_json_schema());
        return Ok(());
    }

    if let Some(path) = &cli.config {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
    }

    let (app, loaded_from) = AppConfig::from_file_with_overrides(cli.config.as_deref(), &cli.overrides());
    if let Some(path) = loaded_from {
        tracing::debug!("Loaded configuration from {}", path.display());
    }

    let exit_code = cli::run_compare(CompareConfig::new(cli.first, cli.second, app))?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
