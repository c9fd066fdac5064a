use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use modelconf::{ConfigError, ConfigLoader, ErrorKind};

#[derive(Parser)]
#[command(
    name = "modelconf",
    about = "Validates directories of data-model configuration documents",
    version,
    author,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every document under a config directory
    Validate(LoadArgs),

    /// Print a validated object
    Inspect {
        #[command(flatten)]
        load: LoadArgs,

        #[arg(value_enum)]
        object_type: InspectType,

        #[arg(help = "Name of the table or DB connection")]
        name: String,
    },
}

#[derive(Args)]
struct LoadArgs {
    /// Path to the configuration directory
    #[arg(short = 'c', long, env = "MODELCONF_CONFIG_DIR")]
    config_dir: PathBuf,

    /// Model defined outside the config directory that joins may target (repeatable)
    #[arg(long = "static-model", value_name = "NAME")]
    static_models: Vec<String>,
}

impl LoadArgs {
    fn loader(&self) -> Result<ConfigLoader, ConfigError> {
        Ok(ConfigLoader::new(&self.config_dir)?.with_static_models(self.static_models.iter().cloned()))
    }
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum InspectType {
    Table,
    Connection,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Validate(args) => validate_command(&args),
        Commands::Inspect {
            load,
            object_type,
            name,
        } => inspect_command(&load, object_type, &name),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(err),
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("modelconf=warn"),
        1 => EnvFilter::new("modelconf=info"),
        _ => EnvFilter::new("modelconf=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn validate_command(args: &LoadArgs) -> Result<()> {
    println!(
        "Validating configuration directory: {}",
        args.config_dir.display()
    );

    let config = args.loader()?.load_all()?;

    println!(
        "\n{} ({} tables, {} DB connections)",
        "✅ All validations passed!".green(),
        config.tables.len(),
        config.db_connections.len()
    );
    Ok(())
}

fn inspect_command(args: &LoadArgs, object_type: InspectType, name: &str) -> Result<()> {
    let config = args.loader()?.load_all()?;

    match object_type {
        InspectType::Table => {
            if let Some(table) = config.table(name) {
                table.pretty_print();
            } else {
                anyhow::bail!("Table not found: {}", name);
            }
        }
        InspectType::Connection => {
            if let Some(connection) = config.db_connection(name) {
                println!("{connection:#?}");
            } else {
                anyhow::bail!("DB connection not found: {}", name);
            }
        }
    }

    Ok(())
}

/// Print the failure and pick the exit code for its category
fn report_failure(err: anyhow::Error) -> ExitCode {
    let err = match err.downcast::<ConfigError>() {
        Ok(config_error) => config_error,
        Err(other) => {
            eprintln!("{} {other:#}", "error:".red().bold());
            return ExitCode::from(1);
        }
    };

    let kind = err.kind();
    if kind == ErrorKind::MalformedDocument {
        eprintln!("{:?}", miette::Report::new(err));
    } else {
        eprintln!("{err}");
    }
    eprintln!("{}", "✗ Validation failed".red());

    ExitCode::from(exit_code(kind))
}

fn exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::ConfigurationAbsent => 3,
        ErrorKind::MalformedDocument => 4,
        ErrorKind::SchemaViolation => 5,
        ErrorKind::ReferentialViolation => 6,
        ErrorKind::Io => 1,
    }
}
