mod cli;
mod config;
mod content;
mod env;
mod error;
mod logging;
mod models;
mod renderer;
mod writer;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::error::ReportError;

#[derive(Parser)]
#[command(name = "daily-report", version)]
#[command(about = "Generate daily status reports as HTML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    gen: GenArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct GenArgs {
    /// Path to JSON config file (defaults to config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Date for the report, YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    date: Option<String>,

    /// Output directory (defaults to reports/)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Templates directory (defaults to templates/)
    #[arg(short, long)]
    templates: Option<PathBuf>,

    /// Dry run - print HTML to stdout instead of writing file
    #[arg(long)]
    dry_run: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create config.json and the default template
    Init {
        /// Directory to initialize (defaults to the current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show commands
    Show {
        #[command(subcommand)]
        command: ShowCommands,
    },
    /// Template commands
    Templates {
        #[command(subcommand)]
        command: TemplatesCommands,
    },
}

#[derive(Subcommand)]
enum ShowCommands {
    /// Locate the most recent report
    Latest {
        /// Output directory (defaults to reports/)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum TemplatesCommands {
    /// List available templates
    List {
        /// Templates directory (defaults to templates/)
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    env::load_dotenv();

    let generating = cli.command.is_none();

    let result = match cli.command {
        Some(Commands::Init { path }) => cli::init::run(path),
        Some(Commands::Show { command }) => match command {
            ShowCommands::Latest { output } => cli::show::latest(output),
        },
        Some(Commands::Templates { command }) => match command {
            TemplatesCommands::List { templates } => cli::templates::list(templates),
        },
        None => {
            let args = cli.gen;
            cli::gen::run(
                args.config,
                args.date,
                args.output,
                args.templates,
                args.dry_run,
            )
        }
    };

    if let Err(e) = result {
        match e {
            ReportError::InvalidDate(_) => eprintln!("{}", e),
            _ if generating => eprintln!("❌ Error generando reporte: {}", e),
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
