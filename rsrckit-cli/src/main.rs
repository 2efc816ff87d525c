mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "rsrckit")]
#[command(about = "Rsrckit - Inspect classic Macintosh resource forks", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show header, origin and counts for a resource file
    Info {
        /// Resource file (true fork or flattened)
        input: String,
    },

    /// List resource types and resources
    List {
        /// Resource file (true fork or flattened)
        input: String,

        /// Only list resources of this type (up to 4 characters, space padded)
        #[arg(short = 't', long = "type")]
        type_filter: Option<String>,

        /// Emit JSON rows instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print one resource's payload
    Cat {
        /// Resource file (true fork or flattened)
        input: String,

        /// Resource type (up to 4 characters, space padded)
        #[arg(short = 't', long = "type")]
        type_name: String,

        /// Resource id
        #[arg(short, long)]
        id: i16,

        /// Write the payload to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Render the payload as a hex dump
        #[arg(long)]
        hex: bool,
    },

    /// Export every resource payload into a directory tree
    Extract {
        /// Resource file (true fork or flattened)
        input: String,

        /// Directory to write <TYPE>/<id>.bin files into
        #[arg(short, long)]
        output_dir: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Info { input } => commands::info::execute(&input),

        Commands::List {
            input,
            type_filter,
            json,
        } => commands::list::execute(&input, type_filter.as_deref(), json),

        Commands::Cat {
            input,
            type_name,
            id,
            output,
            hex,
        } => commands::cat::execute(&input, &type_name, id, output.as_deref(), hex),

        Commands::Extract { input, output_dir } => {
            commands::extract::execute(&input, &output_dir)
        }
    }
}
