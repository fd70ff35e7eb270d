//! Path computation CLI (pcectl)

use clap::{Parser, Subcommand};
use pce_path_engine::PathStatus;
use pcectl::commands::{ComputeArgs, ComputeCommand, ShowCommand, ValidateCommand};

#[derive(Parser)]
#[command(name = "pcectl")]
#[command(about = "Transport-network path computation CLI")]
#[command(version)]
#[command(long_about = "
Transport-network path computation CLI

Runs the path computation engine against a context properties file holding
PNF and link records, and inspects or validates the parsed topology.

Examples:
  pcectl compute -c topology.properties --src <pnf> --dst <pnf>
  pcectl compute -c topology.properties --src <pnf> --dst <pnf> \\
         --backup-dst <pnf> --json     # primary plus backup path, JSON out
  pcectl compute -c topology.properties --src <pnf> --dst <pnf> --end-to-end
  pcectl show -c topology.properties   # print PNFs, links and domains
  pcectl validate -c topology.properties

Exit codes: 0 success, 2 not-found, 3 failure, 1 error.
")]
struct Cli {
    /// Enable verbose output
    #[arg(short = 'V', long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a path (and optionally a backup path) between two PNFs
    Compute(ComputeArgs),

    /// Print the parsed topology
    Show {
        /// Context properties file
        #[arg(short, long)]
        context: String,

        /// Context prefix of the PNF records
        #[arg(long, default_value = "pnfs")]
        pnfs_pfx: String,

        /// Context prefix of the link records
        #[arg(long, default_value = "links")]
        links_pfx: String,
    },

    /// Validate context records and topology construction
    Validate {
        /// Context properties file
        #[arg(short, long)]
        context: String,

        /// Context prefix of the PNF records
        #[arg(long, default_value = "pnfs")]
        pnfs_pfx: String,

        /// Context prefix of the link records
        #[arg(long, default_value = "links")]
        links_pfx: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match &cli.command {
        Commands::Compute(args) => ComputeCommand::new().execute(args).map(Some),
        Commands::Show {
            context,
            pnfs_pfx,
            links_pfx,
        } => ShowCommand::new()
            .execute(context, pnfs_pfx, links_pfx)
            .map(|_| None),
        Commands::Validate {
            context,
            pnfs_pfx,
            links_pfx,
        } => ValidateCommand::new()
            .execute(context, pnfs_pfx, links_pfx)
            .map(|_| None),
    };

    let code = match result {
        Ok(None) | Ok(Some(PathStatus::Success)) => 0,
        Ok(Some(PathStatus::NotFound)) => 2,
        Ok(Some(PathStatus::Failure)) => 3,
        Err(error) => {
            if !cli.quiet {
                eprintln!("Error: {}", error);
                if cli.verbose || cli.debug {
                    for cause in error.chain().skip(1) {
                        eprintln!("  Caused by: {}", cause);
                    }
                }
            }
            1
        }
    };
    std::process::exit(code);
}
