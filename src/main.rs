use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scope_manifest::{describe, render_report, ReportOptions, Status};

#[derive(Parser)]
#[command(name = "scope-manifest")]
#[command(author, version, about = "Report the declared scope of this project")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Excluded,
    NotApplicable,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Excluded => Status::Excluded,
            StatusArg::NotApplicable => Status::NotApplicable,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List every component and its status
    List {
        /// Only list components with this status
        #[arg(short, long)]
        status: Option<StatusArg>,
    },
    /// Show a single component
    Show {
        /// Component name
        name: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List { status } => {
            let options = ReportOptions {
                status: status.map(Status::from),
            };
            print!("{}", render_report(&options));
        }
        Commands::Show { name } => {
            println!("{}", describe(&name)?);
        }
    }

    Ok(())
}
