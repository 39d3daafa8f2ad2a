use crate::console::{run_report, run_search, ReportArgs, SearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use talent_desk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Talent Desk",
    about = "Serve and search the applicant tracking catalog from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Filter one collection and print the matching records
    Search(SearchArgs),
    /// Print the dashboard overview, hiring report and inbox counters
    Report(ReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Search(args) => run_search(args),
        Command::Report(args) => run_report(args),
    }
}
