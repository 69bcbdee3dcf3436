use crate::demo::{run_demo, run_frequent_flyer_check, DemoArgs, FrequentFlyerArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use card_intake::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Card Intake",
    about = "Serve and exercise the credit card application intake flow",
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
    /// Check whether a frequent flyer number is well formed
    Ffn(FrequentFlyerArgs),
    /// Walk a scripted applicant through the intake flow against an in-memory store
    Demo(DemoArgs),
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
        Command::Ffn(args) => run_frequent_flyer_check(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
