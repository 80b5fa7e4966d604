use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod output;

#[derive(Parser)]
#[command(
    name = "idolforge",
    version,
    about = "Generate synthetic influencer personas, posts, mythos and lyrics",
    args_conflicts_with_subcommands = true,
    after_help = "Examples:\n  \
        idolforge \"soft dreamy\" beauty instagram,tiktok\n  \
        idolforge \"edgy confident\" fitness x,instagram --music --genre \"hip-hop energetic\"\n  \
        idolforge \"luxury elegant\" fashion instagram,onlyfans --format text"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "json")]
    format: output::OutputFormat,

    #[command(subcommand)]
    command: Option<commands::Commands>,

    #[command(flatten)]
    generate: commands::generate::GenerateArgs,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Some(commands::Commands::Serve(args)) => commands::serve::run(args),
        Some(commands::Commands::Autonomous(args)) => commands::autonomous::run(args, cli.format),
        None if cli.generate.vibe.is_none() => {
            Cli::command().print_help()?;
            Ok(())
        }
        None => commands::generate::run(&cli.generate, cli.format),
    }
}
