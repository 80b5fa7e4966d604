pub mod autonomous;
pub mod generate;
pub mod serve;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve(serve::ServeArgs),
    /// Set up an autonomous influencer and run content cycles
    Autonomous(autonomous::AutonomousArgs),
}
