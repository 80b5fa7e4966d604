use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use idolforge_collab::{AutonomousOptions, Autopilot};
use idolforge_core::{build_persona, generate_mythos, ForgeConfig, PersonaInput};

use crate::output::format::format_autonomous;
use crate::output::OutputFormat;

#[derive(Args, Debug)]
pub struct AutonomousArgs {
    /// Free-text vibe, e.g. "edgy confident"
    pub vibe: String,

    /// Content niche
    pub niche: String,

    /// Extra personality traits fed to the classifier
    #[arg(long, default_value = "")]
    pub traits: String,

    /// Content cycles to run after setup
    #[arg(long, default_value_t = 1)]
    pub cycles: usize,

    /// Seconds to wait between cycles
    #[arg(long, default_value_t = 2)]
    pub pause_secs: u64,

    /// Music genre/mood for the signature song
    #[arg(long, default_value = "electronic pop")]
    pub genre: String,

    #[arg(long)]
    pub no_agent: bool,

    #[arg(long)]
    pub no_images: bool,

    #[arg(long)]
    pub no_voice: bool,

    #[arg(long)]
    pub no_music: bool,
}

impl AutonomousArgs {
    fn options(&self) -> AutonomousOptions {
        AutonomousOptions {
            include_agent: !self.no_agent,
            include_images: !self.no_images,
            include_voice: !self.no_voice,
            include_music: !self.no_music,
            genre_mood: self.genre.clone(),
        }
    }
}

pub fn run(args: &AutonomousArgs, format: OutputFormat) -> Result<()> {
    if args.vibe.trim().is_empty() || args.niche.trim().is_empty() {
        anyhow::bail!("Missing required fields: vibe and niche are required");
    }

    let config = ForgeConfig::from_env().context("Invalid configuration")?;
    let (persona, mythos) = {
        let mut rng = rand::thread_rng();
        let input = PersonaInput::new(&args.vibe, &args.niche).traits(&args.traits);
        let persona = build_persona(&input, &mut rng);
        let mythos = generate_mythos(&persona, &mut rng);
        (persona, mythos)
    };

    debug!(name = %persona.name, cycles = args.cycles, "starting autopilot");
    let autopilot = Autopilot::new(&config).with_cycle_pause(Duration::from_secs(args.pause_secs));

    let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
    let (influencer, report) = rt.block_on(async {
        let mut influencer = autopilot
            .create_autonomous_influencer(persona, mythos, &args.options())
            .await;
        let report = autopilot.run_cycles(&mut influencer, args.cycles).await;
        (influencer, report)
    });

    println!("{}", format_autonomous(&influencer, &report, format));
    Ok(())
}
