use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use idolforge_core::generate::DEFAULT_GENRE_MOOD;
use idolforge_core::{create_influencer, GenerateRequest};

use crate::output::format::format_generation;
use crate::output::OutputFormat;

const DEFAULT_NICHE: &str = "lifestyle";

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Free-text vibe, e.g. "soft dreamy pastel"
    pub vibe: Option<String>,

    /// Content niche, e.g. beauty, fitness, travel
    pub niche: Option<String>,

    /// Comma-separated platforms (default: instagram,tiktok,x)
    pub platforms: Option<String>,

    /// Include a song
    #[arg(long)]
    pub music: bool,

    /// Music genre/mood
    #[arg(long, default_value = DEFAULT_GENRE_MOOD)]
    pub genre: String,

    /// Number of posts to generate (at most 100)
    #[arg(long, default_value_t = 5)]
    pub posts: usize,

    /// Extra personality traits fed to the classifier
    #[arg(long, default_value = "")]
    pub traits: String,

    /// Description of a reference image, echoed into the styling notes
    #[arg(long)]
    pub image_description: Option<String>,

    /// Skip the mythos section
    #[arg(long)]
    pub no_mythos: bool,
}

impl GenerateArgs {
    pub fn to_request(&self) -> GenerateRequest {
        let mut request = GenerateRequest::new(
            self.vibe.clone().unwrap_or_default(),
            self.niche.as_deref().unwrap_or(DEFAULT_NICHE),
        )
        .with_traits(self.traits.as_str())
        .with_post_count(self.posts)
        .with_mythos(!self.no_mythos)
        .with_images(false);

        if let Some(csv) = &self.platforms {
            request = request.with_platforms(csv.split(',').map(str::trim));
        }
        if let Some(description) = &self.image_description {
            request = request.with_image_description(description.as_str());
        }
        if self.music {
            request = request.with_music(self.genre.as_str());
        }
        request
    }
}

/// Offline generation: core tables only, no collaborator calls.
pub fn run(args: &GenerateArgs, format: OutputFormat) -> Result<()> {
    let request = args.to_request();
    debug!(?request, "generating");
    let result = create_influencer(&request).context("Failed to generate influencer")?;
    println!("{}", format_generation(&result, format));
    Ok(())
}
