use idolforge_collab::{AutonomousInfluencer, CycleReport};
use idolforge_core::GenerationResult;
use serde_json::json;

use super::OutputFormat;

pub fn format_generation(result: &GenerationResult, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(result).unwrap_or_default(),
        OutputFormat::Text => format_generation_text(result),
    }
}

fn format_generation_text(result: &GenerationResult) -> String {
    let p = &result.persona;
    let mut out = String::new();

    out.push_str(&format!("{} ({})\n", p.name, p.handle));
    out.push_str(&format!("Niche:  {}\n", p.niche));
    out.push_str(&format!("Style:  {}\n", p.style));
    out.push_str(&format!("Tone:   {}\n", p.tone_of_voice));
    out.push_str(&format!("Bio:    {}\n", p.bio));
    out.push_str(&format!("Words:  {}\n", p.aesthetic_words.join(", ")));
    out.push_str(&format!("Colours: {}\n", p.colour_palette.join(" ")));

    if !result.posts.is_empty() {
        out.push_str(&format!("\nPosts ({}):\n", result.posts.len()));
        for post in &result.posts {
            out.push_str(&format!("\u{25c6} [{}] {}\n", post.platform, post.concept));
            out.push_str(&format!("  Hook:    {}\n", post.hook));
            out.push_str(&format!("  Caption: {}\n", post.caption));
            if !post.hashtags.is_empty() {
                out.push_str(&format!("  Tags:    {}\n", post.hashtags.join(" ")));
            }
            if let Some(music) = &post.music_suggestion {
                out.push_str(&format!("  Sound:   {music}\n"));
            }
        }
    }

    if let Some(m) = &result.mythos {
        out.push_str(&format!("\nTagline: {}\n", m.tagline));
        out.push_str(&format!("Origin:  {}\n", m.origin_story));
        out.push_str(&format!("Manifesto: {}\n", m.manifesto));
    }

    if let Some(images) = &result.images {
        if let Some(profile) = &images.profile_image {
            out.push_str(&format!("\nProfile image: {profile}\n"));
        }
        if let Some(note) = &images.note {
            out.push_str(&format!("Images: {note}\n"));
        }
    }

    if let Some(song) = &result.music {
        out.push_str(&format!("\nSong: {}\n", song.title));
        out.push_str(&format!("  {}\n", song.concept));
        out.push_str(&format!("  Hook: {}\n", song.hook_lyrics));
    }
    out
}

pub fn format_autonomous(
    influencer: &AutonomousInfluencer,
    report: &CycleReport,
    fmt: OutputFormat,
) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "status": influencer.status(),
            "influencer": influencer,
            "report": report,
        }))
        .unwrap_or_default(),
        OutputFormat::Text => format_autonomous_text(influencer, report),
    }
}

fn format_autonomous_text(influencer: &AutonomousInfluencer, report: &CycleReport) -> String {
    let status = influencer.status();
    let mut out = String::new();

    out.push_str(&format!("{} ({})\n", status.name, status.handle));
    out.push_str(&format!("Tagline: {}\n", influencer.mythos.tagline));
    out.push_str(&format!(
        "Agent: {}  Voice: {}  Music: {}  Images: {}\n",
        status.agent, status.voice, status.music, status.images
    ));
    if let Some(id) = &status.session_id {
        out.push_str(&format!("Session: {id}\n"));
    }

    out.push_str(&format!(
        "\nCycles: {} ({} generated, {} narrated)\n",
        report.total_cycles, report.content_generated, report.voice_generated
    ));
    for cycle in &report.cycles {
        let text = cycle.content.text.as_deref().unwrap_or("(no content)");
        out.push_str(&format!(
            "\u{25c6} #{} {}  {}\n",
            cycle.cycle,
            cycle.timestamp.format("%H:%M:%S"),
            text
        ));
        if let Some(path) = &cycle.content.voice_path {
            out.push_str(&format!("  Voice: {}\n", path.display()));
        }
        if let Some(image) = &cycle.content.suggested_image {
            out.push_str(&format!("  Image: {image}\n"));
        }
    }
    out
}
