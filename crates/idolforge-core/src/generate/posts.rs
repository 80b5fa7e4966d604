use rand::Rng;

use super::{pick, MAX_POST_COUNT};
use crate::model::{Persona, Platform, Post};
use crate::tables;

const INSTAGRAM_HASHTAG_LIMIT: usize = 8;

/// Generate posts for each platform in order.
///
/// Every platform gets `ceil(count / platforms.len())` posts, so the total
/// can exceed `count`. `count` is clamped to [`MAX_POST_COUNT`]. Concepts
/// are picked round robin by the post's index within its platform.
pub fn generate_posts<R, S>(persona: &Persona, platforms: &[S], count: usize, rng: &mut R) -> Vec<Post>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    if platforms.is_empty() {
        return Vec::new();
    }

    let per_platform = count.min(MAX_POST_COUNT).div_ceil(platforms.len());
    let concepts = tables::concepts(persona.niche_bucket());

    let mut posts = Vec::with_capacity(per_platform.saturating_mul(platforms.len()));
    for platform in platforms {
        let platform = platform.as_ref();
        for index in 0..per_platform {
            let concept = concepts[index % concepts.len()];
            posts.push(generate_post(persona, platform, concept, rng));
        }
    }
    posts
}

fn generate_post<R: Rng + ?Sized>(
    persona: &Persona,
    platform: &str,
    concept: &str,
    rng: &mut R,
) -> Post {
    let mut post = Post {
        platform: platform.to_string(),
        concept: concept.to_string(),
        visual_idea: format!(
            "{} setting with {} accent colors. {concept}. Match persona's {} aesthetic.",
            persona.primary_aesthetic_word(),
            persona.primary_colour(),
            persona.style
        ),
        alt_text: format!(
            "{} - {concept}. {} content creator sharing {} vibes.",
            persona.name, persona.niche, persona.style
        ),
        hook: String::new(),
        caption: String::new(),
        hashtags: Vec::new(),
        music_suggestion: None,
    };

    match Platform::from_name(platform) {
        Platform::X => {
            let hook = pick(rng, tables::X_HOOKS);
            let caption = format!(
                "{hook} {} is the key to leveling up. Who's with me?",
                concept.to_lowercase()
            );
            post.caption = truncate_chars(caption, Platform::X.caption_limit());
            post.hook = hook.to_string();
        }
        Platform::TikTok => {
            let hook = pick(rng, tables::TIKTOK_HOOKS);
            let niche_tag: String = persona.niche.split_whitespace().collect();
            post.caption = format!("{hook} {concept} #{niche_tag} #fyp #viral");
            post.hook = hook.to_string();
            post.hashtags = niche_hashtags(persona)
                .chain(tables::VIRAL_TAGS.iter().map(|t| t.to_string()))
                .collect();
            post.music_suggestion = Some(format!(
                "{} - trending sounds that match {concept}",
                tables::music_genre(persona.tone)
            ));
        }
        Platform::Instagram => {
            let hook = pick(rng, tables::INSTAGRAM_HOOKS);
            post.caption = format!(
                "{hook} ✨\n\n{concept} - and I'm here for it.\n\nDouble tap if you agree! 💫\n\n{}\n\n---",
                persona.bio
            );
            post.hook = hook.to_string();
            post.hashtags = niche_hashtags(persona)
                .take(INSTAGRAM_HASHTAG_LIMIT)
                .collect();
        }
        Platform::OnlyFans => {
            post.caption = format!(
                "Exclusive: {concept} 💋\n\nFor my VIPs only. You know what to do.\n\n- {}",
                persona.name
            );
            post.hook = tables::ONLYFANS_HOOK.to_string();
        }
    }

    post
}

fn niche_hashtags(persona: &Persona) -> impl Iterator<Item = String> {
    tables::hashtags(persona.niche_bucket())
        .iter()
        .map(|t| t.to_string())
}

fn truncate_chars(text: String, limit: Option<usize>) -> String {
    match limit {
        Some(limit) if text.chars().count() > limit => text.chars().take(limit).collect(),
        _ => text,
    }
}
