use rand::Rng;

use super::{fill, pick};
use crate::classify::{classify, Aesthetic};
use crate::model::Persona;
use crate::tables;

/// Caller descriptors a persona is built from.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonaInput<'a> {
    pub vibe: &'a str,
    pub niche: &'a str,
    pub traits: &'a str,
    pub image_description: Option<&'a str>,
}

impl<'a> PersonaInput<'a> {
    pub fn new(vibe: &'a str, niche: &'a str) -> Self {
        Self {
            vibe,
            niche,
            ..Default::default()
        }
    }

    pub fn traits(mut self, traits: &'a str) -> Self {
        self.traits = traits;
        self
    }

    pub fn image_description(mut self, description: &'a str) -> Self {
        self.image_description = Some(description);
        self
    }
}

/// Build a persona: classify, look up the bucket tables, then pick a random
/// name, handle and bio.
pub fn build_persona<R: Rng + ?Sized>(input: &PersonaInput<'_>, rng: &mut R) -> Persona {
    let (aesthetic, tone) = classify(input.vibe, input.traits);

    let name = random_name(rng);
    let handle = random_handle(&name, input.niche, rng);
    let bio = fill(
        pick(rng, tables::BIO_TEMPLATES),
        &[("niche", input.niche), ("vibe", input.vibe)],
    );

    Persona {
        handle,
        bio,
        niche: input.niche.to_string(),
        tone_of_voice: tables::tone_of_voice(tone).to_string(),
        style: format!("{aesthetic} with {tone} energy"),
        aesthetic_words: owned(&tables::aesthetic_words(aesthetic)),
        colour_palette: owned(&tables::colour_palette(aesthetic)),
        styling_notes: styling_notes(aesthetic, input.image_description),
        aesthetic,
        tone,
        name,
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = pick(rng, tables::FIRST_NAMES);
    let last = pick(rng, tables::LAST_NAMES);
    format!("{first} {last}")
}

/// All handle shapes a given name and niche can produce.
pub fn handle_patterns(name: &str, niche: &str) -> [String; 4] {
    let base = name.to_lowercase().replacen(' ', "", 1);
    let niche_short: String = niche
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    [
        format!("@{base}"),
        format!("@{base}_{niche_short}"),
        format!("@the{base}"),
        format!("@{base}hq"),
    ]
}

fn random_handle<R: Rng + ?Sized>(name: &str, niche: &str, rng: &mut R) -> String {
    let patterns = handle_patterns(name, niche);
    let index = rng.gen_range(0..patterns.len());
    patterns[index].clone()
}

fn styling_notes(aesthetic: Aesthetic, image_description: Option<&str>) -> String {
    let notes = tables::styling_notes(aesthetic);
    match image_description.filter(|d| !d.is_empty()) {
        Some(description) => format!("{notes} | Based on image: {description}"),
        None => notes.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Tone;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_hex_colour(s: &str) -> bool {
        s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_bio_repeats_niche_verbatim() {
        let input = PersonaInput::new("soft", "{vibe} lovers");
        let persona = build_persona(&input, &mut StepRng::new(0, 0));
        assert_eq!(
            persona.bio,
            "{vibe} lovers enthusiast ✨ | soft vibes only | Building my dream life"
        );
    }

    #[test]
    fn test_pinned_picks() {
        let input = PersonaInput::new("soft dreamy pastel", "Beauty");
        let persona = build_persona(&input, &mut StepRng::new(0, 0));

        assert_eq!(persona.name, "Luna Rose");
        assert_eq!(persona.handle, "@lunarose");
        assert_eq!(
            persona.bio,
            "Beauty enthusiast ✨ | soft dreamy pastel vibes only | Building my dream life"
        );
        assert_eq!(persona.niche, "Beauty");
        assert_eq!(persona.style, "soft with playful energy");
        assert_eq!(persona.aesthetic, Aesthetic::Soft);
        assert_eq!(persona.tone, Tone::Playful);
        assert_eq!(
            persona.tone_of_voice,
            "fun, casual, uses emojis, conversational"
        );
    }

    #[test]
    fn test_words_and_palette_have_five_valid_entries() {
        let mut rng = StdRng::seed_from_u64(1);
        for vibe in ["soft", "edgy", "luxury", "natural", "vibrant", "xyz123"] {
            let persona = build_persona(&PersonaInput::new(vibe, "travel"), &mut rng);
            assert_eq!(persona.aesthetic_words.len(), 5);
            assert_eq!(persona.colour_palette.len(), 5);
            assert!(persona.colour_palette.iter().all(|c| is_hex_colour(c)));
        }
    }

    #[test]
    fn test_bucket_is_stable_across_random_fields() {
        for seed in 0..20 {
            let persona = build_persona(
                &PersonaInput::new("soft dreamy pastel", "beauty"),
                &mut StdRng::seed_from_u64(seed),
            );
            assert_eq!(persona.aesthetic, Aesthetic::Soft);
            assert_eq!(persona.aesthetic_words[0], "ethereal");
        }
    }

    #[test]
    fn test_unmatched_vibe_falls_back_to_natural() {
        let persona = build_persona(
            &PersonaInput::new("xyz123", "beauty"),
            &mut StepRng::new(0, 0),
        );
        assert_eq!(persona.aesthetic, Aesthetic::Natural);
        assert_eq!(persona.style, "natural with playful energy");
    }

    #[test]
    fn test_handle_is_one_of_the_patterns() {
        for seed in 0..20 {
            let persona = build_persona(
                &PersonaInput::new("bold", "Home Fitness"),
                &mut StdRng::seed_from_u64(seed),
            );
            let patterns = handle_patterns(&persona.name, "Home Fitness");
            assert!(patterns.contains(&persona.handle), "{}", persona.handle);
        }
    }

    #[test]
    fn test_handle_patterns_strip_whitespace() {
        let patterns = handle_patterns("Nova Fox", "Street Food");
        assert_eq!(
            patterns,
            [
                "@novafox".to_string(),
                "@novafox_streetfood".to_string(),
                "@thenovafox".to_string(),
                "@novafoxhq".to_string(),
            ]
        );
    }

    #[test]
    fn test_image_description_is_echoed() {
        let input = PersonaInput::new("glam", "fashion").image_description("red dress, city night");
        let persona = build_persona(&input, &mut StepRng::new(0, 0));
        assert_eq!(
            persona.styling_notes,
            "Clean backgrounds, designer pieces, perfect lighting, polished finish | Based on image: red dress, city night"
        );
    }

    #[test]
    fn test_empty_image_description_is_ignored() {
        let input = PersonaInput::new("glam", "fashion").image_description("");
        let persona = build_persona(&input, &mut StepRng::new(0, 0));
        assert!(!persona.styling_notes.contains("Based on image"));
    }
}
