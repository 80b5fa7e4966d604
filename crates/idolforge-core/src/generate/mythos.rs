use rand::Rng;

use super::{fill, pick};
use crate::model::{Journey, Mythos, Persona, SignatureElements};
use crate::tables::mythos as pools;

const SURFACED_MILESTONES: usize = 3;

/// Build a backstory bundle for `persona`. Only the tagline and origin story
/// are random; everything else is fixed per niche bucket.
pub fn generate_mythos<R: Rng + ?Sized>(persona: &Persona, rng: &mut R) -> Mythos {
    let niche = persona.niche_bucket();
    let vars = [("name", persona.name.as_str()), ("niche", persona.niche.as_str())];

    Mythos {
        tagline: fill(pick(rng, pools::taglines(niche)), &vars),
        origin_story: fill(pick(rng, pools::origin_stories(niche)), &vars),
        core_philosophy: pools::philosophy(niche).to_string(),
        the_journey: Journey {
            phase_1: pools::JOURNEY_PHASES[0].to_string(),
            phase_2: pools::JOURNEY_PHASES[1].to_string(),
            phase_3: pools::JOURNEY_PHASES[2].to_string(),
            key_milestones: pools::MILESTONES[..SURFACED_MILESTONES]
                .iter()
                .map(|m| m.to_string())
                .collect(),
        },
        signature_elements: SignatureElements {
            visual_trademark: format!("{} aesthetic with consistent color story", persona.aesthetic),
            content_style: pools::CONTENT_STYLE.to_string(),
            community_vibe: pools::COMMUNITY_VIBE.to_string(),
            unique_approach: format!(
                "Combines {} expertise with genuine storytelling",
                persona.niche
            ),
        },
        manifesto: pools::manifesto(niche).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{build_persona, PersonaInput};
    use rand::rngs::mock::StepRng;

    fn persona(vibe: &str, niche: &str) -> Persona {
        build_persona(&PersonaInput::new(vibe, niche), &mut StepRng::new(0, 0))
    }

    #[test]
    fn test_beauty_mythos() {
        let persona = persona("soft", "Beauty");
        let mythos = generate_mythos(&persona, &mut StepRng::new(0, 0));

        assert_eq!(mythos.tagline, "Luna Rose: Where beauty meets authenticity");
        assert!(mythos.origin_story.starts_with("Luna Rose grew up in a small town"));
        assert!(mythos.core_philosophy.starts_with("Beauty is not about perfection"));
        assert_eq!(
            mythos.signature_elements.visual_trademark,
            "soft aesthetic with consistent color story"
        );
        assert_eq!(
            mythos.signature_elements.unique_approach,
            "Combines Beauty expertise with genuine storytelling"
        );
    }

    #[test]
    fn test_journey_surfaces_first_three_milestones() {
        let mythos = generate_mythos(&persona("bold", "fitness"), &mut StepRng::new(0, 0));
        assert_eq!(mythos.the_journey.phase_1, "The Beginning - Finding my voice");
        assert_eq!(
            mythos.the_journey.key_milestones,
            vec![
                "Started sharing journey online",
                "Hit first viral moment",
                "Launched signature program/product",
            ]
        );
    }

    #[test]
    fn test_food_borrows_lifestyle_origin_stories() {
        let mythos = generate_mythos(&persona("natural", "street food"), &mut StepRng::new(0, 0));
        assert_eq!(mythos.tagline, "Luna Rose: Where flavor tells a story");
        assert!(mythos
            .origin_story
            .starts_with("Luna Rose rebuilt her life from scratch"));
        assert!(mythos.manifesto.starts_with("I celebrate food as connection"));
    }

    #[test]
    fn test_unknown_niche_uses_lifestyle() {
        let mythos = generate_mythos(&persona("natural", "gaming"), &mut StepRng::new(0, 0));
        assert_eq!(mythos.tagline, "Luna Rose: Living intentionally");
    }

    #[test]
    fn test_niche_placeholder_is_filled() {
        let persona = persona("soft", "beauty");
        for _ in 0..30 {
            let mythos = generate_mythos(&persona, &mut rand::thread_rng());
            assert!(!mythos.origin_story.contains('{'));
            assert!(!mythos.tagline.contains('{'));
        }
    }
}
