use rand::Rng;

use super::pick;
use crate::model::{Persona, Song};
use crate::tables::music as pools;

/// Template song for `persona`. Only the title is random; lyrics are one
/// fixed block per niche bucket.
///
/// `genre_mood` is accepted for call-site symmetry with the audio path but
/// does not change the template output.
pub fn generate_song<R: Rng + ?Sized>(persona: &Persona, genre_mood: &str, rng: &mut R) -> Song {
    let niche = persona.niche_bucket();
    let lead = persona
        .tone_of_voice
        .split(',')
        .next()
        .unwrap_or_default()
        .trim();

    tracing::debug!(genre_mood, %niche, "templating song");

    Song {
        title: pick(rng, pools::song_titles(niche)).to_string(),
        concept: format!(
            "{lead} anthem about {} journey and self-empowerment",
            persona.niche
        ),
        hook_lyrics: pools::hook_lyrics(niche).to_string(),
        verse_lyrics: pools::verse_lyrics(niche).to_string(),
    }
}
