use crate::model::Persona;

/// Write a full lyric sheet in the section layout audio services expect:
/// verse, pre-chorus, chorus, second verse, chorus, bridge, outro.
pub fn write_lyrics(persona: &Persona, theme: &str) -> String {
    let Persona {
        name,
        tone_of_voice: tone,
        niche,
        ..
    } = persona;

    let chorus = [
        format!("I'm {name}, breaking through the noise"),
        "My voice, my choice, I'm making my own choice".to_string(),
        format!("{theme} running through my veins"),
        "Nothing's gonna break these chains".to_string(),
    ]
    .join("\n");

    let sections = [
        section(
            "Verse 1",
            &[
                format!("In the {niche} world, I found my way").as_str(),
                format!("Living {tone}, every single day").as_str(),
            ],
        ),
        section(
            "Pre-Chorus",
            &[
                format!("{theme} is more than just a dream").as_str(),
                "It's the essence of my everything",
            ],
        ),
        section("Chorus", &[chorus.as_str()]),
        section(
            "Verse 2",
            &[
                "Every moment, every beat",
                format!("{tone} energy, can't be beat").as_str(),
                format!("In this {niche} space I've made").as_str(),
                "My legacy will never fade",
            ],
        ),
        section("Chorus", &[chorus.as_str()]),
        section(
            "Bridge",
            &[
                "This is who I am",
                "This is where I stand",
                format!("{theme} in my soul").as_str(),
                "I'm in control",
            ],
        ),
        section("Outro", &[format!("I'm {name}").as_str(), "And I'm here to stay"]),
    ];

    sections.join("\n\n")
}

fn section(label: &str, lines: &[&str]) -> String {
    format!("[{label}]\n{}", lines.join("\n"))
}
