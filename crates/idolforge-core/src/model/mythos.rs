use serde::{Deserialize, Serialize};

/// Backstory bundle for a persona.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mythos {
    pub tagline: String,
    pub origin_story: String,
    pub core_philosophy: String,
    pub the_journey: Journey,
    pub signature_elements: SignatureElements,
    pub manifesto: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Journey {
    pub phase_1: String,
    pub phase_2: String,
    pub phase_3: String,
    pub key_milestones: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignatureElements {
    pub visual_trademark: String,
    pub content_style: String,
    pub community_vibe: String,
    pub unique_approach: String,
}
