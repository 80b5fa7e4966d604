//! Mythos template pools. `{name}` and `{niche}` placeholders are filled by
//! the mythos generator.

use crate::classify::Niche;

pub fn taglines(niche: Niche) -> &'static [&'static str] {
    match niche {
        Niche::Beauty => &[
            "{name}: Where beauty meets authenticity",
            "Redefining beauty standards, one post at a time",
            "Your guide to effortless beauty",
        ],
        Niche::Fitness => &[
            "{name}: Strength beyond the surface",
            "Building bodies and breaking barriers",
            "From the ground up, one rep at a time",
        ],
        Niche::Fashion => &[
            "{name}: Style is a language",
            "Where fashion meets fearlessness",
            "Curating confidence through style",
        ],
        Niche::Lifestyle => &[
            "{name}: Living intentionally",
            "Crafting a life worth sharing",
            "More than moments, a movement",
        ],
        Niche::Food => &[
            "{name}: Where flavor tells a story",
            "Cooking with heart and heritage",
            "Every dish has a tale",
        ],
        Niche::Travel => &[
            "{name}: Collecting moments, not things",
            "The world is my canvas",
            "Wandering with purpose",
        ],
    }
}

/// Origin stories only exist for four niches; the others borrow lifestyle's.
pub fn origin_stories(niche: Niche) -> &'static [&'static str] {
    match niche {
        Niche::Beauty => &[
            "{name} grew up in a small town where she learned that true beauty comes from self-acceptance. After years of struggling with conventional beauty standards, she discovered her unique aesthetic and decided to share her journey with the world.",
            "Born into a family of artists, {name} always saw beauty as an art form. Her unconventional approach to {niche} started as a personal experiment but quickly became a movement.",
            "{name}'s journey began in a bustling city where she felt lost in the crowd. {niche} became her way of standing out while staying true to herself.",
        ],
        Niche::Fitness => &[
            "{name}'s transformation started at rock bottom. After a life-changing moment, she discovered that strength wasn't just physical—it was mental, emotional, and spiritual. Now she helps others find their own power.",
            "Growing up as the underdog, {name} found solace in training. What started as a way to cope became a lifestyle, and eventually, a calling to inspire others.",
            "{name} comes from a lineage of athletes, but chose to forge her own path in {niche}, combining traditional discipline with modern innovation.",
        ],
        Niche::Fashion => &[
            "{name} never fit the mold. Growing up, she created her own style as an act of rebellion and self-expression. Today, she helps others find their unique fashion voice.",
            "After years in the corporate world, {name} left it all behind to pursue her true passion: {niche}. Her journey from conformity to creativity inspires thousands.",
            "{name}'s style evolution mirrors her personal growth. Each outfit tells a story of transformation, confidence, and unapologetic self-love.",
        ],
        Niche::Lifestyle | Niche::Food | Niche::Travel => &[
            "{name} rebuilt her life from scratch after realizing she was living someone else's dream. Now she documents her journey toward an authentic, intentional life.",
            "What started as a personal blog about finding balance became {name}'s full-time mission: showing others that you can design a life you love.",
            "{name} traveled the world searching for meaning before realizing it was waiting at home. Her {niche} content reflects the wisdom gained from that journey.",
        ],
    }
}

pub fn philosophy(niche: Niche) -> &'static str {
    match niche {
        Niche::Beauty => "Beauty is not about perfection—it's about authenticity. I believe everyone has a unique glow that deserves to be celebrated.",
        Niche::Fitness => "True strength comes from consistency, not intensity. I'm here to show you that fitness is a lifestyle, not a destination.",
        Niche::Fashion => "Style is personal freedom. There are no rules, only self-expression. Wear what makes you feel powerful.",
        Niche::Lifestyle => "Life is meant to be intentional. Every choice is an opportunity to align with your values and create meaning.",
        Niche::Food => "Food is love made visible. Every recipe tells a story, and every meal is a chance to nourish body and soul.",
        Niche::Travel => "Travel isn't about the destinations—it's about the transformation that happens along the way.",
    }
}

pub fn manifesto(niche: Niche) -> &'static str {
    match niche {
        Niche::Beauty => "I believe in beauty that celebrates individuality, not conformity. In self-care that nourishes the soul, not just the skin. In confidence that comes from within.",
        Niche::Fitness => "I stand for strength that empowers, not exhausts. For progress over perfection. For showing up, even when it's hard. For building a body that serves your life.",
        Niche::Fashion => "I champion style as self-expression, not imitation. Fashion that makes you feel like yourself, only amplified. Confidence that comes from wearing what you love.",
        Niche::Lifestyle => "I advocate for living with intention, not on autopilot. For creating rather than consuming. For building a life that reflects your values, not someone else's highlight reel.",
        Niche::Food => "I celebrate food as connection, not restriction. Recipes rooted in culture and love. Meals that nourish body, mind, and relationships.",
        Niche::Travel => "I believe in traveling with curiosity, not just a camera. In experiencing cultures, not just visiting them. In coming home changed.",
    }
}

pub const JOURNEY_PHASES: [&str; 3] = [
    "The Beginning - Finding my voice",
    "The Growth - Building community",
    "The Evolution - Expanding impact",
];

/// Only the first three are surfaced in a mythos.
pub const MILESTONES: [&str; 6] = [
    "Started sharing journey online",
    "Hit first viral moment",
    "Launched signature program/product",
    "Built community of thousands",
    "Expanded into new platforms",
    "Became voice for authenticity",
];

pub const CONTENT_STYLE: &str = "Authentic, relatable, educational";
pub const COMMUNITY_VIBE: &str = "Supportive, inspiring, real";
