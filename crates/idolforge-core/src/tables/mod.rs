//! Static lookup tables. Pure data: every function here is a `match` over a
//! bucket returning `'static` strings.

pub mod music;
pub mod mythos;

use crate::classify::{Aesthetic, Niche, Tone};

pub const FIRST_NAMES: &[&str] = &[
    "Luna", "Nova", "Aria", "Jade", "Phoenix", "Sage", "River", "Sky",
];

pub const LAST_NAMES: &[&str] = &[
    "Rose", "Moon", "Stone", "Wild", "Grace", "Fox", "Rain", "Star",
];

/// Bio templates; `{niche}` and `{vibe}` are replaced verbatim.
pub const BIO_TEMPLATES: &[&str] = &[
    "{niche} enthusiast ✨ | {vibe} vibes only | Building my dream life",
    "Your go-to for {niche} | {vibe} aesthetic | Let's grow together",
    "{niche} creator | {vibe} energy | Inspiring you daily",
    "Living for {niche} | {vibe} always | Join the journey",
];

pub fn aesthetic_words(aesthetic: Aesthetic) -> [&'static str; 5] {
    match aesthetic {
        Aesthetic::Soft => ["ethereal", "dreamy", "gentle", "pastel", "whimsical"],
        Aesthetic::Edgy => ["bold", "dark", "rebellious", "gritty", "raw"],
        Aesthetic::Luxury => ["elegant", "refined", "opulent", "sophisticated", "polished"],
        Aesthetic::Natural => ["organic", "earthy", "authentic", "fresh", "minimal"],
        Aesthetic::Vibrant => ["energetic", "colorful", "dynamic", "playful", "bright"],
    }
}

pub fn colour_palette(aesthetic: Aesthetic) -> [&'static str; 5] {
    match aesthetic {
        Aesthetic::Soft => ["#FFE4E1", "#E6E6FA", "#F0E68C", "#FFF5EE", "#F5F5DC"],
        Aesthetic::Edgy => ["#1C1C1C", "#8B0000", "#2F4F4F", "#36454F", "#FF6347"],
        Aesthetic::Luxury => ["#C9A063", "#000000", "#FFFFFF", "#8B7355", "#DAA520"],
        Aesthetic::Natural => ["#8FBC8F", "#F5DEB3", "#DEB887", "#D2B48C", "#FAEBD7"],
        Aesthetic::Vibrant => ["#FF69B4", "#FFD700", "#00CED1", "#FF6347", "#7B68EE"],
    }
}

pub fn styling_notes(aesthetic: Aesthetic) -> &'static str {
    match aesthetic {
        Aesthetic::Soft => "Soft lighting, muted tones, flowing fabrics, gentle expressions",
        Aesthetic::Edgy => "High contrast, bold angles, leather/denim, confident poses",
        Aesthetic::Luxury => {
            "Clean backgrounds, designer pieces, perfect lighting, polished finish"
        }
        Aesthetic::Natural => "Natural light, minimal makeup, organic textures, candid moments",
        Aesthetic::Vibrant => {
            "Bright colors, dynamic poses, playful props, energetic compositions"
        }
    }
}

pub fn tone_of_voice(tone: Tone) -> &'static str {
    match tone {
        Tone::Playful => "fun, casual, uses emojis, conversational",
        Tone::Professional => "polished, informative, authoritative, clear",
        Tone::Sassy => "witty, confident, bold, direct",
        Tone::Inspiring => "motivational, uplifting, empowering, warm",
        Tone::Mysterious => "enigmatic, intriguing, poetic, artistic",
    }
}

/// Background-track genre suggested for short-form video.
pub fn music_genre(tone: Tone) -> &'static str {
    match tone {
        Tone::Playful => "upbeat pop",
        Tone::Professional => "smooth jazz or lofi",
        Tone::Sassy => "confident hip-hop",
        Tone::Inspiring => "epic orchestral",
        Tone::Mysterious => "ambient electronic",
    }
}

pub fn hashtags(niche: Niche) -> &'static [&'static str] {
    match niche {
        Niche::Fitness => &[
            "#FitnessMotivation",
            "#WorkoutRoutine",
            "#FitLife",
            "#GymLife",
            "#HealthyLiving",
        ],
        Niche::Fashion => &[
            "#OOTD",
            "#FashionInspo",
            "#StyleGuide",
            "#FashionBlogger",
            "#Fashionista",
        ],
        Niche::Beauty => &[
            "#BeautyTips",
            "#MakeupTutorial",
            "#Skincare",
            "#BeautyRoutine",
            "#GlowUp",
        ],
        Niche::Lifestyle => &[
            "#LifestyleContent",
            "#DailyVlog",
            "#LifestyleBlogger",
            "#Aesthetic",
            "#Vibes",
        ],
        Niche::Food => &[
            "#FoodPhotography",
            "#Foodie",
            "#Recipes",
            "#HomeCooking",
            "#FoodLover",
        ],
        Niche::Travel => &[
            "#TravelGram",
            "#Wanderlust",
            "#TravelPhotography",
            "#ExploreMore",
            "#TravelBlogger",
        ],
    }
}

/// Content ideas, picked round robin by post index.
pub fn concepts(niche: Niche) -> &'static [&'static str] {
    match niche {
        Niche::Fitness => &[
            "Morning workout routine",
            "Healthy meal prep",
            "Transformation journey update",
            "Workout tips for beginners",
            "Fitness motivation",
        ],
        Niche::Fashion => &[
            "Styling one piece three ways",
            "Closet organization tips",
            "Thrift flip transformation",
            "Seasonal wardrobe essentials",
            "Get ready with me",
        ],
        Niche::Beauty => &[
            "Skincare routine reveal",
            "Everyday makeup tutorial",
            "Product review and demo",
            "Glow up transformation",
            "Skincare myth busting",
        ],
        Niche::Lifestyle => &[
            "Day in my life",
            "Morning routine that changed my life",
            "Productivity tips",
            "Self-care Sunday",
            "Weekly reset routine",
        ],
        Niche::Food => &[
            "Easy 15-minute recipe",
            "What I eat in a day",
            "Cooking hack you need",
            "Restaurant recreation",
            "Meal prep for the week",
        ],
        Niche::Travel => &[
            "Hidden gem location reveal",
            "Travel packing tips",
            "Budget travel guide",
            "Must-visit spots",
            "Travel vlog highlights",
        ],
    }
}

pub const X_HOOKS: &[&str] = &[
    "Hot take:",
    "Real talk:",
    "Nobody talks about this:",
    "Unpopular opinion:",
    "This changed everything:",
];

pub const TIKTOK_HOOKS: &[&str] = &[
    "Wait for it...",
    "POV:",
    "This is your sign to...",
    "No one told me that...",
    "The way I...",
];

pub const INSTAGRAM_HOOKS: &[&str] = &[
    "Swipe for the full story",
    "Save this for later",
    "You need to see this",
    "Let me show you how",
    "This is everything",
];

pub const ONLYFANS_HOOK: &str = "Exclusive content";

/// Always appended to TikTok hashtags.
pub const VIRAL_TAGS: &[&str] = &["#fyp", "#viral", "#foryou"];
