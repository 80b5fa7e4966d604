use crate::classify::Niche;

pub fn song_titles(niche: Niche) -> &'static [&'static str] {
    match niche {
        Niche::Fitness => &["Stronger Every Day", "Rise and Grind", "Built Different", "No Days Off"],
        Niche::Fashion => &["Runway Ready", "Style Icon", "Dress to Impress", "Fashion Forward"],
        Niche::Beauty => &["Glow Up", "Beauty Within", "Flawless", "Confidence Looks Good"],
        Niche::Lifestyle => &[
            "Living My Best Life",
            "Main Character Energy",
            "Dream Life",
            "Vibe Check",
        ],
        Niche::Food => &["Taste of Heaven", "Kitchen Magic", "Flavor Paradise", "Food for the Soul"],
        Niche::Travel => &["Wanderlust Dreams", "Passport Ready", "Adventure Calls", "World in View"],
    }
}

/// One fixed hook per niche.
pub fn hook_lyrics(niche: Niche) -> &'static str {
    match niche {
        Niche::Fitness => "I'm getting stronger, can't you see\nEvery rep, I'm breaking free\nThis is who I'm meant to be\nWatch me rise, just wait and see",
        Niche::Fashion => "Walking like I own the street\nEvery look is incomplete\nWithout this confidence I bring\nFashion is my everything",
        Niche::Beauty => "Watch me glow, watch me shine\nEvery day I'm feeling fine\nBeauty starts from deep within\nThis is where my life begins",
        Niche::Lifestyle => "Living life on my own terms\nEvery lesson that I learned\nBrought me here to where I stand\nMain character, this is my plan",
        Niche::Food => "Cooking up my dreams tonight\nEvery flavor feels so right\nIn this kitchen I am free\nFood is love, you'll see",
        Niche::Travel => "Take me where the wild things grow\nEvery place I need to know\nWanderlust inside my soul\nThe world's my home, I'm in control",
    }
}

/// One fixed verse per niche.
pub fn verse_lyrics(niche: Niche) -> &'static str {
    match niche {
        Niche::Fitness => "Started from the bottom, now I'm reaching for the top\nEvery single morning, I refuse to ever stop\nPushing past my limits, breaking through the pain\nThis body is my temple, I'm dancing in the rain",
        Niche::Fashion => "Mirror on the wall, tell me what you see\nA vision of perfection staring back at me\nEvery stitch and pattern tells a story of my own\nIn this world of fashion, I have found my throne",
        Niche::Beauty => "They told me I should change, fit inside a mold\nBut I learned that real beauty can't be bought or sold\nIt's in the way I carry myself with grace\nIt's written in the smile that lights up my face",
        Niche::Lifestyle => "Waking up with purpose, gratitude my guide\nNo more playing small, I'm done trying to hide\nEvery day's a blessing, every moment mine\nCreating my own magic, watch me shine",
        Niche::Food => "Grandma's secret recipes mixed with something new\nEvery dish I'm making tells a story true\nGathered round the table, love in every bite\nFood connects our souls and makes everything right",
        Niche::Travel => "Passport in my hand, I'm ready for the ride\nEvery destination opens up my eyes\nDifferent cultures, people, places to explore\nEvery journey taken leaves me wanting more",
    }
}
