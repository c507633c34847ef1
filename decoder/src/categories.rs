// Membership is fixed at compile time, a name must never be in both sets.
pub static RAIDS: phf::Set<&'static str> = phf::phf_set! {
    "Chambers of Xeric",
    "Chambers of Xeric: Challenge Mode",
    "Theatre of Blood",
    "Theatre of Blood: Hard Mode",
    "Tombs of Amascut",
    "Tombs of Amascut: Expert Mode",
};

pub static BOSSES: phf::Set<&'static str> = phf::phf_set! {
    "Abyssal Sire",
    "Alchemical Hydra",
    "Artio",
    "Barrows",
    "Bryophyta",
    "Callisto",
    "Calvarion",
    "Cerberus",
    "Chaos Elemental",
    "Chaos Fanatic",
    "Commander Zilyana",
    "Corporeal Beast",
    "Crazy Archaeologist",
    "Dagannoth Prime",
    "Dagannoth Rex",
    "Dagannoth Supreme",
    "Deranged Archaeologist",
    "Duke Sucellus",
    "General Graardor",
    "Giant Mole",
    "Grotesque Guardians",
    "Hespori",
    "Kalphite Queen",
    "King Black Dragon",
    "Kraken",
    "Kree'Arra",
    "K'ril Tsutsaroth",
    "Mimic",
    "Nex",
    "Nightmare",
    "Phosani's Nightmare",
    "Obor",
    "Phantom Muspah",
    "Sarachnis",
    "Scorpia",
    "Scurrius",
    "Skotizo",
    "Spindel",
    "Tempoross",
    "The Gauntlet",
    "The Corrupted Gauntlet",
    "The Leviathan",
    "The Whisperer",
    "Thermonuclear Smoke Devil",
    "TzKal-Zuk",
    "TzTok-Jad",
    "Vardorvis",
    "Venenatis",
    "Vet'ion",
    "Vorkath",
    "Wintertodt",
    "Zalcano",
    "Zulrah",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PvmTotals {
    pub raids: i64,
    pub bosses: i64,
}

// Activities in neither set (minigames, clue scrolls, leaderboard ranks) are
// not aggregated. Negative scores are the feed's unranked sentinel and carry
// no kill count.
pub fn pvm_totals(activities: &[crate::feed::ActivityLine]) -> PvmTotals {
    let mut totals = PvmTotals::default();

    for entry in activities.iter().filter(|entry| entry.score > 0) {
        if RAIDS.contains(entry.activity) {
            totals.raids += entry.score;
        } else if BOSSES.contains(entry.activity) {
            totals.bosses += entry.score;
        }
    }

    totals
}

pub fn verify_partition() -> Result<(), &'static str> {
    match RAIDS.iter().copied().find(|name| BOSSES.contains(name)) {
        Some(name) => Err(name),
        None => Ok(()),
    }
}
