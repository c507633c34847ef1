// The feed is positional: a line only means something because of its index.
// Both tables mirror the endpoint's ordering exactly, so entries may only be
// appended, never reordered or removed.
pub const SKILLS: [&str; 24] = [
    "Overall",
    "Attack",
    "Defence",
    "Strength",
    "Hitpoints",
    "Ranged",
    "Prayer",
    "Magic",
    "Cooking",
    "Woodcutting",
    "Fletching",
    "Fishing",
    "Firemaking",
    "Crafting",
    "Smithing",
    "Mining",
    "Herblore",
    "Agility",
    "Thieving",
    "Slayer",
    "Farming",
    "Runecraft",
    "Hunter",
    "Construction",
];

pub const ACTIVITIES: [&str; 76] = [
    "BH1",
    "BH2",
    "BH3",
    "BH4",
    "BH5",
    "BH6",
    "Clue Scrolls (all)",
    "Clue Scrolls (beginner)",
    "Clue Scrolls (easy)",
    "Clue Scrolls (medium)",
    "Clue Scrolls (hard)",
    "Clue Scrolls (elite)",
    "Clue Scrolls (master)",
    "LMS - Rank",
    "PVPARENA",
    "Soul Wars Zeal",
    "Rifts closed",
    "Abyssal Sire",
    "Alchemical Hydra",
    "Artio",
    "Barrows",
    "Bryophyta",
    "Callisto",
    "Calvarion",
    "Cerberus",
    "Chambers of Xeric",
    "Chambers of Xeric: Challenge Mode",
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
    "Theatre of Blood",
    "Theatre of Blood: Hard Mode",
    "Thermonuclear Smoke Devil",
    "Tombs of Amascut",
    "Tombs of Amascut: Expert Mode",
    "TzKal-Zuk",
    "TzTok-Jad",
    "Vardorvis",
    "Venenatis",
    "Vet'ion",
    "Vorkath",
    "Wintertodt",
    "Zalcano",
    "Zulrah",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillLine {
    pub skill: &'static str,
    pub rank: i64,
    pub level: i64,
    pub experience: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLine {
    pub activity: &'static str,
    pub rank: i64,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub skills: Vec<SkillLine>,
    pub activities: Vec<ActivityLine>,
    pub overall_experience: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    NoSkillLines,
    MissingOverall,
}

pub fn parse(raw: &str) -> Result<Snapshot, ParseError> {
    let mut skills = Vec::with_capacity(SKILLS.len());
    let mut activities = Vec::new();

    for (index, line) in raw.lines().enumerate() {
        if index < SKILLS.len() {
            if let Some(entry) = parse_skill_line(index, line) {
                skills.push(entry);
            }
        } else {
            let activity_index = index - SKILLS.len();
            if activity_index >= ACTIVITIES.len() {
                tracing::warn!(
                    "Dropping unknown activity line at index {}, the feed has more entries than the name table",
                    index
                );
                continue;
            }

            if let Some(entry) = parse_activity_line(activity_index, line) {
                activities.push(entry);
            }
        }
    }

    if skills.is_empty() {
        return Err(ParseError::NoSkillLines);
    }

    let overall_experience = skills
        .iter()
        .find(|entry| entry.skill == SKILLS[0])
        .map(|entry| entry.experience)
        .ok_or(ParseError::MissingOverall)?;

    Ok(Snapshot {
        skills,
        activities,
        overall_experience,
    })
}

// Sentinel values like -1 (unranked) are passed through untouched, a line
// that does not parse is dropped without affecting the lines after it.
fn parse_skill_line(index: usize, line: &str) -> Option<SkillLine> {
    let mut fields = line.trim().split(',');

    let rank = fields.next()?.parse().ok()?;
    let level = fields.next()?.parse().ok()?;
    let experience = fields.next()?.parse().ok()?;

    Some(SkillLine {
        skill: SKILLS[index],
        rank,
        level,
        experience,
    })
}

fn parse_activity_line(activity_index: usize, line: &str) -> Option<ActivityLine> {
    let mut fields = line.trim().split(',');

    let rank = fields.next()?.parse().ok()?;
    let score = fields.next()?.parse().ok()?;

    Some(ActivityLine {
        activity: ACTIVITIES[activity_index],
        rank,
        score,
    })
}
