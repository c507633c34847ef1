use decoder::feed;
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

fn payload(lines: &[String]) -> String {
    lines.join("\n")
}

fn well_formed_skill_lines() -> Vec<String> {
    (0..feed::SKILLS.len())
        .map(|index| format!("{},{},{}", index + 1, 99, index * 1000))
        .collect()
}

#[test]
fn overall_and_barrows() {
    let mut lines = vec!["1,99,14000000".to_owned()];
    lines.extend((1..24).map(|_| String::new()));
    lines.extend((0..20).map(|_| "-1,-1".to_owned()));
    lines.push("500,120".to_owned());

    let result = feed::parse(&payload(&lines)).unwrap();

    assert_eq!(
        vec![feed::SkillLine {
            skill: "Overall",
            rank: 1,
            level: 99,
            experience: 14000000,
        }],
        result.skills
    );
    assert_eq!(14000000, result.overall_experience);

    assert_eq!(21, result.activities.len());
    assert_eq!(
        Some(&feed::ActivityLine {
            activity: "Barrows",
            rank: 500,
            score: 120,
        }),
        result.activities.iter().find(|entry| entry.activity == "Barrows")
    );

    let totals = decoder::categories::pvm_totals(&result.activities);
    assert_eq!(0, totals.raids);
    assert_eq!(120, totals.bosses);
}

#[test]
fn skill_names_follow_line_index() {
    let lines = well_formed_skill_lines();

    let result = feed::parse(&payload(&lines)).unwrap();

    assert_eq!(feed::SKILLS.len(), result.skills.len());
    for (index, entry) in result.skills.iter().enumerate() {
        assert_eq!(feed::SKILLS[index], entry.skill);
        assert_eq!((index + 1) as i64, entry.rank);
        assert_eq!((index * 1000) as i64, entry.experience);
    }
    assert_eq!(0, result.activities.len());
}

#[test]
fn short_skill_line_keeps_later_indices() {
    let mut lines = well_formed_skill_lines();
    lines[3] = "42".to_owned();

    let result = feed::parse(&payload(&lines)).unwrap();

    assert_eq!(feed::SKILLS.len() - 1, result.skills.len());
    assert!(!result.skills.iter().any(|entry| entry.skill == "Strength"));
    assert_eq!(
        Some(&feed::SkillLine {
            skill: "Hitpoints",
            rank: 5,
            level: 99,
            experience: 4000,
        }),
        result.skills.iter().find(|entry| entry.skill == "Hitpoints")
    );
}

#[test]
fn non_numeric_skill_line_is_dropped() {
    let mut lines = well_formed_skill_lines();
    lines[7] = "1,99,lots".to_owned();

    let result = feed::parse(&payload(&lines)).unwrap();

    assert_eq!(feed::SKILLS.len() - 1, result.skills.len());
    assert!(!result.skills.iter().any(|entry| entry.skill == "Magic"));
}

#[test]
#[traced_test]
fn activity_lines_beyond_the_table_are_dropped() {
    let mut lines = well_formed_skill_lines();
    lines.extend((0..feed::ACTIVITIES.len()).map(|_| "-1,-1".to_owned()));
    lines.extend((0..5).map(|_| "1,1".to_owned()));

    let result = feed::parse(&payload(&lines)).unwrap();

    assert_eq!(feed::ACTIVITIES.len(), result.activities.len());
    assert!(logs_contain("Dropping unknown activity line"));
}

#[test]
fn sentinel_values_pass_through() {
    let mut lines = well_formed_skill_lines();
    lines[19] = "-1,-1,-1".to_owned();

    let result = feed::parse(&payload(&lines)).unwrap();

    assert_eq!(
        Some(&feed::SkillLine {
            skill: "Slayer",
            rank: -1,
            level: -1,
            experience: -1,
        }),
        result.skills.iter().find(|entry| entry.skill == "Slayer")
    );
}

#[test]
fn no_decodable_skill_lines_aborts() {
    assert_eq!(Err(feed::ParseError::NoSkillLines), feed::parse(""));
    assert_eq!(
        Err(feed::ParseError::NoSkillLines),
        feed::parse("this is not a feed\nstill not,a feed")
    );
}

#[test]
fn missing_overall_line_aborts() {
    let mut lines = well_formed_skill_lines();
    lines[0] = String::new();

    assert_eq!(Err(feed::ParseError::MissingOverall), feed::parse(&payload(&lines)));
}
