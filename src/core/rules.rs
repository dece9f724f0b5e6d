//! Static rule tables used by the scorers and the starter generator.
//!
//! Kept apart from the arithmetic so the rule set can grow without touching
//! the scoring code.

/// Title fragments considered mutually beneficial, checked by substring
/// containment (case-insensitive) in either direction. Only the first
/// matching pair is applied.
pub static COMPLEMENTARY_ROLES: &[(&str, &str)] = &[
    ("cto", "senior engineer"),
    ("product manager", "designer"),
    ("founder", "investor"),
    ("developer", "devops"),
];

/// Complementary goals as directed entries. Each entry is tested in both
/// assignments, so a pair listed in both orientations counts from both sides
/// while a self-complementary goal (partnership) counts once.
pub static COMPLEMENTARY_GOALS: &[(&str, &str)] = &[
    ("fundraising", "investing"),
    ("investing", "fundraising"),
    ("hiring", "job-seeking"),
    ("job-seeking", "hiring"),
    ("mentoring", "learning"),
    ("learning", "mentoring"),
    ("selling", "buying"),
    ("buying", "selling"),
    ("partnership", "partnership"),
];

/// Interests that earn a bonus when shared
pub static HIGH_VALUE_INTERESTS: &[&str] = &[
    "AI",
    "Machine Learning",
    "Blockchain",
    "Web3",
];

/// Title keywords mapped to an experience level, first hit wins
pub static EXPERIENCE_LEVELS: &[(&[&str], u8)] = &[
    (&["senior", "lead", "principal"], 3),
    (&["junior", "entry"], 1),
    (&["cto", "vp", "director"], 4),
];

/// Level assumed when no keyword is present
pub const DEFAULT_EXPERIENCE_LEVEL: u8 = 2;

pub const GOAL_NETWORKING: &str = "networking";
pub const GOAL_HIRING: &str = "hiring";
pub const GOAL_JOB_SEEKING: &str = "job-seeking";

/// Derive an experience level from free-text title keywords
pub fn experience_level(title: &str) -> u8 {
    let title = title.to_lowercase();
    EXPERIENCE_LEVELS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| title.contains(k)))
        .map(|(_, level)| *level)
        .unwrap_or(DEFAULT_EXPERIENCE_LEVEL)
}

/// First complementary role pair matched by the two titles, if any
pub fn complementary_role(title_a: &str, title_b: &str) -> Option<(&'static str, &'static str)> {
    let a = title_a.to_lowercase();
    let b = title_b.to_lowercase();
    COMPLEMENTARY_ROLES
        .iter()
        .find(|(x, y)| (a.contains(x) && b.contains(y)) || (a.contains(y) && b.contains(x)))
        .copied()
}

pub fn is_high_value_interest(interest: &str) -> bool {
    HIGH_VALUE_INTERESTS.iter().any(|v| *v == interest)
}
