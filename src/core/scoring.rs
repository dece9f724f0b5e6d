use crate::core::rules::{
    complementary_role, experience_level, is_high_value_interest, COMPLEMENTARY_GOALS,
    GOAL_NETWORKING,
};
use crate::models::{CompatibilityScore, Profile, ScoreBreakdown, ScoringWeights};

/// Score returned when a dimension has nothing to compare
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Calculate a compatibility score (0-100) for two profiles
///
/// Scoring formula:
/// overall = (
///     professional * 0.35 +   # industry, complementary roles, experience gap
///     interests * 0.25 +      # Jaccard overlap plus high-value bonus
///     intent * 0.25 +         # complementary and shared networking goals
///     contextual * 0.15       # same event and shared sessions
/// )
///
/// Sub-scores are rounded before weighting so `overall` can be reproduced
/// from the breakdown.
pub fn calculate_compatibility_score(
    a: &Profile,
    b: &Profile,
    weights: &ScoringWeights,
) -> CompatibilityScore {
    let breakdown = ScoreBreakdown {
        professional: to_percent(professional_score(a, b)),
        interests: to_percent(interest_score(a, b)),
        intent: to_percent(intent_score(a, b)),
        contextual: to_percent(contextual_score(a, b)),
    };

    let overall = breakdown.professional as f64 * weights.professional
        + breakdown.interests as f64 * weights.interests
        + breakdown.intent as f64 * weights.intent
        + breakdown.contextual as f64 * weights.contextual;

    CompatibilityScore {
        overall: to_percent(overall),
        reasoning: build_reasoning(a, b, &breakdown),
        breakdown,
    }
}

/// Professional fit: base 50, +20 same industry, +15 complementary roles,
/// +10 experience levels within one step
pub fn professional_score(a: &Profile, b: &Profile) -> f64 {
    let mut score = 50.0;

    if same_industry(a, b) {
        score += 20.0;
    }

    if complementary_role(&a.title, &b.title).is_some() {
        score += 15.0;
    }

    let gap = experience_level(&a.title).abs_diff(experience_level(&b.title));
    if gap <= 1 {
        score += 10.0;
    }

    clamp(score)
}

/// Interest overlap as intersection over union, +15 when a high-value
/// interest is shared. Neutral when either side lists nothing.
pub fn interest_score(a: &Profile, b: &Profile) -> f64 {
    if a.interests.is_empty() || b.interests.is_empty() {
        return NEUTRAL_SCORE;
    }

    let shared: Vec<&String> = a.interests.intersection(&b.interests).collect();
    let union = a.interests.union(&b.interests).count();

    let mut score = shared.len() as f64 / union as f64 * 100.0;
    if shared.iter().any(|interest| is_high_value_interest(interest)) {
        score += 15.0;
    }

    clamp(score)
}

/// Intent alignment: base 40, +30 per satisfied complementary-goal entry,
/// +20 when both are networking
pub fn intent_score(a: &Profile, b: &Profile) -> f64 {
    let mut score = 40.0;

    score += 30.0 * complementary_goals(a, b).count() as f64;

    if a.has_goal(GOAL_NETWORKING) && b.has_goal(GOAL_NETWORKING) {
        score += 20.0;
    }

    clamp(score)
}

/// Shared context: base 50, +20 same event, +10 per shared session (max +30)
pub fn contextual_score(a: &Profile, b: &Profile) -> f64 {
    let mut score = 50.0;

    // exact equality, two blank events count as the same event
    if a.current_event == b.current_event {
        score += 20.0;
    }

    let shared_sessions = a.planned_sessions.intersection(&b.planned_sessions).count();
    score += (shared_sessions as f64 * 10.0).min(30.0);

    clamp(score)
}

/// Complementary-goal entries satisfied by the two goal sets in either assignment
pub fn complementary_goals<'a>(
    a: &'a Profile,
    b: &'a Profile,
) -> impl Iterator<Item = (&'static str, &'static str)> + 'a {
    COMPLEMENTARY_GOALS
        .iter()
        .copied()
        .filter(move |(x, y)| (a.has_goal(x) && b.has_goal(y)) || (b.has_goal(x) && a.has_goal(y)))
}

/// Both profiles name the same non-empty industry (case-sensitive)
pub fn same_industry(a: &Profile, b: &Profile) -> bool {
    !a.industry.is_empty() && a.industry == b.industry
}

fn build_reasoning(a: &Profile, b: &Profile, breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut reasoning = Vec::new();

    if breakdown.professional > 80 {
        reasoning.push("strong complementary professional experience".to_string());
    }

    if breakdown.interests > 70 {
        reasoning.push("significant shared interests and expertise".to_string());
    }

    // networking alone tops out at 60, so a high intent always has a goal pair
    if breakdown.intent > 85 {
        if let Some((x, y)) = complementary_goals(a, b).next() {
            reasoning.push(format!("complementary goals: {}/{}", x, y));
        }
    }

    if same_industry(a, b) {
        reasoning.push(format!("both in {} industry", a.industry));
    }

    reasoning
}

#[inline]
fn clamp(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

#[inline]
fn to_percent(score: f64) -> u8 {
    clamp(score).round() as u8
}
