use crate::core::rules::{GOAL_HIRING, GOAL_JOB_SEEKING};
use crate::core::scoring::same_industry;
use crate::models::{CompatibilityScore, ConversationStarter, Profile, StarterKind};

/// Number of suggestions returned per pair
pub const STARTER_COUNT: usize = 3;

/// Generic openers used to pad the list. `{a}` is the sender's company,
/// `{b}` the recipient's.
static FALLBACK_TEMPLATES: &[&str] = &[
    "Hi! I'm with {a} and would love to hear what the team at {b} is focused on these days.",
    "Great to connect! Always curious how teams like {b} approach things compared to us at {a}.",
    "Hello from {a}! What brings you and {b} to this event?",
];

/// Builds opening-message suggestions for a pair of profiles
///
/// Rules fire in priority order, each adding at most one starter:
/// shared interest, shared industry, hiring/job-seeking, then generic
/// fallbacks until exactly three are produced. The message is written from
/// `a` to `b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversationStarterGenerator;

impl ConversationStarterGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(
        &self,
        a: &Profile,
        b: &Profile,
        score: &CompatibilityScore,
    ) -> Vec<ConversationStarter> {
        let mut starters: Vec<ConversationStarter> = [
            shared_interest_starter(a, b),
            shared_industry_starter(a, b),
            recruiting_starter(a, b),
        ]
        .into_iter()
        .flatten()
        .collect();

        let mut templates = FALLBACK_TEMPLATES.iter().cycle();
        while starters.len() < STARTER_COUNT {
            let template = templates.next().copied().unwrap_or(FALLBACK_TEMPLATES[0]);
            starters.push(fallback_starter(template, a, b, score));
        }

        starters.truncate(STARTER_COUNT);
        starters
    }
}

fn shared_interest_starter(a: &Profile, b: &Profile) -> Option<ConversationStarter> {
    let interest = a.interests.intersection(&b.interests).next()?;

    Some(ConversationStarter {
        text: format!(
            "I noticed we're both into {}. What got you interested in it?",
            interest
        ),
        reasoning: format!("Shared interest in {}", interest),
        kind: StarterKind::SharedInterest,
    })
}

fn shared_industry_starter(a: &Profile, b: &Profile) -> Option<ConversationStarter> {
    if !same_industry(a, b) {
        return None;
    }

    Some(ConversationStarter {
        text: format!(
            "Always good to meet someone else in {}! What's the most interesting project you're working on at {}?",
            a.industry,
            company_or(&b.company, "your company")
        ),
        reasoning: format!("Both work in the {} industry", a.industry),
        kind: StarterKind::SharedIndustry,
    })
}

/// Direction-sensitive: the side that is hiring speaks as the offerer
fn recruiting_starter(a: &Profile, b: &Profile) -> Option<ConversationStarter> {
    if a.has_goal(GOAL_HIRING) && b.has_goal(GOAL_JOB_SEEKING) {
        return Some(ConversationStarter {
            text: format!(
                "I saw you're a {} exploring new roles. We're hiring at {} and your background looks like a great fit.",
                title_or(&b.title),
                company_or(&a.company, "my company")
            ),
            reasoning: "You are hiring and they are looking for a new role".to_string(),
            kind: StarterKind::Recruiting,
        });
    }

    if a.has_goal(GOAL_JOB_SEEKING) && b.has_goal(GOAL_HIRING) {
        return Some(ConversationStarter {
            text: format!(
                "I heard {} is hiring. As a {}, I'd love to learn more about the open roles.",
                company_or(&b.company, "your team"),
                title_or(&a.title)
            ),
            reasoning: "They are hiring and you are looking for a new role".to_string(),
            kind: StarterKind::Recruiting,
        });
    }

    None
}

fn fallback_starter(
    template: &str,
    a: &Profile,
    b: &Profile,
    score: &CompatibilityScore,
) -> ConversationStarter {
    ConversationStarter {
        text: template
            .replace("{a}", company_or(&a.company, "my company"))
            .replace("{b}", company_or(&b.company, "your company")),
        reasoning: format!("General introduction (compatibility {}/100)", score.overall),
        kind: StarterKind::General,
    }
}

fn company_or<'a>(company: &'a str, placeholder: &'a str) -> &'a str {
    if company.trim().is_empty() {
        placeholder
    } else {
        company
    }
}

fn title_or(title: &str) -> &str {
    if title.trim().is_empty() {
        "professional"
    } else {
        title
    }
}
