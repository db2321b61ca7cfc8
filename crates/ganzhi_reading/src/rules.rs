//! Fixed interpretation tables. Nothing here is mutated at runtime.
//!
//! Element-indexed arrays follow precedence order: wood, fire, earth,
//! metal, water. Strength-indexed arrays follow absent, present,
//! prominent.

use ganzhi_base::{Element, FamilyStrength};

use crate::topic::{AgeGroup, Topic};

pub(crate) struct NeutralTemplate {
    pub one_liner: &'static str,
    pub rationale: &'static str,
    pub action: &'static str,
}

pub(crate) struct TopicRules {
    /// One-liner keyed by dominant element.
    pub dominant: [&'static str; 5],
    /// Rationale clause keyed by the topic family's strength.
    pub family: [&'static str; 3],
    /// First action keyed by the topic family's strength.
    pub family_action: [&'static str; 3],
    pub neutral: NeutralTemplate,
}

/// Replacement content for an age group. `{element}` is filled with the
/// chart's primary favorable element.
pub(crate) struct AgeSubstitute {
    pub age: AgeGroup,
    pub topic: Topic,
    pub one_liner: &'static str,
    pub rationale: &'static str,
    pub actions: [&'static str; 3],
}

pub(crate) const fn strength_slot(strength: FamilyStrength) -> usize {
    match strength {
        FamilyStrength::Absent => 0,
        FamilyStrength::Present => 1,
        FamilyStrength::Prominent => 2,
    }
}

pub(crate) fn rules_for(topic: Topic) -> &'static TopicRules {
    &TOPIC_RULES[topic.index()]
}

pub(crate) fn element_slot(element: Element) -> usize {
    element.index() as usize
}

pub(crate) const WEAKEST_CLAUSE: [&str; 5] = [
    "Little wood in the chart can make fresh starts feel effortful.",
    "Little fire can leave enthusiasm slow to show.",
    "Little earth can make routines harder to keep.",
    "Little metal can make firm boundaries harder to hold.",
    "Little water can make rest and reflection easy to skip.",
];

pub(crate) const REINFORCE_ACTIONS: [&str; 5] = [
    "Bring in wood: time among trees and green surroundings.",
    "Bring in fire: sunlight, warm colours and lively company.",
    "Bring in earth: regular meals and a steady daily rhythm.",
    "Bring in metal: decluttering and clear written plans.",
    "Bring in water: quiet rest and time near water.",
];

pub(crate) const RESTRAIN_ACTIONS: [&str; 5] = [
    "Ease wood: avoid starting too many projects at once.",
    "Ease fire: cool down before making decisions.",
    "Ease earth: break stale routines with small changes.",
    "Ease metal: soften criticism of yourself and others.",
    "Ease water: set firm end times instead of drifting.",
];

const TOPIC_RULES: [TopicRules; 7] = [
    // personality
    TopicRules {
        dominant: [
            "Growth-minded and principled, you keep reaching for the next step.",
            "Warm and expressive, you bring energy into every room.",
            "Steady and reliable, people lean on your patience.",
            "Decisive and exacting, you hold yourself to clear standards.",
            "Adaptable and perceptive, you read situations quickly.",
        ],
        family: [
            "With no companion stars you tend to follow others' lead.",
            "Companion stars give a healthy sense of self.",
            "Many companion stars make you strong-willed, sometimes stubborn.",
        ],
        family_action: [
            "Make one decision each week entirely on your own.",
            "Keep a short journal of what you want, not only what is expected.",
            "Ask for one outside opinion before committing to big choices.",
        ],
        neutral: NeutralTemplate {
            one_liner: "Your temperament is even, with no single trait crowding out the rest.",
            rationale: "The five elements sit close to balance, so no quality dominates.",
            action: "Notice which situations bring out your best side and seek more of them.",
        },
    },
    // career
    TopicRules {
        dominant: [
            "You do best in roles that let you build and grow something.",
            "You shine where visibility, teaching or presenting matter.",
            "You excel in roles that reward consistency and stewardship.",
            "You thrive where precision and quality control count.",
            "You fit roles that reward strategy, research and communication.",
        ],
        family: [
            "Authority stars are missing, so outside structure may feel confining.",
            "Authority stars support steady progress within an organisation.",
            "Strong authority stars bring responsibility early, with pressure attached.",
        ],
        family_action: [
            "Look for work with autonomy or build your own structure.",
            "Set a yearly goal with your manager and review it each quarter.",
            "Delegate one recurring task so pressure does not pile up.",
        ],
        neutral: NeutralTemplate {
            one_liner: "Your working style is versatile rather than specialised.",
            rationale: "No element dominates, so many paths stay open.",
            action: "Try short projects in different areas before choosing a direction.",
        },
    },
    // wealth
    TopicRules {
        dominant: [
            "Money grows for you through long-term projects and patience.",
            "Income follows visibility; you earn well when seen.",
            "You build wealth through saving and stable holdings.",
            "You handle money with discipline and clear limits.",
            "Income flows through networks, trade and movement.",
        ],
        family: [
            "Wealth stars are absent, so money comes through skill rather than luck.",
            "Wealth stars give a workable relationship with money.",
            "Many wealth stars bring opportunities along with spending temptation.",
        ],
        family_action: [
            "Turn one skill into a paid service.",
            "Review your budget once a month.",
            "Set a spending cap and invest surplus only after review.",
        ],
        neutral: NeutralTemplate {
            one_liner: "Your finances favour balance over big swings.",
            rationale: "Element counts are even, so no single money pattern dominates.",
            action: "Keep an emergency fund covering three months of expenses.",
        },
    },
    // romance
    TopicRules {
        dominant: [
            "In relationships you are loyal and look for shared growth.",
            "You love openly and bring warmth to a partner.",
            "You offer stability and care in close relationships.",
            "You are devoted but set clear expectations of a partner.",
            "You are intuitive and attentive to a partner's moods.",
        ],
        family: [
            "Few output stars can make feelings hard to voice.",
            "Output stars help you show affection naturally.",
            "Strong output stars make you expressive, sometimes blunt.",
        ],
        family_action: [
            "Say one appreciative thing to your partner each day.",
            "Plan a regular date night.",
            "Pause before reacting in heated conversations with a partner.",
        ],
        neutral: NeutralTemplate {
            one_liner: "Your approach to romance is balanced and easygoing.",
            rationale: "No element pulls strongly, so relationships follow shared effort.",
            action: "Make screen-free time for your partner.",
        },
    },
    // health
    TopicRules {
        dominant: [
            "Mind the liver, eyes and tendons; stretching suits you.",
            "Mind the heart and sleep; cool-down routines suit you.",
            "Mind digestion; regular meal times suit you.",
            "Mind the lungs and skin; breathing exercises suit you.",
            "Mind the kidneys and lower back; warmth and hydration suit you.",
        ],
        family: [
            "Few output stars can keep stress bottled up.",
            "Output stars help release stress through activity.",
            "Strong output stars can lead to overexertion.",
        ],
        family_action: [
            "Find one physical outlet you enjoy and do it weekly.",
            "Keep a consistent sleep schedule.",
            "Schedule rest days as firmly as workouts.",
        ],
        neutral: NeutralTemplate {
            one_liner: "Your constitution is even; consistency matters more than fixes.",
            rationale: "Balanced elements point to no single weak system.",
            action: "Keep regular sleep, meals and movement.",
        },
    },
    // study
    TopicRules {
        dominant: [
            "You learn by building on fundamentals step by step.",
            "You learn fastest by explaining ideas aloud.",
            "You learn through repetition and steady review.",
            "You learn best with clear structure and checklists.",
            "You learn by connecting ideas across subjects.",
        ],
        family: [
            "Few resource stars mean self-study needs extra structure.",
            "Resource stars support patient learning.",
            "Strong resource stars favour deep study but can stall action.",
        ],
        family_action: [
            "Join a class or study group with fixed times.",
            "Review notes within a day of learning.",
            "Apply each new idea in a small practical exercise.",
        ],
        neutral: NeutralTemplate {
            one_liner: "You learn well across many styles.",
            rationale: "No dominant element steers a single learning mode.",
            action: "Mix reading, practice and discussion.",
        },
    },
    // social
    TopicRules {
        dominant: [
            "Friends see you as encouraging and fair.",
            "You are the one who gathers people together.",
            "Friends rely on you as a dependable listener.",
            "You keep a small circle and value loyalty.",
            "You move easily between different groups.",
        ],
        family: [
            "Few companion stars can make you the quiet one in a group.",
            "Companion stars bring friendly peers.",
            "Many companion stars bring competition among peers.",
        ],
        family_action: [
            "Reach out to one friend first each week.",
            "Keep a regular meet-up with close friends.",
            "Choose cooperation over winning in group settings.",
        ],
        neutral: NeutralTemplate {
            one_liner: "Your social life is well rounded.",
            rationale: "Balanced elements give you ease in most groups.",
            action: "Keep in touch with old friends as well as new ones.",
        },
    },
];

pub(crate) const AGE_SUBSTITUTES: [AgeSubstitute; 8] = [
    AgeSubstitute {
        age: AgeGroup::Child,
        topic: Topic::Wealth,
        one_liner: "Good habits grow little by little.",
        rationale: "At this age the chart's {element} energy is best spent on daily habits.",
        actions: [
            "Keep a jar for pocket money and count it each week.",
            "Tidy your desk before bed.",
            "Share one thing with a sibling or friend.",
        ],
    },
    AgeSubstitute {
        age: AgeGroup::Child,
        topic: Topic::Romance,
        one_liner: "Kind manners make friendships last.",
        rationale: "For a child this theme is about courtesy and making friends.",
        actions: [
            "Say please and thank you at every meal.",
            "Invite a classmate to play.",
            "Write a thank-you note to a teacher.",
        ],
    },
    AgeSubstitute {
        age: AgeGroup::Child,
        topic: Topic::Career,
        one_liner: "Curiosity is the job right now.",
        rationale: "For a child, work themes become learning; {element} energy shows where curiosity runs.",
        actions: [
            "Read for twenty minutes a day.",
            "Try one new hobby this term.",
            "Ask one question about how things work every day.",
        ],
    },
    AgeSubstitute {
        age: AgeGroup::Teen,
        topic: Topic::Career,
        one_liner: "Explore before you choose.",
        rationale: "For a teen, career themes are about discovering strengths; {element} energy points to where to start.",
        actions: [
            "Shadow an adult at work for a day.",
            "Join a club linked to your interests.",
            "List three subjects you enjoy and why.",
        ],
    },
    AgeSubstitute {
        age: AgeGroup::Teen,
        topic: Topic::Wealth,
        one_liner: "Learn to manage pocket money.",
        rationale: "Money themes at this age are about budgeting basics.",
        actions: [
            "Track spending for one month.",
            "Save a fixed share of any allowance.",
            "Compare prices before buying.",
        ],
    },
    AgeSubstitute {
        age: AgeGroup::Teen,
        topic: Topic::Romance,
        one_liner: "Friendships come first.",
        rationale: "Relationship themes for a teen centre on trust and respect among friends.",
        actions: [
            "Be a reliable friend.",
            "Talk to a trusted adult when feelings get confusing.",
            "Respect other people's boundaries and your own.",
        ],
    },
    AgeSubstitute {
        age: AgeGroup::Senior,
        topic: Topic::Wealth,
        one_liner: "Protect what you have built.",
        rationale: "Later-life money themes favour preservation; {element} energy supports careful stewardship.",
        actions: [
            "Review insurance and savings once a year.",
            "Keep estate papers organised.",
            "Avoid high-risk financial products.",
        ],
    },
    AgeSubstitute {
        age: AgeGroup::Senior,
        topic: Topic::Career,
        one_liner: "Share experience at an easy pace.",
        rationale: "Work themes in later life turn to mentoring and health.",
        actions: [
            "Mentor someone younger.",
            "Keep a daily walk in your routine.",
            "Schedule regular health check-ups.",
        ],
    },
];

/// Words that must never reach a child's answer (matched case-insensitively
/// as substrings).
pub(crate) const CHILD_BLOCKLIST: [&str; 16] = [
    "invest",
    "portfolio",
    "stock",
    "shares",
    "trading",
    "crypto",
    "speculat",
    "romance",
    "romantic",
    "partner",
    "dating",
    "date night",
    "marriage",
    "spouse",
    "girlfriend",
    "boyfriend",
];

/// Fallback action for a child answer left empty by the scrub.
pub(crate) const CHILD_FALLBACK_ACTION: &str = "Keep a regular bedtime and play outside every day.";

/// Fallbacks for child text the scrub empties entirely.
pub(crate) const CHILD_FALLBACK_ONE_LINER: &str = "Curiosity and good habits come first.";
pub(crate) const CHILD_FALLBACK_RATIONALE: &str =
    "At this age the chart points to learning, play and steady routines.";
