//! Age-group content filter, run after composition.

use ganzhi_base::{ElementBalance, FavorableElements};

use crate::composer::InterpretationAnswer;
use crate::rules::{
    AGE_SUBSTITUTES, CHILD_BLOCKLIST, CHILD_FALLBACK_ACTION, CHILD_FALLBACK_ONE_LINER,
    CHILD_FALLBACK_RATIONALE,
};
use crate::topic::AgeGroup;

/// Replace or scrub content that does not suit `age_group`.
pub fn apply_age_filter(
    answer: InterpretationAnswer,
    age_group: AgeGroup,
    balance: &ElementBalance,
    favorable: &FavorableElements,
) -> InterpretationAnswer {
    let substitute = AGE_SUBSTITUTES
        .iter()
        .find(|s| s.age == age_group && s.topic == answer.topic);
    let answer = match substitute {
        Some(sub) => {
            let element = favorable.primary().unwrap_or(balance.dominant);
            InterpretationAnswer {
                topic: answer.topic,
                key: format!("{}.{}", answer.topic, age_group.name()),
                one_liner: sub.one_liner.to_string(),
                rationale: sub.rationale.replace("{element}", element.name()),
                action_items: sub.actions.iter().map(|a| a.to_string()).collect(),
            }
        }
        None => answer,
    };
    if age_group == AgeGroup::Child {
        scrub_for_child(answer)
    } else {
        answer
    }
}

/// True if `text` contains any blocked word.
pub fn mentions_blocked_vocabulary(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    CHILD_BLOCKLIST.iter().any(|w| lower.contains(w))
}

fn scrub_for_child(mut answer: InterpretationAnswer) -> InterpretationAnswer {
    answer
        .action_items
        .retain(|a| !mentions_blocked_vocabulary(a));
    if answer.action_items.is_empty() {
        answer.action_items.push(CHILD_FALLBACK_ACTION.to_string());
    }
    answer.one_liner = drop_blocked_sentences(&answer.one_liner, CHILD_FALLBACK_ONE_LINER);
    answer.rationale = drop_blocked_sentences(&answer.rationale, CHILD_FALLBACK_RATIONALE);
    answer
}

fn drop_blocked_sentences(text: &str, fallback: &str) -> String {
    let kept = text
        .split_inclusive(". ")
        .filter(|s| !mentions_blocked_vocabulary(s))
        .collect::<String>();
    match kept.trim() {
        "" => fallback.to_string(),
        rest => rest.to_string(),
    }
}
