//! Topic answers from chart artifacts.
//!
//! Composition is a pure lookup over the tables in [`crate::rules`]; the
//! age filter then rewrites whatever an age group should not see.

use ganzhi_base::{ElementBalance, FavorableElements, TenGodAssignment};
use serde::{Deserialize, Serialize};

use crate::filter::apply_age_filter;
use crate::rules::{
    REINFORCE_ACTIONS, RESTRAIN_ACTIONS, WEAKEST_CLAUSE, element_slot, rules_for, strength_slot,
};
use crate::topic::{AgeGroup, Topic, parse_topics};

/// One topic's reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterpretationAnswer {
    pub topic: Topic,
    /// Stable identifier of the rule path that produced the text.
    pub key: String,
    pub one_liner: String,
    pub rationale: String,
    pub action_items: Vec<String>,
}

/// Answers for the requested topics, in request order.
///
/// Unrecognised topic names are skipped with a warning.
pub fn compose_interpretation<S: AsRef<str>>(
    balance: &ElementBalance,
    ten_gods: &TenGodAssignment,
    favorable: &FavorableElements,
    age_group: AgeGroup,
    topics: &[S],
) -> Vec<InterpretationAnswer> {
    parse_topics(topics)
        .into_iter()
        .map(|topic| {
            let raw = compose_topic(topic, balance, ten_gods, favorable);
            apply_age_filter(raw, age_group, balance, favorable)
        })
        .collect()
}

/// Unfiltered answer for one topic.
pub fn compose_topic(
    topic: Topic,
    balance: &ElementBalance,
    ten_gods: &TenGodAssignment,
    favorable: &FavorableElements,
) -> InterpretationAnswer {
    let rules = rules_for(topic);
    let favorable_actions = favorable
        .reinforce
        .iter()
        .map(|&e| REINFORCE_ACTIONS[element_slot(e)])
        .chain(
            favorable
                .restrain
                .iter()
                .map(|&e| RESTRAIN_ACTIONS[element_slot(e)]),
        );

    if balance.is_balanced() {
        let mut action_items = vec![rules.neutral.action.to_string()];
        action_items.extend(favorable_actions.take(1).map(str::to_string));
        return InterpretationAnswer {
            topic,
            key: format!("{topic}.neutral"),
            one_liner: rules.neutral.one_liner.to_string(),
            rationale: rules.neutral.rationale.to_string(),
            action_items,
        };
    }

    let strength = ten_gods.family_strength(topic.family());
    let slot = strength_slot(strength);
    let rationale = format!(
        "{} {} {}",
        WEAKEST_CLAUSE[element_slot(balance.weakest)],
        rules.family[slot],
        favorable_sentence(favorable)
    );
    let mut action_items = vec![rules.family_action[slot].to_string()];
    action_items.extend(favorable_actions.map(str::to_string));

    InterpretationAnswer {
        topic,
        key: format!(
            "{topic}.{}.{}.{}",
            balance.dominant,
            balance.weakest,
            ["absent", "present", "prominent"][slot]
        ),
        one_liner: rules.dominant[element_slot(balance.dominant)].to_string(),
        rationale,
        action_items,
    }
}

fn favorable_sentence(favorable: &FavorableElements) -> String {
    let join = |v: &[ganzhi_base::Element]| {
        v.iter()
            .map(|e| e.name())
            .collect::<Vec<_>>()
            .join(" and ")
    };
    if favorable.restrain.is_empty() {
        format!("Favorable: {}.", join(&favorable.reinforce))
    } else {
        format!(
            "Favorable: {}; keep {} in check.",
            join(&favorable.reinforce),
            join(&favorable.restrain)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganzhi_base::{
        Element, ElementCounts, FourPillars, Pillar, StrengthClass, analyze_elements,
        classify_strength, resolve_ten_gods, select_favorable_elements,
    };

    fn golden() -> (ElementBalance, TenGodAssignment, FavorableElements) {
        let p = FourPillars {
            year: Pillar::from_cycle_index(6),
            month: Pillar::from_cycle_index(17),
            day: Pillar::from_cycle_index(16),
            hour: Pillar::from_cycle_index(18),
        };
        let b = analyze_elements(&p);
        let s = classify_strength(&b, p.day_master());
        (b, resolve_ten_gods(&p), select_favorable_elements(&b, &s))
    }

    #[test]
    fn golden_career_answer() {
        let (b, t, f) = golden();
        let a = compose_topic(Topic::Career, &b, &t, &f);
        assert_eq!(a.key, "career.fire.wood.prominent");
        assert_eq!(
            a.one_liner,
            "You shine where visibility, teaching or presenting matter."
        );
        assert!(a.rationale.starts_with("Little wood"));
        assert!(a.rationale.ends_with("Favorable: earth and metal; keep water in check."));
        assert_eq!(
            a.action_items[0],
            "Delegate one recurring task so pressure does not pile up."
        );
        assert_eq!(a.action_items.len(), 4);
    }

    #[test]
    fn balanced_chart_uses_neutral_template() {
        let (_, t, _) = golden();
        let b = ElementBalance {
            counts: ElementCounts {
                wood: 2,
                fire: 2,
                earth: 2,
                metal: 1,
                water: 1,
            },
            total: 8,
            dominant: Element::Wood,
            weakest: Element::Metal,
            score: 98,
        };
        let f = FavorableElements {
            strength: StrengthClass::Weak,
            reinforce: vec![Element::Metal],
            restrain: vec![],
        };
        let a = compose_topic(Topic::Study, &b, &t, &f);
        assert_eq!(a.key, "study.neutral");
        assert_eq!(a.one_liner, "You learn well across many styles.");
        assert_eq!(a.action_items.len(), 2);
    }

    #[test]
    fn request_order_and_unknown_skipped() {
        let (b, t, f) = golden();
        let answers =
            compose_interpretation(&b, &t, &f, AgeGroup::Adult, &["social", "tarot", "health"]);
        let topics: Vec<Topic> = answers.iter().map(|a| a.topic).collect();
        assert_eq!(topics, vec![Topic::Social, Topic::Health]);
    }
}
