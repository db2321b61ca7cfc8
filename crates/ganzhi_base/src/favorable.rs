//! Day Master strength and favorable-element selection.

use serde::{Deserialize, Serialize};

use crate::balance::ElementBalance;
use crate::element::Element;
use crate::stem::HeavenlyStem;
use crate::ten_god::TenGodFamily;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthClass {
    Strong,
    Weak,
}

/// Support for the Day Master: its own element plus its resource element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrengthAssessment {
    pub day_master: HeavenlyStem,
    pub support: u8,
    pub total: u8,
    pub class: StrengthClass,
}

/// Elements to reinforce and to restrain, at most two each.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FavorableElements {
    pub strength: StrengthClass,
    pub reinforce: Vec<Element>,
    pub restrain: Vec<Element>,
}

impl FavorableElements {
    /// The single most useful element, if any.
    pub fn primary(&self) -> Option<Element> {
        self.reinforce.first().copied()
    }
}

struct SelectionRule {
    reinforce: [TenGodFamily; 2],
    restrain: [TenGodFamily; 2],
}

const WEAK_RULE: SelectionRule = SelectionRule {
    reinforce: [TenGodFamily::Companion, TenGodFamily::Resource],
    restrain: [TenGodFamily::Output, TenGodFamily::Wealth],
};

const STRONG_RULE: SelectionRule = SelectionRule {
    reinforce: [TenGodFamily::Output, TenGodFamily::Authority],
    restrain: [TenGodFamily::Companion, TenGodFamily::Resource],
};

/// Strong iff own element plus resource element exceed half the total.
pub fn classify_strength(balance: &ElementBalance, day_master: HeavenlyStem) -> StrengthAssessment {
    let own = day_master.element();
    let support = balance.count(own) + balance.count(own.generated_by());
    let class = if u16::from(support) * 2 > u16::from(balance.total) {
        StrengthClass::Strong
    } else {
        StrengthClass::Weak
    };
    StrengthAssessment {
        day_master,
        support,
        total: balance.total,
        class,
    }
}

/// Pick reinforce/restrain elements from the strength class.
///
/// Reinforce elements are ordered scarcest first. Restrain elements are
/// ordered most abundant first, and absent elements are left out since
/// there is nothing to restrain.
pub fn select_favorable_elements(
    balance: &ElementBalance,
    strength: &StrengthAssessment,
) -> FavorableElements {
    let rule = match strength.class {
        StrengthClass::Weak => &WEAK_RULE,
        StrengthClass::Strong => &STRONG_RULE,
    };
    let dm = strength.day_master.element();

    let mut reinforce: Vec<Element> = rule.reinforce.iter().map(|f| f.element_for(dm)).collect();
    reinforce.sort_by_key(|&e| balance.count(e));

    let mut restrain: Vec<Element> = rule
        .restrain
        .iter()
        .map(|f| f.element_for(dm))
        .filter(|&e| balance.count(e) > 0)
        .collect();
    restrain.sort_by_key(|&e| std::cmp::Reverse(balance.count(e)));

    log::debug!(
        "day master {} {:?} (support {}/{}): reinforce {reinforce:?}, restrain {restrain:?}",
        strength.day_master,
        strength.class,
        strength.support,
        strength.total
    );
    FavorableElements {
        strength: strength.class,
        reinforce,
        restrain,
    }
}
