//! Stem combinations, branch harmonies and branch clashes.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::element::Element;
use crate::pillar::{ALL_POSITIONS, FourPillars, PillarPosition};
use crate::stem::HeavenlyStem;

/// Five stem combinations and the element each transforms into.
/// Jia-Ji, Yi-Geng, Bing-Xin, Ding-Ren, Wu-Gui.
const STEM_COMBINATIONS: [(u8, u8, Element); 5] = [
    (0, 5, Element::Earth),
    (1, 6, Element::Metal),
    (2, 7, Element::Water),
    (3, 8, Element::Wood),
    (4, 9, Element::Fire),
];

/// Six branch harmonies.
/// Zi-Chou, Yin-Hai, Mao-Xu, Chen-You, Si-Shen, Wu-Wei.
const BRANCH_HARMONIES: [(u8, u8, Element); 6] = [
    (0, 1, Element::Earth),
    (2, 11, Element::Wood),
    (3, 10, Element::Fire),
    (4, 9, Element::Metal),
    (5, 8, Element::Water),
    (6, 7, Element::Fire),
];

/// Six branch clashes.
/// Zi-Wu, Chou-Wei, Yin-Shen, Mao-You, Chen-Xu, Si-Hai.
const BRANCH_CLASHES: [(u8, u8); 6] = [(0, 6), (1, 7), (2, 8), (3, 9), (4, 10), (5, 11)];

fn unordered(a: u8, b: u8) -> (u8, u8) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Element two stems combine into, if they form one of the five pairs.
pub fn stem_combination(a: HeavenlyStem, b: HeavenlyStem) -> Option<Element> {
    let key = unordered(a.index(), b.index());
    STEM_COMBINATIONS
        .iter()
        .find(|(x, y, _)| (*x, *y) == key)
        .map(|&(_, _, e)| e)
}

/// Element of a six-harmony pair, if the branches form one.
pub fn branch_harmony(a: EarthlyBranch, b: EarthlyBranch) -> Option<Element> {
    let key = unordered(a.index(), b.index());
    BRANCH_HARMONIES
        .iter()
        .find(|(x, y, _)| (*x, *y) == key)
        .map(|&(_, _, e)| e)
}

pub fn branches_clash(a: EarthlyBranch, b: EarthlyBranch) -> bool {
    BRANCH_CLASHES.contains(&unordered(a.index(), b.index()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RelationKind {
    StemCombination { element: Element },
    BranchHarmony { element: Element },
    BranchClash,
}

/// A relation between two chart positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartRelation {
    pub first: PillarPosition,
    pub second: PillarPosition,
    #[serde(flatten)]
    pub kind: RelationKind,
}

/// Every stem combination, branch harmony and branch clash between pairs
/// of positions, in position order.
pub fn chart_relations(pillars: &FourPillars) -> Vec<ChartRelation> {
    let mut out = Vec::new();
    for (i, &first) in ALL_POSITIONS.iter().enumerate() {
        for &second in &ALL_POSITIONS[i + 1..] {
            let a = pillars.get(first);
            let b = pillars.get(second);
            if let Some(element) = stem_combination(a.stem(), b.stem()) {
                out.push(ChartRelation {
                    first,
                    second,
                    kind: RelationKind::StemCombination { element },
                });
            }
            if let Some(element) = branch_harmony(a.branch(), b.branch()) {
                out.push(ChartRelation {
                    first,
                    second,
                    kind: RelationKind::BranchHarmony { element },
                });
            }
            if branches_clash(a.branch(), b.branch()) {
                out.push(ChartRelation {
                    first,
                    second,
                    kind: RelationKind::BranchClash,
                });
            }
        }
    }
    out
}

impl std::fmt::Display for ChartRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (a, b) = (self.first.name(), self.second.name());
        match self.kind {
            RelationKind::StemCombination { element } => {
                write!(f, "{a} and {b} stems combine into {element}")
            }
            RelationKind::BranchHarmony { element } => {
                write!(f, "{a} and {b} branches harmonise as {element}")
            }
            RelationKind::BranchClash => write!(f, "{a} and {b} branches clash"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pillar::Pillar;

    #[test]
    fn combinations_are_five_apart() {
        for a in crate::stem::ALL_STEMS {
            for b in crate::stem::ALL_STEMS {
                let expected = (a.index() as i8 - b.index() as i8).abs() == 5;
                assert_eq!(stem_combination(a, b).is_some(), expected);
            }
        }
        assert_eq!(
            stem_combination(HeavenlyStem::Geng, HeavenlyStem::Yi),
            Some(Element::Metal)
        );
    }

    #[test]
    fn harmonies_and_clashes() {
        use EarthlyBranch::*;
        assert_eq!(branch_harmony(Hai, Yin), Some(Element::Wood));
        assert_eq!(branch_harmony(Zi, Wu), None);
        assert!(branches_clash(Wu, Zi));
        assert!(!branches_clash(Wu, Wei));
        for a in crate::branch::ALL_BRANCHES {
            for b in crate::branch::ALL_BRANCHES {
                assert_eq!(
                    branches_clash(a, b),
                    (a.index() + 12 - b.index()) % 12 == 6
                );
                assert_eq!(
                    branch_harmony(a, b).is_some(),
                    (a.index() + b.index()) % 12 == 1
                );
            }
        }
    }

    #[test]
    fn golden_chart_has_no_pair_relations() {
        let p = FourPillars {
            year: Pillar::from_cycle_index(6),
            month: Pillar::from_cycle_index(17),
            day: Pillar::from_cycle_index(16),
            hour: Pillar::from_cycle_index(18),
        };
        assert!(chart_relations(&p).is_empty());
    }

    #[test]
    fn clash_found_between_positions() {
        // Jia-Zi year against Geng-Wu day
        let p = FourPillars {
            year: Pillar::from_cycle_index(0),
            month: Pillar::from_cycle_index(2),
            day: Pillar::from_cycle_index(6),
            hour: Pillar::from_cycle_index(4),
        };
        let rel = chart_relations(&p);
        assert!(rel.contains(&ChartRelation {
            first: PillarPosition::Year,
            second: PillarPosition::Day,
            kind: RelationKind::BranchClash,
        }));
        assert_eq!(rel[0].to_string(), "year and day branches clash");
    }
}
