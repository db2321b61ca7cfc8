//! Five-element balance over the eight chart positions.

use serde::{Deserialize, Serialize};

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::FourPillars;

/// Number of stem/branch positions in a chart.
pub const CHART_POSITIONS: u8 = 8;

/// Per-element counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ElementCounts {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl ElementCounts {
    pub const fn get(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub fn add(&mut self, element: Element) {
        let slot = match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        };
        *slot += 1;
    }

    /// Counts in precedence order (wood first).
    pub const fn as_array(&self) -> [u8; 5] {
        [self.wood, self.fire, self.earth, self.metal, self.water]
    }

    pub fn total(&self) -> u8 {
        self.as_array().iter().sum()
    }
}

/// Element distribution of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementBalance {
    pub counts: ElementCounts,
    /// Always [`CHART_POSITIONS`].
    pub total: u8,
    /// Highest count; ties go to the earlier element in precedence order.
    pub dominant: Element,
    /// Lowest count; ties go to the earlier element in precedence order.
    pub weakest: Element,
    /// 0..=100, higher means the counts are more even.
    pub score: u8,
}

impl ElementBalance {
    /// True when no element leads the weakest by more than one.
    pub fn is_balanced(&self) -> bool {
        let arr = self.counts.as_array();
        let max = arr.iter().copied().max().unwrap_or(0);
        let min = arr.iter().copied().min().unwrap_or(0);
        max - min <= 1
    }

    pub const fn count(&self, element: Element) -> u8 {
        self.counts.get(element)
    }
}

/// Count the elements of all four stems and all four branches.
pub fn analyze_elements(pillars: &FourPillars) -> ElementBalance {
    let mut counts = ElementCounts::default();
    for (_, pillar) in pillars.iter() {
        counts.add(pillar.stem().element());
        counts.add(pillar.branch().element());
    }
    let (dominant, weakest) = extremes(&counts);
    ElementBalance {
        counts,
        total: CHART_POSITIONS,
        dominant,
        weakest,
        score: balance_score(&counts),
    }
}

/// Element counts of every hidden stem across the four branches.
pub fn hidden_element_counts(pillars: &FourPillars) -> ElementCounts {
    let mut counts = ElementCounts::default();
    for branch in pillars.branches() {
        for stem in branch.hidden_stems() {
            counts.add(stem.element());
        }
    }
    counts
}

fn extremes(counts: &ElementCounts) -> (Element, Element) {
    let mut dominant = Element::Wood;
    let mut weakest = Element::Wood;
    for e in ALL_ELEMENTS {
        if counts.get(e) > counts.get(dominant) {
            dominant = e;
        }
        if counts.get(e) < counts.get(weakest) {
            weakest = e;
        }
    }
    (dominant, weakest)
}

/// `round(100 × (1 − variance / max_variance))` in integer arithmetic.
///
/// With mean 8/5, `25 × n × variance = Σ(5c − 8)²`; the maximum (all
/// eight positions in one element) is 1280.
fn balance_score(counts: &ElementCounts) -> u8 {
    const MAX_SPREAD: u32 = 1280;
    let spread: u32 = counts
        .as_array()
        .iter()
        .map(|&c| {
            let d = 5 * i32::from(c) - 8;
            (d * d) as u32
        })
        .sum();
    let remaining = MAX_SPREAD.saturating_sub(spread);
    ((remaining * 10 + 64) / 128) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pillar::Pillar;

    fn chart(indices: [u8; 4]) -> FourPillars {
        FourPillars {
            year: Pillar::from_cycle_index(indices[0]),
            month: Pillar::from_cycle_index(indices[1]),
            day: Pillar::from_cycle_index(indices[2]),
            hour: Pillar::from_cycle_index(indices[3]),
        }
    }

    #[test]
    fn golden_chart_counts() {
        // Geng-Wu, Xin-Si, Geng-Chen, Ren-Wu
        let b = analyze_elements(&chart([6, 17, 16, 18]));
        assert_eq!(b.counts.as_array(), [0, 3, 1, 3, 1]);
        assert_eq!(b.total, 8);
        assert_eq!(b.dominant, Element::Fire);
        assert_eq!(b.weakest, Element::Wood);
        assert_eq!(b.score, 86);
        assert!(!b.is_balanced());
    }

    #[test]
    fn score_extremes() {
        let all_one = ElementCounts {
            wood: 8,
            ..ElementCounts::default()
        };
        assert_eq!(balance_score(&all_one), 0);
        let even = ElementCounts {
            wood: 2,
            fire: 2,
            earth: 2,
            metal: 1,
            water: 1,
        };
        assert_eq!(balance_score(&even), 98);
    }

    #[test]
    fn score_decreases_with_spread() {
        let a = ElementCounts {
            wood: 2,
            fire: 2,
            earth: 2,
            metal: 2,
            water: 0,
        };
        let b = ElementCounts {
            wood: 3,
            fire: 2,
            earth: 2,
            metal: 1,
            water: 0,
        };
        assert!(balance_score(&a) > balance_score(&b));
    }

    #[test]
    fn hidden_counts_include_all_qi() {
        let h = hidden_element_counts(&chart([6, 17, 16, 18]));
        // Wu: Ding Ji; Si: Bing Wu Geng; Chen: Wu Yi Gui; Wu: Ding Ji
        assert_eq!(h.total(), 10);
        assert_eq!(h.fire, 3);
        assert_eq!(h.earth, 4);
    }
}
