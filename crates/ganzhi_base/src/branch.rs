//! The twelve earthly branches (dizhi), their hour slots and hidden stems.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::stem::HeavenlyStem;

/// The 12 earthly branches starting from Zi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (index 0 = Zi).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

/// Branch elements, indexed by branch.
const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water, // Zi
    Element::Earth, // Chou
    Element::Wood,  // Yin
    Element::Wood,  // Mao
    Element::Earth, // Chen
    Element::Fire,  // Si
    Element::Fire,  // Wu
    Element::Earth, // Wei
    Element::Metal, // Shen
    Element::Metal, // You
    Element::Earth, // Xu
    Element::Water, // Hai
];

/// Hidden stems per branch: main qi first, then middle and residual qi.
const HIDDEN_STEMS: [&[HeavenlyStem]; 12] = {
    use HeavenlyStem::*;
    [
        &[Gui],
        &[Ji, Gui, Xin],
        &[Jia, Bing, Wu],
        &[Yi],
        &[Wu, Yi, Gui],
        &[Bing, Wu, Geng],
        &[Ding, Ji],
        &[Ji, Ding, Yi],
        &[Geng, Ren, Wu],
        &[Xin],
        &[Wu, Xin, Ding],
        &[Ren, Jia],
    ]
};

impl EarthlyBranch {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Chinese character.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Zodiac animal (English).
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch for an index, wrapping modulo 12.
    pub const fn from_index(i: u8) -> Self {
        ALL_BRANCHES[(i % 12) as usize]
    }

    pub const fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index() as usize]
    }

    /// Structural polarity by cycle position (Zi is yang).
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Hidden stems, main qi first.
    pub fn hidden_stems(self) -> &'static [HeavenlyStem] {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// Main-qi hidden stem; its element always equals the branch element.
    pub fn main_qi(self) -> HeavenlyStem {
        HIDDEN_STEMS[self.index() as usize][0]
    }

    /// Branch of the two-hour slot containing `hour` (Zi covers 23:00–00:59).
    pub const fn from_hour(hour: u32) -> Self {
        Self::from_index((((hour + 1) % 24) / 2) as u8)
    }

    /// Civil hours `(first, last)` covered by this branch.
    pub const fn hour_range(self) -> (u32, u32) {
        let i = self.index() as u32;
        ((2 * i + 23) % 24, 2 * i)
    }

    /// Branch `n` steps later in the cycle (negative steps go back).
    pub const fn offset(self, n: i32) -> Self {
        Self::from_index((self.index() as i32 + n).rem_euclid(12) as u8)
    }
}

impl std::fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn hour_slots() {
        assert_eq!(EarthlyBranch::from_hour(23), EarthlyBranch::Zi);
        assert_eq!(EarthlyBranch::from_hour(0), EarthlyBranch::Zi);
        assert_eq!(EarthlyBranch::from_hour(1), EarthlyBranch::Chou);
        assert_eq!(EarthlyBranch::from_hour(12), EarthlyBranch::Wu);
        assert_eq!(EarthlyBranch::from_hour(22), EarthlyBranch::Hai);
    }

    #[test]
    fn hour_range_covers_from_hour() {
        for b in ALL_BRANCHES {
            let (first, last) = b.hour_range();
            assert_eq!(EarthlyBranch::from_hour(first), b);
            assert_eq!(EarthlyBranch::from_hour(last), b);
        }
    }

    #[test]
    fn main_qi_matches_branch_element() {
        for b in ALL_BRANCHES {
            assert_eq!(b.main_qi().element(), b.element(), "{b}");
        }
    }

    #[test]
    fn hidden_stem_counts() {
        let total: usize = ALL_BRANCHES.iter().map(|b| b.hidden_stems().len()).sum();
        assert_eq!(total, 28);
    }

    #[test]
    fn earth_branches_are_the_four_storehouses() {
        let earth: Vec<_> = ALL_BRANCHES
            .iter()
            .filter(|b| b.element() == Element::Earth)
            .collect();
        assert_eq!(
            earth,
            [
                &EarthlyBranch::Chou,
                &EarthlyBranch::Chen,
                &EarthlyBranch::Wei,
                &EarthlyBranch::Xu
            ]
        );
    }
}
