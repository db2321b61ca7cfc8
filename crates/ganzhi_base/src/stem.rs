//! The ten heavenly stems (tiangan).

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The 10 heavenly stems starting from Jia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (index 0 = Jia).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Chinese character.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem for an index, wrapping modulo 10.
    pub const fn from_index(i: u8) -> Self {
        ALL_STEMS[(i % 10) as usize]
    }

    /// Element: consecutive pairs share one (Jia/Yi wood .. Ren/Gui water).
    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    /// Even stems are yang.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Stem `n` steps later in the cycle (negative steps go back).
    pub const fn offset(self, n: i32) -> Self {
        Self::from_index((self.index() as i32 + n).rem_euclid(10) as u8)
    }
}

impl std::fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(HeavenlyStem::from_index(i as u8), *s);
        }
    }

    #[test]
    fn element_table() {
        assert_eq!(HeavenlyStem::Jia.element(), Element::Wood);
        assert_eq!(HeavenlyStem::Ding.element(), Element::Fire);
        assert_eq!(HeavenlyStem::Ji.element(), Element::Earth);
        assert_eq!(HeavenlyStem::Geng.element(), Element::Metal);
        assert_eq!(HeavenlyStem::Gui.element(), Element::Water);
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(HeavenlyStem::Jia.polarity(), Polarity::Yang);
        assert_eq!(HeavenlyStem::Yi.polarity(), Polarity::Yin);
        assert_eq!(HeavenlyStem::Ren.polarity(), Polarity::Yang);
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(HeavenlyStem::Gui.offset(1), HeavenlyStem::Jia);
        assert_eq!(HeavenlyStem::Jia.offset(-1), HeavenlyStem::Gui);
        assert_eq!(HeavenlyStem::Bing.offset(23), HeavenlyStem::Ji);
    }
}
