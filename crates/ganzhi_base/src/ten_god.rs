//! Ten-god labels relative to the Day Master.
//!
//! A label depends only on how the target element relates to the Day
//! Master's element and on whether the two share polarity:
//!
//! | relation | same polarity | different polarity |
//! |---|---|---|
//! | same element | peer | rival |
//! | Day Master generates target | output indirect | output direct |
//! | Day Master controls target | wealth indirect | wealth direct |
//! | target controls Day Master | authority indirect | authority direct |
//! | target generates Day Master | resource indirect | resource direct |

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::element::{Element, Polarity};
use crate::pillar::FourPillars;
use crate::stem::HeavenlyStem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenGod {
    Peer,
    Rival,
    OutputDirect,
    OutputIndirect,
    WealthDirect,
    WealthIndirect,
    AuthorityDirect,
    AuthorityIndirect,
    ResourceDirect,
    ResourceIndirect,
}

/// The five relation families, each holding a direct/indirect pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenGodFamily {
    Companion,
    Output,
    Wealth,
    Authority,
    Resource,
}

pub const ALL_FAMILIES: [TenGodFamily; 5] = [
    TenGodFamily::Companion,
    TenGodFamily::Output,
    TenGodFamily::Wealth,
    TenGodFamily::Authority,
    TenGodFamily::Resource,
];

/// `[relation][same_polarity]`, relation = (target − day master) mod 5
/// along the generating cycle.
const TEN_GOD_TABLE: [[TenGod; 2]; 5] = [
    [TenGod::Rival, TenGod::Peer],
    [TenGod::OutputDirect, TenGod::OutputIndirect],
    [TenGod::WealthDirect, TenGod::WealthIndirect],
    [TenGod::AuthorityDirect, TenGod::AuthorityIndirect],
    [TenGod::ResourceDirect, TenGod::ResourceIndirect],
];

impl TenGod {
    /// Label of `target` as seen from `day_master`.
    pub const fn of_stem(day_master: HeavenlyStem, target: HeavenlyStem) -> Self {
        Self::of_element(day_master, target.element(), target.polarity())
    }

    /// Label of an element/polarity pair as seen from `day_master`.
    pub const fn of_element(day_master: HeavenlyStem, element: Element, polarity: Polarity) -> Self {
        let relation = TenGodFamily::of_element(day_master.element(), element).index();
        let same = matches!(
            (day_master.polarity(), polarity),
            (Polarity::Yang, Polarity::Yang) | (Polarity::Yin, Polarity::Yin)
        );
        TEN_GOD_TABLE[relation as usize][same as usize]
    }

    pub const fn family(self) -> TenGodFamily {
        match self {
            Self::Peer | Self::Rival => TenGodFamily::Companion,
            Self::OutputDirect | Self::OutputIndirect => TenGodFamily::Output,
            Self::WealthDirect | Self::WealthIndirect => TenGodFamily::Wealth,
            Self::AuthorityDirect | Self::AuthorityIndirect => TenGodFamily::Authority,
            Self::ResourceDirect | Self::ResourceIndirect => TenGodFamily::Resource,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Peer => "peer",
            Self::Rival => "rival",
            Self::OutputDirect => "output-direct",
            Self::OutputIndirect => "output-indirect",
            Self::WealthDirect => "wealth-direct",
            Self::WealthIndirect => "wealth-indirect",
            Self::AuthorityDirect => "authority-direct",
            Self::AuthorityIndirect => "authority-indirect",
            Self::ResourceDirect => "resource-direct",
            Self::ResourceIndirect => "resource-indirect",
        }
    }
}

impl std::fmt::Display for TenGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TenGodFamily {
    pub const fn index(self) -> u8 {
        match self {
            Self::Companion => 0,
            Self::Output => 1,
            Self::Wealth => 2,
            Self::Authority => 3,
            Self::Resource => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Companion => "companion",
            Self::Output => "output",
            Self::Wealth => "wealth",
            Self::Authority => "authority",
            Self::Resource => "resource",
        }
    }

    /// Family of `element` relative to a Day Master element.
    pub const fn of_element(day_master: Element, element: Element) -> Self {
        ALL_FAMILIES[((element.index() + 5 - day_master.index()) % 5) as usize]
    }

    /// Element that plays this role for a Day Master element.
    pub const fn element_for(self, day_master: Element) -> Element {
        Element::from_index(day_master.index() + self.index())
    }
}

impl std::fmt::Display for TenGodFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How strongly a family shows in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyStrength {
    Absent,
    Present,
    Prominent,
}

impl FamilyStrength {
    /// 0 → absent, 1–2 → present, 3+ → prominent.
    pub const fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Absent,
            1 | 2 => Self::Present,
            _ => Self::Prominent,
        }
    }
}

/// Branch labels, read through each branch's main hidden stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BranchTenGods {
    pub year: TenGod,
    pub month: TenGod,
    pub day: TenGod,
    pub hour: TenGod,
}

/// Labels of the non-day stems and of all four branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenGodAssignment {
    pub day_master: HeavenlyStem,
    pub year: TenGod,
    pub month: TenGod,
    pub hour: TenGod,
    pub branches: BranchTenGods,
}

impl TenGodAssignment {
    /// All seven labels: three stems, then four branches.
    pub fn labels(&self) -> [TenGod; 7] {
        [
            self.year,
            self.month,
            self.hour,
            self.branches.year,
            self.branches.month,
            self.branches.day,
            self.branches.hour,
        ]
    }

    pub fn family_count(&self, family: TenGodFamily) -> u8 {
        self.labels().iter().filter(|g| g.family() == family).count() as u8
    }

    pub fn family_strength(&self, family: TenGodFamily) -> FamilyStrength {
        FamilyStrength::from_count(self.family_count(family))
    }

    /// Counts per family in [`ALL_FAMILIES`] order.
    pub fn family_counts(&self) -> [u8; 5] {
        ALL_FAMILIES.map(|f| self.family_count(f))
    }
}

fn branch_label(day_master: HeavenlyStem, branch: EarthlyBranch) -> TenGod {
    TenGod::of_stem(day_master, branch.main_qi())
}

/// Label every position of a chart against its Day Master.
pub fn resolve_ten_gods(pillars: &FourPillars) -> TenGodAssignment {
    let dm = pillars.day_master();
    TenGodAssignment {
        day_master: dm,
        year: TenGod::of_stem(dm, pillars.year.stem()),
        month: TenGod::of_stem(dm, pillars.month.stem()),
        hour: TenGod::of_stem(dm, pillars.hour.stem()),
        branches: BranchTenGods {
            year: branch_label(dm, pillars.year.branch()),
            month: branch_label(dm, pillars.month.branch()),
            day: branch_label(dm, pillars.day.branch()),
            hour: branch_label(dm, pillars.hour.branch()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pillar::Pillar;
    use crate::stem::ALL_STEMS;

    #[test]
    fn golden_chart_labels() {
        let p = FourPillars {
            year: Pillar::from_cycle_index(6),
            month: Pillar::from_cycle_index(17),
            day: Pillar::from_cycle_index(16),
            hour: Pillar::from_cycle_index(18),
        };
        let t = resolve_ten_gods(&p);
        assert_eq!(t.day_master, HeavenlyStem::Geng);
        assert_eq!(t.year, TenGod::Peer);
        assert_eq!(t.month, TenGod::Rival);
        assert_eq!(t.hour, TenGod::OutputIndirect);
        assert_eq!(t.branches.year, TenGod::AuthorityDirect);
        assert_eq!(t.branches.month, TenGod::AuthorityIndirect);
        assert_eq!(t.branches.day, TenGod::ResourceIndirect);
        assert_eq!(t.branches.hour, TenGod::AuthorityDirect);
        assert_eq!(t.family_counts(), [2, 1, 0, 3, 1]);
        assert_eq!(
            t.family_strength(TenGodFamily::Authority),
            FamilyStrength::Prominent
        );
        assert_eq!(t.family_strength(TenGodFamily::Wealth), FamilyStrength::Absent);
    }

    #[test]
    fn every_day_master_sees_all_ten() {
        for dm in ALL_STEMS {
            let mut seen: Vec<TenGod> = ALL_STEMS.iter().map(|&t| TenGod::of_stem(dm, t)).collect();
            assert_eq!(TenGod::of_stem(dm, dm), TenGod::Peer);
            seen.sort_by_key(|g| g.name());
            seen.dedup();
            assert_eq!(seen.len(), 10, "{dm}");
        }
    }

    #[test]
    fn family_element_roundtrip() {
        use crate::element::ALL_ELEMENTS;
        for dm in ALL_ELEMENTS {
            for f in ALL_FAMILIES {
                assert_eq!(TenGodFamily::of_element(dm, f.element_for(dm)), f);
            }
        }
        assert_eq!(
            TenGodFamily::Wealth.element_for(Element::Metal),
            Element::Wood
        );
        assert_eq!(
            TenGodFamily::Authority.element_for(Element::Metal),
            Element::Fire
        );
    }

    #[test]
    fn polarity_splits_direct_and_indirect() {
        // Jia (yang wood) sees Ji (yin earth) as direct wealth, Wu as indirect.
        assert_eq!(
            TenGod::of_stem(HeavenlyStem::Jia, HeavenlyStem::Ji),
            TenGod::WealthDirect
        );
        assert_eq!(
            TenGod::of_stem(HeavenlyStem::Jia, HeavenlyStem::Wu),
            TenGod::WealthIndirect
        );
    }
}
