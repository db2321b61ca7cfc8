//! The five elements (wuxing), their generating and controlling cycles,
//! and yin/yang polarity.

use serde::{Deserialize, Serialize};

/// The five elements in precedence order (wood first).
///
/// The derived `Ord` follows this order and is used as the tie-break
/// for dominant/weakest element selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in precedence order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element for a 0-based index, wrapping modulo 5.
    pub const fn from_index(i: u8) -> Self {
        ALL_ELEMENTS[(i % 5) as usize]
    }

    /// Lower-case English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// The element this one generates (wood → fire → earth → metal → water → wood).
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element that generates this one.
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The element this one controls (wood → earth → water → fire → metal → wood).
    pub const fn controls(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The element that controls this one.
    pub const fn controlled_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Yin/yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Even cycle positions are yang.
    pub const fn from_index(i: u8) -> Self {
        if i % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generating_cycle() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Water.generates(), Element::Wood);
        assert_eq!(Element::Fire.generated_by(), Element::Wood);
    }

    #[test]
    fn controlling_cycle() {
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Earth.controls(), Element::Water);
        assert_eq!(Element::Water.controls(), Element::Fire);
        assert_eq!(Element::Fire.controls(), Element::Metal);
        assert_eq!(Element::Metal.controls(), Element::Wood);
        assert_eq!(Element::Wood.controlled_by(), Element::Metal);
    }

    #[test]
    fn cycles_are_inverse() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.generates().generated_by(), e);
            assert_eq!(e.controls().controlled_by(), e);
        }
    }

    #[test]
    fn each_element_has_one_relation_to_every_other() {
        for e in ALL_ELEMENTS {
            let mut seen = [e, e.generates(), e.generated_by(), e.controls(), e.controlled_by()];
            seen.sort();
            assert_eq!(seen, ALL_ELEMENTS);
        }
    }

    #[test]
    fn precedence_order() {
        assert!(Element::Wood < Element::Fire);
        assert!(Element::Metal < Element::Water);
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&Element::Metal).unwrap(), "\"metal\"");
        assert_eq!(serde_json::to_string(&Polarity::Yin).unwrap(), "\"yin\"");
    }
}
