use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven scored dimensions.
///
/// Declaration order is the canonical entry order: it drives iteration over
/// score sets and breaks ties when picking a dominant sin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sin {
    Pride,
    Greed,
    Lust,
    Envy,
    Gluttony,
    Wrath,
    Sloth,
}

impl Sin {
    pub const COUNT: usize = 7;

    pub const ALL: [Sin; Sin::COUNT] = [
        Sin::Pride,
        Sin::Greed,
        Sin::Lust,
        Sin::Envy,
        Sin::Gluttony,
        Sin::Wrath,
        Sin::Sloth,
    ];

    /// Position of this sin in `Sin::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Sin::Pride => "Pride",
            Sin::Greed => "Greed",
            Sin::Lust => "Lust",
            Sin::Envy => "Envy",
            Sin::Gluttony => "Gluttony",
            Sin::Wrath => "Wrath",
            Sin::Sloth => "Sloth",
        }
    }
}

impl fmt::Display for Sin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_entry_order() {
        for (position, sin) in Sin::ALL.iter().enumerate() {
            assert_eq!(sin.index(), position);
        }
    }

    #[test]
    fn deserializes_from_display_name() {
        let sin: Sin = serde_json::from_str("\"Gluttony\"").unwrap();
        assert_eq!(sin, Sin::Gluttony);
        assert_eq!(sin.to_string(), "Gluttony");
    }
}
