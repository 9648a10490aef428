use vitium_core::model::Sin;

/// Display data for one sin: what the landing page reveals on hover and what
/// the verdict screen shows for a dominant sin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinProfile {
    pub title: &'static str,
    pub description: &'static str,
    /// CSS hex colour.
    pub accent: &'static str,
}

pub const EQUANIMITY: SinProfile = SinProfile {
    title: "EQUAL",
    description: "Your soul exists in a state of perfect equilibrium. No single vice claims dominance, \
                  for they all reside within you in equal measure. You are the mirror that reflects \
                  the entirety of human failing.",
    accent: "#ffffff",
};

#[must_use]
pub fn sin_profile(sin: Sin) -> SinProfile {
    match sin {
        Sin::Pride => SinProfile {
            title: "Pride",
            description: "The first of the fallen. An excessive belief in your own worth that \
                          places the self above every other light.",
            accent: "#f59e0b",
        },
        Sin::Greed => SinProfile {
            title: "Greed",
            description: "A hunger for possession that is never sated. What you hold is never \
                          enough, and what others hold is always too much.",
            accent: "#10b981",
        },
        Sin::Lust => SinProfile {
            title: "Lust",
            description: "Desire that consumes reason. The pull toward pleasure that blinds you \
                          to what it costs.",
            accent: "#f43f5e",
        },
        Sin::Envy => SinProfile {
            title: "Envy",
            description: "Sorrow at another's fortune. You measure your life against the lives \
                          of others and always find it wanting.",
            accent: "#6366f1",
        },
        Sin::Gluttony => SinProfile {
            title: "Gluttony",
            description: "Indulgence past the point of need. You take more than you can hold \
                          and still reach for another portion.",
            accent: "#f97316",
        },
        Sin::Wrath => SinProfile {
            title: "Wrath",
            description: "Fire without a hearth. Anger that outlives its cause and seeks \
                          something to burn.",
            accent: "#dc2626",
        },
        Sin::Sloth => SinProfile {
            title: "Sloth",
            description: "The quiet surrender. A weariness of the spirit that lets every duty \
                          and every chance drift past untouched.",
            accent: "#0ea5e9",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sin_has_a_distinct_accent() {
        let mut accents: Vec<_> = Sin::ALL.iter().map(|sin| sin_profile(*sin).accent).collect();
        accents.sort_unstable();
        accents.dedup();
        assert_eq!(accents.len(), Sin::COUNT);
        assert!(!accents.contains(&EQUANIMITY.accent));
    }

    #[test]
    fn titles_match_sin_names() {
        for sin in Sin::ALL {
            assert_eq!(sin_profile(sin).title, sin.name());
        }
    }
}
