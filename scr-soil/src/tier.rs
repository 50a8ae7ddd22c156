/// Lower bound (inclusive) of the high tier.
pub const HIGH_TIER_MIN: i32 = 70;
/// Lower bound (inclusive) of the mid tier.
pub const MID_TIER_MIN: i32 = 60;

/// Coarse visual bucket for a suitability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    High,
    Mid,
    Low,
}

impl ScoreTier {
    /// `score >= 70` is high, `60 <= score < 70` is mid, anything lower is low.
    pub fn from_score(score: i32) -> Self {
        if score >= HIGH_TIER_MIN {
            ScoreTier::High
        } else if score >= MID_TIER_MIN {
            ScoreTier::Mid
        } else {
            ScoreTier::Low
        }
    }

    /// Progress bar colour class used by the results page.
    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreTier::High => "bg-teal",
            ScoreTier::Mid => "bg-purple",
            ScoreTier::Low => "bg-orange",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_partition_scores() {
        assert_eq!(ScoreTier::from_score(100), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(70), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(69), ScoreTier::Mid);
        assert_eq!(ScoreTier::from_score(60), ScoreTier::Mid);
        assert_eq!(ScoreTier::from_score(59), ScoreTier::Low);
        assert_eq!(ScoreTier::from_score(0), ScoreTier::Low);
    }

    #[test]
    fn example_scores_map_to_each_tier() {
        let tiers: Vec<ScoreTier> = [95, 65, 40].into_iter().map(ScoreTier::from_score).collect();
        assert_eq!(tiers, vec![ScoreTier::High, ScoreTier::Mid, ScoreTier::Low]);
    }

    #[test]
    fn css_classes() {
        assert_eq!(ScoreTier::High.css_class(), "bg-teal");
        assert_eq!(ScoreTier::Mid.css_class(), "bg-purple");
        assert_eq!(ScoreTier::Low.css_class(), "bg-orange");
    }
}
