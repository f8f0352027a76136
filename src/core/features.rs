use crate::models::{FeatureVector, OrderedPair};

/// Number of input features the model was trained against
pub const FEATURE_COUNT: usize = 24;

/// Training-time column names, in vector order
///
/// The final position repeats the rating differential of position 12. The
/// model consumes a 24-wide input and both positions must be populated;
/// deduplicating would change the input shape and requires retraining.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "RedRating",
    "BlueRating",
    "BlueCurrentWinStreak",
    "BlueAvgSigStrPct",
    "BlueAvgTDPct",
    "RedAvgSigStrPct",
    "RedAvgTDPct",
    "RedLosses",
    "RedWinsByDecision",
    "RedDaysSinceLastFight",
    "BlueDaysSinceLastFight",
    "RatingDiff",
    "CurrentLoseStreakDiff",
    "CurrentWinStreakDiff",
    "AvgSigStrLandedDiff",
    "AvgSubAttDiff",
    "AvgTDLandedDiff",
    "LossesDiff",
    "TotalRoundsFoughtDiff",
    "ReachCmDiff",
    "WeightLbDiff",
    "AgeDiff",
    "DaysSinceLastFightDiff",
    "SkillRatingDiff",
];

/// Build the model input vector from an ordered corner assignment
///
/// Positions 1-11 are raw attributes, 12-23 are red-minus-blue differences,
/// 24 repeats the rating differential. All arithmetic in f64; no rounding
/// happens here.
pub fn build_features(pair: &OrderedPair) -> FeatureVector {
    let r = &pair.red;
    let b = &pair.blue;

    FeatureVector([
        r.rating,
        b.rating,
        b.current_win_streak as f64,
        b.avg_sig_str_pct,
        b.avg_td_pct,
        r.avg_sig_str_pct,
        r.avg_td_pct,
        r.losses as f64,
        r.wins_by_decision as f64,
        r.days_since_last_fight as f64,
        b.days_since_last_fight as f64,
        r.rating - b.rating,
        (r.current_lose_streak - b.current_lose_streak) as f64,
        (r.current_win_streak - b.current_win_streak) as f64,
        r.avg_sig_str_landed - b.avg_sig_str_landed,
        r.avg_sub_att - b.avg_sub_att,
        r.avg_td_landed - b.avg_td_landed,
        (r.losses - b.losses) as f64,
        (r.total_rounds_fought - b.total_rounds_fought) as f64,
        r.reach_cm - b.reach_cm,
        (r.weight_lb - b.weight_lb) as f64,
        (r.age - b.age) as f64,
        (r.days_since_last_fight - b.days_since_last_fight) as f64,
        r.rating - b.rating,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FighterRecord;

    fn red_fighter() -> FighterRecord {
        FighterRecord {
            name: "Red".to_string(),
            gender: "male".to_string(),
            stance: Some("Southpaw".to_string()),
            rating: 1650.0,
            current_win_streak: 4,
            current_lose_streak: 0,
            avg_sig_str_landed: 5.2,
            avg_sig_str_pct: 0.51,
            avg_sub_att: 0.8,
            avg_td_landed: 2.1,
            avg_td_pct: 0.44,
            wins: 18,
            losses: 2,
            draws: 0,
            wins_by_decision: 7,
            wins_by_ko: 8,
            wins_by_submission: 3,
            total_rounds_fought: 48,
            total_title_bouts: 1,
            height_cm: 180.0,
            reach_cm: 188.0,
            weight_lb: 170,
            age: 28,
            days_since_last_fight: 90,
            last_fight_date: None,
        }
    }

    fn blue_fighter() -> FighterRecord {
        FighterRecord {
            name: "Blue".to_string(),
            gender: "male".to_string(),
            stance: Some("Orthodox".to_string()),
            rating: 1580.0,
            current_win_streak: 2,
            current_lose_streak: 1,
            avg_sig_str_landed: 3.9,
            avg_sig_str_pct: 0.46,
            avg_sub_att: 1.4,
            avg_td_landed: 1.0,
            avg_td_pct: 0.35,
            wins: 15,
            losses: 5,
            draws: 1,
            wins_by_decision: 9,
            wins_by_ko: 4,
            wins_by_submission: 2,
            total_rounds_fought: 61,
            total_title_bouts: 0,
            height_cm: 178.0,
            reach_cm: 183.0,
            weight_lb: 170,
            age: 32,
            days_since_last_fight: 210,
            last_fight_date: None,
        }
    }

    #[test]
    fn test_vector_has_exactly_24_features() {
        let pair = OrderedPair {
            red: red_fighter(),
            blue: blue_fighter(),
        };
        let vector = build_features(&pair);

        assert_eq!(vector.len(), FEATURE_COUNT);
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_raw_attribute_positions() {
        let pair = OrderedPair {
            red: red_fighter(),
            blue: blue_fighter(),
        };
        let v = build_features(&pair);
        let values = v.values();

        assert_eq!(values[0], 1650.0); // red rating
        assert_eq!(values[1], 1580.0); // blue rating
        assert_eq!(values[2], 2.0); // blue win streak
        assert_eq!(values[3], 0.46); // blue sig str pct
        assert_eq!(values[4], 0.35); // blue td pct
        assert_eq!(values[5], 0.51); // red sig str pct
        assert_eq!(values[6], 0.44); // red td pct
        assert_eq!(values[7], 2.0); // red losses
        assert_eq!(values[8], 7.0); // red wins by decision
        assert_eq!(values[9], 90.0); // red days since last fight
        assert_eq!(values[10], 210.0); // blue days since last fight
    }

    #[test]
    fn test_difference_positions_are_exact_red_minus_blue() {
        let pair = OrderedPair {
            red: red_fighter(),
            blue: blue_fighter(),
        };
        let v = build_features(&pair);
        let values = v.values();

        assert_eq!(values[11], 1650.0 - 1580.0);
        assert_eq!(values[12], 0.0 - 1.0);
        assert_eq!(values[13], 4.0 - 2.0);
        assert_eq!(values[14], 5.2 - 3.9);
        assert_eq!(values[15], 0.8 - 1.4);
        assert_eq!(values[16], 2.1 - 1.0);
        assert_eq!(values[17], 2.0 - 5.0);
        assert_eq!(values[18], 48.0 - 61.0);
        assert_eq!(values[19], 188.0 - 183.0);
        assert_eq!(values[20], 0.0);
        assert_eq!(values[21], 28.0 - 32.0);
        assert_eq!(values[22], 90.0 - 210.0);
    }

    #[test]
    fn test_final_feature_duplicates_rating_diff() {
        let pair = OrderedPair {
            red: red_fighter(),
            blue: blue_fighter(),
        };
        let v = build_features(&pair);
        let values = v.values();

        assert_eq!(values[23], values[11]);
    }

    #[test]
    fn test_vector_serializes_as_flat_array() {
        let pair = OrderedPair {
            red: red_fighter(),
            blue: blue_fighter(),
        };
        let v = build_features(&pair);

        let json = serde_json::to_value(&v).unwrap();
        let arr = json.as_array().expect("vector should serialize as an array");
        assert_eq!(arr.len(), FEATURE_COUNT);
    }
}
