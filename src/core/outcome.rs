use crate::models::{FightPrediction, OrderedPair};

/// Round a probability to 4 decimal places for display
#[inline]
pub fn round_probability(p: f64) -> f64 {
    (p * 10_000.0).round() / 10_000.0
}

/// Map raw oracle output back to fighter names
///
/// Label 1 means the red corner wins; the probability pair arrives as
/// [P(blue wins), P(red wins)]. The winner comes from the label alone,
/// never from comparing the rounded probabilities.
pub fn synthesize(pair: &OrderedPair, label: u8, probabilities: [f64; 2]) -> FightPrediction {
    let winner = if label == 1 {
        pair.red.name.clone()
    } else {
        pair.blue.name.clone()
    };

    FightPrediction {
        winner,
        red_prob: round_probability(probabilities[1]),
        blue_prob: round_probability(probabilities[0]),
        red_corner: pair.red.name.clone(),
        blue_corner: pair.blue.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FighterRecord;

    fn fighter(name: &str) -> FighterRecord {
        FighterRecord {
            name: name.to_string(),
            gender: "female".to_string(),
            stance: None,
            rating: 1500.0,
            current_win_streak: 1,
            current_lose_streak: 0,
            avg_sig_str_landed: 3.0,
            avg_sig_str_pct: 0.45,
            avg_sub_att: 0.5,
            avg_td_landed: 1.0,
            avg_td_pct: 0.33,
            wins: 10,
            losses: 4,
            draws: 0,
            wins_by_decision: 5,
            wins_by_ko: 3,
            wins_by_submission: 2,
            total_rounds_fought: 30,
            total_title_bouts: 0,
            height_cm: 168.0,
            reach_cm: 170.0,
            weight_lb: 135,
            age: 27,
            days_since_last_fight: 150,
            last_fight_date: None,
        }
    }

    fn pair() -> OrderedPair {
        OrderedPair {
            red: fighter("Alice"),
            blue: fighter("Bob"),
        }
    }

    #[test]
    fn test_label_one_picks_red_corner() {
        let result = synthesize(&pair(), 1, [0.2, 0.8]);

        assert_eq!(result.winner, "Alice");
        assert_eq!(result.red_prob, 0.8);
        assert_eq!(result.blue_prob, 0.2);
        assert_eq!(result.red_corner, "Alice");
        assert_eq!(result.blue_corner, "Bob");
    }

    #[test]
    fn test_label_zero_picks_blue_corner() {
        let result = synthesize(&pair(), 0, [0.7, 0.3]);

        assert_eq!(result.winner, "Bob");
        assert_eq!(result.red_prob, 0.3);
        assert_eq!(result.blue_prob, 0.7);
    }

    #[test]
    fn test_probabilities_rounded_to_four_decimals() {
        let result = synthesize(&pair(), 1, [0.123456, 0.876544]);

        assert_eq!(result.red_prob, 0.8765);
        assert_eq!(result.blue_prob, 0.1235);
    }

    #[test]
    fn test_winner_follows_label_not_probabilities() {
        // An oracle can emit a label that disagrees with the probability
        // argmax; the label wins.
        let result = synthesize(&pair(), 0, [0.4, 0.6]);
        assert_eq!(result.winner, "Bob");
    }

    #[test]
    fn test_round_probability() {
        assert_eq!(round_probability(0.88889), 0.8889);
        assert_eq!(round_probability(0.5), 0.5);
        assert_eq!(round_probability(0.00004), 0.0);
    }
}
