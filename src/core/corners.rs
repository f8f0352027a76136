use crate::models::{FighterRecord, OrderedPair};

/// Assign two fighters to the red and blue corners
///
/// With `auto_select` off, caller order is preserved (first argument takes
/// the red corner). With it on, the strictly higher rating takes red; an
/// exact tie keeps caller order and is never randomized.
pub fn assign_corners(
    first: FighterRecord,
    second: FighterRecord,
    auto_select: bool,
) -> OrderedPair {
    if auto_select && second.rating > first.rating {
        OrderedPair {
            red: second,
            blue: first,
        }
    } else {
        OrderedPair {
            red: first,
            blue: second,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FighterRecord;

    fn fighter(name: &str, rating: f64) -> FighterRecord {
        FighterRecord {
            name: name.to_string(),
            gender: "male".to_string(),
            stance: Some("Orthodox".to_string()),
            rating,
            current_win_streak: 3,
            current_lose_streak: 0,
            avg_sig_str_landed: 4.5,
            avg_sig_str_pct: 0.48,
            avg_sub_att: 0.6,
            avg_td_landed: 1.2,
            avg_td_pct: 0.40,
            wins: 20,
            losses: 3,
            draws: 0,
            wins_by_decision: 8,
            wins_by_ko: 9,
            wins_by_submission: 3,
            total_rounds_fought: 55,
            total_title_bouts: 2,
            height_cm: 185.0,
            reach_cm: 193.0,
            weight_lb: 205,
            age: 29,
            days_since_last_fight: 120,
            last_fight_date: None,
        }
    }

    #[test]
    fn test_caller_order_preserved_without_auto_select() {
        let pair = assign_corners(fighter("A", 1500.0), fighter("B", 1700.0), false);
        assert_eq!(pair.red.name, "A");
        assert_eq!(pair.blue.name, "B");
    }

    #[test]
    fn test_auto_select_puts_higher_rating_in_red() {
        let pair = assign_corners(fighter("A", 1500.0), fighter("B", 1700.0), true);
        assert_eq!(pair.red.name, "B");
        assert_eq!(pair.blue.name, "A");
    }

    #[test]
    fn test_auto_select_keeps_order_when_first_is_higher() {
        let pair = assign_corners(fighter("A", 1700.0), fighter("B", 1500.0), true);
        assert_eq!(pair.red.name, "A");
        assert_eq!(pair.blue.name, "B");
    }

    #[test]
    fn test_equal_ratings_never_swap() {
        let pair = assign_corners(fighter("A", 1600.0), fighter("B", 1600.0), true);
        assert_eq!(pair.red.name, "A");
        assert_eq!(pair.blue.name, "B");

        // And in the reversed call the first argument still takes red
        let pair = assign_corners(fighter("B", 1600.0), fighter("A", 1600.0), true);
        assert_eq!(pair.red.name, "B");
        assert_eq!(pair.blue.name, "A");
    }
}
