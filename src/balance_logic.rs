//! Balance puzzle logic: ball generation, weighing evaluation, guess checking.

use rand::Rng;

use crate::balance::{Ball, BalanceGame, GuessDirection, PanSide, WeighingRecord};
use crate::constants::{ANOMALY_OFFSET, BASELINE_WEIGHT};

/// Generate the session's ball set with one hidden fake.
///
/// Ids run 1..=count. One id is picked uniformly at random and weighted
/// baseline + offset or baseline - offset with equal probability; every
/// other ball weighs exactly the baseline.
pub fn generate_balls<R: Rng>(count: u32, rng: &mut R) -> Vec<Ball> {
    let fake_id = rng.gen_range(1..=count);
    let offset = if rng.gen_bool(0.5) {
        ANOMALY_OFFSET
    } else {
        -ANOMALY_OFFSET
    };

    (1..=count)
        .map(|id| Ball {
            id,
            weight: if id == fake_id {
                BASELINE_WEIGHT + offset
            } else {
                BASELINE_WEIGHT
            },
        })
        .collect()
}

/// Evaluate the current pan contents and record the result.
///
/// The published outcome is the sign of (left total - right total), never
/// the raw difference: each weighing reveals one of exactly three facts,
/// so the fractional fake offset leaks nothing beyond ordering. Both pans
/// are emptied afterwards; the active pan selection is kept. Weighing
/// empty pans is allowed and records an even outcome.
pub fn weigh(game: &mut BalanceGame) -> WeighingRecord {
    let left: Vec<Ball> = game
        .pan_balls(PanSide::Left)
        .into_iter()
        .copied()
        .collect();
    let right: Vec<Ball> = game
        .pan_balls(PanSide::Right)
        .into_iter()
        .copied()
        .collect();

    let left_total: f64 = left.iter().map(|b| b.weight).sum();
    let right_total: f64 = right.iter().map(|b| b.weight).sum();
    let diff = left_total - right_total;

    let outcome = if diff > 0.0 {
        1
    } else if diff < 0.0 {
        -1
    } else {
        0
    };

    let record = WeighingRecord {
        left,
        right,
        outcome,
    };
    game.history.push(record.clone());
    game.pans[0].clear();
    game.pans[1].clear();

    record
}

/// Check the player's accusation against the true ball set.
///
/// An unknown ball id is ignored: the call returns None and the stored
/// verdict stays untouched. Otherwise the verdict is recorded on the game
/// and returned. With no fake ball in the set, every accusation is wrong.
pub fn submit_guess(
    game: &mut BalanceGame,
    ball_id: u32,
    direction: GuessDirection,
) -> Option<bool> {
    let ball = *game.ball(ball_id)?;

    let correct = match direction {
        GuessDirection::Heavier => ball.is_heavy(),
        GuessDirection::Lighter => ball.is_light(),
    };

    game.guess_result = Some(correct);
    Some(correct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BALL_COUNT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Three balls with ball 2 heavier, as small as the puzzle gets.
    fn three_ball_set() -> Vec<Ball> {
        vec![
            Ball { id: 1, weight: 1.0 },
            Ball {
                id: 2,
                weight: 1.01,
            },
            Ball { id: 3, weight: 1.0 },
        ]
    }

    #[test]
    fn test_generate_exactly_one_fake() {
        let mut rng = StdRng::seed_from_u64(42);
        let balls = generate_balls(BALL_COUNT, &mut rng);

        assert_eq!(balls.len(), BALL_COUNT as usize);
        let fakes: Vec<&Ball> = balls.iter().filter(|b| b.is_anomalous()).collect();
        assert_eq!(fakes.len(), 1, "exactly one ball deviates from baseline");

        for ball in &balls {
            if ball.id != fakes[0].id {
                assert_eq!(ball.weight, BASELINE_WEIGHT);
            }
        }
    }

    #[test]
    fn test_generate_sequential_ids() {
        let mut rng = StdRng::seed_from_u64(7);
        let balls = generate_balls(5, &mut rng);
        let ids: Vec<u32> = balls.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_generate_offset_magnitude() {
        let mut rng = StdRng::seed_from_u64(11);
        let balls = generate_balls(BALL_COUNT, &mut rng);
        let fake = balls.iter().find(|b| b.is_anomalous()).unwrap();

        let deviation = (fake.weight - BASELINE_WEIGHT).abs();
        assert!((deviation - ANOMALY_OFFSET).abs() < 1e-12);
    }

    #[test]
    fn test_generate_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(
            generate_balls(BALL_COUNT, &mut rng1),
            generate_balls(BALL_COUNT, &mut rng2)
        );
    }

    #[test]
    fn test_weigh_sign_law() {
        // Heavier ball on the right: right total wins, outcome -1
        let mut game = BalanceGame::from_balls(three_ball_set());
        game.select_pan(PanSide::Left);
        game.place_ball(1);
        game.select_pan(PanSide::Right);
        game.place_ball(2);

        let record = weigh(&mut game);
        assert_eq!(record.outcome, -1);
        assert_eq!(record.symbol(), "<");

        // Heavier ball on the left this time
        game.select_pan(PanSide::Left);
        game.place_ball(2);
        game.select_pan(PanSide::Right);
        game.place_ball(3);
        let record = weigh(&mut game);
        assert_eq!(record.outcome, 1);
        assert_eq!(record.symbol(), ">");

        // Two plain balls balance
        game.select_pan(PanSide::Left);
        game.place_ball(1);
        game.select_pan(PanSide::Right);
        game.place_ball(3);
        let record = weigh(&mut game);
        assert_eq!(record.outcome, 0);
        assert_eq!(record.symbol(), "=");
    }

    #[test]
    fn test_weigh_unbalanced_counts() {
        // Two balls against one: magnitude is large but outcome is still a sign
        let mut game = BalanceGame::from_balls(three_ball_set());
        game.select_pan(PanSide::Left);
        game.place_ball(1);
        game.place_ball(3);
        game.select_pan(PanSide::Right);
        game.place_ball(2);

        let record = weigh(&mut game);
        assert_eq!(record.outcome, 1);
    }

    #[test]
    fn test_weigh_resets_pans_and_appends_history() {
        let mut game = BalanceGame::from_balls(three_ball_set());
        game.select_pan(PanSide::Left);
        game.place_ball(1);
        game.select_pan(PanSide::Right);
        game.place_ball(2);

        assert!(game.history.is_empty());
        weigh(&mut game);

        assert_eq!(game.history.len(), 1);
        assert!(game.pans[0].is_empty());
        assert!(game.pans[1].is_empty());
        assert_eq!(game.available_balls().len(), 3);

        // Pan selection survives the weighing
        assert_eq!(game.active_pan, Some(PanSide::Right));
    }

    #[test]
    fn test_weigh_snapshot_contents() {
        let mut game = BalanceGame::from_balls(three_ball_set());
        game.select_pan(PanSide::Left);
        game.place_ball(1);
        game.place_ball(3);
        game.select_pan(PanSide::Right);
        game.place_ball(2);

        let record = weigh(&mut game);
        let left_ids: Vec<u32> = record.left.iter().map(|b| b.id).collect();
        let right_ids: Vec<u32> = record.right.iter().map(|b| b.id).collect();
        assert_eq!(left_ids, vec![1, 3]);
        assert_eq!(right_ids, vec![2]);

        // The stored record matches the returned one
        assert_eq!(game.history[0], record);
    }

    #[test]
    fn test_weigh_empty_pans() {
        let mut game = BalanceGame::from_balls(three_ball_set());
        let record = weigh(&mut game);

        assert_eq!(record.outcome, 0);
        assert!(record.left.is_empty());
        assert!(record.right.is_empty());
        assert_eq!(game.history.len(), 1);
    }

    #[test]
    fn test_guess_correctness_law() {
        // Right ball, right direction
        let mut game = BalanceGame::from_balls(three_ball_set());
        assert_eq!(submit_guess(&mut game, 2, GuessDirection::Heavier), Some(true));
        assert_eq!(game.guess_result, Some(true));

        // Right ball, wrong direction
        let mut game = BalanceGame::from_balls(three_ball_set());
        assert_eq!(submit_guess(&mut game, 2, GuessDirection::Lighter), Some(false));
        assert_eq!(game.guess_result, Some(false));

        // Wrong ball, either direction
        let mut game = BalanceGame::from_balls(three_ball_set());
        assert_eq!(submit_guess(&mut game, 1, GuessDirection::Heavier), Some(false));
        let mut game = BalanceGame::from_balls(three_ball_set());
        assert_eq!(submit_guess(&mut game, 1, GuessDirection::Lighter), Some(false));
    }

    #[test]
    fn test_guess_unknown_ball_is_ignored() {
        let mut game = BalanceGame::from_balls(three_ball_set());
        assert_eq!(submit_guess(&mut game, 99, GuessDirection::Heavier), None);
        assert!(game.guess_result.is_none());
    }

    #[test]
    fn test_guess_with_no_fake_ball_always_wrong() {
        let plain = vec![
            Ball { id: 1, weight: 1.0 },
            Ball { id: 2, weight: 1.0 },
            Ball { id: 3, weight: 1.0 },
        ];
        for id in 1..=3 {
            for direction in GuessDirection::ALL {
                let mut game = BalanceGame::from_balls(plain.clone());
                assert_eq!(submit_guess(&mut game, id, direction), Some(false));
            }
        }
    }
}
