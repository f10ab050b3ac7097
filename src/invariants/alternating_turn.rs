//! Alternating turn invariant: marks take turns.

use super::Invariant;
use crate::typestate::GameInProgress;

/// Invariant: moves in the history alternate marks, and the mark to move
/// is the opponent of the last mover.
pub struct AlternatingTurn;

impl Invariant<GameInProgress> for AlternatingTurn {
    fn holds(round: &GameInProgress) -> bool {
        let history = round.history();

        for pair in history.windows(2) {
            if pair[1].mark != pair[0].mark.opponent() {
                return false;
            }
        }

        match history.last() {
            Some(last) => round.to_move() == last.mark.opponent(),
            None => true,
        }
    }

    fn description() -> &'static str {
        "moves alternate marks and the turn passes to the opponent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::types::Mark;
    use crate::typestate::{GameResult, GameSetup};

    #[test]
    fn test_fresh_round_holds() {
        let round = GameSetup::new().start(Mark::Cross);
        assert!(AlternatingTurn::holds(&round));
    }

    #[test]
    fn test_alternation_holds_after_moves() {
        let round = GameSetup::new().start(Mark::Circle);

        let Ok(GameResult::InProgress(round)) =
            round.make_move(Move::new(Mark::Circle, 0, 0))
        else {
            panic!("expected an in-progress round");
        };
        assert_eq!(round.to_move(), Mark::Cross);
        assert!(AlternatingTurn::holds(&round));
    }

    #[test]
    fn test_duplicated_mark_violates() {
        let round = GameSetup::new().start(Mark::Circle);

        let Ok(GameResult::InProgress(mut round)) =
            round.make_move(Move::new(Mark::Circle, 0, 0))
        else {
            panic!("expected an in-progress round");
        };

        round.history.push(Move::new(Mark::Circle, 1, 1));
        assert!(!AlternatingTurn::holds(&round));
    }
}
