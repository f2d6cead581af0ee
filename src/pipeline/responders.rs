//! Responder adapters: the pruning agent and the baselines it plays against

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    ports::Responder,
    pruning::PruningAgent,
    tictactoe::{Board, Player, board_status},
};

impl Responder for PruningAgent {
    fn start(&mut self, side: Player) -> Board {
        PruningAgent::start(self, Some(side))
    }

    fn respond(&mut self, board: Option<&Board>) -> Option<Board> {
        PruningAgent::respond(self, board)
    }

    fn name(&self) -> &str {
        "pruning"
    }
}

/// Plays a uniformly random empty square
pub struct RandomResponder {
    name: String,
    side: Player,
    rng: StdRng,
}

impl RandomResponder {
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        Self {
            name: name.into(),
            side: Player::O,
            rng,
        }
    }
}

impl Responder for RandomResponder {
    fn start(&mut self, side: Player) -> Board {
        self.side = side;
        Board::new()
    }

    fn respond(&mut self, board: Option<&Board>) -> Option<Board> {
        let board = board?;
        if board_status(board).is_over() {
            return None;
        }
        let pos = *board.empty_positions().choose(&mut self.rng)?;
        board.with_cell(pos, self.side.to_cell()).ok()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Plays a fixed list of squares in order, skipping any already taken.
///
/// Used to replay an exact opponent line against the agent. Once the script runs
/// out it stops answering.
pub struct ScriptedResponder {
    name: String,
    side: Player,
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedResponder {
    pub fn new(name: impl Into<String>, script: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            side: Player::X,
            script,
            cursor: 0,
        }
    }
}

impl Responder for ScriptedResponder {
    fn start(&mut self, side: Player) -> Board {
        self.side = side;
        self.cursor = 0;
        Board::new()
    }

    fn respond(&mut self, board: Option<&Board>) -> Option<Board> {
        let board = board?;
        if board_status(board).is_over() {
            return None;
        }
        while let Some(&pos) = self.script.get(self.cursor) {
            self.cursor += 1;
            if pos < 9 && board.is_empty(pos) {
                return board.with_cell(pos, self.side.to_cell()).ok();
            }
        }
        None
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    #[test]
    fn random_responder_fills_an_empty_square() {
        let mut random = RandomResponder::new("random", Some(3));
        let empty = random.start(Player::X);
        let board = random.respond(Some(&empty)).unwrap();
        assert_eq!(board.count(Cell::X), 1);
        assert_eq!(board.count(Cell::O), 0);
    }

    #[test]
    fn random_responder_stops_on_finished_game() {
        let mut random = RandomResponder::new("random", Some(3));
        random.start(Player::O);
        let won: Board = "XXX\nOO.\n...".parse().unwrap();
        assert_eq!(random.respond(Some(&won)), None);
        assert_eq!(random.respond(None), None);
    }

    #[test]
    fn scripted_responder_skips_taken_squares() {
        let mut scripted = ScriptedResponder::new("script", vec![4, 0, 8]);
        scripted.start(Player::X);
        let board: Board = "...\n.O.\n...".parse().unwrap();
        let reply = scripted.respond(Some(&board)).unwrap();
        assert_eq!(reply.get(0), Cell::X);

        let reply = scripted.respond(Some(&reply)).unwrap();
        assert_eq!(reply.get(8), Cell::X);
        assert_eq!(scripted.respond(Some(&reply)), None);
    }
}
