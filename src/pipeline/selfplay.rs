//! Self-play driver: runs games between two responders and tallies results

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    app::SelfPlayConfig,
    ports::{Observer, Responder},
    tictactoe::{Board, GameStatus, Player, board_status},
};

/// A game never needs more than one reply per square plus the closing one.
const MAX_REPLIES: usize = 10;

/// Results of a batch of games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub o_wins: usize,
    pub x_wins: usize,
    pub draws: usize,
    /// Games that stopped before a result because a side declined to move
    pub unfinished: usize,
}

impl Tally {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => self.unfinished += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.o_wins + self.x_wins + self.draws + self.unfinished
    }

    pub fn merge(&mut self, other: &Tally) {
        self.o_wins += other.o_wins;
        self.x_wins += other.x_wins;
        self.draws += other.draws;
        self.unfinished += other.unfinished;
    }

    pub fn draw_rate(&self) -> f64 {
        let games = self.games();
        if games > 0 {
            self.draws as f64 / games as f64
        } else {
            0.0
        }
    }
}

/// Result of a self-play run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayReport {
    pub config: SelfPlayConfig,
    /// One tally per set, in order
    pub sets: Vec<Tally>,
    pub totals: Tally,
}

impl SelfPlayReport {
    /// Save report to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create report {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load report from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open report {}", path.display()),
            source,
        })?;
        let report = serde_json::from_reader(file)?;
        Ok(report)
    }
}

/// Play one game between `o` and `x`, starting with `first`.
///
/// Both responders are started, then boards are handed back and forth from the
/// empty board until one side answers with `None`. The loser of a decided game
/// always gets to see the final board, which is how a pruning agent learns.
/// Returns the status of the last board played.
pub fn play_game(
    o: &mut dyn Responder,
    x: &mut dyn Responder,
    first: Player,
    game_num: usize,
    observers: &mut [&mut dyn Observer],
) -> Result<GameStatus> {
    for observer in observers.iter_mut() {
        observer.on_game_start(game_num)?;
    }

    o.start(Player::O);
    let mut board: Board = x.start(Player::X);
    let mut to_move = first;

    for _ in 0..MAX_REPLIES {
        let reply = match to_move {
            Player::O => o.respond(Some(&board)),
            Player::X => x.respond(Some(&board)),
        };
        let Some(next) = reply else {
            break;
        };
        for observer in observers.iter_mut() {
            observer.on_board(game_num, &next)?;
        }
        board = next;
        to_move = to_move.opponent();
    }

    let status = board_status(&board);
    debug!(game_num, %status, "game finished");
    for observer in observers.iter_mut() {
        observer.on_game_end(game_num, status)?;
    }
    Ok(status)
}

/// Runs sets of games between two responders
pub struct SelfPlay<'a> {
    config: SelfPlayConfig,
    observers: Vec<&'a mut dyn Observer>,
}

impl<'a> SelfPlay<'a> {
    /// Create a new self-play run
    pub fn new(config: SelfPlayConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the run
    pub fn with_observer(mut self, observer: &'a mut dyn Observer) -> Self {
        self.observers.push(observer);
        self
    }

    /// Play every set and return the per-set tallies.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or an observer fails.
    pub fn run(&mut self, o: &mut dyn Responder, x: &mut dyn Responder) -> Result<SelfPlayReport> {
        self.config.validate()?;

        for observer in &mut self.observers {
            observer.on_run_start(self.config.total_games())?;
        }

        let mut sets = Vec::with_capacity(self.config.sets);
        let mut totals = Tally::default();
        let mut game_num = 0;

        for set_num in 0..self.config.sets {
            let mut tally = Tally::default();
            for _ in 0..self.config.games_per_set {
                let status = play_game(
                    o,
                    x,
                    self.config.first_player,
                    game_num,
                    &mut self.observers,
                )?;
                tally.record(status);
                game_num += 1;
            }

            info!(
                set = set_num + 1,
                o_wins = tally.o_wins,
                x_wins = tally.x_wins,
                draws = tally.draws,
                "set finished"
            );
            for observer in &mut self.observers {
                observer.on_set_end(set_num, &tally)?;
            }
            totals.merge(&tally);
            sets.push(tally);
        }

        for observer in &mut self.observers {
            observer.on_run_end()?;
        }

        Ok(SelfPlayReport {
            config: self.config.clone(),
            sets,
            totals,
        })
    }
}
