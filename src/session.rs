//! Session records: the starting position plus the notation, enough to
//! rebuild any point of a game by replaying it.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{RecordError, RulesError};
use crate::game::{Game, GameInfo};
use crate::moves::Move;
use crate::notation::{self, MoveLog};
use crate::piece::{Color, PieceType};
use crate::position::{Placement, Position};
use crate::rules::FIFTY_MOVE_LIMIT;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    #[serde(rename = "1-0")]
    WhiteWins,
    #[serde(rename = "0-1")]
    BlackWins,
    #[serde(rename = "1/2-1/2")]
    Draw,
}

impl GameResult {
    pub fn token(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }

    /// The result when `color` resigns.
    pub fn resignation(color: Color) -> Self {
        match color {
            Color::White => GameResult::BlackWins,
            Color::Black => GameResult::WhiteWins,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for GameResult {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-0" => Ok(GameResult::WhiteWins),
            "0-1" => Ok(GameResult::BlackWins),
            "1/2-1/2" => Ok(GameResult::Draw),
            _ => Err(RulesError::MalformedInput(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white_player: String,
    pub black_player: String,
    #[serde(default)]
    pub event: String,
    pub first_to_move: Color,
    pub starting_position: Vec<Placement>,
    /// Half-moves without a capture before the draw; older records lack it.
    #[serde(default = "default_fifty_move_limit")]
    pub fifty_move_limit: u32,
    pub notation: MoveLog,
    pub result: Option<GameResult>,
}

fn default_fifty_move_limit() -> u32 {
    FIFTY_MOVE_LIMIT
}

impl GameRecord {
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.notation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notation.is_empty()
    }

    pub fn half_moves(&self) -> Vec<&str> {
        self.notation.half_moves()
    }

    /// Decoded move at half-move `index`.
    pub fn move_at(&self, index: usize) -> Option<Result<Move, RulesError>> {
        self.half_moves().get(index).map(|token| notation::decode(token))
    }

    fn starting_game(&self) -> Result<Game, RecordError> {
        let position = Position::from_placements(&self.starting_position)?;
        let mut game =
            Game::new(position, self.first_to_move)?.with_fifty_move_limit(self.fifty_move_limit);
        game.info = GameInfo {
            white_player: self.white_player.clone(),
            black_player: self.black_player.clone(),
            event: self.event.clone(),
        };
        Ok(game)
    }

    /// The game after the first `upto` half-moves have been replayed.
    pub fn replay_to(&self, upto: usize) -> Result<Game, RecordError> {
        let mut game = self.starting_game()?;
        for (index, token) in self.half_moves().into_iter().take(upto).enumerate() {
            let played = notation::decode(token).and_then(|mv| game.play(mv));
            if let Err(source) = played {
                warn!("record replay stopped at half-move {index} ({token}): {source}");
                return Err(RecordError::Replay { index, token: token.to_string(), source });
            }
        }
        Ok(game)
    }

    /// Replays the whole record. A recorded result on an unfinished game
    /// (resignation, agreed draw) terminates it.
    pub fn replay(&self) -> Result<Game, RecordError> {
        let mut game = self.replay_to(self.len())?;
        if !game.state().is_over() {
            if let Some(result) = self.result {
                game.terminate(Some(result));
            }
        }
        Ok(game)
    }
}

/// A cursor over a recorded game, for stepping through it or solving it.
///
/// The cursor works on its own copy of the game; moving it never touches the
/// record.
#[derive(Clone, Debug)]
pub struct Replay {
    record: GameRecord,
    cursor: usize,
    game: Game,
}

impl Replay {
    /// Checks that the whole record replays before handing out a cursor at
    /// its start.
    pub fn new(record: GameRecord) -> Result<Self, RecordError> {
        record.replay_to(record.len())?;
        let game = record.replay_to(0)?;
        Ok(Replay { record, cursor: 0, game })
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    pub fn len(&self) -> usize {
        self.record.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }

    /// Number of half-moves played at the current point.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn position(&self) -> &Position {
        self.game.position()
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.len()
    }

    /// Position after the first `index` half-moves, without moving the cursor.
    pub fn position_at(&self, index: usize) -> Result<Position, RecordError> {
        Ok(self.record.replay_to(index.min(self.len()))?.position().clone())
    }

    /// Moves the cursor to `index` (clamped to the record length).
    pub fn seek(&mut self, index: usize) -> Result<&Position, RecordError> {
        let index = index.min(self.len());
        self.game = self.record.replay_to(index)?;
        self.cursor = index;
        debug!("replay cursor at half-move {index} of {}", self.len());
        Ok(self.game.position())
    }

    /// Plays the next recorded half-move. Returns false at the end.
    pub fn forward(&mut self) -> Result<bool, RecordError> {
        let Some(mv) = self.next_move()? else {
            return Ok(false);
        };
        self.game.play(mv).map_err(|source| RecordError::Replay {
            index: self.cursor,
            token: mv.to_string(),
            source,
        })?;
        self.cursor += 1;
        Ok(true)
    }

    /// Takes back one half-move by replaying up to the previous one.
    /// Returns false at the start.
    pub fn back(&mut self) -> Result<bool, RecordError> {
        if self.cursor == 0 {
            return Ok(false);
        }
        self.seek(self.cursor - 1)?;
        Ok(true)
    }

    fn next_move(&self) -> Result<Option<Move>, RulesError> {
        self.record.move_at(self.cursor).transpose()
    }

    /// The recorded move to be found at the cursor.
    pub fn solution(&self) -> Option<Move> {
        self.next_move().ok().flatten()
    }

    /// A hint for the next move: the piece letter and its origin (`Ng1`), or
    /// the castle token.
    pub fn hint(&self) -> Option<String> {
        self.solution().map(|mv| match mv {
            Move::Regular { piece, from, .. } => format!("{}{from}", piece.letter()),
            Move::Castle(side) => side.token().to_string(),
        })
    }

    /// Solve mode: checks `input` against the recorded move at the cursor and
    /// advances past it when it matches. An omitted promotion choice counts
    /// as a queen.
    pub fn attempt(&mut self, input: &str) -> Result<bool, RecordError> {
        let candidate = notation::decode(input.trim())?;
        let Some(expected) = self.solution() else {
            return Ok(false);
        };
        let found = candidate.same_path(&expected)
            && candidate.promotion().unwrap_or(PieceType::Queen)
                == expected.promotion().unwrap_or(PieceType::Queen);
        debug!("solve attempt {input} at {}: {found}", self.cursor);
        if found {
            self.forward()?;
        }
        Ok(found)
    }
}
