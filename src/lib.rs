pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod movement;
pub mod moves;
pub mod notation;
pub mod piece;
pub mod position;
pub mod rules;
pub mod session;
pub mod setup;
pub mod square;
pub mod strategy;

pub use error::{RecordError, RulesError};
pub use game::{Game, GameState};
pub use moves::Move;
pub use piece::{Color, PieceType};
pub use position::Position;
pub use session::{GameRecord, GameResult, Replay};
