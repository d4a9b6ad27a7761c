// =============================================================================
// Turn controller
//
// A Game owns the one mutable Position of a session. Each turn it keeps the
// Verdict (check flag + legal moves) of the side to move, so mate, stalemate
// and input validation all read the same move list. A rejected move never
// touches the position.
// =============================================================================

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{GameConfig, StartKind};
use crate::error::RulesError;
use crate::moves::Move;
use crate::notation::{self, MoveLog};
use crate::piece::{Color, PieceType};
use crate::position::{Placement, Position};
use crate::rules::{self, FiftyMoveCounter, Verdict, FIFTY_MOVE_LIMIT};
use crate::session::{GameRecord, GameResult};
use crate::setup;
use crate::strategy::Strategy;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    AwaitingMove(Color),
    /// The side to move is in check and must resolve it.
    Check(Color),
    /// The given side is mated.
    Checkmate(Color),
    Stalemate,
    FiftyMoveDraw,
    /// Ended from outside, e.g. resignation or abandoning the game.
    Terminated,
}

impl GameState {
    pub fn is_over(self) -> bool {
        !matches!(self, GameState::AwaitingMove(_) | GameState::Check(_))
    }

    pub fn to_move(self) -> Option<Color> {
        match self {
            GameState::AwaitingMove(c) | GameState::Check(c) => Some(c),
            _ => None,
        }
    }

    /// The result this state implies on its own. `Terminated` carries none.
    pub fn result(self) -> Option<GameResult> {
        match self {
            GameState::Checkmate(Color::White) => Some(GameResult::BlackWins),
            GameState::Checkmate(Color::Black) => Some(GameResult::WhiteWins),
            GameState::Stalemate | GameState::FiftyMoveDraw => Some(GameResult::Draw),
            _ => None,
        }
    }

    fn classify(verdict: &Verdict, fifty: &FiftyMoveCounter) -> Self {
        if verdict.is_checkmate() {
            GameState::Checkmate(verdict.color)
        } else if verdict.is_stalemate() {
            GameState::Stalemate
        } else if fifty.is_draw() {
            GameState::FiftyMoveDraw
        } else if verdict.in_check {
            GameState::Check(verdict.color)
        } else {
            GameState::AwaitingMove(verdict.color)
        }
    }
}

/// Session metadata kept alongside the moves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub white_player: String,
    pub black_player: String,
    pub event: String,
}

/// Everything a renderer needs to redraw the board and its status line.
#[derive(Clone, Debug, Serialize)]
pub struct BoardView {
    pub pieces: Vec<Placement>,
    pub to_move: Color,
    pub state: GameState,
    pub legal_moves: Vec<String>,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub is_draw: bool,
    pub result: Option<GameResult>,
    pub last_move: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Game {
    start: Position,
    first_to_move: Color,
    position: Position,
    to_move: Color,
    verdict: Verdict,
    fifty: FiftyMoveCounter,
    state: GameState,
    log: MoveLog,
    result: Option<GameResult>,
    pub info: GameInfo,
}

impl Game {
    /// Starts a game from a hand-built position, validating it first.
    pub fn new(position: Position, to_move: Color) -> Result<Self, RulesError> {
        setup::validate(&position, to_move)?;
        Ok(Self::start(position, to_move, FIFTY_MOVE_LIMIT))
    }

    /// Classic starting position, white to move.
    pub fn standard() -> Self {
        Self::start(Position::standard(), Color::White, FIFTY_MOVE_LIMIT)
    }

    /// A Fischer start with a freshly drawn back row.
    pub fn fischer<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let back_row = setup::fischer_back_row(rng);
        Self::start(Position::from_back_row(back_row), Color::White, FIFTY_MOVE_LIMIT)
    }

    pub fn from_config<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let mut game = match config.start {
            StartKind::Classic => Self::standard(),
            StartKind::Fischer => Self::fischer(rng),
        };
        game = game.with_fifty_move_limit(config.fifty_move_limit);
        game.info = GameInfo {
            white_player: config.white_player.clone(),
            black_player: config.black_player.clone(),
            event: config.event.clone(),
        };
        game
    }

    fn start(position: Position, to_move: Color, fifty_limit: u32) -> Self {
        let verdict = Verdict::evaluate(&position, to_move);
        let fifty = FiftyMoveCounter::with_limit(position.len(), fifty_limit);
        let state = GameState::classify(&verdict, &fifty);
        info!("new game: {} pieces, {to_move} to move, {state:?}", position.len());
        Game {
            start: position.clone(),
            first_to_move: to_move,
            position,
            to_move,
            verdict,
            fifty,
            state,
            log: MoveLog::new(to_move),
            result: state.result(),
            info: GameInfo::default(),
        }
    }

    /// Replaces the fifty-move limit; only meaningful before the first move.
    pub fn with_fifty_move_limit(mut self, limit: u32) -> Self {
        self.fifty = FiftyMoveCounter::with_limit(self.position.len(), limit);
        self.state = GameState::classify(&self.verdict, &self.fifty);
        self.result = self.state.result();
        self
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn start_position(&self) -> &Position {
        &self.start
    }

    pub fn first_to_move(&self) -> Color {
        self.first_to_move
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_check(&self) -> bool {
        self.verdict.in_check
    }

    /// Legal moves of the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> &[Move] {
        if self.state.is_over() {
            &[]
        } else {
            &self.verdict.legal_moves
        }
    }

    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn fifty_move_count(&self) -> u32 {
        self.fifty.count()
    }

    pub fn fifty_move_limit(&self) -> u32 {
        self.fifty.limit()
    }

    /// Parses move input such as `Ng1-f3` or `0-0` and plays it.
    pub fn play_input(&mut self, input: &str) -> Result<GameState, RulesError> {
        let mv: Move = input.trim().parse()?;
        self.play(mv)
    }

    /// Lets `strategy` pick from the legal moves and plays its choice.
    pub fn play_strategy<S: Strategy + ?Sized>(&mut self, strategy: &mut S) -> Result<GameState, RulesError> {
        if self.state.is_over() {
            return Err(RulesError::illegal("-", "the game is over"));
        }
        let mv = strategy
            .choose(&self.verdict.legal_moves)
            .ok_or_else(|| RulesError::illegal("-", "no move was chosen"))?;
        self.play(mv)
    }

    /// Plays `mv` for the side to move if it is legal. On error nothing
    /// changes.
    pub fn play(&mut self, mv: Move) -> Result<GameState, RulesError> {
        self.check_move(&mv)?;
        self.apply(mv);
        Ok(self.state)
    }

    fn check_move(&self, mv: &Move) -> Result<(), RulesError> {
        let color = self.to_move;
        if self.state.is_over() {
            return Err(RulesError::illegal(mv, "the game is over"));
        }
        let (piece, from, to, promotion) = match *mv {
            Move::Castle(side) => return rules::check_castling(&self.position, color, side),
            Move::Regular { piece, from, to, promotion } => (piece, from, to, promotion),
        };

        let on_origin = self
            .position
            .piece_at(from)
            .ok_or_else(|| RulesError::illegal(mv, format!("there is no piece on {from}")))?;
        if on_origin.kind != piece {
            return Err(RulesError::illegal(mv, format!("there is no {piece} on {from}")));
        }
        if on_origin.color != color {
            return Err(RulesError::illegal(mv, format!("it is {color}'s turn")));
        }
        if let Some(kind) = promotion {
            if !kind.is_promotion_choice() {
                return Err(RulesError::InvalidPromotionChoice(kind.letter()));
            }
            if piece != PieceType::Pawn || !rules::is_promotion_square(color, to) {
                return Err(RulesError::illegal(mv, "only a pawn reaching the last row promotes"));
            }
        }
        if !self.verdict.legal_moves.iter().any(|m| m.same_path(mv)) {
            let reason = if self.verdict.in_check {
                "it is check, the move must resolve it".to_string()
            } else {
                format!("{piece} cannot move from {from} to {to}")
            };
            return Err(RulesError::illegal(mv, reason));
        }
        Ok(())
    }

    fn apply(&mut self, mv: Move) {
        let color = self.to_move;
        let promoted = match mv {
            Move::Regular { piece, from, to, promotion } => {
                self.position.relocate(from, to);
                if piece == PieceType::Pawn && rules::is_promotion_square(color, to) {
                    let kind = promotion.unwrap_or(PieceType::Queen);
                    self.position.promote(to, kind);
                    Some(kind)
                } else {
                    None
                }
            }
            Move::Castle(side) => {
                self.position.castle(color, side);
                None
            }
        };

        self.fifty.record(self.position.len());
        self.to_move = color.opposite();
        self.verdict = Verdict::evaluate(&self.position, self.to_move);
        self.state = GameState::classify(&self.verdict, &self.fifty);

        let token = notation::encode(&mv, promoted, &self.verdict);
        debug!("{color} plays {token} -> {:?}", self.state);
        self.log.push(color, token);

        if let Some(result) = self.state.result() {
            info!("game over after {} half-moves: {:?}, {result}", self.log.len(), self.state);
            self.result = Some(result);
        }
    }

    /// Ends the game from outside (resignation, agreed draw, abandonment).
    pub fn terminate(&mut self, result: Option<GameResult>) {
        if self.state.is_over() {
            return;
        }
        info!("game terminated after {} half-moves", self.log.len());
        self.state = GameState::Terminated;
        self.result = result;
    }

    pub fn view(&self) -> BoardView {
        BoardView {
            pieces: self.position.placements(),
            to_move: self.to_move,
            state: self.state,
            legal_moves: self.legal_moves().iter().map(|m| m.to_input()).collect(),
            is_check: self.verdict.in_check,
            is_checkmate: matches!(self.state, GameState::Checkmate(_)),
            is_stalemate: self.state == GameState::Stalemate,
            is_draw: matches!(self.state, GameState::Stalemate | GameState::FiftyMoveDraw),
            result: self.result,
            last_move: self.log.half_moves().last().map(|t| t.to_string()),
        }
    }

    /// The session record of this game so far.
    pub fn record(&self) -> GameRecord {
        GameRecord {
            white_player: self.info.white_player.clone(),
            black_player: self.info.black_player.clone(),
            event: self.info.event.clone(),
            first_to_move: self.first_to_move,
            starting_position: self.start.placements(),
            fifty_move_limit: self.fifty.limit(),
            notation: self.log.clone(),
            result: self.result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CastlingBlock;
    use crate::moves::CastleSide;
    use crate::piece::Piece;
    use crate::square::Square;
    use crate::strategy::RandomStrategy;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn game_with(pieces: &[(PieceType, Color, &str)], to_move: Color) -> Game {
        let mut pos = Position::empty();
        for &(kind, color, name) in pieces {
            pos.place(Piece::new(kind, color, sq(name))).unwrap();
        }
        Game::new(pos, to_move).expect("valid test position")
    }

    fn has(moves: &[Move], input: &str) -> bool {
        let mv: Move = input.parse().unwrap();
        moves.iter().any(|m| m.same_path(&mv))
    }

    #[test]
    fn opening_sequence_leaves_black_knight_moves() {
        let mut game = Game::standard();
        for input in ["Pe2-e4", "Pe7-e5", "Ng1-f3"] {
            game.play_input(input).unwrap();
        }
        assert_eq!(game.state(), GameState::AwaitingMove(Color::Black));
        let moves = game.legal_moves();
        assert!(has(moves, "Nb8-c6"));
        assert!(has(moves, "Nb8-a6"));
        assert!(!has(moves, "Pe5-e4"), "e4 is occupied by the white pawn");
        assert!(!has(moves, "Pe5-e3"), "a pawn that has moved cannot step two");
        assert!(
            moves.iter().all(|m| !matches!(m, Move::Regular { from, .. } if *from == sq("e5"))),
            "the e5 pawn is blocked"
        );
    }

    #[test]
    fn kingside_castle_moves_king_and_rook() {
        let mut game = game_with(
            &[
                (PieceType::King, Color::White, "e1"),
                (PieceType::Rook, Color::White, "h1"),
                (PieceType::King, Color::Black, "e8"),
            ],
            Color::White,
        );
        game.play_input("0-0").unwrap();
        let pos = game.position();
        let king = pos.piece_at(sq("g1")).expect("king on g1");
        let rook = pos.piece_at(sq("f1")).expect("rook on f1");
        assert_eq!(king.kind, PieceType::King);
        assert_eq!(rook.kind, PieceType::Rook);
        assert!(!king.can_castle() && !rook.can_castle(), "castling clears both flags");
        assert!(pos.piece_at(sq("e1")).is_none() && pos.piece_at(sq("h1")).is_none());
        assert_eq!(game.log().white, vec!["0-0"]);
    }

    #[test]
    fn queenside_castle_moves_king_and_rook() {
        let mut game = game_with(
            &[
                (PieceType::King, Color::White, "e1"),
                (PieceType::King, Color::Black, "e8"),
                (PieceType::Rook, Color::Black, "a8"),
            ],
            Color::Black,
        );
        game.play_input("0-0-0").unwrap();
        let pos = game.position();
        let king = pos.piece_at(sq("c8")).expect("king on c8");
        let rook = pos.piece_at(sq("d8")).expect("rook on d8");
        assert_eq!((king.kind, king.color), (PieceType::King, Color::Black));
        assert_eq!((rook.kind, rook.color), (PieceType::Rook, Color::Black));
        assert!(!king.can_castle() && !rook.can_castle(), "castling clears both flags");
        assert!(pos.piece_at(sq("e8")).is_none() && pos.piece_at(sq("a8")).is_none());
        assert_eq!(game.log().black, vec!["0-0-0"]);
        assert_eq!(game.state(), GameState::AwaitingMove(Color::White));
    }

    #[test]
    fn refused_castle_reports_reason_and_keeps_position() {
        let mut game = game_with(
            &[
                (PieceType::King, Color::White, "e1"),
                (PieceType::Rook, Color::White, "h1"),
                (PieceType::Bishop, Color::Black, "a6"),
                (PieceType::King, Color::Black, "e8"),
            ],
            Color::White,
        );
        let before = game.position().clone();
        let err = game.play_input("0-0").unwrap_err();
        assert!(matches!(
            err,
            RulesError::InvalidCastling {
                side: CastleSide::Kingside,
                reason: CastlingBlock::SquareThreatened(s)
            } if s == sq("f1")
        ));
        assert_eq!(game.position(), &before);
        assert_eq!(game.to_move(), Color::White);
    }

    #[test]
    fn moving_the_king_forfeits_castling() {
        let mut game = game_with(
            &[
                (PieceType::King, Color::White, "e1"),
                (PieceType::Rook, Color::White, "h1"),
                (PieceType::King, Color::Black, "a8"),
            ],
            Color::White,
        );
        for input in ["Ke1-f1", "Ka8-b8", "Kf1-e1", "Kb8-a8"] {
            game.play_input(input).unwrap();
        }
        assert!(!game.legal_moves().contains(&Move::Castle(CastleSide::Kingside)));
        assert!(matches!(
            game.play_input("0-0"),
            Err(RulesError::InvalidCastling { reason: CastlingBlock::KingMoved, .. })
        ));
    }

    #[test]
    fn pawn_promotes_to_queen_by_default() {
        let mut game = game_with(
            &[
                (PieceType::King, Color::White, "a1"),
                (PieceType::Pawn, Color::White, "e7"),
                (PieceType::King, Color::Black, "h7"),
            ],
            Color::White,
        );
        game.play_input("Pe7-e8").unwrap();
        let promoted = game.position().piece_at(sq("e8")).expect("piece on e8");
        assert_eq!(promoted.kind, PieceType::Queen);
        assert_eq!(promoted.color, Color::White);
        assert!(game.position().pieces().iter().all(|p| p.kind != PieceType::Pawn));
        assert_eq!(game.log().white, vec!["Pe7-e8=Q"]);
    }

    #[test]
    fn black_pawn_promotes_on_the_first_row() {
        let mut game = game_with(
            &[
                (PieceType::King, Color::White, "h8"),
                (PieceType::King, Color::Black, "a8"),
                (PieceType::Pawn, Color::Black, "d2"),
            ],
            Color::Black,
        );
        game.play_input("Pd2-d1").unwrap();
        let promoted = game.position().piece_at(sq("d1")).expect("piece on d1");
        assert_eq!((promoted.kind, promoted.color), (PieceType::Queen, Color::Black));
        assert_eq!(game.log().black, vec!["Pd2-d1=Q"]);
    }

    #[test]
    fn promotion_choice_is_honoured_and_validated() {
        let pieces = [
            (PieceType::King, Color::White, "a1"),
            (PieceType::Pawn, Color::White, "e7"),
            (PieceType::King, Color::Black, "h7"),
        ];
        let mut game = game_with(&pieces, Color::White);
        let mv: Move = "Pe7-e8".parse().unwrap();

        let err = game.play(mv.with_promotion(PieceType::King)).unwrap_err();
        assert!(matches!(err, RulesError::InvalidPromotionChoice('K')));
        assert!(game.position().piece_at(sq("e7")).is_some(), "rejected promotion changes nothing");

        game.play(mv.with_promotion(PieceType::Knight)).unwrap();
        assert_eq!(game.position().piece_at(sq("e8")).map(|p| p.kind), Some(PieceType::Knight));
    }

    #[test]
    fn promotion_on_a_plain_move_is_rejected() {
        let mut game = Game::standard();
        let mv: Move = "Pe2-e4".parse().unwrap();
        assert!(matches!(
            game.play(mv.with_promotion(PieceType::Queen)),
            Err(RulesError::IllegalMove { .. })
        ));
    }

    #[test]
    fn illegal_inputs_do_not_change_state() {
        let mut game = Game::standard();
        let before = game.position().clone();

        assert!(matches!(game.play_input("Pe2e4"), Err(RulesError::MalformedInput(_))));
        for input in ["Pe3-e4", "Ne2-e4", "Pe7-e5", "Pe2-e5", "Bc1-e3"] {
            let err = game.play_input(input).unwrap_err();
            assert!(matches!(err, RulesError::IllegalMove { .. }), "{input}: {err}");
        }
        let err = game.play_input("Pe7-e5").unwrap_err();
        assert!(err.to_string().contains("white's turn"), "{err}");

        assert_eq!(game.position(), &before);
        assert_eq!(game.state(), GameState::AwaitingMove(Color::White));
        assert!(game.log().is_empty());
    }

    #[test]
    fn check_must_be_resolved() {
        let mut game = Game::standard();
        for input in ["Pe2-e4", "Pf7-f6", "Pd2-d4", "Pg7-g5", "Qd1-h5"] {
            game.play_input(input).unwrap();
        }
        assert_eq!(game.state(), GameState::Checkmate(Color::Black));
        assert_eq!(game.result(), Some(GameResult::WhiteWins));
        assert_eq!(game.log().white.last().map(String::as_str), Some("Qd1-h5#"));
        assert!(game.legal_moves().is_empty());
        assert!(matches!(game.play_input("Pa7-a6"), Err(RulesError::IllegalMove { .. })));
    }

    #[test]
    fn check_state_and_suffix() {
        let mut game = Game::standard();
        for input in ["Pe2-e4", "Pf7-f6", "Qd1-h5"] {
            game.play_input(input).unwrap();
        }
        assert_eq!(game.state(), GameState::Check(Color::Black));
        assert_eq!(game.log().white.last().map(String::as_str), Some("Qd1-h5+"));
        let err = game.play_input("Pa7-a6").unwrap_err();
        assert!(err.to_string().contains("check"), "{err}");
        game.play_input("Pg7-g6").unwrap();
        assert_eq!(game.state(), GameState::AwaitingMove(Color::White));
    }

    #[test]
    fn stalemate_ends_the_game_drawn() {
        let mut game = game_with(
            &[
                (PieceType::King, Color::White, "c2"),
                (PieceType::Queen, Color::White, "b4"),
                (PieceType::King, Color::Black, "a1"),
            ],
            Color::White,
        );
        game.play_input("Qb4-b3").unwrap();
        assert_eq!(game.state(), GameState::Stalemate);
        assert_eq!(game.result(), Some(GameResult::Draw));
        assert!(game.view().is_draw);
    }

    #[test]
    fn hundred_quiet_half_moves_draw() {
        let mut game = Game::standard();
        let cycle = ["Ng1-f3", "Ng8-f6", "Nf3-g1", "Nf6-g8"];
        for i in 0..100 {
            assert!(!game.state().is_over(), "drawn too early at half-move {i}");
            game.play_input(cycle[i % 4]).unwrap();
        }
        assert_eq!(game.fifty_move_count(), 100);
        assert_eq!(game.state(), GameState::FiftyMoveDraw);
        assert_eq!(game.result(), Some(GameResult::Draw));
    }

    #[test]
    fn zero_fifty_move_limit_draws_with_a_result() {
        let game = Game::standard().with_fifty_move_limit(0);
        assert_eq!(game.state(), GameState::FiftyMoveDraw);
        assert_eq!(game.result(), Some(GameResult::Draw));
        assert_eq!(game.record().result, Some(GameResult::Draw));
    }

    #[test]
    fn capture_resets_the_fifty_move_count() {
        let mut game = Game::standard();
        for input in ["Pe2-e4", "Pd7-d5", "Ng1-f3"] {
            game.play_input(input).unwrap();
        }
        assert_eq!(game.fifty_move_count(), 3);
        game.play_input("Pd5-e4").unwrap();
        assert_eq!(game.fifty_move_count(), 0);
        game.play_input("Nf3-g5").unwrap();
        assert_eq!(game.fifty_move_count(), 1);
    }

    #[test]
    fn random_strategy_plays_only_legal_moves() {
        let mut game = Game::standard();
        let mut cpu = RandomStrategy::seeded(2024);
        for _ in 0..300 {
            if game.state().is_over() {
                break;
            }
            let legal = game.legal_moves().to_vec();
            game.play_strategy(&mut cpu).unwrap();
            let last = game.log().half_moves().last().map(|t| t.to_string()).unwrap();
            let played = notation::decode(&last).unwrap();
            assert!(legal.iter().any(|m| m.same_path(&played)), "{last} was not legal");
            assert!(!rules::is_check(game.position(), game.to_move().opposite()));
        }
    }

    #[test]
    fn terminate_records_result_once() {
        let mut game = Game::standard();
        game.play_input("Pe2-e4").unwrap();
        game.terminate(Some(GameResult::WhiteWins));
        assert_eq!(game.state(), GameState::Terminated);
        assert_eq!(game.result(), Some(GameResult::WhiteWins));
        assert!(game.legal_moves().is_empty());
        assert!(matches!(game.play_input("Pe7-e5"), Err(RulesError::IllegalMove { .. })));
    }

    #[test]
    fn view_lists_pieces_and_flags() {
        let game = Game::standard();
        let view = game.view();
        assert_eq!(view.pieces.len(), 32);
        assert_eq!(view.legal_moves.len(), 20);
        assert!(view.legal_moves.contains(&"Ng1-f3".to_string()));
        assert!(!view.is_check && !view.is_checkmate && !view.is_stalemate && !view.is_draw);
        assert_eq!(view.last_move, None);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["to_move"], "w");
        assert_eq!(json["pieces"][0]["piece"], "R");
    }

    #[test]
    fn black_can_move_first_from_a_setup() {
        let mut game = game_with(
            &[
                (PieceType::King, Color::White, "e1"),
                (PieceType::King, Color::Black, "e8"),
                (PieceType::Pawn, Color::Black, "d7"),
            ],
            Color::Black,
        );
        game.play_input("Pd7-d5").unwrap();
        assert_eq!(game.log().black, vec!["Pd7-d5"]);
        assert_eq!(game.log().first, Color::Black);
        assert_eq!(game.to_move(), Color::White);
    }

    #[test]
    fn new_rejects_invalid_setup() {
        let mut pos = Position::empty();
        pos.place(Piece::new(PieceType::King, Color::White, sq("e1"))).unwrap();
        assert!(matches!(Game::new(pos, Color::White), Err(RulesError::InvalidSetupPosition(_))));
    }
}
