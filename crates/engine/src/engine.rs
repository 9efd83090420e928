//! Engine module - active piece, gravity, landing and scoring
//!
//! The engine owns the board and the falling piece. Every command is a plain
//! `&mut self` call that either succeeds or leaves the state untouched; the
//! host decides when commands and gravity ticks happen.

use std::vec::Drain;

use log::{info, trace};

use crate::core::snapshot::{ActiveSnapshot, BoardSnapshot, GameSnapshot, EMPTY_BOARD};
use crate::core::{Board, Piece, PieceSource, UniformSource};
use crate::event::{EngineEvent, EngineState};
use crate::types::{GameAction, PieceKind, POINTS_PER_LINE, SPAWN_X, SPAWN_Y};

/// The falling piece and its anchor (top-left of the mask) on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub piece: Piece,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Canonical piece of `kind` at the spawn anchor.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            piece: Piece::new(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }
}

/// Game session: board, active piece, score and lifecycle.
///
/// Events queue inside the engine until [`Engine::drain_events`] is called.
/// Hosts must drain once per frame (or after every command batch); an
/// undrained queue keeps growing.
#[derive(Debug, Clone)]
pub struct Engine<S = UniformSource> {
    board: Board,
    active: Option<ActivePiece>,
    score: u32,
    lines: u32,
    state: EngineState,
    source: S,
    events: Vec<EngineEvent>,
}

impl Engine<UniformSource> {
    /// Uniform random pieces from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(UniformSource::from_seed(seed))
    }

    /// Uniform random pieces seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(UniformSource::from_entropy())
    }
}

impl<S: PieceSource> Engine<S> {
    /// Start a session on an empty board and spawn the first piece.
    pub fn new(source: S) -> Self {
        Self::with_board(Board::new(), source)
    }

    /// Start a session on a prepared board.
    ///
    /// The first piece spawns immediately, so a board whose spawn area is
    /// blocked yields an engine that is already over.
    pub fn with_board(board: Board, source: S) -> Self {
        let mut engine = Self {
            board,
            active: None,
            score: 0,
            lines: 0,
            state: EngineState::Running,
            source,
            events: Vec::new(),
        };
        engine.spawn_piece();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rows cleared since the session started.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Draw the next piece and place it at the spawn anchor.
    ///
    /// A blocked spawn ends the game: the active piece is cleared and
    /// [`EngineEvent::GameOver`] is queued. Returns false once the game is over.
    pub fn spawn_piece(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        let next = ActivePiece::spawn(self.source.next_kind());
        if self.board.can_place(&next.piece, next.x, next.y) {
            trace!("spawned piece at ({}, {})", next.x, next.y);
            self.active = Some(next);
            return true;
        }

        self.active = None;
        self.state = EngineState::GameOver;
        self.events.push(EngineEvent::GameOver);
        info!("game over: spawn blocked, final score {}", self.score);
        false
    }

    /// Replace the active piece with `candidate` anchored at `(x, y)` if it fits.
    ///
    /// Moves pass the same piece with a shifted anchor; rotations pass the
    /// rotated piece with the same anchor. A rejected candidate changes nothing.
    pub fn try_move(&mut self, candidate: Piece, x: i8, y: i8) -> bool {
        if self.active.is_none() || !self.board.can_place(&candidate, x, y) {
            return false;
        }
        self.active = Some(ActivePiece {
            piece: candidate,
            x,
            y,
        });
        true
    }

    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.try_move(active.piece, active.x + dx, active.y + dy)
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1, 0)
    }

    pub fn rotate_cw(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.try_move(active.piece.rotate_cw(), active.x, active.y)
    }

    pub fn rotate_ccw(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.try_move(active.piece.rotate_ccw(), active.x, active.y)
    }

    /// Move the active piece down one row.
    ///
    /// When the row below is blocked the piece lands (lock, clear, score,
    /// spawn) and this returns false.
    pub fn soft_drop_one_row(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        if self.try_shift(0, 1) {
            return true;
        }
        self.on_piece_landed();
        false
    }

    /// Drop until the piece lands. Returns the rows descended.
    pub fn hard_drop(&mut self) -> u32 {
        let mut rows = 0;
        while self.soft_drop_one_row() {
            rows += 1;
        }
        rows
    }

    /// One gravity step from the host clock.
    pub fn on_gravity_tick(&mut self) -> bool {
        self.soft_drop_one_row()
    }

    fn on_piece_landed(&mut self) {
        let Some(landed) = self.active.take() else {
            return;
        };

        self.board.lock(&landed.piece, landed.x, landed.y);
        let cleared = self.board.clear_and_compact();
        if cleared > 0 {
            self.lines += cleared;
            self.score += POINTS_PER_LINE * cleared;
            self.events.push(EngineEvent::ScoreChanged(self.score));
            info!("cleared {} row(s), score {}", cleared, self.score);
        }

        self.spawn_piece();
    }

    /// Apply an input command. Returns whether the piece moved.
    ///
    /// `HardDrop` always lands the piece, so it reports true while running.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::RotateCcw => self.rotate_ccw(),
            GameAction::SoftDrop => self.soft_drop_one_row(),
            GameAction::HardDrop => {
                if self.active.is_none() {
                    return false;
                }
                self.hard_drop();
                true
            }
        }
    }

    /// Hand queued events to the caller, oldest first.
    pub fn drain_events(&mut self) -> Drain<'_, EngineEvent> {
        self.events.drain(..)
    }

    pub fn board_snapshot(&self) -> BoardSnapshot {
        let mut grid = EMPTY_BOARD;
        self.board.write_grid(&mut grid);
        grid
    }

    pub fn active_snapshot(&self) -> Option<ActiveSnapshot> {
        self.active
            .map(|a| ActiveSnapshot::new(&a.piece, a.x, a.y))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active_snapshot();
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = !self.is_running();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequenceSource;
    use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH};

    const GRAY: Option<Color> = Some(Color::from_rgb(0x808080));

    fn engine_with(kinds: &[PieceKind]) -> Engine<SequenceSource> {
        Engine::new(SequenceSource::new(kinds.to_vec()))
    }

    fn events(engine: &mut Engine<SequenceSource>) -> Vec<EngineEvent> {
        engine.drain_events().collect()
    }

    #[test]
    fn test_new_engine_spawns_at_center_top() {
        let engine = engine_with(&[PieceKind::T]);
        let active = engine.active().unwrap();

        assert_eq!((active.x, active.y), (3, 0));
        assert_eq!(active.piece, Piece::new(PieceKind::T));
        assert!(engine.is_running());
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_move_left_stops_at_wall() {
        let mut engine = engine_with(&[PieceKind::O]);

        for _ in 0..3 {
            assert!(engine.move_left());
        }
        assert!(!engine.move_left());
        assert_eq!(engine.active().unwrap().x, 0);
    }

    #[test]
    fn test_move_right_stops_at_wall() {
        let mut engine = engine_with(&[PieceKind::I]);

        // I spans 4 columns from x = 3, so x can reach 6.
        for _ in 0..3 {
            assert!(engine.move_right());
        }
        assert!(!engine.move_right());
        assert_eq!(engine.active().unwrap().x, 6);
    }

    #[test]
    fn test_rotate_keeps_anchor() {
        let mut engine = engine_with(&[PieceKind::T]);
        engine.soft_drop_one_row();
        let before = engine.active().unwrap();

        assert!(engine.rotate_cw());
        let after = engine.active().unwrap();
        assert_eq!((after.x, after.y), (before.x, before.y));
        assert_eq!(after.piece, before.piece.rotate_cw());

        assert!(engine.rotate_ccw());
        assert_eq!(engine.active().unwrap(), before);
    }

    #[test]
    fn test_rotation_blocked_by_stack() {
        let mut engine = engine_with(&[PieceKind::I]);
        while engine.move_right() {}
        engine.soft_drop_one_row();
        let before = engine.active().unwrap();

        // Clockwise stands the bar in mask column 3, which is x = 9 here.
        assert!(engine.rotate_cw());
        assert!(engine.rotate_ccw());
        assert_eq!(engine.active().unwrap(), before);

        engine.board_mut().set(9, 3, GRAY);
        assert!(!engine.rotate_cw());
        assert_eq!(engine.active().unwrap(), before);
    }

    #[test]
    fn test_try_move_rejects_overlap_without_change() {
        let mut engine = engine_with(&[PieceKind::O]);
        engine.board_mut().set(3, 5, GRAY);
        let before = engine.active().unwrap();

        assert!(!engine.try_move(before.piece, 3, 4));
        assert_eq!(engine.active().unwrap(), before);
        assert!(engine.try_move(before.piece, 5, 4));
        assert_eq!(engine.active().unwrap().x, 5);
    }

    #[test]
    fn test_soft_drop_until_floor_then_lock() {
        let mut engine = engine_with(&[PieceKind::I]);

        let mut steps = 0;
        while engine.soft_drop_one_row() {
            steps += 1;
        }

        // The I occupies mask row 0, so it descends from y=0 to y=19.
        assert_eq!(steps, BOARD_HEIGHT as u32 - 1);
        for x in 3..7 {
            assert!(engine.board().is_occupied(x, 19));
        }
        assert_eq!(engine.board().filled_count(), 4);
        // Fresh piece at the spawn anchor.
        let active = engine.active().unwrap();
        assert_eq!((active.x, active.y), (3, 0));
    }

    #[test]
    fn test_hard_drop_returns_rows_and_locks() {
        let mut engine = engine_with(&[PieceKind::O]);
        assert_eq!(engine.hard_drop(), BOARD_HEIGHT as u32 - 2);
        assert!(engine.board().is_occupied(3, 18));
        assert!(engine.board().is_occupied(4, 19));
        assert!(engine.is_running());
    }

    #[test]
    fn test_single_line_clear_scores_100() {
        let mut engine = engine_with(&[PieceKind::I]);
        for x in 0..BOARD_WIDTH as i8 {
            if !(3..7).contains(&x) {
                engine.board_mut().set(x, 19, GRAY);
            }
        }

        engine.hard_drop();

        assert_eq!(engine.score(), 100);
        assert_eq!(engine.lines(), 1);
        assert_eq!(engine.board().filled_count(), 0);
        assert_eq!(events(&mut engine), vec![EngineEvent::ScoreChanged(100)]);
    }

    #[test]
    fn test_double_clear_scores_200_in_one_event() {
        let mut engine = engine_with(&[PieceKind::O]);
        for y in 18..20 {
            for x in 0..BOARD_WIDTH as i8 {
                if x != 3 && x != 4 {
                    engine.board_mut().set(x, y, GRAY);
                }
            }
        }
        engine.board_mut().set(0, 17, GRAY);

        engine.hard_drop();

        assert_eq!(engine.score(), 200);
        assert_eq!(engine.lines(), 2);
        assert!(engine.board().is_occupied(0, 19));
        assert_eq!(events(&mut engine), vec![EngineEvent::ScoreChanged(200)]);
    }

    #[test]
    fn test_undrained_events_accumulate_until_drained() {
        let mut engine = engine_with(&[PieceKind::O]);
        let fill_except_spawn_columns = |engine: &mut Engine<SequenceSource>, y: i8| {
            for x in 0..BOARD_WIDTH as i8 {
                if x != 3 && x != 4 {
                    engine.board_mut().set(x, y, GRAY);
                }
            }
        };

        fill_except_spawn_columns(&mut engine, 19);
        engine.hard_drop();
        // The O's upper half now sits on row 19; complete row 18 around the next one.
        fill_except_spawn_columns(&mut engine, 18);
        engine.hard_drop();

        assert_eq!(
            events(&mut engine),
            vec![EngineEvent::ScoreChanged(100), EngineEvent::ScoreChanged(200)]
        );
        assert!(events(&mut engine).is_empty());
    }

    #[test]
    fn test_landing_without_clear_emits_nothing() {
        let mut engine = engine_with(&[PieceKind::T]);
        engine.hard_drop();
        assert_eq!(engine.score(), 0);
        assert!(events(&mut engine).is_empty());
    }

    #[test]
    fn test_blocked_spawn_is_game_over_once() {
        let mut board = Board::new();
        for x in 3..7 {
            board.set(x, 0, GRAY);
        }
        let mut engine = Engine::with_board(board, SequenceSource::repeat(PieceKind::I));

        assert_eq!(engine.state(), EngineState::GameOver);
        assert!(engine.active().is_none());
        assert!(!engine.spawn_piece());
        assert_eq!(events(&mut engine), vec![EngineEvent::GameOver]);
        assert!(events(&mut engine).is_empty());
    }

    #[test]
    fn test_commands_are_noops_after_game_over() {
        let mut board = Board::new();
        board.set(4, 0, GRAY);
        let mut engine = Engine::with_board(board.clone(), SequenceSource::repeat(PieceKind::O));

        assert!(!engine.is_running());
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::RotateCw,
            GameAction::RotateCcw,
            GameAction::SoftDrop,
            GameAction::HardDrop,
        ] {
            assert!(!engine.apply_action(action));
        }
        assert!(!engine.on_gravity_tick());
        assert_eq!(engine.hard_drop(), 0);
        assert_eq!(engine.board(), &board);
    }

    #[test]
    fn test_stack_reaching_top_ends_game() {
        let mut engine = engine_with(&[PieceKind::O]);
        let mut landings = 0;
        while engine.is_running() {
            engine.hard_drop();
            landings += 1;
            assert!(landings <= 10, "stack should top out within 10 landings");
        }

        // Each O adds two rows in columns 3-4 until the spawn area is covered.
        assert_eq!(landings, 10);
        assert!(engine.board().is_occupied(3, 0));
        assert_eq!(events(&mut engine), vec![EngineEvent::GameOver]);
    }

    #[test]
    fn test_landing_on_spawn_row_tops_out() {
        let mut board = Board::new();
        for y in 1..BOARD_HEIGHT as i8 {
            board.set(3, y, GRAY);
        }
        let mut engine =
            Engine::with_board(board, SequenceSource::new([PieceKind::I, PieceKind::T]));

        // I fits in row 0 but cannot descend; it lands in place.
        assert!(!engine.soft_drop_one_row());
        for x in 3..7 {
            assert!(engine.board().is_occupied(x, 0));
        }
        // T spawns onto the locked I.
        assert_eq!(engine.state(), EngineState::GameOver);
    }

    #[test]
    fn test_lock_above_top_drops_hidden_cells() {
        let mut board = Board::new();
        board.set(0, 1, GRAY);
        let mut engine = Engine::with_board(board, SequenceSource::repeat(PieceKind::I));

        // Vertical bar in mask column 0 with only its bottom cell on the board.
        let vertical = Piece::new(PieceKind::I).rotate_ccw();
        assert!(engine.try_move(vertical, 0, -3));
        assert!(!engine.soft_drop_one_row());

        assert!(engine.board().is_occupied(0, 0));
        assert_eq!(engine.board().filled_count(), 2);
        // Cells lost above the board do not end the game; only a blocked spawn does.
        assert!(engine.is_running());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut engine = engine_with(&[PieceKind::L]);
        engine.move_left();
        let snap = engine.snapshot();

        let active = snap.active.unwrap();
        assert_eq!((active.x, active.y), (2, 0));
        assert_eq!(active.color, PieceKind::L.color());
        assert_eq!(snap.board, EMPTY_BOARD);
        assert!(!snap.game_over);

        engine.hard_drop();
        let snap = engine.snapshot();
        assert_eq!(snap.board, engine.board_snapshot());
        assert_eq!(snap.board[19][2], Some(PieceKind::L.color()));
    }

    #[test]
    fn test_gravity_tick_is_soft_drop() {
        let mut engine = engine_with(&[PieceKind::S]);
        assert!(engine.on_gravity_tick());
        assert_eq!(engine.active().unwrap().y, 1);
    }

    #[test]
    fn test_seeded_engines_match() {
        let mut a = Engine::seeded(99);
        let mut b = Engine::seeded(99);
        for _ in 0..20 {
            assert_eq!(a.active(), b.active());
            a.hard_drop();
            b.hard_drop();
        }
        assert_eq!(a.board(), b.board());
    }
}
