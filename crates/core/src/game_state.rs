//! Game state module - board, move counter and game-over flag
//!
//! This module applies slides to the board in the order the rules require and
//! owns the game lifecycle (start, restart). Randomness is always passed in.

use log::{debug, info};
use rand::Rng;

use crate::board::{Board, Spawn};
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, INITIAL_TILES};

/// What a single slide attempt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// At least one line differs from its pre-slide value
    pub changed: bool,
    /// The tile spawned after a changing slide (`None` if nothing changed or the board was full)
    pub spawned: Option<Spawn>,
    /// The move counter was incremented
    pub counted: bool,
    /// No legal move remains
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    move_count: u32,
    game_over: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Tile placed by the most recent slide, for presenters that highlight it.
    last_spawn: Option<Spawn>,
}

impl GameState {
    /// Create a new game: empty board plus two spawned tiles
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut state = Self::from_board(Board::new());
        state.spawn_initial_tiles(rng);
        state
    }

    /// Wrap an existing board with a zero move count.
    ///
    /// The game-over flag starts cleared; like in regular play it is only
    /// raised by a slide attempt.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            move_count: 0,
            game_over: false,
            episode_id: 0,
            last_spawn: None,
        }
    }

    fn spawn_initial_tiles<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for _ in 0..INITIAL_TILES {
            self.board.spawn_random_tile(rng);
        }
    }

    /// Start over: empty board, zero moves, not over, two fresh tiles
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::new(rng);
        self.episode_id = next_episode;
        info!("restart: episode {}", self.episode_id);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn last_spawn(&self) -> Option<Spawn> {
        self.last_spawn
    }

    pub fn has_legal_move(&self) -> bool {
        self.board.has_legal_move()
    }

    /// Apply one slide in place.
    ///
    /// Order of operations:
    /// 1. slide all four lines and note whether anything changed;
    /// 2. if it changed, spawn one tile;
    /// 3. if a legal move remains, increment the move counter, otherwise
    ///    the game is over.
    ///
    /// Step 3 does not look at step 1: a slide that changes nothing still
    /// counts as a move while the board is playable. Use
    /// [`MoveOutcome::changed`] to tell the two apart.
    pub fn apply_move<R: Rng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> MoveOutcome {
        let was_over = self.game_over;
        let changed = self.board.slide(direction);
        let spawned = if changed {
            self.board.spawn_random_tile(rng)
        } else {
            None
        };
        self.last_spawn = spawned;

        let counted = self.board.has_legal_move();
        if counted {
            self.move_count += 1;
        } else {
            self.game_over = true;
        }

        debug!(
            "slide {}: changed={} spawned={:?} moves={}",
            direction.as_str(),
            changed,
            spawned.map(|s| (s.row, s.col, s.tile.value())),
            self.move_count
        );
        if self.game_over && !was_over {
            info!(
                "game over after {} moves, max tile {}",
                self.move_count,
                self.board.max_tile().map_or(0, |t| t.value())
            );
        }

        MoveOutcome {
            changed,
            spawned,
            counted,
            game_over: self.game_over,
        }
    }

    /// Apply one slide to a copy of this state and return the copy.
    pub fn after_move<R: Rng + ?Sized>(&self, direction: Direction, rng: &mut R) -> (Self, MoveOutcome) {
        let mut next = self.clone();
        let outcome = next.apply_move(direction, rng);
        (next, outcome)
    }

    /// Apply a game action, returning whether the board changed
    pub fn apply_action<R: Rng + ?Sized>(&mut self, action: GameAction, rng: &mut R) -> bool {
        match action {
            GameAction::Slide(direction) => self.apply_move(direction, rng).changed,
            GameAction::Restart => {
                self.restart(rng);
                true
            }
        }
    }

    /// Copy the state into a reusable snapshot
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.values = self.board.to_values();
        out.move_count = self.move_count;
        out.game_over = self.game_over;
        out.max_tile = self.board.max_tile().map_or(0, |t| t.value());
        out.episode_id = self.episode_id;
        out.last_spawn = self.last_spawn.map(|s| (s.row as u8, s.col as u8));
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded_rng;
    use crate::types::Tile;

    fn stuck_board() -> Board {
        Board::from_values([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ])
        .unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let mut rng = seeded_rng(12345);
        let state = GameState::new(&mut rng);

        assert_eq!(state.board().tile_count(), 2);
        assert_eq!(state.move_count(), 0);
        assert!(!state.game_over());
        assert_eq!(state.episode_id(), 0);
        assert_eq!(state.last_spawn(), None);
    }

    #[test]
    fn test_merge_scenario_counts_move_and_spawns() {
        let mut rng = seeded_rng(1);
        let board = Board::from_values([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut state = GameState::from_board(board);

        let outcome = state.apply_move(Direction::Left, &mut rng);

        assert!(outcome.changed);
        assert!(outcome.counted);
        assert!(!outcome.game_over);
        let spawn = outcome.spawned.unwrap();
        assert_ne!((spawn.row, spawn.col), (0, 0));
        assert_eq!(state.board().get(0, 0), Some(Some(Tile::FOUR)));
        assert_eq!(state.board().tile_count(), 2);
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.last_spawn(), Some(spawn));
    }

    #[test]
    fn test_noop_slide_still_counts_while_playable() {
        let mut rng = seeded_rng(1);
        let board = Board::from_values([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut state = GameState::from_board(board);

        let outcome = state.apply_move(Direction::Left, &mut rng);

        assert!(!outcome.changed);
        assert_eq!(outcome.spawned, None);
        assert!(outcome.counted);
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.board().tile_count(), 1);
    }

    #[test]
    fn test_stuck_board_ends_game_in_every_direction() {
        for direction in Direction::ALL {
            let mut rng = seeded_rng(5);
            let mut state = GameState::from_board(stuck_board());

            let outcome = state.apply_move(direction, &mut rng);

            assert!(!outcome.changed, "{direction:?}");
            assert_eq!(outcome.spawned, None);
            assert!(!outcome.counted);
            assert!(outcome.game_over);
            assert!(state.game_over());
            assert_eq!(state.move_count(), 0);
            assert_eq!(*state.board(), stuck_board());
        }
    }

    #[test]
    fn test_spawn_into_last_empty_cell_ends_game() {
        // Right merges the 8s and leaves (0, 0) as the only hole; whatever spawns there
        // has no equal neighbour.
        let board = Board::from_values([
            [128, 8, 8, 32],
            [64, 256, 8, 16],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ])
        .unwrap();
        let mut state = GameState::from_board(board);
        let mut rng = seeded_rng(0);

        let outcome = state.apply_move(Direction::Right, &mut rng);

        assert!(outcome.changed);
        let spawn = outcome.spawned.unwrap();
        assert_eq!((spawn.row, spawn.col), (0, 0));
        assert_eq!(state.board().to_values()[0][1..], [128, 16, 32]);
        assert!(state.board().is_full());
        assert!(!outcome.counted);
        assert!(outcome.game_over);
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_after_move_leaves_original_untouched() {
        let mut rng = seeded_rng(77);
        let state = GameState::new(&mut rng);
        let before = state.clone();

        let (next, outcome) = state.after_move(Direction::Down, &mut rng);

        assert_eq!(state, before);
        assert_eq!(next.move_count(), 1);
        assert_eq!(outcome.spawned.is_some(), outcome.changed);
    }

    #[test]
    fn test_game_over_is_sticky_until_restart() {
        let mut rng = seeded_rng(9);
        let mut state = GameState::from_board(stuck_board());
        state.apply_move(Direction::Up, &mut rng);
        assert!(state.game_over());

        state.apply_move(Direction::Left, &mut rng);
        assert!(state.game_over());
        assert_eq!(state.move_count(), 0);

        assert!(state.apply_action(GameAction::Restart, &mut rng));
        assert!(!state.game_over());
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.board().tile_count(), 2);
        assert_eq!(state.episode_id(), 1);
    }

    #[test]
    fn test_apply_action_slide_reports_change() {
        let mut rng = seeded_rng(4);
        let board = Board::from_values([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut state = GameState::from_board(board);

        assert!(state.apply_action(GameAction::Slide(Direction::Left), &mut rng));
        assert_eq!(state.board().get(0, 0), Some(Some(Tile::TWO)));
    }

    #[test]
    fn test_same_seed_replays_same_game() {
        let play = |seed| {
            let mut rng = seeded_rng(seed);
            let mut state = GameState::new(&mut rng);
            for i in 0..200 {
                state.apply_move(Direction::ALL[i % 4], &mut rng);
            }
            state
        };
        assert_eq!(play(31), play(31));
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut rng = seeded_rng(8);
        let board = Board::from_values([[4, 4, 0, 0], [0; 4], [0; 4], [0, 0, 0, 64]]).unwrap();
        let mut state = GameState::from_board(board);
        let outcome = state.apply_move(Direction::Left, &mut rng);

        let snap = state.snapshot();
        assert_eq!(snap.values[0][0], 8);
        assert_eq!(snap.values[3][0], 64);
        assert_eq!(snap.move_count, 1);
        assert_eq!(snap.max_tile, 64);
        assert!(!snap.game_over);
        let spawn = outcome.spawned.unwrap();
        assert_eq!(snap.last_spawn, Some((spawn.row as u8, spawn.col as u8)));
    }
}
