//! The engine facade used by the protocol layer.
//!
//! Coordinates are zero-based `(col, row)` pairs over the playable area, row 0
//! being the top line. Translating to and from letters and numbers is the
//! caller's job.

use log::debug;

use crate::board::Color;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::patterns::init_patterns;
use crate::position::Position;
use crate::search::Searcher;

pub struct Engine {
    pos: Position,
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with an empty `size`x`size` board.
    pub fn new(size: usize, config: EngineConfig) -> Result<Self, EngineError> {
        init_patterns();
        Ok(Self {
            pos: Position::new(size)?,
            config,
        })
    }

    /// Start a new game on an empty `size`x`size` board, Black to move.
    ///
    /// On error the current game is kept.
    pub fn initialize(&mut self, size: usize) -> Result<(), EngineError> {
        self.pos = Position::new(size)?;
        Ok(())
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn size(&self) -> usize {
        self.pos.size()
    }

    pub fn side_to_move(&self) -> Color {
        self.pos.side
    }

    /// Play `color` at `(col, row)` and return the number of captured stones.
    pub fn play_move(
        &mut self,
        col: usize,
        row: usize,
        color: Color,
    ) -> Result<usize, EngineError> {
        let pt = self.pos.point(col, row)?;
        let captured = self.pos.apply_move(pt, color)?;
        Ok(captured.len())
    }

    pub fn pass_turn(&mut self) {
        self.pos.pass_turn();
    }

    pub fn toggle_side(&mut self) {
        self.pos.toggle_side();
    }

    /// Best move for `color` searched to `depth` plies, or `None` to pass.
    ///
    /// The game position is not changed.
    pub fn generate_move(&self, color: Color, depth: usize) -> Option<(usize, usize)> {
        let mut searcher = Searcher::new(&self.config);
        let result = searcher.root_search(&self.pos, depth, color);
        debug!(
            "genmove {color} depth {depth}: {:?} score {} nodes {}",
            result.best_move, result.score, result.nodes
        );
        result.best_move.map(|pt| self.pos.board().coords(pt))
    }

    pub fn render_board(&self) -> String {
        self.pos.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_rejects_bad_size() {
        let mut engine = Engine::new(9, EngineConfig::default()).unwrap();
        engine.play_move(4, 4, Color::Black).unwrap();
        assert_eq!(engine.initialize(1), Err(EngineError::InvalidSize { size: 1 }));
        // Game kept
        assert_eq!(engine.side_to_move(), Color::White);
        engine.initialize(13).unwrap();
        assert_eq!(engine.size(), 13);
        assert_eq!(engine.side_to_move(), Color::Black);
    }

    #[test]
    fn test_play_off_board() {
        let mut engine = Engine::new(9, EngineConfig::default()).unwrap();
        let before = engine.position().clone();
        assert_eq!(
            engine.play_move(9, 0, Color::Black),
            Err(EngineError::OffBoard { col: 9, row: 0 })
        );
        assert_eq!(engine.position(), &before);
    }

    #[test]
    fn test_generate_move_does_not_play() {
        let engine = Engine::new(9, EngineConfig::default()).unwrap();
        let mv = engine.generate_move(Color::Black, 1);
        assert_eq!(mv, Some((2, 2)));
        assert_eq!(engine.position().board().count_empty(), 81);
    }
}
