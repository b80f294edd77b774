//! Maze navigation environment.

use std::sync::Arc;

use crate::core::EnvError;
use crate::env::Environment;

use super::grid::{Cell, Direction, Grid, GridPosition, DEFAULT_END, DEFAULT_START};

/// Reward for reaching the end cell.
pub const GOAL_REWARD: f64 = 100.0;

/// Reward for every other step.
pub const STEP_REWARD: f64 = -1.0;

/// An agent walking a maze from its start cell to its end cell.
///
/// The grid is shared between environments built from the same layout.
#[derive(Clone, Debug)]
pub struct MazeEnvironment {
    grid: Arc<Grid>,
    end: GridPosition,
    position: GridPosition,
}

impl MazeEnvironment {
    /// Walk `grid` from `start` to `end`. Both must be open cells.
    pub fn new(
        grid: impl Into<Arc<Grid>>,
        start: GridPosition,
        end: GridPosition,
    ) -> Result<Self, EnvError> {
        let grid = grid.into();
        for (name, pos) in [("start", start), ("end", end)] {
            if !grid.is_open(pos) {
                return Err(EnvError::InvalidGrid(format!(
                    "{name} {pos} is off the grid or a wall"
                )));
            }
        }
        Ok(Self {
            grid,
            end,
            position: start,
        })
    }

    /// Walk `grid` between its first `Start` and first `End` cells.
    pub fn from_grid(grid: impl Into<Arc<Grid>>) -> Result<Self, EnvError> {
        let grid = grid.into();
        let start = grid
            .find_first(Cell::Start)
            .ok_or_else(|| EnvError::InvalidGrid("no start cell".into()))?;
        let end = grid
            .find_first(Cell::End)
            .ok_or_else(|| EnvError::InvalidGrid("no end cell".into()))?;
        Self::new(grid, start, end)
    }

    /// The default 8×8 maze from its top-left corner.
    pub fn default_maze() -> Self {
        Self {
            grid: Arc::new(Grid::default_maze()),
            end: DEFAULT_END,
            position: DEFAULT_START,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn position(&self) -> GridPosition {
        self.position
    }

    #[must_use]
    pub fn end(&self) -> GridPosition {
        self.end
    }

    /// Whether stepping `dir` stays on the grid and off walls.
    #[must_use]
    pub fn is_valid_move(&self, dir: Direction) -> bool {
        self.grid.is_open(self.position.step(dir))
    }

    /// A factory restarting this maze from its current position.
    pub fn factory(&self) -> impl Fn() -> MazeEnvironment + Send + Sync {
        let template = self.clone();
        move || template.clone()
    }
}

impl Environment for MazeEnvironment {
    type State = GridPosition;
    type Action = Direction;

    fn state(&self) -> GridPosition {
        self.position
    }

    fn legal_actions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.is_valid_move(d))
            .collect()
    }

    fn execute(&mut self, action: &Direction) -> Result<f64, EnvError> {
        if !self.is_valid_move(*action) {
            return Err(EnvError::InvalidAction {
                action: action.to_string(),
                state: self.position.to_string(),
            });
        }
        self.position = self.position.step(*action);
        Ok(if self.is_win_state() {
            GOAL_REWARD
        } else {
            STEP_REWARD
        })
    }

    fn is_win_state(&self) -> bool {
        self.position == self.end
    }
}
