//! Maze navigation: the same environment contract on a grid of cells.

mod env;
mod grid;

pub use env::{MazeEnvironment, GOAL_REWARD, STEP_REWARD};
pub use grid::{Cell, Direction, Grid, GridPosition, DEFAULT_END, DEFAULT_MAZE, DEFAULT_START};
