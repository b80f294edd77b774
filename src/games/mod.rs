//! Concrete environments.
//!
//! - `chess`: reduced chess, the agent plays White against a scripted Black
//! - `maze`: walk a grid from start to end

pub mod chess;
pub mod maze;
