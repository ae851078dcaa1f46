//! Simulation core for a grid-based Snake game with a relative-turn action
//! interface, suitable for driving from a keyboard or from a learning agent.
//!
//! Everything in here is free of terminal I/O; the `gridsnake` binary wraps
//! it in a ratatui frontend.
pub mod consts;
pub mod game;
