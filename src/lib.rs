// Controllable player character for a 2D side-scrolling platformer
//
// - `core`: small math helpers
// - `engine`: assets, input and frame timing
// - `game`: the player controller

pub mod core;
pub mod engine;
pub mod game;
