//! Zone Rush game library
//!
//! A single-screen arcade game: steer the player around the arena, collect
//! zones for score, and dodge the bullets that fly faster the more you score.

pub mod audio;
pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod menu;
pub mod physics;
pub mod rendering;
pub mod round;
