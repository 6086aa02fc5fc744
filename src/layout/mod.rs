//! Polar layout engine
//!
//! This module turns a rooted [`crate::tree::Tree`] into renderable
//! primitives: angle and depth maps first, then connector, wedge, label,
//! and marker geometry, accumulated by a deterministic depth-first walk.

pub mod angles;
pub mod config;
pub mod depths;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod types;

pub use angles::{assign_angles, AngleMap};
pub use config::PolarConfig;
pub use depths::{assign_depths, DepthMap};
pub use engine::compute;
pub use error::LayoutError;
pub use types::*;
