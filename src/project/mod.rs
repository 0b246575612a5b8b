//! Geometric projection of regions onto 2D planes.
//!
//! This module holds the LP-backed projector and the solver seam it talks
//! through. Projection is stateless: a [`Projector`] is configured once
//! with bounds and resolution, then applied to any number of regions.

pub mod shadow;
pub mod solver;

pub use shadow::{Point2, Projector, Shadow, DEFAULT_RESOLUTION};
pub use solver::{LpSolver, MinilpSolver};
