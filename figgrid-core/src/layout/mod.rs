//! Higher-level arrangement helpers built on [`crate::Canvas`].

/// JSON figure descriptions.
pub mod figure;
/// Uniform grids of cells.
pub mod grid;
