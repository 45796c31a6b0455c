#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Coordinate geometry for grid based combat games in the style of battleship.
//! The engine answers adjacency, alignment, distance, gap and search pattern
//! questions without assuming anything about the grid's index types: each axis
//! is handed in as an [`axis::Axis`] with its own `previous`, `next` and
//! ordering, so the same code serves a lettered/numbered 10x10 board or any
//! other pair of discrete, linearly ordered axes.
//!
//! you will likely be most interested in [`navigator::CoordinateNavigator`],
//! which bundles both axes and exposes every query. For the classic board:
//! ```
//! # use battleship_navigation::standard::GridConfig;
//! # use battleship_navigation::types::Coordinate;
//! let navigator = GridConfig::default().navigator().unwrap();
//! let around = navigator.get_surrounding_coordinates(&"C3".parse().unwrap());
//! assert_eq!(around.len(), 4);
//! // every diagonal of a size 2 traversal hits every two cell ship
//! assert_eq!(navigator.traverse_grid(2).len(), 4);
//! # let _: Coordinate<char, u8> = around[0];
//! ```

use standard::GridConfig;

pub mod alignment;
pub mod axis;
pub mod error;
pub mod loopable;
pub mod navigator;
pub mod standard;
pub mod traversal;
pub mod types;

/// Loads a board size from a JSON string
pub fn grid_config(config: &str) -> Result<GridConfig, serde_json::Error> {
    serde_json::from_str(config)
}
