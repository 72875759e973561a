//! Core library for laying out rectangular print items on fixed-size sheets.
//!
//! Contains the geometry, the entities describing items, sheets and layouts,
//! the (de)serializable external representations and the SVG renderer.
//! The packing heuristics themselves live in the `rowfill` crate.

/// Entities to model print layouts: items, sheets, layouts and results
pub mod entities;

/// Geometric primitives used during packing
pub mod geometry;

/// Importing from and exporting to external representations
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
