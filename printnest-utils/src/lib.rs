//! Utility functions for printnest
//!
//! This crate provides utility functions for preparing printnest requests,
//! including the detection of the physical dimensions of design files.

pub mod dimensions;

pub use dimensions::{Category, DimensionReport, ResolutionMethod, resolve_bytes, resolve_file};
