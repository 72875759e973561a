/// Single-sheet, row-based packing
pub mod row_packer;

/// Distributes all items over as many sheets as needed
pub mod scheduler;
