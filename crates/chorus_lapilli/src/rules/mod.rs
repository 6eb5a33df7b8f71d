//! Game rules for chorus lapilli.
//!
//! Pure functions over boards and positions. Rules are kept apart from the
//! match state so contracts and invariants can compose them.

pub mod adjacency;
pub mod center;
pub mod moves;
pub mod win;

pub use adjacency::is_adjacent;
pub use center::violates_center_rule;
pub use moves::{legal_movements, legal_placements};
pub use win::compute_winner;
