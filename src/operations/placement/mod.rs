mod resolve_placements;

pub use resolve_placements::{LayerPlacement, ResolvePlacements};
