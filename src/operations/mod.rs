pub mod conversion;
pub mod extrusion;
pub mod placement;
pub mod query;
pub mod sampling;
