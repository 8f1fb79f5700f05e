use crate::layer::{LayerSpec, Placement};

/// Vertical extent of one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerPlacement {
    /// Zero-based layer index.
    pub index: usize,
    /// Z of the layer's base.
    pub z_bottom: f64,
    /// Z extent, always positive.
    pub thickness: f64,
}

impl LayerPlacement {
    /// Z of the layer's top face.
    #[must_use]
    pub fn z_top(&self) -> f64 {
        self.z_bottom + self.thickness
    }
}

/// Resolves the base offset of every layer in one forward pass.
///
/// Layer 0 sits at `z = 0`. Each later layer either starts where the previous
/// layer ends ([`Placement::Stack`]) or shares its base ([`Placement::Same`]).
pub struct ResolvePlacements<'a> {
    specs: &'a [LayerSpec],
}

impl<'a> ResolvePlacements<'a> {
    /// Creates a new `ResolvePlacements` operation.
    #[must_use]
    pub fn new(specs: &'a [LayerSpec]) -> Self {
        Self { specs }
    }

    /// Executes the resolution, returning one placement per spec in order.
    #[must_use]
    pub fn execute(&self) -> Vec<LayerPlacement> {
        let mut placements: Vec<LayerPlacement> = Vec::with_capacity(self.specs.len());

        for (i, spec) in self.specs.iter().enumerate() {
            let z_bottom = match placements.last() {
                None => 0.0,
                Some(prev) if spec.placement() == Placement::Same => prev.z_bottom,
                Some(prev) => prev.z_top(),
            };
            placements.push(LayerPlacement {
                index: i,
                z_bottom,
                thickness: spec.thickness(),
            });
        }

        placements
    }
}
