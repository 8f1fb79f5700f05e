use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{LayerError, Result, SamplingError, VoxlayerError};
use crate::layer::LayerSpec;
use crate::mask::PixelMask;
use crate::mesh::{ConversionParams, SolidDocument};
use crate::operations::extrusion::{ExtrudeVoxels, ExtrusionFrame};
use crate::operations::placement::{LayerPlacement, ResolvePlacements};
use crate::operations::sampling::SampleVoxels;

/// Converts one mask per layer into one solid document per layer.
///
/// Placements are resolved for every layer before meshing starts. Layers are
/// then meshed in parallel and returned in layer order. The batch fails as a
/// whole: if any layer has no foreground pixels, no documents are returned and
/// the error names the lowest failing layer.
pub struct ConvertLayers<'a> {
    masks: &'a [PixelMask],
    specs: &'a [LayerSpec],
    params: ConversionParams,
}

impl<'a> ConvertLayers<'a> {
    /// Creates a new `ConvertLayers` operation with default parameters.
    #[must_use]
    pub fn new(masks: &'a [PixelMask], specs: &'a [LayerSpec]) -> Self {
        Self {
            masks,
            specs,
            params: ConversionParams::default(),
        }
    }

    /// Sets custom conversion parameters.
    #[must_use]
    pub fn with_params(mut self, params: ConversionParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the conversion.
    ///
    /// # Errors
    ///
    /// Returns a [`ParamsError`](crate::error::ParamsError) for invalid
    /// parameters, [`LayerError::NoLayers`] or [`LayerError::CountMismatch`]
    /// for a malformed batch, and [`LayerError::NoForegroundPixels`] for the
    /// first layer whose mask is empty.
    pub fn execute(&self) -> Result<Vec<SolidDocument>> {
        self.params.validate()?;

        if self.masks.is_empty() {
            return Err(LayerError::NoLayers.into());
        }
        if self.masks.len() != self.specs.len() {
            return Err(LayerError::CountMismatch {
                masks: self.masks.len(),
                specs: self.specs.len(),
            }
            .into());
        }

        let placements = ResolvePlacements::new(self.specs).execute();

        let results: Vec<Result<SolidDocument>> = self
            .masks
            .par_iter()
            .zip(&placements)
            .map(|(mask, placement)| self.convert_layer(mask, placement))
            .collect();

        let documents = results
            .into_iter()
            .collect::<Result<Vec<_>>>()
            .inspect_err(|err| warn!(%err, "layer conversion aborted"))?;

        info!(
            layers = documents.len(),
            triangles = documents.iter().map(SolidDocument::len).sum::<usize>(),
            "converted layers"
        );
        Ok(documents)
    }

    fn convert_layer(&self, mask: &PixelMask, placement: &LayerPlacement) -> Result<SolidDocument> {
        let layer_index = placement.index;
        let voxels = SampleVoxels::new(mask, self.params.step)
            .execute()
            .map_err(|err| match err {
                VoxlayerError::Sampling(SamplingError::NoForegroundPixels) => {
                    LayerError::NoForegroundPixels { layer_index }.into()
                }
                other => other,
            })?;

        let frame = ExtrusionFrame::new(&self.params, mask.height(), placement);
        let triangles = ExtrudeVoxels::new(&voxels, frame).execute();

        debug!(
            layer = layer_index,
            pixels = mask.foreground_count(),
            voxels = voxels.len(),
            triangles = triangles.len(),
            z_bottom = placement.z_bottom,
            z_top = placement.z_top(),
            "meshed layer"
        );
        Ok(SolidDocument::for_layer(layer_index, triangles))
    }
}
