use thiserror::Error;

/// Top-level error type for voxlayer.
#[derive(Debug, Error)]
pub enum VoxlayerError {
    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error(transparent)]
    Mask(#[from] MaskError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Layer(#[from] LayerError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors raised by invalid [`ConversionParams`](crate::mesh::ConversionParams).
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("voxel step must be at least 1")]
    ZeroStep,

    #[error("pixel scale must be finite and positive, got {0}")]
    InvalidScale(f64),
}

/// Errors related to building pixel masks.
#[derive(Debug, Error)]
pub enum MaskError {
    #[error("pixel buffer holds {actual} values, expected {expected} for a {width}x{height} mask")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Errors related to voxel sampling of a single mask.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("mask has no foreground pixels")]
    NoForegroundPixels,
}

/// Errors that abort a whole layer batch.
#[derive(Debug, Error)]
pub enum LayerError {
    /// `layer_index` is zero-based; the message uses the one-based layer number.
    #[error("no foreground pixels found in layer {}", .layer_index + 1)]
    NoForegroundPixels { layer_index: usize },

    #[error("{masks} masks supplied for {specs} layer specs")]
    CountMismatch { masks: usize, specs: usize },

    #[error("at least one layer is required")]
    NoLayers,
}

/// Errors related to writing solid documents.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write solid {name}")]
    Write {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for results using [`VoxlayerError`].
pub type Result<T> = std::result::Result<T, VoxlayerError>;
