//! Converts binary image masks into stacked, axis-aligned voxel meshes and
//! writes each layer as an ASCII STL solid.
//!
//! ```
//! use voxlayer::layer::layer_specs;
//! use voxlayer::mask::PixelMask;
//! use voxlayer::operations::conversion::ConvertLayers;
//! use voxlayer::export::export_layers;
//!
//! let masks = vec![PixelMask::from_points(4, 4, [(0, 0), (1, 0), (0, 1), (1, 1)])];
//! let specs = layer_specs::<&str>(masks.len(), &[], &[]);
//! let documents = ConvertLayers::new(&masks, &specs).execute()?;
//! let files = export_layers(&documents);
//!
//! assert_eq!(files[0].file_name, "layer_1.stl");
//! assert!(files[0].contents.starts_with("solid layer_1\n"));
//! # Ok::<(), voxlayer::VoxlayerError>(())
//! ```

pub mod error;
pub mod export;
pub mod layer;
pub mod mask;
pub mod math;
pub mod mesh;
pub mod operations;

pub use error::{Result, VoxlayerError};
