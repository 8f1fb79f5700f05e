mod convert_layers;

pub use convert_layers::ConvertLayers;
