use super::Triangle;

/// One exported layer: a named, ordered list of triangles.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidDocument {
    name: String,
    triangles: Vec<Triangle>,
}

impl SolidDocument {
    /// Creates a document from a solid name and its triangles.
    #[must_use]
    pub fn new(name: impl Into<String>, triangles: Vec<Triangle>) -> Self {
        Self {
            name: name.into(),
            triangles,
        }
    }

    /// Creates the document for a zero-based layer index, named `layer_{index + 1}`.
    #[must_use]
    pub fn for_layer(layer_index: usize, triangles: Vec<Triangle>) -> Self {
        Self::new(format!("layer_{}", layer_index + 1), triangles)
    }

    /// The solid name written in the header and footer.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Triangles in emission order.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// File name used when the document is archived.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.stl", self.name)
    }

    /// Number of triangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if there are no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}
