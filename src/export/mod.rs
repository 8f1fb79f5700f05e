//! ASCII STL output for solid documents.

mod ascii;

pub use ascii::AsciiSolid;

use crate::mesh::SolidDocument;

/// A finished layer as handed to an archiver: file name plus file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedLayer {
    pub file_name: String,
    pub contents: String,
}

impl SolidDocument {
    /// Renders the document as an [`ExportedLayer`].
    #[must_use]
    pub fn export(&self) -> ExportedLayer {
        ExportedLayer {
            file_name: self.file_name(),
            contents: self.ascii().to_string(),
        }
    }
}

/// Renders documents in order.
#[must_use]
pub fn export_layers(documents: &[SolidDocument]) -> Vec<ExportedLayer> {
    documents.iter().map(SolidDocument::export).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_pairs_follow_document_order() {
        let docs = [
            SolidDocument::for_layer(0, Vec::new()),
            SolidDocument::for_layer(1, Vec::new()),
        ];
        let files = export_layers(&docs);
        assert_eq!(files[0].file_name, "layer_1.stl");
        assert_eq!(files[1].file_name, "layer_2.stl");
        assert_eq!(files[1].contents, "solid layer_2\nendsolid layer_2\n");
    }
}
