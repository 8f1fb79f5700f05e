use std::fmt;
use std::io::Write;

use crate::error::{ExportError, Result};
use crate::math::Vector3;
use crate::mesh::{SolidDocument, Triangle};

/// `Display` adapter writing a document as an ASCII STL `solid` block.
///
/// Output is deterministic: triangles are written in document order and
/// numbers use the shortest decimal form that parses back to the same `f64`.
pub struct AsciiSolid<'a> {
    document: &'a SolidDocument,
}

impl SolidDocument {
    /// Returns a `Display` adapter for the ASCII STL text of this document.
    #[must_use]
    pub fn ascii(&self) -> AsciiSolid<'_> {
        AsciiSolid { document: self }
    }

    /// Streams the ASCII STL text of this document into `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Write`] if the writer fails.
    pub fn write_ascii<W: Write>(&self, writer: &mut W) -> Result<()> {
        write!(writer, "{}", self.ascii())
            .and_then(|()| writer.flush())
            .map_err(|source| {
                ExportError::Write {
                    name: self.name().to_owned(),
                    source,
                }
                .into()
            })
    }
}

impl fmt::Display for AsciiSolid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.document.name();
        writeln!(f, "solid {name}")?;
        for triangle in self.document.triangles() {
            write_facet(f, triangle)?;
        }
        writeln!(f, "endsolid {name}")
    }
}

fn write_facet(f: &mut fmt::Formatter<'_>, triangle: &Triangle) -> fmt::Result {
    writeln!(f, "  facet normal {}", Triple(&triangle.normal()))?;
    writeln!(f, "    outer loop")?;
    for vertex in triangle.vertices() {
        writeln!(f, "      vertex {}", Triple(&vertex.coords))?;
    }
    writeln!(f, "    endloop")?;
    writeln!(f, "  endfacet")
}

/// Space-separated `x y z`.
struct Triple<'a>(&'a Vector3);

impl fmt::Display for Triple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding 0.0 turns -0.0 into 0.0.
        write!(f, "{} {} {}", self.0.x + 0.0, self.0.y + 0.0, self.0.z + 0.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    fn unit_triangle() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn facet_block_structure() {
        let doc = SolidDocument::new("layer_1", vec![unit_triangle()]);
        let expected = "\
solid layer_1
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid layer_1
";
        assert_eq!(doc.ascii().to_string(), expected);
    }

    #[test]
    fn negative_zero_is_written_as_zero() {
        let tri = Triangle::new(
            Point3::new(-0.0, 0.0, -0.0),
            Point3::new(0.0, -1.0, 0.0),
            Point3::new(0.0, 0.0, -1.0),
        );
        let text = SolidDocument::new("s", vec![tri]).ascii().to_string();
        assert!(!text.contains("-0 "), "{text}");
        assert!(text.contains("vertex 0 0 0\n"), "{text}");
    }

    #[test]
    fn decimals_round_trip() {
        let tri = Triangle::new(
            Point3::new(0.1, 102.4, 0.30000000000000004),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        let text = SolidDocument::new("s", vec![tri]).ascii().to_string();
        let line = text.lines().find(|l| l.contains("vertex 0.1")).unwrap();
        let coords: Vec<f64> = line
            .split_whitespace()
            .skip(1)
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(coords, vec![0.1, 102.4, 0.30000000000000004]);
    }

    #[test]
    fn degenerate_facet_has_zero_normal() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let doc = SolidDocument::new("s", vec![Triangle::new(p, p, p)]);
        assert!(doc.ascii().to_string().contains("facet normal 0 0 0\n"));
    }

    #[test]
    fn output_is_reproducible() {
        let doc = SolidDocument::new("layer_3", vec![unit_triangle(); 4]);
        assert_eq!(doc.ascii().to_string(), doc.ascii().to_string());
    }

    #[test]
    fn write_ascii_matches_display() {
        let doc = SolidDocument::new("layer_2", vec![unit_triangle()]);
        let mut buf = Vec::new();
        doc.write_ascii(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), doc.ascii().to_string());
    }

    #[test]
    fn write_failure_names_the_solid() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let doc = SolidDocument::new("layer_9", vec![unit_triangle()]);
        let err = doc.write_ascii(&mut Broken).unwrap_err();
        assert_eq!(err.to_string(), "failed to write solid layer_9");
    }
}
