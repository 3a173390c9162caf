//! Mesh descriptor crossing the export boundary

use crate::descriptor::arrays::{BoundaryArray, ColorArray, IntArray, Vec2Array, Vec3Array};
use crate::foundation::math::{Color, Vec2, Vec3};

/// Geometry of one mesh asset, ready to cross the boundary
///
/// Invariants (established by the descriptor builder): the index count is a
/// multiple of 3, and every per-vertex attribute array is either empty
/// (attribute absent) or exactly as long as `vertices`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshDescriptor {
    /// Host-assigned identifier of the source mesh asset
    pub id: i32,
    /// Vertex positions
    pub vertices: Vec3Array,
    /// Triangle indices, three per face
    pub triangle_indices: IntArray,
    /// Per-vertex normals, or empty
    pub normals: Vec3Array,
    /// Per-vertex tangents, or empty
    pub tangents: Vec3Array,
    /// Per-vertex colors, or empty
    pub colors: ColorArray,
    /// Primary texture coordinates, or empty
    pub uv0: Vec2Array,
    /// Secondary texture coordinates, or empty
    pub uv1: Vec2Array,
}

impl MeshDescriptor {
    /// Wire-layout view of this descriptor, borrowed from its arrays
    pub fn record(&self) -> MeshRecord<'_> {
        MeshRecord {
            id: self.id,
            vertices: self.vertices.as_boundary(),
            triangle_indices: self.triangle_indices.as_boundary(),
            normals: self.normals.as_boundary(),
            tangents: self.tangents.as_boundary(),
            colors: self.colors.as_boundary(),
            uv0: self.uv0.as_boundary(),
            uv1: self.uv1.as_boundary(),
        }
    }
}

/// Wire layout of a mesh descriptor
///
/// Field order matches the native side's `MeshData` struct and must not
/// change.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MeshRecord<'a> {
    /// Host-assigned identifier of the source mesh asset
    pub id: i32,
    /// Vertex positions
    pub vertices: BoundaryArray<'a, Vec3>,
    /// Triangle indices, three per face
    pub triangle_indices: BoundaryArray<'a, i32>,
    /// Per-vertex normals
    pub normals: BoundaryArray<'a, Vec3>,
    /// Per-vertex tangents
    pub tangents: BoundaryArray<'a, Vec3>,
    /// Per-vertex colors
    pub colors: BoundaryArray<'a, Color>,
    /// Primary texture coordinates
    pub uv0: BoundaryArray<'a, Vec2>,
    /// Secondary texture coordinates
    pub uv1: BoundaryArray<'a, Vec2>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marshal;

    #[test]
    fn test_record_borrows_descriptor_arrays() {
        let mesh = MeshDescriptor {
            id: 42,
            vertices: marshal::to_boundary_layout(vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ]),
            triangle_indices: marshal::to_boundary_layout(vec![0, 1, 2]),
            ..MeshDescriptor::default()
        };
        let record = mesh.record();
        assert_eq!(record.id, 42);
        assert_eq!(record.vertices.len(), 3);
        assert_eq!(record.vertices.data(), mesh.vertices.as_slice().as_ptr());
        assert_eq!(record.triangle_indices.len(), 3);
        assert_eq!(record.normals.len(), 0);
    }
}
