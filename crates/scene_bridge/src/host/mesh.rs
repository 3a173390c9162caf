//! Host mesh assets as the bridge sees them

use crate::foundation::math::{Color, Vec2, Vec3};

/// A mesh asset queried from the host scene graph
///
/// Vertex streams other than positions are optional: an absent attribute is
/// an empty vector, never a vector of placeholder values. A present
/// attribute has exactly one element per vertex, and the index list
/// describes whole triangles (its length is a multiple of 3). The descriptor
/// builder checks both in debug builds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostMesh {
    /// Host-assigned stable instance identifier
    pub id: i32,
    /// Asset name, used in diagnostics
    pub name: String,
    /// Vertex positions
    pub vertices: Vec<Vec3>,
    /// Triangle indices into `vertices`
    pub triangles: Vec<i32>,
    /// Per-vertex normals, or empty
    pub normals: Vec<Vec3>,
    /// Per-vertex tangents, or empty
    pub tangents: Vec<Vec3>,
    /// Per-vertex colors, or empty
    pub colors: Vec<Color>,
    /// Primary texture coordinates, or empty
    pub uv0: Vec<Vec2>,
    /// Secondary texture coordinates, or empty
    pub uv1: Vec<Vec2>,
}
