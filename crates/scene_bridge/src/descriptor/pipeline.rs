//! Pipeline capability fingerprint crossing the export boundary

use bytemuck::{Pod, Zeroable};

/// Capability fingerprint for one mesh/material combination
///
/// Not a GPU pipeline object: a set of flags and counts the exporter uses to
/// pick or build one. Presence flags are `i32` 0/1 on the wire, not `bool`,
/// so every field is exactly four bytes.
///
/// Wire layout: nine consecutive `i32` fields (36 bytes), matching the
/// native side's `PipelineData` struct.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct PipelineDescriptor {
    /// Identifier of the source mesh the fingerprint was derived from
    pub id: i32,
    /// 1 when the mesh carries per-vertex normals
    pub has_normals: i32,
    /// 1 when the mesh carries per-vertex tangents
    pub has_tangents: i32,
    /// 1 when the mesh carries per-vertex colors
    pub has_colors: i32,
    /// Number of UV channels the pipeline must consume (0 or 1)
    pub uv_channel_count: i32,
    /// Image samplers bound in the vertex stage; 0 pending material
    /// introspection
    pub vertex_image_sampler_count: i32,
    /// Image samplers bound in the fragment stage; 0 pending material
    /// introspection
    pub fragment_image_sampler_count: i32,
    /// Uniform slots bound in the vertex stage; 0 pending material
    /// introspection
    pub vertex_uniform_count: i32,
    /// Uniform slots bound in the fragment stage; 0 pending material
    /// introspection
    pub fragment_uniform_count: i32,
}
