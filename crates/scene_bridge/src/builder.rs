//! Descriptor assembly from host asset state
//!
//! Each builder reads one kind of host asset through its accessor surface
//! and produces the corresponding boundary descriptor, invoking the format
//! mapper for enumerations and the array marshaler for variable-length data.
//! Builders assume the support validator already gated the asset; the one
//! place that assumption is load-bearing (texture dimensionality) fails
//! loudly instead of producing a garbage descriptor.

use std::collections::HashMap;

use crate::descriptor::{
    CameraDescriptor, MeshDescriptor, PipelineDescriptor, TextureDescriptor, TransformDescriptor,
};
use crate::format::{self, FilterMode};
use crate::foundation::math::Mat4;
use crate::host::camera::HostCamera;
use crate::host::material::{HostMaterial, ShaderPropertyKind};
use crate::host::mesh::HostMesh;
use crate::host::texture::{HostTexture, TextureImage};
use crate::marshal;
use crate::support::SupportError;

/// Build the boundary descriptor for a host texture
///
/// Dispatches on the image's dimensionality. A 2D source contributes its raw
/// pixel bytes as stored and a depth of 1; a 3D source contributes its depth
/// and its voxel samples packed into a flat buffer at 4 bytes per sample in
/// RGBA order, since the host exposes no contiguous raw buffer for volumes.
///
/// Known limitation: the sampler's mip state is not derived from the source.
/// `filter_mode` is always `Point` and `mipmap_count`/`mipmap_bias` are
/// always zero.
///
/// Errors only on an image kind the boundary cannot represent, which the
/// support validator normally rejects first.
pub fn build_texture_descriptor(texture: &HostTexture) -> Result<TextureDescriptor, SupportError> {
    let format = format::map_pixel_format(texture.format);
    let (depth, pixel_bytes) = match &texture.image {
        TextureImage::Two { pixels } => {
            // 2D buffers are stored in the source format; only uncompressed
            // formats have a checkable per-pixel size.
            if let Some(bytes_per_pixel) = format.bytes_per_pixel() {
                debug_assert_eq!(
                    pixels.len() as i64,
                    i64::from(bytes_per_pixel) * i64::from(texture.width)
                        * i64::from(texture.height),
                    "pixel buffer of '{}' disagrees with its extent",
                    texture.name
                );
            }
            (1, pixels.clone())
        }
        TextureImage::Three { depth, voxels } => {
            let bytes = bytemuck::cast_slice::<_, u8>(voxels).to_vec();
            // Volume buffers are repacked voxel samples: always 4 bytes per
            // sample, whatever the source format.
            debug_assert_eq!(
                bytes.len() as i64,
                4 * i64::from(texture.width) * i64::from(texture.height) * i64::from(*depth),
                "voxel buffer of '{}' disagrees with its extent",
                texture.name
            );
            (*depth, bytes)
        }
        TextureImage::Cube { .. } => {
            return Err(SupportError::UnsupportedDimension {
                name: texture.name.clone(),
                dimension: texture.dimension(),
            })
        }
    };

    log::debug!(
        "built texture descriptor for '{}' ({}x{}x{}, {} bytes)",
        texture.name,
        texture.width,
        texture.height,
        depth,
        pixel_bytes.len()
    );

    Ok(TextureDescriptor {
        id: texture.id,
        channel: 0,
        pixel_data: marshal::to_boundary_layout(pixel_bytes),
        format,
        width: texture.width,
        height: texture.height,
        depth,
        aniso_level: texture.aniso_level,
        wrap_mode: format::map_wrap_mode(texture.wrap_mode),
        filter_mode: FilterMode::Point,
        mipmap_count: 0,
        mipmap_bias: 0.0,
    })
}

/// Build the boundary descriptor for a host mesh
///
/// Pure reshaping: every vertex stream goes through the array marshaler
/// unchanged, and absent attributes become empty arrays. Debug builds check
/// the mesh invariants (whole triangles, per-vertex array lengths).
pub fn build_mesh_descriptor(mesh: &HostMesh) -> MeshDescriptor {
    debug_assert_eq!(
        mesh.triangles.len() % 3,
        0,
        "mesh '{}' has a partial triangle",
        mesh.name
    );
    let vertex_count = mesh.vertices.len();
    debug_assert!(
        [
            mesh.normals.len(),
            mesh.tangents.len(),
            mesh.colors.len(),
            mesh.uv0.len(),
            mesh.uv1.len(),
        ]
        .iter()
        .all(|&len| len == 0 || len == vertex_count),
        "mesh '{}' has a per-vertex attribute that disagrees with its vertex count",
        mesh.name
    );

    log::debug!(
        "built mesh descriptor for '{}' ({} vertices, {} indices)",
        mesh.name,
        vertex_count,
        mesh.triangles.len()
    );

    MeshDescriptor {
        id: mesh.id,
        vertices: marshal::to_boundary_layout(mesh.vertices.clone()),
        triangle_indices: marshal::to_boundary_layout(mesh.triangles.clone()),
        normals: marshal::to_boundary_layout(mesh.normals.clone()),
        tangents: marshal::to_boundary_layout(mesh.tangents.clone()),
        colors: marshal::to_boundary_layout(mesh.colors.clone()),
        uv0: marshal::to_boundary_layout(mesh.uv0.clone()),
        uv1: marshal::to_boundary_layout(mesh.uv1.clone()),
    }
}

/// Derive the pipeline capability fingerprint for a mesh descriptor
///
/// Presence flags come from nonzero array lengths. `uv_channel_count` only
/// ever reports 0 or 1: `uv1` is carried by the mesh contract but not
/// counted here, an inherited quirk kept for wire compatibility. Sampler and
/// uniform counts stay zero pending material introspection.
pub fn build_pipeline_descriptor(mesh: &MeshDescriptor) -> PipelineDescriptor {
    PipelineDescriptor {
        id: mesh.id,
        has_normals: i32::from(!mesh.normals.is_empty()),
        has_tangents: i32::from(!mesh.tangents.is_empty()),
        has_colors: i32::from(!mesh.colors.is_empty()),
        uv_channel_count: i32::from(!mesh.uv0.is_empty()),
        ..PipelineDescriptor::default()
    }
}

/// Build the boundary descriptor for a host camera
///
/// The look-at point is derived, not supplied: `position + forward`.
pub fn build_camera_descriptor(camera: &HostCamera) -> CameraDescriptor {
    let look_at = camera.position + camera.forward();
    CameraDescriptor {
        position: camera.position.into(),
        look_at: look_at.into(),
        up_direction: camera.up().into(),
        field_of_view: camera.field_of_view,
        near_plane: camera.near_plane,
        far_plane: camera.far_plane,
    }
}

/// Flatten a 4x4 transform matrix into its boundary descriptor
///
/// Column-major order, sixteen floats; the convention is pinned on
/// [`TransformDescriptor`].
pub fn build_transform_descriptor(matrix: &Mat4) -> TransformDescriptor {
    TransformDescriptor {
        matrix: marshal::to_boundary_layout(matrix.as_slice().to_vec()),
    }
}

/// Collect the texture bindings of a material, keyed by shader slot name
///
/// Enumerates the shader's texture-kind properties and resolves each to the
/// texture currently bound on the material; a declared slot with nothing
/// bound maps to `None`. Slot names are unique within a shader; declaration
/// order is not preserved.
pub fn collect_texture_bindings<'a>(
    material: &'a HostMaterial,
) -> HashMap<String, Option<&'a HostTexture>> {
    material
        .shader
        .properties
        .iter()
        .filter(|property| property.kind == ShaderPropertyKind::Texture)
        .map(|property| {
            (
                property.name.clone(),
                material.texture(&property.name),
            )
        })
        .collect()
}
