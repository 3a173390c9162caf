//! Math types used on both sides of the export boundary
//!
//! Vector and matrix aliases follow the host engine's conventions; the two
//! color types are plain-old-data so pixel buffers can be reinterpreted as
//! bytes without per-element conversion.

use bytemuck::{Pod, Zeroable};

pub use nalgebra::{Matrix4, Quaternion, Unit, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Linear RGBA color with one `f32` per channel
///
/// 16 bytes, field order R, G, B, A. This is the per-vertex color element
/// crossing the boundary inside mesh descriptors.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Color {
    /// Red channel, 0.0..=1.0
    pub r: f32,
    /// Green channel, 0.0..=1.0
    pub g: f32,
    /// Blue channel, 0.0..=1.0
    pub b: f32,
    /// Alpha channel, 0.0..=1.0
    pub a: f32,
}

impl Color {
    /// Create a color from channel values
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Packed RGBA color with one byte per channel
///
/// 4 bytes, field order R, G, B, A. Volume textures expose their voxels as
/// `Color32` samples; the descriptor builder serializes them byte-for-byte.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Color32 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color32 {
    /// Create a packed color from channel values
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}
