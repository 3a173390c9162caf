//! Host camera assets as the bridge sees them

use crate::foundation::math::{Quat, Vec3};

/// A camera queried from the host scene graph
///
/// Orientation is the camera transform's rotation; the conventions are the
/// host engine's right-handed Y-up frame, with the camera looking down
/// local -Z.
#[derive(Debug, Clone, PartialEq)]
pub struct HostCamera {
    /// World-space position of the camera transform
    pub position: Vec3,
    /// World-space rotation of the camera transform
    pub rotation: Quat,
    /// Vertical field of view in degrees
    pub field_of_view: f32,
    /// Near clip plane distance
    pub near_plane: f32,
    /// Far clip plane distance
    pub far_plane: f32,
}

impl HostCamera {
    /// World-space forward direction of the camera transform
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::new(0.0, 0.0, -1.0)
    }

    /// World-space up direction of the camera transform
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::new(0.0, 1.0, 0.0)
    }
}
