//! Camera descriptor crossing the export boundary

use bytemuck::{Pod, Zeroable};

/// Viewpoint of one camera, ready to cross the boundary
///
/// `look_at` is always `position + forward`; it is derived, never supplied
/// independently.
///
/// Wire layout: twelve consecutive `f32` fields (48 bytes) — three 3-float
/// vectors followed by field of view and the clip planes — matching the
/// native side's `CameraData` struct.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct CameraDescriptor {
    /// World-space camera position
    pub position: [f32; 3],
    /// Point the camera looks at: `position + forward`
    pub look_at: [f32; 3],
    /// World-space up direction of the camera transform
    pub up_direction: [f32; 3],
    /// Vertical field of view in degrees
    pub field_of_view: f32,
    /// Near clip plane distance
    pub near_plane: f32,
    /// Far clip plane distance
    pub far_plane: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_size_is_twelve_floats() {
        assert_eq!(std::mem::size_of::<CameraDescriptor>(), 48);
    }
}
