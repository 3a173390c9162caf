//! Boundary data contracts
//!
//! Every type the native exporter reads lives here. Descriptors are built
//! fresh per export, never mutated after construction, and discarded once
//! handed across; the `#[repr(C)]` records they project are a versioned wire
//! format — field order and per-field size are part of the contract with the
//! native side's headers, and reordering a field breaks the boundary
//! silently. Layout-pinning tests in each module assert the record sizes.

pub mod arrays;
pub mod camera;
pub mod mesh;
pub mod pipeline;
pub mod texture;
pub mod transform;

pub use arrays::{
    BoundaryArray, ByteArray, ColorArray, FloatArray, IntArray, NativeArray, SpentArray,
    TypedArray, Vec2Array, Vec3Array, Vec4Array,
};
pub use camera::CameraDescriptor;
pub use mesh::{MeshDescriptor, MeshRecord};
pub use pipeline::PipelineDescriptor;
pub use texture::{TextureDescriptor, TextureRecord};
pub use transform::{TransformDescriptor, TransformRecord};
