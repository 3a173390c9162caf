//! Host-side asset model
//!
//! The bridge treats the host scene graph as an external collaborator: these
//! types carry exactly the accessor surface the descriptor builder queries
//! (readability, formats, dimensions, raw pixel bytes, vertex streams,
//! shader texture slots, camera optics) and nothing of the host engine's own
//! behavior. A real integration populates them from engine objects; tests
//! populate them directly.

pub mod camera;
pub mod material;
pub mod mesh;
pub mod texture;

pub use camera::HostCamera;
pub use material::{HostMaterial, HostShader, ShaderProperty, ShaderPropertyKind};
pub use mesh::HostMesh;
pub use texture::{
    HostFilterMode, HostPixelFormat, HostTexture, HostWrapMode, TextureDimension, TextureImage,
};
