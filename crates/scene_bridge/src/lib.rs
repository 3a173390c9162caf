//! # Scene Bridge
//!
//! Marshaling boundary between a host application's in-memory 3D scene and a
//! native scene-graph exporter.
//!
//! The bridge does three jobs, and only those three:
//!
//! - **Describe**: turn host assets (meshes, textures, materials, cameras,
//!   transforms) into fixed-layout descriptors the native exporter can read
//!   ([`descriptor`], [`builder`], [`format`]).
//! - **Gate**: reject assets whose features the boundary cannot represent,
//!   per asset and with a reason, before any descriptor is built
//!   ([`support`], [`export`]).
//! - **Own carefully**: move variable-length data across the boundary in
//!   both directions without leaks, double-frees, or use-after-free
//!   ([`marshal`], [`memory`]).
//!
//! Everything is synchronous call-and-return; no boundary call overlaps
//! another, so the risks here are lifecycle, not races.
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_bridge::export::{self, ExportSink};
//! use scene_bridge::host::{HostTexture, TextureImage};
//! use scene_bridge::host::texture::{HostFilterMode, HostPixelFormat, HostWrapMode};
//! # use scene_bridge::descriptor::*;
//! # struct NullSink;
//! # impl ExportSink for NullSink {
//! #     fn accept_mesh(&mut self, _: MeshRecord<'_>) {}
//! #     fn accept_texture(&mut self, _: TextureRecord<'_>) {}
//! #     fn accept_pipeline(&mut self, _: &PipelineDescriptor) {}
//! #     fn accept_camera(&mut self, _: &CameraDescriptor) {}
//! #     fn accept_transform(&mut self, _: TransformRecord<'_>) {}
//! # }
//!
//! let texture = HostTexture {
//!     id: 1,
//!     name: "checker".to_string(),
//!     format: HostPixelFormat::R8g8b8a8Unorm,
//!     width: 1,
//!     height: 1,
//!     aniso_level: 1,
//!     wrap_mode: HostWrapMode::Repeat,
//!     filter_mode: HostFilterMode::Bilinear,
//!     readable: true,
//!     image: TextureImage::Two { pixels: vec![255, 0, 255, 255] },
//! };
//!
//! let mut sink = NullSink;
//! let report = export::export_textures(&mut sink, &[texture]);
//! assert!(report.all_supported());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;

pub mod builder;
pub mod descriptor;
pub mod export;
pub mod format;
pub mod host;
pub mod marshal;
pub mod memory;
pub mod support;

#[cfg(feature = "native-exporter")]
pub mod ffi;

/// Common imports for bridge users
pub mod prelude {
    pub use crate::builder::{
        build_camera_descriptor, build_mesh_descriptor, build_pipeline_descriptor,
        build_texture_descriptor, build_transform_descriptor, collect_texture_bindings,
    };
    pub use crate::descriptor::{
        CameraDescriptor, MeshDescriptor, NativeArray, PipelineDescriptor, TextureDescriptor,
        TransformDescriptor, TypedArray,
    };
    pub use crate::export::{ExportReport, ExportSink};
    pub use crate::format::{FilterMode, PixelFormat, WrapMode};
    pub use crate::host::{HostCamera, HostMaterial, HostMesh, HostTexture};
    pub use crate::marshal::{from_boundary_layout, to_boundary_layout};
    pub use crate::memory::{release_array, release_boundary_memory, BoundaryAllocator};
    pub use crate::support::{check_texture_support, SupportError};
}
