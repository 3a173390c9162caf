//! Bindings to the native exporter library
//!
//! Compiled only with the `native-exporter` feature, which puts the exporter
//! library on the link line. [`NativeExporter`] is the production
//! implementation of both boundary traits: descriptors flow out through
//! [`ExportSink`](crate::export::ExportSink) and allocations flow back
//! through [`BoundaryAllocator`](crate::memory::BoundaryAllocator).
//!
//! The record types passed by value here are `#[repr(C)]`; their layout is
//! shared with the exporter's `DataTypes` headers (see the `descriptor`
//! module docs).

use std::ffi::c_void;

use crate::descriptor::{
    CameraDescriptor, MeshRecord, PipelineDescriptor, TextureRecord, TransformRecord,
};
use crate::export::ExportSink;
use crate::memory::BoundaryAllocator;

extern "C" {
    fn scene_bridge_DeleteNativeObject(address: *mut c_void, is_array: bool);
    fn scene_bridge_AddMesh(mesh: MeshRecord<'_>);
    fn scene_bridge_AddTexture(texture: TextureRecord<'_>);
    fn scene_bridge_AddPipeline(pipeline: PipelineDescriptor);
    fn scene_bridge_AddCamera(camera: CameraDescriptor);
    fn scene_bridge_AddTransform(transform: TransformRecord<'_>);
}

/// Handle to the linked native exporter
///
/// Zero-sized: the exporter is process-global state on the native side. All
/// calls are synchronous and single-threaded by the boundary contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeExporter;

impl ExportSink for NativeExporter {
    fn accept_mesh(&mut self, mesh: MeshRecord<'_>) {
        // SAFETY: the record's borrowed pointers outlive this synchronous
        // call, and the exporter copies what it keeps.
        unsafe { scene_bridge_AddMesh(mesh) }
    }

    fn accept_texture(&mut self, texture: TextureRecord<'_>) {
        // SAFETY: as accept_mesh.
        unsafe { scene_bridge_AddTexture(texture) }
    }

    fn accept_pipeline(&mut self, pipeline: &PipelineDescriptor) {
        // SAFETY: flat POD record, passed by value.
        unsafe { scene_bridge_AddPipeline(*pipeline) }
    }

    fn accept_camera(&mut self, camera: &CameraDescriptor) {
        // SAFETY: flat POD record, passed by value.
        unsafe { scene_bridge_AddCamera(*camera) }
    }

    fn accept_transform(&mut self, transform: TransformRecord<'_>) {
        // SAFETY: as accept_mesh.
        unsafe { scene_bridge_AddTransform(transform) }
    }
}

impl BoundaryAllocator for NativeExporter {
    fn delete_native_object(&self, address: *mut c_void, is_array: bool) {
        // SAFETY: callers reach this only through memory::release_*, whose
        // tokens guarantee the address came from the exporter and is
        // released once.
        unsafe { scene_bridge_DeleteNativeObject(address, is_array) }
    }
}
