//! Gated, per-asset export orchestration
//!
//! The control flow of every export: host asset -> support gate ->
//! descriptor builder -> boundary sink. A rejected asset never aborts the
//! batch; its name and reason land in the [`ExportReport`] and the remaining
//! assets keep flowing. The sink is the opaque native exporter behind a
//! trait, so tests can record what crossed the boundary.

use crate::builder;
use crate::descriptor::{
    CameraDescriptor, MeshRecord, PipelineDescriptor, TextureRecord, TransformRecord,
};
use crate::foundation::math::Mat4;
use crate::host::camera::HostCamera;
use crate::host::mesh::HostMesh;
use crate::host::texture::HostTexture;
use crate::support::{self, SupportError};

/// The native exporter's descriptor intake, behind a trait
///
/// Implementations receive wire-layout records whose borrowed pointers are
/// valid only for the duration of each call; a sink that needs the data
/// longer must copy it inside the call.
pub trait ExportSink {
    /// Accept one mesh descriptor
    fn accept_mesh(&mut self, mesh: MeshRecord<'_>);
    /// Accept one texture descriptor
    fn accept_texture(&mut self, texture: TextureRecord<'_>);
    /// Accept one pipeline capability fingerprint
    fn accept_pipeline(&mut self, pipeline: &PipelineDescriptor);
    /// Accept one camera descriptor
    fn accept_camera(&mut self, camera: &CameraDescriptor);
    /// Accept one transform descriptor
    fn accept_transform(&mut self, transform: TransformRecord<'_>);
}

/// One asset the support gate rejected, and why
#[derive(Debug, Clone, PartialEq)]
pub struct AssetFailure {
    /// Name of the rejected asset
    pub asset: String,
    /// The gate's descriptive reason
    pub reason: SupportError,
}

/// Outcome of a batched export: how much crossed, and what was skipped
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExportReport {
    /// Number of descriptors handed to the sink
    pub exported: usize,
    /// Assets the gate rejected, in encounter order
    pub failures: Vec<AssetFailure>,
}

impl ExportReport {
    /// True when no asset was rejected
    pub fn all_supported(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Export a batch of textures, gating each through the support validator
///
/// Unsupported textures are skipped, logged, and reported; supported ones
/// are built and handed to the sink.
pub fn export_textures<S: ExportSink>(sink: &mut S, textures: &[HostTexture]) -> ExportReport {
    let mut report = ExportReport::default();
    for texture in textures {
        let rejection = match support::check_texture_support(texture) {
            Ok(()) => match builder::build_texture_descriptor(texture) {
                Ok(descriptor) => {
                    sink.accept_texture(descriptor.record());
                    report.exported += 1;
                    continue;
                }
                Err(reason) => reason,
            },
            Err(reason) => reason,
        };
        log::warn!("skipping texture '{}': {rejection}", texture.name);
        report.failures.push(AssetFailure {
            asset: texture.name.clone(),
            reason: rejection,
        });
    }
    report
}

/// Export a batch of meshes along with their derived pipeline fingerprints
///
/// Meshes have no unsupported features to gate on; returns the number of
/// meshes handed to the sink.
pub fn export_meshes<S: ExportSink>(sink: &mut S, meshes: &[HostMesh]) -> usize {
    for mesh in meshes {
        let descriptor = builder::build_mesh_descriptor(mesh);
        let pipeline = builder::build_pipeline_descriptor(&descriptor);
        sink.accept_mesh(descriptor.record());
        sink.accept_pipeline(&pipeline);
    }
    meshes.len()
}

/// Export one camera
pub fn export_camera<S: ExportSink>(sink: &mut S, camera: &HostCamera) {
    sink.accept_camera(&builder::build_camera_descriptor(camera));
}

/// Export one transform matrix
pub fn export_transform<S: ExportSink>(sink: &mut S, matrix: &Mat4) {
    let descriptor = builder::build_transform_descriptor(matrix);
    sink.accept_transform(descriptor.record());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Quat, Vec3};
    use crate::host::texture::{
        HostFilterMode, HostPixelFormat, HostWrapMode, TextureImage,
    };

    #[derive(Default)]
    struct RecordingSink {
        meshes: usize,
        textures: usize,
        pipelines: usize,
        cameras: usize,
        transforms: usize,
        last_texture_id: Option<i32>,
    }

    impl ExportSink for RecordingSink {
        fn accept_mesh(&mut self, _mesh: MeshRecord<'_>) {
            self.meshes += 1;
        }
        fn accept_texture(&mut self, texture: TextureRecord<'_>) {
            self.textures += 1;
            self.last_texture_id = Some(texture.id);
        }
        fn accept_pipeline(&mut self, _pipeline: &PipelineDescriptor) {
            self.pipelines += 1;
        }
        fn accept_camera(&mut self, _camera: &CameraDescriptor) {
            self.cameras += 1;
        }
        fn accept_transform(&mut self, _transform: TransformRecord<'_>) {
            self.transforms += 1;
        }
    }

    fn texture(name: &str, id: i32, format: HostPixelFormat) -> HostTexture {
        // 2x2 image; buffer sized for the format so descriptor invariants hold.
        let bytes_per_pixel = match format {
            HostPixelFormat::R8Unorm => 1,
            HostPixelFormat::R8g8Unorm => 2,
            _ => 4,
        };
        HostTexture {
            id,
            name: name.to_string(),
            format,
            width: 2,
            height: 2,
            aniso_level: 1,
            wrap_mode: HostWrapMode::Repeat,
            filter_mode: HostFilterMode::Point,
            readable: true,
            image: TextureImage::Two {
                pixels: vec![0u8; 4 * bytes_per_pixel],
            },
        }
    }

    #[test]
    fn test_unsupported_texture_is_skipped_not_fatal() {
        let good = texture("good", 1, HostPixelFormat::R8g8b8a8Unorm);
        // 2x2x1-equivalent compressed source the boundary cannot take.
        let mut bad = texture("bad", 2, HostPixelFormat::RgbaDxt5Unorm);
        if let TextureImage::Two { pixels } = &mut bad.image {
            pixels.truncate(8);
        }

        let mut sink = RecordingSink::default();
        let report = export_textures(&mut sink, &[bad, good]);

        assert_eq!(report.exported, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].asset, "bad");
        assert!(report.failures[0]
            .reason
            .to_string()
            .contains("unsupported format"));
        // The supported texture still crossed.
        assert_eq!(sink.textures, 1);
        assert_eq!(sink.last_texture_id, Some(1));
        assert!(!report.all_supported());
    }

    #[test]
    fn test_all_supported_batch_reports_clean() {
        let mut sink = RecordingSink::default();
        let report = export_textures(
            &mut sink,
            &[
                texture("a", 1, HostPixelFormat::R8Unorm),
                texture("b", 2, HostPixelFormat::R8g8Unorm),
            ],
        );
        assert!(report.all_supported());
        assert_eq!(report.exported, 2);
        assert_eq!(sink.textures, 2);
    }

    #[test]
    fn test_meshes_export_with_derived_pipelines() {
        let mesh = HostMesh {
            id: 3,
            name: "quad".to_string(),
            vertices: vec![Vec3::zeros(); 4],
            triangles: vec![0, 1, 2, 2, 3, 0],
            ..HostMesh::default()
        };
        let mut sink = RecordingSink::default();
        let exported = export_meshes(&mut sink, &[mesh]);
        assert_eq!(exported, 1);
        assert_eq!(sink.meshes, 1);
        assert_eq!(sink.pipelines, 1);
    }

    #[test]
    fn test_camera_and_transform_export() {
        let mut sink = RecordingSink::default();
        export_camera(
            &mut sink,
            &HostCamera {
                position: Vec3::zeros(),
                rotation: Quat::identity(),
                field_of_view: 45.0,
                near_plane: 0.01,
                far_plane: 100.0,
            },
        );
        export_transform(&mut sink, &Mat4::identity());
        assert_eq!(sink.cameras, 1);
        assert_eq!(sink.transforms, 1);
    }
}
