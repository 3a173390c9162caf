//! Texture descriptor crossing the export boundary

use crate::descriptor::arrays::{BoundaryArray, ByteArray};
use crate::format::{FilterMode, PixelFormat, WrapMode};

/// One texture asset's pixel data and sampler state, ready to cross the
/// boundary
///
/// Invariant: `pixel_data` holds exactly the byte size implied by `format`,
/// `width`, `height` and `depth`. `format` is never
/// [`PixelFormat::Unsupported`] when the support validator gated the asset
/// first; a descriptor carrying the sentinel is uninterpretable on the
/// native side.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDescriptor {
    /// Host-assigned identifier of the source texture asset
    pub id: i32,
    /// Material channel the texture binds to; assigned by the caller, 0 here
    pub channel: i32,
    /// Flat pixel byte buffer
    pub pixel_data: ByteArray,
    /// Boundary pixel format
    pub format: PixelFormat,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
    /// Depth in slices; 1 for 2D sources
    pub depth: i32,
    /// Anisotropic filtering level
    pub aniso_level: i32,
    /// Boundary wrap mode
    pub wrap_mode: WrapMode,
    /// Boundary filter mode; always `Point` (source filtering not derived)
    pub filter_mode: FilterMode,
    /// Mip level count; always 0 (source mip state not derived)
    pub mipmap_count: i32,
    /// Mip sampling bias; always 0 (source mip state not derived)
    pub mipmap_bias: f32,
}

impl TextureDescriptor {
    /// Wire-layout view of this descriptor, borrowed from its pixel buffer
    pub fn record(&self) -> TextureRecord<'_> {
        TextureRecord {
            id: self.id,
            channel: self.channel,
            pixel_data: self.pixel_data.as_boundary(),
            format: self.format,
            width: self.width,
            height: self.height,
            depth: self.depth,
            aniso_level: self.aniso_level,
            wrap_mode: self.wrap_mode,
            filter_mode: self.filter_mode,
            mipmap_count: self.mipmap_count,
            mipmap_bias: self.mipmap_bias,
        }
    }
}

/// Wire layout of a texture descriptor
///
/// Field order matches the native side's `TextureData` struct and must not
/// change. Enumeration fields are `#[repr(i32)]` so each occupies exactly
/// four bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TextureRecord<'a> {
    /// Host-assigned identifier of the source texture asset
    pub id: i32,
    /// Material channel the texture binds to
    pub channel: i32,
    /// Flat pixel byte buffer
    pub pixel_data: BoundaryArray<'a, u8>,
    /// Boundary pixel format
    pub format: PixelFormat,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
    /// Depth in slices
    pub depth: i32,
    /// Anisotropic filtering level
    pub aniso_level: i32,
    /// Boundary wrap mode
    pub wrap_mode: WrapMode,
    /// Boundary filter mode
    pub filter_mode: FilterMode,
    /// Mip level count
    pub mipmap_count: i32,
    /// Mip sampling bias
    pub mipmap_bias: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marshal;

    #[test]
    fn test_record_mirrors_descriptor_fields() {
        let desc = TextureDescriptor {
            id: 7,
            channel: 0,
            pixel_data: marshal::to_boundary_layout(vec![0u8; 16]),
            format: PixelFormat::R8g8b8a8Unorm,
            width: 2,
            height: 2,
            depth: 1,
            aniso_level: 4,
            wrap_mode: WrapMode::Clamp,
            filter_mode: FilterMode::Point,
            mipmap_count: 0,
            mipmap_bias: 0.0,
        };
        let record = desc.record();
        assert_eq!(record.id, 7);
        assert_eq!(record.pixel_data.len(), 16);
        assert_eq!(record.format, PixelFormat::R8g8b8a8Unorm);
        assert_eq!(record.wrap_mode, WrapMode::Clamp);
    }
}
