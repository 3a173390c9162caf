//! Enumeration mapping between host formats and the boundary's wire values
//!
//! The exporter understands a small, fixed enumeration space; the host engine
//! exposes a much larger one. Each mapper here is a total, stateless function
//! that translates a host value into the boundary value, falling back to the
//! reserved [`UNSUPPORTED_SENTINEL`] member for anything outside the
//! supported subset. The sentinel is a signal, not an error: callers decide
//! whether an unsupported value is fatal (the support validator treats an
//! unsupported pixel format as a per-asset rejection).
//!
//! Discriminants are wire values shared with the native side and must never
//! be renumbered.

use crate::host::texture::{HostFilterMode, HostPixelFormat, HostWrapMode};

/// Reserved discriminant marking a value the boundary cannot represent
pub const UNSUPPORTED_SENTINEL: i32 = 9999;

/// Pixel formats the native exporter can ingest
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Single-channel 8-bit unsigned normalized
    R8Unorm = 0,
    /// Two-channel 8-bit unsigned normalized
    R8g8Unorm = 1,
    /// Three-channel 8-bit unsigned normalized
    R8g8b8Unorm = 2,
    /// Four-channel 8-bit unsigned normalized
    R8g8b8a8Unorm = 3,
    /// BC1 (DXT1) compressed, opaque
    Bc1RgbUnorm = 4,
    /// BC1 (DXT1) compressed with 1-bit alpha
    Bc1RgbaUnorm = 5,
    /// Sentinel: no boundary representation exists
    Unsupported = UNSUPPORTED_SENTINEL,
}

impl PixelFormat {
    /// Bytes per pixel for uncompressed formats, `None` for block-compressed
    /// or unsupported values
    pub fn bytes_per_pixel(self) -> Option<u32> {
        match self {
            PixelFormat::R8Unorm => Some(1),
            PixelFormat::R8g8Unorm => Some(2),
            PixelFormat::R8g8b8Unorm => Some(3),
            PixelFormat::R8g8b8a8Unorm => Some(4),
            PixelFormat::Bc1RgbUnorm | PixelFormat::Bc1RgbaUnorm | PixelFormat::Unsupported => {
                None
            }
        }
    }
}

/// Sampler minification/magnification filtering on the boundary side
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    /// Nearest-sample filtering
    Point = 0,
    /// Linear filtering within a mip level
    Bilinear = 1,
    /// Linear filtering across mip levels
    Trilinear = 2,
    /// Sentinel: no boundary representation exists
    Unsupported = UNSUPPORTED_SENTINEL,
}

/// Texture coordinate wrapping on the boundary side
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Tile the texture
    Repeat = 0,
    /// Clamp to the edge texel
    Clamp = 1,
    /// Mirror on every repeat
    Mirror = 2,
    /// Mirror once, then clamp
    MirrorOnce = 3,
    /// Sentinel: no boundary representation exists
    Unsupported = UNSUPPORTED_SENTINEL,
}

/// Map a host pixel format to its boundary value
///
/// The supported subset is R8, R8G8, R8G8B8A8 unorm and DXT1 RGBA; every
/// other host format maps to [`PixelFormat::Unsupported`]. Note that the
/// boundary enumeration carries `R8g8b8Unorm` but no host format maps to it:
/// the host engine has no tightly-packed 24-bit readable format.
pub fn map_pixel_format(host: HostPixelFormat) -> PixelFormat {
    match host {
        HostPixelFormat::R8Unorm => PixelFormat::R8Unorm,
        HostPixelFormat::R8g8Unorm => PixelFormat::R8g8Unorm,
        HostPixelFormat::R8g8b8a8Unorm => PixelFormat::R8g8b8a8Unorm,
        HostPixelFormat::RgbaDxt1Unorm => PixelFormat::Bc1RgbaUnorm,
        _ => PixelFormat::Unsupported,
    }
}

/// Map a host filter mode to its boundary value
pub fn map_filter_mode(host: HostFilterMode) -> FilterMode {
    match host {
        HostFilterMode::Point => FilterMode::Point,
        HostFilterMode::Bilinear => FilterMode::Bilinear,
        HostFilterMode::Trilinear => FilterMode::Trilinear,
        _ => FilterMode::Unsupported,
    }
}

/// Map a host wrap mode to its boundary value
pub fn map_wrap_mode(host: HostWrapMode) -> WrapMode {
    match host {
        HostWrapMode::Repeat => WrapMode::Repeat,
        HostWrapMode::Clamp => WrapMode::Clamp,
        HostWrapMode::Mirror => WrapMode::Mirror,
        HostWrapMode::MirrorOnce => WrapMode::MirrorOnce,
        _ => WrapMode::Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const SUPPORTED_HOST_FORMATS: [HostPixelFormat; 4] = [
        HostPixelFormat::R8Unorm,
        HostPixelFormat::R8g8Unorm,
        HostPixelFormat::R8g8b8a8Unorm,
        HostPixelFormat::RgbaDxt1Unorm,
    ];

    #[test]
    fn test_pixel_format_mapping_is_injective_on_supported_subset() {
        let mapped: HashSet<PixelFormat> = SUPPORTED_HOST_FORMATS
            .iter()
            .map(|&f| map_pixel_format(f))
            .collect();
        assert_eq!(mapped.len(), SUPPORTED_HOST_FORMATS.len());
        assert!(!mapped.contains(&PixelFormat::Unsupported));
    }

    #[test]
    fn test_unsupported_pixel_formats_map_to_sentinel() {
        for host in [
            HostPixelFormat::RgbaDxt5Unorm,
            HostPixelFormat::R16Sfloat,
            HostPixelFormat::R32g32b32a32Sfloat,
            HostPixelFormat::B8g8r8a8Unorm,
        ] {
            assert_eq!(map_pixel_format(host), PixelFormat::Unsupported);
        }
    }

    #[test]
    fn test_sentinel_discriminant_is_out_of_range() {
        assert_eq!(PixelFormat::Unsupported as i32, UNSUPPORTED_SENTINEL);
        assert_eq!(FilterMode::Unsupported as i32, UNSUPPORTED_SENTINEL);
        assert_eq!(WrapMode::Unsupported as i32, UNSUPPORTED_SENTINEL);
    }

    #[test]
    fn test_filter_and_wrap_modes_map_one_to_one() {
        assert_eq!(map_filter_mode(HostFilterMode::Point), FilterMode::Point);
        assert_eq!(
            map_filter_mode(HostFilterMode::Trilinear),
            FilterMode::Trilinear
        );
        assert_eq!(map_wrap_mode(HostWrapMode::Repeat), WrapMode::Repeat);
        assert_eq!(map_wrap_mode(HostWrapMode::MirrorOnce), WrapMode::MirrorOnce);
    }

    #[test]
    fn test_unmapped_sampler_modes_hit_the_sentinel() {
        assert_eq!(
            map_filter_mode(HostFilterMode::Cubic),
            FilterMode::Unsupported
        );
        assert_eq!(map_wrap_mode(HostWrapMode::Border), WrapMode::Unsupported);
    }

    #[test]
    fn test_bytes_per_pixel_known_for_uncompressed_only() {
        assert_eq!(PixelFormat::R8g8b8a8Unorm.bytes_per_pixel(), Some(4));
        assert_eq!(PixelFormat::R8Unorm.bytes_per_pixel(), Some(1));
        assert_eq!(PixelFormat::Bc1RgbaUnorm.bytes_per_pixel(), None);
        assert_eq!(PixelFormat::Unsupported.bytes_per_pixel(), None);
    }
}
