//! Host texture assets as the bridge sees them

use std::fmt;

use crate::foundation::math::Color32;

/// Pixel formats a host texture may arrive in
///
/// A deliberate superset of what the boundary supports; the format mapper
/// collapses everything outside its supported subset to the unsupported
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostPixelFormat {
    /// Single-channel 8-bit unsigned normalized
    R8Unorm,
    /// Two-channel 8-bit unsigned normalized
    R8g8Unorm,
    /// Four-channel 8-bit unsigned normalized
    R8g8b8a8Unorm,
    /// Four-channel 8-bit unsigned normalized, BGRA channel order
    B8g8r8a8Unorm,
    /// DXT1/BC1 block compressed
    RgbaDxt1Unorm,
    /// DXT5/BC3 block compressed
    RgbaDxt5Unorm,
    /// Single-channel 16-bit float
    R16Sfloat,
    /// Four-channel 32-bit float
    R32g32b32a32Sfloat,
}

/// Sampler filtering as configured on the host asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostFilterMode {
    /// Nearest-sample filtering
    Point,
    /// Linear filtering within a mip level
    Bilinear,
    /// Linear filtering across mip levels
    Trilinear,
    /// Cubic filtering (hardware extension, no boundary equivalent)
    Cubic,
}

/// Texture coordinate wrapping as configured on the host asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostWrapMode {
    /// Tile the texture
    Repeat,
    /// Clamp to the edge texel
    Clamp,
    /// Mirror on every repeat
    Mirror,
    /// Mirror once, then clamp
    MirrorOnce,
    /// Sample a border color outside 0..1 (no boundary equivalent)
    Border,
}

/// Pixel storage of a host texture, tagged by dimensionality
///
/// 2D sources expose their raw pixel bytes as stored; 3D sources expose
/// per-voxel color samples (there is no single contiguous raw buffer for a
/// volume on the host side). Cube maps exist on the host but cannot cross
/// the boundary; the support validator rejects them before the builder runs.
#[derive(Debug, Clone, PartialEq)]
pub enum TextureImage {
    /// A flat 2D image; bytes laid out per the asset's pixel format
    Two {
        /// Raw pixel bytes as stored by the host
        pixels: Vec<u8>,
    },
    /// A volume; one packed color sample per voxel, slice-major order
    Three {
        /// Number of slices along the Z axis
        depth: i32,
        /// Voxel samples, `width * height * depth` entries
        voxels: Vec<Color32>,
    },
    /// A cube map; six faces of raw pixel bytes
    Cube {
        /// Face images in +X, -X, +Y, -Y, +Z, -Z order
        faces: Vec<Vec<u8>>,
    },
}

/// Dimensionality of a host texture, derived from its image storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureDimension {
    /// Flat 2D image
    Two,
    /// Volume texture
    Three,
    /// Cube map
    Cube,
}

impl fmt::Display for TextureDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureDimension::Two => write!(f, "2D"),
            TextureDimension::Three => write!(f, "3D"),
            TextureDimension::Cube => write!(f, "Cube"),
        }
    }
}

/// A texture asset queried from the host scene graph
#[derive(Debug, Clone, PartialEq)]
pub struct HostTexture {
    /// Host-assigned stable instance identifier
    pub id: i32,
    /// Asset name, used in user-facing rejection messages
    pub name: String,
    /// Storage format of the pixel data
    pub format: HostPixelFormat,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
    /// Anisotropic filtering level
    pub aniso_level: i32,
    /// Coordinate wrapping configured on the asset
    pub wrap_mode: HostWrapMode,
    /// Filtering configured on the asset
    pub filter_mode: HostFilterMode,
    /// Whether the host grants CPU read access to the pixel data
    pub readable: bool,
    /// Pixel storage, tagged by dimensionality
    pub image: TextureImage,
}

impl HostTexture {
    /// Dimensionality of this texture
    pub fn dimension(&self) -> TextureDimension {
        match self.image {
            TextureImage::Two { .. } => TextureDimension::Two,
            TextureImage::Three { .. } => TextureDimension::Three,
            TextureImage::Cube { .. } => TextureDimension::Cube,
        }
    }
}
