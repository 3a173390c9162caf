//! Support gate for host textures
//!
//! The native exporter only understands a subset of what the host engine can
//! hold, so every texture passes through [`check_texture_support`] before a
//! descriptor is built for it. Rejections are per-asset and descriptive: the
//! caller reports them and moves on to the next asset rather than aborting
//! the export.

use thiserror::Error;

use crate::format::{self, PixelFormat};
use crate::host::texture::{HostPixelFormat, HostTexture, TextureDimension};

/// Why a host texture cannot cross the export boundary
///
/// Every variant names the asset so a batched export can report exactly
/// which textures were skipped and what to change.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SupportError {
    /// The host denies CPU access to the pixel data
    #[error("texture '{name}' is not readable; enable read/write access in the asset's import settings")]
    NotReadable {
        /// Name of the rejected asset
        name: String,
    },

    /// The pixel format has no boundary equivalent
    #[error("texture '{name}' uses unsupported format '{format:?}'; re-import with a supported format such as R8g8b8a8Unorm")]
    UnsupportedFormat {
        /// Name of the rejected asset
        name: String,
        /// The offending host format
        format: HostPixelFormat,
    },

    /// The texture is neither 2D nor 3D
    #[error("texture '{name}' has unsupported dimension '{dimension}'; only 2D and 3D textures can be exported")]
    UnsupportedDimension {
        /// Name of the rejected asset
        name: String,
        /// The offending dimensionality
        dimension: TextureDimension,
    },
}

/// Decide whether a host texture can cross the boundary
///
/// Checks run in order and the first failure wins: read access, then pixel
/// format, then dimensionality. Passing this gate guarantees the descriptor
/// builder will not produce a [`PixelFormat::Unsupported`] descriptor;
/// callers that skip the gate lose that guarantee.
pub fn check_texture_support(texture: &HostTexture) -> Result<(), SupportError> {
    if !texture.readable {
        return Err(SupportError::NotReadable {
            name: texture.name.clone(),
        });
    }

    if format::map_pixel_format(texture.format) == PixelFormat::Unsupported {
        return Err(SupportError::UnsupportedFormat {
            name: texture.name.clone(),
            format: texture.format,
        });
    }

    match texture.dimension() {
        TextureDimension::Two | TextureDimension::Three => Ok(()),
        dimension => Err(SupportError::UnsupportedDimension {
            name: texture.name.clone(),
            dimension,
        }),
    }
}
