//! Host material and shader metadata as the bridge sees them

use std::collections::HashMap;

use crate::host::texture::HostTexture;

/// Kind of a shader-declared material property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderPropertyKind {
    /// A texture sampler slot
    Texture,
    /// A scalar parameter
    Float,
    /// A color parameter
    Color,
    /// A vector parameter
    Vector,
}

/// A single property declared by a shader
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderProperty {
    /// Property name as declared by the shader; unique within the shader
    pub name: String,
    /// Property kind
    pub kind: ShaderPropertyKind,
}

/// Shader metadata: the declared property list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostShader {
    /// Shader name, used in diagnostics
    pub name: String,
    /// Declared properties, in shader declaration order
    pub properties: Vec<ShaderProperty>,
}

/// A material asset: a shader plus its current texture bindings
///
/// A texture-kind property declared by the shader may have no texture bound
/// on the material; binding collection reports such slots as unset rather
/// than omitting them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostMaterial {
    /// The shader this material instantiates
    pub shader: HostShader,
    /// Currently bound textures, keyed by shader property name
    pub textures: HashMap<String, HostTexture>,
}

impl HostMaterial {
    /// Texture currently bound to a named slot, if any
    pub fn texture(&self, slot: &str) -> Option<&HostTexture> {
        self.textures.get(slot)
    }
}
