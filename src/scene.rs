//! Data structures representing the glTF scene subset consumed by the analyzer
//!
//! Only the sub-collections the screening heuristics actually read are
//! modeled: asset metadata, meshes, materials (PBR block, texture slots,
//! vendor fabric extension), textures, images, and nodes. Everything else in
//! a glTF document is ignored during deserialization.
//!
//! All index fields are plain integers into the sibling collections, exactly
//! as glTF declares them. Out-of-range indices are tolerated here and
//! skipped during analysis; deserialization never validates cross-references.

use serde::Deserialize;

/// Asset metadata block of a glTF document
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Asset {
    /// glTF specification version the document declares
    pub version: Option<String>,
    /// Authoring tool identifier, e.g. "CLO Standalone 7.2"
    pub generator: Option<String>,
}

/// A mesh record; only the name matters for garment element detection
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SceneMesh {
    /// Optional free-text mesh name
    pub name: Option<String>,
}

/// Reference from a material slot to an entry in the texture table
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TextureSlot {
    /// Index into [`Scene::textures`]
    pub index: Option<usize>,
}

/// PBR metallic-roughness block of a material
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PbrMetallicRoughness {
    /// Base color (diffuse) texture slot
    pub base_color_texture: Option<TextureSlot>,
    /// Combined metallic-roughness texture slot
    pub metallic_roughness_texture: Option<TextureSlot>,
    /// Surface roughness in [0, 1]; glTF default is 1.0 but fabric
    /// classification assumes 0.5 when the factor is not declared
    pub roughness_factor: Option<f64>,
    /// Metalness in [0, 1]; absent means 0.0 for classification purposes
    pub metallic_factor: Option<f64>,
}

/// CLO3D fabric properties vendor extension
///
/// Attached by CLO under `extensions.CLO_material_properties`. When present
/// this block is authoritative: it comes straight from the fabric database
/// of the authoring tool rather than from rendering parameters.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FabricProperties {
    /// Warp-direction stretch resistance
    #[serde(rename = "Stretch-Warp", default)]
    pub stretch_warp: f64,
    /// Weft-direction stretch resistance
    #[serde(rename = "Stretch-Weft", default)]
    pub stretch_weft: f64,
    /// Fabric weight
    #[serde(rename = "Weight", default)]
    pub weight: f64,
    /// Fabric thickness
    #[serde(rename = "Thickness", default)]
    pub thickness: f64,
}

impl FabricProperties {
    /// Stretch resistance values above this mark a stretch fabric
    pub const STRETCH_THRESHOLD: f64 = 100_000.0;

    /// Whether either stretch direction exceeds the stretch threshold
    pub fn has_stretch(&self) -> bool {
        self.stretch_warp > Self::STRETCH_THRESHOLD || self.stretch_weft > Self::STRETCH_THRESHOLD
    }
}

/// Vendor extension blocks recognized on a material
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MaterialExtensions {
    /// CLO3D fabric properties, when the scene was authored in CLO
    #[serde(rename = "CLO_material_properties")]
    pub clo_material_properties: Option<FabricProperties>,
}

/// A material record with the fields fabric classification reads
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneMaterial {
    /// Optional material name
    pub name: Option<String>,
    /// PBR metallic-roughness block
    pub pbr_metallic_roughness: Option<PbrMetallicRoughness>,
    /// Normal map texture slot
    pub normal_texture: Option<TextureSlot>,
    /// Vendor extension blocks
    pub extensions: Option<MaterialExtensions>,
}

/// A texture record mapping to its source image
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SceneTexture {
    /// Index into [`Scene::images`]
    pub source: Option<usize>,
}

/// An image record; identified by declared name or URI
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SceneImage {
    /// Optional image name
    pub name: Option<String>,
    /// Optional image URI (file name or data URI)
    pub uri: Option<String>,
}

/// A scene graph node with the fields size detection reads
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SceneNode {
    /// Optional node name
    pub name: Option<String>,
    /// Optional scale transform; glTF declares exactly three components,
    /// but malformed lengths are kept and ignored during analysis
    pub scale: Option<Vec<f64>>,
}

/// In-memory glTF scene graph, the analyzer's sole input
///
/// Collections are `Option` so that an absent collection is distinguishable
/// from a present-but-empty one: a document missing meshes, materials, and
/// nodes entirely is not analyzable, while empty collections are a valid
/// zero-detection scene.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Scene {
    /// Asset metadata (version, generator)
    pub asset: Option<Asset>,
    /// Mesh table
    pub meshes: Option<Vec<SceneMesh>>,
    /// Material table
    pub materials: Option<Vec<SceneMaterial>>,
    /// Texture table
    pub textures: Option<Vec<SceneTexture>>,
    /// Image table
    pub images: Option<Vec<SceneImage>>,
    /// Node table
    pub nodes: Option<Vec<SceneNode>>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// glTF version the document declares, or "Unknown"
    pub fn gltf_version(&self) -> &str {
        self.asset
            .as_ref()
            .and_then(|a| a.version.as_deref())
            .unwrap_or("Unknown")
    }

    /// Authoring tool generator string, or "Unknown"
    pub fn generator(&self) -> &str {
        self.asset
            .as_ref()
            .and_then(|a| a.generator.as_deref())
            .unwrap_or("Unknown")
    }

    /// Whether the document carries any of the collections the analyzer
    /// consumes (meshes, materials, or nodes, even if empty)
    pub fn has_analyzable_collections(&self) -> bool {
        self.meshes.is_some() || self.materials.is_some() || self.nodes.is_some()
    }

    /// Meshes, or an empty slice when the collection is absent
    pub fn meshes(&self) -> &[SceneMesh] {
        self.meshes.as_deref().unwrap_or(&[])
    }

    /// Materials, or an empty slice when the collection is absent
    pub fn materials(&self) -> &[SceneMaterial] {
        self.materials.as_deref().unwrap_or(&[])
    }

    /// Textures, or an empty slice when the collection is absent
    pub fn textures(&self) -> &[SceneTexture] {
        self.textures.as_deref().unwrap_or(&[])
    }

    /// Images, or an empty slice when the collection is absent
    pub fn images(&self) -> &[SceneImage] {
        self.images.as_deref().unwrap_or(&[])
    }

    /// Nodes, or an empty slice when the collection is absent
    pub fn nodes(&self) -> &[SceneNode] {
        self.nodes.as_deref().unwrap_or(&[])
    }
}
