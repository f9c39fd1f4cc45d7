//! Data structures representing the analysis report
//!
//! The report is an owned plain value: the analyzer builds it once per scene
//! and hands it to the caller, holding no reference afterwards. Downstream
//! consumers (dashboards, report exporters, chat context builders) read it
//! as-is or serialize it to JSON.
//!
//! Confidence values throughout are heuristic certainty in [0, 1], not
//! calibrated probabilities. Sets and maps use ordered collections so that
//! analyzing the same scene twice yields identical reports.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::patterns::{GarmentCategory, SizeTokenFamily};

/// Independent data source that corroborated a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationSource {
    /// Authoring-tool fabric extension data (authoritative)
    VendorExtension,
    /// Classification from PBR roughness/metallic parameters
    PbrAnalysis,
    /// Fiber keywords found in associated texture image names
    TextureAnalysis,
    /// A keyword match carried positive context and no exclusions
    ContextualValidation,
}

impl ValidationSource {
    /// Get a human-readable name for this source
    pub fn name(&self) -> &'static str {
        match self {
            ValidationSource::VendorExtension => "vendor_extension",
            ValidationSource::PbrAnalysis => "pbr_analysis",
            ValidationSource::TextureAnalysis => "texture_analysis",
            ValidationSource::ContextualValidation => "contextual_validation",
        }
    }
}

/// Advisory flag marking a pattern that often accompanies false positives
///
/// No flag is fatal; all are surfaced to the human reviewer alongside the
/// findings they qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FalsePositiveFlag {
    /// The scene's generator string names no known fashion tool
    GeneratorNotFashionSpecific,
    /// Category detections exceed 80% of the mesh count, suggesting
    /// over-eager keyword matching rather than genuine garment structure
    TooManyGarmentElementsDetected,
    /// More materials retained than the scene declares (impossible
    /// overcounting; indicates a counting bug upstream)
    MaterialCountInconsistency,
}

impl FalsePositiveFlag {
    /// Get a human-readable name for this flag
    pub fn name(&self) -> &'static str {
        match self {
            FalsePositiveFlag::GeneratorNotFashionSpecific => "generator_not_fashion_specific",
            FalsePositiveFlag::TooManyGarmentElementsDetected => {
                "too_many_garment_elements_detected"
            }
            FalsePositiveFlag::MaterialCountInconsistency => "material_count_inconsistency",
        }
    }
}

/// One primary-keyword hit in a mesh name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementMatch {
    /// The primary keyword that matched
    pub keyword: String,
    /// Final confidence: base 0.8, +0.1 per context match, -0.3 per
    /// exclusion match, clamped to [0, 1]
    pub confidence: f64,
    /// Context terms found alongside the keyword
    pub context_matches: Vec<String>,
    /// Exclusion terms found alongside the keyword
    pub exclusion_matches: Vec<String>,
    /// True when at least one context term and no exclusion terms matched
    pub validated: bool,
}

/// All retained matches of one category within a single mesh name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDetection {
    /// The garment category
    pub category: GarmentCategory,
    /// Retained element matches (each with confidence > 0.5)
    pub elements: Vec<ElementMatch>,
    /// Maximum confidence across the retained elements
    pub category_confidence: f64,
}

/// Garment element detections for one mesh
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshDetection {
    /// Index of the mesh in the scene's mesh table
    pub mesh_index: usize,
    /// The mesh name as declared in the scene
    pub mesh_name: String,
    /// Detections per category; never empty for a retained mesh
    pub detections: Vec<CategoryDetection>,
    /// Maximum category confidence; a single strong signal suffices,
    /// summing would inflate confidence from correlated keywords
    pub confidence: f64,
}

/// Texture slot a fiber indicator was found through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureSlotKind {
    /// Base color texture; best reflects the visible fabric
    Diffuse,
    /// Combined metallic-roughness texture
    MetallicRoughness,
    /// Normal map texture
    Normal,
}

impl TextureSlotKind {
    /// Confidence conferred by a fiber keyword found through this slot
    pub fn confidence(&self) -> f64 {
        match self {
            TextureSlotKind::Diffuse => 0.7,
            TextureSlotKind::MetallicRoughness | TextureSlotKind::Normal => 0.5,
        }
    }
}

/// A fiber keyword found in a texture's image identifier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextureIndicator {
    /// Canonical fiber name
    pub fiber: String,
    /// Which texture slot the image was reached through
    pub slot: TextureSlotKind,
    /// Indicator confidence from the slot weighting
    pub confidence: f64,
    /// The lowercased image name or URI the keyword was found in
    pub image_identifier: String,
}

/// Fabric type label produced by the material classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FabricType {
    /// High metallic factor: hardware, not fabric
    MetallicHardware,
    /// High roughness, non-metallic: rough woven fabric
    RoughFabric,
    /// Low roughness, non-metallic: smooth fabric
    SmoothFabric,
    /// Medium roughness, non-metallic
    StandardFabric,
    /// A named fiber, when name evidence agrees with the PBR bucket
    Fiber(&'static str),
}

impl FabricType {
    /// Get the label for this fabric type
    pub fn label(&self) -> &'static str {
        match self {
            FabricType::MetallicHardware => "metallic_hardware",
            FabricType::RoughFabric => "rough_fabric",
            FabricType::SmoothFabric => "smooth_fabric",
            FabricType::StandardFabric => "standard_fabric",
            FabricType::Fiber(name) => name,
        }
    }
}

impl Serialize for FabricType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Fabric properties extracted from the vendor extension
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorFabric {
    /// Warp-direction stretch resistance
    pub stretch_warp: f64,
    /// Weft-direction stretch resistance
    pub stretch_weft: f64,
    /// Fabric weight
    pub weight: f64,
    /// Fabric thickness
    pub thickness: f64,
    /// Whether either stretch direction exceeds the stretch threshold
    pub has_stretch: bool,
}

/// Attribute values contributed by the material classification steps
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MaterialProperties {
    /// Vendor extension fabric data, when present
    pub vendor_fabric: Option<VendorFabric>,
    /// Declared or defaulted roughness factor
    pub roughness: Option<f64>,
    /// Declared or defaulted metallic factor
    pub metallic: Option<f64>,
    /// Fabric type from PBR classification
    pub fabric_type: Option<FabricType>,
    /// Confidence of the PBR classification alone
    pub pbr_confidence: Option<f64>,
    /// Ordered list of classification rules that applied
    pub pbr_reasoning: Vec<String>,
    /// Fiber indicators found via associated textures
    pub texture_indicators: Vec<TextureIndicator>,
}

/// Classification result for one material
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialAnalysis {
    /// Material name, or `material_{index}` when unnamed
    pub name: String,
    /// Index of the material in the scene's material table
    pub index: usize,
    /// Attribute values from the contributing steps
    pub properties: MaterialProperties,
    /// Maximum confidence across contributing sources; sources refine
    /// rather than compound, and vendor extension data is never overridden
    pub confidence: f64,
    /// The sources that contributed to this classification
    pub validation_sources: BTreeSet<ValidationSource>,
}

/// One size token found in a node name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeIndicator {
    /// Which pattern family matched
    pub family: SizeTokenFamily,
    /// The matched token text
    pub value: String,
    /// Confidence from the family weighting
    pub confidence: f64,
}

/// Geometric scale data corroborating a size variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometricValidation {
    /// Whether the three scale components are within 0.1 of each other
    pub uniform_scale: bool,
    /// Mean of the scale components
    pub scale_factor: f64,
    /// Spread of the scale components (max minus min)
    pub scale_variance: f64,
}

/// A likely size-grading variant detected on a scene node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeVariation {
    /// Index of the node in the scene's node table
    pub node_index: usize,
    /// The node name as declared in the scene
    pub node_name: String,
    /// Size tokens found in the name
    pub size_indicators: Vec<SizeIndicator>,
    /// Scale transform data, when the node declares a scale
    pub geometric_validation: Option<GeometricValidation>,
    /// min(1, max indicator confidence + 0.2 when scale data is present)
    pub confidence: f64,
}

impl SizeVariation {
    /// Whether the node carried usable scale data
    pub fn has_scale(&self) -> bool {
        self.geometric_validation.is_some()
    }
}

/// Accessibility assessment of a detected closure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilityFeature {
    /// The closure keyword the feature derives from
    pub closure_type: String,
    /// Name of the mesh the closure was detected on
    pub mesh_name: String,
    /// Fixed accessibility-friendliness score for this closure type
    pub accessibility_score: f64,
    /// Confidence inherited from the originating element match
    pub confidence: f64,
    /// Validated bit inherited from the originating element match
    pub validated: bool,
}

/// Complete analysis report for one scene
///
/// Created once per analyzed scene and immutable thereafter. The caller owns
/// it exclusively; the analyzer keeps no reference after returning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// glTF version the scene declares, or "Unknown"
    pub gltf_version: String,
    /// Authoring tool generator string, or "Unknown"
    pub generator: String,
    /// Weighted combination of subsystem confidences, in [0, 1]
    pub overall_confidence: f64,
    /// Per-mesh garment element detections
    pub garment_elements: Vec<MeshDetection>,
    /// Retained material classifications, keyed by material name
    pub materials: BTreeMap<String, MaterialAnalysis>,
    /// Retained size-grading variants
    pub size_variations: Vec<SizeVariation>,
    /// Accessibility assessments of detected closures
    pub accessibility_features: Vec<AccessibilityFeature>,
    /// Union of all sources that corroborated any finding
    pub validation_sources: BTreeSet<ValidationSource>,
    /// Advisory false-positive flags
    pub false_positive_flags: BTreeSet<FalsePositiveFlag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_and_source_names() {
        assert_eq!(
            FalsePositiveFlag::GeneratorNotFashionSpecific.name(),
            "generator_not_fashion_specific"
        );
        assert_eq!(
            FalsePositiveFlag::TooManyGarmentElementsDetected.name(),
            "too_many_garment_elements_detected"
        );
        assert_eq!(ValidationSource::VendorExtension.name(), "vendor_extension");
        assert_eq!(
            ValidationSource::ContextualValidation.name(),
            "contextual_validation"
        );
    }

    #[test]
    fn test_fabric_type_labels() {
        assert_eq!(FabricType::MetallicHardware.label(), "metallic_hardware");
        assert_eq!(FabricType::Fiber("cotton").label(), "cotton");
        let json = serde_json::to_string(&FabricType::RoughFabric).unwrap();
        assert_eq!(json, "\"rough_fabric\"");
    }

    #[test]
    fn test_texture_slot_confidence_weights() {
        assert_eq!(TextureSlotKind::Diffuse.confidence(), 0.7);
        assert_eq!(TextureSlotKind::MetallicRoughness.confidence(), 0.5);
        assert_eq!(TextureSlotKind::Normal.confidence(), 0.5);
    }
}
