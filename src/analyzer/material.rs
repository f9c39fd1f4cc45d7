//! Fabric classification of materials
//!
//! Three independent signals contribute to each material, in authority
//! order: the vendor fabric extension (authoritative, 0.95), PBR
//! roughness/metallic classification, and fiber keywords in associated
//! texture image names. Confidence is the maximum across sources, never a
//! sum: redundant evidence refines a classification without compounding it.

use std::collections::BTreeMap;

use crate::patterns::{FiberEntry, PatternTables};
use crate::report::{
    FabricType, MaterialAnalysis, MaterialProperties, ValidationSource, VendorFabric,
};
use crate::scene::{Scene, SceneMaterial};

use super::texture;

/// Materials at or below this confidence are not retained
const RETENTION_THRESHOLD: f64 = 0.3;
/// Confidence assigned to vendor extension data
const VENDOR_CONFIDENCE: f64 = 0.95;

/// glTF default when a PBR block omits roughnessFactor
const DEFAULT_ROUGHNESS: f64 = 0.5;
/// glTF default when a PBR block omits metallicFactor
const DEFAULT_METALLIC: f64 = 0.0;

/// Classify every material in the scene, keeping those with confidence
/// above the retention threshold, keyed by name
pub(crate) fn analyze_materials(
    tables: &PatternTables,
    scene: &Scene,
) -> BTreeMap<String, MaterialAnalysis> {
    let mut retained = BTreeMap::new();

    for (index, material) in scene.materials().iter().enumerate() {
        let analysis = analyze_material(tables, scene, index, material);
        if analysis.confidence > RETENTION_THRESHOLD {
            retained.insert(analysis.name.clone(), analysis);
        }
    }

    retained
}

/// Run all classification steps over a single material
fn analyze_material(
    tables: &PatternTables,
    scene: &Scene,
    index: usize,
    material: &SceneMaterial,
) -> MaterialAnalysis {
    let name = material
        .name
        .clone()
        .unwrap_or_else(|| format!("material_{}", index));

    let mut properties = MaterialProperties::default();
    let mut confidence = 0.0_f64;
    let mut sources = std::collections::BTreeSet::new();

    // Vendor extension data is authoritative; later steps may add
    // properties but must not lower this confidence.
    if let Some(fabric) = material
        .extensions
        .as_ref()
        .and_then(|ext| ext.clo_material_properties.as_ref())
    {
        properties.vendor_fabric = Some(VendorFabric {
            stretch_warp: fabric.stretch_warp,
            stretch_weft: fabric.stretch_weft,
            weight: fabric.weight,
            thickness: fabric.thickness,
            has_stretch: fabric.has_stretch(),
        });
        confidence = VENDOR_CONFIDENCE;
        sources.insert(ValidationSource::VendorExtension);
    }

    if let Some(pbr) = &material.pbr_metallic_roughness {
        let roughness = pbr.roughness_factor.unwrap_or(DEFAULT_ROUGHNESS);
        let metallic = pbr.metallic_factor.unwrap_or(DEFAULT_METALLIC);
        let classification = classify_fabric_from_pbr(tables, roughness, metallic, &name);

        properties.roughness = Some(roughness);
        properties.metallic = Some(metallic);
        properties.fabric_type = classification.fabric_type;
        properties.pbr_confidence = Some(classification.confidence);
        properties.pbr_reasoning = classification.reasoning;

        confidence = confidence.max(classification.confidence);
        sources.insert(ValidationSource::PbrAnalysis);
    }

    let corroboration = texture::cross_validate(tables, material, scene);
    if corroboration.confidence > 0.0 {
        properties.texture_indicators = corroboration.indicators;
        confidence = confidence.max(corroboration.confidence);
        sources.insert(ValidationSource::TextureAnalysis);
    }

    MaterialAnalysis {
        name,
        index,
        properties,
        confidence,
        validation_sources: sources,
    }
}

/// PBR classification outcome with its reasoning trail
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FabricClassification {
    /// The assigned fabric type, if any
    pub fabric_type: Option<FabricType>,
    /// Confidence of the classification; 0.0 when no rule applied
    pub confidence: f64,
    /// Ordered list of the rules that applied
    pub reasoning: Vec<String>,
}

/// Classify a fabric type from PBR parameters and the material name
///
/// Metallic values in [0.2, 0.7] are ambiguous and receive no
/// classification. Name evidence upgrades a bucket only when it is
/// directionally consistent with it (cotton/linen for rough, silk for
/// smooth); a name never contradicts the PBR signal.
pub(crate) fn classify_fabric_from_pbr(
    tables: &PatternTables,
    roughness: f64,
    metallic: f64,
    name: &str,
) -> FabricClassification {
    if metallic > 0.7 {
        return FabricClassification {
            fabric_type: Some(FabricType::MetallicHardware),
            confidence: 0.9,
            reasoning: vec!["High metallic factor indicates metal hardware".to_string()],
        };
    }

    if metallic >= 0.2 {
        // Neither confidently metal nor confidently fabric
        return FabricClassification {
            fabric_type: None,
            confidence: 0.0,
            reasoning: Vec::new(),
        };
    }

    let name_fiber: Option<&FiberEntry> = tables.match_fiber(&name.to_lowercase());

    let (mut fabric_type, mut confidence, mut reasoning) = if roughness > 0.8 {
        (
            FabricType::RoughFabric,
            0.7,
            vec!["High roughness suggests rough woven fabric".to_string()],
        )
    } else if roughness < 0.3 {
        (
            FabricType::SmoothFabric,
            0.6,
            vec!["Low roughness suggests smooth fabric".to_string()],
        )
    } else {
        (
            FabricType::StandardFabric,
            0.5,
            vec!["Medium roughness suggests standard fabric".to_string()],
        )
    };

    if let Some(fiber) = name_fiber {
        let consistent = match fabric_type {
            FabricType::RoughFabric => matches!(fiber.name, "cotton" | "linen"),
            FabricType::SmoothFabric => fiber.name == "silk",
            _ => false,
        };
        if consistent {
            fabric_type = FabricType::Fiber(fiber.name);
            confidence = 0.9;
            reasoning.push(format!("Name validation supports {}", fiber.name));
        }
    }

    FabricClassification {
        fabric_type: Some(fabric_type),
        confidence,
        reasoning,
    }
}
