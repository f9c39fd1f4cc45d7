//! Confidence aggregation and false-positive detection
//!
//! The overall figure is a weighted sum of subsystem average confidences.
//! A subsystem with no detections contributes zero and its weight is NOT
//! redistributed: missing evidence legitimately lowers overall confidence
//! instead of being ignored. Averages within a subsystem, maximum within a
//! finding — never sums across correlated signals.

use std::collections::{BTreeMap, BTreeSet};

use crate::patterns::PatternTables;
use crate::report::{
    AccessibilityFeature, FalsePositiveFlag, MaterialAnalysis, MeshDetection, SizeVariation,
    ValidationSource,
};
use crate::scene::Scene;

/// Weight of the garment element subsystem
const ELEMENTS_WEIGHT: f64 = 0.4;
/// Weight of the material subsystem
const MATERIALS_WEIGHT: f64 = 0.3;
/// Weight of the size-variation subsystem
const SIZES_WEIGHT: f64 = 0.2;
/// Weight of the accessibility subsystem
const ACCESSIBILITY_WEIGHT: f64 = 0.1;

/// Detection density above this fraction of the mesh count is suspicious
const DETECTION_DENSITY_LIMIT: f64 = 0.8;

/// Combine subsystem confidences into the overall figure
///
/// Bounded by the weight sum (1.0) for any input.
pub(crate) fn overall_confidence(
    garment_elements: &[MeshDetection],
    materials: &BTreeMap<String, MaterialAnalysis>,
    size_variations: &[SizeVariation],
    accessibility_features: &[AccessibilityFeature],
) -> f64 {
    let mut total = 0.0;

    if let Some(avg) = average(garment_elements.iter().map(|m| m.confidence)) {
        total += avg * ELEMENTS_WEIGHT;
    }
    if let Some(avg) = average(materials.values().map(|m| m.confidence)) {
        total += avg * MATERIALS_WEIGHT;
    }
    if let Some(avg) = average(size_variations.iter().map(|v| v.confidence)) {
        total += avg * SIZES_WEIGHT;
    }
    if let Some(avg) = average(accessibility_features.iter().map(|f| f.confidence)) {
        total += avg * ACCESSIBILITY_WEIGHT;
    }

    total
}

/// Union of the data sources that corroborated any finding
pub(crate) fn collect_validation_sources(
    materials: &BTreeMap<String, MaterialAnalysis>,
    garment_elements: &[MeshDetection],
) -> BTreeSet<ValidationSource> {
    let mut sources: BTreeSet<ValidationSource> = materials
        .values()
        .flat_map(|m| m.validation_sources.iter().copied())
        .collect();

    let any_validated = garment_elements
        .iter()
        .flat_map(|m| &m.detections)
        .flat_map(|d| &d.elements)
        .any(|e| e.validated);
    if any_validated {
        sources.insert(ValidationSource::ContextualValidation);
    }

    sources
}

/// Run the heuristic false-positive detectors
///
/// Each flag is independently evaluable and advisory; multiple may fire.
pub(crate) fn detect_false_positives(
    tables: &PatternTables,
    scene: &Scene,
    garment_elements: &[MeshDetection],
    materials: &BTreeMap<String, MaterialAnalysis>,
) -> BTreeSet<FalsePositiveFlag> {
    let mut flags = BTreeSet::new();

    if !tables.is_fashion_generator(scene.generator()) {
        flags.insert(FalsePositiveFlag::GeneratorNotFashionSpecific);
    }

    // With zero meshes there are no detections, so the density check
    // cannot fire on an empty scene.
    let total_detections: usize = garment_elements.iter().map(|m| m.detections.len()).sum();
    if total_detections as f64 > scene.meshes().len() as f64 * DETECTION_DENSITY_LIMIT {
        flags.insert(FalsePositiveFlag::TooManyGarmentElementsDetected);
    }

    if material_count_inconsistent(materials.len(), scene.materials().len()) {
        flags.insert(FalsePositiveFlag::MaterialCountInconsistency);
    }

    flags
}

/// Impossible-overcounting guard: more materials retained than declared
///
/// Unreachable through the classifier itself, which only filters declared
/// materials; kept as a guard should the retained map ever be assembled
/// differently.
fn material_count_inconsistent(retained: usize, declared: usize) -> bool {
    retained > declared
}

fn average(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}
