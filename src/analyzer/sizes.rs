//! Size-variation detection from node names and scale transforms
//!
//! Node names are scanned with three token families (explicit sizes,
//! numeric sizes, scale variants). Scale transform data corroborates a
//! plausible resizing: its presence adds a flat confidence boost whether
//! the scale is uniform or not, since grading may legitimately scale axes
//! differently. Nodes with no token match are never promoted by scale data
//! alone.

use crate::patterns::PatternTables;
use crate::report::{GeometricValidation, SizeIndicator, SizeVariation};
use crate::scene::Scene;

/// Variations at or below this confidence are dropped
const RETENTION_THRESHOLD: f64 = 0.5;
/// Flat confidence boost when the node carries scale data
const GEOMETRIC_BOOST: f64 = 0.2;
/// Scale spread below this counts as uniform
const UNIFORM_SCALE_TOLERANCE: f64 = 0.1;

/// Detect size-grading variants across all nodes in the scene
pub(crate) fn detect_size_variations(tables: &PatternTables, scene: &Scene) -> Vec<SizeVariation> {
    scene
        .nodes()
        .iter()
        .enumerate()
        .filter_map(|(index, node)| {
            let name = node.name.as_deref().filter(|n| !n.is_empty())?;
            let variation = score_node(tables, index, name, node.scale.as_deref());
            (variation.confidence > RETENTION_THRESHOLD).then_some(variation)
        })
        .collect()
}

/// Score one node's name and scale data
fn score_node(
    tables: &PatternTables,
    index: usize,
    name: &str,
    scale: Option<&[f64]>,
) -> SizeVariation {
    // Fold underscores to spaces so word boundaries split "size_m"
    let normalized = name.to_lowercase().replace('_', " ");

    let mut size_indicators = Vec::new();
    for (family, pattern) in tables.size_patterns().families() {
        for m in pattern.find_iter(&normalized) {
            size_indicators.push(SizeIndicator {
                family,
                value: m.as_str().to_string(),
                confidence: family.confidence(),
            });
        }
    }

    let geometric_validation = scale.and_then(validate_scale);

    let confidence = if size_indicators.is_empty() {
        0.0
    } else {
        let max_indicator = size_indicators
            .iter()
            .map(|i| i.confidence)
            .fold(0.0, f64::max);
        let boost = if geometric_validation.is_some() {
            GEOMETRIC_BOOST
        } else {
            0.0
        };
        (max_indicator + boost).min(1.0)
    };

    SizeVariation {
        node_index: index,
        node_name: name.to_string(),
        size_indicators,
        geometric_validation,
        confidence,
    }
}

/// Compute scale statistics; a scale vector must have exactly three
/// components to count as geometric evidence
fn validate_scale(scale: &[f64]) -> Option<GeometricValidation> {
    if scale.len() != 3 {
        return None;
    }
    let max = scale.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = scale.iter().copied().fold(f64::INFINITY, f64::min);
    let scale_variance = max - min;
    Some(GeometricValidation {
        uniform_scale: scale_variance < UNIFORM_SCALE_TOLERANCE,
        scale_factor: scale.iter().sum::<f64>() / 3.0,
        scale_variance,
    })
}
