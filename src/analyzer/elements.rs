//! Garment element detection from mesh names
//!
//! Each mesh name is scored against every category's primary keywords. A
//! primary hit starts at base confidence 0.8, gains 0.1 per co-occurring
//! context term, and loses 0.3 per exclusion term; matches that end up at
//! or below 0.5 are discarded. A mesh with no surviving category produces
//! no detection at all.

use crate::patterns::{CategoryPatterns, GarmentCategory, PatternTables};
use crate::report::{CategoryDetection, ElementMatch, MeshDetection};
use crate::scene::Scene;

/// Base confidence of a primary keyword hit before context adjustment
const BASE_CONFIDENCE: f64 = 0.8;
/// Confidence gained per context term found in the same name
const CONTEXT_BOOST: f64 = 0.1;
/// Confidence lost per exclusion term found in the same name
const EXCLUSION_PENALTY: f64 = 0.3;
/// Matches at or below this confidence are discarded
const RETENTION_THRESHOLD: f64 = 0.5;

/// Detect garment elements across all meshes in the scene
///
/// Meshes without a name (or with an empty name) are skipped entirely and
/// contribute no detection.
pub(crate) fn detect_garment_elements(tables: &PatternTables, scene: &Scene) -> Vec<MeshDetection> {
    scene
        .meshes()
        .iter()
        .enumerate()
        .filter_map(|(index, mesh)| {
            let name = mesh.name.as_deref().filter(|n| !n.is_empty())?;
            score_mesh_name(tables, index, name)
        })
        .collect()
}

/// Score one mesh name against all categories
///
/// Returns `None` when no category retains any element match.
fn score_mesh_name(tables: &PatternTables, index: usize, name: &str) -> Option<MeshDetection> {
    let lowered = name.to_lowercase();
    let mut detections = Vec::new();

    for category in GarmentCategory::ALL {
        let patterns = tables.category(category);
        let elements: Vec<ElementMatch> = patterns
            .primary
            .iter()
            .filter(|keyword| lowered.contains(*keyword))
            .map(|keyword| match_keyword(patterns, keyword, &lowered))
            .filter(|m| m.confidence > RETENTION_THRESHOLD)
            .collect();

        if !elements.is_empty() {
            let category_confidence = max_confidence(elements.iter().map(|e| e.confidence));
            detections.push(CategoryDetection {
                category,
                elements,
                category_confidence,
            });
        }
    }

    if detections.is_empty() {
        return None;
    }

    // A single strong category carries the mesh; summing across categories
    // would inflate confidence from correlated keywords in one name.
    let confidence = max_confidence(detections.iter().map(|d| d.category_confidence));
    Some(MeshDetection {
        mesh_index: index,
        mesh_name: name.to_string(),
        detections,
        confidence,
    })
}

/// Score one primary keyword hit within a lowercased name
fn match_keyword(patterns: &CategoryPatterns, keyword: &str, lowered: &str) -> ElementMatch {
    let context_matches: Vec<String> = patterns
        .context
        .iter()
        .filter(|term| lowered.contains(*term))
        .map(|term| term.to_string())
        .collect();
    let exclusion_matches: Vec<String> = patterns
        .exclusions
        .iter()
        .filter(|term| lowered.contains(*term))
        .map(|term| term.to_string())
        .collect();

    let confidence = (BASE_CONFIDENCE + CONTEXT_BOOST * context_matches.len() as f64
        - EXCLUSION_PENALTY * exclusion_matches.len() as f64)
        .clamp(0.0, 1.0);
    let validated = !context_matches.is_empty() && exclusion_matches.is_empty();

    ElementMatch {
        keyword: keyword.to_string(),
        confidence,
        context_matches,
        exclusion_matches,
        validated,
    }
}

fn max_confidence(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> PatternTables {
        PatternTables::new()
    }

    #[test]
    fn test_contextual_match_boosts_confidence() {
        // "front" and "collar" are both closure context terms
        let detection = score_mesh_name(&tables(), 0, "front_collar_zipper").unwrap();
        let closures = &detection.detections[0];
        assert_eq!(closures.category, GarmentCategory::Closures);
        let zipper = closures
            .elements
            .iter()
            .find(|e| e.keyword == "zipper")
            .unwrap();
        assert!((zipper.confidence - 1.0).abs() < 1e-9);
        assert!(zipper.validated);
    }

    #[test]
    fn test_exclusions_discard_the_match() {
        // "texture" and "pattern" each cost 0.3: 0.8 - 0.6 = 0.2, dropped
        assert!(score_mesh_name(&tables(), 0, "zipper_texture_pattern").is_none());
    }

    #[test]
    fn test_bare_keyword_keeps_base_confidence() {
        let detection = score_mesh_name(&tables(), 3, "zipper").unwrap();
        assert_eq!(detection.mesh_index, 3);
        let zipper = &detection.detections[0].elements[0];
        assert!((zipper.confidence - 0.8).abs() < 1e-9);
        assert!(!zipper.validated);
    }

    #[test]
    fn test_mesh_can_match_multiple_categories() {
        // "sleeve" (body part) and "seam" (construction) in one name
        let detection = score_mesh_name(&tables(), 0, "left_sleeve_seam").unwrap();
        let categories: Vec<GarmentCategory> =
            detection.detections.iter().map(|d| d.category).collect();
        assert!(categories.contains(&GarmentCategory::BodyParts));
        assert!(categories.contains(&GarmentCategory::Construction));
    }

    #[test]
    fn test_mesh_confidence_is_max_not_sum() {
        let detection = score_mesh_name(&tables(), 0, "front_zipper_button").unwrap();
        // Two closure keywords, both boosted by "front"; max, never 1.8
        assert!(detection.confidence <= 1.0);
        let closures = &detection.detections[0];
        assert_eq!(closures.elements.len(), 2);
        assert_eq!(
            closures.category_confidence,
            closures
                .elements
                .iter()
                .map(|e| e.confidence)
                .fold(0.0, f64::max)
        );
    }

    #[test]
    fn test_unnamed_meshes_are_skipped() {
        let scene = Scene {
            meshes: Some(vec![
                crate::scene::SceneMesh { name: None },
                crate::scene::SceneMesh {
                    name: Some(String::new()),
                },
                crate::scene::SceneMesh {
                    name: Some("front_zipper".to_string()),
                },
            ]),
            ..Scene::default()
        };
        let detections = detect_garment_elements(&tables(), &scene);
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].mesh_index, 2);
    }

    #[test]
    fn test_spanish_keywords_match() {
        let detection = score_mesh_name(&tables(), 0, "cremallera_frontal").unwrap();
        let m = &detection.detections[0].elements[0];
        assert_eq!(m.keyword, "cremallera");
        // substring matching: "frontal" also contains "front"
        assert_eq!(m.context_matches, vec!["front", "frontal"]);
        assert!(m.validated);
    }
}
