//! Accessibility assessment of detected closures
//!
//! A pure lookup over the closure accessibility scale: every retained
//! closure-category element match becomes a feature carrying the fixed
//! friendliness score for its closure type. Keywords the scale does not
//! cover score zero and are dropped rather than retained with a zero.

use crate::patterns::{GarmentCategory, PatternTables};
use crate::report::{AccessibilityFeature, MeshDetection};

/// Map retained closure detections to accessibility features
pub(crate) fn evaluate(
    tables: &PatternTables,
    garment_elements: &[MeshDetection],
) -> Vec<AccessibilityFeature> {
    let mut features = Vec::new();

    for mesh in garment_elements {
        for detection in &mesh.detections {
            if detection.category != GarmentCategory::Closures {
                continue;
            }
            for element in &detection.elements {
                let score = tables.closure_accessibility(&element.keyword);
                if score > 0.0 {
                    features.push(AccessibilityFeature {
                        closure_type: element.keyword.clone(),
                        mesh_name: mesh.mesh_name.clone(),
                        accessibility_score: score,
                        confidence: element.confidence,
                        validated: element.validated,
                    });
                }
            }
        }
    }

    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{CategoryDetection, ElementMatch};

    fn mesh_with_closures(keywords: &[&str]) -> MeshDetection {
        let elements: Vec<ElementMatch> = keywords
            .iter()
            .map(|kw| ElementMatch {
                keyword: kw.to_string(),
                confidence: 0.8,
                context_matches: vec!["front".to_string()],
                exclusion_matches: Vec::new(),
                validated: true,
            })
            .collect();
        MeshDetection {
            mesh_index: 0,
            mesh_name: "front_panel".to_string(),
            detections: vec![CategoryDetection {
                category: GarmentCategory::Closures,
                elements,
                category_confidence: 0.8,
            }],
            confidence: 0.8,
        }
    }

    #[test]
    fn test_scored_closures_become_features() {
        let tables = PatternTables::new();
        let meshes = vec![mesh_with_closures(&["velcro", "zipper"])];
        let features = evaluate(&tables, &meshes);
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].closure_type, "velcro");
        assert_eq!(features[0].accessibility_score, 0.9);
        assert_eq!(features[1].accessibility_score, 0.6);
        assert!(features.iter().all(|f| f.validated));
    }

    #[test]
    fn test_zero_scored_keywords_are_dropped() {
        let tables = PatternTables::new();
        // "closure" and "fastener" trigger detection but carry no
        // accessibility information
        let meshes = vec![mesh_with_closures(&["closure", "fastener"])];
        assert!(evaluate(&tables, &meshes).is_empty());
    }

    #[test]
    fn test_non_closure_categories_are_ignored() {
        let tables = PatternTables::new();
        let mesh = MeshDetection {
            mesh_index: 0,
            mesh_name: "sleeve".to_string(),
            detections: vec![CategoryDetection {
                category: GarmentCategory::BodyParts,
                elements: vec![ElementMatch {
                    keyword: "sleeve".to_string(),
                    confidence: 0.8,
                    context_matches: Vec::new(),
                    exclusion_matches: Vec::new(),
                    validated: false,
                }],
                category_confidence: 0.8,
            }],
            confidence: 0.8,
        };
        assert!(evaluate(&tables, &[mesh]).is_empty());
    }
}
