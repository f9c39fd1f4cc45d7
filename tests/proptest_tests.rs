//! Property-based tests over the public analysis API

use proptest::prelude::*;
use stylescan::{Scene, analyze_scene};

fn scene_with_mesh_names(names: &[String]) -> Scene {
    let meshes: Vec<serde_json::Value> = names
        .iter()
        .map(|n| serde_json::json!({"name": n}))
        .collect();
    serde_json::from_value(serde_json::json!({
        "asset": {"version": "2.0", "generator": "CLO Standalone"},
        "meshes": meshes
    }))
    .expect("test scene deserializes")
}

proptest! {
    #[test]
    fn prop_confidences_stay_in_unit_range(
        names in proptest::collection::vec("[a-z_ ]{0,40}", 0..8)
    ) {
        let scene = scene_with_mesh_names(&names);
        let report = analyze_scene(&scene).unwrap();

        prop_assert!(report.overall_confidence >= 0.0);
        prop_assert!(report.overall_confidence <= 1.0);
        for mesh in &report.garment_elements {
            prop_assert!(mesh.confidence > 0.5 && mesh.confidence <= 1.0);
            for detection in &mesh.detections {
                prop_assert!(!detection.elements.is_empty());
                for element in &detection.elements {
                    prop_assert!(element.confidence > 0.5 && element.confidence <= 1.0);
                }
            }
        }
        for variation in &report.size_variations {
            prop_assert!(variation.confidence > 0.5 && variation.confidence <= 1.0);
        }
    }

    #[test]
    fn prop_analysis_is_deterministic(
        names in proptest::collection::vec("[a-z_ ]{0,40}", 0..8)
    ) {
        let scene = scene_with_mesh_names(&names);
        let first = analyze_scene(&scene).unwrap();
        let second = analyze_scene(&scene).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_exclusion_terms_never_raise_confidence(
        keyword in prop_oneof![Just("zipper"), Just("button"), Just("snap"), Just("velcro")],
        exclusion in prop_oneof![Just("texture"), Just("decoration"), Just("logo")],
    ) {
        let plain = scene_with_mesh_names(&[keyword.to_string()]);
        let excluded = scene_with_mesh_names(&[format!("{} {}", keyword, exclusion)]);

        let plain_report = analyze_scene(&plain).unwrap();
        let excluded_report = analyze_scene(&excluded).unwrap();

        let plain_conf = plain_report.garment_elements.first().map(|m| m.confidence);
        let excluded_conf = excluded_report.garment_elements.first().map(|m| m.confidence);

        // The bare keyword always lands at 0.8; with an exclusion term in
        // the name the hit drops to 0.5 and is not retained at all
        prop_assert_eq!(plain_conf, Some(0.8));
        prop_assert_eq!(excluded_conf, None);
    }

    #[test]
    fn prop_context_terms_raise_closure_confidence(
        keyword in prop_oneof![Just("zipper"), Just("button"), Just("snap")],
        context in prop_oneof![Just("front"), Just("side"), Just("pocket")],
    ) {
        let plain = scene_with_mesh_names(&[keyword.to_string()]);
        let contextual = scene_with_mesh_names(&[format!("{} {}", context, keyword)]);

        let plain_report = analyze_scene(&plain).unwrap();
        let contextual_report = analyze_scene(&contextual).unwrap();

        let closure_confidence = |report: &stylescan::AnalysisReport| {
            report
                .garment_elements
                .iter()
                .flat_map(|m| &m.detections)
                .filter(|d| d.category == stylescan::GarmentCategory::Closures)
                .map(|d| d.category_confidence)
                .fold(0.0f64, f64::max)
        };

        prop_assert!(closure_confidence(&contextual_report) > closure_confidence(&plain_report));
    }

    #[test]
    fn prop_vendor_extension_pins_confidence(
        roughness in 0.0f64..1.0,
        metallic in 0.0f64..1.0,
        warp in 0.0f64..400_000.0,
    ) {
        let scene: Scene = serde_json::from_value(serde_json::json!({
            "materials": [
                {"name": "fabric",
                 "pbrMetallicRoughness": {
                     "roughnessFactor": roughness, "metallicFactor": metallic},
                 "extensions": {"CLO_material_properties": {
                     "Stretch-Warp": warp, "Stretch-Weft": 0.0,
                     "Weight": 200.0, "Thickness": 0.5}}}
            ]
        }))
        .unwrap();

        let report = analyze_scene(&scene).unwrap();
        let material = &report.materials["fabric"];
        prop_assert!(material.confidence >= 0.95);
        let fabric = material.properties.vendor_fabric.as_ref().unwrap();
        prop_assert_eq!(fabric.has_stretch, warp > 100_000.0);
    }

    #[test]
    fn prop_scale_boost_never_exceeds_one(
        sx in 0.1f64..3.0,
        sy in 0.1f64..3.0,
        sz in 0.1f64..3.0,
    ) {
        let scene: Scene = serde_json::from_value(serde_json::json!({
            "nodes": [{"name": "size_m", "scale": [sx, sy, sz]}]
        }))
        .unwrap();

        let report = analyze_scene(&scene).unwrap();
        prop_assert_eq!(report.size_variations.len(), 1);
        let variation = &report.size_variations[0];
        prop_assert_eq!(variation.confidence, 1.0);
        prop_assert!(variation.has_scale());
    }
}
