#![no_main]

use libfuzzer_sys::fuzz_target;
use libfuzzer_sys::arbitrary::{Arbitrary, Result, Unstructured};

#[derive(Debug)]
struct FuzzScene {
    mesh_names: Vec<String>,
    node_names: Vec<(String, Option<Vec<f64>>)>,
    material_factors: Vec<(String, f64, f64)>,
}

impl<'a> Arbitrary<'a> for FuzzScene {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let mesh_count = u.int_in_range(0..=20)?;
        let mut mesh_names = Vec::new();
        for _ in 0..mesh_count {
            mesh_names.push(u.arbitrary()?);
        }

        let node_count = u.int_in_range(0..=20)?;
        let mut node_names = Vec::new();
        for _ in 0..node_count {
            let name: String = u.arbitrary()?;
            let scale = if u.arbitrary()? {
                let len = u.int_in_range(0..=4)?;
                let mut components = Vec::new();
                for _ in 0..len {
                    components.push(u.arbitrary()?);
                }
                Some(components)
            } else {
                None
            };
            node_names.push((name, scale));
        }

        let material_count = u.int_in_range(0..=10)?;
        let mut material_factors = Vec::new();
        for _ in 0..material_count {
            material_factors.push((u.arbitrary()?, u.arbitrary()?, u.arbitrary()?));
        }

        Ok(FuzzScene {
            mesh_names,
            node_names,
            material_factors,
        })
    }
}

fuzz_target!(|scene_data: FuzzScene| {
    // Fuzz the analysis pipeline with arbitrary names, scales, and PBR
    // factors, including NaN and infinite values
    let meshes: Vec<serde_json::Value> = scene_data
        .mesh_names
        .iter()
        .map(|n| serde_json::json!({"name": n}))
        .collect();

    let nodes: Vec<serde_json::Value> = scene_data
        .node_names
        .iter()
        .map(|(name, scale)| match scale {
            Some(s) if s.iter().all(|c| c.is_finite()) => {
                serde_json::json!({"name": name, "scale": s})
            }
            _ => serde_json::json!({"name": name}),
        })
        .collect();

    let materials: Vec<serde_json::Value> = scene_data
        .material_factors
        .iter()
        .map(|(name, roughness, metallic)| {
            let mut pbr = serde_json::Map::new();
            if roughness.is_finite() {
                pbr.insert("roughnessFactor".to_string(), serde_json::json!(roughness));
            }
            if metallic.is_finite() {
                pbr.insert("metallicFactor".to_string(), serde_json::json!(metallic));
            }
            serde_json::json!({"name": name, "pbrMetallicRoughness": pbr})
        })
        .collect();

    let document = serde_json::json!({
        "asset": {"version": "2.0", "generator": "fuzz"},
        "meshes": meshes,
        "materials": materials,
        "nodes": nodes
    });

    if let Ok(scene) = serde_json::from_value::<stylescan::Scene>(document) {
        let _ = stylescan::analyze_scene(&scene);
    }
});
