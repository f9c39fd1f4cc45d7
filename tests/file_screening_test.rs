//! Integration tests for file-level screening across formats

use std::io::Write;

use stylescan::{
    Adaptability, DesignFormat, Error, Priority, ReviewArea, RiskFlag, analyze_bytes, analyze_path,
};

fn garment_gltf() -> Vec<u8> {
    serde_json::json!({
        "asset": {"version": "2.0", "generator": "CLO Standalone 7.2"},
        "meshes": [
            {"name": "front_zipper_closure"},
            {"name": "left_sleeve_main"}
        ],
        "materials": [
            {"name": "cotton_poplin",
             "pbrMetallicRoughness": {"roughnessFactor": 0.9, "metallicFactor": 0.0}}
        ],
        "nodes": [
            {"name": "size_s", "scale": [0.9, 0.9, 0.9]},
            {"name": "size_m", "scale": [1.0, 1.0, 1.0]},
            {"name": "size_l", "scale": [1.1, 1.1, 1.1]}
        ]
    })
    .to_string()
    .into_bytes()
}

#[test]
fn test_gltf_file_gets_full_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jacket.gltf");
    std::fs::write(&path, garment_gltf()).unwrap();

    let report = analyze_path(&path).unwrap();
    assert_eq!(report.format, DesignFormat::Gltf);
    assert!(report.format.has_full_support());
    assert_eq!(report.size_bytes, garment_gltf().len() as u64);
    assert_eq!(report.container_entries, None);

    let analysis = report.analysis.as_ref().unwrap();
    assert_eq!(analysis.generator, "CLO Standalone 7.2");
    assert_eq!(analysis.size_variations.len(), 3);

    let screening = &report.screening;
    assert_eq!(screening.sizing.size_count, 3);
    assert_eq!(screening.sizing.adaptability, Adaptability::High);
    assert!(screening.sizing.inclusive_design);
    assert!(screening.sizing.grading_system);
    assert_eq!(screening.closures.zipper_count, 1);
    assert!(!screening.risk_flags.contains(&RiskFlag::FormatNotFullySupported));
}

#[test]
fn test_fingerprint_is_stable_sha256_hex() {
    let bytes = garment_gltf();
    let first = analyze_bytes(DesignFormat::Gltf, &bytes).unwrap();
    let second = analyze_bytes(DesignFormat::Gltf, &bytes).unwrap();
    assert_eq!(first.fingerprint, second.fingerprint);
    assert_eq!(first.fingerprint.len(), 64);
    assert!(first.fingerprint.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(first, second);
}

#[test]
fn test_clo_project_counts_entries_and_stubs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dress.zprj");

    let file = std::fs::File::create(&path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    writer.start_file("project.xml", options).unwrap();
    writer.write_all(b"<project/>").unwrap();
    writer.start_file("avatar/body.obj", options).unwrap();
    writer.write_all(b"v 0 0 0\n").unwrap();
    writer.finish().unwrap();

    let report = analyze_path(&path).unwrap();
    assert_eq!(report.format, DesignFormat::CloProject);
    assert_eq!(report.container_entries, Some(2));
    assert!(report.analysis.is_none());

    let screening = &report.screening;
    assert_eq!(screening.inclusivity_score, 25);
    assert_eq!(screening.overall_confidence, 0.2);
    assert_eq!(screening.validation_checklist.len(), 1);
    assert_eq!(screening.validation_checklist[0].priority, Priority::High);
    assert_eq!(screening.validation_checklist[0].area, ReviewArea::FullAnalysis);
    assert!(screening.risk_flags.contains(&RiskFlag::FormatNotFullySupported));
}

#[test]
fn test_closure_counts_are_per_occurrence() {
    // Two button meshes count as two buttons even though the type list
    // deduplicates to a single "button" entry
    let bytes = serde_json::json!({
        "asset": {"version": "2.0", "generator": "CLO Standalone"},
        "meshes": [
            {"name": "front_button_left"},
            {"name": "front_button_right"},
            {"name": "back_zipper"}
        ]
    })
    .to_string()
    .into_bytes();

    let report = analyze_bytes(DesignFormat::Gltf, &bytes).unwrap();
    let closures = &report.screening.closures;
    assert_eq!(closures.button_count, 2);
    assert_eq!(closures.zipper_count, 1);
    assert_eq!(closures.closure_types, vec!["button", "zipper"]);
}

#[test]
fn test_corrupt_container_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.zpac");
    std::fs::write(&path, b"not a zip archive").unwrap();

    let err = analyze_path(&path).unwrap_err();
    assert!(matches!(err, Error::Container(_)));
}

#[test]
fn test_wavefront_obj_gets_stub_outcome() {
    let report = analyze_bytes(DesignFormat::WavefrontObj, b"v 0 0 0\n").unwrap();
    assert_eq!(report.format, DesignFormat::WavefrontObj);
    assert!(report.analysis.is_none());
    assert_eq!(report.container_entries, None);
    assert!(report.screening.risk_flags.contains(&RiskFlag::FormatNotFullySupported));
}

#[test]
fn test_unknown_extension_is_unsupported() {
    let err = analyze_path("design.fbx").unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));

    let err = analyze_path("no_extension").unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = analyze_path("/nonexistent/jacket.gltf").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_malformed_gltf_json_is_parse_error() {
    let err = analyze_bytes(DesignFormat::Gltf, b"{ not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}
