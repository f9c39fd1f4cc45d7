#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz the file-level screening entry point across all formats
    // For ZIP-based formats this exercises archive opening on arbitrary bytes
    let _ = stylescan::analyze_bytes(stylescan::DesignFormat::Gltf, data);
    let _ = stylescan::analyze_bytes(stylescan::DesignFormat::CloProject, data);
    let _ = stylescan::analyze_bytes(stylescan::DesignFormat::WavefrontObj, data);
});
