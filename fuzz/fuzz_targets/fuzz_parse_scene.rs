#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz glTF scene deserialization
    // This tests the JSON parsing pipeline with malformed and adversarial input
    let _ = stylescan::Scene::from_slice(data);
});
