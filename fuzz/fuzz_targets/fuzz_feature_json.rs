#![no_main]
use launchpad_comparer::parsers::{FeatureReader, ManifestReader};
use libfuzzer_sys::fuzz_target;

/// Fuzz the OSGi feature JSON reader.
///
/// Also wraps the input as a single bundle id to reach the Maven id parser.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let reader = FeatureReader::new();
        let _ = reader.read_str(s);

        if s.len() < 10_000 {
            if let Ok(id) = serde_json::to_string(s) {
                let _ = reader.read_str(&format!("{{\"bundles\": [{id}]}}"));
            }
        }
    }
});
