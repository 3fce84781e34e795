#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz manifest format detection and the normalizer on auto-detected input.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = launchpad_comparer::parsers::FormatDetector::new().detect(s);
        let _ = launchpad_comparer::ManifestNormalizer::default().load_str(s);
    }
});
