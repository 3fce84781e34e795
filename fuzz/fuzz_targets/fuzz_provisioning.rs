#![no_main]
use launchpad_comparer::parsers::{ManifestReader, ProvisioningReader};
use libfuzzer_sys::fuzz_target;

/// Fuzz the provisioning model reader.
///
/// Prefixes input with a feature and artifacts header so artifact lines and
/// variable substitution are reached.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let reader = ProvisioningReader::new();
        let _ = reader.read_str(s);

        if s.len() < 10_000 {
            let wrapped = format!("[feature name=fuzz]\n[variables]\n  v=1\n[artifacts]\n{s}");
            let _ = reader.read_str(&wrapped);
        }
    }
});
