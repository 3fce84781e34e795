//! Property-based tests for manifest readers and ticket extraction.
//!
//! Readers must never panic on arbitrary input, whatever they return.

use launchpad_comparer::parsers::{FormatDetector, ManifestFormat, ManifestNormalizer, MavenId};
use launchpad_comparer::tickets::TicketPattern;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn load_str_doesnt_panic(s in "\\PC{0,2000}") {
        let _ = ManifestNormalizer::default().load_str(&s);
    }

    #[test]
    fn detect_doesnt_panic(s in "\\PC{0,2000}") {
        let _ = FormatDetector::new().detect(&s);
    }

    #[test]
    fn feature_like_input_doesnt_panic(
        ids in prop::collection::vec("[a-z.:]{0,40}", 0..10),
    ) {
        let bundles: Vec<String> = ids.iter().map(|id| format!("\"{id}\"")).collect();
        let input = format!("{{\"bundles\": [{}]}}", bundles.join(","));
        let _ = ManifestNormalizer::new(ManifestFormat::Feature).load_str(&input);
    }

    #[test]
    fn provisioning_like_input_doesnt_panic(
        header in "\\[[a-z]{0,12}( [a-zA-Z]{1,10}=[a-z0-9_,]{0,10}){0,3}\\]",
        lines in prop::collection::vec("\\PC{0,80}", 0..20),
    ) {
        let input = format!("[feature name=x]\n{header}\n{}", lines.join("\n"));
        let _ = ManifestNormalizer::new(ManifestFormat::Provisioning).load_str(&input);
    }

    #[test]
    fn maven_ids_dont_panic(s in "\\PC{0,200}") {
        let _ = MavenId::parse_colon(&s);
        let _ = MavenId::parse_url(&s);
    }

    #[test]
    fn well_formed_feature_bundles_all_load(
        bundles in prop::collection::btree_map("[a-z]{1,12}", "[0-9]{1,2}\\.[0-9]{1,2}", 1..20),
    ) {
        let ids: Vec<String> = bundles
            .iter()
            .map(|(name, version)| format!("\"org.example:{name}:{version}\""))
            .collect();
        let input = format!("{{\"bundles\": [{}]}}", ids.join(","));

        let snapshot = ManifestNormalizer::default().load_str(&input).expect("valid feature");
        prop_assert_eq!(snapshot.len(), bundles.len());
        for record in snapshot.records() {
            prop_assert_eq!(Some(&record.version), bundles.get(&record.identity.name));
        }
    }

    #[test]
    fn leading_ticket_is_extracted(number in 1u32..100_000, rest in "( [^\\n]{0,60})?") {
        let subject = format!("SLING-{number}{rest}");
        let ticket = TicketPattern::default().extract(&subject);
        let expected = format!("SLING-{number}");
        prop_assert_eq!(ticket.map(|t| t.id), Some(expected));
    }

    #[test]
    fn non_leading_ticket_is_ignored(prefix in "[a-z ]{1,20}", number in 1u32..100_000) {
        let subject = format!("{prefix}SLING-{number} fix");
        prop_assert!(TicketPattern::default().extract(&subject).is_none());
    }

    #[test]
    fn extraction_preserves_order_and_duplicates(
        numbers in prop::collection::vec(prop::option::of(1u32..50), 0..30),
    ) {
        let subjects: Vec<String> = numbers
            .iter()
            .map(|n| n.map_or_else(|| "cleanup".to_string(), |n| format!("SLING-{n} change")))
            .collect();
        let expected: Vec<String> = numbers.iter().flatten().map(|n| format!("SLING-{n}")).collect();

        let ids: Vec<String> = TicketPattern::default()
            .extract_all(&subjects)
            .into_iter()
            .map(|t| t.id)
            .collect();
        prop_assert_eq!(ids, expected);
    }
}

#[test]
fn ticket_examples() {
    let pattern = TicketPattern::default();
    assert_eq!(
        pattern.extract("SLING-4521 Fix race condition").map(|t| t.id),
        Some("SLING-4521".to_string())
    );
    assert!(pattern.extract("Minor cleanup").is_none());
    assert_eq!(
        pattern.extract("SLING-99 ").map(|t| t.id),
        Some("SLING-99".to_string())
    );
}
