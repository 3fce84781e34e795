//! End-to-end report tests with in-memory change-log and tracker doubles.

use launchpad_comparer::changelog::ChangeLogSource;
use launchpad_comparer::diff::DeltaEngine;
use launchpad_comparer::error::{LaunchpadError, Result};
use launchpad_comparer::model::{
    ArtifactIdentity, ArtifactRecord, CommitEntry, ManifestSnapshot, TicketReference,
    TicketSummary, VersionChange,
};
use launchpad_comparer::reports::{
    Attribution, JsonReporter, PlaintextReporter, ReportEmitter, ReportGenerator, ReportMetadata,
};
use launchpad_comparer::tickets::{IssueTracker, NoOpTracker, TicketPattern, TicketResolver};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

const GROUP: &str = "org.apache.sling";

fn record(name: &str, version: &str) -> ArtifactRecord {
    ArtifactRecord::new(ArtifactIdentity::new(GROUP, name, None, None), version)
}

fn snapshot(records: &[(&str, &str)]) -> ManifestSnapshot {
    records.iter().map(|(n, v)| record(n, v)).collect()
}

/// Change logs keyed by `name:from:to`; anything else has no repository.
#[derive(Default)]
struct ScriptedLog {
    logs: HashMap<String, Vec<CommitEntry>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedLog {
    fn with(mut self, name: &str, from: &str, to: &str, subjects: &[&str]) -> Self {
        self.logs.insert(
            format!("{name}:{from}:{to}"),
            subjects.iter().map(ToString::to_string).collect(),
        );
        self
    }
}

impl ChangeLogSource for ScriptedLog {
    fn changes(&self, name: &str, from: &str, to: &str) -> Result<Vec<CommitEntry>> {
        self.calls.borrow_mut().push(name.to_string());
        self.logs
            .get(&format!("{name}:{from}:{to}"))
            .cloned()
            .ok_or_else(|| LaunchpadError::TagNotFound {
                tag: format!("{name}-{from}"),
                path: PathBuf::from("/checkout").join(name.replace('.', "-")),
            })
    }
}

/// Tracker answering from a fixed table and recording each query.
struct TableTracker {
    known: HashMap<&'static str, &'static str>,
    queries: RefCell<Vec<Vec<String>>>,
}

impl TableTracker {
    fn new(known: &[(&'static str, &'static str)]) -> Self {
        Self {
            known: known.iter().copied().collect(),
            queries: RefCell::new(Vec::new()),
        }
    }
}

impl IssueTracker for TableTracker {
    fn lookup(&self, ids: &[TicketReference]) -> Result<Vec<TicketSummary>> {
        self.queries
            .borrow_mut()
            .push(ids.iter().map(|t| t.id.clone()).collect());
        Ok(ids
            .iter()
            .filter_map(|t| {
                self.known
                    .get(t.id.as_str())
                    .map(|summary| TicketSummary::new(t.id.clone(), *summary))
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "table"
    }
}

fn scenario() -> (ManifestSnapshot, ManifestSnapshot) {
    let from = snapshot(&[("sling-api", "2.0"), ("sling-core", "1.0")]);
    let to = snapshot(&[
        ("sling-api", "2.1"),
        ("sling-core", "1.0"),
        ("sling-auth", "1.0"),
    ]);
    (from, to)
}

#[test]
fn test_end_to_end_scenario() {
    let (from, to) = scenario();
    let delta = DeltaEngine::new().diff(&from, &to);

    let log = ScriptedLog::default().with(
        "sling-api",
        "2.0",
        "2.1",
        &["SLING-11 Add resource API", "Minor cleanup", "SLING-10 Fix NPE"],
    );
    let tracker = TableTracker::new(&[
        ("SLING-10", "NPE when resolving resources"),
        ("SLING-11", "Add resource API"),
    ]);
    let emitter = ReportEmitter::new(
        GROUP,
        &log,
        TicketResolver::new(TicketPattern::default(), &tracker),
    );

    let report = emitter.build(&delta, ReportMetadata::new("1", "2", GROUP)).expect("build");

    assert_eq!(report.added, vec![record("sling-auth", "1.0")]);
    assert!(report.removed.is_empty());
    assert_eq!(report.changed.len(), 1);

    let api = &report.changed[0];
    assert_eq!(api.identity.name, "sling-api");
    assert_eq!(api.change, VersionChange::new("2.0", "2.1"));
    assert_eq!(
        api.attribution,
        Attribution::Resolved {
            commits: 3,
            tickets: vec![
                TicketSummary::new("SLING-11", "Add resource API"),
                TicketSummary::new("SLING-10", "NPE when resolving resources"),
            ],
        }
    );

    // only the changed artifact was looked up, with ids in log order
    assert_eq!(*log.calls.borrow(), vec!["sling-api"]);
    assert_eq!(
        *tracker.queries.borrow(),
        vec![vec!["SLING-11".to_string(), "SLING-10".to_string()]]
    );

    insta::assert_json_snapshot!(report.summary, @r###"
    {
      "added": 1,
      "removed": 0,
      "changed": 1
    }
    "###);
}

#[test]
fn test_plaintext_layout() {
    let (from, to) = scenario();
    let delta = DeltaEngine::new().diff(&from, &to);
    let log = ScriptedLog::default().with("sling-api", "2.0", "2.1", &["SLING-10 Fix NPE"]);
    let tracker = TableTracker::new(&[("SLING-10", "NPE when resolving resources")]);
    let emitter = ReportEmitter::new(
        GROUP,
        log,
        TicketResolver::new(TicketPattern::default(), tracker),
    );

    let mut out = Vec::new();
    emitter
        .emit(
            &delta,
            ReportMetadata::new("1", "2", GROUP),
            &PlaintextReporter::new().no_color(),
            &mut out,
        )
        .expect("emit");
    let text = String::from_utf8(out).expect("utf-8");

    let expected = format!(
        "Added\n    {:<30} : {:<55} : 1.0\nRemoved\nChanged\n    {:<30} : {:<55} : 2.0 -> 2.1\n        {:<10} - NPE when resolving resources\n",
        GROUP, "sling-auth", GROUP, "sling-api", "SLING-10"
    );
    assert_eq!(text, expected);
}

#[test]
fn test_duplicate_ticket_ids_are_kept() {
    let from = snapshot(&[("sling-api", "2.0")]);
    let to = snapshot(&[("sling-api", "2.1")]);
    let delta = DeltaEngine::new().diff(&from, &to);
    let log = ScriptedLog::default().with(
        "sling-api",
        "2.0",
        "2.1",
        &["SLING-7 follow-up", "SLING-7 first attempt"],
    );
    let tracker = TableTracker::new(&[("SLING-7", "Flaky startup")]);
    let emitter = ReportEmitter::new(
        GROUP,
        &log,
        TicketResolver::new(TicketPattern::default(), &tracker),
    );

    emitter.build(&delta, ReportMetadata::new("1", "2", GROUP)).expect("build");

    assert_eq!(
        *tracker.queries.borrow(),
        vec![vec!["SLING-7".to_string(), "SLING-7".to_string()]]
    );
}

#[test]
fn test_missing_tag_does_not_affect_other_artifacts() {
    let from = snapshot(&[("sling-api", "2.0"), ("sling-engine", "1.0")]);
    let to = snapshot(&[("sling-api", "2.1"), ("sling-engine", "1.1")]);
    let delta = DeltaEngine::new().diff(&from, &to);
    let log = ScriptedLog::default().with("sling-api", "2.0", "2.1", &["SLING-1 fix"]);
    let emitter = ReportEmitter::new(
        GROUP,
        &log,
        TicketResolver::new(TicketPattern::default(), NoOpTracker),
    );

    let report = emitter.build(&delta, ReportMetadata::new("1", "2", GROUP)).expect("build");

    assert_eq!(report.changed.len(), 2);
    assert_eq!(
        report.changed[0].attribution,
        Attribution::IdsOnly {
            commits: 1,
            ids: vec!["SLING-1".to_string()],
        }
    );
    match &report.changed[1].attribution {
        Attribution::Failed { reason } => assert!(reason.contains("sling-engine-1.0")),
        other => panic!("expected Failed, got {other:?}"),
    }
    assert_eq!(report.failed_attributions(), 1);
}

#[test]
fn test_third_party_changes_are_not_looked_up() {
    let identity = ArtifactIdentity::new("org.apache.felix", "org.apache.felix.scr", None, None);
    let from: ManifestSnapshot = [ArtifactRecord::new(identity.clone(), "2.1")].into_iter().collect();
    let to: ManifestSnapshot = [ArtifactRecord::new(identity, "2.2")].into_iter().collect();
    let delta = DeltaEngine::new().diff(&from, &to);
    let log = ScriptedLog::default();
    let emitter = ReportEmitter::new(
        GROUP,
        &log,
        TicketResolver::new(TicketPattern::default(), NoOpTracker),
    );

    let report = emitter.build(&delta, ReportMetadata::new("1", "2", GROUP)).expect("build");

    assert_eq!(report.changed[0].attribution, Attribution::NotFirstParty);
    assert!(log.calls.borrow().is_empty());
}

#[test]
fn test_json_report_shape() {
    let (from, to) = scenario();
    let delta = DeltaEngine::new().diff(&from, &to);
    let emitter = ReportEmitter::new(
        GROUP,
        ScriptedLog::default(),
        TicketResolver::new(TicketPattern::default(), NoOpTracker),
    );
    let report = emitter.build(&delta, ReportMetadata::new("1", "2", GROUP)).expect("build");

    let json = JsonReporter::new().generate(&report).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["metadata"]["from_version"], "1");
    assert_eq!(value["summary"]["added"], 1);
    assert_eq!(value["added"][0]["identity"]["name"], "sling-auth");
    assert_eq!(value["added"][0]["identity"]["type"], "jar");
    assert_eq!(value["changed"][0]["attribution"]["status"], "failed");
}
