//! End-to-end import-graph scenarios: graph build, cycles, coupling,
//! role classification and layering violations on small hexagonal layouts.

use hexarch_analysis::facts::{FactSnapshot, FileFacts, FunctionFacts, ParamFacts};
use hexarch_analysis::structural::coupling::{
    abstractness, coupling_outliers, detect_cycles, instability, ImportGraph,
};
use hexarch_analysis::structural::layering::{classify_packages, total_violations, ViolationKind};
use hexarch_analysis::ArchitectureAnalyzer;
use hexarch_core::config::ArchitectureConfig;
use hexarch_core::{ArchRole, HexarchConfig};

const ROOT: &str = "example.com/svc";

fn p(rel: &str) -> String {
    format!("{ROOT}/{rel}")
}

fn file(imports: &[&str], interfaces: usize, structs: usize) -> FileFacts {
    FileFacts {
        imports: imports.iter().map(|i| p(i)).collect(),
        interfaces: (0..interfaces).map(|i| format!("I{i}")).collect(),
        structs: (0..structs).map(|i| format!("S{i}")).collect(),
        ..Default::default()
    }
}

fn hexagon() -> FactSnapshot {
    FactSnapshot::new(ROOT)
        .with_file("domain/user.go", file(&[], 2, 0))
        .with_file("app/service.go", file(&["domain"], 0, 1))
        .with_file("adapters/inbound/http/handler.go", file(&["app"], 0, 0))
}

// ---- Clean hexagon ----

#[test]
fn clean_hexagon_classifies_and_has_no_violations() {
    let snapshot = hexagon();
    let graph = ImportGraph::from_snapshot(&snapshot);

    assert_eq!(abstractness(&graph, &p("domain")), 1.0);
    assert_eq!(instability(&graph, &p("domain")), 0.0);
    assert!(detect_cycles(&graph).is_empty());

    let packages = classify_packages(&graph, &ArchitectureConfig::default());
    assert_eq!(packages[&p("domain")].role, ArchRole::Core);
    assert_eq!(packages[&p("app")].role, ArchRole::Orchestrator);
    assert_eq!(packages[&p("adapters/inbound/http")].role, ArchRole::Adapter);
    assert_eq!(total_violations(&packages), 0);
}

#[test]
fn domain_importing_adapter_is_one_violation() {
    let snapshot = hexagon().with_file("domain/user.go", file(&["adapters/outbound/db"], 2, 0));
    let graph = ImportGraph::from_snapshot(&snapshot);
    let packages = classify_packages(&graph, &ArchitectureConfig::default());

    assert_eq!(total_violations(&packages), 1);
    let domain = &packages[&p("domain")];
    assert_eq!(domain.violations.len(), 1);
    assert_eq!(domain.violations[0].reason, "imports adapter");
    assert_eq!(domain.violations[0].kind, ViolationKind::ImportsAdapter);
}

#[test]
fn inbound_to_outbound_is_sanctioned_but_not_the_reverse() {
    let forward = FactSnapshot::new(ROOT)
        .with_file("adapters/inbound/http/h.go", file(&["adapters/outbound/db"], 0, 1))
        .with_file("adapters/outbound/db/repo.go", file(&[], 0, 1));
    let graph = ImportGraph::from_snapshot(&forward);
    let packages = classify_packages(&graph, &ArchitectureConfig::default());
    assert_eq!(total_violations(&packages), 0);

    let reverse = FactSnapshot::new(ROOT)
        .with_file("adapters/inbound/http/h.go", file(&[], 0, 1))
        .with_file("adapters/outbound/db/repo.go", file(&["adapters/inbound/http"], 0, 1));
    let graph = ImportGraph::from_snapshot(&reverse);
    let packages = classify_packages(&graph, &ArchitectureConfig::default());
    assert_eq!(total_violations(&packages), 1);
    let db = &packages[&p("adapters/outbound/db")];
    assert_eq!(db.violations[0].kind, ViolationKind::CrossAdapter);
    assert_eq!(db.violations[0].reason, "imports http");
}

#[test]
fn two_cycle_marks_both_members() {
    let snapshot = FactSnapshot::new(ROOT)
        .with_file("a/a.go", file(&["b"], 0, 0))
        .with_file("b/b.go", file(&["a"], 0, 0));
    let graph = ImportGraph::from_snapshot(&snapshot);

    assert_eq!(detect_cycles(&graph), vec![vec![p("a"), p("b")]]);

    let packages = classify_packages(&graph, &ArchitectureConfig::default());
    for pkg in [p("a"), p("b")] {
        let violations = &packages[&pkg].violations;
        assert_eq!(violations.len(), 1, "{pkg}");
        assert_eq!(violations[0].reason, "in import cycle");
        assert_eq!(violations[0].target, None);
    }
}

#[test]
fn three_cycle_is_canonical_from_any_start() {
    let snapshot = FactSnapshot::new(ROOT)
        .with_file("c/c.go", file(&["a"], 0, 0))
        .with_file("b/b.go", file(&["c"], 0, 0))
        .with_file("a/a.go", file(&["b"], 0, 0))
        .with_file("z/z.go", file(&["b"], 0, 0));
    let cycles = detect_cycles(&ImportGraph::from_snapshot(&snapshot));
    assert_eq!(cycles, vec![vec![p("a"), p("b"), p("c")]]);
}

// ---- Coupling ----

#[test]
fn outliers_need_a_baseline() {
    // Most packages import nothing: median Ce is 0.
    let mut snapshot = FactSnapshot::new(ROOT).with_file(
        "hub/hub.go",
        file(&["l1", "l2", "l3", "l4", "l5"], 0, 1),
    );
    for leaf in ["l1", "l2", "l3", "l4", "l5"] {
        snapshot = snapshot.with_file(&format!("{leaf}/x.go"), file(&[], 0, 1));
    }
    let graph = ImportGraph::from_snapshot(&snapshot);
    assert!(coupling_outliers(&graph, 2.0).is_empty());
}

#[test]
fn outliers_reported_against_median() {
    let mut snapshot = FactSnapshot::new(ROOT)
        .with_file("hub/hub.go", file(&["a", "b", "c", "d", "e"], 0, 1));
    for (pkg, next) in [("a", "b"), ("b", "c"), ("c", "d"), ("d", "e"), ("e", "a")] {
        snapshot = snapshot.with_file(&format!("{pkg}/x.go"), file(&[next], 0, 1));
    }
    let graph = ImportGraph::from_snapshot(&snapshot);
    let outliers = coupling_outliers(&graph, 2.0);
    assert_eq!(outliers.len(), 1);
    assert_eq!(outliers[0].package, p("hub"));
    assert_eq!(outliers[0].efferent, 5);
    assert_eq!(outliers[0].median, 1.0);
}

// ---- Builder edge cases ----

#[test]
fn stub_targets_participate_in_metrics() {
    let snapshot = FactSnapshot::new(ROOT).with_file("app/a.go", file(&["vendor/lib"], 0, 1));
    let graph = ImportGraph::from_snapshot(&snapshot);
    let stub = graph.get(&p("vendor/lib")).unwrap();
    assert!(stub.is_stub());
    assert_eq!(stub.imported_by().len(), 1);
    assert_eq!(instability(&graph, &p("vendor/lib")), 0.0);
    assert_eq!(instability(&graph, &p("app")), 1.0);
}

#[test]
fn entry_point_and_io_signals_drive_roles() {
    let main_fn = FunctionFacts {
        name: "main".into(),
        ..Default::default()
    };
    let handler = FunctionFacts {
        name: "Serve".into(),
        exported: true,
        receiver: "*Server".into(),
        params: vec![ParamFacts {
            name: "w".into(),
            type_name: "http.ResponseWriter".into(),
        }],
    };
    let snapshot = FactSnapshot::new(ROOT)
        .with_file(
            "server/main.go",
            FileFacts {
                imports: vec!["net/http".into(), p("web")],
                functions: vec![main_fn],
                ..Default::default()
            },
        )
        .with_file(
            "web/server.go",
            FileFacts {
                imports: vec!["github.com/gin-gonic/gin".into()],
                structs: vec!["Server".into()],
                functions: vec![handler],
                ..Default::default()
            },
        );
    let graph = ImportGraph::from_snapshot(&snapshot);
    let packages = classify_packages(&graph, &ArchitectureConfig::default());

    // Entry point (0.95) outranks the single adapter vote from `net/http`.
    assert_eq!(packages[&p("server")].role, ArchRole::EntryPoint);
    assert_eq!(packages[&p("web")].role, ArchRole::Adapter);
}

#[test]
fn composition_root_may_wire_adapters() {
    let snapshot = FactSnapshot::new(ROOT)
        .with_file("adapters/wiring/w.go", file(&["adapters/db", "adapters/http"], 0, 1))
        .with_file("adapters/db/db.go", file(&[], 0, 1))
        .with_file("adapters/http/h.go", file(&[], 0, 1));
    let graph = ImportGraph::from_snapshot(&snapshot);

    let packages = classify_packages(&graph, &ArchitectureConfig::default());
    assert_eq!(packages[&p("adapters/wiring")].violations.len(), 2);

    let config = ArchitectureConfig {
        composition_roots: vec![p("adapters/wiring")],
        ..Default::default()
    };
    let packages = classify_packages(&graph, &config);
    assert_eq!(total_violations(&packages), 0);
}

// ---- Analyzer ----

#[test]
fn analyzer_report_is_complete_and_deterministic() {
    hexarch_core::tracing::init_tracing();
    let snapshot = hexagon()
        .with_file("a/a.go", file(&["b"], 0, 0))
        .with_file("b/b.go", file(&["a"], 0, 0));
    let analyzer = ArchitectureAnalyzer::new(HexarchConfig::default());

    let first = analyzer.analyze(&snapshot);
    let second = analyzer.analyze(&snapshot);

    assert_eq!(first.module_root, ROOT);
    assert_eq!(first.package_count, 5);
    assert_eq!(first.cycles.len(), 1);
    assert_eq!(first.cycle_groups.len(), 1);
    assert_eq!(first.metrics.len(), 5);
    assert_eq!(first.total_violations, 2);
    assert!(first.has_cycles());
    assert_eq!(first.violating_packages().count(), 2);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn configured_module_root_overrides_snapshot() {
    let snapshot = FactSnapshot {
        module_root: "wrong.example/x".into(),
        ..hexagon()
    };
    let mut config = HexarchConfig::default();
    config.architecture.module_root = Some(ROOT.to_string());

    let report = ArchitectureAnalyzer::new(config).analyze(&snapshot);
    assert_eq!(report.module_root, ROOT);
    assert_eq!(report.package_count, 3);
}

#[test]
fn empty_inputs_yield_empty_report() {
    let analyzer = ArchitectureAnalyzer::default();
    let report = analyzer.analyze(&FactSnapshot::new(""));
    assert!(report.is_empty());
    assert_eq!(report.average_distance, 0.0);

    let report = analyzer.analyze(&FactSnapshot::new(ROOT));
    assert!(report.is_empty());
    assert_eq!(report.total_violations, 0);
}

#[test]
fn snapshot_from_json_feeds_the_analyzer() {
    let json = r#"{
        "module_root": "example.com/svc",
        "files": {
            "domain/user.go": { "interfaces": ["Repo", "Clock"] },
            "app/service.go": { "imports": ["example.com/svc/domain"], "structs": ["Service"] },
            "app/service_test.go": { "imports": ["example.com/svc/adapters/db"] }
        }
    }"#;
    let snapshot = FactSnapshot::from_json(json).unwrap();
    let report = ArchitectureAnalyzer::default().analyze(&snapshot);
    assert_eq!(report.package_count, 2);
    assert_eq!(report.packages[&p("domain")].role, ArchRole::Core);
}
