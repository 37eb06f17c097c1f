use super::support::{instant_builder, FakeProvider};
use health_dashboard::core::system_monitor::{AlertKind, CpuReading, MemoryReading};
use health_dashboard::core::{Config, Monitor};
use tempfile::TempDir;

fn monitor_with(provider: FakeProvider, config: Config) -> Monitor {
    let temp = TempDir::new().unwrap();
    Monitor::new(
        config,
        Box::new(provider),
        instant_builder(),
        &temp.path().join("os-release"),
    )
}

#[test]
fn test_report_raises_alerts() {
    let provider = FakeProvider {
        cpu: CpuReading {
            usage_percent: 81.0,
            ..Default::default()
        },
        memory: MemoryReading {
            percent: 85.0,
            ..Default::default()
        },
        ..FakeProvider::with_facts()
    }
    .mount("/", Some((100, 95)))
    .mount("/boot", Some((100, 10)));

    let mut monitor = monitor_with(provider, Config::default());
    let report = monitor.report(5).unwrap();

    assert_eq!(report.alerts.len(), 2);
    assert!(report.alerts.contains(&AlertKind::Cpu));
    assert!(!report.alerts.contains(&AlertKind::Memory));
    assert!(report.alerts.contains(&AlertKind::Disk("/".to_string())));
}

#[test]
fn test_report_uses_configured_thresholds() {
    let provider = FakeProvider {
        cpu: CpuReading {
            usage_percent: 50.0,
            ..Default::default()
        },
        ..FakeProvider::with_facts()
    };

    let mut config = Config::default();
    config.alerts.cpu_threshold = 40.0;

    let mut monitor = monitor_with(provider, config);
    let report = monitor.report(5).unwrap();

    assert!(report.alerts.contains(&AlertKind::Cpu));
}

#[test]
fn test_quiet_system_has_no_alerts() {
    let mut monitor = monitor_with(FakeProvider::with_facts(), Config::default());
    let report = monitor.report(5).unwrap();

    assert!(report.alerts.is_empty());
}

#[test]
fn test_identity_resolved_at_construction() {
    let monitor = monitor_with(FakeProvider::with_facts(), Config::default());
    assert_eq!(monitor.identity().hostname, "box");

    let monitor = monitor_with(FakeProvider::default(), Config::default());
    assert_eq!(monitor.identity().hostname, "localhost");
}

#[test]
fn test_report_serializes_to_json() {
    let mut monitor = monitor_with(
        FakeProvider::with_facts().mount("/", Some((100, 50))),
        Config::default(),
    );
    let report = monitor.report(5).unwrap();

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["snapshot"]["disks"][0]["mount_point"], "/");
    assert!(value["alerts"]["alerts"].as_array().unwrap().is_empty());
}
