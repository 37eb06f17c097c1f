use super::support::{instant_builder, FakeProvider};
use health_dashboard::core::system_monitor::{CpuReading, LoadAverage, MemoryReading, SnapshotBuilder};
use health_dashboard::core::StopSignal;
use health_dashboard::DashboardError;
use std::time::{Duration, Instant};

#[test]
fn test_failed_mount_is_skipped() {
    let mut provider = FakeProvider::default()
        .mount("/", Some((1000, 250)))
        .mount("/root-only", None)
        .mount("/home", Some((2000, 1500)));

    let snapshot = instant_builder().build(&mut provider, 10).unwrap();

    assert_eq!(snapshot.disks.len(), 2);
    assert_eq!(snapshot.disks[0].mount_point, "/");
    assert_eq!(snapshot.disks[0].percent, 25.0);
    assert_eq!(snapshot.disks[1].mount_point, "/home");
    assert_eq!(snapshot.disks[1].free, 500);
    assert_eq!(snapshot.disks[1].percent, 75.0);
}

#[test]
fn test_all_mounts_failing_yields_empty_list() {
    let mut provider = FakeProvider::default().mount("/a", None).mount("/b", None);

    let snapshot = instant_builder().build(&mut provider, 10).unwrap();
    assert!(snapshot.disks.is_empty());
}

#[test]
fn test_vanished_processes_are_skipped() {
    let mut provider = FakeProvider::default()
        .process(1, Some(2.0))
        .process(2, None)
        .process(3, Some(9.0))
        .process(4, None);

    let snapshot = instant_builder().build(&mut provider, 10).unwrap();
    let pids: Vec<u32> = snapshot.processes.iter().map(|p| p.pid).collect();

    assert_eq!(pids, vec![3, 1]);
}

#[test]
fn test_processes_sorted_stable_and_truncated() {
    let mut provider = FakeProvider::default()
        .process(10, Some(5.0))
        .process(11, Some(30.0))
        .process(12, Some(5.0))
        .process(13, Some(1.0))
        .process(14, Some(5.0));

    let snapshot = instant_builder().build(&mut provider, 3).unwrap();
    let pids: Vec<u32> = snapshot.processes.iter().map(|p| p.pid).collect();

    assert_eq!(pids, vec![11, 10, 12]);
}

#[test]
fn test_zero_process_limit_skips_enumeration() {
    let mut provider = FakeProvider::default().process(1, Some(50.0));

    let snapshot = instant_builder().build(&mut provider, 0).unwrap();
    assert!(snapshot.processes.is_empty());
}

#[test]
fn test_readings_are_carried_through() {
    let mut provider = FakeProvider {
        cpu: CpuReading {
            usage_percent: 37.5,
            frequency_mhz: 0,
            load_average: LoadAverage::default(),
            core_count: 4,
        },
        memory: MemoryReading {
            total: 100,
            used: 60,
            free: 40,
            percent: 60.0,
            ..Default::default()
        },
        ..Default::default()
    };

    let snapshot = instant_builder().build(&mut provider, 5).unwrap();

    assert_eq!(provider.primed, 1);
    assert_eq!(snapshot.cpu.usage_percent, 37.5);
    assert_eq!(snapshot.cpu.frequency_mhz, 0);
    assert_eq!(snapshot.cpu.load_average, LoadAverage::default());
    assert_eq!(snapshot.memory.percent, 60.0);
}

#[test]
fn test_unreachable_provider_is_fatal() {
    let mut provider = FakeProvider {
        unreachable: true,
        ..Default::default()
    };

    let result = instant_builder().build(&mut provider, 5);
    assert!(matches!(result, Err(DashboardError::Provider(_))));
}

#[test]
fn test_interrupt_during_sampling() {
    let stop = StopSignal::new();
    stop.stop();
    let builder = SnapshotBuilder::new(stop).with_sample_interval(Duration::from_secs(30));
    let mut provider = FakeProvider::default();

    let started = Instant::now();
    let result = builder.build(&mut provider, 5);

    assert!(matches!(result, Err(DashboardError::Interrupted)));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test]
fn test_sampling_waits_for_interval() {
    let builder = SnapshotBuilder::new(StopSignal::new())
        .with_sample_interval(Duration::from_millis(150));
    let mut provider = FakeProvider::default();

    let started = Instant::now();
    builder.build(&mut provider, 5).unwrap();

    assert!(started.elapsed() >= Duration::from_millis(150));
}
