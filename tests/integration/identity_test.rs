use super::support::FakeProvider;
use health_dashboard::core::system_monitor::SystemIdentity;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_resolve_from_provider() {
    let temp = TempDir::new().unwrap();
    let os_release = temp.path().join("os-release");
    fs::write(&os_release, "NAME=\"Arch Linux\"\nID=arch\n").unwrap();

    let mut provider = FakeProvider::with_facts();
    let identity = SystemIdentity::resolve(&mut provider, &os_release);

    assert_eq!(identity.os_name, "Arch Linux");
    assert_eq!(identity.kernel_version, "6.9.1-arch1");
    assert_eq!(identity.hostname, "box");
    assert_eq!(identity.cpu_count, 8);
    assert_eq!(identity.boot_time.timestamp(), 1_700_000_000);
    assert!(!identity.is_cachyos);
}

#[test]
fn test_cachyos_detected() {
    let temp = TempDir::new().unwrap();
    let os_release = temp.path().join("os-release");
    fs::write(&os_release, "NAME=\"CachyOS Linux\"\nID=cachyos\nID_LIKE=arch\n").unwrap();

    let mut provider = FakeProvider::with_facts();
    let identity = SystemIdentity::resolve(&mut provider, &os_release);

    assert!(identity.is_cachyos);
    assert_eq!(identity.os_name, "CachyOS Linux");
    assert_eq!(identity.hostname, "box");
}

#[test]
fn test_missing_descriptor_is_not_a_failure() {
    let temp = TempDir::new().unwrap();

    let mut provider = FakeProvider::with_facts();
    let identity = SystemIdentity::resolve(&mut provider, &temp.path().join("missing"));

    assert_eq!(identity.hostname, "box");
    assert!(!identity.is_cachyos);
}

#[test]
fn test_any_missing_fact_falls_back_entirely() {
    let temp = TempDir::new().unwrap();
    let os_release = temp.path().join("os-release");
    fs::write(&os_release, "ID=cachyos\n").unwrap();

    let mut provider = FakeProvider::with_facts();
    provider.facts.kernel_version = None;

    let identity = SystemIdentity::resolve(&mut provider, &os_release);
    let fallback = SystemIdentity::fallback();

    // Nothing is partially filled from the provider
    assert_eq!(identity.os_name, fallback.os_name);
    assert_eq!(identity.hostname, "localhost");
    assert_eq!(identity.cpu_count, 1);
    assert_eq!(identity.total_memory, 0);
    assert!(!identity.is_cachyos);
}

#[test]
fn test_unreadable_descriptor_falls_back_entirely() {
    let temp = TempDir::new().unwrap();

    let mut provider = FakeProvider::with_facts();
    // A directory exists but cannot be read as a file
    let identity = SystemIdentity::resolve(&mut provider, temp.path());

    assert_eq!(identity.hostname, "localhost");
    assert_eq!(identity.os_name, "Unknown");
}
