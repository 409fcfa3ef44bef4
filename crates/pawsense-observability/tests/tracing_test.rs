//! Tests for tracing setup.

use std::sync::Mutex;

use pawsense_core::config::ObservabilityConfig;
use pawsense_observability::setup::{config_directive, init_tracing, init_tracing_with, init_tracing_with_filter};

/// Serializes tests that touch `PAWSENSE_LOG`.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn env_filter_is_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("PAWSENSE_LOG", "pawsense_transitions=debug,pawsense_ingest=warn");
    init_tracing();
    std::env::remove_var("PAWSENSE_LOG");
}

#[test]
fn init_is_idempotent_across_entry_points() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing_with(&ObservabilityConfig::default());
    init_tracing_with_filter("debug", true);
    init_tracing();
}

#[test]
fn garbage_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("PAWSENSE_LOG", "=]]not a filter[[");
    init_tracing();
    std::env::remove_var("PAWSENSE_LOG");
    init_tracing_with_filter("=]]not a filter[[", false);
}

#[test]
fn bare_level_targets_the_workspace() {
    assert_eq!(config_directive("debug"), "pawsense=debug");
    assert_eq!(config_directive(" warn "), "pawsense=warn");
}

#[test]
fn explicit_directive_passes_through() {
    assert_eq!(config_directive("pawsense_ingest=trace"), "pawsense_ingest=trace");
    assert_eq!(config_directive("info,pawsense=debug"), "info,pawsense=debug");
}
