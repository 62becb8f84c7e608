//! Integration tests for logging system

use core_runtime::logging::{init_logging, strip_path, LogFormat, LoggingConfig};
use core_runtime::Error;
use tracing::Level;

#[test]
fn test_logging_initializes_once() {
    // Only one global subscriber per process, so both calls live in one test.
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(Level::DEBUG);

    init_logging(config.clone()).expect("first initialization succeeds");
    tracing::info!(dest = %strip_path("/tmp/out/report.pdf"), "logging ready");

    let second = init_logging(config);
    assert!(matches!(second, Err(Error::Config(_))));
}

#[test]
fn test_format_selection() {
    #[cfg(debug_assertions)]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[cfg(not(debug_assertions))]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Json);
    }
}

#[test]
fn test_config_chaining() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(Level::WARN)
        .with_spans(false)
        .with_target(false)
        .with_thread_info(true);

    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, Level::WARN);
    assert!(!config.enable_spans);
    assert!(!config.display_target);
    assert!(config.display_thread_info);
}

#[test]
fn test_path_stripping() {
    assert_eq!(strip_path("/home/user/exports/sheet.csv"), "sheet.csv");
    assert_eq!(strip_path("D:\\data\\file.txt"), "file.txt");
    assert_eq!(strip_path("filename.txt"), "filename.txt");
    assert_eq!(strip_path(""), "");
}
