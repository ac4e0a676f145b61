use beachcomber::config::LoggingConfig;
use beachcomber::logger::Logger;

#[test]
fn test_config_based_logging_disabled() {
    // Test with logging disabled
    let logger = Logger::from_config(&LoggingConfig::default()).unwrap();
    assert!(!logger.is_enabled());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_logs_are_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert!(logs[0].ends_with("second"));
    assert!(logs[1].ends_with("first"));
}

#[test]
fn test_clones_share_the_buffer() {
    let logger = Logger::new();
    let handle = logger.clone();
    handle.log("from a clone".to_string());

    assert_eq!(logger.get_logs().len(), 1);

    logger.clear();
    assert!(handle.get_logs().is_empty());
}

#[test]
fn test_log_lines_are_timestamped() {
    let logger = Logger::new();
    logger.log("Fetch: started".to_string());

    let line = &logger.get_logs()[0];
    // [HH:MM:SS.mmm] prefix
    assert!(line.starts_with('['));
    assert_eq!(line.find(']'), Some(13));
}

#[test]
fn test_log_file_path_is_under_app_dir() {
    if let Ok(path) = Logger::get_log_file_path() {
        assert!(path.ends_with("beachcomber/beachcomber.log"));
    }
}
