use hvadan_logging::{hv_warn, initialize, log, LevelFilter, LogDestination, LogSettings};
use tempfile::TempDir;

#[test]
fn unwritable_log_file_falls_back_to_terminal() {
    let temp = TempDir::new().unwrap();
    let settings = LogSettings {
        destination: LogDestination::File,
        level: LevelFilter::Warn,
        file_path: temp.path().join("missing").join("widget.log"),
    };

    assert!(initialize(&settings));
    assert_eq!(log::max_level(), LevelFilter::Warn);
    hv_warn!("still reaches the terminal");
    assert!(!settings.file_path.exists());
}
