use apis_logger::{LevelFilter, Logger};

#[test]
fn init_console_keeps_the_name() {
    let logger = Logger::builder()
        .name("integration-console-only")
        .level(LevelFilter::INFO)
        .ansi(false)
        .init()
        .expect("logger should initialize");

    tracing::info!("hello from integration test");
    assert_eq!(logger.name(), "integration-console-only");
}
