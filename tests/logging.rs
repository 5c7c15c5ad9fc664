use mdi_codegen::{JsonLineLogger, LogLevel};
use serde_json::Value;

fn lines(logger: JsonLineLogger<Vec<u8>>) -> Vec<Value> {
    let raw = String::from_utf8(logger.into_inner()).unwrap();
    raw.lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn json_logger_serializes_entries() {
    let mut logger = JsonLineLogger::new(Vec::new(), LogLevel::Info);
    logger
        .log_at(
            100,
            LogLevel::Info,
            "mdi_codegen::test",
            "first entry",
            &[("path", "icons.json")],
        )
        .unwrap();
    let parsed = lines(logger);
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0]["ts"], 100);
    assert_eq!(parsed[0]["level"], "INFO");
    assert_eq!(parsed[0]["module"], "mdi_codegen::test");
    assert_eq!(parsed[0]["message"], "first entry");
    assert_eq!(parsed[0]["path"], "icons.json");
}

#[test]
fn loglevel_filters_entries() {
    let mut logger = JsonLineLogger::new(Vec::new(), LogLevel::Info);
    logger.set_level(LogLevel::Warn);
    assert_eq!(logger.level(), LogLevel::Warn);
    logger.log(LogLevel::Info, "mdi_codegen", "info suppressed").unwrap();
    logger.log(LogLevel::Warn, "mdi_codegen", "warn visible").unwrap();
    let parsed = lines(logger);
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0]["level"], "WARN");
    assert_eq!(parsed[0]["message"], "warn visible");
}
