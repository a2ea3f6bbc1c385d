use digit_enum::domain::model::Strategy;
use digit_enum::{CliConfig, EnumError, EnumerationEngine, TomlConfig};
use tempfile::TempDir;

fn cli_config(prefix: &str, depth: u32, output: &str) -> CliConfig {
    CliConfig {
        prefix: prefix.to_string(),
        depth,
        strategy: Strategy::Iterative,
        output: Some(output.to_string()),
        max_lines: None,
        metrics_file: None,
        dry_run: false,
        monitor: false,
        log_json: false,
        verbose: false,
    }
}

#[tokio::test]
async fn test_engine_writes_walk_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out/lines.txt");
    let output_path = output.to_str().unwrap().to_string();

    let engine = EnumerationEngine::new(cli_config("", 2, &output_path));
    let summary = engine.run().await.unwrap();

    assert_eq!(summary.lines_written, 100);
    assert_eq!(summary.expected_lines, Some(100));
    assert_eq!(summary.output, output_path);

    let content = std::fs::read_to_string(&output).unwrap();
    let expected: String = (0..100).map(|n| format!("{}\n", n)).collect();
    assert_eq!(content, expected);
}

#[tokio::test]
async fn test_engine_runs_are_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.txt");
    let second = temp_dir.path().join("second.txt");

    let mut config = cli_config("ab", 3, first.to_str().unwrap());
    EnumerationEngine::new(config.clone()).run().await.unwrap();

    config.output = Some(second.to_str().unwrap().to_string());
    config.strategy = Strategy::Recursive;
    EnumerationEngine::new(config).run().await.unwrap();

    let first = std::fs::read(&first).unwrap();
    let second = std::fs::read(&second).unwrap();
    assert_eq!(first.len(), 1000 * "ab000\n".len());
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_engine_refuses_to_exceed_line_limit() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("never.txt");

    let mut config = cli_config("", 4, output.to_str().unwrap());
    config.max_lines = Some(9_999);

    let err = EnumerationEngine::new(config).run().await.unwrap_err();
    assert!(matches!(err, EnumError::OutputLimitExceeded { depth: 4, .. }));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_engine_exports_metrics() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("lines.txt");
    let metrics = temp_dir.path().join("metrics/run.json");

    let mut config = cli_config("7", 1, output.to_str().unwrap());
    config.metrics_file = Some(metrics.to_str().unwrap().to_string());

    let summary = EnumerationEngine::new(config).run().await.unwrap();
    assert_eq!(summary.lines_written, 10);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&metrics).unwrap()).unwrap();
    assert_eq!(json["prefix"], "7");
    assert_eq!(json["depth"], 1);
    assert_eq!(json["strategy"], "iterative");
    assert_eq!(json["lines_written"], 10);
    assert_eq!(json["expected_lines"], 10);
    assert!(json["started_at"].is_string());
}

#[tokio::test]
async fn test_engine_with_toml_config() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("toml.txt");

    let toml_content = format!(
        r#"
[enumeration]
name = "toml-run"
prefix = "x"
depth = 2
strategy = "recursive"

[output]
path = "{}"
max_lines = 100
"#,
        output.to_str().unwrap().replace('\\', "\\\\")
    );

    let config = TomlConfig::from_toml_str(&toml_content).unwrap();
    let summary = EnumerationEngine::new(config).run().await.unwrap();

    assert_eq!(summary.strategy, Strategy::Recursive);
    assert_eq!(summary.lines_written, 100);

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.first(), Some(&"x00"));
    assert_eq!(lines.last(), Some(&"x99"));
}

#[test]
fn test_plan_does_not_write() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("planned.txt");

    let engine = EnumerationEngine::new(cli_config("", 3, output.to_str().unwrap()));
    let request = engine.plan().unwrap();

    assert_eq!(request.expected_lines(), Some(1000));
    assert!(!output.exists());
}
