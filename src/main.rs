use clap::Parser;
use digit_enum::core::ConfigProvider;
use digit_enum::utils::{logger, validation::Validate};
use digit_enum::{CliConfig, EnumerationEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let dry_run = config.dry_run;
    let engine = EnumerationEngine::new_with_monitoring(config, monitor_enabled);

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        match engine.plan() {
            Ok(request) => {
                let target = engine.config().output_path().unwrap_or("stdout");
                match request.expected_lines() {
                    Some(lines) => eprintln!(
                        "Would write {} lines (prefix {:?}, depth {}) to {}",
                        lines, request.prefix, request.depth, target
                    ),
                    None => eprintln!(
                        "Would write more than {} lines (prefix {:?}, depth {}) to {}",
                        u64::MAX,
                        request.prefix,
                        request.depth,
                        target
                    ),
                }
                return Ok(());
            }
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
        }
    }

    match engine.run().await {
        Ok(summary) => {
            tracing::debug!(
                "Run finished: {} of {:?} expected lines in {}ms",
                summary.lines_written,
                summary.expected_lines,
                summary.duration_ms
            );
        }
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("Output closed by reader, stopping");
        }
        Err(e) => {
            tracing::error!(
                "❌ Enumeration failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
