use clap::Parser;
use digit_enum::core::ConfigProvider;
use digit_enum::utils::{logger, validation::Validate};
use digit_enum::{EnumerationEngine, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-enum")]
#[command(about = "Digit enumeration driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "digit-enum.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override [enumeration] depth
    #[arg(short = 'n', long)]
    depth: Option<u32>,

    /// Override [enumeration] prefix
    #[arg(long)]
    prefix: Option<String>,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be written without writing it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置 (logger 需要 log_level，所以先載入)
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    logger::init_with_level(args.verbose, config.log_level());
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(depth) = args.depth {
        config.enumeration.depth = Some(depth);
        tracing::info!("🔧 Depth overridden to: {}", depth);
    }
    if let Some(prefix) = &args.prefix {
        config.enumeration.prefix = Some(prefix.clone());
        tracing::info!("🔧 Prefix overridden to: {:?}", prefix);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config);

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let engine = EnumerationEngine::new_with_monitoring(config, monitor_enabled);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        return match engine.plan() {
            Ok(request) => {
                let lines = request
                    .expected_lines()
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| format!("more than {}", u64::MAX));
                eprintln!("Would write {} lines", lines);
                Ok(())
            }
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(e.exit_code());
            }
        };
    }

    match engine.run().await {
        Ok(summary) => {
            tracing::info!(
                "✅ '{}' completed: {} lines to {}",
                engine.config().name(),
                summary.lines_written,
                summary.output
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

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("   Name: {}", config.name());
    tracing::info!("   Prefix: {:?}", config.prefix());
    tracing::info!("   Depth: {}", config.depth());
    tracing::info!("   Strategy: {}", config.strategy());
    tracing::info!("   Output: {}", config.output_path().unwrap_or("stdout"));
    if let Some(max_lines) = config.max_lines() {
        tracing::info!("   Max lines: {}", max_lines);
    }
    if let Some(metrics_file) = config.metrics_file() {
        tracing::info!("   Metrics file: {}", metrics_file);
    }
}
