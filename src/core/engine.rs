use crate::adapters::sink::WriterSink;
use crate::core::enumerator::DigitEnumerator;
use crate::domain::model::{EnumerationRequest, RunSummary};
use crate::domain::ports::{ConfigProvider, LineSink};
use crate::utils::error::{EnumError, Result};
use crate::utils::monitor::SystemMonitor;
use std::path::Path;
use std::time::Instant;

/// Owns one enumeration run: limit check, output sink, monitoring and
/// metrics export.
pub struct EnumerationEngine<C: ConfigProvider> {
    config: C,
    monitor: SystemMonitor,
}

impl<C: ConfigProvider> EnumerationEngine<C> {
    pub fn new(config: C) -> Self {
        Self::new_with_monitoring(config, false)
    }

    pub fn new_with_monitoring(config: C, monitor_enabled: bool) -> Self {
        Self {
            config,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Resolves the request and checks it against `max_lines` without
    /// writing anything.
    pub fn plan(&self) -> Result<EnumerationRequest> {
        let request = self.config.request();
        check_limit(&request, self.config.max_lines())?;
        Ok(request)
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let request = self.plan()?;
        let output_path = self.config.output_path().map(str::to_string);
        let output_label = output_path
            .clone()
            .unwrap_or_else(|| "stdout".to_string());

        tracing::info!(
            "🚀 Enumerating depth {} from prefix {:?} ({} strategy)",
            request.depth,
            request.prefix,
            request.strategy
        );
        if self.monitor.is_enabled() {
            self.monitor.log_stats("Before enumeration");
        }

        let started_at = chrono::Utc::now();
        let timer = Instant::now();

        let walk = request.clone();
        let lines_written =
            tokio::task::spawn_blocking(move || write_walk(&walk, output_path.as_deref()))
                .await
                .map_err(|e| EnumError::TaskError {
                    message: e.to_string(),
                })??;

        let elapsed = timer.elapsed();
        self.monitor.log_stats("After enumeration");
        self.monitor.log_final_stats();
        tracing::info!(
            "✅ Wrote {} lines to {} in {:?}",
            lines_written,
            output_label,
            elapsed
        );

        let summary = RunSummary {
            expected_lines: request.expected_lines(),
            prefix: request.prefix,
            depth: request.depth,
            strategy: request.strategy,
            lines_written,
            output: output_label,
            started_at,
            duration_ms: elapsed.as_millis() as u64,
        };

        if let Some(metrics_file) = self.config.metrics_file() {
            export_metrics(&summary, metrics_file).await?;
        }

        Ok(summary)
    }
}

fn check_limit(request: &EnumerationRequest, max_lines: Option<u64>) -> Result<()> {
    let Some(limit) = max_lines else {
        return Ok(());
    };

    match request.expected_lines() {
        Some(expected) if expected <= limit => Ok(()),
        expected => Err(EnumError::OutputLimitExceeded {
            depth: request.depth,
            expected: expected
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("more than {}", u64::MAX)),
            limit,
        }),
    }
}

fn write_walk(request: &EnumerationRequest, output_path: Option<&str>) -> Result<u64> {
    let enumerator = DigitEnumerator::new(request.strategy);
    match output_path {
        Some(path) => drain(enumerator, request, WriterSink::create(path)?),
        None => drain(enumerator, request, WriterSink::stdout()),
    }
}

fn drain<S: LineSink>(
    enumerator: DigitEnumerator,
    request: &EnumerationRequest,
    mut sink: S,
) -> Result<u64> {
    let emitted = enumerator.enumerate(&request.prefix, request.depth, &mut sink)?;
    sink.finish()?;
    Ok(emitted)
}

/// Writes `summary` as pretty JSON to `path`.
pub async fn export_metrics(summary: &RunSummary, path: &str) -> Result<()> {
    let metrics_json = serde_json::to_string_pretty(summary)?;

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, metrics_json).await?;

    tracing::info!("📊 Run metrics exported to: {}", path);
    Ok(())
}
