use anyhow::{Context, Result};
use clap::ColorChoice;
use tracing::info_span;
use tracing::level_filters::LevelFilter;

use switcheroo_core::{KeyTableOptions, SwitchConfig, SwitchOutcome, run_switch};

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::logging::{LogConfig, LogFormat};

/// Build logging configuration from CLI flags with consistent precedence.
///
/// An explicit `--log-level` wins over `RUST_LOG`. Colors follow `--color`,
/// and under `auto` are only used when logging to a terminal.
pub fn log_config(cli: &Cli, stderr_is_terminal: bool) -> LogConfig {
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && stderr_is_terminal,
    };
    let mut config = LogConfig::default()
        .with_format(format)
        .with_ansi(with_ansi)
        .with_timestamps(cli.log_timestamps)
        .with_log_file(cli.log_file.clone());
    if let Some(level) = cli.log_level {
        config.use_env_filter = false;
        config = config.with_level(match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        });
    }
    config
}

/// Translate parsed arguments into a run configuration.
///
/// The output always lands in `replacement.gbk` in the working directory.
pub fn switch_config(cli: &Cli) -> SwitchConfig {
    let table = KeyTableOptions::default()
        .with_key_col(cli.key_col)
        .with_val_col(cli.val_col)
        .with_header(cli.has_header);
    SwitchConfig::new(&cli.key_file, &cli.feature, &cli.gbk_file).with_table_options(table)
}

pub fn run(config: &SwitchConfig) -> Result<SwitchOutcome> {
    let span = info_span!("switch", feature = %config.feature);
    let _guard = span.enter();
    run_switch(config).with_context(|| {
        format!(
            "Genbank file {} could not be updated",
            config.gbk_file.display()
        )
    })
}

/// Format an error for the terminal.
///
/// Library errors already spell out their own causes, so only the first
/// link beneath the top-level context is appended.
pub fn render_error(error: &anyhow::Error) -> String {
    match error.chain().nth(1) {
        Some(cause) => format!("{error}: {cause}"),
        None => error.to_string(),
    }
}
