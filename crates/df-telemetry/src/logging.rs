use df_core::config::{GeneralConfig, LogFormat};
use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` wins; otherwise `default_level` is parsed as an `EnvFilter`
/// directive, and an unparsable directive degrades to `info`.
fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialise logging from the `[general]` config section: `log_level`
/// becomes the default filter and `log_format` picks the output.
/// `project_name` is recorded as the service name.
pub fn init_from_config(general: &GeneralConfig) {
    match general.log_format {
        LogFormat::Human => init_logging(&general.project_name, &general.log_level),
        LogFormat::Json => init_logging_json(&general.project_name, &general.log_level),
    }
}

/// Human-readable output for a dealflow host.
///
/// `default_level` applies when `RUST_LOG` is unset, e.g. `"info"` or
/// `"df_state=debug,df_core=info,warn"` to follow CRUD and board mutations.
/// A global subscriber can only be set once; later calls are no-ops.
pub fn init_logging(service_name: &str, default_level: &str) {
    fmt()
        .with_env_filter(filter(default_level))
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .ok();

    tracing::info!(service = service_name, format = "human", "dealflow logging ready");
}

/// JSON lines, one object per event, with the `deal_id`/`kind`/`id` fields
/// of the state containers flattened into each record.
pub fn init_logging_json(service_name: &str, default_level: &str) {
    fmt()
        .json()
        .flatten_event(true)
        .with_env_filter(filter(default_level))
        .with_target(true)
        .with_current_span(false)
        .try_init()
        .ok();

    tracing::info!(service = service_name, format = "json", "dealflow logging ready");
}

/// Output captured per test by the harness, `debug` unless `RUST_LOG` says
/// otherwise.
pub fn init_test_logging() {
    fmt()
        .with_env_filter(filter("debug"))
        .with_test_writer()
        .try_init()
        .ok();
}
