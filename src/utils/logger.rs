use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins over `level` when it is set.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,university_records={level},university={level},university_convert={level}"
        ))
    })
}

fn verbose_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

pub fn init_logger(level: &str, json: bool) {
    let registry = tracing_subscriber::registry().with(env_filter(level));
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.compact()).init();
    }
}

pub fn init_cli_logger(verbose: bool) {
    init_logger(verbose_level(verbose), false);
}

pub fn init_json_logger(verbose: bool) {
    init_logger(verbose_level(verbose), true);
}
