use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "freight_core=info,freight_cli=info";
pub const VERBOSE_FILTER: &str = "freight_core=debug,freight_cli=debug";

/// Filter directives used when `RUST_LOG` is not set.
///
/// `--verbose` wins over the configured filter, which wins over the default.
pub fn filter_directives(verbose: bool, configured: Option<&str>) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }
    configured
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Install the global subscriber. Logs go to stderr so stdout only carries
/// shell output.
pub fn init_cli_logger(verbose: bool, configured: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbose, configured)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_precedence() {
        assert_eq!(filter_directives(false, None), DEFAULT_FILTER);
        assert_eq!(filter_directives(false, Some("freight_core=trace")), "freight_core=trace");
        assert_eq!(filter_directives(false, Some("  ")), DEFAULT_FILTER);
        assert_eq!(filter_directives(true, Some("freight_core=trace")), VERBOSE_FILTER);
    }
}
