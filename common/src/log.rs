use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// How much the run should say about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only, on stderr.
    Normal,
    /// Everything down to debug, into `<name>.log`.
    Verbose,
    /// Nothing at all.
    Quiet,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {Verbosity::Quiet} else if verbose {Verbosity::Verbose} else {Verbosity::Normal}
    }
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the global subscriber. Verbose runs go to `<log_dir>/<name>.log`,
/// truncated on every run.
pub fn init(name: &str, log_dir: &Path, verbosity: Verbosity) -> anyhow::Result<()> {
    match verbosity {
        Verbosity::Quiet => Ok(()),
        Verbosity::Normal => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .without_time()
                        .with_filter(filter("error")),
                )
                .try_init()?;
            Ok(())
        }
        Verbosity::Verbose => {
            let path = log_dir.join(format!("{name}.log"));
            let file = File::create(&path).with_context(|| format!("cannot create {}", path.display()))?;
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(false)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::CLOSE)
                        .without_time()
                        .with_filter(filter("debug")),
                )
                .try_init()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }
}
