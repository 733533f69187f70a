//! Run-time configuration shared by the binaries.

use log::LevelFilter;

/// Options controlling how a command file is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Abort on the first malformed line instead of skipping it.
    pub strict: bool,
    /// Verify every tree invariant after each command.
    pub validate: bool,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

/// Initialise `env_logger`.
///
/// `RUST_LOG` is honoured; without it the level is `warn`, or `debug` when
/// `verbose` is set. Calling this more than once is harmless.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
