//! Best-effort diagnostic logging for the injection pipeline.

use crate::Configuration;

/// Log target for all diagnostics emitted by this crate.
pub const LOG_TARGET: &str = "gtag_inject";

/// Diagnostic logger gated on two host flags.
///
/// Constructed disabled by default and enabled only when both the host's
/// debug-toolbar flag and the settings `debug` flag hold. When disabled, every
/// method is a no-op. Emission goes through the `log` facade and never fails;
/// a host without a logger installed simply sees nothing.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticLogger {
    enabled: bool,
}

impl DiagnosticLogger {
    /// A logger that never emits.
    pub fn disabled() -> DiagnosticLogger {
        DiagnosticLogger { enabled: false }
    }

    /// Construct from the two gating flags.
    pub fn new(debug_toolbar: bool, settings_debug: bool) -> DiagnosticLogger {
        DiagnosticLogger {
            enabled: debug_toolbar && settings_debug,
        }
    }

    /// Whether diagnostics are emitted at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn resolving_configuration(&self) {
        if self.enabled {
            log::debug!(target: LOG_TARGET, "resolving configuration");
        }
    }

    pub(crate) fn invalid_option(&self, key: &str) {
        if self.enabled {
            log::debug!(target: LOG_TARGET, "{key} option is invalid");
        }
    }

    pub(crate) fn resolved_configuration(&self, config: &Configuration) {
        if self.enabled {
            log::debug!(target: LOG_TARGET, config:serde = config; "resolved configuration");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, OnceLock};

    use log::{Log, Metadata, Record};

    use super::{DiagnosticLogger, LOG_TARGET};

    #[test]
    fn enabled_only_when_both_flags_hold() {
        assert!(DiagnosticLogger::new(true, true).is_enabled());
        assert!(!DiagnosticLogger::new(true, false).is_enabled());
        assert!(!DiagnosticLogger::new(false, true).is_enabled());
        assert!(!DiagnosticLogger::new(false, false).is_enabled());
        assert!(!DiagnosticLogger::disabled().is_enabled());
    }

    /// Captures messages emitted under [`LOG_TARGET`] so tests can observe
    /// whether anything reached the `log` facade.
    struct RecordingLogger;

    fn recorded() -> &'static Mutex<Vec<String>> {
        static RECORDED: OnceLock<Mutex<Vec<String>>> = OnceLock::new();
        RECORDED.get_or_init(|| Mutex::new(Vec::new()))
    }

    impl Log for RecordingLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if record.target() == LOG_TARGET {
                recorded().lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    fn install_recorder() {
        static LOGGER: RecordingLogger = RecordingLogger;
        // Another test may have installed it already; that's fine.
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Debug);
    }

    #[test]
    fn emission_follows_the_enabled_flag() {
        install_recorder();

        let diag = DiagnosticLogger::disabled();
        diag.resolving_configuration();
        diag.invalid_option("ga_tag_id");
        diag.resolved_configuration(&Default::default());
        assert!(recorded().lock().unwrap().is_empty());

        let diag = DiagnosticLogger::new(true, true);
        diag.resolving_configuration();
        diag.invalid_option("ga_tag_id");
        diag.resolved_configuration(&Default::default());

        let messages = recorded().lock().unwrap();
        assert!(messages.contains(&"resolving configuration".to_string()));
        assert!(messages.contains(&"ga_tag_id option is invalid".to_string()));
        assert!(messages.contains(&"resolved configuration".to_string()));
    }
}
