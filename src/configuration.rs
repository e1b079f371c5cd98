use std::collections::HashSet;

use serde::Serialize;

use crate::{
    diagnostics::DiagnosticLogger,
    settings::{RawSettings, Setting},
};

/// Resolved configuration for the injector. Immutable once resolved; see
/// [`ConfigurationStore`](crate::configuration_store::ConfigurationStore) for
/// the memoization.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Configuration {
    /// Google Analytics tag id. Empty means "nothing to inject".
    pub tag_id: String,
    /// Emit the snippet for anonymous visitors only.
    pub anon_only: bool,
    /// Client addresses for which the snippet is never emitted.
    pub exclude_ip_list: HashSet<String>,
    /// Enables diagnostic logging, together with the host debug-toolbar flag.
    pub debug: bool,
}

impl Configuration {
    /// Resolve raw host settings over the defaults.
    ///
    /// Absent settings resolve to defaults unchanged. A supplied field
    /// overrides its default only when the value has the declared type; a
    /// wrong-typed field keeps the default and is reported through `diag`.
    pub fn resolve(raw: Option<&RawSettings>, diag: &DiagnosticLogger) -> Configuration {
        let mut config = Configuration::default();
        let Some(raw) = raw else {
            return config;
        };
        diag.resolving_configuration();

        apply(&raw.ga_tag_id, &mut config.tag_id, "ga_tag_id", diag);
        apply(&raw.anon_only, &mut config.anon_only, "anon_only", diag);
        match &raw.exclude_ip_list {
            Some(Setting::Value(list)) => {
                config.exclude_ip_list = list.iter().cloned().collect();
            }
            Some(Setting::Invalid(_)) => diag.invalid_option("exclude_ip_list"),
            None => {}
        }
        apply(&raw.debug, &mut config.debug, "debug", diag);

        diag.resolved_configuration(&config);
        config
    }
}

fn apply<T: Clone>(
    setting: &Option<Setting<T>>,
    slot: &mut T,
    key: &str,
    diag: &DiagnosticLogger,
) {
    match setting {
        Some(Setting::Value(value)) => *slot = value.clone(),
        Some(Setting::Invalid(_)) => diag.invalid_option(key),
        None => {}
    }
}
