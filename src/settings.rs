use serde::Deserialize;

use crate::{Error, Result};

/// A single settings field as supplied by the host.
///
/// Host settings are loosely typed, so each field is parsed independently: a
/// value that fails to deserialize as the declared type is kept as
/// [`Setting::Invalid`] rather than failing the whole settings object. Invalid
/// fields keep their default on resolution and are reported through diagnostic
/// logging.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Setting<T> {
    /// Value of the declared type.
    Value(T),
    /// Value of the wrong type. The raw value is retained for diagnostics.
    Invalid(serde_json::Value),
}

impl<T> Setting<T> {
    pub(crate) fn as_value(&self) -> Option<&T> {
        match self {
            Setting::Value(value) => Some(value),
            Setting::Invalid(_) => None,
        }
    }
}

/// Raw host settings, prior to resolution against defaults.
///
/// All keys are optional; a missing key silently resolves to its default.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    /// Google Analytics tag id, `UA-...` or `G-...`.
    pub ga_tag_id: Option<Setting<String>>,
    /// Emit the snippet for anonymous visitors only.
    pub anon_only: Option<Setting<bool>>,
    /// Client addresses for which the snippet is never emitted.
    pub exclude_ip_list: Option<Setting<Vec<String>>>,
    /// Enables diagnostic logging, together with the host debug-toolbar flag.
    pub debug: Option<Setting<bool>>,
}

impl RawSettings {
    /// Parse settings from a host-provided JSON value.
    ///
    /// Only the outer shape can fail here (the value must be an object);
    /// wrong-typed fields are tolerated and surface as [`Setting::Invalid`].
    pub fn from_json(value: serde_json::Value) -> Result<RawSettings> {
        // A derived struct also deserializes from a JSON array positionally,
        // so the mapping shape has to be checked first.
        let map: serde_json::Map<String, serde_json::Value> =
            serde_json::from_value(value).map_err(Error::from)?;
        serde_json::from_value(serde_json::Value::Object(map)).map_err(Error::from)
    }

    /// The tag id, when supplied with the right type.
    pub(crate) fn tag_id(&self) -> Option<&str> {
        self.ga_tag_id
            .as_ref()
            .and_then(Setting::as_value)
            .map(String::as_str)
    }

    /// Whether the `debug` flag is set.
    ///
    /// Readable before resolution because the diagnostic logger is constructed
    /// ahead of the configuration.
    pub fn debug_enabled(&self) -> bool {
        self.debug
            .as_ref()
            .and_then(Setting::as_value)
            .copied()
            .unwrap_or(false)
    }
}
