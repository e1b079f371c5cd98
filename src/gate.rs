//! The latching eligibility decision: a static validity check on the tag id,
//! then a context check against the resolved configuration. Each check runs at
//! most once per gate lifetime; the combined outcome is cached forever.

use std::sync::OnceLock;

use regex::Regex;

use crate::{Configuration, RawSettings, RequestContext};

/// Lifecycle of the overall injection decision.
///
/// `Unevaluated → Disabled` when validity fails; `Unevaluated → Disabled` when
/// the context check fails; `Unevaluated → Enabled` when both pass. `Enabled`
/// and `Disabled` are terminal: once reached, re-invocation short-circuits to
/// the cached outcome and never re-reads settings or context. A different
/// user's context on a later request in the same process therefore has no
/// effect, which is the intended trade-off for a zero-cost per-request check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// No terminal decision has been made yet.
    Unevaluated,
    /// The snippet is emitted for every render in this process.
    Enabled,
    /// The snippet is never emitted in this process.
    Disabled,
}

/// The eligibility gate. Two independent one-shot cells: a validity cell
/// written by [`is_valid`](EligibilityGate::is_valid) and a terminal decision
/// cell written by whichever check fails first, or by
/// [`is_enabled`](EligibilityGate::is_enabled) on success.
///
/// `OnceLock` makes both transitions race-free when the host runs request
/// handlers on multiple threads; the first writer wins.
#[derive(Default)]
pub struct EligibilityGate {
    validity: OnceLock<bool>,
    decision: OnceLock<bool>,
}

impl EligibilityGate {
    /// Create a gate in the `Unevaluated` state.
    pub fn new() -> Self {
        EligibilityGate::default()
    }

    /// Static validity check, evaluated at most once.
    ///
    /// Fails when raw settings are absent entirely, or when the tag id is
    /// missing, wrong-typed, or fails the format rule. Failure latches the
    /// terminal `Disabled` state; success does not latch `Enabled` (context
    /// eligibility is checked independently).
    pub fn is_valid(&self, raw: Option<&RawSettings>) -> bool {
        if let Some(&decision) = self.decision.get() {
            return decision;
        }

        let valid = *self.validity.get_or_init(|| match raw {
            Some(raw) => is_valid_tag_id(raw.tag_id().unwrap_or("")),
            None => false,
        });
        if !valid {
            // Invalid settings cannot become valid within this process.
            let _ = self.decision.set(false);
        }
        valid
    }

    /// Context eligibility, evaluated at most once after
    /// [`is_valid`](EligibilityGate::is_valid) passed.
    ///
    /// Disabled when the configuration is anonymous-only and the current user
    /// is registered, or when the client address is in the exclusion list.
    /// Otherwise latches `Enabled`. Either outcome is terminal.
    pub fn is_enabled(&self, config: &Configuration, context: &RequestContext) -> bool {
        *self.decision.get_or_init(|| {
            if self.validity.get() != Some(&true) {
                return false;
            }
            if config.anon_only && context.is_registered {
                return false;
            }
            if config.exclude_ip_list.contains(&context.client_ip) {
                return false;
            }
            true
        })
    }

    /// Current latch state.
    pub fn state(&self) -> GateState {
        match self.decision.get() {
            None => GateState::Unevaluated,
            Some(true) => GateState::Enabled,
            Some(false) => GateState::Disabled,
        }
    }
}

/// Check whether `tag_id` looks like a Google Analytics tag id:
/// `UA-<digits>-<digits>` or `G-<uppercase alphanumeric>`, at least 5
/// characters long.
pub fn is_valid_tag_id(tag_id: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"^(UA-[0-9]+-[0-9]+|G-[0-9A-Z]+)$").expect("tag id pattern is valid")
    });
    tag_id.len() >= 5 && pattern.is_match(tag_id)
}
