//! The host integration point, tying the configuration store, the eligibility
//! gate, and the snippet renderer together.

use std::sync::Arc;

use crate::{
    configuration_store::ConfigurationStore,
    diagnostics::DiagnosticLogger,
    gate::{EligibilityGate, GateState},
    snippet::render_snippet,
    Configuration, RawSettings, RequestContext,
};

/// Per-process injection pipeline.
///
/// Construct a single `Injector` at host startup and share it across request
/// handlers (e.g., behind an `Arc`). The configuration cache and the gate latch
/// are process-wide by design: the first render decides, every later render
/// reuses that decision. This makes the reuse-across-requests assumption an
/// explicit property of this object rather than hidden global state.
#[derive(Default)]
pub struct Injector {
    debug_toolbar: bool,
    store: ConfigurationStore,
    gate: EligibilityGate,
}

impl Injector {
    /// Create an injector. `debug_toolbar` is the host's debug-toolbar flag;
    /// diagnostics are emitted only when it is set together with the settings
    /// `debug` flag.
    pub fn new(debug_toolbar: bool) -> Injector {
        Injector {
            debug_toolbar,
            store: ConfigurationStore::new(),
            gate: EligibilityGate::new(),
        }
    }

    /// Decide and render, called once per page render.
    ///
    /// Returns the snippet HTML to insert into the page head, or `None` when
    /// the gate is disabled or there is nothing to inject. Never fails: a
    /// missing or malformed setup only suppresses output.
    pub fn head_snippet(
        &self,
        raw: Option<&RawSettings>,
        context: &RequestContext,
    ) -> Option<String> {
        if !self.gate.is_valid(raw) {
            return None;
        }

        let diag = self.diagnostics(raw);
        let config = self.store.resolve(raw, &diag);

        if !self.gate.is_enabled(&config, context) {
            return None;
        }

        let html = render_snippet(&config.tag_id);
        if html.is_empty() {
            None
        } else {
            Some(html)
        }
    }

    /// Current gate state, for hosts that want to expose it (e.g., in a debug
    /// toolbar).
    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    /// Resolved configuration, if resolution has happened.
    pub fn configuration(&self) -> Option<Arc<Configuration>> {
        self.store.get()
    }

    fn diagnostics(&self, raw: Option<&RawSettings>) -> DiagnosticLogger {
        DiagnosticLogger::new(
            self.debug_toolbar,
            raw.is_some_and(RawSettings::debug_enabled),
        )
    }
}
