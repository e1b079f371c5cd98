//! `gtag-inject` decides whether a page render should carry the Google Analytics
//! (gtag.js) snippet and produces that snippet's exact text. It is meant to be
//! embedded in a page-rendering host; the host supplies raw settings and a
//! per-request context, and gets back either the snippet HTML or nothing.
//!
//! # Overview
//!
//! [`Injector`] is the integration point. Construct one at host startup and call
//! [`Injector::head_snippet`] once per page render. Everything behind it is
//! deliberately latching: the decision whether to inject is computed at most once
//! per process and cached forever, trading staleness under process reuse for
//! zero per-request cost.
//!
//! [`RawSettings`] is the schema-typed view of the host's loosely-typed settings
//! mapping. Each field parses independently; a wrong-typed field is kept as an
//! invalid marker instead of failing the whole object.
//!
//! [`Configuration`] is the resolved form: raw settings merged over defaults,
//! field by field, with type mismatches dropped.
//! [`ConfigurationStore`](configuration_store::ConfigurationStore) memoizes the
//! resolved configuration for the process lifetime; the raw settings observed on
//! the first call are the ones reflected forever after.
//!
//! [`EligibilityGate`](gate::EligibilityGate) is the latching decision itself:
//! a static validity check on the tag id format, then a context check
//! (anonymous-only mode, IP exclusion). Both are one-shot; see
//! [`GateState`](gate::GateState) for the lifecycle.
//!
//! [`render_snippet`](snippet::render_snippet) is a pure function from a tag id
//! to the two-`<script>` gtag block.
//!
//! # Error handling
//!
//! Gate decisions never raise. An ineligible request, missing settings, or a
//! malformed tag id all simply produce no snippet; injection is presentational
//! and must never affect page rendering. The only fallible surface is
//! [`RawSettings::from_json`], which rejects a settings value that is not an
//! object at all.
//!
//! # Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log/latest/log/) crate
//! under the `gtag_inject` target, and only when both the host's debug-toolbar
//! flag and the settings `debug` flag are set.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod configuration_store;
pub mod diagnostics;
pub mod gate;
pub mod snippet;

mod configuration;
mod context;
mod error;
mod injector;
mod settings;

pub use configuration::Configuration;
pub use context::RequestContext;
pub use error::{Error, Result};
pub use injector::Injector;
pub use settings::{RawSettings, Setting};
