//! Observability setup for gh-discussion: structured logging via `tracing`.

pub mod tracing_setup;
