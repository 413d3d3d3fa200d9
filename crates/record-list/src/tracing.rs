//! # Observability & Tracing
//!
//! The list emits `tracing` events for every mutation, with the payload type
//! name (`record_type`) and the record name as structured fields.
//!
//! ## What Gets Traced
//!
//! - **Insert**: `debug` on entry, `info` with the new `size`, `warn` when the node budget is spent
//! - **Find**: `debug` with whether a record was `found`
//! - **Delete**: `debug` on entry, `info` on removal, `warn` for empty lists and unknown names
//! - **Clear**: `info` with the number of `released` nodes
//!
//! ## Usage Examples
//!
//! ```bash
//! # Mutations only
//! RUST_LOG=info cargo run -p record-sample -- pets
//!
//! # Every lookup as well
//! RUST_LOG=debug cargo run -p record-sample -- pets
//!
//! # Filter to the list itself
//! RUST_LOG=record_list=debug cargo run -p record-sample -- fundraiser
//! ```
//!
//! Logs go to stderr so they never interleave with the console programs' prompts.

/// Installs a compact, `RUST_LOG`-filtered subscriber writing to stderr.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use record_type instead
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
