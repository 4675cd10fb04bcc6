//! Business logic services (use cases).
//!
//! Services orchestrate collaborator calls, prompting, and business rules.
//! They depend on traits (ports) -- never on concrete infrastructure
//! implementations.

pub mod discussion;

pub use discussion::{DiscussionService, Draft, collect_draft};
