//! Collaborator trait definitions (ports).
//!
//! These traits define the remote operations that the infrastructure layer
//! (discussion-infra) implements. The core crate never depends on any HTTP
//! client or API schema.

pub mod category;
pub mod discussion;

pub use category::{CategoryDiscovery, TemplateSource, template_path};
pub use discussion::DiscussionPublisher;
