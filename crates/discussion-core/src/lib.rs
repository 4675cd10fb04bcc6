//! Business logic and collaborator trait definitions for discussion creation.
//!
//! This crate decodes category forms, maps their fields to questions, and
//! runs the interactive creation flow. It defines the "ports" (collaborator
//! traits) that the infrastructure layer implements and depends only on
//! `discussion-types` -- never on `discussion-infra` or any HTTP crate.

pub mod form;
pub mod prompt;
pub mod repository;
pub mod service;
