//! Shared test utilities for the reveal-init workspace.
//!
//! This crate is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: git repository fixtures
//! - [`template`]: [`TemplateRepo`](template::TemplateRepo) with a reveal.js-like tree

pub mod git;
pub mod template;
