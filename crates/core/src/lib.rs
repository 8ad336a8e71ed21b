//! Content Remixer Core
//!
//! Foundational types for the Content Remixer workspace. This crate has zero
//! dependencies on application-level code (HTTP, database, LLM providers).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `asset` - Static catalog of target output formats
//! - `template` - Prompt templates: built-in defaults plus user overrides
//! - `prompt` - Final prompt composition for one asset
//!
//! ## Design Principles
//!
//! 1. **Zero external dependencies beyond serde/thiserror** - keeps build times minimal
//! 2. **Pure in-memory logic** - persistence and transport live in the application crate
//! 3. **Unidirectional dependency** - this crate depends on nothing else in the workspace

pub mod asset;
pub mod error;
pub mod prompt;
pub mod template;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Asset Catalog ──────────────────────────────────────────────────────
pub use asset::{
    catalog_position, display_name, find_asset, is_known_asset, AssetDefinition, ASSET_CATALOG,
};

// ── Templates ──────────────────────────────────────────────────────────
pub use template::{default_prompt, default_template, Template, TemplateSet, TemplateUpdate};

// ── Prompt Composition ─────────────────────────────────────────────────
pub use prompt::{compose_prompt, PLATFORM_PLACEHOLDER};
