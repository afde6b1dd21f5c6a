//! Placeholder token grammar and resolution for template expansion.
//!
//! Template content carries `___NAME___` placeholders. This module defines:
//! - The parsed [`Token`] forms (simple fields, macros, unique-identifier
//!   requests, option lookups)
//! - The pure string [`Transformation`]s a token may declare
//! - The per-expansion [`VariableContext`] that resolves tokens
//! - The [`ContextBuilder`] that assembles a context from decoded template
//!   options, caller identifiers, and an [`crate::env::Environment`]

pub mod builder;
pub mod context;
pub mod token;
pub mod transform;

pub use builder::{
    ContextBuilder, OptionRejection, RawOptionEntry, TemplateOption,
    DEFAULT_FILE_NAME, DEFAULT_PROJECT_NAME,
};
pub use context::VariableContext;
pub use token::{MacroName, SimpleField, Token};
pub use transform::Transformation;
