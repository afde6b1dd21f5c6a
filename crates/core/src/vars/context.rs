//! Per-expansion resolution state.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;

use crate::env::Environment;

use super::token::{MacroName, SimpleField, Token};
use super::transform::{apply_all, identifier_safe};

/// The unit of state for one expansion pass.
///
/// All identifying strings are snapshotted from the [`Environment`] when the
/// context is built and never change afterwards; resolution is read-only
/// with respect to them. The only mutable state is the unique-identifier
/// cache, which grows append-only: once a key has been assigned an
/// identifier, every later request for that key returns the same string.
///
/// A context is built once per generation unit and discarded after; it holds
/// no cross-run state and never shares its cache with another context.
/// Concurrent `resolve` calls against one instance are not synchronized
/// here; callers that want that must serialize externally.
pub struct VariableContext {
    pub(super) file_name: String,
    pub(super) file_base_name: String,
    pub(super) project_name: String,
    pub(super) package_name: String,
    pub(super) user_name: String,
    pub(super) full_user_name: String,
    pub(super) formatted_date: String,
    pub(super) year: String,
    pub(super) options: HashMap<String, String>,
    pub(super) id_cache: HashMap<String, String>,
    pub(super) env: Arc<dyn Environment>,
}

impl VariableContext {
    /// Resolve a token to its final string. Never fails: absent options
    /// resolve to the empty string and transforms are total.
    pub fn resolve(&mut self, token: &Token) -> String {
        match token {
            Token::Simple { field, transforms } => {
                apply_all(transforms, self.simple_field(*field))
            }
            Token::Macro(MacroName::FileHeader) => self.file_header(),
            Token::Macro(MacroName::Copyright) => self.copyright_line(),
            Token::UniqueId { key } => self.unique_id(key),
            Token::Option { name, transforms } => {
                let base = self.options.get(name).cloned().unwrap_or_default();
                apply_all(transforms, base)
            }
        }
    }

    fn simple_field(&self, field: SimpleField) -> String {
        match field {
            SimpleField::FileName => self.file_name.clone(),
            SimpleField::FileBaseName => self.file_base_name.clone(),
            // Cheap and pure, so recomputed on every call rather than cached.
            SimpleField::FileBaseNameAsIdentifier => {
                identifier_safe(&self.file_base_name)
            }
            SimpleField::ProjectName => self.project_name.clone(),
            SimpleField::PackageName => self.package_name.clone(),
            SimpleField::UserName => self.user_name.clone(),
            SimpleField::FullUserName => self.full_user_name.clone(),
            SimpleField::Date => self.formatted_date.clone(),
            SimpleField::Year => self.year.clone(),
        }
    }

    /// The exact copyright notice. Punctuation and spacing are contract:
    /// `Copyright © {year} {full user name}. All rights reserved.`
    fn copyright_line(&self) -> String {
        format!(
            "Copyright © {} {}. All rights reserved.",
            self.year, self.full_user_name
        )
    }

    /// The canonical header comment block: file name, project name, author
    /// line with the human-readable date, then the copyright notice.
    fn file_header(&self) -> String {
        format!(
            "//\n//  {}\n//  {}\n//\n//  Created by {} on {}.\n//  {}\n//",
            self.file_name,
            self.project_name,
            self.full_user_name,
            self.formatted_date,
            self.copyright_line()
        )
    }

    /// Cached per key; first use draws a fresh identifier from the
    /// environment and stores its uppercase hyphenated form.
    fn unique_id(&mut self, key: &str) -> String {
        if let Some(cached) = self.id_cache.get(key) {
            return cached.clone();
        }

        let id = self
            .env
            .new_identifier()
            .hyphenated()
            .to_string()
            .to_ascii_uppercase();
        trace!(key, id = %id, "generated unique identifier");
        self.id_cache.insert(key.to_string(), id.clone());
        id
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn file_base_name(&self) -> &str {
        &self.file_base_name
    }

    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    /// The flattened option-default map (read-only).
    #[must_use]
    pub fn options(&self) -> &HashMap<String, String> {
        &self.options
    }
}

impl std::fmt::Debug for VariableContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariableContext")
            .field("file_name", &self.file_name)
            .field("file_base_name", &self.file_base_name)
            .field("project_name", &self.project_name)
            .field("package_name", &self.package_name)
            .field("user_name", &self.user_name)
            .field("full_user_name", &self.full_user_name)
            .field("formatted_date", &self.formatted_date)
            .field("year", &self.year)
            .field("options", &self.options)
            .field("id_cache", &self.id_cache)
            .finish_non_exhaustive()
    }
}
