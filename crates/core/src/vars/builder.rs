//! Assembly of a [`VariableContext`] from decoded options, caller
//! identifiers, and an environment.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::Datelike;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::debug;

use crate::env::Environment;

use super::context::VariableContext;

/// File name used when the caller supplies none.
pub const DEFAULT_FILE_NAME: &str = "File.txt";

/// Project name used when the caller supplies none.
pub const DEFAULT_PROJECT_NAME: &str = "Untitled";

/// A loosely-typed option record as it appears in template metadata.
///
/// Every field is optional by design: the metadata layer hands these through
/// as-is and the builder decides which entries are usable. Defaults may be
/// written as strings, booleans, or numbers in the source metadata; all are
/// read back as strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOptionEntry {
    #[serde(rename = "Identifier")]
    pub identifier: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Default", default, deserialize_with = "loose_string")]
    pub default: Option<String>,
    #[serde(rename = "Type")]
    pub option_type: Option<String>,
    #[serde(rename = "Required")]
    pub required: Option<bool>,
}

/// Accept string, boolean, or numeric scalars and read them as strings.
fn loose_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Flag(bool),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Loose>::deserialize(de)?.map(|v| match v {
        Loose::Text(s) => s,
        Loose::Flag(b) => if b { "true" } else { "false" }.to_string(),
        Loose::Int(i) => i.to_string(),
        Loose::Float(f) => f.to_string(),
    }))
}

/// A fully-populated option: identifier plus default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateOption {
    pub identifier: String,
    pub name: Option<String>,
    pub default: String,
}

/// Why a raw entry did not make it into the option map.
///
/// Rejections are policy, not failure: the builder skips the entry and
/// carries on. They exist as values so the skip decision is explicit and a
/// caller can surface them if it wants to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionRejection {
    #[error("option entry has no identifier")]
    MissingIdentifier,

    #[error("option entry has no default value")]
    MissingDefault,
}

impl TryFrom<&RawOptionEntry> for TemplateOption {
    type Error = OptionRejection;

    fn try_from(raw: &RawOptionEntry) -> Result<Self, Self::Error> {
        let identifier = raw
            .identifier
            .as_ref()
            .filter(|s| !s.is_empty())
            .ok_or(OptionRejection::MissingIdentifier)?;
        let default =
            raw.default.as_ref().ok_or(OptionRejection::MissingDefault)?;

        Ok(Self {
            identifier: identifier.clone(),
            name: raw.name.clone(),
            default: default.clone(),
        })
    }
}

/// Builds a [`VariableContext`]. Building never fails: missing caller
/// identifiers fall back to documented defaults and malformed option
/// entries are skipped.
#[derive(Debug, Default)]
pub struct ContextBuilder {
    file_name: Option<String>,
    project_name: Option<String>,
    package_name: Option<String>,
    raw_options: Vec<RawOptionEntry>,
    overrides: Vec<(String, String)>,
}

impl ContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    /// Distinct package identifier; defaults to the project name.
    #[must_use]
    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    /// Raw option entries as decoded from template metadata. Entries
    /// missing an identifier or a default are skipped at build time.
    #[must_use]
    pub fn raw_options(mut self, entries: impl IntoIterator<Item = RawOptionEntry>) -> Self {
        self.raw_options.extend(entries);
        self
    }

    /// Set an option value directly, overriding any raw-entry default.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Snapshot the environment and produce the context.
    ///
    /// The environment is read exactly once here; an environment that later
    /// changes its answers does not affect an already-built context.
    #[must_use]
    pub fn build(self, env: Arc<dyn Environment>) -> VariableContext {
        let file_name =
            self.file_name.unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
        let file_base_name = strip_one_extension(&file_name);
        let project_name = self
            .project_name
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());
        let package_name =
            self.package_name.unwrap_or_else(|| project_name.clone());

        let mut options = HashMap::new();
        for raw in &self.raw_options {
            match TemplateOption::try_from(raw) {
                Ok(opt) => {
                    options.insert(opt.identifier, opt.default);
                }
                Err(reason) => {
                    debug!(identifier = ?raw.identifier, %reason, "skipping option entry");
                }
            }
        }
        for (key, value) in self.overrides {
            options.insert(key, value);
        }

        let now = env.now();
        let formatted_date =
            format!("{}/{}/{}", now.month(), now.day(), now.year());
        let year = now.year().to_string();
        let user_name = env.user_name();
        let full_user_name = env.full_user_name();

        VariableContext {
            file_name,
            file_base_name,
            project_name,
            package_name,
            user_name,
            full_user_name,
            formatted_date,
            year,
            options,
            id_cache: HashMap::new(),
            env,
        }
    }
}

/// Remove exactly one trailing extension component, if present.
fn strip_one_extension(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .map_or_else(|| file_name.to_string(), ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::env::FixedEnvironment;

    use super::*;

    #[test]
    fn base_name_strips_one_extension() {
        assert_eq!(strip_one_extension("MyClass.ext"), "MyClass");
        assert_eq!(strip_one_extension("archive.tar.gz"), "archive.tar");
    }

    #[test]
    fn base_name_without_extension_is_unchanged() {
        assert_eq!(strip_one_extension("Makefile"), "Makefile");
        assert_eq!(strip_one_extension(".hidden"), ".hidden");
    }

    #[test]
    fn option_decode_requires_identifier_and_default() {
        let ok = RawOptionEntry {
            identifier: Some("productName".into()),
            default: Some("App".into()),
            ..Default::default()
        };
        let no_id = RawOptionEntry {
            default: Some("App".into()),
            ..Default::default()
        };
        let no_default = RawOptionEntry {
            identifier: Some("productName".into()),
            ..Default::default()
        };

        assert!(TemplateOption::try_from(&ok).is_ok());
        assert_eq!(
            TemplateOption::try_from(&no_id),
            Err(OptionRejection::MissingIdentifier)
        );
        assert_eq!(
            TemplateOption::try_from(&no_default),
            Err(OptionRejection::MissingDefault)
        );
    }

    #[test]
    fn build_filters_malformed_entries() {
        let entries = vec![
            RawOptionEntry {
                identifier: Some("good".into()),
                default: Some("value".into()),
                ..Default::default()
            },
            RawOptionEntry { default: Some("orphan".into()), ..Default::default() },
            RawOptionEntry { identifier: Some("bare".into()), ..Default::default() },
        ];

        let ctx = ContextBuilder::new()
            .raw_options(entries)
            .build(Arc::new(FixedEnvironment::default()));

        assert_eq!(ctx.options().len(), 1);
        assert_eq!(ctx.options().get("good").map(String::as_str), Some("value"));
    }

    #[test]
    fn overrides_win_over_raw_defaults() {
        let entries = vec![RawOptionEntry {
            identifier: Some("productName".into()),
            default: Some("Default".into()),
            ..Default::default()
        }];

        let ctx = ContextBuilder::new()
            .raw_options(entries)
            .option("productName", "Overridden")
            .build(Arc::new(FixedEnvironment::default()));

        assert_eq!(
            ctx.options().get("productName").map(String::as_str),
            Some("Overridden")
        );
    }

    #[test]
    fn defaults_apply_when_caller_omits_identifiers() {
        let ctx = ContextBuilder::new().build(Arc::new(FixedEnvironment::default()));
        assert_eq!(ctx.file_name(), DEFAULT_FILE_NAME);
        assert_eq!(ctx.file_base_name(), "File");
        assert_eq!(ctx.project_name(), DEFAULT_PROJECT_NAME);
        assert_eq!(ctx.package_name(), DEFAULT_PROJECT_NAME);
    }

    #[test]
    fn package_name_can_differ_from_project() {
        let ctx = ContextBuilder::new()
            .project_name("MyApp")
            .package_name("com.example.myapp")
            .build(Arc::new(FixedEnvironment::default()));
        assert_eq!(ctx.package_name(), "com.example.myapp");
    }
}
