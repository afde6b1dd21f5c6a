//! Parsed placeholder tokens.
//!
//! A placeholder is `___NAME___`, optionally with a colon-separated
//! transformation suffix list (`___VARIABLE_prefix:bundleIdentifier___`).
//! Parsing never fails: names that are not a known field or macro fall
//! through to the option arm, where an absent option resolves to `""`.

use super::transform::Transformation;

/// Fixed context fields addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleField {
    FileName,
    FileBaseName,
    /// `file_base_name` passed through the identifier transform.
    FileBaseNameAsIdentifier,
    ProjectName,
    PackageName,
    UserName,
    FullUserName,
    Date,
    Year,
}

impl SimpleField {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "FILENAME" => Some(Self::FileName),
            "FILEBASENAME" => Some(Self::FileBaseName),
            "FILEBASENAMEASIDENTIFIER" => Some(Self::FileBaseNameAsIdentifier),
            "PROJECTNAME" => Some(Self::ProjectName),
            "PACKAGENAME" => Some(Self::PackageName),
            "USERNAME" => Some(Self::UserName),
            "FULLUSERNAME" => Some(Self::FullUserName),
            "DATE" => Some(Self::Date),
            "YEAR" => Some(Self::Year),
            _ => None,
        }
    }
}

/// Composite multi-field expansions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroName {
    /// The canonical file header comment block.
    FileHeader,
    /// The one-line copyright notice.
    Copyright,
}

impl MacroName {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "FILEHEADER" => Some(Self::FileHeader),
            "COPYRIGHT" => Some(Self::Copyright),
            _ => None,
        }
    }
}

/// A parsed placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A fixed field of the context, with optional trailing transforms.
    Simple {
        field: SimpleField,
        transforms: Vec<Transformation>,
    },
    /// A composite expansion over several context fields.
    Macro(MacroName),
    /// A cached-or-fresh unique identifier. `key` is the full token name and
    /// is only used for cache lookup, never for identifier content.
    UniqueId { key: String },
    /// A lookup in the context's option map, then transforms in order.
    Option {
        name: String,
        transforms: Vec<Transformation>,
    },
}

impl Token {
    /// Parse the interior of a `___…___` placeholder.
    ///
    /// `raw` is the text between the delimiters, e.g.
    /// `VARIABLE_bundleIdentifierPrefix:bundleIdentifier`. Unknown
    /// transformation names in the suffix are skipped; unknown token names
    /// become option lookups. A leading `VARIABLE_` prefix is stripped from
    /// option names so templates can address options by identifier.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split(':');
        let name = parts.next().unwrap_or_default();
        let transforms: Vec<Transformation> =
            parts.filter_map(Transformation::from_name).collect();

        if let Some(field) = SimpleField::from_name(name) {
            return Self::Simple { field, transforms };
        }

        if let Some(mac) = MacroName::from_name(name) {
            return Self::Macro(mac);
        }

        if name == "UUID" || name.starts_with("UUID_") {
            return Self::UniqueId { key: name.to_string() };
        }

        let option_name = name.strip_prefix("VARIABLE_").unwrap_or(name);
        Self::Option { name: option_name.to_string(), transforms }
    }
}
