//! Vendor configuration table.
//!
//! `vendors.default.yaml` is embedded so the built-in table ships with the
//! library. Callers may load their own table from a YAML string or file.
//! Patterns are compiled while loading, so a table that loads is usable.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::cleanup::{LiteralCleanup, Replacement, compile_pattern};
use crate::error::Result;
use crate::grammar::{ExpansionPolicy, TerminalTrim};

const DEFAULT_YAML: &str = include_str!("vendors.default.yaml");

/// How literals are pulled out of a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParserKind {
    /// HTML documentation; `selector` is a CSS selector.
    #[default]
    Markup,
    /// BNF grammar; `selector` names rules to expand.
    Grammar,
}

/// One keyword source, ready to use.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub urls: Vec<String>,
    pub parser: ParserKind,
    pub selectors: Vec<String>,
    pub cleanup: LiteralCleanup,
    pub policy: ExpansionPolicy,
}

/// Sources of one SQL vendor.
#[derive(Debug, Clone, Default)]
pub struct VendorConfig {
    pub skip: bool,
    pub commands: Option<SourceConfig>,
    pub keywords: Option<SourceConfig>,
}

/// Vendors in configuration order.
#[derive(Debug, Clone, Default)]
pub struct VendorTable {
    vendors: IndexMap<String, VendorConfig>,
}

impl VendorTable {
    /// The embedded default table.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(DEFAULT_YAML)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let raw: IndexMap<String, RawVendor> = serde_yaml::from_str(yaml)?;
        let vendors = raw
            .into_iter()
            .map(|(name, vendor)| Ok((name, vendor.compile()?)))
            .collect::<Result<IndexMap<_, _>>>()?;
        Ok(Self { vendors })
    }

    /// Load a table from a YAML file. Missing files are an error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded vendor table from {}", path.as_ref().display());
        Self::from_yaml_str(&yaml)
    }

    pub fn get(&self, vendor: &str) -> Option<&VendorConfig> {
        self.vendors.get(vendor)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VendorConfig)> {
        self.vendors.iter().map(|(name, vendor)| (name.as_str(), vendor))
    }

    /// Vendors not marked `skip`.
    pub fn active(&self) -> impl Iterator<Item = (&str, &VendorConfig)> {
        self.iter().filter(|(_, vendor)| !vendor.skip)
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

// ============================================================================
// SERDE SCHEMA
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVendor {
    #[serde(default)]
    skip: bool,
    commands: Option<RawSource>,
    keywords: Option<RawSource>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSource {
    #[serde(deserialize_with = "one_or_many")]
    urls: Vec<String>,
    #[serde(default)]
    parser: ParserKind,
    #[serde(default, deserialize_with = "one_or_many")]
    selector: Vec<String>,
    #[serde(default, rename = "match")]
    pattern: Option<String>,
    #[serde(default)]
    replace: Option<(String, String)>,
    #[serde(default)]
    after_first_literal: bool,
    #[serde(default = "default_split_literals")]
    split_literals: bool,
    #[serde(default)]
    collapse_alternatives: bool,
}

fn default_split_literals() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<String>, D::Error> {
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

impl RawVendor {
    fn compile(self) -> Result<VendorConfig> {
        Ok(VendorConfig {
            skip: self.skip,
            commands: self.commands.map(RawSource::compile).transpose()?,
            keywords: self.keywords.map(RawSource::compile).transpose()?,
        })
    }
}

impl RawSource {
    fn compile(self) -> Result<SourceConfig> {
        let mut cleanup = LiteralCleanup::new();
        if let Some(pattern) = &self.pattern {
            cleanup = cleanup.with_pattern(compile_pattern(pattern)?);
        }
        if let Some((find, with)) = self.replace {
            cleanup = cleanup.with_replacement(Replacement::new(&find, with)?);
        }

        let terminal_trim = if self.collapse_alternatives {
            TerminalTrim::Collapse
        } else {
            TerminalTrim::LeadingRun
        };

        Ok(SourceConfig {
            urls: self.urls,
            parser: self.parser,
            selectors: self.selector,
            cleanup,
            policy: ExpansionPolicy {
                after_first_literal: self.after_first_literal,
                split_literals: self.split_literals,
                terminal_trim,
            },
        })
    }
}
