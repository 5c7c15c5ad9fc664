//! Icon header generation.
//!
//! Records are folded in input order into per-icon definitions and a set of
//! codepoint bounds; the rendered header is a pure function of that input.

use crate::catalog::IconRecord;
use crate::codepoint::{constant_identifier, hex_bound, Codepoint, CodepointError};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Font file the generated constants are meant to index into.
pub const FONT_ICON_FILE_NAME: &str = "materialdesignicons-webfont.ttf";
/// Prefix shared by every per-icon constant.
pub const ICON_CONSTANT_PREFIX: &str = "ICON_MC_";
/// Starting minimum; above every codepoint the upstream font assigns.
pub const MIN_CODEPOINT_SENTINEL: u32 = 0xFFFFF;

const PREAMBLE: &str = "\
// Generated from https://github.com/Templarian/MaterialDesign/blob/master/meta.json
// for use with the font from https://materialdesignicons.com/
#pragma once
";

/// How colliding constant identifiers are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Emit every definition; the collision shows up as a redefinition when
    /// the header is compiled.
    #[default]
    Allow,
    /// Fail before anything is rendered.
    Reject,
}

/// Running codepoint bounds over the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointBounds {
    pub min: u32,
    pub max: u32,
    /// Largest codepoint that still fits the Basic Multilingual Plane, or 0.
    pub max_16: u32,
}

impl Default for CodepointBounds {
    fn default() -> Self {
        Self {
            min: MIN_CODEPOINT_SENTINEL,
            max: 0,
            max_16: 0,
        }
    }
}

impl CodepointBounds {
    /// Returns the bounds widened to include `codepoint`.
    pub fn absorb(self, codepoint: Codepoint) -> Self {
        let code = codepoint.value();
        Self {
            min: self.min.min(code),
            max: self.max.max(code),
            max_16: if codepoint.is_bmp() && code > self.max_16 {
                code
            } else {
                self.max_16
            },
        }
    }
}

/// A single `#define ICON_MC_*` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDefinition {
    /// Upper snake case identifier without the `ICON_MC_` prefix.
    pub identifier: String,
    /// Escaped UTF-8 bytes, without the surrounding quotes.
    pub literal: String,
    /// Codepoint text exactly as it appeared in the catalog.
    pub codepoint_text: String,
    pub codepoint: Codepoint,
}

impl IconDefinition {
    fn from_record(record: &IconRecord) -> Result<Self, GeneratorError> {
        let codepoint =
            Codepoint::parse_hex(&record.codepoint).map_err(|source| GeneratorError::Codepoint {
                name: record.name.clone(),
                source,
            })?;
        Ok(Self {
            identifier: constant_identifier(&record.name),
            literal: codepoint.c_literal(),
            codepoint_text: record.codepoint.clone(),
            codepoint,
        })
    }

    pub fn constant_name(&self) -> String {
        format!("{ICON_CONSTANT_PREFIX}{}", self.identifier)
    }
}

/// Two catalog names that collapse to the same constant identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIdentifier {
    pub identifier: String,
    pub first: String,
    pub second: String,
}

impl fmt::Display for DuplicateIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "icons {:?} and {:?} both map to {ICON_CONSTANT_PREFIX}{}",
            self.first, self.second, self.identifier
        )
    }
}

/// Fully computed header, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedHeader {
    pub definitions: Vec<IconDefinition>,
    pub bounds: CodepointBounds,
    pub duplicates: Vec<DuplicateIdentifier>,
}

impl GeneratedHeader {
    /// Builds the header model from catalog records, in order.
    pub fn build(icons: &[IconRecord], policy: DuplicatePolicy) -> Result<Self, GeneratorError> {
        let mut seen: HashMap<String, &str> = HashMap::with_capacity(icons.len());
        let mut duplicates = Vec::new();
        let mut definitions = Vec::with_capacity(icons.len());
        let mut bounds = CodepointBounds::default();

        for record in icons {
            let definition = IconDefinition::from_record(record)?;
            if let Some(first) = seen.get(&definition.identifier) {
                let duplicate = DuplicateIdentifier {
                    identifier: definition.identifier.clone(),
                    first: (*first).to_string(),
                    second: record.name.clone(),
                };
                if policy == DuplicatePolicy::Reject {
                    return Err(GeneratorError::DuplicateIdentifier(duplicate));
                }
                duplicates.push(duplicate);
            } else {
                seen.insert(definition.identifier.clone(), &record.name);
            }
            bounds = bounds.absorb(definition.codepoint);
            definitions.push(definition);
        }

        Ok(Self {
            definitions,
            bounds,
            duplicates,
        })
    }

    /// One-line catalog summary: `icons=<n> min=0x.. max_16=0x.. max=0x..`.
    pub fn summary(&self) -> String {
        format!(
            "icons={} min={} max_16={} max={}",
            self.definitions.len(),
            hex_bound(self.bounds.min),
            hex_bound(self.bounds.max_16),
            hex_bound(self.bounds.max)
        )
    }

    /// Renders the header text. Byte-for-byte stable for identical input.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(256 + self.definitions.len() * 64);
        out.push_str(PREAMBLE);
        out.push('\n');
        out.push_str(&format!(
            "#define FONT_ICON_FILE_NAME_MC \"{FONT_ICON_FILE_NAME}\"\n\n"
        ));
        out.push_str(&format!("#define ICON_MIN_MC {}\n", hex_bound(self.bounds.min)));
        out.push_str(&format!("#define ICON_MAX_16_MC {}\n", hex_bound(self.bounds.max_16)));
        out.push_str(&format!("#define ICON_MAX_MC {}\n", hex_bound(self.bounds.max)));
        for definition in &self.definitions {
            out.push_str(&format!(
                "#define {} \"{}\" // U+{}\n",
                definition.constant_name(),
                definition.literal,
                definition.codepoint_text
            ));
        }
        out
    }
}

/// Convenience wrapper: catalog records in, header text out.
pub fn generate(icons: &[IconRecord], policy: DuplicatePolicy) -> Result<String, GeneratorError> {
    Ok(GeneratedHeader::build(icons, policy)?.render())
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("icon {name:?} has an invalid codepoint: {source}")]
    Codepoint {
        name: String,
        source: CodepointError,
    },
    #[error("duplicate constant identifier: {0}")]
    DuplicateIdentifier(DuplicateIdentifier),
}
