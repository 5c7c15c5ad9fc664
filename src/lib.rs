//! Generates the Material Design Icons C header (`IconsMaterialCommunity.h`)
//! from the upstream `meta.json` icon catalog.

pub mod app;
pub mod artifact;
pub mod catalog;
pub mod codepoint;
pub mod config;
pub mod generator;
pub mod logging;

pub use app::{run_with, ArtifactOutcome, GenerationReport};
pub use artifact::{check_artifact, sha256_hex, write_artifact, ArtifactError};
pub use catalog::{load_icon_catalog, parse_icon_catalog, CatalogError, IconRecord};
pub use codepoint::{constant_identifier, Codepoint, CodepointError};
pub use config::{
    ConfigError, GeneratorConfig, Invocation, Mode, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH,
};
pub use generator::{
    generate, CodepointBounds, DuplicateIdentifier, DuplicatePolicy, GeneratedHeader,
    GeneratorError, IconDefinition, FONT_ICON_FILE_NAME, ICON_CONSTANT_PREFIX,
};
pub use logging::{JsonLineLogger, LogLevel, LoggingError};
