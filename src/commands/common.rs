//! Common utility functions shared across command implementations.
//!
//! This module provides utilities for:
//! - Reading a PRD from a file or stdin
//! - Resolving the engine configuration
//! - Parsing the codebase allow-list flag
//! - Emitting reports as JSON or text

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::PrdplanError;

/// Path argument meaning "read from stdin"
pub const STDIN_PATH: &str = "-";

/// Options shared by every analysis command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: EngineConfig,
    pub json: bool,
}

impl CommandContext {
    /// Resolve the config from `--config`, then `PRDPLAN_CONFIG`, then defaults.
    pub fn new(config_path: Option<&Path>, json: bool) -> Result<Self> {
        let config = EngineConfig::resolve(config_path).context("Failed to load configuration")?;
        Ok(Self { config, json })
    }

    /// Print `value` as pretty JSON, or the text produced by `text`.
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
        if self.json {
            println!("{}", to_json(value)?);
        } else {
            print!("{}", text(value));
        }
        Ok(())
    }
}

/// Read the PRD document. `-` reads stdin.
pub fn read_prd(input: &Path) -> Result<String> {
    if input.as_os_str() == STDIN_PATH {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read PRD from stdin")?;
        return Ok(buffer);
    }

    let content = std::fs::read_to_string(input).map_err(|source| PrdplanError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    Ok(content)
}

/// Split a comma-separated codebase list, dropping blank entries.
pub fn parse_codebases(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn to_json<T: Serialize>(value: &T) -> crate::error::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
