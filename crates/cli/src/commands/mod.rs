//! Subcommand implementations.

pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod wishlist;

use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;

use aura_scents_storefront::error::StoreError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// No catalog product has this ID.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A `--add` item could not be parsed.
    #[error("Invalid cart item '{0}': expected ID or ID:QUANTITY")]
    InvalidItem(String),

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Output could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output could not be written.
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

/// Where command results go: human text or pretty JSON on stdout.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print `value` as JSON, or the lines produced by `text` otherwise.
    pub fn emit<T: Serialize>(
        self,
        value: &T,
        text: impl FnOnce(&mut dyn Write) -> io::Result<()>,
    ) -> Result<(), CliError> {
        let mut stdout = io::stdout().lock();
        if self.json {
            serde_json::to_writer_pretty(&mut stdout, value)?;
            writeln!(stdout)?;
        } else {
            text(&mut stdout)?;
        }
        stdout.flush()?;
        Ok(())
    }
}
