//! Sales contract generation.
//!
//! - `models` - request payload accepted by the HTTP endpoint
//! - `generator` - fills the Typst template for one contract
//! - `engine` - compiles Typst source to PDF
//! - `handlers` - HTTP endpoints tying the sequence issuer and the renderer together

pub mod common;
pub mod engine;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod traits;

pub use engine::TypstRenderEngine;
pub use generator::SalesContractGenerator;
pub use models::SalesContractRequest;
pub use traits::DocumentRenderer;

use thiserror::Error;

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to load Typst template: {0}")]
    TemplateIo(#[source] std::io::Error),
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write Typst source: {0}")]
    WriteTypst(#[source] std::io::Error),
    #[error("failed to stage asset '{0}': {1}")]
    StageAsset(String, #[source] std::io::Error),
    #[error("Typst CLI execution failed: {0}")]
    TypstIo(#[source] std::io::Error),
    #[error("Typst CLI exited with status {0}")]
    TypstExit(i32),
    #[error("failed to read generated PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub pdf: Vec<u8>,
}
