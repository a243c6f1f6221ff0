//! Seam between the HTTP layer and the rendering backend.

use super::{GeneratedDocument, GeneratorError, SalesContractRequest};

/// Turns a contract record and its issued number into a finished document.
///
/// Rendering is blocking; callers run it off the async workers.
pub trait DocumentRenderer: Send + Sync {
    fn render(
        &self,
        request: &SalesContractRequest,
        number: u64,
    ) -> Result<GeneratedDocument, GeneratorError>;
}
