//! Generator for the export sales contract.
//!
//! Loads the Typst layout once, then for each request appends a call that
//! carries the request data and the header logo. A missing logo does not fail
//! the document; the header is replaced by a placeholder instead.

use std::fs;
use std::path::{Path, PathBuf};

use super::common::{contract_filename, escape_typst_string, typst_string_array};
use super::engine::TypstRenderEngine;
use super::traits::DocumentRenderer;
use super::{GeneratedDocument, GeneratorError, SalesContractRequest};

pub const TEMPLATE_FILE: &str = "sales_contract.typ";
pub const LOGO_FILE: &str = "saleslogo.jpg";

pub struct SalesContractGenerator {
    template: String,
    static_dir: PathBuf,
    engine: TypstRenderEngine,
}

impl SalesContractGenerator {
    /// Create a generator reading its template and logo from `static_dir`.
    pub fn new(static_dir: impl AsRef<Path>, engine: TypstRenderEngine) -> Result<Self, GeneratorError> {
        let static_dir = static_dir.as_ref().to_path_buf();
        let template = fs::read_to_string(static_dir.join(TEMPLATE_FILE))
            .map_err(GeneratorError::TemplateIo)?;
        Ok(Self {
            template,
            static_dir,
            engine,
        })
    }

    /// Header logo, if it is present on disk.
    fn logo_path(&self) -> Option<PathBuf> {
        let path = self.static_dir.join(LOGO_FILE);
        if path.is_file() {
            Some(path)
        } else {
            log::warn!(
                "Header logo {} is missing, rendering placeholder",
                path.display()
            );
            None
        }
    }

    /// Full Typst source for one contract.
    pub fn render_source(&self, request: &SalesContractRequest, with_logo: bool) -> String {
        let logo = if with_logo {
            format!("\"{}\"", LOGO_FILE)
        } else {
            "none".to_string()
        };

        format!(
            r#"{}

#sales_contract(
  data: (
    contract_no: "{}",
    date: "{}",
    consignee: {},
    notify_party: {},
    product_name: "{}",
    quantity: "{}",
    price: "{}",
    amount: "{}",
  ),
  logo: {},
)
"#,
            self.template.trim_end(),
            escape_typst_string(&request.contract_no),
            escape_typst_string(&request.date),
            typst_string_array(&request.consignee),
            typst_string_array(&request.notify_party),
            escape_typst_string(&request.product_name),
            escape_typst_string(&request.quantity),
            escape_typst_string(&request.price),
            escape_typst_string(&request.amount),
            logo,
        )
    }
}

impl DocumentRenderer for SalesContractGenerator {
    fn render(
        &self,
        request: &SalesContractRequest,
        number: u64,
    ) -> Result<GeneratedDocument, GeneratorError> {
        let logo = self.logo_path();
        let source = self.render_source(request, logo.is_some());
        let assets: Vec<PathBuf> = logo.into_iter().collect();

        let pdf = self.engine.render(&source, &assets)?;

        Ok(GeneratedDocument {
            filename: contract_filename(number),
            pdf,
        })
    }
}
