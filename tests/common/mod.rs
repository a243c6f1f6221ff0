//! Shared helpers for integration tests.
//!
//! `FakeRenderer` stands in for the Typst backend so the HTTP tests do not need
//! the `typst` binary installed.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sales_contract_server::contract::common::contract_filename;
use sales_contract_server::contract::{
    DocumentRenderer, GeneratedDocument, GeneratorError, SalesContractRequest,
};
use sales_contract_server::sequence::SequenceSource;
use sales_contract_server::AppState;
use serde_json::{json, Value};

pub struct FakeRenderer {
    calls: AtomicUsize,
    fail: bool,
}

impl FakeRenderer {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn new_failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DocumentRenderer for FakeRenderer {
    fn render(
        &self,
        request: &SalesContractRequest,
        number: u64,
    ) -> Result<GeneratedDocument, GeneratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(GeneratorError::TypstExit(1));
        }

        Ok(GeneratedDocument {
            filename: contract_filename(number),
            pdf: format!("%PDF-1.7 {} #{}", request.contract_no, number).into_bytes(),
        })
    }
}

pub fn test_state(sequence: Arc<dyn SequenceSource>, renderer: Arc<FakeRenderer>) -> AppState {
    AppState::new_with_components(sequence, renderer).unwrap()
}

pub fn valid_payload() -> Value {
    json!({
        "contract_no": "SI/2021/045",
        "date": "12 May 2021",
        "consignee": ["SMART DRAGON LANKA PVT LTD", "COLOMBO 03, SRI LANKA"],
        "notify_party": ["DEVI GLOBAL HK LTD", "HONG KONG"],
        "product_name": "Yellow Maize",
        "quantity": "500 MT",
        "price": "USD 310/MT",
        "amount": "USD 155,000"
    })
}
