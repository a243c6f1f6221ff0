//! Contract counters, exposed in Prometheus text format at `/metrics/contracts`.
//!
//! HTTP request metrics come from the `actix-web-prometheus` middleware on
//! `/metrics`; these track the business outcome of each generation.

use actix_web::{web, HttpResponse, Responder};
use prometheus::{Encoder, IntCounter, Opts, Registry, TextEncoder};

use crate::AppState;

const NAMESPACE: &str = "sales_contract_server";

#[derive(Clone)]
pub struct ContractMetrics {
    registry: Registry,
    pub generated: IntCounter,
    pub failures: IntCounter,
}

impl ContractMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let generated = IntCounter::with_opts(
            Opts::new(
                "sales_contracts_generated_total",
                "Sales contracts rendered and returned",
            )
            .namespace(NAMESPACE),
        )?;
        let failures = IntCounter::with_opts(
            Opts::new(
                "sales_contract_failures_total",
                "Sales contract requests that failed after validation",
            )
            .namespace(NAMESPACE),
        )?;

        registry.register(Box::new(generated.clone()))?;
        registry.register(Box::new(failures.clone()))?;

        Ok(Self {
            registry,
            generated,
            failures,
        })
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

pub async fn contract_metrics(state: web::Data<AppState>) -> impl Responder {
    match state.metrics.encode() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(body),
        Err(e) => {
            log::error!("Failed to encode contract metrics: {}", e);
            HttpResponse::InternalServerError()
                .json(crate::ErrorResponse::internal_error("Failed to encode metrics"))
        }
    }
}
