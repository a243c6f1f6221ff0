use actix_web::{error, http::header, web, HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use super::common::CONTRACT_MIME_TYPE;
use super::models::{HealthResponse, SalesContractRequest};
use crate::{AppState, ErrorResponse};

pub const SEQUENCE_HEADER: &str = "X-Contract-Sequence";
pub const HEALTH_MESSAGE: &str = "Your Render App is Working!";

#[derive(Serialize, ToSchema)]
pub struct SequenceResponse {
    /// Number the next generated contract will receive
    pub next: u64,
}

/// Generate a sales contract PDF.
///
/// The body is validated by the JSON extractor before this runs, so a rejected
/// request never consumes a contract number.
#[utoipa::path(
    post,
    path = "/generate-pdf/",
    tag = "Sales Contract",
    request_body = SalesContractRequest,
    responses(
        (status = 200, description = "Generated contract as a PDF attachment"),
        (status = 400, description = "Missing or malformed field", body = ErrorResponse),
        (status = 500, description = "Counter store or renderer failure", body = ErrorResponse)
    )
)]
pub async fn generate_pdf(
    state: web::Data<AppState>,
    body: web::Json<SalesContractRequest>,
) -> impl Responder {
    let request = body.into_inner();

    let number = match state.sequence.issue_next().await {
        Ok(number) => number,
        Err(e) => {
            log::error!("Failed to issue contract number: {}", e);
            state.metrics.failures.inc();
            return HttpResponse::InternalServerError().json(ErrorResponse::internal_error(
                "Failed to issue contract number",
            ));
        }
    };
    log::info!(
        "Issued number {} for contract {}",
        number,
        request.contract_no
    );

    let renderer = state.renderer.clone();
    let document = match web::block(move || renderer.render(&request, number)).await {
        Ok(Ok(document)) => document,
        Ok(Err(e)) => {
            log::error!("Failed to render contract {}: {}", number, e);
            state.metrics.failures.inc();
            return HttpResponse::InternalServerError().json(ErrorResponse::internal_error(
                "Failed to render sales contract",
            ));
        }
        Err(e) => {
            log::error!("Render task for contract {} did not complete: {}", number, e);
            state.metrics.failures.inc();
            return HttpResponse::InternalServerError().json(ErrorResponse::internal_error(
                "Failed to render sales contract",
            ));
        }
    };

    state.metrics.generated.inc();
    log::info!(
        "Generated {} ({} bytes)",
        document.filename,
        document.pdf.len()
    );

    HttpResponse::Ok()
        .content_type(CONTRACT_MIME_TYPE)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", document.filename),
        ))
        .insert_header((SEQUENCE_HEADER, number.to_string()))
        .body(document.pdf)
}

/// Liveness check.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        message: HEALTH_MESSAGE.to_string(),
    })
}

/// Number the next contract will receive, without consuming it.
#[utoipa::path(
    get,
    path = "/sequence",
    tag = "Sales Contract",
    responses(
        (status = 200, description = "Next contract number", body = SequenceResponse),
        (status = 500, description = "Counter store failure", body = ErrorResponse)
    )
)]
pub async fn next_sequence(state: web::Data<AppState>) -> impl Responder {
    match state.sequence.peek().await {
        Ok(next) => HttpResponse::Ok().json(SequenceResponse { next }),
        Err(e) => {
            log::error!("Failed to read contract counter: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Failed to read contract counter"))
        }
    }
}

/// JSON extractor settings: body errors become `400` with an `ErrorResponse`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        log::warn!("Rejected contract request: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse::bad_request(&err.to_string()));
        error::InternalError::from_response(err, response).into()
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::resource("/").route(web::get().to(home)))
        .service(
            web::resource(["/generate-pdf/", "/generate-pdf"])
                .route(web::post().to(generate_pdf)),
        )
        .service(web::resource("/sequence").route(web::get().to(next_sequence)))
        .service(
            web::resource("/metrics/contracts")
                .route(web::get().to(crate::metrics::contract_metrics)),
        );
}
