use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use askama::Template;

use crate::services::{BatchError, ExportError, FetchError};

impl ResponseError for BatchError {
    fn status_code(&self) -> StatusCode {
        StatusCode::SERVICE_UNAVAILABLE
    }

    fn error_response(&self) -> HttpResponse {
        plain_error(self.status_code(), self)
    }
}

impl ResponseError for FetchError {
    fn status_code(&self) -> StatusCode {
        match self {
            FetchError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            FetchError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        plain_error(self.status_code(), self)
    }
}

impl ResponseError for ExportError {
    fn error_response(&self) -> HttpResponse {
        plain_error(self.status_code(), self)
    }
}

fn plain_error(status: StatusCode, e: &dyn std::error::Error) -> HttpResponse {
    log::error!("Request failed: {} | Source: {:?}", e, e.source());
    HttpResponse::build(status).body(e.to_string())
}

/// Renders an askama template into a 200 HTML response.
pub fn render<T: Template>(template: &T) -> Result<HttpResponse, actix_web::Error> {
    let body = template
        .render()
        .map_err(actix_web::error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
