use actix_web::{get, web, HttpResponse};
use askama::Template;

use crate::{
    domain::QueryIdentifier,
    services::{extract, verdict, PageFetcher},
};

use super::response_error::render;

#[derive(Template)]
#[template(path = "details.html")]
struct DetailsTemplate {
    query_number: QueryIdentifier,
    fields: Vec<(String, String)>,
    verdict: String,
    gaps: Vec<String>,
}

/// One identifier, unfiltered: every extracted field plus the verdict the
/// batch would have reached.
#[get("/details/{query_number}")]
async fn details(
    query_number: web::Path<QueryIdentifier>,
    fetcher: web::Data<dyn PageFetcher>,
) -> Result<HttpResponse, actix_web::Error> {
    let query_number = query_number.into_inner();

    fetcher.ensure_ready().await?;
    let document = fetcher.fetch(query_number).await?;
    let extraction = extract(&document);

    let verdict = match verdict(&extraction.fields) {
        Ok(()) => "Accepted".to_string(),
        Err(reject) => format!("Rejected: {}", reject),
    };

    render(&DetailsTemplate {
        query_number,
        fields: extraction
            .fields
            .iter()
            .map(|(label, value)| (label.to_string(), value.to_string()))
            .collect(),
        verdict,
        gaps: extraction.gaps,
    })
}
