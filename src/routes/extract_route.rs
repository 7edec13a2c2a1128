use std::num::NonZeroU64;

use actix_web::{post, web, HttpResponse};
use serde::Deserialize;

use crate::{
    domain::{QueryRange, ResultTable},
    services::{BatchRunner, CsvExporter, PageFetcher},
};

use super::{index_route::IndexTemplate, response_error::render};

/// Registry identifiers are positive; a zero bound fails deserialization (400).
#[derive(Deserialize)]
struct ExtractForm {
    start_query: NonZeroU64,
    end_query: NonZeroU64,
}

#[post("/extract")]
async fn extract(
    form: web::Form<ExtractForm>,
    fetcher: web::Data<dyn PageFetcher>,
    exporter: web::Data<CsvExporter>,
) -> Result<HttpResponse, actix_web::Error> {
    let range = QueryRange::new(form.start_query.get(), form.end_query.get());

    let report = BatchRunner::new(fetcher.get_ref()).run(range).await?;
    let csv_path = exporter.export(&report.records)?;

    log::info!("Data extraction completed.");

    render(&IndexTemplate {
        table: Some(ResultTable::from_records(&report.records)),
        csv_path: Some(csv_path.display().to_string()),
        skipped: report.skipped(),
    })
}
