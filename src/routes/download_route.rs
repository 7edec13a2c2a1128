use std::path::Path;

use actix_files::NamedFile;
use actix_web::{
    get,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    mime, web, HttpRequest, HttpResponse,
};

use crate::services::{CsvExporter, ATTACHMENT_FILENAME};

#[get("/download/{csv_path:.*}")]
async fn download(
    req: HttpRequest,
    csv_path: web::Path<String>,
    exporter: web::Data<CsvExporter>,
) -> Result<HttpResponse, actix_web::Error> {
    // Only the export file is ever served.
    if Path::new(csv_path.as_str()) != exporter.path() {
        log::warn!("Refusing to serve {}", csv_path);
        return Ok(HttpResponse::NotFound().finish());
    }

    let file = NamedFile::open_async(exporter.path())
        .await?
        .set_content_type(mime::TEXT_CSV)
        .set_content_disposition(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(ATTACHMENT_FILENAME.to_string())],
        });

    Ok(file.into_response(&req))
}
