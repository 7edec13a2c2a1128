use actix_web::{get, HttpResponse};
use askama::Template;

use crate::domain::ResultTable;

use super::response_error::render;

#[derive(Template, Default)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub table: Option<ResultTable>,
    pub csv_path: Option<String>,
    pub skipped: u64,
}

#[get("/")]
async fn index() -> Result<HttpResponse, actix_web::Error> {
    render(&IndexTemplate::default())
}
