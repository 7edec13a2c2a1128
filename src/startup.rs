use std::{net::TcpListener, sync::Arc};

use actix_files::Files;
use actix_web::{
    dev::Server,
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};

use crate::{
    routes::{details_route, download_route, extract_route, health_check_route, index_route},
    services::{CsvExporter, PageFetcher},
};

pub fn run(
    listener: TcpListener,
    fetcher: Arc<dyn PageFetcher>,
    exporter: CsvExporter,
) -> Result<Server, std::io::Error> {
    let fetcher: Data<dyn PageFetcher> = Data::from(fetcher);
    let exporter = web::Data::new(exporter);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(index_route::index)
            .service(extract_route::extract)
            .service(download_route::download)
            .service(details_route::details)
            .service(health_check_route::health_check)
            .app_data(fetcher.clone())
            .app_data(exporter.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
