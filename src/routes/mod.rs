pub mod details_route;
pub mod download_route;
pub mod extract_route;
pub mod health_check_route;
pub mod index_route;
pub mod response_error;
