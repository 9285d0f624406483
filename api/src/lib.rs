pub mod extractor;
pub mod handler;
pub mod middleware;
pub mod model;
pub mod route;
