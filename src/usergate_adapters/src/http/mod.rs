pub mod doc;
pub mod routes;
