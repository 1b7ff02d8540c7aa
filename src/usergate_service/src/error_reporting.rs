use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use usergate_adapters::{config::Environment, http::routes::UnexpectedErrorCause};

/// Logs the cause behind a 500 response. Production keeps it out of the logs.
pub async fn report_unexpected_errors(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    if let Some(UnexpectedErrorCause(cause)) = response.extensions_mut().remove() {
        if environment.is_production() {
            // TODO: forward the cause to an error tracker once one is configured.
            tracing::error!("Unexpected error while handling request");
        } else {
            tracing::error!(error = %cause, "Unexpected error while handling request");
        }
    }

    response
}
