use axum::{extract::Request, middleware::Next, response::Response};

use crate::extractor::AuthorizedUser;

/// Rejects the request with 401 unless it carries a token with a live
/// session, and hands the resolved user on to the handler.
pub async fn require_authorized_user(
    user: AuthorizedUser,
    mut req: Request,
    next: Next,
) -> Response {
    req.extensions_mut().insert(user);
    next.run(req).await
}
