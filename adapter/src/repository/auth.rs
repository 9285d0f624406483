use crate::database::ConnectionPool;
use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use kernel::model::{auth::AccessToken, id::UserId};
use kernel::repository::auth::AuthRepository;
use serde::Deserialize;
use shared::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    user_id: i32,
}

pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    decoding_key: DecodingKey,
}

impl AuthRepositoryImpl {
    pub fn new(db: ConnectionPool, jwt_secret: &str) -> Self {
        Self {
            db,
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
        }
    }
}

// Tokens are issued without an expiry; a token stays valid while its session row exists.
fn decode_user_id(decoding_key: &DecodingKey, token: &str) -> Option<UserId> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;

    jsonwebtoken::decode::<Claims>(token, decoding_key, &validation)
        .map(|data| UserId::new(data.claims.user_id))
        .inspect_err(|e| tracing::debug!(error.message = %e, "rejected access token"))
        .ok()
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let Some(user_id) = decode_user_id(&self.decoding_key, &access_token.0) else {
            return Ok(None);
        };

        let session: Option<i32> = sqlx::query_scalar(
            r#"
                SELECT id
                FROM sessions
                WHERE token = $1
            "#,
        )
        .bind(&access_token.0)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(session.map(|_| user_id))
    }
}
