use crate::model::{enrollment::Enrollment, id::UserId};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Enrollment>>;
}
