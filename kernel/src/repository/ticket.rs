use crate::model::{id::EnrollmentId, ticket::Ticket};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    // The returned ticket always carries its ticket type.
    async fn find_ticket_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>>;
}
