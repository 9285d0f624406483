use crate::database::{model::ticket::TicketWithTypeRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::EnrollmentId, ticket::Ticket};
use kernel::repository::ticket::TicketRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct TicketRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl TicketRepository for TicketRepositoryImpl {
    async fn find_ticket_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>> {
        let row: Option<TicketWithTypeRow> = sqlx::query_as(
            r#"
                SELECT
                    t.id AS ticket_id,
                    t.enrollment_id,
                    t.status,
                    tt.id AS ticket_type_id,
                    tt.name AS ticket_type_name,
                    tt.price,
                    tt.is_remote,
                    tt.includes_hotel
                FROM tickets AS t
                INNER JOIN ticket_types AS tt ON tt.id = t.ticket_type_id
                WHERE t.enrollment_id = $1
            "#,
        )
        .bind(enrollment_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Ticket::try_from).transpose()
    }
}
