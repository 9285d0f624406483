use kernel::model::{
    id::{EnrollmentId, TicketId, TicketTypeId},
    ticket::{Ticket, TicketStatus, TicketType},
};
use shared::error::AppError;

// One row per ticket, joined with the ticket type it references.
#[derive(sqlx::FromRow)]
pub struct TicketWithTypeRow {
    pub ticket_id: i32,
    pub enrollment_id: i32,
    pub status: String,
    pub ticket_type_id: i32,
    pub ticket_type_name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl TryFrom<TicketWithTypeRow> for Ticket {
    type Error = AppError;

    fn try_from(value: TicketWithTypeRow) -> Result<Self, Self::Error> {
        let TicketWithTypeRow {
            ticket_id,
            enrollment_id,
            status,
            ticket_type_id,
            ticket_type_name,
            price,
            is_remote,
            includes_hotel,
        } = value;
        let status = status.parse::<TicketStatus>().map_err(|_| {
            AppError::ConversionEntityError(format!(
                "ticket {ticket_id} has unknown status {status}"
            ))
        })?;
        Ok(Ticket {
            ticket_id: TicketId::new(ticket_id),
            enrollment_id: EnrollmentId::new(enrollment_id),
            status,
            ticket_type: TicketType {
                ticket_type_id: TicketTypeId::new(ticket_type_id),
                name: ticket_type_name,
                price,
                is_remote,
                includes_hotel,
            },
        })
    }
}
