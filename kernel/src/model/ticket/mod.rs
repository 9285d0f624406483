use crate::model::id::{EnrollmentId, TicketId, TicketTypeId};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketType {
    pub ticket_type_id: TicketTypeId,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub ticket_id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
}

impl Ticket {
    /// A ticket opens the hotel listing only when it is a paid, in-person
    /// ticket whose type bundles a hotel stay.
    pub fn grants_hotel_access(&self) -> bool {
        self.ticket_type.includes_hotel
            && !self.ticket_type.is_remote
            && self.status == TicketStatus::Paid
    }
}
