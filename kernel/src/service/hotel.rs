use std::sync::Arc;

use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::{
    model::{
        hotel::{Hotel, HotelWithRooms},
        id::{HotelId, UserId},
    },
    repository::{
        enrollment::EnrollmentRepository, hotel::HotelRepository, ticket::TicketRepository,
    },
};

/// Hotel listing behind the ticket eligibility gate.
#[derive(new, Clone)]
pub struct HotelService {
    hotel_repository: Arc<dyn HotelRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
}

impl HotelService {
    /// Succeeds only when the user is enrolled and holds a paid, in-person
    /// ticket that includes a hotel stay.
    pub async fn verify_valid_ticket_existence_by_user_id(&self, user_id: UserId) -> AppResult<()> {
        let enrollment = self
            .enrollment_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| {
                tracing::debug!(%user_id, "no enrollment for user");
                AppError::not_found()
            })?;

        let ticket = self
            .ticket_repository
            .find_ticket_by_enrollment_id(enrollment.enrollment_id)
            .await?
            .ok_or_else(|| {
                tracing::debug!(
                    %user_id,
                    enrollment_id = %enrollment.enrollment_id,
                    "no ticket for enrollment"
                );
                AppError::not_found()
            })?;

        if !ticket.grants_hotel_access() {
            tracing::debug!(
                %user_id,
                ticket_id = %ticket.ticket_id,
                status = %ticket.status,
                includes_hotel = ticket.ticket_type.includes_hotel,
                is_remote = ticket.ticket_type.is_remote,
                "ticket does not grant hotel access"
            );
            return Err(AppError::payment_required());
        }

        Ok(())
    }

    pub async fn get_list_of_all_hotels(&self) -> AppResult<Vec<Hotel>> {
        let hotels = self.hotel_repository.find_all_hotels().await?;
        if hotels.is_empty() {
            return Err(AppError::not_found());
        }
        Ok(hotels)
    }

    pub async fn get_hotel_with_rooms_by_hotel_id(
        &self,
        hotel_id: HotelId,
    ) -> AppResult<HotelWithRooms> {
        self.hotel_repository
            .find_hotel_with_rooms_by_hotel_id(hotel_id)
            .await?
            .ok_or_else(AppError::not_found)
    }
}
