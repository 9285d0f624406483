use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::id::HotelId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::hotel::{HotelResponse, HotelWithRoomsResponse},
};

#[tracing::instrument(skip(user, registry), fields(user_id = %user.id()))]
pub async fn show_hotel_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<HotelResponse>>> {
    let service = registry.hotel_service();
    service
        .verify_valid_ticket_existence_by_user_id(user.id())
        .await?;

    service
        .get_list_of_all_hotels()
        .await
        .map(|hotels| hotels.into_iter().map(HotelResponse::from).collect())
        .map(Json)
}

// The raw segment is parsed only after the gate, so an ineligible caller
// always sees the gate's answer. A non-numeric id cannot match any hotel.
#[tracing::instrument(skip(user, registry), fields(user_id = %user.id()))]
pub async fn show_hotel_with_rooms(
    user: AuthorizedUser,
    Path(hotel_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HotelWithRoomsResponse>> {
    let service = registry.hotel_service();
    service
        .verify_valid_ticket_existence_by_user_id(user.id())
        .await?;

    let hotel_id = hotel_id
        .parse::<HotelId>()
        .map_err(|_| AppError::not_found())?;

    service
        .get_hotel_with_rooms_by_hotel_id(hotel_id)
        .await
        .map(HotelWithRoomsResponse::from)
        .map(Json)
}
