use crate::model::{
    hotel::{Hotel, HotelWithRooms},
    id::HotelId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn find_all_hotels(&self) -> AppResult<Vec<Hotel>>;
    async fn find_hotel_with_rooms_by_hotel_id(
        &self,
        hotel_id: HotelId,
    ) -> AppResult<Option<HotelWithRooms>>;
}
