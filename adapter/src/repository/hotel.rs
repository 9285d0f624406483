use crate::database::{
    model::hotel::{HotelRow, RoomRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    hotel::{Hotel, HotelWithRooms},
    id::HotelId,
};
use kernel::repository::hotel::HotelRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct HotelRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl HotelRepository for HotelRepositoryImpl {
    async fn find_all_hotels(&self) -> AppResult<Vec<Hotel>> {
        let rows: Vec<HotelRow> = sqlx::query_as(
            r#"
                SELECT id, name, image, created_at, updated_at
                FROM hotels
                ORDER BY id
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_hotel_with_rooms_by_hotel_id(
        &self,
        hotel_id: HotelId,
    ) -> AppResult<Option<HotelWithRooms>> {
        let row: Option<HotelRow> = sqlx::query_as(
            r#"
                SELECT id, name, image, created_at, updated_at
                FROM hotels
                WHERE id = $1
            "#,
        )
        .bind(hotel_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let rooms: Vec<RoomRow> = sqlx::query_as(
            r#"
                SELECT id, name, capacity, hotel_id, created_at, updated_at
                FROM rooms
                WHERE hotel_id = $1
                ORDER BY id
            "#,
        )
        .bind(hotel_id.raw())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(Some(row.into_hotel_with_rooms(rooms)))
    }
}
