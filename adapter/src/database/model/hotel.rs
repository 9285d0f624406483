use kernel::model::{
    hotel::{Hotel, HotelWithRooms, Room},
    id::{HotelId, RoomId},
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct HotelRow {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<HotelRow> for Hotel {
    fn from(value: HotelRow) -> Self {
        let HotelRow {
            id,
            name,
            image,
            created_at,
            updated_at,
        } = value;
        Hotel {
            hotel_id: HotelId::new(id),
            name,
            image,
            created_at,
            updated_at,
        }
    }
}

impl HotelRow {
    pub fn into_hotel_with_rooms(self, rooms: Vec<RoomRow>) -> HotelWithRooms {
        HotelWithRooms {
            hotel: self.into(),
            rooms: rooms.into_iter().map(Room::from).collect(),
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            id,
            name,
            capacity,
            hotel_id,
            created_at,
            updated_at,
        } = value;
        Room {
            room_id: RoomId::new(id),
            name,
            capacity,
            hotel_id: HotelId::new(hotel_id),
            created_at,
            updated_at,
        }
    }
}
