use chrono::{DateTime, SecondsFormat, Utc};
use kernel::model::{
    hotel::{Hotel, HotelWithRooms, Room},
    id::{HotelId, RoomId},
};
use serde::Serialize;

// 2023-01-10T12:00:00.000Z
fn to_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Hotel> for HotelResponse {
    fn from(value: Hotel) -> Self {
        let Hotel {
            hotel_id,
            name,
            image,
            created_at,
            updated_at,
        } = value;
        Self {
            id: hotel_id,
            name,
            image,
            created_at: to_timestamp(created_at),
            updated_at: to_timestamp(updated_at),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            room_id,
            name,
            capacity,
            hotel_id,
            created_at,
            updated_at,
        } = value;
        Self {
            id: room_id,
            name,
            capacity,
            hotel_id,
            created_at: to_timestamp(created_at),
            updated_at: to_timestamp(updated_at),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelWithRoomsResponse {
    #[serde(flatten)]
    pub hotel: HotelResponse,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomResponse>,
}

impl From<HotelWithRooms> for HotelWithRoomsResponse {
    fn from(value: HotelWithRooms) -> Self {
        let HotelWithRooms { hotel, rooms } = value;
        Self {
            hotel: hotel.into(),
            rooms: rooms.into_iter().map(RoomResponse::from).collect(),
        }
    }
}
