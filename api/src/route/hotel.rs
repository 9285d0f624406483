use axum::{http::StatusCode, middleware::from_fn_with_state, routing::get, Router};
use registry::AppRegistry;

use crate::{
    handler::hotel::{show_hotel_list, show_hotel_with_rooms},
    middleware::require_authorized_user,
};

// The gate wraps the fallback too, so any path under the prefix answers 401 without a session.
pub fn build_hotel_routers(registry: AppRegistry) -> Router<AppRegistry> {
    let hotels_routers = Router::new()
        .route("/", get(show_hotel_list))
        .route("/:hotel_id", get(show_hotel_with_rooms))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(from_fn_with_state(registry, require_authorized_user));

    Router::new().nest("/hotels", hotels_routers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header::AUTHORIZATION, Request, StatusCode},
    };
    use chrono::{TimeZone, Utc};
    use http_body_util::BodyExt;
    use kernel::{
        model::{
            enrollment::Enrollment,
            hotel::{Hotel, HotelWithRooms, Room},
            id::{EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, UserId},
            ticket::{Ticket, TicketStatus, TicketType},
        },
        repository::{
            auth::MockAuthRepository, enrollment::MockEnrollmentRepository,
            health::MockHealthCheckRepository, hotel::MockHotelRepository,
            ticket::MockTicketRepository,
        },
    };
    use mockall::predicate::eq;
    use serde_json::{json, Value};
    use shared::error::AppError;
    use std::sync::Arc;
    use tower::ServiceExt;

    const TOKEN: &str = "valid-token";
    const USER: i32 = 1;

    enum Holder {
        NoEnrollment,
        NoTicket,
        Ticket {
            includes_hotel: bool,
            is_remote: bool,
            status: TicketStatus,
        },
    }

    const ELIGIBLE: Holder = Holder::Ticket {
        includes_hotel: true,
        is_remote: false,
        status: TicketStatus::Paid,
    };

    fn auth() -> MockAuthRepository {
        let mut auth = MockAuthRepository::new();
        auth.expect_fetch_user_id_from_token()
            .returning(|token| Ok((token.0 == TOKEN).then(|| UserId::new(USER))));
        auth
    }

    fn app(holder: Holder, hotels: MockHotelRepository) -> Router {
        let mut enrollments = MockEnrollmentRepository::new();
        let mut tickets = MockTicketRepository::new();
        match holder {
            Holder::NoEnrollment => {
                enrollments.expect_find_by_user_id().returning(|_| Ok(None));
            }
            Holder::NoTicket => {
                enrollments.expect_find_by_user_id().returning(|user_id| {
                    Ok(Some(Enrollment {
                        enrollment_id: EnrollmentId::new(10),
                        user_id,
                    }))
                });
                tickets
                    .expect_find_ticket_by_enrollment_id()
                    .returning(|_| Ok(None));
            }
            Holder::Ticket {
                includes_hotel,
                is_remote,
                status,
            } => {
                enrollments
                    .expect_find_by_user_id()
                    .with(eq(UserId::new(USER)))
                    .returning(|user_id| {
                        Ok(Some(Enrollment {
                            enrollment_id: EnrollmentId::new(10),
                            user_id,
                        }))
                    });
                tickets
                    .expect_find_ticket_by_enrollment_id()
                    .with(eq(EnrollmentId::new(10)))
                    .returning(move |enrollment_id| {
                        Ok(Some(Ticket {
                            ticket_id: TicketId::new(20),
                            enrollment_id,
                            status,
                            ticket_type: TicketType {
                                ticket_type_id: TicketTypeId::new(30),
                                name: "Presencial".into(),
                                price: 250,
                                is_remote,
                                includes_hotel,
                            },
                        }))
                    });
            }
        }

        let registry = AppRegistry::from_repositories(
            Arc::new(MockHealthCheckRepository::new()),
            Arc::new(auth()),
            Arc::new(hotels),
            Arc::new(enrollments),
            Arc::new(tickets),
        );
        build_hotel_routers(registry.clone()).with_state(registry)
    }

    fn hotel() -> Hotel {
        Hotel {
            hotel_id: HotelId::new(1),
            name: "Driven Resort".into(),
            image: "https://img.example/resort.png".into(),
            created_at: Utc.with_ymd_and_hms(2023, 1, 10, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2023, 1, 11, 8, 30, 0).unwrap(),
        }
    }

    fn room() -> Room {
        Room {
            room_id: RoomId::new(5),
            name: "101".into(),
            capacity: 3,
            hotel_id: HotelId::new(1),
            created_at: Utc.with_ymd_and_hms(2023, 2, 1, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2023, 2, 1, 9, 0, 0).unwrap(),
        }
    }

    fn untouched_hotels() -> MockHotelRepository {
        let mut hotels = MockHotelRepository::new();
        hotels.expect_find_all_hotels().never();
        hotels.expect_find_hotel_with_rooms_by_hotel_id().never();
        hotels
    }

    async fn get(app: Router, uri: &str, token: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut req = Request::builder().uri(uri);
        if let Some(token) = token {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let res = app.oneshot(req.body(Body::empty()).unwrap()).await.unwrap();
        let status = res.status();
        let body = res.into_body().collect().await.unwrap().to_bytes().to_vec();
        (status, body)
    }

    #[tokio::test]
    async fn requires_a_known_bearer_token() {
        for uri in ["/hotels", "/hotels/1"] {
            let (status, _) = get(app(ELIGIBLE, untouched_hotels()), uri, None).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);

            let (status, _) = get(app(ELIGIBLE, untouched_hotels()), uri, Some("lorem")).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
        }
    }

    #[tokio::test]
    async fn gate_covers_every_path_under_prefix() {
        for uri in ["/hotels/x/y", "/hotels/1/rooms"] {
            let (status, _) = get(app(ELIGIBLE, untouched_hotels()), uri, None).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");

            let (status, _) = get(app(ELIGIBLE, untouched_hotels()), uri, Some(TOKEN)).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn missing_enrollment_or_ticket_is_not_found() {
        for uri in ["/hotels", "/hotels/1"] {
            let (status, body) =
                get(app(Holder::NoEnrollment, untouched_hotels()), uri, Some(TOKEN)).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert!(body.is_empty());

            let (status, _) =
                get(app(Holder::NoTicket, untouched_hotels()), uri, Some(TOKEN)).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn ineligible_ticket_requires_payment() {
        let cases = [
            (true, true, TicketStatus::Paid),
            (false, false, TicketStatus::Paid),
            (true, false, TicketStatus::Reserved),
            (false, true, TicketStatus::Reserved),
        ];
        for uri in ["/hotels", "/hotels/1", "/hotels/abc"] {
            for (includes_hotel, is_remote, status) in cases {
                let holder = Holder::Ticket {
                    includes_hotel,
                    is_remote,
                    status,
                };
                let (code, body) = get(app(holder, untouched_hotels()), uri, Some(TOKEN)).await;
                assert_eq!(code, StatusCode::PAYMENT_REQUIRED, "{uri} {status}");
                assert!(body.is_empty());
            }
        }
    }

    #[tokio::test]
    async fn empty_hotel_list_is_not_found() {
        let mut hotels = MockHotelRepository::new();
        hotels.expect_find_all_hotels().returning(|| Ok(vec![]));

        let (status, _) = get(app(ELIGIBLE, hotels), "/hotels", Some(TOKEN)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn lists_hotels_without_rooms() {
        let mut hotels = MockHotelRepository::new();
        hotels.expect_find_all_hotels().returning(|| Ok(vec![hotel()]));

        let (status, body) = get(app(ELIGIBLE, hotels), "/hotels", Some(TOKEN)).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            json!([{
                "id": 1,
                "name": "Driven Resort",
                "image": "https://img.example/resort.png",
                "createdAt": "2023-01-10T12:00:00.000Z",
                "updatedAt": "2023-01-11T08:30:00.000Z",
            }])
        );
    }

    #[tokio::test]
    async fn shows_hotel_with_rooms() {
        let mut hotels = MockHotelRepository::new();
        hotels
            .expect_find_hotel_with_rooms_by_hotel_id()
            .with(eq(HotelId::new(1)))
            .returning(|_| {
                Ok(Some(HotelWithRooms {
                    hotel: hotel(),
                    rooms: vec![room()],
                }))
            });

        let (status, body) = get(app(ELIGIBLE, hotels), "/hotels/1", Some(TOKEN)).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            json!({
                "id": 1,
                "name": "Driven Resort",
                "image": "https://img.example/resort.png",
                "createdAt": "2023-01-10T12:00:00.000Z",
                "updatedAt": "2023-01-11T08:30:00.000Z",
                "Rooms": [{
                    "id": 5,
                    "name": "101",
                    "capacity": 3,
                    "hotelId": 1,
                    "createdAt": "2023-02-01T09:00:00.000Z",
                    "updatedAt": "2023-02-01T09:00:00.000Z",
                }],
            })
        );
    }

    #[tokio::test]
    async fn unknown_or_malformed_hotel_id_is_not_found() {
        let mut hotels = MockHotelRepository::new();
        hotels
            .expect_find_hotel_with_rooms_by_hotel_id()
            .with(eq(HotelId::new(999)))
            .times(1)
            .returning(|_| Ok(None));

        let app = app(ELIGIBLE, hotels);
        let (status, _) = get(app.clone(), "/hotels/999", Some(TOKEN)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        for uri in ["/hotels/abc", "/hotels/1.0", "/hotels/1e0", "/hotels/0x1"] {
            let (status, _) = get(app.clone(), uri, Some(TOKEN)).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn store_failures_are_opaque() {
        let mut hotels = MockHotelRepository::new();
        hotels.expect_find_all_hotels().returning(|| {
            Err(AppError::ConversionEntityError("hotel row is corrupt".into()))
        });

        let (status, body) = get(app(ELIGIBLE, hotels), "/hotels", Some(TOKEN)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, b"Unexpected Error");
    }
}
