use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    auth::AuthRepositoryImpl, enrollment::EnrollmentRepositoryImpl,
    health::HealthCheckRepositoryImpl, hotel::HotelRepositoryImpl, ticket::TicketRepositoryImpl,
};
use kernel::repository::{
    auth::AuthRepository, enrollment::EnrollmentRepository, health::HealthCheckRepository,
    hotel::HotelRepository, ticket::TicketRepository,
};
use kernel::service::hotel::HotelService;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    hotel_service: HotelService,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: &AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            &app_config.auth.jwt_secret,
        ));
        let hotel_repository = Arc::new(HotelRepositoryImpl::new(pool.clone()));
        let enrollment_repository = Arc::new(EnrollmentRepositoryImpl::new(pool.clone()));
        let ticket_repository = Arc::new(TicketRepositoryImpl::new(pool));

        Self::from_repositories(
            health_check_repository,
            auth_repository,
            hotel_repository,
            enrollment_repository,
            ticket_repository,
        )
    }

    /// Wires the registry from already-built repositories, e.g. test doubles.
    pub fn from_repositories(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        auth_repository: Arc<dyn AuthRepository>,
        hotel_repository: Arc<dyn HotelRepository>,
        enrollment_repository: Arc<dyn EnrollmentRepository>,
        ticket_repository: Arc<dyn TicketRepository>,
    ) -> Self {
        let hotel_service =
            HotelService::new(hotel_repository, enrollment_repository, ticket_repository);
        Self {
            health_check_repository,
            auth_repository,
            hotel_service,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn hotel_service(&self) -> &HotelService {
        &self.hotel_service
    }
}
