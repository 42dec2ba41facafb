use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    auth::AuthRepositoryImpl, enrollment::EnrollmentRepositoryImpl,
    health::HealthCheckRepositoryImpl, hotel::HotelRepositoryImpl,
    ticket::TicketRepositoryImpl,
};
use kernel::repository::{
    auth::AuthRepository, enrollment::EnrollmentRepository, health::HealthCheckRepository,
    hotel::HotelRepository, ticket::TicketRepository,
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
    hotel_repository: Arc<dyn HotelRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(pool.clone()));
        let enrollment_repository = Arc::new(EnrollmentRepositoryImpl::new(pool.clone()));
        let ticket_repository = Arc::new(TicketRepositoryImpl::new(pool.clone()));
        let hotel_repository = Arc::new(HotelRepositoryImpl::new(pool));
        Self {
            health_check_repository,
            auth_repository,
            enrollment_repository,
            ticket_repository,
            hotel_repository,
        }
    }

    // データベースを介さない実装を差し込むためのコンストラクタ
    pub fn with_repositories(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        auth_repository: Arc<dyn AuthRepository>,
        enrollment_repository: Arc<dyn EnrollmentRepository>,
        ticket_repository: Arc<dyn TicketRepository>,
        hotel_repository: Arc<dyn HotelRepository>,
    ) -> Self {
        Self {
            health_check_repository,
            auth_repository,
            enrollment_repository,
            ticket_repository,
            hotel_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn enrollment_repository(&self) -> Arc<dyn EnrollmentRepository> {
        self.enrollment_repository.clone()
    }

    pub fn ticket_repository(&self) -> Arc<dyn TicketRepository> {
        self.ticket_repository.clone()
    }

    pub fn hotel_repository(&self) -> Arc<dyn HotelRepository> {
        self.hotel_repository.clone()
    }
}
