#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use api::route::routes;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Request, StatusCode},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use kernel::model::{
    auth::AccessToken,
    enrollment::Enrollment,
    hotel::{Hotel, Room},
    id::{EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, UserId},
    ticket::{Ticket, TicketStatus, TicketType},
};
use kernel::repository::{
    auth::AuthRepository, enrollment::EnrollmentRepository, health::HealthCheckRepository,
    hotel::HotelRepository, ticket::TicketRepository,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};
use tower::ServiceExt;

pub const VALID_TOKEN: &str = "valid-token";
pub const USER_ID: i32 = 1;

pub struct FakeAuthRepository;

#[async_trait]
impl AuthRepository for FakeAuthRepository {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        Ok((access_token.0 == VALID_TOKEN).then(|| UserId::new(USER_ID)))
    }
}

pub struct FakeEnrollmentRepository(pub Option<Enrollment>);

#[async_trait]
impl EnrollmentRepository for FakeEnrollmentRepository {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Enrollment>> {
        Ok(self.0.clone().filter(|e| e.user_id == user_id))
    }
}

#[derive(Clone, Copy)]
pub enum Fault {
    NotFound,
    Connection,
}

impl Fault {
    fn into_error(self) -> AppError {
        match self {
            Fault::NotFound => AppError::SpecificOperationError(sqlx::Error::RowNotFound),
            Fault::Connection => AppError::SpecificOperationError(sqlx::Error::PoolTimedOut),
        }
    }
}

pub enum FakeTicketRepository {
    Returns(Option<Ticket>),
    Fails(Fault),
}

#[async_trait]
impl TicketRepository for FakeTicketRepository {
    async fn find_by_user_id(&self, _user_id: UserId) -> AppResult<Option<Ticket>> {
        match self {
            FakeTicketRepository::Returns(ticket) => Ok(ticket.clone()),
            FakeTicketRepository::Fails(fault) => Err(fault.into_error()),
        }
    }
}

#[derive(Default)]
pub struct FakeHotelRepository {
    pub hotels: Vec<Hotel>,
    pub calls: AtomicUsize,
}

impl FakeHotelRepository {
    pub fn new(hotels: Vec<Hotel>) -> Self {
        Self {
            hotels,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HotelRepository for FakeHotelRepository {
    async fn find_all(&self) -> AppResult<Vec<Hotel>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.hotels.clone())
    }

    async fn find_with_rooms(&self, hotel_id: HotelId) -> AppResult<Option<Hotel>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.hotels.iter().find(|h| h.id == hotel_id).cloned())
    }
}

pub struct FakeHealthCheckRepository(pub bool);

#[async_trait]
impl HealthCheckRepository for FakeHealthCheckRepository {
    async fn check_db(&self) -> bool {
        self.0
    }
}

pub fn enrollment() -> Enrollment {
    let now = Utc::now();
    Enrollment {
        id: EnrollmentId::new(1),
        name: "Test Name".into(),
        cpf: "12345678901".into(),
        birthday: now,
        phone: "(21) 98999-9999".into(),
        user_id: UserId::new(USER_ID),
        created_at: now,
        updated_at: now,
    }
}

pub fn ticket(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Ticket {
    let now = Utc::now();
    Ticket {
        id: TicketId::new(1),
        status,
        enrollment_id: EnrollmentId::new(1),
        ticket_type: TicketType {
            id: TicketTypeId::new(1),
            name: "Test Type".into(),
            price: 500,
            is_remote,
            includes_hotel,
        },
        created_at: now,
        updated_at: now,
    }
}

pub fn eligible_ticket() -> Ticket {
    ticket(TicketStatus::Paid, false, true)
}

pub fn hotel(id: i32, room_names: &[&str]) -> Hotel {
    let now = Utc::now();
    Hotel {
        id: HotelId::new(id),
        name: format!("Hotel {id}"),
        image: format!("https://example.com/hotels/{id}.png"),
        created_at: now,
        updated_at: now,
        rooms: room_names
            .iter()
            .enumerate()
            .map(|(i, name)| Room {
                id: RoomId::new(id * 100 + i as i32),
                name: (*name).to_string(),
                capacity: 2,
                hotel_id: HotelId::new(id),
                created_at: now,
                updated_at: now,
            })
            .collect(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub hotels: Arc<FakeHotelRepository>,
}

pub struct TestAppBuilder {
    enrollment: Option<Enrollment>,
    tickets: FakeTicketRepository,
    hotels: Vec<Hotel>,
    db_healthy: bool,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            enrollment: None,
            tickets: FakeTicketRepository::Returns(None),
            hotels: Vec::new(),
            db_healthy: true,
        }
    }

    pub fn enrollment(mut self, enrollment: Enrollment) -> Self {
        self.enrollment = Some(enrollment);
        self
    }

    pub fn ticket(mut self, ticket: Ticket) -> Self {
        self.tickets = FakeTicketRepository::Returns(Some(ticket));
        self
    }

    pub fn ticket_fault(mut self, fault: Fault) -> Self {
        self.tickets = FakeTicketRepository::Fails(fault);
        self
    }

    pub fn hotels(mut self, hotels: Vec<Hotel>) -> Self {
        self.hotels = hotels;
        self
    }

    pub fn db_healthy(mut self, healthy: bool) -> Self {
        self.db_healthy = healthy;
        self
    }

    pub fn eligible(self) -> Self {
        self.enrollment(enrollment()).ticket(eligible_ticket())
    }

    pub fn build(self) -> TestApp {
        let hotels = Arc::new(FakeHotelRepository::new(self.hotels));
        let registry = AppRegistry::with_repositories(
            Arc::new(FakeHealthCheckRepository(self.db_healthy)),
            Arc::new(FakeAuthRepository),
            Arc::new(FakeEnrollmentRepository(self.enrollment)),
            Arc::new(self.tickets),
            hotels.clone(),
        );
        TestApp {
            router: routes().with_state(registry),
            hotels,
        }
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut req = Request::builder().uri(uri);
        if let Some(token) = token {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let req = req.body(Body::empty()).unwrap();

        let res = self.router.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let body = res.into_body().collect().await.unwrap().to_bytes().to_vec();
        (status, body)
    }

    pub async fn get_authorized(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        self.get(uri, Some(VALID_TOKEN)).await
    }
}
