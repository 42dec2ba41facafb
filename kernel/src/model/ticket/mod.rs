use crate::model::id::{EnrollmentId, TicketId, TicketTypeId};
use chrono::{DateTime, Utc};
use strum::EnumString;

#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
    #[strum(default)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: TicketId,
    pub status: TicketStatus,
    pub enrollment_id: EnrollmentId,
    pub ticket_type: TicketType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    pub fn is_paid(&self) -> bool {
        self.status == TicketStatus::Paid
    }

    /// 現地参加かつホテル込みのチケット種別かどうか
    pub fn grants_hotel(&self) -> bool {
        !self.ticket_type.is_remote && self.ticket_type.includes_hotel
    }
}
