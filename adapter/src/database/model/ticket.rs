use chrono::{DateTime, Utc};
use kernel::model::{
    id::{EnrollmentId, TicketId, TicketTypeId},
    ticket::{Ticket, TicketStatus, TicketType},
};
use shared::error::AppError;

// tickets と ticket_types を JOIN した結果を受ける型
#[derive(sqlx::FromRow)]
pub struct TicketRow {
    pub id: TicketId,
    pub status: String,
    pub enrollment_id: EnrollmentId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub ticket_type_id: TicketTypeId,
    pub ticket_type_name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = AppError;

    fn try_from(value: TicketRow) -> Result<Self, Self::Error> {
        let TicketRow {
            id,
            status,
            enrollment_id,
            created_at,
            updated_at,
            ticket_type_id,
            ticket_type_name,
            price,
            is_remote,
            includes_hotel,
        } = value;
        let status = status.parse::<TicketStatus>().map_err(|e| {
            AppError::ConversionEntityError(format!("invalid ticket status {status}: {e}"))
        })?;
        Ok(Ticket {
            id,
            status,
            enrollment_id,
            ticket_type: TicketType {
                id: ticket_type_id,
                name: ticket_type_name,
                price,
                is_remote,
                includes_hotel,
            },
            created_at,
            updated_at,
        })
    }
}
