use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::UserId, ticket::Ticket};
use kernel::repository::ticket::TicketRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::ticket::TicketRow, ConnectionPool};

#[derive(new)]
pub struct TicketRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl TicketRepository for TicketRepositoryImpl {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Ticket>> {
        // フラグが NULL のチケット種別は false として扱う
        let row = sqlx::query_as::<_, TicketRow>(
            r#"
                SELECT
                    t.id,
                    t.status::text AS status,
                    t.enrollment_id,
                    t.created_at,
                    t.updated_at,
                    tt.id AS ticket_type_id,
                    tt.name AS ticket_type_name,
                    tt.price,
                    COALESCE(tt.is_remote, FALSE) AS is_remote,
                    COALESCE(tt.includes_hotel, FALSE) AS includes_hotel
                FROM tickets AS t
                INNER JOIN enrollments AS e ON t.enrollment_id = e.id
                INNER JOIN ticket_types AS tt ON t.ticket_type_id = tt.id
                WHERE e.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Ticket::try_from).transpose()
    }
}
