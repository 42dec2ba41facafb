use chrono::{DateTime, Utc};
use kernel::model::{
    enrollment::Enrollment,
    id::{EnrollmentId, UserId},
};

#[derive(sqlx::FromRow)]
pub struct EnrollmentRow {
    pub id: EnrollmentId,
    pub name: String,
    pub cpf: String,
    pub birthday: DateTime<Utc>,
    pub phone: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(value: EnrollmentRow) -> Self {
        let EnrollmentRow {
            id,
            name,
            cpf,
            birthday,
            phone,
            user_id,
            created_at,
            updated_at,
        } = value;
        Enrollment {
            id,
            name,
            cpf,
            birthday,
            phone,
            user_id,
            created_at,
            updated_at,
        }
    }
}
