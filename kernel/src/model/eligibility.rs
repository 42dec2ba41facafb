//! ホテル閲覧権限の判定。
//!
//! 申込 (enrollment) とチケットの組から、ホテル情報を返してよいかを決める。
//! 存在確認は必ず支払い・種別の確認より先に行う。

use crate::model::{enrollment::Enrollment, ticket::Ticket};
use shared::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    NotFound,
    PaymentRequired,
    Allowed,
}

pub fn evaluate(enrollment: Option<&Enrollment>, ticket: Option<&Ticket>) -> Eligibility {
    let (Some(_), Some(ticket)) = (enrollment, ticket) else {
        return Eligibility::NotFound;
    };

    if !ticket.is_paid() || !ticket.grants_hotel() {
        return Eligibility::PaymentRequired;
    }

    Eligibility::Allowed
}

impl Eligibility {
    pub fn into_result(self) -> AppResult<()> {
        match self {
            Eligibility::NotFound => Err(AppError::EntityNotFound(
                "enrollment or ticket was not found".into(),
            )),
            Eligibility::PaymentRequired => Err(AppError::PaymentRequired(
                "ticket is unpaid, remote, or does not include a hotel".into(),
            )),
            Eligibility::Allowed => Ok(()),
        }
    }
}
