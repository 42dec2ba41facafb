use crate::{extractor::AuthorizedUser, model::hotel::HotelResponse};
use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::{
    eligibility::evaluate,
    id::{HotelId, UserId},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

// 申込とチケットを並行して取得し、ホテル情報を閲覧できるか判定する
async fn ensure_hotel_access(registry: &AppRegistry, user_id: UserId) -> AppResult<()> {
    let enrollment_repository = registry.enrollment_repository();
    let ticket_repository = registry.ticket_repository();

    let (enrollment, ticket) = tokio::try_join!(
        enrollment_repository.find_by_user_id(user_id),
        ticket_repository.find_by_user_id(user_id),
    )?;

    let eligibility = evaluate(enrollment.as_ref(), ticket.as_ref());
    tracing::debug!(%user_id, ?eligibility, "evaluated hotel access");
    eligibility.into_result()
}

pub async fn show_hotel_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<HotelResponse>>> {
    ensure_hotel_access(&registry, user.id()).await?;

    let hotels = registry.hotel_repository().find_all().await?;
    if hotels.is_empty() {
        return Err(AppError::EntityNotFound("no hotels are registered".into()));
    }

    Ok(Json(hotels.into_iter().map(HotelResponse::from).collect()))
}

pub async fn show_hotel_rooms(
    user: AuthorizedUser,
    Path(raw_hotel_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HotelResponse>> {
    ensure_hotel_access(&registry, user.id()).await?;

    // 数値でない ID は該当するホテルなしとして扱う
    let hotel_id: HotelId = raw_hotel_id
        .parse()
        .map_err(|_| AppError::EntityNotFound(format!("hotel ({raw_hotel_id}) was not found")))?;

    registry
        .hotel_repository()
        .find_with_rooms(hotel_id)
        .await
        .and_then(|hotel| match hotel {
            Some(hotel) => Ok(Json(hotel.into())),
            None => Err(AppError::EntityNotFound(format!(
                "hotel ({hotel_id}) was not found"
            ))),
        })
}
