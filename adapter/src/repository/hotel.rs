use std::collections::HashMap;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    hotel::{Hotel, Room},
    id::HotelId,
};
use kernel::repository::hotel::HotelRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::hotel::{HotelRow, RoomRow},
    ConnectionPool,
};

#[derive(new)]
pub struct HotelRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl HotelRepository for HotelRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Hotel>> {
        let rows: Vec<HotelRow> = sqlx::query_as(
            r#"
                SELECT id, name, image, created_at, updated_at
                FROM hotels
                ORDER BY id
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        // 一覧でも客室を返すため、対象ホテルの客室をまとめて取得して振り分ける
        let hotel_ids: Vec<i32> = rows.iter().map(|row| row.id.raw()).collect();
        let mut rooms_by_hotel: HashMap<HotelId, Vec<Room>> = HashMap::new();
        for room in self.find_rooms(&hotel_ids).await? {
            rooms_by_hotel.entry(room.hotel_id).or_default().push(room);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let rooms = rooms_by_hotel.remove(&row.id).unwrap_or_default();
                row.into_hotel(rooms)
            })
            .collect())
    }

    async fn find_with_rooms(&self, hotel_id: HotelId) -> AppResult<Option<Hotel>> {
        let row: Option<HotelRow> = sqlx::query_as(
            r#"
                SELECT id, name, image, created_at, updated_at
                FROM hotels
                WHERE id = $1
            "#,
        )
        .bind(hotel_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let rooms = self.find_rooms(&[hotel_id.raw()]).await?;
        Ok(Some(row.into_hotel(rooms)))
    }
}

impl HotelRepositoryImpl {
    async fn find_rooms(&self, hotel_ids: &[i32]) -> AppResult<Vec<Room>> {
        let rows: Vec<RoomRow> = sqlx::query_as(
            r#"
                SELECT id, name, capacity, hotel_id, created_at, updated_at
                FROM rooms
                WHERE hotel_id = ANY($1)
                ORDER BY id
            "#,
        )
        .bind(hotel_ids)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Room::from).collect())
    }
}
