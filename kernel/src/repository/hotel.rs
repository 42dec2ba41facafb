use crate::model::{hotel::Hotel, id::HotelId};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    // すべてのホテルを客室込みで取得する
    async fn find_all(&self) -> AppResult<Vec<Hotel>>;
    // ホテル ID に一致するホテルを客室込みで取得する
    async fn find_with_rooms(&self, hotel_id: HotelId) -> AppResult<Option<Hotel>>;
}
