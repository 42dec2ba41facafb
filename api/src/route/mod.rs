pub mod health;
pub mod hotel;

use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(health::build_health_check_routers())
        .merge(hotel::build_hotel_routers())
}
