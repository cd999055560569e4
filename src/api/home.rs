use axum::response::Html;

use crate::api::views;

pub async fn home() -> Html<String> {
    Html(views::home())
}
