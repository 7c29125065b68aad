use actix_web::{HttpResponse, http::header::ContentType};

use crate::domain::AppState;

use super::helpers::prepare_html_template;

pub async fn home() -> HttpResponse {
    let page = prepare_html_template(&[("state", AppState::Idle.as_str())], "home.html");

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page)
}
