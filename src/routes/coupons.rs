use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, web};
use anyhow::Context;

use crate::coupon_client::CouponClient;
use crate::domain::{AppState, Coupon, MemberEmail, MemberName, NewMember};

use super::helpers::{error_chain_fmt, prepare_html_template};

#[derive(serde::Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
}

impl TryFrom<FormData> for NewMember {
    type Error = String;

    fn try_from(form: FormData) -> Result<Self, Self::Error> {
        let name = MemberName::parse(form.name)?;
        let email = MemberEmail::parse(form.email)?;
        Ok(Self { name, email })
    }
}

#[derive(thiserror::Error)]
pub enum SignupError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SignupError {
    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        match self {
            SignupError::ValidationError(_) => HttpResponse::new(StatusCode::BAD_REQUEST),
            // Whatever went wrong upstream, the member sees the same
            // static error view with a retry link.
            SignupError::UnexpectedError(_) => {
                HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
                    .content_type(ContentType::html())
                    .body(error_page())
            }
        }
    }
}

#[tracing::instrument(
    name = "Issuing a welcome coupon.",
    skip(form, coupon_client),
    fields(
        member_email = %form.email,
        member_name = %form.name,
        app_state = tracing::field::Empty
    )
)]
pub async fn issue_coupon(
    form: web::Form<FormData>,
    coupon_client: web::Data<CouponClient>,
) -> Result<HttpResponse, SignupError> {
    let new_member: NewMember = form.0.try_into().map_err(SignupError::ValidationError)?;

    tracing::Span::current().record("app_state", AppState::Loading.as_str());

    let generated = coupon_client.generate_coupon(&new_member).await;

    let state = if generated.is_ok() {
        AppState::Success
    } else {
        AppState::Error
    };
    tracing::Span::current().record("app_state", state.as_str());

    let coupon = generated.context("Failed to generate a welcome coupon.")?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(coupon_page(&new_member, &coupon)))
}

fn coupon_page(member: &NewMember, coupon: &Coupon) -> String {
    prepare_html_template(
        &[
            ("state", AppState::Success.as_str()),
            ("name", member.name.as_ref()),
            ("welcome_message", coupon.welcome_message.as_str()),
            ("coupon_code", coupon.coupon_code.as_str()),
            ("expiry_date", coupon.expiry_date.as_str()),
        ],
        "coupon.html",
    )
}

fn error_page() -> String {
    prepare_html_template(&[("state", AppState::Error.as_str())], "error.html")
}
