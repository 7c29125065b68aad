use std::time::Duration;

use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::{Coupon, NewMember};

#[derive(Clone)]
pub struct CouponClient {
    http_client: Client,
    base_url: Url,
    model: String,
    api_key: SecretString,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: String,
}

#[derive(thiserror::Error, Debug)]
pub enum GenerateCouponError {
    #[error("Failed to call the generation API.")]
    Request(#[from] reqwest::Error),
    #[error("The generation API returned no text to parse.")]
    EmptyReply,
    #[error("The generation API returned text that is not a coupon.")]
    MalformedReply(#[source] serde_json::Error),
}

impl CouponClient {
    pub fn new(
        base_url: String,
        model: String,
        api_key: SecretString,
        timeout: Duration,
    ) -> Self {
        Self {
            http_client: Client::builder().timeout(timeout).build().unwrap(),
            base_url: Url::parse(&base_url).expect("Failed parsing base generation api url."),
            model,
            api_key,
        }
    }

    pub async fn generate_coupon(&self, member: &NewMember) -> Result<Coupon, GenerateCouponError> {
        let url = self
            .base_url
            .join(&format!("v1beta/models/{}:generateContent", self.model))
            .expect("Failed joining route to generation api url.");

        let prompt = welcome_prompt(member.name.as_ref());
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: coupon_schema(),
            },
        };

        let response = self
            .http_client
            .post(url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateContentResponse>()
            .await?;

        // The coupon JSON arrives as the concatenation of the first
        // candidate's text parts.
        let reply = response
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();
        let reply = reply.trim();

        if reply.is_empty() {
            return Err(GenerateCouponError::EmptyReply);
        }

        serde_json::from_str::<Coupon>(reply).map_err(GenerateCouponError::MalformedReply)
    }
}

fn welcome_prompt(name: &str) -> String {
    format!(
        "이 사용자의 이름은 '{name}'입니다. \
         이 사용자를 위한 따뜻하고 친절한 환영 인사와 쇼핑을 독려하는 문구 2문장을 한국어로 작성해주세요. \
         또한 무작위로 생성된 것처럼 보이는 8자리 대문자/숫자 조합의 특별한 쿠폰 코드도 생성해주세요."
    )
}

fn coupon_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "welcomeMessage": {
                "type": "STRING",
                "description": "A friendly greeting message for the user in Korean.",
            },
            "couponCode": {
                "type": "STRING",
                "description": "A random 8-character string (uppercase + numbers).",
            },
            "expiryDate": {
                "type": "STRING",
                "description": "Today date + 30 days in YYYY.MM.DD format.",
            }
        },
        "required": ["welcomeMessage", "couponCode", "expiryDate"]
    })
}
