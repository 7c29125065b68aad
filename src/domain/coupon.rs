/// The structured payload the model is asked to return.
///
/// Code and expiry stay opaque strings end to end: they are displayed
/// to the member, never interpreted.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub welcome_message: String,
    pub coupon_code: String,
    pub expiry_date: String,
}
