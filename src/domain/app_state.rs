/// The four views the signup flow walks through, in order:
/// idle, loading, then success or error.
///
/// Templates key off `as_str`, and the request span records each
/// transition so the walk is visible in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Idle,
    Loading,
    Success,
    Error,
}

impl AppState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppState::Idle => "idle",
            AppState::Loading => "loading",
            AppState::Success => "success",
            AppState::Error => "error",
        }
    }
}
