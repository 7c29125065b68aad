#[derive(Debug, Clone)]
pub struct MemberName(String);

impl MemberName {
    /// Accepts any input with at least one non-whitespace character.
    /// The name is kept as typed; it feeds the greeting prompt verbatim.
    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err(format!("{} is not a valid member name.", s));
        };
        Ok(Self(s))
    }
}

impl AsRef<str> for MemberName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MemberName {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        MemberName::parse(value)
    }
}
