use validator::ValidateEmail;

#[derive(Debug, Clone)]
pub struct MemberEmail(String);

impl MemberEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        if !s.validate_email() {
            return Err(format!("{} is not a valid member email.", s));
        };
        Ok(Self(s))
    }
}

impl AsRef<str> for MemberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MemberEmail {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        MemberEmail::parse(value)
    }
}
