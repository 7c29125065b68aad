use super::{MemberEmail, MemberName};

pub struct NewMember {
    pub name: MemberName,
    pub email: MemberEmail,
}
