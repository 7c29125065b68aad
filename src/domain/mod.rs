mod app_state;
mod coupon;
mod member_email;
mod member_name;
mod new_member;

pub use app_state::AppState;
pub use coupon::Coupon;
pub use member_email::MemberEmail;
pub use member_name::MemberName;
pub use new_member::NewMember;
