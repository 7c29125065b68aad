mod coupons;
mod health_check;
mod helpers;
mod home;

pub use coupons::*;
pub use health_check::*;
pub use home::*;
