pub mod configuration;
pub mod coupon_client;
pub mod domain;
pub mod routes;
pub mod startup;
pub mod telemetry;
