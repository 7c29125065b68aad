use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::coupon_client::CouponClient;
use crate::routes::{health_check, home, issue_coupon};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let coupon_client = config.coupon_client.client();

        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, coupon_client)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, coupon_client: CouponClient) -> Result<Server, anyhow::Error> {
    let coupon_client = web::Data::new(coupon_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/coupons", web::post().to(issue_coupon))
            .route("/", web::get().to(home))
            .app_data(coupon_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
