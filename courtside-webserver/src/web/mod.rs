use courtside_core::{entities::TaxRate, gateways::notify::NotificationGateway};
use rocket::{config::Config as RocketCfg, Rocket, Route};
use time::Duration;

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone, Copy)]
pub struct Cfg {
    /// Applied to the sum of all slot prices of a booking
    pub tax_rate: TaxRate,
    pub jwt_token_lifetime: Duration,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            tax_rate: TaxRate::new(0.18),
            jwt_token_lifetime: Duration::days(1),
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    notify: Box<dyn NotificationGateway + Send + Sync>,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    let jwt_state = jwt::JwtState::new(cfg.jwt_token_lifetime);
    let notify_gw = guards::Notify(notify);

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(notify_gw)
        .manage(cfg)
        .register("/", api::catchers());

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    notify: Box<dyn NotificationGateway + Send + Sync>,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let instance = rocket_instance(options, db, notify);
    info!("Initialization finished");
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
