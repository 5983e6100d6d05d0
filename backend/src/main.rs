mod config;
mod db;
mod embedded;
mod errors;
mod services;

use crate::config::Config;
use crate::db::ProfileStore;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();
    let url = config.url();

    let store = ProfileStore::new(&config.db_path);
    if let Err(e) = store.init_schema() {
        error!("Could not initialise {}: {}", config.db_path.display(), e);
        return Err(io::Error::other(e.to_string()));
    }
    info!("Profile store at {}", config.db_path.display());

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(1024 * 1024)) // 1 MB
            .app_data(web::Data::new(store.clone()))
            .service(services::profile_farms::configure_routes())
            .default_service(web::route().to(embedded::serve))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
