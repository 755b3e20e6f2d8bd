//! Lunchly: customers and reservations for a small restaurant.
//!
//! The `data` feature exposes the persistence layer on its own; the default
//! `server` feature adds services, middleware, routes and [`run`].

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_web::{App, HttpServer, web};
    use log::info;
    use tera::Tera;

    use crate::db::establish_connection_pool;
    use crate::middleware::RequestLogger;
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        let repo = DieselRepository::new(pool);

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        info!("Listening on {}:{}", bind_address.0, bind_address.1);

        HttpServer::new(move || {
            let repo = repo.clone();
            App::new()
                .wrap(RequestLogger)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(repo.clone()))
                .configure(|cfg| routes::configure(cfg, repo))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
