// Shelter
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! REST service to manage the adoption of dogs from a shelter.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use log::{info, warn};
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

mod config;
pub use config::{DbOptions, ServerOptions};
mod db;
use db::ShelterDb;
mod driver;
use driver::Driver;
mod model;
mod rest;
use rest::app;

/// Connects to the database described by `opts` and prepares its schema.
async fn connect_db(opts: DbOptions) -> Result<Arc<dyn ShelterDb + Send + Sync>, Box<dyn Error>> {
    match opts {
        DbOptions::Postgres(opts) => {
            let db = shelter_core::db::postgres::PostgresDb::connect(opts)?;
            db::postgres::init_schema(&db).await?;
            Ok(Arc::new(db))
        }
        DbOptions::Sqlite { uri } => {
            let db = shelter_core::db::sqlite::connect(&uri).await?;
            db::sqlite::init_schema(&db).await?;
            Ok(Arc::new(db))
        }
    }
}

/// Waits until the process is asked to terminate.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Cannot listen for the shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

/// Starts the server as configured by `opts` and serves requests until the process is asked to
/// terminate.
pub async fn serve(opts: ServerOptions) -> Result<(), Box<dyn Error>> {
    let db = connect_db(opts.db).await?;
    let driver = Driver::new(db.clone());
    let app = app(driver);

    let bind_addr = SocketAddr::new(opts.address, opts.port);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    let result = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await;
    db.close().await;
    Ok(result?)
}
