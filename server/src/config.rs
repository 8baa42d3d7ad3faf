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

//! Configuration of the server, read from the environment.

use shelter_core::db::postgres::PostgresOptions;
use shelter_core::env::get_optional_var;
use std::net::{IpAddr, Ipv4Addr};

/// Prefix of the environment variables that configure the server.
const PREFIX: &str = "SHELTER";

/// Prefix of the environment variables that configure the PostgreSQL connection.
const PGSQL_PREFIX: &str = "PGSQL_PROD";

/// Default port to listen on.
const DEFAULT_PORT: u16 = 3000;

/// Default SQLite database, which lives in memory only.
const DEFAULT_SQLITE_URI: &str = ":memory:";

/// Database backend to persist data into.
#[derive(Debug)]
pub enum DbOptions {
    /// PostgreSQL database, for production use.
    Postgres(PostgresOptions),

    /// SQLite database, for tests and single-node deployments.
    Sqlite {
        /// Connection string of the database, such as `sqlite:shelter.db?mode=rwc`.
        uri: String,
    },
}

impl DbOptions {
    /// Initializes the database options from the `<PREFIX>_DB` selector and the backend-specific
    /// variables.
    fn from_env() -> Result<Self, String> {
        let backend = get_optional_var::<String>(PREFIX, "DB")?;
        match backend.as_deref() {
            None | Some("postgres") => {
                Ok(DbOptions::Postgres(PostgresOptions::from_env(PGSQL_PREFIX)?))
            }
            Some("sqlite") => {
                let uri = get_optional_var::<String>(PREFIX, "SQLITE_URI")?
                    .unwrap_or_else(|| DEFAULT_SQLITE_URI.to_owned());
                Ok(DbOptions::Sqlite { uri })
            }
            Some(other) => Err(format!(
                "Invalid value in environment variable {}_DB: unknown backend '{}'",
                PREFIX, other
            )),
        }
    }
}

/// Options to start the server.
#[derive(Debug)]
pub struct ServerOptions {
    /// Address to listen on.
    pub address: IpAddr,

    /// Port to listen on.
    pub port: u16,

    /// Database to connect to.
    pub db: DbOptions,
}

impl ServerOptions {
    /// Initializes the server options from environment variables.
    ///
    /// This uses `SHELTER_ADDRESS`, `SHELTER_PORT` and `SHELTER_DB`.  The database selected by the
    /// latter is configured via `PGSQL_PROD_*` for PostgreSQL or via `SHELTER_SQLITE_URI` for
    /// SQLite.
    pub fn from_env() -> Result<Self, String> {
        let address = get_optional_var::<IpAddr>(PREFIX, "ADDRESS")?
            .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let port = get_optional_var::<u16>(PREFIX, "PORT")?.unwrap_or(DEFAULT_PORT);
        let db = DbOptions::from_env()?;
        Ok(Self { address, port, db })
    }
}
