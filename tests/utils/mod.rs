pub mod catalog;
pub mod macros;
pub mod prelude;
mod request;
mod response;

use course_catalog::State;
use migration::{Migrator, MigratorTrait};
use request::RequestBuilder;
use reqwest::Client;
use sea_orm::{ConnectOptions, Database, DbConn};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::log::LevelFilter;

/// A running server backed by its own in-memory database.
#[derive(Clone)]
pub struct App {
    addr: SocketAddr,
    client: Client,
}

async fn setup_database() -> DbConn {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());

    // every connection would open a separate in-memory database
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging_level(LevelFilter::Debug);

    let db = Database::connect(opts)
        .await
        .expect("failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");

    db
}

impl App {
    pub async fn new() -> Self {
        let db = setup_database().await;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = State::with_database(db);

        tokio::spawn(async move {
            course_catalog::run(listener, state).await.unwrap();
        });

        App {
            addr,
            client: Client::new(),
        }
    }

    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    #[allow(unused)]
    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    #[allow(unused)]
    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }

    #[allow(unused)]
    pub fn put(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.put(self.get_url(url)))
    }

    #[allow(unused)]
    pub fn patch(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.patch(self.get_url(url)))
    }

    #[allow(unused)]
    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.delete(self.get_url(url)))
    }
}
