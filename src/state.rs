use crate::Config;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, TransactionTrait};
use std::sync::Arc;
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone;

    fn db(&self) -> &Self::Db;
}

pub struct State {
    database: DbConn,
}

impl State {
    pub async fn new(config: &Config) -> Result<Arc<Self>, DbErr> {
        Ok(Self::with_database(Self::connect_database(config).await?))
    }

    pub fn with_database(conn: DbConn) -> Arc<Self> {
        Arc::new(Self { database: conn })
    }

    async fn connect_database(config: &Config) -> Result<DbConn, DbErr> {
        info!("Trying to connect to database");

        let mut opts = ConnectOptions::new(config.database_url.clone());
        opts.sqlx_logging_level(LevelFilter::Debug);

        if let Some(max_connections) = config.max_connections {
            opts.max_connections(max_connections);
        }

        let db = Database::connect(opts).await?;

        info!(backend = ?db.get_database_backend(), "Connected to database");

        Ok(db)
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;

    fn db(&self) -> &Self::Db {
        &self.database
    }
}
