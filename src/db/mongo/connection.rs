//! MongoDB client setup and liveness checks.

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use tracing::{debug, instrument};

use super::todo::{MongoTodoRepository, TodoDocument};
use crate::db::{Database, DbError, DbResult};

/// MongoDB database implementation.
///
/// Holds one client and one collection handle for the lifetime of the
/// process. Both are cheap to clone and safe to share between tasks.
#[derive(Clone)]
pub struct MongoDatabase {
    client: Client,
    todos: Collection<TodoDocument>,
}

impl MongoDatabase {
    /// Connect to MongoDB and verify the deployment answers a ping.
    #[instrument(skip(uri))]
    pub async fn connect(uri: &str, database: &str, collection: &str) -> DbResult<Self> {
        let options = ClientOptions::parse(uri)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        let client = Client::with_options(options).map_err(|e| DbError::Connection {
            message: e.to_string(),
        })?;

        let db = Self {
            todos: client.database(database).collection(collection),
            client,
        };
        db.ping().await?;
        debug!("MongoDB ping succeeded");

        Ok(db)
    }
}

impl Database for MongoDatabase {
    type Todos<'a> = MongoTodoRepository<'a>;

    async fn ping(&self) -> DbResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;
        Ok(())
    }

    fn todos(&self) -> Self::Todos<'_> {
        MongoTodoRepository {
            collection: &self.todos,
        }
    }
}
