use log::{error, info};
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, IndexModel};

use crate::category::repository::CATEGORIES_COLLECTION;
use crate::config::MongoConfig;
use crate::post::post_repository::POSTS_COLLECTION;
use crate::utils::error::StoreError;

/// Open MongoDB connection. Created once at startup and shut down explicitly
/// after the HTTP server stops.
pub struct Database {
    client: Client,
    db: mongodb::Database,
}

impl Database {
    pub async fn init(config: &MongoConfig) -> Result<Self, StoreError> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;
        client_options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(client_options)?;

        // Ping the server so a bad URI fails at startup rather than on the first request
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("Connected successfully to MongoDB database {}", config.database);

        let db = client.database(&config.database);
        Ok(Self { client, db })
    }

    pub fn handle(&self) -> &mongodb::Database {
        &self.db
    }

    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let unique = IndexOptions::builder().unique(true).build();

        let posts = self.db.collection::<mongodb::bson::Document>(POSTS_COLLECTION);
        posts
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "id": 1 })
                    .options(unique.clone())
                    .build(),
            )
            .await?;
        posts
            .create_index(IndexModel::builder().keys(doc! { "slug": 1 }).build())
            .await?;
        posts
            .create_index(IndexModel::builder().keys(doc! { "created_at": -1 }).build())
            .await?;

        self.db
            .collection::<mongodb::bson::Document>(CATEGORIES_COLLECTION)
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "id": 1 })
                    .options(unique)
                    .build(),
            )
            .await?;

        info!("MongoDB indexes are in place");
        Ok(())
    }

    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("MongoDB connection closed");
    }
}

// Convenience wrapper around Database::init() that also prepares indexes
pub async fn connect_to_mongo(config: &MongoConfig) -> Result<Database, StoreError> {
    let database = Database::init(config).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        e
    })?;
    database.ensure_indexes().await?;
    Ok(database)
}
