use mongodb::{
    bson::doc,
    options::ClientOptions,
    Client, Database, IndexModel,
};

use crate::models::poll_models::Choice;
use crate::utils::config::AppConfig;
use crate::utils::error::{AppError, AppResult};

pub async fn init_db(config: &AppConfig) -> AppResult<Database> {
    let mut client_options = ClientOptions::parse(&config.mongo_uri)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to parse MongoDB URI: {}", e)))?;

    client_options.app_name = Some("PollsApp".to_string());

    let client = Client::with_options(client_options)
        .map_err(|e| AppError::DatabaseError(format!("Failed to initialize MongoDB client: {}", e)))?;

    let database = client.database(&config.db_name);

    // detail and vote both look choices up by their question
    database
        .collection::<Choice>("choices")
        .create_index(IndexModel::builder().keys(doc! { "question_id": 1 }).build())
        .await?;

    tracing::info!(db = %config.db_name, "Database connection successful");

    Ok(database)
}
