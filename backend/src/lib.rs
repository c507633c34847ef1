pub mod models;
pub mod schema;

pub mod hiscores;
pub mod ingest;
pub mod query;
pub mod summary;

pub async fn db_connection() -> Result<diesel_async::AsyncPgConnection, diesel::ConnectionError> {
    use diesel_async::AsyncConnection;

    let database_url = std::env::var("DATABASE_URL").expect("'DATABASE_URL' must be set");

    diesel_async::AsyncPgConnection::establish(&database_url).await
}
