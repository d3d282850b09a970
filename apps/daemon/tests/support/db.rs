use daemon::config::db::DbProfile;
use daemon::connect_db;
use daemon::entities::groups;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

/// Fresh SQLite in-memory database with the `groups` table created.
pub async fn memory_db_with_schema() -> DatabaseConnection {
    let conn = connect_db(DbProfile::InMemory)
        .await
        .expect("connect sqlite::memory:");
    create_groups_table(&conn)
        .await
        .expect("create groups table");
    conn
}

pub async fn create_groups_table<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);
    let stmt = schema
        .create_table_from_entity(groups::Entity)
        .if_not_exists()
        .to_owned();
    conn.execute(backend.build(&stmt)).await?;
    Ok(())
}
