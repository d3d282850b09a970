use daemon::entities::groups;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};
use time::OffsetDateTime;

/// Inserts a group row with an explicit id.
pub async fn insert_group<C: ConnectionTrait>(
    conn: &C,
    id: i64,
    name: &str,
    owner: &str,
    default_group: bool,
) -> groups::Model {
    let now = OffsetDateTime::now_utc();
    groups::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        owner: Set(owner.to_string()),
        default_group: Set(default_group),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
    .expect("insert group fixture")
}
