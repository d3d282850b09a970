//! SeaORM adapter for group lookups.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::entities::groups;

// Adapter functions return DbErr; the repos layer lifts it into AppError.

pub async fn find_group_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Option<groups::Model>, sea_orm::DbErr> {
    groups::Entity::find()
        .filter(groups::Column::Id.eq(group_id))
        .one(conn)
        .await
}
