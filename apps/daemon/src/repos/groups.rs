//! Group repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::{ConnectionTrait, DbErr};

use crate::adapters::groups_sea as groups_adapter;
use crate::error::AppError;

/// Group domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: u64,
    pub name: String,
    pub owner: String,
    pub default_group: bool,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

/// Returns `Ok(None)` when no row matches. Ids past `i64::MAX` cannot be
/// stored, so they short-circuit to `Ok(None)` without touching the database.
pub async fn find_group_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: u64,
) -> Result<Option<Group>, AppError> {
    let Ok(db_id) = i64::try_from(group_id) else {
        return Ok(None);
    };

    let group = groups_adapter::find_group_by_id(conn, db_id).await?;
    Ok(group.map(Group::try_from).transpose()?)
}

// Conversions between SeaORM models and domain models

impl TryFrom<crate::entities::groups::Model> for Group {
    type Error = DbErr;

    fn try_from(model: crate::entities::groups::Model) -> Result<Self, Self::Error> {
        let id = u64::try_from(model.id)
            .map_err(|_| DbErr::Type(format!("groups.id {} is negative", model.id)))?;
        Ok(Self {
            id,
            name: model.name,
            owner: model.owner,
            default_group: model.default_group,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::entities::groups;

    fn row(id: i64) -> groups::Model {
        groups::Model {
            id,
            name: "Work".to_string(),
            owner: "alice".to_string(),
            default_group: true,
            created_at: datetime!(2020-03-01 12:00 UTC),
            updated_at: datetime!(2020-03-02 08:30 UTC),
        }
    }

    #[test]
    fn test_model_converts_to_domain() {
        let group = Group::try_from(row(42)).unwrap();
        assert_eq!(group.id, 42);
        assert_eq!(group.name, "Work");
        assert_eq!(group.owner, "alice");
        assert!(group.default_group);
        assert_eq!(group.updated_at, datetime!(2020-03-02 08:30 UTC));
    }

    #[test]
    fn test_negative_id_is_type_error() {
        let err = Group::try_from(row(-1)).unwrap_err();
        assert!(matches!(err, DbErr::Type(_)));
    }
}
