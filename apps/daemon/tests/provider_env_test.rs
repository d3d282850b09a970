//! The client provider connects from DAEMON_DB_PROFILE when nothing was
//! installed beforehand.

mod support;

use std::sync::Arc;

use daemon::error::AppError;
use daemon::{find, get_logger, get_postgres_client, GroupDao};
use serial_test::serial;

#[tokio::test]
#[serial]
async fn test_provider_connects_from_env_profile() -> Result<(), AppError> {
    std::env::set_var("DAEMON_DB_PROFILE", "memory");

    let first = get_postgres_client().await?;
    let second = get_postgres_client().await?;
    assert!(Arc::ptr_eq(&first, &second));

    let mut dao = GroupDao::new();
    dao.initialize().await?;
    assert!(Arc::ptr_eq(dao.client().unwrap(), &first));
    let bound_logger = dao.logger().unwrap();

    dao.initialize().await?;
    assert!(Arc::ptr_eq(dao.client().unwrap(), &first));
    assert!(std::ptr::eq(dao.logger().unwrap(), bound_logger));
    assert!(std::ptr::eq(bound_logger, get_logger()));

    // fresh database without a groups table: the fault propagates
    let err = find(1).await.unwrap_err();
    assert!(matches!(err, AppError::Db(_)), "unexpected error: {err:?}");
    assert_eq!(err.code(), "DB_ERROR");

    std::env::remove_var("DAEMON_DB_PROFILE");
    Ok(())
}
