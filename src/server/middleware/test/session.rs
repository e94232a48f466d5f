use crate::server::{error::AppError, middleware::session::AuthSession};
use test_utils::builder::TestBuilder;

/// Tests storing and reading the logged-in user id.
///
/// Expected: Ok with no id before storing and the stored id afterwards
#[tokio::test]
async fn stores_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    assert_eq!(auth_session.get_user_id().await?, None);

    auth_session.set_user_id(42).await?;

    assert_eq!(auth_session.get_user_id().await?, Some(42));

    Ok(())
}

/// Tests clearing the session logs the user out.
///
/// Expected: Ok with no user id after clear
#[tokio::test]
async fn clear_removes_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(7).await?;
    auth_session.clear().await;

    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}
