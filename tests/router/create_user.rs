use super::*;

/// Expect 201 with the created user and no password field
#[tokio::test]
async fn creates_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = build_router(test.db.clone())
        .oneshot(post_json(
            CREATE_USER_URL,
            factory::create_user_payload().to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await?;
    assert_eq!(body["email"], TEST_USER_EMAIL);
    assert_eq!(body["name"], TEST_USER_NAME);
    assert!(body.get("password").is_none());
    assert_eq!(test.user().count_by_email(TEST_USER_EMAIL).await?, 1);

    Ok(())
}

/// Expect 400 on the second registration of the same email
#[tokio::test]
async fn bad_request_for_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let router = build_router(test.db.clone());
    let payload = factory::create_user_payload_with(TEST_USER_EMAIL, TEST_USER_PASSWORD);

    let first = router
        .clone()
        .oneshot(post_json(CREATE_USER_URL, payload.to_string()))
        .await
        .unwrap();
    let second = router
        .oneshot(post_json(CREATE_USER_URL, payload.to_string()))
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test.user().count_by_email(TEST_USER_EMAIL).await?, 1);

    Ok(())
}

/// Expect 400 and no account for a password that is too short
#[tokio::test]
async fn bad_request_for_short_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = build_router(test.db.clone())
        .oneshot(post_json(
            CREATE_USER_URL,
            factory::create_user_payload_with(TEST_USER_EMAIL, "pw").to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(test.user().find_by_email(TEST_USER_EMAIL).await?.is_none());

    Ok(())
}

/// Expect 400 rather than a framework rejection status for a body that isn't JSON
#[tokio::test]
async fn bad_request_for_malformed_json() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = build_router(test.db.clone())
        .oneshot(post_json(CREATE_USER_URL, "not-json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await?;
    assert!(body["error"].is_string());
    assert_eq!(test.user().count().await?, 0);

    Ok(())
}

/// Expect 400 when a required field is missing
#[tokio::test]
async fn bad_request_for_missing_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = build_router(test.db.clone())
        .oneshot(post_json(
            CREATE_USER_URL,
            serde_json::json!({ "email": TEST_USER_EMAIL }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test.user().count().await?, 0);

    Ok(())
}

/// Expect 400 when the content type isn't JSON
#[tokio::test]
async fn bad_request_for_missing_content_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let request = Request::post(CREATE_USER_URL)
        .body(Body::from(factory::create_user_payload().to_string()))
        .unwrap();
    let resp = build_router(test.db.clone()).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test.user().count().await?, 0);

    Ok(())
}

/// Expect 405 for anything other than POST
#[tokio::test]
async fn rejects_get() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let request = Request::get(CREATE_USER_URL).body(Body::empty()).unwrap();
    let resp = build_router(test.db.clone()).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}
