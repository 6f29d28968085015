use gatekeeper::adapters::database::UserRepository;
use gatekeeper::domain::auth::CookieName;
use gatekeeper::error::AppError;
use uuid::Uuid;

mod common;

fn unique_username(prefix: &str) -> String {
    let run_id = Uuid::new_v4().to_string()[..8].to_string();
    format!("{prefix}_{run_id}")
}

#[tokio::test]
async fn test_login_flow() {
    let app = common::TestApp::spawn();
    let username = unique_username("login_user");
    let registered = app.register(&username, "password123").await;

    let outcome = app.services.login_service.login(&username, "password123").await.unwrap();

    assert_eq!(outcome.user.id, registered.id);
    assert_eq!(outcome.user.username, username);
    assert_eq!(outcome.access_cookie.name, CookieName::Authentication);
    assert_eq!(outcome.refresh_cookie.name, CookieName::Refresh);

    let [access, refresh] = outcome.cookies();
    let access = access.to_string();
    let refresh = refresh.to_string();
    assert!(access.starts_with("Authentication="));
    assert!(access.ends_with("; HttpOnly; Path=/; Max-Age=200"));
    assert!(refresh.starts_with("Refresh="));
    assert!(refresh.ends_with("; HttpOnly; Path=/; Max-Age=400"));

    let stored = app.user_repo.get_user_by_username(&username).await.unwrap().unwrap();
    assert!(stored.last_login.is_some(), "Login should stamp last_login");
    assert_eq!(stored.refresh_token.as_deref(), Some(outcome.refresh_cookie.value.as_str()));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = common::TestApp::spawn();
    let username = unique_username("wrong_pw_user");
    app.register(&username, "password123").await;

    let result = app.services.login_service.login(&username, "password124").await;
    assert!(matches!(result, Err(AppError::AuthError)));

    let stored = app.user_repo.get_user_by_username(&username).await.unwrap().unwrap();
    assert!(stored.last_login.is_none());
    assert!(stored.refresh_token.is_none());
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = common::TestApp::spawn();

    let result = app.services.login_service.login("nobody", "password123").await;
    assert!(matches!(result, Err(AppError::AuthError)));
}

#[tokio::test]
async fn test_validate_strips_password() {
    let app = common::TestApp::spawn();
    let username = unique_username("strip_user");
    app.register(&username, "password123").await;

    let user = app
        .services
        .login_service
        .validate_user_for_local_strategy(&username, "password123")
        .await
        .unwrap()
        .expect("Valid credentials should yield a user");

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["username"], username.as_str());
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password").is_none());
}

#[tokio::test]
async fn test_is_authenticated_and_logout() {
    let app = common::TestApp::spawn();
    let username = unique_username("session_user");
    app.register(&username, "password123").await;
    app.services.login_service.login(&username, "password123").await.unwrap();

    let profile = app.services.is_authenticated_service.execute(&username).await.unwrap();
    assert_eq!(profile.username, username);
    assert!(profile.last_login.is_some());

    let cleared: Vec<String> = app.services.logout_service.execute().iter().map(ToString::to_string).collect();
    assert_eq!(
        cleared,
        vec![
            "Authentication=; HttpOnly; Path=/; Max-Age=0".to_string(),
            "Refresh=; HttpOnly; Path=/; Max-Age=0".to_string(),
        ]
    );
}
