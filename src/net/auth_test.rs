use super::*;

fn response(status: u16, body: &str) -> RawResponse {
    RawResponse { status, body: body.to_owned() }
}

// =============================================================================
// AuthAction
// =============================================================================

#[test]
fn auth_actions_post_to_their_endpoints() {
    assert_eq!(AuthAction::Login.endpoint(), "/login");
    assert_eq!(AuthAction::Register.endpoint(), "/register");
    assert_eq!(AuthAction::ResetPassword.endpoint(), "/reset-password");
}

#[test]
fn login_lands_on_home_and_others_on_login() {
    assert_eq!(AuthAction::Login.success_route(), AppRoute::Home);
    assert_eq!(AuthAction::Register.success_route(), AppRoute::Login);
    assert_eq!(AuthAction::ResetPassword.success_route(), AppRoute::Login);
}

// =============================================================================
// decode_auth_reply
// =============================================================================

#[test]
fn decode_auth_reply_accepts_created() {
    let reply = decode_auth_reply(&response(201, r#"{"status":"success","message":"Account created!"}"#))
        .expect("reply");
    assert_eq!(reply.status, "success");
    assert_eq!(reply.message, "Account created!");
}

#[test]
fn decode_auth_reply_surfaces_server_message_on_rejection() {
    let err = decode_auth_reply(&response(
        409,
        r#"{"status":"failure","message":"Username already taken"}"#,
    ))
    .expect_err("conflict");
    assert_eq!(
        err,
        SessionError::Rejected { status: 409, message: "Username already taken".to_owned() }
    );
}

#[test]
fn decode_auth_reply_falls_back_to_status_text() {
    let err = decode_auth_reply(&response(500, "Internal Server Error")).expect_err("500");
    assert_eq!(err.user_message(), "Request failed (status 500).");

    let err = decode_auth_reply(&response(400, r#"{"message":"  "}"#)).expect_err("blank message");
    assert_eq!(err.user_message(), "Request failed (status 400).");
}

#[test]
fn decode_auth_reply_rejects_unparseable_success() {
    let err = decode_auth_reply(&response(200, "ok")).expect_err("plain text");
    assert!(matches!(err, SessionError::Transport(_)));
}

// =============================================================================
// HTTP client against the mock server
// =============================================================================

#[cfg(all(feature = "native", not(feature = "hydrate")))]
mod http {
    use super::super::*;
    use crate::net::session::SessionApi;
    use crate::net::test_server::{VALID_PASSWORD, VALID_USER, spawn_mock_server};

    fn login_request(password: &str) -> LoginRequest {
        LoginRequest { username: VALID_USER.to_owned(), password: password.to_owned() }
    }

    #[tokio::test]
    async fn login_cookie_is_sent_with_identity_request() {
        let server = spawn_mock_server().await;
        let client = HttpSessionClient::new(server.config()).expect("client");

        let reply = client.login(&login_request(VALID_PASSWORD)).await.expect("login");
        assert_eq!(reply.message, "Login successful!");

        let payload = client.current_identity().await.expect("identity");
        assert_eq!(payload.message, "Welcome alice!");
    }

    #[tokio::test]
    async fn failed_login_leaves_session_unauthenticated() {
        let server = spawn_mock_server().await;
        let client = HttpSessionClient::new(server.config()).expect("client");

        let err = client.login(&login_request("wrong")).await.expect_err("bad password");
        assert_eq!(err.user_message(), "Username or password incorrect.");

        let identity = client.current_identity().await;
        assert_eq!(identity, Err(SessionError::NotAuthenticated { status: 401 }));
    }

    #[tokio::test]
    async fn register_sends_camel_case_body() {
        let server = spawn_mock_server().await;
        let client = HttpSessionClient::new(server.config()).expect("client");
        let mut request = RegisterRequest {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            username: "ada".to_owned(),
            password: "engine".to_owned(),
            confirmed_password: "engine".to_owned(),
        };

        let reply = client.register(&request).await.expect("register");
        assert_eq!(reply.message, "Account created!");

        request.username = "taken".to_owned();
        let err = client.register(&request).await.expect_err("conflict");
        assert_eq!(
            err,
            SessionError::Rejected { status: 409, message: "Username already taken".to_owned() }
        );
    }

    #[tokio::test]
    async fn reset_password_reports_unknown_user() {
        let server = spawn_mock_server().await;
        let client = HttpSessionClient::new(server.config()).expect("client");
        let request = ResetPasswordRequest {
            email_or_username: "ghost".to_owned(),
            new_password: "x".to_owned(),
            confirmed_password: "x".to_owned(),
        };

        let err = client.reset_password(&request).await.expect_err("unknown user");

        assert_eq!(err.user_message(), "User not found.");
    }
}
