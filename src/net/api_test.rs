use super::*;

// =============================================================
// Form encoding
// =============================================================

#[test]
fn form_encode_component_keeps_unreserved_bytes() {
    assert_eq!(form_encode_component("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
}

#[test]
fn form_encode_component_escapes_reserved_bytes() {
    assert_eq!(form_encode_component("a b@c"), "a+b%40c");
    assert_eq!(form_encode_component("p&w=1"), "p%26w%3D1");
}

#[test]
fn login_form_body_encodes_both_fields() {
    let credentials = LoginCredentials {
        username: "neo@cyber.net".to_owned(),
        password: "pass word&".to_owned(),
    };
    assert_eq!(
        login_form_body(&credentials),
        "username=neo%40cyber.net&password=pass+word%26"
    );
}

#[test]
fn bearer_value_formats_authorization_header() {
    assert_eq!(bearer_value("T"), "Bearer T");
}

// =============================================================
// Login response decoding
// =============================================================

#[test]
fn decode_token_response_accepts_success_body() {
    let pair = decode_token_response(200, r#"{"access_token":"T"}"#).unwrap();
    assert_eq!(pair.access_token, "T");
    assert_eq!(pair.refresh_token, None);
}

#[test]
fn decode_token_response_keeps_refresh_token() {
    let pair =
        decode_token_response(200, r#"{"access_token":"T","refresh_token":"R"}"#).unwrap();
    assert_eq!(pair.refresh_token.as_deref(), Some("R"));
}

#[test]
fn decode_token_response_surfaces_server_detail_on_rejection() {
    let err = decode_token_response(401, r#"{"detail":"Incorrect username or password"}"#)
        .unwrap_err();
    assert_eq!(
        err,
        AuthError::Rejected {
            status: 401,
            message: "Incorrect username or password".to_owned(),
        }
    );
}

#[test]
fn decode_token_response_falls_back_without_detail() {
    let err = decode_token_response(401, "").unwrap_err();
    let AuthError::Rejected { status, message } = err else {
        panic!("expected rejection");
    };
    assert_eq!(status, 401);
    assert_eq!(message, "Sign-in failed. Check your credentials.");
}

#[test]
fn decode_token_response_flags_malformed_success_body() {
    assert!(matches!(
        decode_token_response(200, "not json"),
        Err(AuthError::Network(_))
    ));
}

#[test]
fn decode_token_response_rejects_empty_access_token() {
    assert!(matches!(
        decode_token_response(200, r#"{"access_token":""}"#),
        Err(AuthError::Network(_))
    ));
}

// =============================================================
// Register response decoding
// =============================================================

#[test]
fn decode_register_response_surfaces_server_message() {
    let message = decode_register_response(200, r#"{"data":"Account created"}"#).unwrap();
    assert_eq!(message, "Account created");
}

#[test]
fn decode_register_response_falls_back_to_generic_message() {
    assert_eq!(decode_register_response(201, "{}").unwrap(), "Registration complete.");
}

#[test]
fn decode_register_response_rejects_validation_errors() {
    let err = decode_register_response(422, r#"{"detail":"login already taken"}"#).unwrap_err();
    assert_eq!(
        err,
        AuthError::Rejected {
            status: 422,
            message: "login already taken".to_owned(),
        }
    );
}

// =============================================================
// Error display and current-user short-circuit
// =============================================================

#[test]
fn network_error_displays_generic_connectivity_text() {
    let err = AuthError::Network("tcp reset".to_owned());
    assert_eq!(err.to_string(), "could not reach the server, try again");
}

#[test]
fn rejected_error_displays_server_message() {
    let err = AuthError::Rejected {
        status: 401,
        message: "nope".to_owned(),
    };
    assert_eq!(err.to_string(), "nope");
}

#[test]
fn current_user_fetch_without_token_short_circuits() {
    use std::future::Future as _;
    use std::task::{Context, Poll, Waker};

    let mut fut = std::pin::pin!(fetch_current_user(None));
    let mut cx = Context::from_waker(Waker::noop());
    // Resolves on the first poll: no token means no request is issued.
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(user) => assert!(user.is_none()),
        Poll::Pending => panic!("expected immediate resolution without a token"),
    }
}
