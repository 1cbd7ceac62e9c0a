use super::*;

fn body(error: &str, message: Option<&str>) -> ProviderErrorBody {
    ProviderErrorBody { error: error.to_owned(), message: message.map(str::to_owned) }
}

#[test]
fn profile_endpoint_embeds_identity() {
    assert_eq!(profile_endpoint("u-42"), "/rest/v1/profiles/u-42");
}

#[test]
fn rejected_sign_in_is_invalid_credentials() {
    assert_eq!(sign_in_error(400, &body("", None)), AuthError::InvalidCredentials);
    assert_eq!(sign_in_error(401, &body("bad_jwt", None)), AuthError::InvalidCredentials);
    assert_eq!(sign_in_error(422, &body("", None)), AuthError::InvalidCredentials);
}

#[test]
fn unexpected_sign_in_status_is_provider_error() {
    assert_eq!(
        sign_in_error(503, &body("", Some("maintenance"))),
        AuthError::Provider("maintenance".to_owned())
    );
}

#[test]
fn duplicate_email_detected_by_status_or_code() {
    assert_eq!(sign_up_error(409, &body("", None)), AuthError::DuplicateAccount);
    assert_eq!(sign_up_error(400, &body("user_already_exists", None)), AuthError::DuplicateAccount);
    assert_eq!(sign_up_error(400, &body("email_exists", None)), AuthError::DuplicateAccount);
}

#[test]
fn other_sign_up_failures_are_provider_errors() {
    assert_eq!(
        sign_up_error(500, &body("internal", None)),
        AuthError::Provider("internal".to_owned())
    );
}

#[test]
fn provider_error_falls_back_to_status_when_body_is_empty() {
    assert_eq!(provider_error(502, &body("", None)), AuthError::Provider("status 502".to_owned()));
    assert_eq!(
        provider_error(502, &body("", Some(""))),
        AuthError::Provider("status 502".to_owned())
    );
}

#[test]
fn provider_error_prefers_message_over_code() {
    assert_eq!(
        provider_error(500, &body("internal", Some("database offline"))),
        AuthError::Provider("database offline".to_owned())
    );
}
