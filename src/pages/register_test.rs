use super::*;

#[test]
fn validate_registration_input_trims_and_accepts_complete_form() {
    let input =
        validate_registration_input("  Ada ", " a@x.com ", "secret1", "owner").unwrap();
    assert_eq!(input.display_name, "Ada");
    assert_eq!(input.email, "a@x.com");
    assert_eq!(input.password, "secret1");
    assert_eq!(input.role, "owner");
}

#[test]
fn validate_registration_input_rejects_each_missing_field() {
    assert_eq!(
        validate_registration_input("", "a@x.com", "secret1", "owner"),
        Err("Enter a display name.")
    );
    assert_eq!(
        validate_registration_input("Ada", "not-an-email", "secret1", "owner"),
        Err("Enter a valid email address.")
    );
    assert_eq!(
        validate_registration_input("Ada", "a@x.com", "short", "owner"),
        Err("Password must be at least 6 characters.")
    );
    assert_eq!(
        validate_registration_input("Ada", "a@x.com", "secret1", "  "),
        Err("Choose an account type.")
    );
}

#[test]
fn self_serve_roles_are_all_in_the_closed_set() {
    use crate::state::session::validate_requested_role;
    for role in SELF_SERVE_ROLES {
        assert!(validate_requested_role(role).is_ok(), "{role} should be accepted");
    }
}

#[test]
fn role_option_label_capitalizes() {
    assert_eq!(role_option_label("tenant"), "Tenant");
    assert_eq!(role_option_label(""), "");
}
