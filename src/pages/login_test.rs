use super::*;

#[test]
fn validate_login_input_trims_user_name() {
    assert_eq!(validate_login_input("  alice  ", "pw"), Ok(Credentials::new("alice", "pw")));
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let creds = validate_login_input("alice", " pass word ").unwrap();
    assert_eq!(creds.password, " pass word ");
}

#[test]
fn validate_login_input_requires_user_name() {
    assert_eq!(validate_login_input("   ", "pw"), Err(MISSING_FIELDS));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("alice", ""), Err(MISSING_FIELDS));
}
