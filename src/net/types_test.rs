use super::*;

fn alice_data() -> LoginData {
    LoginData {
        user_name: "alice".to_owned(),
        role: "admin".to_owned(),
        token: "t1".to_owned(),
        first_name: None,
        last_name: None,
    }
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_serialize_camel_case() {
    let json = serde_json::to_value(Credentials::new("alice", "pw")).unwrap();
    assert_eq!(json, serde_json::json!({ "userName": "alice", "password": "pw" }));
}

#[test]
fn credentials_debug_redacts_password() {
    let rendered = format!("{:?}", Credentials::new("alice", "hunter2"));
    assert!(rendered.contains("alice"));
    assert!(!rendered.contains("hunter2"));
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_from_data_defaults_names() {
    let session = Session::from(alice_data());
    assert_eq!(
        session,
        Session {
            user_name: "alice".to_owned(),
            role: "admin".to_owned(),
            token: "t1".to_owned(),
            first_name: "alice".to_owned(),
            last_name: String::new(),
        }
    );
}

#[test]
fn session_from_data_keeps_supplied_names() {
    let data = LoginData {
        first_name: Some("Alice".to_owned()),
        last_name: Some("Liddell".to_owned()),
        ..alice_data()
    };
    let session = Session::from(data);
    assert_eq!(session.first_name, "Alice");
    assert_eq!(session.last_name, "Liddell");
}

#[test]
fn session_serializes_with_camel_case_keys() {
    let json = serde_json::to_value(Session::from(alice_data())).unwrap();
    assert_eq!(json["userName"], "alice");
    assert_eq!(json["firstName"], "alice");
    assert_eq!(json["lastName"], "");
}

#[test]
fn session_decodes_without_name_fields() {
    let session: Session = serde_json::from_str(r#"{"userName":"alice","role":"admin","token":"t1"}"#).unwrap();
    assert_eq!(session, Session::from(alice_data()));
}

#[test]
fn session_decodes_without_last_name() {
    let raw = r#"{"userName":"alice","role":"admin","token":"t1","firstName":"Alice"}"#;
    let session: Session = serde_json::from_str(raw).unwrap();
    assert_eq!(session.first_name, "Alice");
    assert_eq!(session.last_name, "");
}

#[test]
fn session_survives_storage_round_trip() {
    let mut original = Session::from(alice_data());
    original.last_name = "Liddell".to_owned();
    let raw = serde_json::to_string(&original).unwrap();
    assert_eq!(serde_json::from_str::<Session>(&raw).unwrap(), original);
}

#[test]
fn session_display_name_prefers_full_name() {
    let mut session = Session::from(alice_data());
    session.first_name = "Alice".to_owned();
    session.last_name = "Liddell".to_owned();
    assert_eq!(session.display_name(), "Alice Liddell");
}

#[test]
fn session_display_name_falls_back_to_user_name() {
    let mut session = Session::from(alice_data());
    session.first_name = " ".to_owned();
    assert_eq!(session.display_name(), "alice");
}

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_accepts_pascal_case_envelope() {
    let raw = r#"{"Success":true,"Data":{"Token":"t1","Role":"Doctor","UserName":"drwho"},"Message":"ok"}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert!(resp.success);
    let data = resp.data.unwrap();
    assert_eq!(data.user_name, "drwho");
    assert_eq!(data.role, "Doctor");
    assert_eq!(data.token, "t1");
    assert!(data.first_name.is_none());
}

#[test]
fn login_response_accepts_camel_case_envelope() {
    let raw = r#"{"success":false,"message":"bad creds"}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert!(!resp.success);
    assert!(resp.data.is_none());
    assert_eq!(resp.message.as_deref(), Some("bad creds"));
    assert!(resp.errors.is_empty());
}

#[test]
fn into_session_succeeds_with_data() {
    let session = LoginResponse::granted(alice_data()).into_session().unwrap();
    assert_eq!(session.user_name, "alice");
}

#[test]
fn into_session_uses_response_message_on_failure() {
    assert_eq!(LoginResponse::denied("bad creds").into_session(), Err("bad creds".to_owned()));
}

#[test]
fn into_session_falls_back_when_message_missing() {
    let resp = LoginResponse::default();
    assert_eq!(resp.into_session(), Err(DEFAULT_LOGIN_ERROR.to_owned()));
}

#[test]
fn into_session_rejects_success_without_data() {
    let resp = LoginResponse { success: true, ..LoginResponse::default() };
    assert_eq!(resp.into_session(), Err(DEFAULT_LOGIN_ERROR.to_owned()));
}
