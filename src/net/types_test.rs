use super::*;

// =============================================================
// Role parsing at the trust boundary
// =============================================================

#[test]
fn role_parses_admin() {
    assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
}

#[test]
fn role_parses_facilitator() {
    assert_eq!("FACILITATOR".parse::<Role>(), Ok(Role::Facilitator));
}

#[test]
fn role_parses_secretariat_lead() {
    assert_eq!("SECRETARIAT_LEAD".parse::<Role>(), Ok(Role::SecretariatLead));
}

#[test]
fn role_parses_delegate() {
    assert_eq!("DELEGATE".parse::<Role>(), Ok(Role::Delegate));
}

#[test]
fn role_rejects_unknown_string() {
    assert_eq!(
        "SUPERUSER".parse::<Role>(),
        Err(ApiError::UnknownRole("SUPERUSER".to_owned()))
    );
}

#[test]
fn role_parse_is_case_sensitive() {
    assert!("admin".parse::<Role>().is_err());
}

#[test]
fn role_wire_spelling_round_trips() {
    for role in [
        Role::Admin,
        Role::Facilitator,
        Role::SecretariatLead,
        Role::Delegate,
    ] {
        assert_eq!(role.as_str().parse::<Role>(), Ok(role));
    }
}

// =============================================================
// Payload conversion
// =============================================================

fn payload(role: &str) -> UserPayload {
    UserPayload {
        id: "u-1".to_owned(),
        email: "lead@summit.example".to_owned(),
        name: "Sam Lead".to_owned(),
        role: role.to_owned(),
    }
}

#[test]
fn user_payload_converts_with_valid_role() {
    let user = User::try_from(payload("SECRETARIAT_LEAD")).unwrap();
    assert_eq!(user.role, Role::SecretariatLead);
    assert_eq!(user.id, "u-1");
}

#[test]
fn user_payload_fails_with_unknown_role() {
    let err = User::try_from(payload("WIZARD")).unwrap_err();
    assert_eq!(err, ApiError::UnknownRole("WIZARD".to_owned()));
}

#[test]
fn credentials_convert_from_auth_response() {
    let creds = Credentials::try_from(AuthResponsePayload {
        user: payload("DELEGATE"),
        token: "tok-abc".to_owned(),
    })
    .unwrap();
    assert_eq!(creds.token, "tok-abc");
    assert_eq!(creds.user.role, Role::Delegate);
}

#[test]
fn credentials_conversion_surfaces_role_error() {
    let err = Credentials::try_from(AuthResponsePayload {
        user: payload(""),
        token: "tok-abc".to_owned(),
    })
    .unwrap_err();
    assert!(matches!(err, ApiError::UnknownRole(_)));
}

#[test]
fn auth_response_deserializes_from_json() {
    let json = r#"{
        "user": {"id": "7", "email": "a@b.c", "name": "A", "role": "ADMIN"},
        "token": "bearer-7"
    }"#;
    let payload: AuthResponsePayload = serde_json::from_str(json).unwrap();
    let creds = Credentials::try_from(payload).unwrap();
    assert_eq!(creds.user.role, Role::Admin);
    assert_eq!(creds.token, "bearer-7");
}
