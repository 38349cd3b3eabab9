use crate::{EXTERNAL_AUTH_SENTINEL, NewUser, User};

#[test]
fn test_from_external_identity_derives_nickname() {
    let new_user = NewUser::from_external_identity("alice@example.com");

    assert_eq!(new_user.email, "alice@example.com");
    assert_eq!(new_user.nickname, "alice");
    assert_eq!(new_user.password, EXTERNAL_AUTH_SENTINEL);
}

#[test]
fn test_from_external_identity_without_at_sign() {
    let new_user = NewUser::from_external_identity("alice");

    assert_eq!(new_user.nickname, "alice");
    assert_eq!(new_user.password, EXTERNAL_AUTH_SENTINEL);
}

#[test]
fn test_into_user_attaches_id() {
    let new_user = NewUser {
        email: "bob@example.com".to_string(),
        password: "hunter2".to_string(),
        nickname: "bob".to_string(),
    };

    let user = new_user.into_user(42);

    assert_eq!(user.id, 42);
    assert_eq!(user.email, "bob@example.com");
    assert_eq!(user.password, "hunter2");
    assert_eq!(user.nickname, "bob");
}

#[test]
fn test_is_externally_authenticated() {
    let external = NewUser::from_external_identity("carol@example.com").into_user(1);
    let regular = User {
        id: 2,
        email: "dave@example.com".to_string(),
        password: "secret".to_string(),
        nickname: "dave".to_string(),
    };

    assert!(external.is_externally_authenticated());
    assert!(!regular.is_externally_authenticated());
}

#[test]
fn test_user_serializes_with_camel_case_keys() {
    let user = User {
        id: 7,
        email: "eve@example.com".to_string(),
        password: "pw".to_string(),
        nickname: "eve".to_string(),
    };

    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["id"], 7);
    assert_eq!(json["email"], "eve@example.com");
    assert_eq!(json["password"], "pw");
    assert_eq!(json["nickname"], "eve");
}
