use roster_core::{Person, PersonValidationError};
use uuid::Uuid;

#[test]
fn validate_name_accepts_ordinary_input() {
    assert!(Person::validate_name("Alice").is_ok());
    assert!(Person::validate_name("  Bob  ").is_ok());
}

#[test]
fn validate_name_rejects_blank_input() {
    assert_eq!(
        Person::validate_name("").unwrap_err(),
        PersonValidationError::EmptyName
    );
    assert_eq!(
        Person::validate_name(" \t ").unwrap_err(),
        PersonValidationError::EmptyName
    );
}

#[test]
fn person_serialization_uses_expected_wire_fields() {
    let person_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let person = Person {
        uuid: person_id,
        name: "Ada".to_string(),
        created_at: 1_700_000_000_000,
    };

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["uuid"], person_id.to_string());
    assert_eq!(json["name"], "Ada");
    assert_eq!(json["created_at"], 1_700_000_000_000_i64);

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}
