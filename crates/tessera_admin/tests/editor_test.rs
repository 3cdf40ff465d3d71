use std::time::Duration;
use tessera_admin::{UserDraft, UserEditor};
use tessera_content::Catalog;
use tessera_core::{UserRole, UserStatus};

#[test]
fn draft_starts_from_user() {
    let catalog = Catalog::bundled().unwrap();
    let user = catalog.user(3).unwrap();
    let editor = UserEditor::new(user);
    assert_eq!(editor.draft().name, "Sofia Alvarez");
    assert!(!editor.is_dirty());
    assert!(editor.draft().validate().is_empty());
}

#[test]
fn blank_name_and_email_are_field_errors() {
    let draft = UserDraft {
        name: "   ".to_string(),
        email: String::new(),
        role: UserRole::User,
        status: UserStatus::Active,
        verified: false,
        platforms_used: 0,
    };
    let errors = draft.validate();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("name"), Some("Name is required"));
    assert_eq!(errors.get("email"), Some("Email is required"));
}

#[test]
fn malformed_email_is_rejected() {
    for email in ["no-at-sign", "@example.com", "user@", "a@b@c", "a b@example.com"] {
        let draft = UserDraft {
            name: "Test".to_string(),
            email: email.to_string(),
            role: UserRole::User,
            status: UserStatus::Pending,
            verified: false,
            platforms_used: 0,
        };
        assert_eq!(
            draft.validate().get("email"),
            Some("Please enter a valid email address"),
            "{email}"
        );
    }
}

#[tokio::test(start_paused = true)]
async fn invalid_save_returns_errors_immediately() {
    let catalog = Catalog::bundled().unwrap();
    let mut editor = UserEditor::new(catalog.user(2).unwrap());
    editor.draft_mut().email.clear();

    let started = tokio::time::Instant::now();
    let errors = editor.save().await.unwrap_err();
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert!(errors.get("email").is_some());
}

#[tokio::test(start_paused = true)]
async fn valid_save_returns_edited_copy() {
    let catalog = Catalog::bundled().unwrap();
    let original = catalog.user(4).unwrap();
    let mut editor = UserEditor::new(original).with_save_delay(Duration::from_millis(250));
    editor.draft_mut().status = UserStatus::Active;
    editor.draft_mut().name = "  Marcus J. Lee ".to_string();
    assert!(editor.is_dirty());

    let started = tokio::time::Instant::now();
    let updated = editor.save().await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(250));
    assert_eq!(updated.name, "Marcus J. Lee");
    assert_eq!(updated.status, UserStatus::Active);
    assert_eq!(updated.id, original.id);

    // Catalog keeps the original.
    assert_eq!(catalog.user(4).unwrap().status, UserStatus::Pending);
}
