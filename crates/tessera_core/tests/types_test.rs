use tessera_core::{
    LaunchStatus, LaunchWindow, Priority, SmtpConfig, SmtpConfigBuilder, User, UserRole,
    UserStatus, WaitlistItem,
};

fn waitlist_item(id: u32, launch: &str) -> WaitlistItem {
    WaitlistItem {
        id,
        name: format!("Item {id}"),
        subtitle: String::new(),
        description: String::new(),
        category: "Banking".to_string(),
        priority: Priority::Medium,
        expected_launch: launch.to_string(),
        features: Vec::new(),
    }
}

#[test]
fn priority_orders_most_urgent_first() {
    let mut priorities = vec![Priority::Low, Priority::High, Priority::Medium];
    priorities.sort();
    assert_eq!(priorities, vec![Priority::High, Priority::Medium, Priority::Low]);
}

#[test]
fn enums_parse_case_insensitively() {
    assert_eq!("EDITOR".parse::<UserRole>().unwrap(), UserRole::Editor);
    assert_eq!("Suspended".parse::<UserStatus>().unwrap(), UserStatus::Suspended);
    assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
    assert!("owner".parse::<UserRole>().is_err());
}

#[test]
fn enums_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    assert_eq!(
        serde_json::to_string(&LaunchStatus::ComingSoon).unwrap(),
        "\"coming-soon\""
    );
}

#[test]
fn launch_window_parsing() {
    let window = LaunchWindow::parse("Q2 2026").unwrap();
    assert_eq!(window.year(), 2026);
    assert_eq!(window.quarter(), Some(2));

    let year_only = LaunchWindow::parse("2027").unwrap();
    assert_eq!(year_only.quarter(), None);

    assert!(LaunchWindow::parse("Q5 2026").is_none());
    assert!(LaunchWindow::parse("Q1 2026 maybe").is_none());
    assert!(LaunchWindow::parse("").is_none());
}

#[test]
fn launch_comparison_puts_unparsed_last() {
    let early = waitlist_item(1, "Q1 2025");
    let late = waitlist_item(2, "Q4 2025");
    let vague = waitlist_item(3, "TBD");

    assert!(early.cmp_launch(&late).is_lt());
    assert!(late.cmp_launch(&vague).is_lt());
    assert!(vague.cmp_launch(&early).is_gt());
}

#[test]
fn badges_only_for_unreleased() {
    assert_eq!(LaunchStatus::Live.badge(), None);
    assert_eq!(LaunchStatus::Beta.badge(), Some("Beta"));
    assert_eq!(LaunchStatus::ComingSoon.badge(), Some("Coming Soon"));
}

#[test]
fn smtp_missing_fields_reports_blank_required_fields() {
    let smtp = SmtpConfig {
        host: "  ".to_string(),
        port: 0,
        ..SmtpConfig::default()
    };
    assert_eq!(smtp.missing_fields(), vec!["host", "port", "user", "password"]);

    let complete = SmtpConfigBuilder::default()
        .host("smtp.example.com")
        .port(465u16)
        .secure(true)
        .user("mailer")
        .password("secret")
        .build()
        .unwrap();
    assert!(complete.missing_fields().is_empty());
    assert_eq!(complete.sender(), "Tessera Financial <noreply@tessera.example>");
}

#[test]
fn smtp_config_reads_camel_case() {
    let smtp: SmtpConfig = serde_json::from_str(
        r#"{"host":"smtp.example.com","port":25,"user":"u","password":"p","fromEmail":"ops@example.com"}"#,
    )
    .unwrap();
    assert_eq!(smtp.from_email, "ops@example.com");
    assert_eq!(smtp.from_name, "Tessera Financial");
}

#[test]
fn user_deserializes_with_defaults() {
    let user: User = serde_json::from_str(
        r#"{"id":3,"name":"Ana","email":"ana@example.com","role":"user","status":"pending"}"#,
    )
    .unwrap();
    assert_eq!(user.investment_total, 0.0);
    assert!(!user.verified);
    assert_eq!(user.status, UserStatus::Pending);
}
