use std::time::Duration;
use tessera_core::SmtpConfigBuilder;
use tessera_error::NotifyErrorKind;
use tessera_notify::{
    DeliveryStatus, EmailDelays, EmailKind, EmailService, NotificationMetrics, SimulatedNotifier,
};

#[tokio::test(start_paused = true)]
async fn waitlist_confirmation_succeeds_within_delay() {
    let service = EmailService::new(SimulatedNotifier::new(EmailDelays::default()));

    let started = tokio::time::Instant::now();
    let outcome = service
        .send_waitlist_confirmation("a@b.com", "X", None)
        .await
        .unwrap();
    let elapsed = started.elapsed();

    assert!(outcome.success);
    assert!(outcome.error.is_none());
    assert!(outcome.delivery_id.is_some());
    assert!(elapsed >= Duration::from_millis(1000));
    assert!(elapsed < Duration::from_millis(1100));

    let entry = service.log().get(outcome.log_id).unwrap();
    assert_eq!(*entry.status(), DeliveryStatus::Sent);
    assert_eq!(*entry.kind(), EmailKind::WaitlistConfirmation);
    assert_eq!(entry.to(), "a@b.com");
    assert_eq!(*entry.delivery_id(), outcome.delivery_id);
}

#[tokio::test(start_paused = true)]
async fn contact_confirmation_uses_shorter_delay() {
    let service = EmailService::new(SimulatedNotifier::new(EmailDelays::default()));

    let started = tokio::time::Instant::now();
    service
        .send_contact_confirmation("ana@example.com", "Ana", "Fees")
        .await
        .unwrap();
    let elapsed = started.elapsed();

    assert!(elapsed >= Duration::from_millis(500));
    assert!(elapsed < Duration::from_millis(1000));
}

#[tokio::test]
async fn failing_notifier_marks_entry_failed_and_propagates() {
    let service = EmailService::new(SimulatedNotifier::failing("relay unreachable"));

    let err = service
        .send_waitlist_confirmation("a@b.com", "Tessera Card", Some("Ana"))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        NotifyErrorKind::Delivery("relay unreachable".to_string())
    );

    let entries = service.log().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(*entries[0].status(), DeliveryStatus::Failed);
    assert!(entries[0].error().as_deref().unwrap().contains("relay unreachable"));
    assert!(entries[0].delivery_id().is_none());
    assert_eq!(service.metrics().failures(), 1);
}

#[tokio::test]
async fn fail_next_only_affects_that_many_sends() {
    let notifier = std::sync::Arc::new(SimulatedNotifier::instant());
    notifier.fail_next(1);
    let service = EmailService::from_arc(notifier.clone());

    assert!(service
        .send_contact_confirmation("a@b.com", "A", "First")
        .await
        .is_err());
    assert!(service
        .send_contact_confirmation("a@b.com", "A", "Second")
        .await
        .unwrap()
        .success);

    let statuses: Vec<DeliveryStatus> =
        service.log().entries().iter().map(|e| *e.status()).collect();
    assert_eq!(statuses, vec![DeliveryStatus::Failed, DeliveryStatus::Sent]);
    assert_eq!(notifier.sent_count(), 1);
}

#[tokio::test]
async fn sending_twice_sends_twice() {
    let metrics = NotificationMetrics::new();
    let service = EmailService::new(SimulatedNotifier::instant()).with_metrics(metrics.clone());

    let first = service
        .send_waitlist_confirmation("a@b.com", "X", None)
        .await
        .unwrap();
    let second = service
        .send_waitlist_confirmation("a@b.com", "X", None)
        .await
        .unwrap();

    assert_ne!(first.log_id, second.log_id);
    assert_ne!(first.delivery_id, second.delivery_id);
    assert_eq!(service.log().len(), 2);
    assert_eq!(metrics.snapshot().waitlist_sent, 2);
}

#[tokio::test(start_paused = true)]
async fn test_email_is_logged_with_test_kind() {
    let service = EmailService::new(SimulatedNotifier::new(EmailDelays::default()));
    let smtp = SmtpConfigBuilder::default()
        .host("smtp.example.com")
        .user("mailer")
        .password("pw")
        .build()
        .unwrap();

    let started = tokio::time::Instant::now();
    let outcome = service.send_test_email("ops@example.com", &smtp).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(2000));

    let entry = service.log().get(outcome.log_id).unwrap();
    assert_eq!(*entry.kind(), EmailKind::Test);
    assert_eq!(service.metrics().snapshot().test_sent, 1);
}

#[test]
fn outcome_serializes_for_the_api() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = EmailService::new(SimulatedNotifier::instant());
    let outcome = rt
        .block_on(service.send_waitlist_confirmation("a@b.com", "X", None))
        .unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["success"], true);
    assert!(json["error"].is_null());
    assert!(json["log_id"].is_string());
}

#[tokio::test]
async fn service_log_stays_at_capacity() {
    let metrics = NotificationMetrics::new();
    let service = EmailService::new(SimulatedNotifier::instant())
        .with_log_capacity(2)
        .with_metrics(metrics.clone());

    for i in 0..5 {
        let email = format!("user{i}@example.com");
        service
            .send_contact_confirmation(&email, "Ana", "Fees")
            .await
            .unwrap();
    }

    let entries = service.log().entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].to(), "user3@example.com");
    assert_eq!(entries[1].to(), "user4@example.com");
    assert_eq!(metrics.snapshot().contact_sent, 5);
}

#[tokio::test(start_paused = true)]
async fn send_succeeds_when_its_entry_was_dropped_while_pending() {
    let service = EmailService::new(SimulatedNotifier::new(EmailDelays::default()))
        .with_log_capacity(1);

    let (first, second) = tokio::join!(
        service.send_waitlist_confirmation("a@b.com", "X", None),
        service.send_waitlist_confirmation("c@d.com", "X", None),
    );

    assert!(first.unwrap().success);
    let second = second.unwrap();
    assert_eq!(service.log().len(), 1);
    assert_eq!(
        *service.log().get(second.log_id).unwrap().status(),
        DeliveryStatus::Sent
    );
}
