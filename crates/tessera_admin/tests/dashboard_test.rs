use tessera_admin::DashboardStats;
use tessera_content::Catalog;
use tessera_core::{Priority, UserStatus};

#[test]
fn dashboard_counts_match_catalog() {
    let catalog = Catalog::bundled().unwrap();
    let stats = DashboardStats::from_catalog(&catalog);

    assert_eq!(stats.articles, catalog.articles().len());
    assert_eq!(stats.faqs, catalog.faqs().len());
    assert_eq!(stats.users, catalog.users().len());
    assert_eq!(stats.users_by_status.values().sum::<usize>(), stats.users);
    assert_eq!(stats.users_by_status[&UserStatus::Suspended], 1);
    assert_eq!(stats.waitlist_by_priority[&Priority::High], 2);
    assert_eq!(stats.verified_users, 4);
    assert!((stats.total_investment - 141_850.5).abs() < 1e-6);
}

#[test]
fn recent_articles_are_newest_first_and_capped() {
    let catalog = Catalog::bundled().unwrap();
    let stats = DashboardStats::from_catalog(&catalog);
    assert_eq!(stats.recent_articles.len(), DashboardStats::RECENT_LIMIT);
    assert_eq!(stats.recent_articles[0].id, 1);
    assert!(stats.recent_articles.windows(2).all(|w| w[0].date >= w[1].date));
}

#[test]
fn dashboard_serializes_enum_keys_as_strings() {
    let catalog = Catalog::bundled().unwrap();
    let json = serde_json::to_value(DashboardStats::from_catalog(&catalog)).unwrap();
    assert_eq!(json["users_by_status"]["active"], 4);
    assert_eq!(json["waitlist_by_priority"]["low"], 2);
}
