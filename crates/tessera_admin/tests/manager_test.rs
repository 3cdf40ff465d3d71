use std::time::Duration;
use tessera_admin::{ArticleSort, DialogAction, Manager, SortOrder, DEFAULT_DELETE_DELAY};
use tessera_content::Catalog;
use tessera_core::{Article, Faq, User, WaitlistItem};

#[test]
fn screens_open_with_default_sort() {
    let catalog = Catalog::bundled().unwrap();
    let articles: Manager<'_, Article> = Manager::new(catalog.articles());
    assert_eq!(articles.state().sort_field(), ArticleSort::Date);
    assert_eq!(articles.state().order(), SortOrder::Desc);

    let view = articles.view();
    assert!(view.windows(2).all(|w| w[0].date >= w[1].date));

    let faqs: Manager<'_, Faq> = Manager::new(catalog.faqs());
    assert_eq!(faqs.view().len(), catalog.faqs().len());
}

#[test]
fn unknown_id_cannot_be_deleted() {
    let catalog = Catalog::bundled().unwrap();
    let mut users: Manager<'_, User> = Manager::new(catalog.users());
    let err = users.request_delete(404).unwrap_err();
    assert!(err.is_not_found());
    assert!(users.dialog_view().is_none());
}

#[test]
fn dismissing_closes_without_deleting() {
    let catalog = Catalog::bundled().unwrap();
    let mut waitlist: Manager<'_, WaitlistItem> = Manager::new(catalog.waitlist());
    waitlist.request_delete(2).unwrap();
    assert!(waitlist.dialog().is_open());
    waitlist.dismiss_delete(DialogAction::Backdrop);
    assert!(!waitlist.dialog().is_open());
}

#[tokio::test(start_paused = true)]
async fn confirmed_delete_waits_and_leaves_catalog_untouched() {
    let catalog = Catalog::bundled().unwrap();
    let mut articles: Manager<'_, Article> = Manager::new(catalog.articles());
    let before: Vec<u32> = articles.view().iter().map(|a| a.id).collect();

    articles.request_delete(3).unwrap();
    let started = tokio::time::Instant::now();
    let outcome = articles.confirm_delete().await.unwrap();

    assert!(started.elapsed() >= DEFAULT_DELETE_DELAY);
    assert_eq!(outcome.id, 3);
    assert_eq!(outcome.kind, "article");
    assert!(!outcome.removed);
    assert!(!articles.dialog().is_open());

    let after: Vec<u32> = articles.view().iter().map(|a| a.id).collect();
    assert_eq!(before, after);
    assert!(after.contains(&3));
}

#[tokio::test(start_paused = true)]
async fn confirm_without_open_dialog_returns_none() {
    let catalog = Catalog::bundled().unwrap();
    let mut faqs: Manager<'_, Faq> =
        Manager::new(catalog.faqs()).with_delete_delay(Duration::from_millis(10));
    assert!(faqs.confirm_delete().await.is_none());
}
