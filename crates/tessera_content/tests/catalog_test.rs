use tessera_content::Catalog;
use tessera_error::ContentErrorKind;

const MINIMAL: &str = r#"
[company]
name = "Test Co"
tagline = "Testing"
founded = 2020
headquarters = "Nowhere"
mission = "Test things"
"#;

#[test]
fn bundled_catalog_loads() {
    let catalog = Catalog::bundled().unwrap();
    assert_eq!(catalog.company().name(), "Tessera Financial");
    assert!(catalog.articles().len() >= 5);
    assert!(catalog.faqs().len() >= 5);
    assert!(catalog.users().len() >= 5);
    assert!(catalog.waitlist().len() >= 4);
}

#[test]
fn every_product_belongs_to_a_known_division() {
    let catalog = Catalog::bundled().unwrap();
    for product in catalog.products() {
        assert!(catalog.division(&product.division).is_ok());
    }
}

#[test]
fn lookups_by_id_and_slug() {
    let catalog = Catalog::bundled().unwrap();
    assert_eq!(catalog.article(1).unwrap().author, "Maya Chen");
    assert_eq!(catalog.user(4).unwrap().name, "Marcus Lee");
    assert_eq!(catalog.product("personal-loans").unwrap().division, "lending");
    assert_eq!(catalog.products_for("wealth").count(), 2);
    assert!(catalog.waitlist_by_name("tessera card").is_some());
}

#[test]
fn missing_records_are_not_found() {
    let catalog = Catalog::bundled().unwrap();
    let err = catalog.article(999).unwrap_err();
    assert!(err.is_not_found());
    assert!(catalog.division("unknown").unwrap_err().is_not_found());
}

#[test]
fn featured_articles_are_newest_first() {
    let catalog = Catalog::bundled().unwrap();
    let featured = catalog.featured_articles();
    assert!(!featured.is_empty());
    assert!(featured.windows(2).all(|w| w[0].date >= w[1].date));
    assert!(featured.iter().all(|a| a.featured));
}

#[test]
fn minimal_catalog_has_empty_collections() {
    let catalog: Catalog = MINIMAL.parse().unwrap();
    assert!(catalog.articles().is_empty());
    assert!(catalog.waitlist().is_empty());
}

#[test]
fn duplicate_ids_are_rejected() {
    let source = format!(
        "{MINIMAL}
[[faqs]]
id = 1
question = \"A?\"
answer = \"A\"
category = \"General\"

[[faqs]]
id = 1
question = \"B?\"
answer = \"B\"
category = \"General\"
"
    );
    let err = source.parse::<Catalog>().unwrap_err();
    assert_eq!(
        err.kind,
        ContentErrorKind::DuplicateId {
            collection: "faqs".to_string(),
            id: "1".to_string(),
        }
    );
}

#[test]
fn product_with_unknown_division_is_rejected() {
    let source = format!(
        "{MINIMAL}
[[products]]
slug = \"orphan\"
name = \"Orphan\"
division = \"nowhere\"
tagline = \"t\"
description = \"d\"
"
    );
    let err = source.parse::<Catalog>().unwrap_err();
    assert!(matches!(err.kind, ContentErrorKind::Parse(_)));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = "[company\nname = ".parse::<Catalog>().unwrap_err();
    assert!(matches!(err.kind, ContentErrorKind::Parse(_)));
}
