use beachcomber::entities::{CategoryFilter, GeoPoint, Resource};
use beachcomber::store::ResourceStore;

fn resource(id: &str, name: &str, category: &str) -> Resource {
    Resource {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        location: GeoPoint::new(17.8871, -77.7639),
        description: String::new(),
        image: None,
    }
}

fn treasure_beach() -> Vec<Resource> {
    vec![
        resource("1", "Beach Bar", "Accomodation"),
        resource("2", "Reef Tour", "Attraction"),
        resource("3", "Laundromat", "Services"),
        resource("4", "Art Studio", "Culture"),
    ]
}

#[test]
fn test_more_collects_non_core_categories() {
    let mut store = ResourceStore::new();
    store.replace(treasure_beach());

    let more = store.filter_by_category(CategoryFilter::More);
    assert_eq!(more.len(), 1);
    assert_eq!(more[0].name, "Art Studio");
    assert_eq!(more[0].category, "Culture");
}

#[test]
fn test_core_filters_match_exact_tag() {
    let mut store = ResourceStore::new();
    store.replace(treasure_beach());

    let stays = store.filter_by_category(CategoryFilter::Accomodation);
    assert_eq!(stays.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(), vec!["Beach Bar"]);

    let attractions = store.filter_by_category(CategoryFilter::Attraction);
    assert_eq!(attractions.len(), 1);
    assert_eq!(attractions[0].name, "Reef Tour");

    let services = store.filter_by_category(CategoryFilter::Services);
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].name, "Laundromat");
}

#[test]
fn test_filters_partition_the_store() {
    let mut store = ResourceStore::new();
    let mut resources = treasure_beach();
    resources.push(resource("5", "Nameless", ""));
    resources.push(resource("6", "Lowercase", "accomodation"));
    store.replace(resources);

    let total: usize = CategoryFilter::ALL
        .iter()
        .map(|filter| store.filter_by_category(*filter).len())
        .sum();
    assert_eq!(total, store.len());

    // Tag comparison is case-sensitive, so the lowercase record lands in More
    let more = store.filter_by_category(CategoryFilter::More);
    assert!(more.iter().any(|r| r.name == "Lowercase"));
    assert!(more.iter().any(|r| r.name == "Nameless"));
}

#[test]
fn test_filter_preserves_order() {
    let mut store = ResourceStore::new();
    store.replace(vec![
        resource("1", "First Stay", "Accomodation"),
        resource("2", "Tour", "Attraction"),
        resource("3", "Second Stay", "Accomodation"),
    ]);

    let stays = store.filter_by_category(CategoryFilter::Accomodation);
    let names: Vec<_> = stays.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["First Stay", "Second Stay"]);
}

#[test]
fn test_filter_is_idempotent() {
    let mut store = ResourceStore::new();
    store.replace(treasure_beach());

    let first = store.filter_by_category(CategoryFilter::Services);
    let second = store.filter_by_category(CategoryFilter::Services);
    assert_eq!(first, second);
}

#[test]
fn test_empty_store_filters_to_nothing() {
    let mut store = ResourceStore::new();
    store.replace(Vec::new());

    for filter in CategoryFilter::ALL {
        assert!(store.filter_by_category(filter).is_empty(), "{} should be empty", filter);
    }
}

#[test]
fn test_replace_discards_previous_resources() {
    let mut store = ResourceStore::new();
    store.replace(treasure_beach());
    store.replace(vec![resource("9", "Pelican Bar", "Attraction")]);

    assert_eq!(store.len(), 1);
    assert!(store.get("1").is_none());
    assert!(store.filter_by_category(CategoryFilter::More).is_empty());
}

#[test]
fn test_filter_labels_round_trip() {
    for filter in CategoryFilter::ALL {
        assert_eq!(CategoryFilter::from_label(filter.label()), Some(filter));
    }
    assert_eq!(CategoryFilter::from_label("Culture"), None);
    assert_eq!(CategoryFilter::Accomodation.title(), "Stays");
}

#[test]
fn test_repeated_replace_gives_same_views() {
    let mut once = ResourceStore::new();
    once.replace(treasure_beach());

    let mut twice = ResourceStore::new();
    twice.replace(treasure_beach());
    twice.replace(treasure_beach());

    assert_eq!(once.resources(), twice.resources());
    for filter in CategoryFilter::ALL {
        assert_eq!(
            once.filter_by_category(filter),
            twice.filter_by_category(filter),
            "{} differs after a second replace",
            filter
        );
    }
}
