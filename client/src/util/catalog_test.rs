use super::*;

fn assert_unique_ids(items: &[ChoiceItem]) {
    let mut ids = items.iter().map(|i| i.id).collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), items.len());
}

#[test]
fn catalog_ids_are_unique() {
    assert_unique_ids(&USER_TYPES);
    assert_unique_ids(&DEGREES);
    assert_unique_ids(&FIELDS);
}

#[test]
fn each_catalog_offers_four_choices() {
    for catalog in [Catalog::UserTypes, Catalog::Degrees, Catalog::Fields] {
        assert_eq!(catalog.items().len(), 4);
        assert!(!catalog.heading().is_empty());
    }
}

#[test]
fn find_resolves_known_ids() {
    let student = Catalog::UserTypes.find("student").expect("student exists");
    assert_eq!(student.label, "Student");
    assert_eq!(Catalog::Degrees.find("bootcamp").map(|i| i.label), Some("Bootcamp"));
    assert_eq!(Catalog::Fields.find("cyber").map(|i| i.icon), Some(Icon::Sword));
}

#[test]
fn find_is_scoped_to_catalog() {
    assert!(Catalog::UserTypes.find("cyber").is_none());
    assert!(Catalog::Fields.find("student").is_none());
    assert!(Catalog::Degrees.find("").is_none());
}

#[test]
fn roadmap_is_three_cards_and_three_badges() {
    assert_eq!(ROADMAP.len(), 3);
    assert_eq!(ACHIEVEMENTS.len(), 3);
    assert_eq!(ROADMAP.map(|c| c.title), ["Foundations", "Advanced Techniques", "Expert Level"]);
    assert_eq!(ROADMAP.map(|c| c.difficulty), ["Beginner", "Intermediate", "Advanced"]);
}
