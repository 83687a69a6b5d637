use super::*;

#[test]
fn every_icon_has_path_data() {
    for icon in Icon::ALL {
        assert!(!icon.paths().is_empty(), "{icon:?} has no paths");
        for path in icon.paths() {
            assert!(path.starts_with(['M', 'm']), "{icon:?} path must start with a move: {path}");
        }
    }
}

#[test]
fn icon_labels_are_unique() {
    let mut labels = Icon::ALL.iter().map(|i| i.label()).collect::<Vec<_>>();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), Icon::ALL.len());
}
