use super::*;

#[test]
fn choice_class_highlights_selected() {
    assert_eq!(choice_class(true), "choice choice--selected");
    assert_eq!(choice_class(false), "choice");
}
