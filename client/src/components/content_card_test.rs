use super::*;

#[test]
fn review_href_formats_expected_path() {
    assert_eq!(review_href("42"), "/admin/review/42");
}

#[test]
fn review_href_passes_string_ids_through() {
    assert_eq!(review_href("c-7"), "/admin/review/c-7");
}
