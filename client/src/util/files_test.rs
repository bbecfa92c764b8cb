use super::*;

fn meta(name: &str, mime: &str) -> FileMeta {
    FileMeta { name: name.to_owned(), size: 2048.0, mime: mime.to_owned() }
}

#[test]
fn csv_detected_by_mime_type() {
    assert!(meta("data", "text/csv").is_csv());
}

#[test]
fn csv_detected_by_extension_case_insensitive() {
    assert!(meta("scenarios.CSV", "").is_csv());
    assert!(meta("resources.csv", "application/vnd.ms-excel").is_csv());
}

#[test]
fn non_csv_rejected() {
    assert!(!meta("notes.txt", "text/plain").is_csv());
    assert!(!meta("csv.json", "application/json").is_csv());
}

#[test]
fn format_kb_uses_one_decimal() {
    assert_eq!(format_kb(2048.0), "2.0 KB");
    assert_eq!(format_kb(1536.0), "1.5 KB");
    assert_eq!(format_kb(0.0), "0.0 KB");
    assert_eq!(meta("a.csv", "").size_label(), "2.0 KB");
}

#[test]
fn remove_at_drops_only_the_indexed_item() {
    let mut items = vec!["a", "b", "c"];
    remove_at(&mut items, 1);
    assert_eq!(items, ["a", "c"]);
}

#[test]
fn remove_at_ignores_out_of_range() {
    let mut items = vec!["a"];
    remove_at(&mut items, 3);
    assert_eq!(items, ["a"]);
}
