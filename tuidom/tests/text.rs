use tuidom::text::{char_width, display_width, take_width, truncate_to_width};

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_cjk() {
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(display_width("a日b"), 4);
}

#[test]
fn test_char_width() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate_to_width("Search", 10), "Search");
    assert_eq!(truncate_to_width("Search", 6), "Search");
}

#[test]
fn test_truncate_overflow() {
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    assert_eq!(truncate_to_width("hello", 1), "…");
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn test_truncate_cjk() {
    assert_eq!(truncate_to_width("日本語", 5), "日本…");
}

#[test]
fn test_take_width_stops_before_wide_char() {
    assert_eq!(take_width("ab日", 3), "ab");
    assert_eq!(take_width("ab日", 4), "ab日");
}
