use searchbar::{Flow, Host, INPUT_ID, Preferences, PreferencesStore};
use tempfile::TempDir;
use tuidom::{Event, Key, Modifiers};

fn key(k: Key) -> Event {
    Event::Key {
        target: Some(INPUT_ID.to_string()),
        key: k,
        modifiers: Modifiers::new(),
    }
}

fn ctrl(c: char) -> Event {
    Event::Key {
        target: Some(INPUT_ID.to_string()),
        key: Key::Char(c),
        modifiers: Modifiers::ctrl(),
    }
}

fn type_str(host: &mut Host, s: &str) {
    for c in s.chars() {
        assert_eq!(host.handle(key(Key::Char(c))).unwrap(), Flow::Continue);
    }
}

/// A store in a fresh temp dir, optionally seeded with a saved query.
fn store_with(dir: &TempDir, query: Option<&str>) -> PreferencesStore {
    let store = PreferencesStore::new(dir.path().join("prefs.json"));
    if let Some(query) = query {
        store.save(&Preferences::with_query(query)).unwrap();
    }
    store
}

#[test]
fn test_enter_commits_and_saves_query() {
    let dir = TempDir::new().unwrap();
    let store = store_with(&dir, None);
    let mut host = Host::new(store.clone()).unwrap();

    type_str(&mut host, "rust");
    assert_eq!(host.prefs().query, "", "typing alone must not write the record");
    assert_eq!(host.status(), "editing: rust");

    host.handle(key(Key::Enter)).unwrap();

    assert_eq!(host.prefs().query, "rust");
    assert_eq!(host.bar().query(), host.prefs().query);
    assert_eq!(store.load().unwrap().query, "rust");
    assert!(host.status().starts_with("saved to "));
}

#[test]
fn test_reset_discards_in_progress_edit() {
    let dir = TempDir::new().unwrap();
    let mut host = Host::new(store_with(&dir, Some("abc"))).unwrap();
    assert_eq!(host.bar().query(), "abc");

    type_str(&mut host, "d");
    assert_eq!(host.bar().query(), "abcd");

    host.handle(ctrl('r')).unwrap();

    assert_eq!(host.prefs().query, "");
    assert_eq!(host.bar().query(), "");
    assert_eq!(host.status(), "query reset");
}

#[test]
fn test_reset_of_empty_query_keeps_local_edit() {
    let dir = TempDir::new().unwrap();
    let mut host = Host::new(store_with(&dir, None)).unwrap();

    type_str(&mut host, "x");
    host.handle(ctrl('r')).unwrap();

    assert_eq!(host.bar().query(), "x");
    assert_eq!(host.status(), "query reset, query unchanged");
}

#[test]
fn test_reload_picks_up_external_file_edit() {
    let dir = TempDir::new().unwrap();
    let store = store_with(&dir, Some("abc"));
    let mut host = Host::new(store.clone()).unwrap();
    type_str(&mut host, "!");

    store.save(&Preferences::with_query("xyz")).unwrap();
    host.handle(ctrl('l')).unwrap();

    assert_eq!(host.prefs().query, "xyz");
    assert_eq!(host.bar().query(), "xyz");
    assert_eq!(host.status(), "reloaded from disk");
}

#[test]
fn test_reload_of_unchanged_file_keeps_local_edit() {
    let dir = TempDir::new().unwrap();
    let mut host = Host::new(store_with(&dir, Some("abc"))).unwrap();
    type_str(&mut host, "!");

    host.handle(ctrl('l')).unwrap();

    assert_eq!(host.bar().query(), "abc!");
    assert_eq!(host.status(), "reloaded from disk, query unchanged");
}

#[test]
fn test_escape_and_ctrl_c_quit() {
    let dir = TempDir::new().unwrap();
    let mut host = Host::new(store_with(&dir, None)).unwrap();

    assert_eq!(host.handle(key(Key::Escape)).unwrap(), Flow::Quit);
    assert_eq!(host.handle(ctrl('c')).unwrap(), Flow::Quit);
}

#[test]
fn test_host_element_contains_search_bar() {
    let dir = TempDir::new().unwrap();
    let host = Host::new(store_with(&dir, Some("abc"))).unwrap();

    let root = host.element();
    let value = tuidom::find_element(&root, INPUT_ID).and_then(|el| el.value());
    assert_eq!(value, Some("abc"));
}
