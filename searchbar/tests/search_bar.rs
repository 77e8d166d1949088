use searchbar::{CONTAINER_ID, INPUT_ID, INPUT_NAME, PLACEHOLDER, Preferences, SearchBar};
use tuidom::{
    Buffer, Content, Element, Event, Key, Modifiers, Rect, TextEditResult, find_element, layout,
    render_to_buffer,
};

fn change(text: &str) -> Event {
    Event::Change {
        target: INPUT_ID.to_string(),
        text: text.to_string(),
    }
}

fn key(k: Key) -> Event {
    Event::Key {
        target: Some(INPUT_ID.to_string()),
        key: k,
        modifiers: Modifiers::new(),
    }
}

/// The rendered input's value.
fn rendered_value(bar: &SearchBar) -> String {
    let root = bar.element(false);
    find_element(&root, INPUT_ID)
        .and_then(Element::value)
        .map(str::to_string)
        .unwrap()
}

// ============================================================================
// Behaviour
// ============================================================================

#[test]
fn test_initial_value_comes_from_preferences() {
    let prefs = Preferences::with_query("abc");
    let bar = SearchBar::new(&prefs);

    assert_eq!(bar.query(), "abc");
    assert_eq!(rendered_value(&bar), "abc");
}

#[test]
fn test_local_edit_does_not_write_back() {
    let prefs = Preferences::with_query("abc");
    let mut bar = SearchBar::new(&prefs);

    bar.process_events(&[change("abcd")]);

    assert_eq!(rendered_value(&bar), "abcd");
    assert_eq!(prefs.query, "abc");
}

#[test]
fn test_external_change_overwrites_local_edit() {
    let mut prefs = Preferences::with_query("abc");
    let mut bar = SearchBar::new(&prefs);
    bar.on_change("abcd");

    prefs.query = "xyz".to_string();
    assert!(bar.sync(&prefs));

    assert_eq!(rendered_value(&bar), "xyz");
    assert_eq!(bar.input().cursor, 3);
}

#[test]
fn test_same_query_does_not_resync() {
    let prefs = Preferences::with_query("abc");
    let mut bar = SearchBar::new(&prefs);
    bar.on_change("abcd");

    assert!(!bar.sync(&prefs));
    assert_eq!(bar.query(), "abcd");

    // A brand new record carrying the same query is still no change
    let replaced = Preferences {
        page_size: 50,
        ..Preferences::with_query("abc")
    };
    assert!(!bar.sync(&replaced));
    assert_eq!(bar.query(), "abcd");
}

#[test]
fn test_repeated_identical_edit_is_stable() {
    let mut bar = SearchBar::new(&Preferences::with_query("abc"));

    bar.process_events(&[change("abcd")]);
    let first = bar.input().clone();
    bar.process_events(&[change("abcd")]);

    assert_eq!(bar.query(), "abcd");
    assert_eq!(bar.input(), &first);
}

#[test]
fn test_empty_query_renders_placeholder_not_value() {
    let bar = SearchBar::new(&Preferences::with_query(""));
    assert_eq!(rendered_value(&bar), "");

    let root = bar.element(false);
    let mut buf = Buffer::new(30, 3);
    render_to_buffer(&root, &layout(&root, Rect::from_size(30, 3)), &mut buf);

    // Margin pushes the input to row 1, padding indents it by one column
    assert!(buf.row_text(1).starts_with(" Search "));
    assert!(buf.get(1, 1).unwrap().style.dim);
}

#[test]
fn test_resync_after_return_to_previous_value() {
    let mut prefs = Preferences::with_query("abc");
    let mut bar = SearchBar::new(&prefs);

    prefs.query = "xyz".to_string();
    assert!(bar.sync(&prefs));
    bar.on_change("xyz!");

    prefs.query = "abc".to_string();
    assert!(bar.sync(&prefs));
    assert_eq!(bar.query(), "abc");
}

#[test]
fn test_handle_event_applies_change_for_this_input() {
    let prefs = Preferences::with_query("abc");
    let mut bar = SearchBar::new(&prefs);

    assert!(bar.handle_event(&change("abcd")));
    assert_eq!(bar.query(), "abcd");
    assert_eq!(prefs.query, "abc");
}

#[test]
fn test_handle_event_ignores_other_events() {
    let mut bar = SearchBar::new(&Preferences::with_query("abc"));
    let other = Event::Change {
        target: "elsewhere".to_string(),
        text: "zzz".to_string(),
    };

    assert!(!bar.handle_event(&other));
    assert!(!bar.handle_event(&key(Key::Char('x'))));
    assert_eq!(bar.query(), "abc");
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_typing_emits_full_value_changes() {
    let mut bar = SearchBar::new(&Preferences::with_query("ab"));

    let out = bar.process_events(&[key(Key::Char('c')), key(Key::Backspace), key(Key::Char('d'))]);

    assert_eq!(out, vec![change("abc"), change("ab"), change("abd")]);
    assert_eq!(bar.query(), "abd");
}

#[test]
fn test_enter_emits_submit_without_touching_text() {
    let mut bar = SearchBar::new(&Preferences::with_query("rust"));
    let out = bar.process_events(&[key(Key::Enter)]);

    assert_eq!(
        out,
        vec![Event::Submit {
            target: INPUT_ID.to_string()
        }]
    );
    assert_eq!(bar.query(), "rust");
}

#[test]
fn test_unrelated_events_pass_through() {
    let mut bar = SearchBar::new(&Preferences::with_query("abc"));
    let events = vec![
        Event::Key {
            target: Some("elsewhere".to_string()),
            key: Key::Char('x'),
            modifiers: Modifiers::new(),
        },
        key(Key::Escape),
        Event::Change {
            target: "elsewhere".to_string(),
            text: "zzz".to_string(),
        },
        Event::Resize {
            width: 80,
            height: 24,
        },
    ];

    let out = bar.process_events(&events);

    assert_eq!(out, events);
    assert_eq!(bar.query(), "abc");
}

#[test]
fn test_cursor_keys_produce_no_events() {
    let mut bar = SearchBar::new(&Preferences::with_query("abc"));
    assert!(bar.process_events(&[key(Key::Left), key(Key::Home)]).is_empty());
    assert_eq!(bar.input().cursor, 0);
}

#[test]
fn test_handle_key_edits_locally() {
    let prefs = Preferences::with_query("abc");
    let mut bar = SearchBar::new(&prefs);

    assert_eq!(
        bar.handle_key(Key::Char('d'), Modifiers::new()),
        TextEditResult::Changed
    );
    assert_eq!(bar.query(), "abcd");
    assert_eq!(prefs.query, "abc");
}

// ============================================================================
// Element tree
// ============================================================================

#[test]
fn test_element_is_container_with_one_text_input() {
    let bar = SearchBar::new(&Preferences::with_query("abc"));
    let root = bar.element(true);

    assert_eq!(root.id, CONTAINER_ID);
    let Content::Children(children) = &root.content else {
        panic!("container should have children");
    };
    assert_eq!(children.len(), 1);

    match &children[0].content {
        Content::TextInput {
            value,
            input_type,
            name,
            placeholder,
            cursor,
            focused,
            ..
        } => {
            assert_eq!(children[0].id, INPUT_ID);
            assert_eq!(value, "abc");
            assert_eq!(input_type, "text");
            assert_eq!(name.as_deref(), Some(INPUT_NAME));
            assert_eq!(placeholder.as_deref(), Some(PLACEHOLDER));
            assert_eq!(*cursor, 3);
            assert!(*focused);
        }
        other => panic!("expected a text input, got {other:?}"),
    }
}

#[test]
fn test_element_width_is_capped() {
    let bar = SearchBar::new(&Preferences::default());
    let root = bar.element(false);
    let layout = layout(&root, Rect::from_size(200, 10));

    assert_eq!(layout.get(CONTAINER_ID).unwrap().width, 48);
    assert_eq!(layout.get(INPUT_ID).unwrap().width, 48);
}
