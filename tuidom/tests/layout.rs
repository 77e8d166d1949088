use tuidom::{layout, Edges, Element, LayoutResult, Rect, Size};

fn layout_root(root: &Element, width: u16, height: u16) -> LayoutResult {
    layout(root, Rect::new(0, 0, width, height))
}

#[test]
fn test_margin_offsets_element() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(50))
        .margin(Edges::new(5, 0, 0, 10));

    let layout = layout_root(&root, 100, 100);
    let rect = layout.get("root").unwrap();

    assert_eq!(rect.x, 10, "margin left");
    assert_eq!(rect.y, 5, "margin top");
    assert_eq!(rect.width, 50);
}

#[test]
fn test_fill_takes_available_width_minus_margin() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fill)
        .margin(Edges::all(10));

    let layout = layout_root(&root, 100, 100);
    assert_eq!(layout.get("root").unwrap().width, 80);
}

#[test]
fn test_fixed_width_clamped_to_available() {
    let root = Element::box_().id("root").width(Size::Fixed(100));
    let layout = layout_root(&root, 30, 10);
    assert_eq!(layout.get("root").unwrap().width, 30);
}

#[test]
fn test_column_stacks_with_padding_and_gap() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .padding(Edges::all(1))
        .gap(1)
        .child(Element::text("Title").id("title"))
        .child(
            Element::text_input("abc")
                .id("q")
                .placeholder("Search")
                .width(Size::Fill),
        );

    let layout = layout_root(&root, 40, 10);

    assert_eq!(layout.get("root"), Some(Rect::new(0, 0, 40, 5)));
    assert_eq!(layout.get("title"), Some(Rect::new(1, 1, 5, 1)));
    assert_eq!(layout.get("q"), Some(Rect::new(1, 3, 38, 1)));
}

#[test]
fn test_auto_input_width_fits_placeholder_and_cursor() {
    let root = Element::text_input("").id("q").placeholder("Search");
    let layout = layout_root(&root, 40, 10);
    assert_eq!(layout.get("q").unwrap().width, 7);
}

#[test]
fn test_max_width_caps_fill() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .child(Element::text_input("").id("q").width(Size::Fill).max_width(20));

    let layout = layout_root(&root, 40, 10);
    assert_eq!(layout.get("q").unwrap().width, 20);
}

#[test]
fn test_row_places_children_side_by_side() {
    let root = Element::row()
        .id("root")
        .gap(2)
        .child(Element::text("ab").id("a"))
        .child(Element::text("cd").id("b"));

    let layout = layout_root(&root, 20, 5);

    assert_eq!(layout.get("a"), Some(Rect::new(0, 0, 2, 1)));
    assert_eq!(layout.get("b"), Some(Rect::new(4, 0, 2, 1)));
    assert_eq!(layout.get("root").unwrap().width, 6);
}

#[test]
fn test_every_element_gets_a_rect() {
    let root = Element::col()
        .id("root")
        .child(Element::text("one").id("one"))
        .child(Element::col().id("inner").child(Element::text("two").id("two")));

    let layout = layout_root(&root, 20, 5);
    assert_eq!(layout.len(), 4);
    assert!(layout.get("two").is_some());
}
