use crate::buffer::{Buffer, Cell};
use crate::element::{count_elements, Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, display_width, truncate_to_width};
use crate::types::{Rgb, TextStyle};

const DEFAULT_FG: Rgb = Rgb::WHITE;
const PLACEHOLDER_FG: Rgb = Rgb::new(128, 128, 128);
const SELECTION_FG: Rgb = Rgb::new(242, 242, 242);
const SELECTION_BG: Rgb = Rgb::new(38, 79, 120);

/// Draw `element` and its descendants into `buf` in tree order.
pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    render_element(element, layout, buf);
    log::debug!("rendered {} elements", count_elements(element));
}

fn render_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    if let Some(bg) = element.style.background {
        fill_rect(buf, rect, bg);
    }

    let inner = rect.shrink(
        element.padding.top,
        element.padding.right,
        element.padding.bottom,
        element.padding.left,
    );

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            let fg = element.style.foreground.unwrap_or(DEFAULT_FG);
            let shown = truncate_to_width(text, inner.width as usize);
            write_str(buf, inner, &shown, fg, element.style.text_style);
        }
        Content::TextInput {
            value,
            placeholder,
            cursor,
            selection,
            focused,
            ..
        } => render_text_input(
            element,
            inner,
            buf,
            value,
            placeholder.as_deref(),
            *cursor,
            *selection,
            *focused,
        ),
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_text_input(
    element: &Element,
    inner: Rect,
    buf: &mut Buffer,
    value: &str,
    placeholder: Option<&str>,
    cursor: usize,
    selection: Option<(usize, usize)>,
    focused: bool,
) {
    if inner.is_empty() {
        return;
    }

    let fg = element.style.foreground.unwrap_or(DEFAULT_FG);
    let bg = element.style.background;

    if value.is_empty() {
        // Placeholder is only a hint; it is drawn dim and never becomes the value
        if let Some(placeholder) = placeholder {
            let shown = truncate_to_width(placeholder, inner.width as usize);
            write_str(buf, inner, &shown, PLACEHOLDER_FG, TextStyle::new().dim());
        }
        if focused {
            draw_cursor(buf, inner.x, inner.y, fg, bg);
        }
        return;
    }

    let chars: Vec<char> = value.chars().collect();
    let scroll = scroll_offset(&chars, cursor, inner.width as usize, focused);

    let mut x = inner.x;
    for (idx, &ch) in chars.iter().enumerate().skip(scroll) {
        let w = char_width(ch) as u16;
        if x.saturating_add(w) > inner.right() {
            break;
        }
        let selected = selection.is_some_and(|(start, end)| idx >= start && idx < end);
        let cell = if focused && idx == cursor {
            cursor_cell(ch, fg, bg)
        } else if selected {
            Cell::new(ch).with_fg(SELECTION_FG).with_bg(SELECTION_BG)
        } else {
            styled_cell(buf, x, inner.y, ch, fg, element.style.text_style)
        };
        put_char(buf, x, inner.y, cell, w);
        x = x.saturating_add(w.max(1));
    }

    // Cursor past the last character
    if focused && cursor >= chars.len() && x < inner.right() {
        draw_cursor(buf, x, inner.y, fg, bg);
    }
}

/// First visible character index so the cursor stays inside `width` columns.
fn scroll_offset(chars: &[char], cursor: usize, width: usize, focused: bool) -> usize {
    if !focused || width == 0 {
        return 0;
    }
    // The cursor cell is as wide as the character under it, one column past the end
    let cursor_width = chars.get(cursor).map_or(1, |&c| char_width(c).max(1));
    let width_to_cursor: usize =
        chars.iter().take(cursor).map(|&c| char_width(c)).sum::<usize>() + cursor_width;
    if width_to_cursor <= width {
        return 0;
    }
    let mut excess = width_to_cursor - width;
    let mut offset = 0;
    for &ch in chars {
        if excess == 0 {
            break;
        }
        excess = excess.saturating_sub(char_width(ch).max(1));
        offset += 1;
    }
    offset
}

fn draw_cursor(buf: &mut Buffer, x: u16, y: u16, fg: Rgb, bg: Option<Rgb>) {
    let under = buf.get(x, y).map_or(' ', |cell| cell.char);
    buf.set(x, y, cursor_cell(under, fg, bg));
}

/// Cursor is drawn with foreground and background swapped.
fn cursor_cell(ch: char, fg: Rgb, bg: Option<Rgb>) -> Cell {
    Cell::new(ch).with_fg(bg.unwrap_or(Rgb::BLACK)).with_bg(fg)
}

/// A cell that keeps whatever background is already painted underneath.
fn styled_cell(buf: &Buffer, x: u16, y: u16, ch: char, fg: Rgb, style: TextStyle) -> Cell {
    let bg = buf.get(x, y).map_or(Rgb::BLACK, |cell| cell.bg);
    Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style)
}

fn put_char(buf: &mut Buffer, x: u16, y: u16, cell: Cell, width: u16) {
    buf.set(x, y, cell);
    if width == 2 {
        buf.set(
            x + 1,
            y,
            Cell {
                wide_continuation: true,
                ..cell
            },
        );
    }
}

fn write_str(buf: &mut Buffer, area: Rect, text: &str, fg: Rgb, style: TextStyle) {
    if area.is_empty() {
        return;
    }
    let mut x = area.x;
    let limit = area.x.saturating_add(display_width(text) as u16).min(area.right());
    for ch in text.chars() {
        let w = char_width(ch) as u16;
        if x.saturating_add(w) > limit {
            break;
        }
        let cell = styled_cell(buf, x, area.y, ch, fg, style);
        put_char(buf, x, area.y, cell, w);
        x = x.saturating_add(w.max(1));
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            buf.set(x, y, Cell::new(' ').with_bg(bg));
        }
    }
}
