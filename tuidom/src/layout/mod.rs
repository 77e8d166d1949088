mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Size};

/// Computed rectangles keyed by element id.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    pub fn insert(&mut self, id: String, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Lay out `root` inside `available`.
///
/// Text and inputs are one row tall. Containers stack children along their
/// direction with `gap` cells between them. Widths resolve as
/// `Fixed` (clamped to the space left), `Fill` (all space left) or `Auto`
/// (intrinsic width), then clamped by `max_width`.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    place(root, available, &mut result);
    result
}

/// Intrinsic (width, height) of an element including padding.
fn measure(element: &Element) -> (u16, u16) {
    let pad = element.padding;
    let (w, h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (clamp_u16(display_width(text)), 1),
        Content::TextInput {
            value, placeholder, ..
        } => {
            let shown = display_width(value).max(placeholder.as_deref().map_or(0, display_width));
            // One extra column for the cursor at the end of the value
            (clamp_u16(shown + 1), 1)
        }
        Content::Children(children) => {
            let sizes: Vec<(u16, u16)> = children.iter().map(outer_size).collect();
            let gaps = element.gap.saturating_mul(sizes.len().saturating_sub(1) as u16);
            match element.direction {
                Direction::Column => (
                    sizes.iter().map(|s| s.0).max().unwrap_or(0),
                    sizes.iter().fold(gaps, |acc, s| acc.saturating_add(s.1)),
                ),
                Direction::Row => (
                    sizes.iter().fold(gaps, |acc, s| acc.saturating_add(s.0)),
                    sizes.iter().map(|s| s.1).max().unwrap_or(0),
                ),
            }
        }
    };
    (
        w.saturating_add(pad.horizontal_sum()),
        h.saturating_add(pad.vertical_sum()),
    )
}

/// Size including margin.
fn outer_size(element: &Element) -> (u16, u16) {
    let (w, h) = measure(element);
    (
        w.saturating_add(element.margin.horizontal_sum()),
        h.saturating_add(element.margin.vertical_sum()),
    )
}

fn resolve_width(element: &Element, intrinsic: u16, available: u16) -> u16 {
    let width = match element.width {
        Size::Fixed(n) => n,
        Size::Fill => available,
        Size::Auto => intrinsic,
    };
    let width = element.max_width.map_or(width, |max| width.min(max));
    width.min(available)
}

/// Place `element` in `slot` (margin box) and recurse. Returns the outer
/// size consumed.
fn place(element: &Element, slot: Rect, result: &mut LayoutResult) -> (u16, u16) {
    let margin = element.margin;
    let inner_slot = slot.shrink(margin.top, margin.right, margin.bottom, margin.left);

    let (intrinsic_w, intrinsic_h) = measure(element);
    let width = resolve_width(element, intrinsic_w, inner_slot.width);
    let height = intrinsic_h.min(inner_slot.height);
    let rect = Rect::new(inner_slot.x, inner_slot.y, width, height);
    result.insert(element.id.clone(), rect);

    if let Content::Children(children) = &element.content {
        let pad = element.padding;
        let content = rect.shrink(pad.top, pad.right, pad.bottom, pad.left);
        let mut offset: u16 = 0;
        for child in children {
            let child_slot = match element.direction {
                Direction::Column => Rect::new(
                    content.x,
                    content.y.saturating_add(offset),
                    content.width,
                    content.height.saturating_sub(offset),
                ),
                Direction::Row => Rect::new(
                    content.x.saturating_add(offset),
                    content.y,
                    content.width.saturating_sub(offset),
                    content.height,
                ),
            };
            let (used_w, used_h) = place(child, child_slot, result);
            let used = match element.direction {
                Direction::Column => used_h,
                Direction::Row => used_w,
            };
            offset = offset.saturating_add(used).saturating_add(element.gap);
        }
    }

    (
        width.saturating_add(margin.horizontal_sum()),
        height.saturating_add(margin.vertical_sum()),
    )
}

fn clamp_u16(n: usize) -> u16 {
    n.min(u16::MAX as usize) as u16
}
