use std::collections::HashMap;

use crate::element::{find_element, Element};
use crate::event::{Event, Key, Modifiers};

/// Data for a single text input: text content and cursor state.
///
/// `cursor` and `anchor` are character indices, not byte offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputData {
    pub text: String,
    pub cursor: usize,
    /// Anchor position for selection. When Some and != cursor, text is selected.
    pub anchor: Option<usize>,
}

impl TextInputData {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            anchor: None,
        }
    }

    /// Replace the whole value. Cursor moves to the end and the selection
    /// is dropped, unless the value is unchanged, in which case nothing moves.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.text {
            return;
        }
        *self = Self::new(text);
    }

    /// Number of characters in the value.
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Get the selection range as (start, end) where start <= end.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.anchor.and_then(|a| {
            if a != self.cursor {
                Some(if a < self.cursor {
                    (a, self.cursor)
                } else {
                    (self.cursor, a)
                })
            } else {
                None
            }
        })
    }

    /// Check if there's an active selection.
    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    /// Clear the selection anchor.
    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Select all text.
    pub fn select_all(&mut self) {
        if !self.text.is_empty() {
            self.anchor = Some(0);
            self.cursor = self.len_chars();
        }
    }

    /// Apply one keystroke.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> TextEditResult {
        match key {
            Key::Char('a') if modifiers.ctrl => {
                self.select_all();
                TextEditResult::Handled
            }

            Key::Char(c) if modifiers.none() || modifiers == Modifiers::shift() => {
                self.insert_char(c);
                TextEditResult::Changed
            }

            Key::Backspace if modifiers.none() => {
                if self.delete_back() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Delete if modifiers.none() => {
                if self.delete_forward() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Left if !modifiers.ctrl => {
                self.move_cursor(-1, modifiers.shift);
                TextEditResult::Handled
            }

            Key::Right if !modifiers.ctrl => {
                self.move_cursor(1, modifiers.shift);
                TextEditResult::Handled
            }

            Key::Home if !modifiers.ctrl => {
                self.move_to(0, modifiers.shift);
                TextEditResult::Handled
            }

            Key::End if !modifiers.ctrl => {
                let end = self.len_chars();
                self.move_to(end, modifiers.shift);
                TextEditResult::Handled
            }

            Key::Enter => TextEditResult::Submitted,

            _ => TextEditResult::Ignored,
        }
    }

    /// Insert a character at cursor, replacing selection if any.
    fn insert_char(&mut self, c: char) {
        if let Some((start, end)) = self.selection() {
            self.remove_range(start, end);
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Delete character before cursor or delete selection.
    /// Returns true if text changed.
    fn delete_back(&mut self) -> bool {
        if let Some((start, end)) = self.selection() {
            self.remove_range(start, end);
            true
        } else if self.cursor > 0 {
            self.remove_range(self.cursor - 1, self.cursor);
            true
        } else {
            false
        }
    }

    /// Delete character after cursor or delete selection.
    /// Returns true if text changed.
    fn delete_forward(&mut self) -> bool {
        if let Some((start, end)) = self.selection() {
            self.remove_range(start, end);
            true
        } else if self.cursor < self.len_chars() {
            self.remove_range(self.cursor, self.cursor + 1);
            true
        } else {
            false
        }
    }

    /// Remove characters `start..end` and park the cursor at `start`.
    fn remove_range(&mut self, start: usize, end: usize) {
        let from = char_to_byte_index(&self.text, start);
        let to = char_to_byte_index(&self.text, end);
        self.text.replace_range(from..to, "");
        self.cursor = start;
        self.clear_selection();
    }

    /// Move cursor by delta characters.
    fn move_cursor(&mut self, delta: i32, extend_selection: bool) {
        if !extend_selection {
            // Collapse an existing selection to the edge in the direction of travel
            if let Some((start, end)) = self.selection() {
                self.cursor = if delta < 0 { start } else { end };
                self.clear_selection();
                return;
            }
        }
        let target = (self.cursor as i64 + delta as i64).clamp(0, self.len_chars() as i64);
        self.move_to(target as usize, extend_selection);
    }

    fn move_to(&mut self, position: usize, extend_selection: bool) {
        if extend_selection {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else {
            self.clear_selection();
        }
        self.cursor = position.min(self.len_chars());
    }
}

/// Tracks text input state for multiple elements.
#[derive(Debug, Default)]
pub struct TextInputState {
    inputs: HashMap<String, TextInputData>,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text value for an input.
    pub fn get(&self, id: &str) -> &str {
        self.inputs
            .get(id)
            .map(|d| d.text.as_str())
            .unwrap_or("")
    }

    /// Get the full input data (text, cursor, selection).
    pub fn get_data(&self, id: &str) -> Option<&TextInputData> {
        self.inputs.get(id)
    }

    /// Get mutable access to input data.
    pub fn get_data_mut(&mut self, id: &str) -> &mut TextInputData {
        self.inputs.entry(id.to_string()).or_default()
    }

    /// Set the text value for an input, placing cursor at end.
    pub fn set(&mut self, id: &str, text: impl Into<String>) {
        self.inputs.insert(id.to_string(), TextInputData::new(text));
    }

    /// Process events and handle text input.
    /// Returns events that were generated (Change, Submit) or passed through.
    pub fn process_events(&mut self, events: &[Event], root: &Element) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            if let Event::Key {
                target: Some(target),
                key,
                modifiers,
            } = event
            {
                let captures = find_element(root, target).is_some_and(|el| el.captures_input);
                if captures {
                    let data = self.get_data_mut(target);
                    if let Some(generated) = edit_to_event(target, data, *key, *modifiers) {
                        output.extend(generated);
                        continue;
                    }
                }
            }
            output.push(event.clone());
        }

        output
    }
}

/// Apply a key to `data` and describe the outcome as events.
///
/// Returns `None` when the key was not an editing key and should pass
/// through, `Some(vec![])` when it only moved the cursor.
pub fn edit_to_event(
    target: &str,
    data: &mut TextInputData,
    key: Key,
    modifiers: Modifiers,
) -> Option<Vec<Event>> {
    match data.handle_key(key, modifiers) {
        TextEditResult::Changed => Some(vec![Event::Change {
            target: target.to_string(),
            text: data.text.clone(),
        }]),
        TextEditResult::Submitted => Some(vec![Event::Submit {
            target: target.to_string(),
        }]),
        TextEditResult::Handled => Some(Vec::new()),
        TextEditResult::Ignored => None,
    }
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
