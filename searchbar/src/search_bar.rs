use tuidom::text_input::edit_to_event;
use tuidom::{
    Edges, Element, Event, Key, Modifiers, Rgb, Size, Style, TextEditResult, TextInputData,
};

use crate::observe::Observed;
use crate::preferences::Preferences;

/// Id of the wrapping container.
pub const CONTAINER_ID: &str = "search-bar";
/// Id of the text input inside the container.
pub const INPUT_ID: &str = "search-bar-input";
/// Form name of the input.
pub const INPUT_NAME: &str = "query";
pub const PLACEHOLDER: &str = "Search";

const MAX_WIDTH: u16 = 48;
const INPUT_BG: Rgb = Rgb::new(15, 23, 42);
const INPUT_FG: Rgb = Rgb::new(226, 232, 240);

/// A search text field whose displayed text is a local copy of
/// `Preferences::query`.
///
/// Typing only changes the local copy. When the host hands over a record
/// whose `query` differs from the last one seen, [`SearchBar::sync`]
/// overwrites the local copy, discarding any edit in progress.
#[derive(Debug, Clone)]
pub struct SearchBar {
    input: TextInputData,
    observed: Observed<String>,
}

impl SearchBar {
    pub fn new(prefs: &Preferences) -> Self {
        Self {
            input: TextInputData::new(prefs.query.clone()),
            observed: Observed::new(prefs.query.clone()),
        }
    }

    /// Text currently displayed.
    pub fn query(&self) -> &str {
        &self.input.text
    }

    /// Editor state: text, cursor and selection.
    pub fn input(&self) -> &TextInputData {
        &self.input
    }

    /// Replace the displayed text with the full value reported by the field.
    pub fn on_change(&mut self, value: impl Into<String>) {
        let value = value.into();
        log::trace!("search input changed to {value:?}");
        self.input.set_text(value);
    }

    /// Apply a keystroke to the local text.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> TextEditResult {
        self.input.handle_key(key, modifiers)
    }

    /// Resynchronize with the host's record.
    ///
    /// Returns `true` when `prefs.query` differs from the value seen last
    /// time and the local text was overwritten with it.
    pub fn sync(&mut self, prefs: &Preferences) -> bool {
        if !self.observed.changed(&prefs.query) {
            return false;
        }
        log::debug!(
            "search query changed externally, replacing {:?} with {:?}",
            self.input.text,
            prefs.query
        );
        self.input = TextInputData::new(prefs.query.clone());
        true
    }

    /// Apply a `Change` aimed at the search input.
    ///
    /// Returns `true` when the event was for this input and its value now
    /// holds the reported text. Other events are left alone.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Change { target, text } if target == INPUT_ID => {
                self.on_change(text.clone());
                true
            }
            _ => false,
        }
    }

    /// Handle events aimed at the search input.
    ///
    /// Keys edit the local text and come back out as `Change` or `Submit`
    /// events for the host. A `Change` aimed at the input replaces the text
    /// and is forwarded. Everything else passes through untouched.
    pub fn process_events(&mut self, events: &[Event]) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            match event {
                Event::Key {
                    target: Some(target),
                    key,
                    modifiers,
                } if target == INPUT_ID => {
                    match edit_to_event(INPUT_ID, &mut self.input, *key, *modifiers) {
                        Some(generated) => {
                            if let Some(Event::Change { text, .. }) = generated.first() {
                                log::trace!("search input changed to {text:?}");
                            }
                            output.extend(generated);
                        }
                        None => output.push(event.clone()),
                    }
                }
                _ => {
                    // Applied changes are still forwarded so the host sees them
                    self.handle_event(event);
                    output.push(event.clone());
                }
            }
        }

        output
    }

    /// Build the element tree: a wrapping container holding one text input.
    pub fn element(&self, focused: bool) -> Element {
        Element::col()
            .id(CONTAINER_ID)
            .width(Size::Fill)
            .max_width(MAX_WIDTH)
            .margin(Edges::vertical(1))
            .child(
                Element::text_input(self.query())
                    .id(INPUT_ID)
                    .input_type("text")
                    .name(INPUT_NAME)
                    .placeholder(PLACEHOLDER)
                    .width(Size::Fill)
                    .padding(Edges::horizontal(1))
                    .input_state(&self.input, focused)
                    .style(Style::new().background(INPUT_BG).foreground(INPUT_FG)),
            )
    }
}
