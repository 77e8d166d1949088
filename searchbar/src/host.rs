//! The collaborator that owns the preferences record around a [`SearchBar`].

use tuidom::{Edges, Element, Event, Key, Rgb, Size, Style};

use crate::preferences::{Preferences, PreferencesError, PreferencesStore};
use crate::search_bar::SearchBar;

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the preferences record and the search bar reading it.
///
/// Enter commits the displayed query into the record and saves it, Ctrl+R
/// resets the query, Ctrl+L reloads the record from disk. Every change to
/// the record is followed by [`SearchBar::sync`].
pub struct Host {
    store: PreferencesStore,
    prefs: Preferences,
    bar: SearchBar,
    status: String,
}

impl Host {
    pub fn new(store: PreferencesStore) -> Result<Self, PreferencesError> {
        let prefs = store.load()?;
        let bar = SearchBar::new(&prefs);
        Ok(Self {
            store,
            prefs,
            bar,
            status: String::new(),
        })
    }

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    pub fn bar(&self) -> &SearchBar {
        &self.bar
    }

    /// One-line description of the last thing that happened.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn element(&self) -> Element {
        let muted = Style::new().foreground(Rgb::new(148, 163, 184));
        let help = "Enter save · Ctrl+R reset · Ctrl+L reload · Esc quit";
        Element::col()
            .width(Size::Fill)
            .padding(Edges::symmetric(1, 2))
            .child(Element::text(help).style(muted))
            .child(self.bar.element(true))
            .child(Element::text(format!("saved query: {:?}", self.prefs.query)).style(muted))
            .child(Element::text(self.status.clone()))
    }

    pub fn handle(&mut self, event: Event) -> Result<Flow, PreferencesError> {
        if let Event::Key { key, modifiers, .. } = &event {
            match key {
                Key::Escape => return Ok(Flow::Quit),
                Key::Char('c') if modifiers.ctrl => return Ok(Flow::Quit),
                Key::Char('r') if modifiers.ctrl => {
                    self.prefs.query.clear();
                    self.resync("query reset");
                    return Ok(Flow::Continue);
                }
                Key::Char('l') if modifiers.ctrl => {
                    self.prefs = self.store.load()?;
                    self.resync("reloaded from disk");
                    return Ok(Flow::Continue);
                }
                _ => {}
            }
        }

        for out in self.bar.process_events(&[event]) {
            match out {
                Event::Submit { .. } => self.commit()?,
                Event::Change { text, .. } => {
                    self.status = format!("editing: {text}");
                }
                _ => {}
            }
        }
        Ok(Flow::Continue)
    }

    fn commit(&mut self) -> Result<(), PreferencesError> {
        self.prefs.query = self.bar.query().to_string();
        self.store.save(&self.prefs)?;
        log::info!("committed query {:?}", self.prefs.query);
        self.bar.sync(&self.prefs);
        self.status = format!("saved to {}", self.store.path().display());
        Ok(())
    }

    fn resync(&mut self, what: &str) {
        self.status = if self.bar.sync(&self.prefs) {
            what.to_string()
        } else {
            format!("{what}, query unchanged")
        };
    }
}
