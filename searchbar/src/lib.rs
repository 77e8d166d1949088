//! A search input bound to an externally owned preferences record.
//!
//! [`SearchBar`] keeps its own copy of the query text so the user can type
//! freely, and resynchronizes that copy whenever the record's `query`
//! changes underneath it.

pub mod host;
pub mod observe;
pub mod paths;
pub mod preferences;
pub mod search_bar;

pub use host::{Flow, Host};
pub use observe::Observed;
pub use preferences::{Preferences, PreferencesError, PreferencesStore, SortOrder};
pub use search_bar::{CONTAINER_ID, INPUT_ID, INPUT_NAME, PLACEHOLDER, SearchBar};
