#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Single-line text field. `value` is what is displayed; `placeholder`
    /// is drawn only while `value` is empty and is never part of the value.
    TextInput {
        value: String,
        input_type: String,
        name: Option<String>,
        placeholder: Option<String>,
        /// Cursor position as a character index into `value`.
        cursor: usize,
        selection: Option<(usize, usize)>,
        focused: bool,
    },
}
