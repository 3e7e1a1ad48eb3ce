/// Single-line edit state behind one form input. The caret is a `char`
/// index into `value`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EditBuffer {
    value: String,
    caret: usize,
}

impl EditBuffer {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let caret = value.chars().count();
        Self { value, caret }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replaces the content and parks the caret at the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        *self = Self::new(value);
    }

    /// Text before and after the caret, for rendering.
    pub fn split_at_caret(&self) -> (&str, &str) {
        self.value
            .split_at(Self::byte_index_at_char(&self.value, self.caret))
    }

    pub fn insert_text(&mut self, text: &str) -> bool {
        let text = text
            .chars()
            .filter(|ch| !ch.is_control())
            .collect::<String>();
        if text.is_empty() {
            return false;
        }
        let byte_index = Self::byte_index_at_char(&self.value, self.caret);
        self.value.insert_str(byte_index, &text);
        self.caret += text.chars().count();
        true
    }

    pub fn delete_backward(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.remove_char_range(self.caret - 1, self.caret);
        self.caret -= 1;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.caret >= self.len() {
            return false;
        }
        self.remove_char_range(self.caret, self.caret + 1);
        true
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.caret = (self.caret + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.len();
    }

    fn remove_char_range(&mut self, start: usize, end: usize) {
        let byte_start = Self::byte_index_at_char(&self.value, start);
        let byte_end = Self::byte_index_at_char(&self.value, end);
        self.value.replace_range(byte_start..byte_end, "");
    }

    fn byte_index_at_char(value: &str, char_index: usize) -> usize {
        value
            .char_indices()
            .nth(char_index)
            .map(|(index, _)| index)
            .unwrap_or(value.len())
    }
}
