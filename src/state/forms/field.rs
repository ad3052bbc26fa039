//! Form field value objects

/// A single text input with its label
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            is_multiline: false,
        }
    }

    /// Create a new multi-line text area
    pub fn text_area(name: &str, label: &str) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(name, label)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Value with surrounding whitespace removed, as submitted
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Newlines are only accepted by multi-line fields
    pub fn push_newline(&mut self) {
        if self.is_multiline {
            self.value.push('\n');
        }
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }
}
