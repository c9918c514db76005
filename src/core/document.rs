/// Document model
///
/// A document is the ordered list of lines read from the input file. Each line
/// keeps its terminator, so the character count of a document includes one
/// character per line break.

/// Ordered, immutable sequence of raw lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Create a document from already split lines
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split text into lines, keeping the `\n` terminator on every line but
    /// possibly the last one
    pub fn from_text(text: &str) -> Self {
        let lines = text.split_inclusive('\n').map(str::to_string).collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl FromIterator<String> for Document {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for Document {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(str::to_string).collect())
    }
}
