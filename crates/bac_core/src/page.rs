/// Visible content of a fetched result page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageContent {
    /// Full visible text; block boundaries are marked with ` | `.
    pub text: String,
    /// Text of elements carrying a known result class, in document order.
    pub tagged: Vec<String>,
}

impl PageContent {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tagged: Vec::new(),
        }
    }
}
