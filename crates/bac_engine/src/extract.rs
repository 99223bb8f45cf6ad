use bac_core::PageContent;
use bac_logging::bac_trace;
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Separator placed between block-level elements of the visible text.
pub const BLOCK_SEPARATOR: &str = " | ";

/// Classes whose elements usually hold the result itself.
pub const RESULT_CLASSES: &[&str] = &[
    "result",
    "resultat",
    "candidat",
    "student-info",
    "bac-result",
    "note",
    "mention",
];

const MIN_TAGGED_CHARS: usize = 5;

pub trait PageExtractor: Send + Sync {
    fn extract(&self, html: &str) -> PageContent;
}

/// Visible-text extractor:
/// - reads `<main>` if present, otherwise `<body>`, otherwise the whole document
/// - skips script, style and other non-rendered content
/// - joins block-level elements with ` | ` and inline content with spaces
/// - collects the text of elements carrying one of [`RESULT_CLASSES`].
#[derive(Debug, Default, Clone, Copy)]
pub struct VisibleTextExtractor;

impl PageExtractor for VisibleTextExtractor {
    fn extract(&self, html: &str) -> PageContent {
        let doc = Html::parse_document(html);
        let root = ["main", "body"]
            .iter()
            .filter_map(|tag| Selector::parse(tag).ok())
            .find_map(|sel| doc.select(&sel).next())
            .unwrap_or_else(|| doc.root_element());

        let mut ctx = TextContext::default();
        for child in root.children() {
            visit_node(child, &mut ctx);
        }

        PageContent {
            text: ctx.into_text(),
            tagged: tagged_elements(&doc),
        }
    }
}

#[derive(Default)]
struct TextContext {
    blocks: Vec<String>,
    current: String,
}

impl TextContext {
    fn append_text(&mut self, text: &str) {
        for word in text.split_whitespace() {
            if !self.current.is_empty() {
                self.current.push(' ');
            }
            self.current.push_str(word);
        }
    }

    fn break_block(&mut self) {
        if !self.current.is_empty() {
            self.blocks.push(std::mem::take(&mut self.current));
        }
    }

    fn into_text(mut self) -> String {
        self.break_block();
        self.blocks.join(BLOCK_SEPARATOR)
    }
}

fn visit_node(node: NodeRef<'_, Node>, ctx: &mut TextContext) {
    match node.value() {
        Node::Text(text) => ctx.append_text(text),
        Node::Element(element) => {
            let tag = element.name().to_ascii_lowercase();
            if is_hidden(&tag) {
                return;
            }
            let block = is_block(&tag);
            if block {
                ctx.break_block();
            }
            for child in node.children() {
                visit_node(child, ctx);
            }
            if block {
                ctx.break_block();
            }
        }
        _ => {
            for child in node.children() {
                visit_node(child, ctx);
            }
        }
    }
}

fn is_hidden(tag: &str) -> bool {
    matches!(
        tag,
        "script" | "style" | "noscript" | "template" | "head" | "svg" | "iframe"
    )
}

// Table cells stay inline so a label and its value end up in the same block.
fn is_block(tag: &str) -> bool {
    matches!(
        tag,
        "address"
            | "article"
            | "aside"
            | "blockquote"
            | "br"
            | "dd"
            | "div"
            | "dl"
            | "dt"
            | "fieldset"
            | "figure"
            | "footer"
            | "form"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "header"
            | "hr"
            | "li"
            | "main"
            | "nav"
            | "ol"
            | "p"
            | "pre"
            | "section"
            | "table"
            | "tr"
            | "ul"
    )
}

fn tagged_elements(doc: &Html) -> Vec<String> {
    let mut tagged = Vec::new();
    for class in RESULT_CLASSES {
        let Ok(sel) = Selector::parse(&format!(".{class}")) else {
            continue;
        };
        for element in doc.select(&sel) {
            let text = element_text(element);
            if text.chars().count() > MIN_TAGGED_CHARS && !tagged.contains(&text) {
                bac_trace!("Tagged .{}: {}", class, text);
                tagged.push(text);
            }
        }
    }
    tagged
}

fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
