//! Direction-aware markdown rendering
//!
//! Markdown is parsed with `pulldown-cmark` into a small node tree. Every
//! text-bearing construct (paragraph, heading, list item, block quote,
//! strong, emphasis, link, table cell) goes through the same
//! classify-and-wrap handler; the handlers differ only in their outer tag.
//! Raw HTML in the source is escaped, code is always rendered LTR.
//! Link and image URLs keep only `http`, `https` and `mailto` schemes
//! besides relative references; any other URL becomes empty.

use pulldown_cmark_escape::escape_href;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};
use serde::{Deserialize, Serialize};

use crate::domain::{
    classify, contains_rtl, escape_html, wrap_mixed_content, Direction, MarkupStyle,
    MixedContentVerdict,
};

/// Default block-level class hooks
pub mod defaults {
    /// Block containing both scripts
    pub const MIXED_BLOCK_CLASS: &str = "mixed-content";
    /// Block containing Arabic only
    pub const RTL_BLOCK_CLASS: &str = "rtl-paragraph";
    /// List containing any Arabic
    pub const RTL_LIST_CLASS: &str = "rtl-list";
    /// Document wrapper of a mixed document
    pub const MIXED_DOCUMENT_CLASS: &str = "mixed-script-container";
}

/// Class hooks and run markup used by [`render_markdown`].
///
/// Text coming from markdown is always escaped; `markup.escape_html` only
/// applies to [`Markup::to_html`](crate::domain::Markup::to_html) callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Markup of isolated runs inside mixed blocks
    pub markup: MarkupStyle,
    /// Wrap the whole document in a `<div>` carrying its direction
    pub wrap_document: bool,
    /// Class added to the document wrapper when the document is mixed
    pub mixed_document_class: String,
    /// Class added to mixed blocks
    pub mixed_block_class: String,
    /// Class added to pure-RTL blocks
    pub rtl_block_class: String,
    /// Class added to lists containing Arabic
    pub rtl_list_class: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            markup: MarkupStyle::default(),
            wrap_document: true,
            mixed_document_class: defaults::MIXED_DOCUMENT_CLASS.to_string(),
            mixed_block_class: defaults::MIXED_BLOCK_CLASS.to_string(),
            rtl_block_class: defaults::RTL_BLOCK_CLASS.to_string(),
            rtl_list_class: defaults::RTL_LIST_CLASS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Block {
    Paragraph,
    Heading(u8),
    BlockQuote,
    CodeBlock(Option<String>),
    List(Option<u64>),
    Item,
    Emphasis,
    Strong,
    Strikethrough,
    Link { href: String, title: String },
    Image { src: String, title: String },
    Table,
    TableHead,
    TableRow,
    TableCell,
    Transparent,
}

impl Block {
    fn from_tag(tag: Tag<'_>) -> Self {
        match tag {
            Tag::Paragraph => Block::Paragraph,
            Tag::Heading { level, .. } => Block::Heading(heading_rank(level)),
            Tag::BlockQuote(..) => Block::BlockQuote,
            Tag::CodeBlock(CodeBlockKind::Fenced(info)) => Block::CodeBlock(
                info.split_whitespace()
                    .next()
                    .filter(|lang| !lang.is_empty())
                    .map(str::to_string),
            ),
            Tag::CodeBlock(CodeBlockKind::Indented) => Block::CodeBlock(None),
            Tag::List(start) => Block::List(start),
            Tag::Item => Block::Item,
            Tag::Emphasis => Block::Emphasis,
            Tag::Strong => Block::Strong,
            Tag::Strikethrough => Block::Strikethrough,
            Tag::Link {
                dest_url, title, ..
            } => Block::Link {
                href: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::Image {
                dest_url, title, ..
            } => Block::Image {
                src: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::Table(_) => Block::Table,
            Tag::TableHead => Block::TableHead,
            Tag::TableRow => Block::TableRow,
            Tag::TableCell => Block::TableCell,
            _ => Block::Transparent,
        }
    }

    fn is_block_level(&self) -> bool {
        matches!(
            self,
            Block::Paragraph
                | Block::Heading(_)
                | Block::BlockQuote
                | Block::CodeBlock(_)
                | Block::List(_)
                | Block::Item
                | Block::Table
        )
    }
}

fn heading_rank(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Element(Block, Vec<Node>),
    Text(String),
    Code(String),
    Html(String),
    TaskMarker(bool),
    SoftBreak,
    HardBreak,
    Rule,
}

impl Node {
    fn is_block_level(&self) -> bool {
        match self {
            Node::Element(block, _) => block.is_block_level(),
            Node::Rule => true,
            _ => false,
        }
    }
}

fn parse(markdown: &str) -> Vec<Node> {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;

    let mut stack: Vec<(Block, Vec<Node>)> = Vec::new();
    let mut root: Vec<Node> = Vec::new();

    for event in Parser::new_ext(markdown, options) {
        let node = match event {
            Event::Start(tag) => {
                stack.push((Block::from_tag(tag), Vec::new()));
                continue;
            }
            Event::End(_) => match stack.pop() {
                Some((block, children)) => Node::Element(block, children),
                None => continue,
            },
            Event::Text(text) => Node::Text(text.into_string()),
            Event::Code(code) => Node::Code(code.into_string()),
            Event::Html(html) | Event::InlineHtml(html) => Node::Html(html.into_string()),
            Event::FootnoteReference(name) => Node::Text(format!("[{name}]")),
            Event::TaskListMarker(checked) => Node::TaskMarker(checked),
            Event::SoftBreak => Node::SoftBreak,
            Event::HardBreak => Node::HardBreak,
            Event::Rule => Node::Rule,
            _ => continue,
        };

        match stack.last_mut() {
            Some((_, children)) => children.push(node),
            None => root.push(node),
        }
    }

    // Unbalanced input cannot come out of the parser, but never lose content
    while let Some((block, children)) = stack.pop() {
        let node = Node::Element(block, children);
        match stack.last_mut() {
            Some((_, parent)) => parent.push(node),
            None => root.push(node),
        }
    }

    root
}

/// Text used for direction decisions; code and raw HTML are excluded
fn plain_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::SoftBreak | Node::HardBreak => out.push('\n'),
            Node::Element(_, children) => plain_text(children, out),
            Node::Code(_) | Node::Html(_) | Node::TaskMarker(_) | Node::Rule => {}
        }
    }
}

fn text_of(nodes: &[Node]) -> String {
    let mut text = String::new();
    plain_text(nodes, &mut text);
    text
}

/// URL schemes kept in `href` and `src`
const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Scheme of `url`, if any: the text before a `:` that precedes every `/`, `?` and `#`
fn url_scheme(url: &str) -> Option<&str> {
    let end = url.find(['/', '?', '#']).unwrap_or(url.len());
    url[..end].find(':').map(|colon| &url[..colon])
}

fn is_safe_url(url: &str) -> bool {
    url_scheme(url).map_or(true, |scheme| {
        SAFE_SCHEMES
            .iter()
            .any(|safe| scheme.eq_ignore_ascii_case(safe))
    })
}

/// Attribute value for a link or image URL, empty when the scheme is not allowed
fn url_attribute(url: &str) -> String {
    let mut value = String::with_capacity(url.len());
    if is_safe_url(url) {
        escape_href(&mut value, url).expect("writing to a String cannot fail");
    } else {
        log::debug!("dropping URL with disallowed scheme: {url:?}");
    }
    value
}

struct Renderer<'a> {
    style: &'a RenderStyle,
    /// Run markup with escaping forced on
    markup: MarkupStyle,
    out: String,
}

impl<'a> Renderer<'a> {
    fn new(style: &'a RenderStyle) -> Self {
        Self {
            style,
            markup: MarkupStyle {
                escape_html: true,
                ..style.markup.clone()
            },
            out: String::new(),
        }
    }

    fn document(&mut self, source: &str, nodes: &[Node]) {
        let verdict = classify(source);
        self.out.push_str("<div");
        if verdict.is_mixed() {
            self.out
                .push_str(&format!(" class=\"{}\"", self.style.mixed_document_class));
        }
        self.out
            .push_str(&format!(" dir=\"{}\">\n", verdict.direction()));
        self.nodes(nodes);
        self.out.push_str("</div>\n");
    }

    fn nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.node(node);
        }
    }

    fn node(&mut self, node: &Node) {
        match node {
            Node::Element(block, children) => self.element(block, children),
            Node::Text(text) => {
                if classify(text).is_mixed() {
                    let html = wrap_mixed_content(text).to_html(&self.markup);
                    self.out.push_str(&html);
                } else {
                    self.out.push_str(&escape_html(text));
                }
            }
            Node::Code(code) => {
                self.out.push_str("<code dir=\"ltr\">");
                self.out.push_str(&escape_html(code));
                self.out.push_str("</code>");
            }
            Node::Html(html) => self.out.push_str(&escape_html(html)),
            Node::TaskMarker(checked) => self.out.push_str(if *checked {
                "<input type=\"checkbox\" disabled checked /> "
            } else {
                "<input type=\"checkbox\" disabled /> "
            }),
            Node::SoftBreak => self.out.push('\n'),
            Node::HardBreak => self.out.push_str("<br />\n"),
            Node::Rule => self.out.push_str("<hr />\n"),
        }
    }

    fn element(&mut self, block: &Block, children: &[Node]) {
        match block {
            Block::Paragraph => self.directed("p", "", children, true),
            Block::Heading(rank) => {
                let tag = format!("h{rank}");
                self.directed(&tag, "", children, true);
            }
            Block::BlockQuote => self.directed("blockquote", "", children, true),
            Block::Item => self.directed("li", "", children, true),
            Block::Emphasis => self.directed("em", "", children, false),
            Block::Strong => self.directed("strong", "", children, false),
            Block::Strikethrough => self.directed("del", "", children, false),
            Block::TableCell => self.directed("td", "", children, false),
            Block::Link { href, title } => {
                let mut attrs = format!(" href=\"{}\"", url_attribute(href));
                if !title.is_empty() {
                    attrs.push_str(&format!(" title=\"{}\"", escape_html(title)));
                }
                attrs.push_str(" target=\"_blank\" rel=\"noreferrer\"");
                self.directed("a", &attrs, children, false);
            }
            Block::Image { src, title } => {
                self.out.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\"",
                    url_attribute(src),
                    escape_html(&text_of(children))
                ));
                if !title.is_empty() {
                    self.out
                        .push_str(&format!(" title=\"{}\"", escape_html(title)));
                }
                self.out.push_str(" />");
            }
            Block::CodeBlock(lang) => {
                self.out.push_str("<pre dir=\"ltr\"><code");
                if let Some(lang) = lang {
                    self.out
                        .push_str(&format!(" class=\"language-{}\"", escape_html(lang)));
                }
                self.out.push('>');
                for child in children {
                    if let Node::Text(text) = child {
                        self.out.push_str(&escape_html(text));
                    }
                }
                self.out.push_str("</code></pre>\n");
            }
            Block::List(start) => self.list(*start, children),
            Block::Table => {
                self.out.push_str("<table>\n");
                self.nodes(children);
                self.out.push_str("</table>\n");
            }
            Block::TableHead => {
                self.out.push_str("<thead><tr>");
                self.nodes(children);
                self.out.push_str("</tr></thead>\n");
            }
            Block::TableRow => {
                self.out.push_str("<tr>");
                self.nodes(children);
                self.out.push_str("</tr>\n");
            }
            Block::Transparent => self.nodes(children),
        }
    }

    /// The shared classify-and-wrap handler
    fn directed(&mut self, tag: &str, attrs: &str, children: &[Node], block_level: bool) {
        let text = text_of(children);
        let verdict = classify(&text);
        let class = match verdict {
            MixedContentVerdict::Mixed => self.style.mixed_block_class.as_str(),
            MixedContentVerdict::PureRtl => self.style.rtl_block_class.as_str(),
            MixedContentVerdict::PureLtr => "",
        };

        self.out.push('<');
        self.out.push_str(tag);
        self.out.push_str(attrs);
        if !class.is_empty() {
            self.out.push_str(&format!(" class=\"{class}\""));
        }
        self.out
            .push_str(&format!(" dir=\"{}\">", verdict.direction()));

        let flat = children
            .iter()
            .all(|child| matches!(child, Node::Text(_) | Node::SoftBreak));
        if verdict.is_mixed() && flat {
            let html = wrap_mixed_content(&text).to_html(&self.markup);
            self.out.push_str(&html);
        } else {
            if block_level && children.iter().any(Node::is_block_level) {
                self.out.push('\n');
            }
            self.nodes(children);
        }

        self.out.push_str(&format!("</{tag}>"));
        if block_level {
            self.out.push('\n');
        }
    }

    fn list(&mut self, start: Option<u64>, children: &[Node]) {
        let direction = Direction::from_rtl(contains_rtl(&text_of(children)));
        let tag = if start.is_some() { "ol" } else { "ul" };

        self.out.push('<');
        self.out.push_str(tag);
        if let Some(start) = start.filter(|&n| n != 1) {
            self.out.push_str(&format!(" start=\"{start}\""));
        }
        if direction.is_rtl() {
            self.out
                .push_str(&format!(" class=\"{}\"", self.style.rtl_list_class));
        }
        self.out.push_str(&format!(" dir=\"{direction}\">\n"));
        self.nodes(children);
        self.out.push_str(&format!("</{tag}>\n"));
    }
}

/// Render markdown to HTML with per-block direction and isolated mixed runs.
///
/// With [`RenderStyle::wrap_document`] set, the blocks are wrapped in a
/// `<div>` whose `dir` follows the whole source, classed as mixed when the
/// source mixes both scripts.
pub fn render_markdown(markdown: &str, style: &RenderStyle) -> String {
    let tree = parse(markdown);
    let mut renderer = Renderer::new(style);
    if style.wrap_document {
        renderer.document(markdown, &tree);
    } else {
        renderer.nodes(&tree);
    }
    log::debug!(
        "rendered {} bytes of markdown into {} bytes of HTML",
        markdown.len(),
        renderer.out.len()
    );
    renderer.out
}
