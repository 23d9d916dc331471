//! Source document model
//!
//! Markup is tokenized with html5ever and assembled with a plain stack of open
//! elements. No HTML5 tree-construction rules are applied: no implied `<html>`,
//! `<head>` or `<body>`, no foster parenting, no reordering. The resulting
//! document contains exactly the elements written in the source.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use html5ever::QualName;

/// Index of a node inside a [`SourceDocument`]
pub type NodeId = usize;

/// Elements that never have content and close as soon as they open.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta",
    "param", "source", "track", "wbr",
];

/// Elements whose content is raw text up to the matching end tag.
fn raw_text_kind(tag: &str) -> Option<RawKind> {
    match tag {
        "script" => Some(RawKind::ScriptData),
        "style" => Some(RawKind::Rawtext),
        _ => None,
    }
}

pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceData {
    Document,
    Element {
        name: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceNode {
    pub data: SourceData,
    pub children: Vec<NodeId>,
}

/// Parsed markup held in an arena, rooted at [`SourceDocument::ROOT`].
#[derive(Debug, Clone)]
pub struct SourceDocument {
    nodes: Vec<SourceNode>,
}

impl SourceDocument {
    pub const ROOT: NodeId = 0;

    fn new() -> Self {
        Self {
            nodes: vec![SourceNode {
                data: SourceData::Document,
                children: Vec::new(),
            }],
        }
    }

    /// Tokenize `html` and assemble the document.
    pub fn parse(html: &str) -> Self {
        let mut input = BufferQueue::default();
        input.push_back(StrTendril::from_slice(html));

        let mut tokenizer = Tokenizer::new(StackSink::default(), TokenizerOpts::default());
        let _ = tokenizer.feed(&mut input);
        tokenizer.end();
        tokenizer.sink.document
    }

    pub fn node(&self, id: NodeId) -> &SourceNode {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[Self::ROOT].children.is_empty()
    }

    /// Element name of `id`, if it is an element.
    pub fn element_name(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id].data {
            SourceData::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    /// First element named `tag` in document order (case-insensitive).
    pub fn find_element(&self, tag: &str) -> Option<NodeId> {
        self.find_element_from(Self::ROOT, tag)
    }

    /// First element named `tag` at or below `start`, in document order.
    pub fn find_element_from(&self, start: NodeId, tag: &str) -> Option<NodeId> {
        let mut pending = vec![start];
        while let Some(id) = pending.pop() {
            if self
                .element_name(id)
                .is_some_and(|name| name.eq_ignore_ascii_case(tag))
            {
                return Some(id);
            }
            pending.extend(self.nodes[id].children.iter().rev());
        }
        None
    }

    fn append(&mut self, parent: NodeId, data: SourceData) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(SourceNode {
            data,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Append text to `parent`, extending a trailing text child.
    fn append_text(&mut self, parent: NodeId, text: &str) {
        if let Some(&last) = self.nodes[parent].children.last() {
            if let SourceData::Text(existing) = &mut self.nodes[last].data {
                existing.push_str(text);
                return;
            }
        }
        self.append(parent, SourceData::Text(text.to_string()));
    }
}

/// Token sink that keeps the stack of open elements
#[derive(Debug)]
struct StackSink {
    document: SourceDocument,
    open_elements: Vec<NodeId>,
}

impl Default for StackSink {
    fn default() -> Self {
        Self {
            document: SourceDocument::new(),
            open_elements: Vec::new(),
        }
    }
}

impl StackSink {
    fn current_node(&self) -> NodeId {
        self.open_elements
            .last()
            .copied()
            .unwrap_or(SourceDocument::ROOT)
    }

    fn start_tag(&mut self, tag: Tag) -> TokenSinkResult<()> {
        let name = tag.name.to_string().to_ascii_lowercase();
        let attrs = tag
            .attrs
            .iter()
            .map(|attr| (attribute_name(&attr.name), attr.value.to_string()))
            .collect();

        let parent = self.current_node();
        let id = self.document.append(
            parent,
            SourceData::Element {
                name: name.clone(),
                attrs,
            },
        );

        if tag.self_closing || is_void_element(&name) {
            return TokenSinkResult::Continue;
        }

        self.open_elements.push(id);
        match raw_text_kind(&name) {
            Some(kind) => TokenSinkResult::RawData(kind),
            None => TokenSinkResult::Continue,
        }
    }

    /// Close the innermost open element named `name` and everything above it.
    /// End tags without a matching open element are ignored.
    fn end_tag(&mut self, name: &str) {
        let position = self
            .open_elements
            .iter()
            .rposition(|&id| self.document.element_name(id) == Some(name));
        if let Some(position) = position {
            self.open_elements.truncate(position);
        }
    }
}

impl TokenSink for StackSink {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => return self.start_tag(tag),
                TagKind::EndTag => self.end_tag(&tag.name.to_string().to_ascii_lowercase()),
            },
            Token::CharacterTokens(text) => {
                let parent = self.current_node();
                self.document.append_text(parent, &text);
            }
            Token::CommentToken(text) => {
                let parent = self.current_node();
                self.document
                    .append(parent, SourceData::Comment(text.to_string()));
            }
            Token::NullCharacterToken
            | Token::DoctypeToken(_)
            | Token::EOFToken
            | Token::ParseError(_) => {}
        }
        TokenSinkResult::Continue
    }
}

fn attribute_name(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{}:{}", prefix, name.local),
        None => name.local.to_string(),
    }
}
