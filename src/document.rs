use serde::Deserialize;
use serde_json::{Map, Value};

use crate::links::{Links, Sys};

/// Free-form metadata carried by every node.
pub type NodeData = Map<String, Value>;

/// Root of a rich text value.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    #[serde(rename = "nodeType")]
    pub node_type: DocumentType,
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub content: Vec<Node>,
}

/// The only tag a document root may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "document")]
    Document,
}

impl Document {
    pub fn new(content: Vec<Node>) -> Self {
        Self {
            node_type: DocumentType::Document,
            data: NodeData::new(),
            content,
        }
    }

    /// Concatenated value of every text node, in document order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.content {
            node.collect_text(&mut out);
        }
        out
    }

    /// Total number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.content.iter().map(Node::count).sum()
    }
}

/// A rich text field as returned by the content API: the document plus the
/// assets it links to.
#[derive(Debug, Clone, Deserialize)]
pub struct RichText {
    pub json: Document,
    #[serde(default)]
    pub links: Links,
}

/// One element of the rich text tree, tagged by `nodeType`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "nodeType", rename_all = "kebab-case")]
pub enum Node {
    Paragraph(Container),
    #[serde(rename = "heading-1")]
    Heading1(Container),
    #[serde(rename = "heading-2")]
    Heading2(Container),
    #[serde(rename = "heading-3")]
    Heading3(Container),
    #[serde(rename = "heading-4")]
    Heading4(Container),
    #[serde(rename = "heading-5")]
    Heading5(Container),
    #[serde(rename = "heading-6")]
    Heading6(Container),
    UnorderedList(Container),
    OrderedList(Container),
    ListItem(Container),
    Blockquote(Container),
    Hr,
    Table(Container),
    TableRow(Container),
    TableCell(Container),
    TableHeaderCell(Container),
    EmbeddedEntryBlock(Container),
    EmbeddedAssetBlock(EmbeddedAsset),
    EmbeddedResourceBlock(Container),
    Hyperlink(Hyperlink),
    EntryHyperlink(Container),
    AssetHyperlink(AssetHyperlink),
    ResourceHyperlink(Container),
    EmbeddedEntryInline(Container),
    EmbeddedResourceInline(Container),
    Text(Text),
    /// A node kind this crate does not know about yet.
    #[serde(other)]
    Unknown,
}

impl Node {
    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Paragraph(c)
            | Node::Heading1(c)
            | Node::Heading2(c)
            | Node::Heading3(c)
            | Node::Heading4(c)
            | Node::Heading5(c)
            | Node::Heading6(c)
            | Node::UnorderedList(c)
            | Node::OrderedList(c)
            | Node::ListItem(c)
            | Node::Blockquote(c)
            | Node::Table(c)
            | Node::TableRow(c)
            | Node::TableCell(c)
            | Node::TableHeaderCell(c)
            | Node::EmbeddedEntryBlock(c)
            | Node::EmbeddedResourceBlock(c)
            | Node::EntryHyperlink(c)
            | Node::ResourceHyperlink(c)
            | Node::EmbeddedEntryInline(c)
            | Node::EmbeddedResourceInline(c) => &c.content,
            Node::Hyperlink(link) => &link.content,
            Node::AssetHyperlink(link) => &link.content,
            Node::Hr | Node::EmbeddedAssetBlock(_) | Node::Text(_) | Node::Unknown => &[],
        }
    }

    fn collect_text(&self, out: &mut String) {
        if let Node::Text(text) = self {
            out.push_str(&text.value);
        }
        for child in self.children() {
            child.collect_text(out);
        }
    }

    fn count(&self) -> usize {
        1 + self.children().iter().map(Node::count).sum::<usize>()
    }
}

/// Block or inline node whose only structure is its children.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Container {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub content: Vec<Node>,
}

impl Container {
    pub fn new(content: Vec<Node>) -> Self {
        Self {
            data: NodeData::new(),
            content,
        }
    }
}

/// Pointer to an externally stored asset or entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reference {
    pub sys: Sys,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TargetData {
    pub target: Reference,
}

/// `embedded-asset-block`. The target is mandatory; a block without one is
/// rejected while parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddedAsset {
    pub data: TargetData,
}

impl EmbeddedAsset {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            data: TargetData {
                target: Reference {
                    sys: Sys { id: id.into() },
                },
            },
        }
    }

    pub fn target_id(&self) -> &str {
        &self.data.target.sys.id
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HyperlinkData {
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hyperlink {
    #[serde(default)]
    pub data: HyperlinkData,
    #[serde(default)]
    pub content: Vec<Node>,
}

impl Hyperlink {
    pub fn new(uri: Option<&str>, content: Vec<Node>) -> Self {
        Self {
            data: HyperlinkData {
                uri: uri.map(str::to_string),
            },
            content,
        }
    }

    /// The link target, `None` when absent or blank.
    pub fn uri(&self) -> Option<&str> {
        self.data.uri.as_deref().filter(|uri| !uri.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionalTargetData {
    #[serde(default)]
    pub target: Option<Reference>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetHyperlink {
    #[serde(default)]
    pub data: OptionalTargetData,
    #[serde(default)]
    pub content: Vec<Node>,
}

impl AssetHyperlink {
    pub fn target_id(&self) -> Option<&str> {
        self.data.target.as_ref().map(|t| t.sys.id.as_str())
    }
}

/// Text leaf with its marks.
#[derive(Debug, Clone, Deserialize)]
pub struct Text {
    pub value: String,
    #[serde(default)]
    pub marks: Vec<Mark>,
    #[serde(default)]
    pub data: NodeData,
}

impl Text {
    pub fn new(value: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self {
            value: value.into(),
            marks,
            data: NodeData::new(),
        }
    }
}

/// Presentational annotation on a text node, `{ "type": "bold" }` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
    Subscript,
    Superscript,
    #[serde(other)]
    Other,
}
