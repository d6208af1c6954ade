use serde::Serialize;

/// Presentational wrapper applied to text, in canonical nesting order:
/// earlier variants wrap closer to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    Bold,
    Italic,
    Underline,
    Code,
    Subscript,
    Superscript,
}

/// Framework-independent output of the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ViewNode {
    /// Children without a wrapper. An empty fragment renders nothing.
    Fragment { children: Vec<ViewNode> },
    Paragraph { children: Vec<ViewNode> },
    Heading { level: u8, children: Vec<ViewNode> },
    UnorderedList { children: Vec<ViewNode> },
    OrderedList { children: Vec<ViewNode> },
    ListItem { children: Vec<ViewNode> },
    Quote { children: Vec<ViewNode> },
    Rule,
    Table { children: Vec<ViewNode> },
    TableRow { children: Vec<ViewNode> },
    TableCell { children: Vec<ViewNode> },
    TableHeaderCell { children: Vec<ViewNode> },
    /// Image sized by its container (`fill`) with a responsive `sizes` hint.
    Image {
        url: String,
        alt: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
        fill: bool,
        sizes: String,
    },
    /// Navigates with a full page load.
    ExternalLink { href: String, children: Vec<ViewNode> },
    /// Navigates through the host's client-side router.
    InternalLink { href: String, children: Vec<ViewNode> },
    Styled { style: TextStyle, child: Box<ViewNode> },
    Text { value: String },
}

impl ViewNode {
    pub fn empty() -> Self {
        ViewNode::Fragment {
            children: Vec::new(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        ViewNode::Text {
            value: value.into(),
        }
    }

    pub fn styled(style: TextStyle, child: ViewNode) -> Self {
        ViewNode::Styled {
            style,
            child: Box::new(child),
        }
    }

    /// True for fragments that contain nothing visible.
    pub fn is_empty(&self) -> bool {
        match self {
            ViewNode::Fragment { children } => children.iter().all(ViewNode::is_empty),
            _ => false,
        }
    }

    pub fn children(&self) -> &[ViewNode] {
        match self {
            ViewNode::Fragment { children }
            | ViewNode::Paragraph { children }
            | ViewNode::Heading { children, .. }
            | ViewNode::UnorderedList { children }
            | ViewNode::OrderedList { children }
            | ViewNode::ListItem { children }
            | ViewNode::Quote { children }
            | ViewNode::Table { children }
            | ViewNode::TableRow { children }
            | ViewNode::TableCell { children }
            | ViewNode::TableHeaderCell { children }
            | ViewNode::ExternalLink { children, .. }
            | ViewNode::InternalLink { children, .. } => children,
            ViewNode::Styled { child, .. } => std::slice::from_ref(&**child),
            ViewNode::Rule | ViewNode::Image { .. } | ViewNode::Text { .. } => &[],
        }
    }

    /// Visible text below this node.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let ViewNode::Text { value } = self {
            out.push_str(value);
        }
        for child in self.children() {
            child.collect_text(out);
        }
    }
}
