use crate::document::{AssetHyperlink, Container, Document, EmbeddedAsset, Hyperlink, Mark, Node, Text};
use crate::links::{AssetTable, Links};
use crate::view::{TextStyle, ViewNode};

/// Knobs for turning documents into view nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// URI prefixes that mark a hyperlink as external.
    pub external_prefixes: Vec<String>,
    /// `sizes` hint attached to embedded images.
    pub image_sizes: String,
    /// Render `asset-hyperlink` nodes as links to the asset URL instead of
    /// dropping them.
    pub resolve_asset_hyperlinks: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            external_prefixes: vec!["http".to_string()],
            image_sizes: "50vw".to_string(),
            resolve_asset_hyperlinks: false,
        }
    }
}

/// Render a document with default options.
pub fn render(document: Option<&Document>, links: Option<&Links>) -> ViewNode {
    render_with_options(document, links, &RenderOptions::default())
}

/// Render a document into a tree of view nodes.
///
/// Missing assets, missing URIs and node kinds without a view render as an
/// empty fragment; the walk carries on with the siblings.
pub fn render_with_options(
    document: Option<&Document>,
    links: Option<&Links>,
    options: &RenderOptions,
) -> ViewNode {
    let Some(document) = document else {
        return ViewNode::empty();
    };

    let renderer = Renderer {
        blocks: AssetTable::blocks(links),
        hyperlinks: AssetTable::hyperlinks(links),
        options,
    };

    tracing::debug!(
        nodes = document.node_count(),
        block_assets = renderer.blocks.len(),
        hyperlink_assets = renderer.hyperlinks.len(),
        "rendering document"
    );

    ViewNode::Fragment {
        children: renderer.nodes(&document.content),
    }
}

struct Renderer<'a> {
    blocks: AssetTable<'a>,
    hyperlinks: AssetTable<'a>,
    options: &'a RenderOptions,
}

impl Renderer<'_> {
    fn nodes(&self, nodes: &[Node]) -> Vec<ViewNode> {
        nodes.iter().map(|node| self.node(node)).collect()
    }

    fn node(&self, node: &Node) -> ViewNode {
        match node {
            Node::Paragraph(c) => ViewNode::Paragraph {
                children: self.container(c),
            },
            Node::Heading1(c) => self.heading(1, c),
            Node::Heading2(c) => self.heading(2, c),
            Node::Heading3(c) => self.heading(3, c),
            Node::Heading4(c) => self.heading(4, c),
            Node::Heading5(c) => self.heading(5, c),
            Node::Heading6(c) => self.heading(6, c),
            Node::UnorderedList(c) => ViewNode::UnorderedList {
                children: self.container(c),
            },
            Node::OrderedList(c) => ViewNode::OrderedList {
                children: self.container(c),
            },
            Node::ListItem(c) => ViewNode::ListItem {
                children: self.container(c),
            },
            Node::Blockquote(c) => ViewNode::Quote {
                children: self.container(c),
            },
            Node::Hr => ViewNode::Rule,
            Node::Table(c) => ViewNode::Table {
                children: self.container(c),
            },
            Node::TableRow(c) => ViewNode::TableRow {
                children: self.container(c),
            },
            Node::TableCell(c) => ViewNode::TableCell {
                children: self.container(c),
            },
            Node::TableHeaderCell(c) => ViewNode::TableHeaderCell {
                children: self.container(c),
            },
            Node::EmbeddedAssetBlock(embed) => self.embedded_asset(embed),
            Node::Hyperlink(link) => self.hyperlink(link),
            Node::AssetHyperlink(link) => self.asset_hyperlink(link),
            Node::Text(text) => text_to_view(text),
            // Entries and resources are outside what this renderer resolves.
            Node::EmbeddedEntryBlock(_)
            | Node::EmbeddedResourceBlock(_)
            | Node::EntryHyperlink(_)
            | Node::ResourceHyperlink(_)
            | Node::EmbeddedEntryInline(_)
            | Node::EmbeddedResourceInline(_)
            | Node::Unknown => ViewNode::empty(),
        }
    }

    fn container(&self, container: &Container) -> Vec<ViewNode> {
        self.nodes(&container.content)
    }

    fn heading(&self, level: u8, container: &Container) -> ViewNode {
        ViewNode::Heading {
            level,
            children: self.container(container),
        }
    }

    fn embedded_asset(&self, embed: &EmbeddedAsset) -> ViewNode {
        let Some(asset) = self.blocks.get(embed.target_id()) else {
            return ViewNode::empty();
        };
        let Some(url) = asset.url() else {
            return ViewNode::empty();
        };

        ViewNode::Image {
            url: url.to_string(),
            alt: asset.title.clone().unwrap_or_default(),
            width: asset.width,
            height: asset.height,
            fill: true,
            sizes: self.options.image_sizes.clone(),
        }
    }

    fn hyperlink(&self, link: &Hyperlink) -> ViewNode {
        let Some(uri) = link.uri() else {
            return ViewNode::empty();
        };

        let href = uri.to_string();
        let children = self.nodes(&link.content);
        if self.is_external(uri) {
            ViewNode::ExternalLink { href, children }
        } else {
            ViewNode::InternalLink { href, children }
        }
    }

    fn asset_hyperlink(&self, link: &AssetHyperlink) -> ViewNode {
        if !self.options.resolve_asset_hyperlinks {
            return ViewNode::empty();
        }
        let Some(asset) = link.target_id().and_then(|id| self.hyperlinks.get(id)) else {
            return ViewNode::empty();
        };
        let Some(url) = asset.url() else {
            return ViewNode::empty();
        };

        ViewNode::ExternalLink {
            href: url.to_string(),
            children: self.nodes(&link.content),
        }
    }

    fn is_external(&self, uri: &str) -> bool {
        self.options
            .external_prefixes
            .iter()
            .any(|prefix| uri.starts_with(prefix.as_str()))
    }
}

fn mark_style(mark: Mark) -> Option<TextStyle> {
    match mark {
        Mark::Bold => Some(TextStyle::Bold),
        Mark::Italic => Some(TextStyle::Italic),
        Mark::Underline => Some(TextStyle::Underline),
        Mark::Code => Some(TextStyle::Code),
        Mark::Subscript => Some(TextStyle::Subscript),
        Mark::Superscript => Some(TextStyle::Superscript),
        Mark::Other => None,
    }
}

/// Wrap the text leaf in one layer per distinct mark, bold innermost.
fn text_to_view(text: &Text) -> ViewNode {
    let mut styles: Vec<TextStyle> = text.marks.iter().copied().filter_map(mark_style).collect();
    // Marks are on/off flags, so a repeated mark still wraps once.
    styles.sort_unstable();
    styles.dedup();

    styles
        .into_iter()
        .fold(ViewNode::text(text.value.as_str()), |inner, style| {
            ViewNode::styled(style, inner)
        })
}
