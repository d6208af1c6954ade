mod config;
mod document;
mod error;
mod html;
mod links;
mod loader;
mod parser;
mod render;
mod view;

pub use config::{Config, ImageConfig, LinksConfig, RenderConfig};
pub use document::{
    AssetHyperlink, Container, Document, DocumentType, EmbeddedAsset, Hyperlink, HyperlinkData,
    Mark, Node, NodeData, OptionalTargetData, Reference, RichText, TargetData, Text,
};
pub use error::{Error, Result};
pub use html::to_html;
pub use links::{Asset, AssetLinks, AssetTable, Links, Sys};
pub use loader::{image_url, square_image_url};
pub use parser::{parse_document, parse_input, parse_links, parse_rich_text};
pub use render::{RenderOptions, render, render_with_options};
pub use view::{TextStyle, ViewNode};

/// Render a parsed rich text field with the given config.
pub fn render_rich_text(rich_text: &RichText, config: &Config) -> ViewNode {
    render_with_options(
        Some(&rich_text.json),
        Some(&rich_text.links),
        &config.render_options(),
    )
}

/// Convert rich text JSON (a field or a bare document) to HTML.
pub fn rich_text_to_html(json: &str, config: &Config) -> Result<String> {
    let rich_text = parse_input(json)?;
    let view = render_rich_text(&rich_text, config);
    Ok(to_html(&view, config))
}

/// Convert rich text JSON to the view tree, serialized as pretty JSON.
pub fn rich_text_to_tree(json: &str, config: &Config) -> Result<String> {
    let rich_text = parse_input(json)?;
    let view = render_rich_text(&rich_text, config);
    Ok(serde_json::to_string_pretty(&view)?)
}
