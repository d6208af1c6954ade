use serde_json::Value;

use crate::document::{Document, RichText};
use crate::error::Result;
use crate::links::Links;

/// Parse a bare rich text document.
pub fn parse_document(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

/// Parse the linked-assets side-table of a rich text field.
pub fn parse_links(json: &str) -> Result<Links> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a rich text field, `{ "json": <document>, "links": <links> }`.
pub fn parse_rich_text(json: &str) -> Result<RichText> {
    Ok(serde_json::from_str(json)?)
}

/// Parse either a rich text field or a bare document. A bare document comes
/// back with empty links.
pub fn parse_input(json: &str) -> Result<RichText> {
    let value: Value = serde_json::from_str(json)?;

    if value.get("nodeType").is_some() {
        return Ok(RichText {
            json: serde_json::from_value(value)?,
            links: Links::default(),
        });
    }

    Ok(serde_json::from_value(value)?)
}
