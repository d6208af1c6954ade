use std::collections::HashMap;

use serde::Deserialize;

/// System metadata; only the identifier matters here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Sys {
    pub id: String,
}

/// Media asset referenced from a document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub sys: Sys,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl Asset {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            sys: Sys { id: id.into() },
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.sys.id
    }

    /// The asset URL, `None` when absent or blank.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Assets linked from a document, partitioned by how they are referenced.
/// Entries may be `null` in API responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetLinks {
    #[serde(default)]
    pub block: Vec<Option<Asset>>,
    #[serde(default)]
    pub hyperlink: Vec<Option<Asset>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub assets: AssetLinks,
}

impl Links {
    pub fn with_block_assets(assets: impl IntoIterator<Item = Asset>) -> Self {
        Self {
            assets: AssetLinks {
                block: assets.into_iter().map(Some).collect(),
                hyperlink: Vec::new(),
            },
        }
    }
}

/// Id to asset lookup, built once per render and never mutated afterwards.
#[derive(Debug, Default)]
pub struct AssetTable<'a> {
    by_id: HashMap<&'a str, &'a Asset>,
}

impl<'a> AssetTable<'a> {
    /// Later assets replace earlier ones with the same id.
    pub fn from_assets<I>(assets: I) -> Self
    where
        I: IntoIterator<Item = &'a Option<Asset>>,
    {
        let by_id = assets
            .into_iter()
            .flatten()
            .fold(HashMap::new(), |mut map, asset| {
                map.insert(asset.id(), asset);
                map
            });
        Self { by_id }
    }

    /// Table over block-embedded assets.
    pub fn blocks(links: Option<&'a Links>) -> Self {
        match links {
            Some(links) => Self::from_assets(&links.assets.block),
            None => Self::default(),
        }
    }

    /// Table over hyperlinked assets.
    pub fn hyperlinks(links: Option<&'a Links>) -> Self {
        match links {
            Some(links) => Self::from_assets(&links.assets.hyperlink),
            None => Self::default(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&'a Asset> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_api_shape_and_skips_nulls() {
        let links: Links = serde_json::from_value(json!({
            "assets": {
                "block": [
                    null,
                    {
                        "sys": { "id": "A1" },
                        "title": "cat",
                        "url": "https://x/y.png",
                        "contentType": "image/png",
                        "fileName": "y.png",
                        "size": 1024,
                        "width": 640,
                        "height": 480
                    }
                ]
            },
            "entries": { "block": [] }
        }))
        .unwrap();

        assert!(links.assets.hyperlink.is_empty());
        let table = AssetTable::blocks(Some(&links));
        assert_eq!(table.len(), 1);
        let asset = table.get("A1").unwrap();
        assert_eq!(asset.url(), Some("https://x/y.png"));
        assert_eq!(asset.content_type.as_deref(), Some("image/png"));
        assert_eq!(asset.width, Some(640));
    }

    #[test]
    fn last_duplicate_wins() {
        let links = Links::with_block_assets([
            Asset::new("A").with_title("first"),
            Asset::new("A").with_title("second"),
        ]);
        let table = AssetTable::blocks(Some(&links));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("A").unwrap().title.as_deref(), Some("second"));
    }

    #[test]
    fn missing_links_give_empty_tables() {
        assert!(AssetTable::blocks(None).is_empty());
        assert!(AssetTable::hyperlinks(None).get("A").is_none());
    }

    #[test]
    fn blank_url_is_absent() {
        assert_eq!(Asset::new("A").with_url("").url(), None);
    }
}
