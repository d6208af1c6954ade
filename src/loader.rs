//! Image transform URLs for the asset CDN.
//!
//! Assets are served from an image API that resizes and re-encodes on the
//! fly based on query parameters (`fm`, `w`, `q`, `h`, `fit`).

use url::Url;

use crate::config::ImageConfig;
use crate::error::Result;

/// URL for `src` re-encoded and scaled to `width` pixels.
///
/// Without an explicit `quality`, narrow requests get the mobile quality and
/// wide ones the desktop quality.
pub fn image_url(src: &str, width: u32, quality: Option<u8>, config: &ImageConfig) -> Result<String> {
    Ok(transform(src, width, quality, config)?.into())
}

/// Like [`image_url`], cropped to a `width` x `width` square.
pub fn square_image_url(
    src: &str,
    width: u32,
    quality: Option<u8>,
    config: &ImageConfig,
) -> Result<String> {
    let mut url = transform(src, width, quality, config)?;
    set_param(&mut url, "h", &width.to_string());
    set_param(&mut url, "fit", "fill");
    Ok(url.into())
}

fn transform(src: &str, width: u32, quality: Option<u8>, config: &ImageConfig) -> Result<Url> {
    // Asset URLs are sometimes protocol-relative.
    let mut url = match src.strip_prefix("//") {
        Some(rest) => Url::parse(&format!("https://{rest}"))?,
        None => Url::parse(src)?,
    };

    let quality = quality.unwrap_or(if width < config.mobile_breakpoint {
        config.quality_mobile
    } else {
        config.quality_desktop
    });

    set_param(&mut url, "fm", &config.format);
    set_param(&mut url, "w", &width.to_string());
    set_param(&mut url, "q", &quality.to_string());
    Ok(url)
}

/// Set `key` to `value`, keeping the position of its first occurrence and
/// dropping any later ones. A new key goes at the end.
fn set_param(url: &mut Url, key: &str, value: &str) {
    let mut found = false;
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (k, v) in url.query_pairs() {
        if k != key {
            pairs.push((k.into_owned(), v.into_owned()));
        } else if !found {
            found = true;
            pairs.push((key.to_string(), value.to_string()));
        }
    }
    if !found {
        pairs.push((key.to_string(), value.to_string()));
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);
}
