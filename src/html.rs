use crate::config::Config;
use crate::loader;
use crate::view::{TextStyle, ViewNode};

/// Paint a view tree as HTML markup.
pub fn to_html(view: &ViewNode, config: &Config) -> String {
    let mut out = String::new();
    emit(view, config, &mut out);
    out
}

fn emit(node: &ViewNode, config: &Config, out: &mut String) {
    match node {
        ViewNode::Fragment { children } => emit_all(children, config, out),
        ViewNode::Paragraph { children } => emit_block("p", children, config, out),
        ViewNode::Heading { level, children } => {
            let tag = format!("h{}", (*level).clamp(1, 6));
            emit_block(&tag, children, config, out);
        }
        ViewNode::UnorderedList { children } => emit_block("ul", children, config, out),
        ViewNode::OrderedList { children } => emit_block("ol", children, config, out),
        ViewNode::ListItem { children } => emit_block("li", children, config, out),
        ViewNode::Quote { children } => emit_block("blockquote", children, config, out),
        ViewNode::Rule => out.push_str("<hr>\n"),
        ViewNode::Table { children } => {
            out.push_str("<table><tbody>\n");
            emit_all(children, config, out);
            out.push_str("</tbody></table>\n");
        }
        ViewNode::TableRow { children } => emit_block("tr", children, config, out),
        ViewNode::TableCell { children } => emit_inline("td", children, config, out),
        ViewNode::TableHeaderCell { children } => emit_inline("th", children, config, out),
        ViewNode::Image {
            url,
            alt,
            width,
            height,
            fill,
            sizes,
        } => {
            let image = ImageAttrs {
                url,
                alt,
                width: *width,
                height: *height,
                fill: *fill,
                sizes,
            };
            emit_image(&image, config, out);
        }
        ViewNode::ExternalLink { href, children } => {
            emit_link(href, false, children, config, out);
        }
        ViewNode::InternalLink { href, children } => {
            emit_link(href, true, children, config, out);
        }
        ViewNode::Styled { style, child } => {
            let tag = style_tag(*style);
            out.push('<');
            out.push_str(tag);
            out.push('>');
            emit(child, config, out);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        ViewNode::Text { value } => escape_text(value, out),
    }
}

fn emit_all(children: &[ViewNode], config: &Config, out: &mut String) {
    for child in children {
        emit(child, config, out);
    }
}

fn emit_inline(tag: &str, children: &[ViewNode], config: &Config, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    emit_all(children, config, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Like [`emit_inline`], followed by a newline.
fn emit_block(tag: &str, children: &[ViewNode], config: &Config, out: &mut String) {
    emit_inline(tag, children, config, out);
    out.push('\n');
}

fn emit_link(href: &str, internal: bool, children: &[ViewNode], config: &Config, out: &mut String) {
    out.push_str("<a href=\"");
    escape_attr(href, out);
    out.push('"');
    if !config.links.class.is_empty() {
        out.push_str(" class=\"");
        escape_attr(&config.links.class, out);
        out.push('"');
    }
    if internal {
        out.push_str(" data-route=\"client\"");
    }
    out.push('>');
    emit_all(children, config, out);
    out.push_str("</a>");
}

struct ImageAttrs<'a> {
    url: &'a str,
    alt: &'a str,
    width: Option<u32>,
    height: Option<u32>,
    fill: bool,
    sizes: &'a str,
}

fn emit_image(image: &ImageAttrs<'_>, config: &Config, out: &mut String) {
    out.push_str("<div class=\"");
    escape_attr(&config.image.wrapper_class, out);
    out.push_str("\"><img src=\"");
    escape_attr(image.url, out);
    out.push_str("\" alt=\"");
    escape_attr(image.alt, out);
    out.push('"');

    if let Some(srcset) = srcset(image.url, config) {
        out.push_str(" srcset=\"");
        escape_attr(&srcset, out);
        out.push('"');
    }

    out.push_str(" sizes=\"");
    escape_attr(image.sizes, out);
    out.push('"');

    if image.fill {
        out.push_str(" style=\"position:absolute;inset:0;width:100%;height:100%;object-fit:cover\"");
    } else {
        if let Some(width) = image.width {
            out.push_str(&format!(" width=\"{width}\""));
        }
        if let Some(height) = image.height {
            out.push_str(&format!(" height=\"{height}\""));
        }
    }

    out.push_str(" loading=\"lazy\"></div>\n");
}

fn srcset(url: &str, config: &Config) -> Option<String> {
    if config.image.widths.is_empty() {
        return None;
    }

    let mut entries = Vec::with_capacity(config.image.widths.len());
    for &width in &config.image.widths {
        match loader::image_url(url, width, None, &config.image) {
            Ok(src) => entries.push(format!("{src} {width}w")),
            Err(e) => {
                tracing::debug!(url, error = %e, "skipping srcset");
                return None;
            }
        }
    }
    Some(entries.join(", "))
}

fn style_tag(style: TextStyle) -> &'static str {
    match style {
        TextStyle::Bold => "b",
        TextStyle::Italic => "i",
        TextStyle::Underline => "u",
        TextStyle::Code => "code",
        TextStyle::Subscript => "sub",
        TextStyle::Superscript => "sup",
    }
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
