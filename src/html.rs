//! HTML output for figures.
//!
//! Rendering is a pure function of the figure and [`HtmlOptions`]; nothing here touches
//! the filesystem. See [`crate::browser`] for the effectful side.

use crate::config::{HtmlOptions, JavaScriptBundle};
use crate::figure::Figure;

/// Render `figure` as a full HTML document or an embeddable fragment.
pub fn render(figure: &Figure, options: &HtmlOptions) -> serde_json::Result<String> {
    let data = script_json(&serde_json::to_string(&figure.data)?);
    let layout = match &figure.layout {
        Some(layout) => script_json(&serde_json::to_string(layout)?),
        None => "{}".to_string(),
    };
    let div_id = script_json(&serde_json::to_string(&options.div_id)?);
    let config = if options.responsive {
        r#"{"responsive":true}"#
    } else {
        "{}"
    };

    let mut scripts = String::new();
    scripts.push_str(&script_tag(&options.mathjax));
    scripts.push_str(&script_tag(&options.plotly));

    let body = format!(
        "<div id=\"{id}\"></div>\n<script type=\"text/javascript\">\n  Plotly.newPlot({div_id}, {data}, {layout}, {config});\n</script>\n",
        id = escape_html(&options.div_id),
    );

    if !options.full_document {
        return Ok(format!("{scripts}{body}"));
    }

    let title = options.title.as_deref().unwrap_or("Plotly figure");
    Ok(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n{scripts}</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape_html(title),
    ))
}

fn script_tag(bundle: &JavaScriptBundle) -> String {
    match bundle {
        JavaScriptBundle::Online(url) => {
            format!("<script src=\"{}\"></script>\n", escape_html(url))
        }
        JavaScriptBundle::Local(path) => format!(
            "<script src=\"{}\"></script>\n",
            escape_html(&path.to_string_lossy())
        ),
        JavaScriptBundle::Inline(source) => format!(
            "<script type=\"text/javascript\">\n{}\n</script>\n",
            escape_script_close(source)
        ),
        JavaScriptBundle::Exclude => String::new(),
    }
}

/// Rewrites every `</script` (any case) to `<\/script`. HTML no longer sees an end tag
/// there, and JavaScript strings read the same.
fn escape_script_close(source: &str) -> String {
    const END: &[u8] = b"</script";
    let bytes = source.as_bytes();
    let mut out = String::with_capacity(source.len());
    let mut start = 0;
    let mut i = 0;
    while i + END.len() <= bytes.len() {
        if bytes[i..i + END.len()].eq_ignore_ascii_case(END) {
            out.push_str(&source[start..i + 1]);
            out.push('\\');
            start = i + 1;
            i += END.len();
        } else {
            i += 1;
        }
    }
    out.push_str(&source[start..]);
    out
}

/// JSON text never contains `<` outside string literals, so replacing it with a unicode
/// escape keeps `</script>` in a value from closing the script element.
fn script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PLOTLY_CDN_URL;
    use crate::schema::{Histogram, Layout, Title};

    fn sample() -> Figure {
        Figure::new()
            .with_trace(Histogram {
                name: Some("</script><b>".into()),
                x: Some(vec![1.0, 2.0]),
                ..Default::default()
            })
            .with_layout(Layout {
                title: Some(Title::new("Sample")),
                ..Default::default()
            })
    }

    #[test]
    fn document_references_bundles_and_embeds_json() {
        let html = render(&sample(), &HtmlOptions::default()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(&format!("<script src=\"{PLOTLY_CDN_URL}\"></script>")));
        assert!(html.contains("mathjax"));
        assert!(html.contains("<div id=\"plotly-figure\"></div>"));
        assert!(html.contains(r#"Plotly.newPlot("plotly-figure", [{"type":"histogram""#));
        assert!(html.contains(r#"{"title":{"text":"Sample"}}, {"responsive":true});"#));
    }

    #[test]
    fn string_values_cannot_close_the_script() {
        let html = render(&sample(), &HtmlOptions::default()).unwrap();
        assert!(!html.contains("</script><b>"));
        assert!(html.contains("\\u003c/script>\\u003cb>"));
    }

    #[test]
    fn fragment_without_scripts() {
        let html = render(&Figure::new(), &HtmlOptions::fragment()).unwrap();
        assert!(html.starts_with("<div id=\"plotly-figure\">"));
        assert!(!html.contains("<html>"));
        assert!(html.contains(r#"Plotly.newPlot("plotly-figure", [], {}, {"responsive":true});"#));
    }

    #[test]
    fn inline_bundle_is_embedded() {
        let options = HtmlOptions {
            plotly: JavaScriptBundle::Inline("var Plotly = {}; // </script>".into()),
            mathjax: JavaScriptBundle::Exclude,
            responsive: false,
            title: Some("A & B".into()),
            ..HtmlOptions::default()
        };
        let html = render(&Figure::new(), &options).unwrap();
        assert!(html.contains("var Plotly = {}; // <\\/script>"));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains(", [], {}, {});"));
    }

    #[test]
    fn inline_close_tag_is_escaped_in_any_case() {
        assert_eq!(
            escape_script_close("a='</SCRIPT><b>x'; b='</Script>'; c='</p>'"),
            "a='<\\/SCRIPT><b>x'; b='<\\/Script>'; c='</p>'"
        );
        let options = HtmlOptions {
            plotly: JavaScriptBundle::Inline("a='</SCRIPT><b>x'".into()),
            ..HtmlOptions::fragment()
        };
        let html = render(&Figure::new(), &options).unwrap();
        assert!(!html.to_ascii_lowercase().contains("</script><b>"));
    }
}
