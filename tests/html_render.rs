use typed_plotly::config::MATHJAX_CDN_URL;
use typed_plotly::schema::{Histogram, Surface};
use typed_plotly::{Figure, HtmlOptions, JavaScriptBundle};

fn figure() -> Figure {
    Figure::new()
        .with_trace(Histogram {
            x: Some(vec![1.0]),
            ..Default::default()
        })
        .with_trace(Surface {
            z: Some(vec![vec![0.0, 1.0]]),
            ..Default::default()
        })
}

#[test]
fn rendering_is_pure_and_deterministic() {
    let options = HtmlOptions::default();
    let a = figure().to_html(&options).unwrap();
    let b = figure().to_html(&options).unwrap();
    assert_eq!(a, b);
}

#[test]
fn mathjax_precedes_plotly() {
    let html = figure().to_html(&HtmlOptions::default()).unwrap();
    let mathjax = html.find(MATHJAX_CDN_URL).unwrap();
    let plotly = html.find("cdn.plot.ly").unwrap();
    assert!(mathjax < plotly);
}

#[test]
fn local_bundle_is_referenced_by_path() {
    let options = HtmlOptions {
        plotly: JavaScriptBundle::Local("assets/plotly.min.js".into()),
        mathjax: JavaScriptBundle::Exclude,
        ..HtmlOptions::default()
    };
    let html = figure().to_html(&options).unwrap();
    assert!(html.contains(r#"<script src="assets/plotly.min.js"></script>"#));
    assert!(html.contains(r#"[{"type":"histogram","x":[1.0]},{"type":"surface","z":[[0.0,1.0]]}]"#));
}
