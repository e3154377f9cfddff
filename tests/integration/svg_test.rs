//! SVG output structure and escaping.

use ansi2svg::{render_text, ColorDepth, Document, RenderConfig, SvgRenderer};

use crate::helpers::load_fixture;

#[test]
fn empty_input_is_margin_sized() {
    let svg = render_text("", &RenderConfig::default());
    assert!(svg.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"20\" height=\"20\" version=\"1.1\">"
    ));
    assert!(svg.contains("<rect width=\"100%\" height=\"100%\" fill=\"#1E1E1E\"/>"));
    assert!(!svg.contains("<text"));
}

#[test]
fn one_text_element_per_line() {
    let svg = render_text(&load_fixture("build.ans"), &RenderConfig::default());
    assert_eq!(svg.matches("<text ").count(), 5);
    assert_eq!(svg.matches("</text>").count(), 5);
}

#[test]
fn special_characters_never_appear_raw_in_text() {
    let svg = render_text("a<b>&\"c'd", &RenderConfig::default());
    let start = svg.find("<tspan").unwrap();
    let content_start = start + svg[start..].find('>').unwrap() + 1;
    let content_end = content_start + svg[content_start..].find("</tspan>").unwrap();
    let content = &svg[content_start..content_end];

    assert_eq!(content, "a&lt;b&gt;&amp;&quot;c&apos;d");
    for raw in ['<', '>', '"', '\''] {
        assert!(!content.contains(raw));
    }
}

#[test]
fn span_attributes_reflect_style() {
    let svg = render_text("\x1b[1;3;38;2;0;255;0mgo", &RenderConfig::default());
    assert!(svg.contains("<tspan fill=\"#00FF00\" font-weight=\"bold\" font-style=\"italic\">go</tspan>"));
}

#[test]
fn spans_have_no_position_attributes() {
    let svg = render_text("\x1b[31mred\x1b[0m plain", &RenderConfig::default());
    for tspan in svg.split("<tspan").skip(1) {
        let tag = &tspan[..tspan.find('>').unwrap()];
        assert!(!tag.contains(" x="));
        assert!(!tag.contains(" y="));
    }
}

#[test]
fn canvas_grows_with_content() {
    let doc = Document::from_text("0123456789\nab", ColorDepth::TrueColor);
    // 10 * 9.6 = 96, 2 * 20
    assert_eq!(SvgRenderer::default().canvas_size(&doc), (116, 60));
}
