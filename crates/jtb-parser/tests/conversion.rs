use anyhow::{Context, Result};
use jtb_parser::{
    HtmlParser, Mode, Module, ModuleType, ParseOptions, ParseResult, ParsedDocument, parse_html,
    recognize,
};
use scraper::{Html, Selector};
use serde_json::json;

fn parse(html: &str) -> Result<ParsedDocument> {
    match HtmlParser::new().parse(html) {
        ParseResult::Success(doc) => Ok(doc),
        ParseResult::Failure { error } => anyhow::bail!("parse failed: {error}"),
    }
}

fn first_row(doc: &ParsedDocument) -> Result<&Module> {
    doc.content
        .first()
        .and_then(|section| section.children.first())
        .context("document should hold a section with a row")
}

fn total(doc: &ParsedDocument) -> usize {
    doc.content.iter().map(Module::count).sum()
}

#[test]
fn flex_row_with_two_half_columns() -> Result<()> {
    let doc = parse(
        r#"<div style="display:flex"><div style="width:50%">A</div><div style="width:50%">B</div></div>"#,
    )?;
    assert_eq!(doc.mode, Mode::Generic);
    assert_eq!(doc.content.len(), 1);
    let section = &doc.content[0];
    assert_eq!(section.kind, ModuleType::Section);
    assert_eq!(section.children.len(), 1);

    let row = &section.children[0];
    assert_eq!(row.kind, ModuleType::Row);
    assert_eq!(row.attr_str("column_structure"), Some("1_2,1_2"));
    assert_eq!(row.children.len(), 2);

    let texts: Vec<&str> = row
        .children
        .iter()
        .map(|column| {
            assert_eq!(column.kind, ModuleType::Column);
            assert_eq!(column.children.len(), 1);
            assert_eq!(column.children[0].kind, ModuleType::Text);
            column.children[0].attr_str("content").unwrap_or_default()
        })
        .collect();
    assert_eq!(texts, vec!["A", "B"]);
    assert_eq!(doc.stats.modules_count, 6);
    assert_eq!(total(&doc), 6);
    Ok(())
}

#[test]
fn annotated_accordion_builds_items_from_structure() -> Result<()> {
    let doc = parse(
        r#"<div data-jtb-module="accordion">
            <div><h3>What is it?</h3><div>A <b>converter</b>.</div></div>
            <div class="active"><h3>Is it fast?</h3><div>Yes.</div></div>
        </div>"#,
    )?;
    assert_eq!(doc.mode, Mode::Annotated);
    assert_eq!(doc.content.len(), 1);
    let accordion = &doc.content[0];
    assert_eq!(accordion.kind, ModuleType::Accordion);
    assert_eq!(accordion.children.len(), 2);

    let first = &accordion.children[0];
    assert_eq!(first.kind, ModuleType::AccordionItem);
    assert_eq!(first.attr_str("title"), Some("What is it?"));
    assert_eq!(first.attr_str("content"), Some("A <b>converter</b>."));
    assert_eq!(first.attr("open"), Some(&json!(false)));

    let second = &accordion.children[1];
    assert_eq!(second.attr_str("title"), Some("Is it fast?"));
    assert_eq!(second.attr("open"), Some(&json!(true)));
    assert_eq!(doc.stats.modules_count, 3);
    Ok(())
}

#[test]
fn empty_input_is_reported_not_thrown() -> Result<()> {
    let result = parse_html("", &ParseOptions::default());
    assert!(!result.is_success());
    assert_eq!(result.error(), Some("No root element found"));
    assert_eq!(result.to_value(), json!({ "error": "No root element found" }));
    Ok(())
}

#[test]
fn percentage_widths_become_fractions() -> Result<()> {
    let doc = parse(
        r#"<div class="row">
            <div style="width:33.33%">One</div>
            <div style="width:33.33%">Two</div>
            <div style="width:33.33%">Three</div>
        </div>"#,
    )?;
    let row = first_row(&doc)?;
    assert_eq!(row.attr_str("column_structure"), Some("1_3,1_3,1_3"));
    assert_eq!(row.children.len(), 3);
    Ok(())
}

#[test]
fn undetectable_widths_split_equally() -> Result<()> {
    let doc = parse(
        r#"<div class="row">
            <div class="col">1</div><div class="col">2</div>
            <div class="col">3</div><div class="col">4</div>
        </div>"#,
    )?;
    let row = first_row(&doc)?;
    assert_eq!(row.attr_str("column_structure"), Some("1_4,1_4,1_4,1_4"));
    assert_eq!(row.children.len(), 4);
    Ok(())
}

#[test]
fn slider_class_without_slides_is_not_recognized() -> Result<()> {
    let html = Html::parse_fragment(r#"<div class="slider"><p>Just text</p></div>"#);
    let selector = Selector::parse("div.slider").map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let element = html.select(&selector).next().context("slider element")?;
    let found = recognize(element);
    assert!(
        found.as_ref().is_none_or(|m| m.kind != ModuleType::Slider),
        "a slider needs at least two slides"
    );
    Ok(())
}

#[test]
fn equal_scores_keep_the_earlier_pattern() -> Result<()> {
    let html = Html::parse_fragment(r#"<div class="video map"></div>"#);
    let selector = Selector::parse("div").map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let element = html.select(&selector).next().context("element")?;
    let found = recognize(element).context("one of the tied patterns should match")?;
    assert_eq!(found.kind, ModuleType::Map);
    Ok(())
}

#[test]
fn modest_component_scores_keep_extracted_data() -> Result<()> {
    let doc = parse(
        r#"<div class="testimonial"><blockquote>Great</blockquote><span class="author">Ann</span></div>"#,
    )?;
    let testimonial = &first_row(&doc)?.children[0].children[0];
    assert_eq!(testimonial.kind, ModuleType::Testimonial);
    assert_eq!(testimonial.attr_str("content"), Some("Great"));
    assert_eq!(testimonial.attr_str("author"), Some("Ann"));

    let doc = parse(r#"<div class="countdown" data-date="2030-01-01">soon</div>"#)?;
    let countdown = &first_row(&doc)?.children[0].children[0];
    assert_eq!(countdown.kind, ModuleType::Countdown);
    assert_eq!(countdown.attr_str("end_date"), Some("2030-01-01"));
    assert_eq!(countdown.attr("show_days"), Some(&json!(true)));
    Ok(())
}

#[test]
fn hover_and_responsive_styles_reach_generic_text() -> Result<()> {
    let doc = parse(
        r#"<p style="color: #333333" data-jtb-hover-style="color: #ff0000" data-jtb-phone-style="font-size: 12px">Hover me</p>"#,
    )?;
    let text = &first_row(&doc)?.children[0].children[0];
    assert_eq!(text.kind, ModuleType::Text);
    assert_eq!(text.attr_str("text_color"), Some("#333333"));
    assert_eq!(text.attr_str("text_color__hover"), Some("#ff0000"));
    assert_eq!(text.attr("font_size__phone"), Some(&json!(12)));
    assert!(text.attrs.keys().all(|key| !key.starts_with('_')));
    Ok(())
}

#[test]
fn reparsing_gives_the_same_tree() -> Result<()> {
    let html = r#"<header class="hero"><h1>Welcome</h1><a class="btn" href="/start">Start</a></header>
        <section><div class="row"><div class="col-8"><p>Main</p></div><div class="col-4"><img src="/a.png" alt="A"></div></div></section>"#;
    let mut parser = HtmlParser::new();
    let first = parser.parse(html);
    let second = parser.parse(html);
    assert_eq!(shape(&first)?, shape(&second)?);
    Ok(())
}

fn shape(result: &ParseResult) -> Result<Vec<String>> {
    fn walk(module: &Module, depth: usize, out: &mut Vec<String>) {
        let mut keys: Vec<&String> = module.attrs.keys().collect();
        keys.sort();
        out.push(format!("{depth}:{}:{keys:?}", module.kind));
        for child in &module.children {
            walk(child, depth + 1, out);
        }
    }
    let doc = result.document().context("parse should succeed")?;
    let mut out = Vec::new();
    for module in &doc.content {
        walk(module, 0, &mut out);
    }
    Ok(out)
}
