use std::fs;

use anyhow::{Context, Result};
use jtb_parser::schema::{validate_parse_result, validate_parse_result_value};
use jtb_parser::{HtmlParser, Module, ParseOptions, ParseResult, parse_html};
use serde_json::Value;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Landing</title><style>.hero { color: red; }</style></head>
<body>
    <header class="hero" style="background-color: #101820; padding: 80px 20px">
        <h1 style="font-size: 3rem">Build pages faster</h1>
        <p>Convert markup into editable modules.</p>
        <a class="btn btn-primary" href="/signup">Get started</a>
    </header>
    <section class="features">
        <div class="row" style="display:flex; gap: 24px">
            <div class="col-4"><h3>Fast</h3><p>One pass.</p></div>
            <div class="col-4"><h3>Typed</h3><p>Every module has a schema.</p></div>
            <div class="col-4"><h3>Responsive</h3><p>Tablet and phone variants.</p></div>
        </div>
    </section>
    <section>
        <div class="testimonial">
            <blockquote>It just works.</blockquote>
            <div class="author">Ada</div>
            <div class="position">Engineer</div>
        </div>
        <form class="contact-form" action="/send">
            <input type="text" name="name" placeholder="Name" required>
            <input type="email" name="email" placeholder="Email">
            <textarea name="message"></textarea>
            <button type="submit">Send</button>
        </form>
    </section>
    <script>console.log("skipped")</script>
</body>
</html>"#;

const ANNOTATED_PAGE: &str = r#"
<div data-jtb-module="section" data-jtb-attr-fullwidth="true">
    <div data-jtb-module="row">
        <div data-jtb-module="column">
            <h2 data-jtb-module="heading">Pricing</h2>
            <div data-jtb-module="tabs">
                <div><h4>Monthly</h4><p>$9</p></div>
                <div><h4>Yearly</h4><p>$90</p></div>
            </div>
        </div>
    </div>
</div>"#;

#[test]
fn generic_page_validates_and_round_trips_through_disk() -> Result<()> {
    let result = HtmlParser::new().parse(LANDING_PAGE);
    assert!(result.is_success(), "landing page should parse: {:?}", result.error());
    validate_parse_result(&result)?;

    let temp = tempfile::tempdir()?;
    let path = temp.path().join("landing.json");
    fs::write(&path, result.to_json_pretty()?)?;
    let reloaded: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    validate_parse_result_value(&reloaded)?;
    assert_eq!(reloaded, result.to_value());

    let doc = result.document().context("document")?;
    let counted: usize = doc.content.iter().map(Module::count).sum();
    assert_eq!(doc.stats.modules_count, counted);
    assert_eq!(doc.css, "");
    Ok(())
}

#[test]
fn annotated_page_validates() -> Result<()> {
    let result = parse_html(ANNOTATED_PAGE, &ParseOptions::default());
    validate_parse_result(&result)?;
    let doc = result.document().context("document")?;
    assert_eq!(doc.content.len(), 1);
    assert_eq!(doc.content[0].attr("fullwidth"), Some(&Value::Bool(true)));
    Ok(())
}

#[test]
fn failure_result_validates() -> Result<()> {
    let result = parse_html("   ", &ParseOptions::default());
    assert!(matches!(result, ParseResult::Failure { .. }));
    validate_parse_result(&result)?;
    Ok(())
}

#[test]
fn fresh_parsers_agree_apart_from_id_tokens() -> Result<()> {
    let first = normalized_ids(parse_html(LANDING_PAGE, &ParseOptions::default()).to_value());
    let second = normalized_ids(parse_html(LANDING_PAGE, &ParseOptions::default()).to_value());
    assert_eq!(first, second);
    Ok(())
}

/// Replaces `type_token_n` ids with `type_n` so runs can be compared.
fn normalized_ids(mut value: Value) -> Value {
    fn walk(value: &mut Value) {
        match value {
            Value::Object(map) => {
                if let Some(Value::String(id)) = map.get_mut("id") {
                    if let Some((head, counter)) = id.rsplit_once('_') {
                        if let Some((kind, _token)) = head.rsplit_once('_') {
                            *id = format!("{kind}_{counter}");
                        }
                    }
                }
                map.values_mut().for_each(walk);
            }
            Value::Array(items) => items.iter_mut().for_each(walk),
            _ => {}
        }
    }
    walk(&mut value);
    value
}
