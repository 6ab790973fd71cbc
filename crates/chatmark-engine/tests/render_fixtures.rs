use chatmark_engine::{
    Block, NavigationContext, Payload, PayloadKind, Rendered, outline, render,
};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/messages/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

#[test]
fn fixture_quote_reply() {
    let nav = NavigationContext::help_route("/help", Some("quote-42".into()));
    let doc = render(&fixture("quote_reply"), Some(&nav));

    insta::assert_snapshot!(outline(&doc), @r#"
    Heading(2)
      Text "Kitchen refit quote"
    Paragraph
      Text "Hi Sam, here is the "
      Bold
        Text "revised"
      Text " estimate."
    UnorderedList
      Item
        Text "Cabinets and "
        InlineCode "worktops"
      Item
        Text "Labour, see "
        Link /help/labour?from=quote-42
          Text "terms"
        Text "\nand "
        Link https://example.com/Rules
          Text "site rules"
    FencedBlock(budget-summary)
      Payload {"type":"budget-summary","title":"Refit","currency":"EUR","total":18500.0,"spent":null,"remaining":null,"lines":[{"label":"Cabinets","amount":7200.0,"share":null}]}
    Blockquote
      Text "Prices valid for 30 days."
    "#);
}

#[test]
fn fixture_hostile_links() {
    let doc = render(&fixture("hostile_links"), None);

    insta::assert_snapshot!(outline(&doc), @r#"
    Paragraph
      Text "Try this or that.\nA "
      Link mailto:team@example.com
        Bold
          Text "safe"
        Text " one"
      Text " and "
      Link https://Example.com/a
        Text "another"
      Text "."
    "#);
}

#[test]
fn fixture_broken_payloads() {
    let doc = render(&fixture("broken_payloads"), None);
    assert_eq!(doc.len(), 3);

    let kinds: Vec<Option<PayloadKind>> = doc.payloads().map(Payload::kind).collect();
    assert_eq!(
        kinds,
        vec![Some(PayloadKind::Timeline), Some(PayloadKind::RiskGroups)]
    );
    assert!(doc.payloads().all(Payload::is_invalid));

    assert_eq!(
        doc.blocks[2].rendered,
        Rendered::Code {
            tag: Some("python".into()),
            body: "print(\"**not bold**\")".into()
        }
    );
}

/// Every link in every fixture must carry a safe target.
#[test]
fn no_fixture_yields_unsafe_links() {
    for name in ["quote_reply", "hostile_links", "broken_payloads"] {
        let doc = render(&fixture(name), None);
        for href in doc.links() {
            let s = href.as_str();
            assert!(
                ["/", "#", "mailto:", "tel:", "http://", "https://"]
                    .iter()
                    .any(|p| s.starts_with(p)),
                "{name}: unsafe href {s}"
            );
            assert!(!s.starts_with("//"), "{name}: scheme-relative href {s}");
        }
    }
}

#[test]
fn json_shape_is_tagged() {
    let doc = render("# Hi\n\n```example-note\n{\"title\": \"Tip\"}\n```", None);
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["blocks"][0]["block"]["type"], "heading");
    assert_eq!(json["blocks"][0]["rendered"]["type"], "inline");
    assert_eq!(json["blocks"][0]["rendered"]["nodes"][0]["type"], "text");
    assert_eq!(json["blocks"][0]["rendered"]["nodes"][0]["value"], "Hi");
    assert_eq!(json["blocks"][1]["rendered"]["payload"]["type"], "example-note");
    assert!(json["blocks"][1]["rendered"]["payload"]["body"].is_null());
}

#[test]
fn plain_text_preview() {
    let doc = render(
        "# Update\n\n**Done**: see [notes](/n).\n\n- a\n- `b`\n\n```timeline\n{}\n```",
        None,
    );
    assert_eq!(doc.plain_text(), "Update\n\nDone: see notes.\n\na\nb");
}

#[test]
fn blocks_survive_in_rendered_tree() {
    let doc = render("1. one\n2. two", None);
    assert_eq!(
        doc.blocks[0].block,
        Block::OrderedList {
            items: vec!["one".into(), "two".into()]
        }
    );
}

#[test]
fn deeply_nested_links_render() {
    let n = 100_000;
    let input = format!("{}a{}", "[".repeat(n), "](/x)".repeat(n));
    let doc = render(&input, None);

    assert_eq!(doc.len(), 1);
    assert!(doc.links().iter().all(|href| href.as_str() == "/x"));
    assert!(!outline(&doc).is_empty());
}

#[test]
fn long_unclosed_marker_runs_render() {
    for unit in ["[", "[a](", "**", "x`", "`tick **open [label "] {
        let input = unit.repeat(50_000);
        let doc = render(&input, None);

        assert_eq!(doc.len(), 1, "{unit:?}");
        assert!(matches!(doc.blocks[0].rendered, Rendered::Inline { .. }));
    }
}
