use markdown_meta_engine::{
    MetaSession,
    parsing::{ParsedDoc, parse_document, snapshot},
};
use pretty_assertions::assert_eq;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn parse_fixture(name: &str) -> (xi_rope::Rope, ParsedDoc, MetaSession) {
    let md = load_fixture(name);
    let rope = xi_rope::Rope::from(md.as_str());
    let mut session = MetaSession::new();
    let doc = parse_document(&rope, &mut session);
    snapshot::invariants(&rope, &doc.blocks);
    (rope, doc, session)
}

fn kind_labels(rope: &xi_rope::Rope, doc: &ParsedDoc) -> Vec<String> {
    snapshot::normalize(rope, &doc.blocks)
        .blocks
        .into_iter()
        .map(|b| b.kind)
        .collect()
}

#[test]
fn fixture_post() {
    let (rope, doc, session) = parse_fixture("post");
    assert_eq!(kind_labels(&rope, &doc), vec!["Heading(1)"]);
    assert!(session.mapping().is_some());
}

#[test]
fn fixture_broken() {
    let (rope, doc, session) = parse_fixture("broken");
    assert_eq!(
        kind_labels(&rope, &doc),
        vec!["FrontMatter(terminated: true)", "Heading(1)"]
    );
    assert!(session.error().is_some());
}

#[test]
fn fixture_unterminated() {
    let (rope, doc, _) = parse_fixture("unterminated");
    assert!(kind_labels(&rope, &doc).is_empty());
}

#[test]
fn fixture_late_delimiter() {
    let (rope, doc, session) = parse_fixture("late_delimiter");
    assert_eq!(
        kind_labels(&rope, &doc),
        vec!["Paragraph", "ThematicBreak", "Paragraph", "ThematicBreak"]
    );
    assert!(!session.has_front_matter());
}

#[test]
fn fixture_mixed_blocks() {
    let (rope, doc, _) = parse_fixture("mixed_blocks");
    let snap = snapshot::normalize(&rope, &doc.blocks);
    let labels: Vec<_> = snap.blocks.iter().map(|b| b.kind.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Heading(1)",
            "Paragraph",
            "Paragraph",
            "FencedCode(Backticks, closed: true)",
            "ThematicBreak",
        ]
    );
    assert_eq!(snap.blocks[2].containers, vec!["Quote(1)"]);
    let inline: Vec<_> = snap.blocks[1].inline.iter().map(|i| i.kind.as_str()).collect();
    assert_eq!(inline, vec!["Text", "CodeSpan", "Text"]);
}

/// Every block span slices back to non-empty source text.
#[test]
fn lossless_span_invariant() {
    let (rope, doc, _) = parse_fixture("mixed_blocks");
    for block in &doc.blocks {
        let text = rope.slice_to_cow(block.span.start..block.span.end);
        assert!(!text.is_empty());
    }
}

/// Delimiters inside a fence are code, not front matter.
#[test]
fn raw_zones_hide_delimiters() {
    use markdown_meta_engine::parsing::blocks::BlockKind;

    let md = "```\n---\na: 1\n---\n```\n";
    let rope = xi_rope::Rope::from(md);
    let mut session = MetaSession::new();

    let doc = parse_document(&rope, &mut session);
    assert_eq!(doc.blocks.len(), 1);
    assert!(matches!(doc.blocks[0].kind, BlockKind::FencedCode { closed: true, .. }));
    assert!(!session.has_front_matter());
}
