use insta::assert_snapshot;
use markdown_meta_engine::{
    Markdown, MetaError, MetaOptions, MetaSession, MetaValue,
    meta::{NodeKind, node_to_cell_text},
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn convert(src: &str, table: bool) -> (String, MetaSession) {
    let options = MetaOptions { table };
    let mut session = MetaSession::new();
    let html = Markdown::new(options).convert(src, &mut session);
    (html, session)
}

#[test]
fn metadata_is_available_after_conversion() {
    let (html, session) = convert(&load_fixture("post"), false);
    assert_eq!(html, "<h1>Hello markdown-meta</h1>\n");

    let map = session.mapping().unwrap();
    assert_eq!(map["Title"].as_str(), Some("markdown-meta"));
    assert_eq!(
        map["Tags"],
        MetaValue::from(vec!["markdown", "rust"])
    );
}

#[test]
fn metadata_table() {
    let (html, _) = convert(&load_fixture("post"), true);
    assert_snapshot!(html, @r"
    <table>
    <thead>
    <tr>
    <th>Title</th>
    <th>Summary</th>
    <th>Tags</th>
    </tr>
    </thead>
    <tbody>
    <tr>
    <td>markdown-meta</td>
    <td>Add YAML metadata to the document</td>
    <td>[markdown rust]</td>
    </tr>
    </tbody>
    </table>
    <h1>Hello markdown-meta</h1>
    ");
}

#[test]
fn broken_metadata_shows_raw_block_and_marker() {
    let (html, session) = convert(&load_fixture("broken"), true);

    let err = session.try_mapping().unwrap_err();
    assert!(matches!(err, MetaError::Yaml { .. }));
    assert_eq!(session.try_items().unwrap_err(), err);

    let lines: Vec<&str> = html.lines().collect();
    assert_eq!(
        lines[..7],
        [
            "Title: markdown-meta",
            "Summary: Add YAML metadata to the document",
            "Tags:",
            "  - : {",
            "  }",
            "    - markdown",
            "    - rust",
        ]
    );
    assert_eq!(lines[7], format!("<!-- {err} -->"));
    assert_eq!(lines[8], "<h1>Hello markdown-meta</h1>");
    assert_eq!(lines.len(), 9);
}

#[test]
fn broken_metadata_without_table_has_no_marker() {
    let (html, session) = convert(&load_fixture("broken"), false);
    assert!(!html.contains("<!--"));
    assert!(html.ends_with("<h1>Hello markdown-meta</h1>\n"));
    assert!(session.error().is_some());
}

#[test]
fn unterminated_block_is_captured_at_end_of_input() {
    let (html, session) = convert(&load_fixture("unterminated"), false);
    assert_eq!(html, "");
    let map = session.mapping().unwrap();
    assert_eq!(map["title"].as_str(), Some("Draft"));
    assert_eq!(map["tags"], MetaValue::from(vec!["a", "b"]));
}

#[test]
fn delimiter_after_first_line_is_not_front_matter() {
    let (html, session) = convert(&load_fixture("late_delimiter"), true);
    assert!(!session.has_front_matter());
    assert_eq!(session.try_mapping(), Ok(None));
    assert!(!html.contains("<table>"));
}

#[test]
fn ordered_view_keeps_declaration_order() {
    let (_, session) = convert("---\nzeta: 1\nalpha: 2\nmid: 3\n---\n", false);
    let root = session.items().unwrap().root().unwrap();
    assert_eq!(root.kind, NodeKind::Mapping);
    assert_eq!(root.keys(), vec!["zeta", "alpha", "mid"]);

    let keys: Vec<_> = session.mapping().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
}

#[rstest]
#[case::sequence("- a\n- b\n", "sequence")]
#[case::scalar("just text\n", "string")]
fn non_mapping_root_is_a_capture_error(#[case] yaml: &str, #[case] found: &str) {
    let (html, session) = convert(&format!("---\n{yaml}---\n# H\n"), true);
    let err = session.error().unwrap();
    assert_eq!(err.to_string(), format!("yaml: metadata must be a mapping, found a {found}"));
    assert!(html.contains(&format!("<!-- {err} -->")));
}

#[test]
fn collection_keys_are_a_capture_error() {
    let (_, session) = convert("---\n? [a, b]\n: v\n---\n", false);
    assert_eq!(
        session.error(),
        Some(&MetaError::UnsupportedKey { kind: "sequence" })
    );
}

#[rstest]
#[case::empty("---\n---\n# H\n")]
#[case::blank_lines("---\n\n\n---\n# H\n")]
#[case::null("---\n~\n---\n# H\n")]
fn empty_block_is_an_empty_mapping(#[case] src: &str) {
    let (html, session) = convert(src, true);
    assert_eq!(session.try_mapping().unwrap().unwrap().len(), 0);
    assert!(session.items().unwrap().root().is_none());
    assert_eq!(html, "<h1>H</h1>\n");
}

#[test]
fn nested_values_in_table_cells() {
    let (html, session) = convert(
        "---\nmeta:\n  first: 1\n  second: [x, y]\nflag: true\nnothing:\n---\n",
        true,
    );
    let root = session.items().unwrap().root().unwrap();
    let meta = root.get("meta").unwrap();
    assert_eq!(node_to_cell_text(meta), "map[second:[x y] first:1]");
    assert!(html.contains("<td>map[second:[x y] first:1]</td>"));
    assert!(html.contains("<td>true</td>"));
    assert!(html.contains("<td></td>"));
}

#[rstest]
#[case::trailing_zero("version", "1.10")]
#[case::exponent("big", "1e3")]
#[case::hex("hex", "0x1F")]
#[case::capitalised_bool("flag", "True")]
#[case::null_word("none", "null")]
#[case::tilde("none", "~")]
#[case::leading_zeros("zip", "007")]
#[case::numeric_key("1.50", "one")]
fn table_cells_keep_source_text(#[case] key: &str, #[case] value: &str) {
    let (html, _) = convert(&format!("---\n{key}: {value}\n---\n"), true);
    assert!(html.contains(&format!("<th>{key}</th>\n")), "{html}");
    assert!(html.contains(&format!("<td>{value}</td>\n")), "{html}");
}

#[test]
fn table_row_matches_source_scalars() {
    let (html, session) = convert(
        "---\nversion: 1.10\nzip: 007\nbig: 1e3\nhex: 0x1F\nflag: True\nnone: null\n---\n",
        true,
    );
    let root = session.items().unwrap().root().unwrap();
    assert_eq!(root.keys(), vec!["version", "zip", "big", "hex", "flag", "none"]);
    let body = html.split("<tbody>").nth(1).unwrap();
    let cells: Vec<&str> = body
        .lines()
        .filter_map(|l| l.strip_prefix("<td>")?.strip_suffix("</td>"))
        .collect();
    assert_eq!(cells, vec!["1.10", "007", "1e3", "0x1F", "True", "null"]);
}

#[test]
fn cell_text_is_escaped() {
    let (html, _) = convert("---\nlink: \"<b>&</b>\"\n---\n", true);
    assert!(html.contains("<td>&lt;b&gt;&amp;&lt;/b&gt;</td>"));
}

#[test]
fn indented_delimiter_does_not_open() {
    let (_, session) = convert("    ---\na: 1\n---\n", false);
    assert!(!session.has_front_matter());
}

#[test]
fn sessions_are_independent() {
    let md = Markdown::new(MetaOptions::default().with_table());
    let mut first = MetaSession::new();
    let mut second = MetaSession::new();
    md.convert("---\na: 1\n---\n", &mut first);
    md.convert("no metadata\n", &mut second);
    assert!(first.has_front_matter());
    assert!(!second.has_front_matter());
}
