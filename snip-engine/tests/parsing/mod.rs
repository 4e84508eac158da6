//! Parsing the fixture definition file

use snip_engine::{parse, Parser, Snippet, SnippetError, SnippetIndex};

const C_SNIPPETS: &str = include_str!("../fixtures/c.snippets");

fn listing(snippet: &Snippet) -> String {
    snippet
        .chunks()
        .iter()
        .map(|c| match c.tab_stop() {
            Some(n) => format!("{:?}[{n}] {:?}", c.kind(), c.spec()),
            None => format!("{:?} {:?}", c.kind(), c.spec()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn fixture_loads_what_it_can() {
    let report = parse(C_SNIPPETS);
    let triggers: Vec<_> = report
        .snippets
        .iter()
        .map(|s| (s.language(), s.trigger()))
        .collect();
    assert_eq!(
        triggers,
        vec![
            ("", "test"),
            ("c", "gobj"),
            ("c", "guard"),
            ("c", "price"),
            ("c", "test"),
        ]
    );
}

#[test]
fn fixture_errors_point_at_offending_blocks() {
    let report = parse(C_SNIPPETS);
    assert_eq!(
        report.errors,
        vec![
            SnippetError::malformed(21, "broken", "unterminated placeholder"),
            SnippetError::malformed(34, "price", "duplicate trigger for language 'c'"),
            SnippetError::malformed(39, "dangling", "unterminated block (missing endsnippet)"),
        ]
    );
}

#[test]
fn test_block_chunks() {
    let report = parse(C_SNIPPETS);
    insta::assert_snapshot!(listing(&report.snippets[0]), @r#"
    Literal "test"
    Literal " "
    Literal "this"
    Literal " "
    Placeholder "$1 $2|functify|upper"
    "#);
}

#[test]
fn numbered_placeholders_and_metadata() {
    let report = parse(C_SNIPPETS);
    let guard = &report.snippets[2];
    assert_eq!(guard.description(), Some("Include guard"));
    insta::assert_snapshot!(listing(guard), @r##"
    Literal "#ifndef"
    Literal " "
    Placeholder[1] "$1|stripsuffix|upper"
    Literal "_H"
    Literal "\n"
    Literal "#define"
    Literal " "
    Placeholder "$1|stripsuffix|upper"
    Literal "_H"
    "##);
}

#[test]
fn quoted_header_description() {
    let report = parse(C_SNIPPETS);
    assert_eq!(
        report.snippets[1].description(),
        Some("GObject type boilerplate")
    );
    assert_eq!(report.snippets[0].description(), None);
}

#[test]
fn default_language_applies_to_unscoped_blocks() {
    let report = Parser::new().with_default_language("c").parse(C_SNIPPETS);
    // the unscoped `test` now collides with the scoped one
    assert_eq!(report.snippets.len(), 4);
    assert!(report
        .errors
        .contains(&SnippetError::malformed(29, "test", "duplicate trigger for language 'c'")));
}

#[test]
fn index_built_from_fixture() {
    let mut index = SnippetIndex::new();
    let rejected = index.extend(parse(C_SNIPPETS));
    assert!(rejected.is_empty());
    assert_eq!(index.len(), 5);
    assert_eq!(index.languages(), vec!["", "c"]);
    assert_eq!(index.for_language("python").len(), 1);
    assert_eq!(index.find("c", "test").unwrap().language(), "c");
}

#[test]
fn chunks_serialize_to_json() {
    let report = parse("snippet t\n${1:$1|upper} x\nendsnippet\n");
    let json = serde_json::to_value(&report.snippets[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "trigger": "t",
            "language": "",
            "chunks": [
                { "kind": "placeholder", "spec": "$1|upper", "tab_stop": 1 },
                { "kind": "literal", "spec": " " },
                { "kind": "literal", "spec": "x" }
            ]
        })
    );
}
