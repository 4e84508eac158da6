//! End-to-end expansion scenarios

use snip_engine::{
    parse, ExpansionContext, Filter, FilterRegistry, SnippetError, SnippetIndex, Unresolved,
};
use std::sync::Arc;

const C_SNIPPETS: &str = include_str!("../fixtures/c.snippets");

fn bound() -> ExpansionContext {
    let mut ctx = ExpansionContext::new();
    ctx.bind("$1", "abcd");
    ctx.bind("$2", "defg");
    ctx.bind("$123123", "asdf");
    ctx
}

#[test]
fn escaped_pipe_stays_in_head() {
    assert_eq!(
        bound().expand("$123123 $1\\|$1_$2").unwrap(),
        "asdf abcd|abcd_defg"
    );
}

#[test]
fn escaped_sigil_is_literal() {
    assert_eq!(bound().expand("\\$123").unwrap(), "$123");
}

#[test]
fn escaped_leading_pipe_is_not_a_filter() {
    assert_eq!(bound().expand("\\|upper").unwrap(), "|upper");
}

#[test]
fn trailing_filter_uppercases_everything() {
    assert_eq!(
        bound().expand("$123123 $1\\|$1_$2|upper").unwrap(),
        "ASDF ABCD|ABCD_DEFG"
    );
}

#[test]
fn filter_chains_without_bindings() {
    let ctx = ExpansionContext::new();
    assert_eq!(ctx.expand("some_func|camelize").unwrap(), "SomeFunc");
    assert_eq!(ctx.expand("SomeFunc|functify").unwrap(), "some_func");
    assert_eq!(ctx.expand("SomeFunc|functify|upper").unwrap(), "SOME_FUNC");
}

#[test]
fn unbound_token_passes_through() {
    assert_eq!(ExpansionContext::new().expand("$99").unwrap(), "$99");
}

#[test]
fn strict_mode_reports_unbound_token() {
    let ctx = bound().with_policy(Unresolved::Strict);
    assert_eq!(
        ctx.expand("$1 and $99"),
        Err(SnippetError::UndefinedVariable("$99".to_string()))
    );
}

#[test]
fn parsed_placeholder_expands() {
    let report = parse(C_SNIPPETS);
    let test = &report.snippets[0];
    let placeholder = test.placeholders().next().unwrap();

    let mut ctx = ExpansionContext::new();
    ctx.bind("1", "DrawWidget");
    ctx.bind("2", "Area");
    assert_eq!(ctx.expand(placeholder.spec()).unwrap(), "DRAW_WIDGET _AREA");
    assert_eq!(test.expand(&ctx).unwrap(), "test this DRAW_WIDGET _AREA");
}

#[test]
fn whole_snippets_render_from_index() {
    let mut index = SnippetIndex::new();
    index.extend(parse(C_SNIPPETS));

    let mut ctx = ExpansionContext::new();
    ctx.bind("1", "my_widget");
    ctx.bind("2", "my");
    ctx.bind("3", "widget");
    let gobj = index.find("c", "gobj").unwrap();
    assert_eq!(
        gobj.expand(&ctx).unwrap(),
        "G_DECLARE_FINAL_TYPE (MyWidget, my_widget, MY, WIDGET, GObject)"
    );

    let mut ctx = ExpansionContext::new();
    ctx.bind("1", "widget.h");
    let guard = index.find("c", "guard").unwrap();
    assert_eq!(
        guard.expand(&ctx).unwrap(),
        "#ifndef WIDGET_H\n#define WIDGET_H"
    );

    let mut ctx = ExpansionContext::new();
    ctx.bind("1", "5");
    let price = index.find("c", "price").unwrap();
    assert_eq!(price.expand(&ctx).unwrap(), "printf (\"$5\");");
}

struct Reverse;

impl Filter for Reverse {
    fn name(&self) -> &str {
        "reverse"
    }

    fn apply(&self, input: &str) -> String {
        input.chars().rev().collect()
    }
}

#[test]
fn host_registered_filter_is_shared() {
    let mut registry = FilterRegistry::with_defaults();
    registry.register(Reverse);
    let registry = Arc::new(registry);

    let mut first = ExpansionContext::with_registry(Arc::clone(&registry));
    first.bind("1", "abc");
    let second = ExpansionContext::with_registry(registry);

    assert_eq!(first.expand("$1|reverse|upper").unwrap(), "CBA");
    assert_eq!(second.expand("$1|reverse").unwrap(), "1$");
}
