//! Property tests for filters and the expansion scanner

use proptest::prelude::*;
use snip_engine::filters::{camelize, functify, lower};
use snip_engine::{ExpansionContext, FilterRegistry};

proptest! {
    #[test]
    fn every_filter_is_total_and_deterministic(input in any::<String>()) {
        let registry = FilterRegistry::with_defaults();
        for name in registry.list_filters() {
            let first = registry.apply(&name, &input).unwrap();
            let second = registry.apply(&name, &input).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn functify_undoes_camelize(s in "[a-z][a-z0-9]{0,6}(_[a-z][a-z0-9]{0,6}){0,4}") {
        prop_assert_eq!(functify(&camelize(&s)), lower(&s));
    }

    #[test]
    fn escaped_character_expands_to_itself(c in any::<char>()) {
        let ctx = ExpansionContext::new();
        prop_assert_eq!(ctx.expand(&format!("\\{c}")).unwrap(), c.to_string());
    }

    #[test]
    fn digit_runs_are_greedy(digits in "[1-9][0-9]{0,7}") {
        let mut ctx = ExpansionContext::new();
        for end in 1..digits.len() {
            ctx.bind(&digits[..end], "prefix");
        }
        ctx.bind(&digits, "full");
        prop_assert_eq!(ctx.expand(&format!("${digits}")).unwrap(), "full");
    }

    #[test]
    fn text_without_escapes_or_pipes_is_unchanged(s in "[a-zA-Z0-9 $_.]{0,32}") {
        let ctx = ExpansionContext::new();
        prop_assert_eq!(ctx.expand(&s).unwrap(), s);
    }
}
