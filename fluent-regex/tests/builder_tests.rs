//! End-to-end tests for the pattern builder
//!
//! Patterns are built through the public API and run through the engine to
//! check that the rendered text means what the calls say.

use fluent_regex::{FluentRegexError, PredefinedSet, RegexOptions, start};

fn none() -> RegexOptions {
    RegexOptions::none()
}

mod rendering {
    use super::*;

    #[test]
    fn test_quantifier_composition() {
        let pattern = start().match_digit().repeated().one_or_more_times();
        assert_eq!(pattern.to_string(), r"\d+");
    }

    #[test]
    fn test_group_nesting() {
        let pattern = start().group(start().named_group(r"\d+", "n"));
        assert_eq!(pattern.to_string(), r"((?<n>\d+))");
    }

    #[test]
    fn test_character_class_precedence() {
        let pattern = start()
            .match_character_sets(PredefinedSet::DIGIT | PredefinedSet::LOWER_CASE_LETTER, &[])
            .unwrap();
        assert_eq!(pattern.to_string(), r"[\d]");
        assert!(!pattern.as_str().contains("a-z"));
    }

    #[test]
    fn test_match_one_of() {
        assert_eq!(start().match_one_of("a", "b", &["c"]).to_string(), "(a|b|c)");
    }

    #[test]
    fn test_reserved_only_literal_doubles() {
        let text = "^$[](){}.|*+?\\";
        let pattern = start().match_literal(text);
        assert_eq!(pattern.len(), text.len() * 2);
    }
}

mod validity {
    use super::*;

    #[test]
    fn test_empty_is_invalid() {
        assert!(!start().is_valid());
    }

    #[test]
    fn test_unbalanced_group_is_invalid() {
        assert!(!start().match_any_character_in_set("(").group("(").is_valid());
        assert!(!start().group("(").is_valid());
    }

    #[test]
    fn test_digits_are_valid() {
        assert!(start().match_digit().repeated().one_or_more_times().is_valid());
    }

    #[test]
    fn test_malformed_but_compilable_reports_valid() {
        // Matches nothing useful, but compiles.
        assert!(start().match_start_of_line().match_digit().match_start_of_line().is_valid());
    }
}

mod matching {
    use super::*;

    #[test]
    fn test_escaped_dot_is_literal() {
        let pattern = start().match_literal("a.b");
        assert!(pattern.is_match("a.b", &none()).unwrap());
        assert!(!pattern.is_match("axb", &none()).unwrap());
    }

    #[test]
    fn test_literal_is_substring_match() {
        let pattern = start().match_literal("cat");
        assert!(pattern.is_match("concatenate", &none()).unwrap());

        let anchored = start().match_start_of_line().match_literal("cat").match_end_of_line();
        assert!(!anchored.is_match("concatenate", &none()).unwrap());
        assert!(anchored.is_match("cat", &none()).unwrap());
    }

    #[test]
    fn test_character_set_with_extra_chars() {
        let pattern = start()
            .match_start_of_line()
            .match_character_sets(PredefinedSet::WORD_CHARACTER, &['.', '-'])
            .unwrap()
            .repeated()
            .one_or_more_times()
            .match_end_of_line();
        assert!(pattern.is_match("first.last-name", &none()).unwrap());
        assert!(!pattern.is_match("first last", &none()).unwrap());
    }

    #[test]
    fn test_negated_set() {
        let pattern = start()
            .match_start_of_line()
            .match_any_character_not_in_set("0-9")
            .repeated()
            .one_or_more_times()
            .match_end_of_line();
        assert!(pattern.is_match("abc", &none()).unwrap());
        assert!(!pattern.is_match("ab1", &none()).unwrap());
    }

    #[test]
    fn test_alternation() {
        let pattern = start()
            .match_start_of_line()
            .match_one_of("cat", "dog", &["bird"])
            .match_end_of_line();
        assert!(pattern.is_match("dog", &none()).unwrap());
        assert!(pattern.is_match("bird", &none()).unwrap());
        assert!(!pattern.is_match("fish", &none()).unwrap());
    }

    #[test]
    fn test_named_backreference() {
        let pattern = start()
            .named_group(start().match_word_character().repeated().one_or_more_times(), "word")
            .match_literal(" ")
            .reference_named_group("word");
        assert!(pattern.is_match("hello hello", &none()).unwrap());
        assert!(!pattern.is_match("hello world", &none()).unwrap());
    }

    #[test]
    fn test_lookahead() {
        let pattern = start()
            .match_literal("foo")
            .positive_forward_assertion("bar");
        assert!(pattern.is_match("foobar", &none()).unwrap());
        assert!(!pattern.is_match("foobaz", &none()).unwrap());

        let pattern = start()
            .match_literal("foo")
            .negative_forward_assertion("bar");
        assert!(!pattern.is_match("foobar", &none()).unwrap());
        assert!(pattern.is_match("foobaz", &none()).unwrap());
    }

    #[test]
    fn test_lookbehind() {
        let price = start()
            .positive_backward_assertion(start().match_literal("$"))
            .match_digit()
            .repeated()
            .one_or_more_times();
        let matches = price.find_all_matches("cost $42 or 17", &none()).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].as_str(), "42");

        let not_price = start()
            .match_word_break()
            .negative_backward_assertion(start().match_literal("$"))
            .match_digit()
            .repeated()
            .one_or_more_times();
        let matches = not_price.find_all_matches("cost $42 or 17", &none()).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].as_str(), "17");
    }

    #[test]
    fn test_counted_repetition() {
        let zip = start()
            .match_start_of_line()
            .match_digit()
            .repeated()
            .times(5)
            .match_end_of_line();
        assert!(zip.is_match("12345", &none()).unwrap());
        assert!(!zip.is_match("1234", &none()).unwrap());

        let range = start()
            .match_start_of_line()
            .match_literal("a")
            .repeated()
            .between(2, 3)
            .match_end_of_line();
        assert!(!range.is_match("a", &none()).unwrap());
        assert!(range.is_match("aaa", &none()).unwrap());
        assert!(!range.is_match("aaaa", &none()).unwrap());

        let at_least = start()
            .match_start_of_line()
            .match_literal("a")
            .repeated()
            .at_least(2)
            .match_end_of_line();
        assert!(at_least.is_match("aaaaa", &none()).unwrap());
        assert!(!at_least.is_match("a", &none()).unwrap());
    }

    #[test]
    fn test_options_are_forwarded() {
        let pattern = start().match_literal("hello");
        assert!(!pattern.is_match("HELLO", &none()).unwrap());
        assert!(pattern.is_match("HELLO", &RegexOptions::from_flags("i")).unwrap());
    }

    #[test]
    fn test_whitespace_and_control_characters() {
        let pattern = start()
            .match_tab()
            .match_any_white_space_character()
            .match_new_line();
        assert!(pattern.is_match("\t \n", &none()).unwrap());
        assert!(start().match_line_feed().is_match("a\nb", &none()).unwrap());
        assert!(start().match_carriage_return().is_match("\r", &none()).unwrap());
        assert!(start().match_form_feed().is_match("\x0c", &none()).unwrap());
    }

    #[test]
    fn test_compile_error_surfaces() {
        let pattern = start().group("(");
        assert!(matches!(
            pattern.is_match("x", &none()),
            Err(FluentRegexError::Compile(_))
        ));
        assert!(matches!(
            pattern.find_all_matches("x", &none()),
            Err(FluentRegexError::Compile(_))
        ));
    }
}

mod find_all {
    use super::*;

    #[test]
    fn test_find_all_with_captures() {
        let pair = start()
            .named_group(start().match_any_lower_case_letter().repeated().one_or_more_times(), "key")
            .match_literal("=")
            .group(start().match_digit().repeated().one_or_more_times());
        let subject = "a=1, bc=23, D=4";
        let matches = pair.find_all_matches(subject, &none()).unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].as_str(), "a=1");
        assert_eq!(matches[0].start, 0);
        assert_eq!(matches[0].named_group_str(subject, "key"), Some("a"));
        assert_eq!(matches[0].group_str(subject, 2), Some("1"));

        assert_eq!(matches[1].as_str(), "bc=23");
        assert_eq!(matches[1].start, 5);
        assert_eq!(matches[1].named_group_str(subject, "key"), Some("bc"));
        assert_eq!(matches[1].group_str(subject, 2), Some("23"));
    }

    #[test]
    fn test_find_all_no_matches() {
        let matches = start()
            .match_digit()
            .find_all_matches("no digits here", &none())
            .unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_compiled_pattern_reuse() {
        let compiled = start()
            .match_word_break()
            .match_any_upper_case_letter()
            .match_word_character()
            .repeated()
            .zero_or_more_times()
            .compile(&none())
            .unwrap();
        assert_eq!(compiled.as_str(), r"\b[A-Z]\w*");
        let names: Vec<String> = compiled
            .find_all("Alice met bob and Carol")
            .unwrap()
            .into_iter()
            .map(|m| m.text)
            .collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }
}

mod failures {
    use super::*;

    #[test]
    fn test_invalid_character_sets_keeps_text() {
        let before = start().match_start_of_line().match_literal("id:");
        let err = before
            .clone()
            .match_character_sets(PredefinedSet::empty(), &['a', 'b'])
            .unwrap_err();
        assert!(err.sets().is_empty());
        let after = err.into_builder();
        assert_eq!(after, before);
        let after = after.match_digit();
        assert_eq!(after.as_str(), r"^id:\d");
    }

    #[test]
    fn test_unknown_bits_are_not_a_class() {
        let sets = PredefinedSet::from_bits_truncate(0x8000);
        assert!(start().match_character_sets(sets, &[]).is_err());
    }
}
