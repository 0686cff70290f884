//! Comprehensive tests for delimiter matching and span construction.

use spanmark::parser::{Escaper, Unit};
use spanmark::{
    ApplyStyles, OffsetUnit, RuleSet, ScanOptions, StyledText, UnmatchedKind, apply_styles,
    apply_styles_with,
};

const STYLE_A: &str = "A";
const STYLE_B: &str = "B";

fn one_rule() -> RuleSet<&'static str> {
    RuleSet::builder().rule("$", STYLE_A).build().unwrap()
}

fn two_rules() -> RuleSet<&'static str> {
    RuleSet::builder()
        .rule("$", STYLE_A)
        .rule("#", STYLE_B)
        .build()
        .unwrap()
}

/// One line per span in document order: `start..end style "text"`.
fn render(styled: &StyledText<&str>) -> String {
    styled
        .sorted_spans()
        .into_iter()
        .map(|span| {
            format!(
                "{}..{} {} {:?}",
                span.start,
                span.end,
                span.style,
                styled.span_text(span)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Basic Pairing
// ============================================================================

#[test]
fn basic_pairing() {
    let styled = apply_styles("This is $red$ text.", &one_rule());
    assert_eq!(styled.text(), "This is red text.");
    insta::assert_snapshot!(render(&styled), @r#"8..11 A "red""#);
}

#[test]
fn multiple_symbols() {
    let styled = apply_styles("This is $red$ and this is #blue#.", &two_rules());
    assert_eq!(styled.text(), "This is red and this is blue.");
    insta::assert_snapshot!(render(&styled), @r#"
    8..11 A "red"
    24..28 B "blue"
    "#);
}

#[test]
fn consecutive_different_symbols() {
    let styled = apply_styles("This is $red$#blue# text.", &two_rules());
    assert_eq!(styled.text(), "This is redblue text.");
    insta::assert_snapshot!(render(&styled), @r#"
    8..11 A "red"
    11..15 B "blue"
    "#);
}

#[test]
fn repeated_pairs_of_one_symbol() {
    let styled = apply_styles("$a$ $b$ $c$", &one_rule());
    assert_eq!(styled.text(), "a b c");
    assert_eq!(styled.spans().len(), 3);
    let texts: Vec<_> = styled.spans().iter().map(|s| styled.span_text(s)).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn nested_outer_closer_blocked_by_inner() {
    // `$` cannot close while `#` is innermost, so only `#...#` styles text.
    let styled = apply_styles("This is a $#nested$# test.", &two_rules());
    assert_eq!(styled.text(), "This is a nested test.");
    insta::assert_snapshot!(render(&styled), @r#"10..16 B "nested""#);
}

#[test]
fn proper_nesting() {
    let styled = apply_styles("$outer #inner# outer$", &two_rules());
    assert_eq!(styled.text(), "outer inner outer");
    insta::assert_snapshot!(render(&styled), @r#"
    0..17 A "outer inner outer"
    6..11 B "inner"
    "#);
}

#[test]
fn spans_are_emitted_in_closing_order() {
    let styled = apply_styles("$a#b#$", &two_rules());
    let styles: Vec<_> = styled.spans().iter().map(|s| s.style).collect();
    assert_eq!(styles, vec![STYLE_B, STYLE_A]);
}

#[test]
fn nested_spans_never_partially_overlap() {
    let styled = apply_styles("$a#b$c#d$e#", &two_rules());
    let spans = styled.spans();
    for (i, a) in spans.iter().enumerate() {
        for b in &spans[i + 1..] {
            assert!(!a.overlaps(b) || a.encloses(b) || b.encloses(a));
        }
    }
}

// ============================================================================
// Unmatched Delimiters
// ============================================================================

#[test]
fn unpaired_symbol() {
    let styled = apply_styles("This is $unpaired text.", &one_rule());
    assert_eq!(styled.text(), "This is unpaired text.");
    assert!(styled.is_plain());
    assert_eq!(styled.unmatched().len(), 1);
    assert_eq!(styled.unmatched()[0].offset, 8);
    assert_eq!(styled.unmatched()[0].kind, UnmatchedKind::Opener);
}

#[test]
fn third_occurrence_opens_again() {
    let styled = apply_styles("$a$b$c", &one_rule());
    assert_eq!(styled.text(), "abc");
    assert_eq!(styled.spans().len(), 1);
    assert_eq!(styled.unmatched()[0].offset, 2);
}

#[test]
fn nested_case_reports_both_dropped_dollars() {
    let styled = apply_styles("This is a $#nested$# test.", &two_rules());
    let kinds: Vec<_> = styled
        .unmatched()
        .iter()
        .map(|u| (u.symbol.as_str(), u.offset, u.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("$", 10, UnmatchedKind::Opener),
            ("$", 16, UnmatchedKind::Closer),
        ]
    );
}

// ============================================================================
// Escapes
// ============================================================================

#[test]
fn escape_suppression() {
    let styled = apply_styles(
        "This is \\$not red\\$ text but this is $red$.",
        &one_rule(),
    );
    assert_eq!(styled.text(), "This is $not red$ text but this is red.");
    insta::assert_snapshot!(render(&styled), @r#"35..38 A "red""#);
}

#[test]
fn multiple_escaped_symbols() {
    let styled = apply_styles("This is \\$not\\$ \\#colored\\# text.", &two_rules());
    assert_eq!(styled.text(), "This is $not$ #colored# text.");
    assert!(styled.is_plain());
    assert!(styled.unmatched().is_empty());
}

#[test]
fn escaped_symbol_inside_span() {
    let styled = apply_styles(r"$costs \$5$", &one_rule());
    assert_eq!(styled.text(), "costs $5");
    insta::assert_snapshot!(render(&styled), @r#"0..8 A "costs $5""#);
}

#[test]
fn escape_of_unknown_symbol_stays_literal() {
    let styled = apply_styles(r"a\*b $c$", &one_rule());
    assert_eq!(styled.text(), r"a\*b c");
    assert_eq!(styled.spans()[0].range(), 5..6);
}

#[test]
fn placeholder_text_in_input_is_not_special() {
    let styled = apply_styles("{$}x{$}", &one_rule());
    assert_eq!(styled.text(), "{}x{}");
    assert_eq!(styled.span_text(&styled.spans()[0]), "}x{");
}

// ============================================================================
// Offset Units
// ============================================================================

#[test]
fn offsets_in_every_unit() {
    let rules = one_rule();
    let input = "👍🏽$ok$";
    let expected = [
        (OffsetUnit::Byte, 8..10),
        (OffsetUnit::Char, 2..4),
        (OffsetUnit::Grapheme, 1..3),
        (OffsetUnit::Utf16, 4..6),
    ];

    for (unit, range) in expected {
        let styled = apply_styles_with(input, &rules, &ScanOptions::new().with_unit(unit));
        assert_eq!(styled.text(), "👍🏽ok");
        assert_eq!(styled.spans()[0].range(), range, "unit {unit:?}");
        assert_eq!(styled.span_text(&styled.spans()[0]), "ok");
    }
}

#[test]
fn grapheme_offsets_follow_clusters_joined_by_stripping() {
    let rules = two_rules();
    let options = ScanOptions::new().with_unit(OffsetUnit::Grapheme);

    for (input, text) in [("🇺$🇸#x#", "🇺🇸x"), ("\r$\n#x#", "\r\nx")] {
        let styled = apply_styles_with(input, &rules, &options);
        assert_eq!(styled.text(), text);
        assert_eq!(styled.len(), 2);
        insta::allow_duplicates! {
            insta::assert_snapshot!(render(&styled), @r#"1..2 B "x""#);
        }
        assert_eq!(styled.unmatched()[0].offset, 1);
        assert_eq!(styled.unmatched()[0].kind, UnmatchedKind::Opener);
    }
}

#[test]
fn symbol_fused_with_combining_mark_is_not_a_delimiter() {
    let styled = apply_styles("$\u{301}x$", &one_rule());
    assert_eq!(styled.text(), "$\u{301}x");
    assert!(styled.is_plain());
}

#[test]
fn unicode_content() {
    let styled = apply_styles("日本$語$", &one_rule());
    assert_eq!(styled.text(), "日本語");
    assert_eq!(styled.spans()[0].range(), 2..3);
}

// ============================================================================
// Segments
// ============================================================================

#[test]
fn segments_follow_nesting() {
    let styled = apply_styles("a$b#c#d$e", &two_rules());
    let segments: Vec<_> = styled
        .segments()
        .map(|s| (s.text, s.styles.into_iter().copied().collect::<Vec<_>>()))
        .collect();
    assert_eq!(
        segments,
        vec![
            ("a", vec![]),
            ("b", vec![STYLE_A]),
            ("c", vec![STYLE_A, STYLE_B]),
            ("d", vec![STYLE_A]),
            ("e", vec![]),
        ]
    );
}

// ============================================================================
// Properties
// ============================================================================

const SAMPLES: &[&str] = &[
    "",
    "plain",
    "This is $red$ text.",
    "This is \\$not red\\$ text but this is $red$.",
    "This is a $#nested$# test.",
    "$$##$",
    "\\\\$a\\$b$ #c",
    "trailing \\",
    "\\x $y\\",
    "日本$語$ 👍🏽#x#",
];

#[test]
fn round_trip_without_delimiters() {
    for text in ["", "plain text", "no symbols: @ % & *", "日本語 👍🏽"] {
        let styled = apply_styles(text, &two_rules());
        assert_eq!(styled.text(), text);
        assert!(styled.is_plain());
    }
}

#[test]
fn stripping_is_idempotent() {
    let rules = two_rules();
    for input in SAMPLES {
        let once = apply_styles(input, &rules);
        if once.text().contains(['$', '#']) {
            continue;
        }
        let twice = apply_styles(once.text(), &rules);
        assert_eq!(twice.text(), once.text(), "input {input:?}");
        assert!(twice.is_plain());
    }
}

#[test]
fn removed_symbols_exclude_escaped_ones() {
    let rules = two_rules();
    let is_symbol = |c: &char| matches!(c, '$' | '#');

    for input in SAMPLES {
        let styled = apply_styles(input, &rules);
        let escaped = Escaper::new(input, &rules)
            .filter(|unit| matches!(unit, Unit::Escaped(_)))
            .count();
        let symbols_in = input.chars().filter(is_symbol).count();
        let symbols_out = styled.text().chars().filter(is_symbol).count();

        let active = symbols_in - escaped;
        assert_eq!(symbols_in - symbols_out, active, "input {input:?}");

        // The escape marker in front of each preserved symbol goes too.
        let removed = input.chars().count() - styled.text().chars().count();
        assert_eq!(removed, active + escaped, "input {input:?}");
    }
}

#[test]
fn strip_matches_scan_text() {
    let rules = two_rules();
    for input in SAMPLES {
        assert_eq!(spanmark::strip(input, &rules), apply_styles(input, &rules).text());
    }
}

#[test]
fn escape_round_trips() {
    let rules = two_rules();
    for input in SAMPLES {
        let escaped = spanmark::escape(input, &rules);
        let styled = escaped.apply_styles(&rules);
        assert_eq!(styled.text(), *input);
        assert!(styled.is_plain());
    }
}

#[test]
fn scanning_is_deterministic() {
    let rules = two_rules();
    for input in SAMPLES {
        assert_eq!(apply_styles(input, &rules), apply_styles(input, &rules));
    }
}
