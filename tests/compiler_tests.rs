// tests/compiler_tests.rs

use pretty_assertions::assert_eq;
use rstest::rstest;
use track_query::ast::{
    BooleanField, Field, FieldPrefix, NumericField, Predicate, RangeValue, StringField, Term,
};
use track_query::classifier::classify;
use track_query::compile_term;

// ============================================================================
// Classification
// ============================================================================

#[rstest]
#[case("t:help", Field::Text(StringField::Title), "help")]
#[case("al:help", Field::Text(StringField::Album), "help")]
#[case("a:beatles", Field::Text(StringField::Artist), "beatles")]
#[case("y:1965", Field::Numeric(NumericField::Year), "1965")]
#[case("e:no", Field::Flag(BooleanField::Explicit), "no")]
#[case("d:-240", Field::Numeric(NumericField::Duration), "-240")]
#[case("b:320-", Field::Numeric(NumericField::Bitrate), "320-")]
#[case(r#"a:"the beatles""#, Field::Text(StringField::Artist), "the beatles")]
#[case("t:a:b", Field::Text(StringField::Title), "a:b")]
fn test_field_terms(#[case] token: &str, #[case] field: Field, #[case] value: &str) {
    assert_eq!(
        classify(token),
        Term::Field {
            field,
            value: value.to_string()
        }
    );
}

#[test]
fn test_only_colon_prefixes_name_fields() {
    for prefix in ["t", "al", "a", "y", "e", "d", "b"] {
        let field = Field::from_prefix(prefix).unwrap();
        assert_eq!(field.prefix().as_str(), prefix);
    }
    assert_eq!(FieldPrefix::TagInclude.field(), None);
    assert_eq!(FieldPrefix::TagExclude.field(), None);
    assert_eq!(FieldPrefix::Default.field(), None);
    assert_eq!(Field::from_prefix("x"), None);
}

#[test]
fn test_tag_before_field() {
    // A leading sign wins over any prefix.
    assert_eq!(
        classify("-y:1987"),
        Term::Tag {
            included: false,
            name: "y:1987".into()
        }
    );
    assert_eq!(
        classify(r#"+"hip hop""#),
        Term::Tag {
            included: true,
            name: "hip hop".into()
        }
    );
}

#[test]
fn test_default_term_quotes_stripped() {
    assert_eq!(
        classify(r#""Never Gonna Give You Up""#),
        Term::Default("Never Gonna Give You Up".into())
    );
    assert_eq!(classify("astley"), Term::Default("astley".into()));
}

// ============================================================================
// Text fields
// ============================================================================

#[rstest]
#[case("t:help", StringField::Title)]
#[case("al:help", StringField::Album)]
#[case("a:help", StringField::Artist)]
fn test_string_fields(#[case] token: &str, #[case] field: StringField) {
    assert_eq!(compile_term(token).unwrap(), Predicate::string_match(field, "help"));
}

#[test]
fn test_relation_fields() {
    assert!(StringField::Album.is_relation());
    assert!(StringField::Artist.is_relation());
    assert!(!StringField::Title.is_relation());
}

#[test]
fn test_default_expands_to_three_fields() {
    assert_eq!(
        compile_term("astley").unwrap(),
        Predicate::or(
            Predicate::or(
                Predicate::string_match(StringField::Title, "astley"),
                Predicate::string_match(StringField::Artist, "astley"),
            ),
            Predicate::string_match(StringField::Album, "astley"),
        )
    );
}

// ============================================================================
// Numeric fields
// ============================================================================

#[rstest]
#[case("y:1987", NumericField::Year, RangeValue::Exact(1987))]
#[case("y:1987-", NumericField::Year, RangeValue::AtLeast(1987))]
#[case("y:-1987", NumericField::Year, RangeValue::AtMost(1987))]
#[case("y:1980-1987", NumericField::Year, RangeValue::Between(1980, 1987))]
#[case("d:180-240", NumericField::Duration, RangeValue::Between(180, 240))]
#[case("b:320", NumericField::Bitrate, RangeValue::Exact(320))]
#[case("y:1990-1980", NumericField::Year, RangeValue::Between(1990, 1980))]
#[case(r#"y:"1987""#, NumericField::Year, RangeValue::Exact(1987))]
fn test_ranges(#[case] token: &str, #[case] field: NumericField, #[case] range: RangeValue) {
    assert_eq!(compile_term(token).unwrap(), Predicate::numeric_match(field, range));
}

#[rstest]
#[case("y:abcd")]
#[case("y:")]
#[case("y:-")]
#[case("y:19-87-")]
#[case("d:+5")]
#[case("b:3.5")]
fn test_bad_ranges_are_soft_failures(#[case] token: &str) {
    assert_eq!(compile_term(token).unwrap(), Predicate::Always(true));
}

// ============================================================================
// Flags and tags
// ============================================================================

#[rstest]
#[case("e:yes", true)]
#[case("e:true", true)]
#[case("e:1", true)]
#[case("e:no", false)]
#[case("e:false", false)]
#[case("e:0", false)]
#[case("e:No", false)]
fn test_explicit_flag(#[case] token: &str, #[case] value: bool) {
    assert_eq!(
        compile_term(token).unwrap(),
        Predicate::BooleanMatch {
            field: BooleanField::Explicit,
            value
        }
    );
}

#[test]
fn test_unknown_flag_is_soft_failure() {
    assert_eq!(compile_term("e:maybe").unwrap(), Predicate::Always(true));
}

#[test]
fn test_tags() {
    assert_eq!(compile_term("+pop").unwrap(), Predicate::tag(true, "pop"));
    assert_eq!(compile_term("-rock").unwrap(), Predicate::tag(false, "rock"));
}

#[test]
fn test_empty_tag_is_soft_failure() {
    assert_eq!(compile_term("+").unwrap(), Predicate::Always(true));
    assert_eq!(compile_term("-").unwrap(), Predicate::Always(true));
    assert_eq!(compile_term(r#"+"""#).unwrap(), Predicate::Always(true));
}

#[test]
fn test_group_term() {
    assert_eq!(
        compile_term("(+pop OR +rock)").unwrap(),
        Predicate::or(Predicate::tag(true, "pop"), Predicate::tag(true, "rock"))
    );
}
