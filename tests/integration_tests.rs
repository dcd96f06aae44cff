use pretty_assertions::assert_eq;
use track_query::cli::{self, CheckOptions, CheckResult, CliError, OutputFormat, SearchOptions};
use track_query::{
    AccessPolicy, Catalog, Predicate, SearchError, SqlParam, SyntaxError, Track, TrackMatcher,
    build, to_sql, to_text, to_text_pretty,
};

fn track(
    id: u64,
    title: &str,
    artist: &str,
    album: &str,
    year: Option<u32>,
    tags: &[&str],
) -> Track {
    Track {
        id,
        title: title.to_string(),
        artists: vec![artist.to_string()],
        albums: vec![album.to_string()],
        tags: tags.iter().map(|t| t.to_string()).collect(),
        year,
        ..Default::default()
    }
}

fn catalog() -> Catalog {
    let mut never = track(
        1,
        "Never Gonna Give You Up",
        "Rick Astley",
        "Whenever You Need Somebody",
        Some(1987),
        &["pop", "80s"],
    );
    never.explicit = Some(false);
    never.duration = Some(213);
    never.bitrate = Some(320);

    let mut help = track(2, "Help!", "The Beatles", "Help!", Some(1965), &["rock", "Pop"]);
    help.duration = Some(139);

    let yesterday = track(3, "Yesterday", "The Beatles", "Help!", Some(1965), &["ballad"]);
    let unknown = track(4, "Untitled Demo", "Someone", "Demos", None, &["synthpop"]);

    Catalog::new(vec![never, help, yesterday, unknown])
}

fn ids(query: &str) -> Vec<u64> {
    ids_with(query, &AccessPolicy::default())
}

fn ids_with(query: &str, policy: &AccessPolicy) -> Vec<u64> {
    catalog()
        .search(query, policy)
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect()
}

// ============================================================================
// In-memory evaluation
// ============================================================================

#[test]
fn test_empty_query_returns_everything() {
    assert_eq!(ids(""), vec![1, 2, 3, 4]);
}

#[test]
fn test_substring_is_case_insensitive() {
    assert_eq!(ids("t:GONNA"), vec![1]);
    assert_eq!(ids("a:beatles"), vec![2, 3]);
    assert_eq!(ids("al:help"), vec![2, 3]);
}

#[test]
fn test_default_term_searches_three_fields() {
    assert_eq!(ids("astley"), vec![1]);
    assert_eq!(ids("help"), vec![2, 3]);
    assert_eq!(ids("demo"), vec![4]);
}

#[test]
fn test_missing_year_never_matches_a_range() {
    assert_eq!(ids("y:1900-"), vec![1, 2, 3]);
    assert_eq!(ids("y:-3000"), vec![1, 2, 3]);
    assert_eq!(ids("y:1965"), vec![2, 3]);
}

#[test]
fn test_duration_and_bitrate() {
    assert_eq!(ids("d:-200"), vec![2]);
    assert_eq!(ids("b:256-"), vec![1]);
}

#[test]
fn test_explicit_flag_requires_known_value() {
    assert_eq!(ids("e:no"), vec![1]);
    assert!(ids("e:yes").is_empty());
}

#[test]
fn test_tags_match_whole_name_ignoring_case() {
    assert_eq!(ids("+pop"), vec![1, 2]);
    assert_eq!(ids("-pop"), vec![3, 4]);
    assert_eq!(ids("+POP -rock"), vec![1]);
}

#[test]
fn test_or_and_groups() {
    assert_eq!(ids("t:yesterday OR t:never"), vec![1, 3]);
    assert_eq!(ids("a:beatles (t:help OR +ballad)"), vec![2, 3]);
    assert_eq!(ids("a:beatles t:help OR a:astley"), vec![1, 2]);
}

#[test]
fn test_soft_failure_does_not_filter() {
    assert_eq!(ids("y:abcd a:beatles"), vec![2, 3]);
}

#[test]
fn test_matcher_on_constants() {
    let t = Track::default();
    assert!(TrackMatcher::new(&t).matches(&Predicate::Always(true)));
    assert!(!TrackMatcher::new(&t).matches(&Predicate::Always(false)));
}

// ============================================================================
// Catalog boundary
// ============================================================================

#[test]
fn test_policy_blocks_tags_and_artists() {
    let policy = AccessPolicy {
        blocked_tags: vec!["rock".into()],
        blocked_artists: vec!["rick astley".into()],
    };
    assert_eq!(ids_with("", &policy), vec![3, 4]);
    assert_eq!(ids_with("a:beatles", &policy), vec![3]);
}

#[test]
fn test_policy_folds_unicode_case_for_artists_and_tags() {
    let catalog = Catalog::new(vec![
        track(1, "Hymne", "ÉDITH", "Live", None, &[]),
        track(2, "Nuit", "Someone", "Club", None, &["électro"]),
        track(3, "Jour", "Someone", "Club", None, &[]),
    ]);
    let policy = AccessPolicy {
        blocked_tags: vec!["ÉLECTRO".into()],
        blocked_artists: vec!["édith".into()],
    };
    let found: Vec<u64> = catalog
        .search("", &policy)
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(found, vec![3]);
}

#[test]
fn test_policy_predicate() {
    assert_eq!(AccessPolicy::default().predicate(), Predicate::Always(true));
    let policy = AccessPolicy {
        blocked_tags: vec!["a".into(), "b".into()],
        blocked_artists: vec![],
    };
    assert_eq!(
        policy.predicate(),
        Predicate::and(Predicate::tag(false, "a"), Predicate::tag(false, "b"))
    );
}

#[test]
fn test_invalid_syntax_is_rejected() {
    let err = catalog()
        .search(r#"a:"Rick"#, &AccessPolicy::default())
        .unwrap_err();
    assert_eq!(err, SearchError::InvalidSyntax(SyntaxError::UnbalancedQuotes));
    assert!(err.to_string().starts_with("invalid search syntax"));
}

#[test]
fn test_catalog_from_json() {
    let json = r#"[
        {"id": 7, "title": "Help!", "artists": ["The Beatles"], "year": 1965},
        {"id": 8, "title": "Intro"}
    ]"#;
    let catalog = Catalog::from_json(json).unwrap();
    assert_eq!(catalog.tracks.len(), 2);
    assert_eq!(catalog.tracks[1].year, None);

    let found = catalog.search("y:1960-1969", &AccessPolicy::default()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 7);
}

// ============================================================================
// SQL rendering
// ============================================================================

#[test]
fn test_sql_title_and_year() {
    let fragment = to_sql(&build("t:gonna y:1980-1987").unwrap());
    assert_eq!(
        fragment.sql,
        "(LOWER(track.title) LIKE ? ESCAPE '\\' \
         AND (track.year IS NOT NULL AND track.year >= ? AND track.year <= ?))"
    );
    assert_eq!(
        fragment.params,
        vec![
            SqlParam::Text("%gonna%".into()),
            SqlParam::Integer(1980),
            SqlParam::Integer(1987),
        ]
    );
}

#[test]
fn test_sql_relations_use_join_tables() {
    let fragment = to_sql(&build("a:Astley -rock").unwrap());
    assert_eq!(
        fragment.sql,
        "(track.id IN (SELECT track_artist.track_id FROM track_artist \
         JOIN artist ON artist.id = track_artist.artist_id \
         WHERE LOWER(artist.name) LIKE ? ESCAPE '\\') \
         AND track.id NOT IN (SELECT track_tag.track_id FROM track_tag \
         JOIN tag ON tag.id = track_tag.tag_id WHERE LOWER(tag.name) = ?))"
    );
    assert_eq!(
        fragment.params,
        vec![SqlParam::Text("%astley%".into()), SqlParam::Text("rock".into())]
    );
}

#[test]
fn test_sql_escapes_like_wildcards() {
    let fragment = to_sql(&build("t:100%_pure").unwrap());
    assert_eq!(fragment.params, vec![SqlParam::Text("%100\\%\\_pure%".into())]);
}

#[test]
fn test_sql_constants_and_flags() {
    assert_eq!(to_sql(&build("").unwrap()).sql, "1 = 1");
    let fragment = to_sql(&build("e:yes").unwrap());
    assert_eq!(fragment.sql, "track.explicit = ?");
    assert_eq!(fragment.params, vec![SqlParam::Boolean(true)]);
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn test_text_rendering() {
    let tree = build("t:a +pop OR y:-1990").unwrap();
    assert_eq!(to_text(&tree), r#"Or(And(Title~"a", +tag("pop")), Year<=1990)"#);
    assert_eq!(tree.to_string(), to_text(&tree));
    assert_eq!(
        to_text_pretty(&tree),
        "Or\n  And\n    Title~\"a\"\n    +tag(\"pop\")\n  Year<=1990"
    );
}

// ============================================================================
// CLI
// ============================================================================

#[test]
fn test_cli_check_formats() {
    let mut options = CheckOptions {
        query: "y:1987".into(),
        ..Default::default()
    };
    match cli::execute_check(&options).unwrap() {
        CheckResult::Compiled(out) => assert_eq!(out, "Year=1987"),
        other => panic!("unexpected {other:?}"),
    }

    options.format = OutputFormat::Json;
    match cli::execute_check(&options).unwrap() {
        CheckResult::Compiled(out) => {
            let value: serde_json::Value = serde_json::from_str(&out).unwrap();
            assert_eq!(value["NumericMatch"]["field"], "Year");
            assert_eq!(value["NumericMatch"]["range"]["Exact"], 1987);
        }
        other => panic!("unexpected {other:?}"),
    }

    options.syntax_only = true;
    assert!(matches!(cli::execute_check(&options).unwrap(), CheckResult::SyntaxValid));
}

#[test]
fn test_cli_check_rejects_bad_syntax() {
    let options = CheckOptions {
        query: "(t:a".into(),
        ..Default::default()
    };
    assert!(matches!(
        cli::execute_check(&options),
        Err(CliError::Syntax(SyntaxError::UnbalancedBrackets))
    ));
}

#[test]
fn test_cli_search() {
    let options = SearchOptions {
        query: "+pop".into(),
        input: Some(
            r#"[{"id": 1, "title": "A", "tags": ["pop"]}, {"id": 2, "title": "B"}]"#.into(),
        ),
        ..Default::default()
    };
    let out = cli::execute_search(&options).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["id"], 1);

    let missing = SearchOptions {
        query: "+pop".into(),
        ..Default::default()
    };
    assert!(matches!(cli::execute_search(&missing), Err(CliError::NoInput)));
}

#[test]
fn test_cli_sql() {
    let fragment = cli::execute_sql("b:320").unwrap();
    assert_eq!(fragment.sql, "track.bitrate = ?");
}
