use crate::{
    adapter::{FilterBackend, translate},
    ast::{BooleanField, NumericField, Predicate, RangeValue, StringField},
    catalog::Track,
};

/// Evaluates predicates against a single in-memory track.
///
/// # Examples
///
/// ```
/// use track_query::{build, catalog::Track, evaluator::TrackMatcher};
///
/// let track = Track {
///     id: 1,
///     title: "Never Gonna Give You Up".into(),
///     artists: vec!["Rick Astley".into()],
///     year: Some(1987),
///     ..Default::default()
/// };
///
/// let query = build(r#"a:astley y:1980-1987"#).unwrap();
/// assert!(TrackMatcher::new(&track).matches(&query));
/// ```
pub struct TrackMatcher<'a> {
    track: &'a Track,
}

impl<'a> TrackMatcher<'a> {
    pub fn new(track: &'a Track) -> Self {
        TrackMatcher { track }
    }

    pub fn matches(&mut self, predicate: &Predicate) -> bool {
        translate(predicate, self)
    }

    fn numeric_value(&self, field: NumericField) -> Option<u32> {
        match field {
            NumericField::Year => self.track.year,
            NumericField::Duration => self.track.duration,
            NumericField::Bitrate => self.track.bitrate,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl FilterBackend for TrackMatcher<'_> {
    type Filter = bool;

    fn constant(&mut self, value: bool) -> bool {
        value
    }

    fn string_match(&mut self, field: StringField, substring: &str) -> bool {
        match field {
            StringField::Title => contains_ignore_case(&self.track.title, substring),
            StringField::Album => self
                .track
                .albums
                .iter()
                .any(|album| contains_ignore_case(album, substring)),
            StringField::Artist => self
                .track
                .artists
                .iter()
                .any(|artist| contains_ignore_case(artist, substring)),
        }
    }

    fn numeric_match(&mut self, field: NumericField, range: RangeValue) -> bool {
        self.numeric_value(field).is_some_and(|n| range.contains(n))
    }

    fn boolean_match(&mut self, field: BooleanField, value: bool) -> bool {
        match field {
            BooleanField::Explicit => self.track.explicit == Some(value),
        }
    }

    fn tag_membership(&mut self, included: bool, tag_name: &str) -> bool {
        let tagged = self
            .track
            .tags
            .iter()
            .any(|tag| tag.to_lowercase() == tag_name.to_lowercase());
        tagged == included
    }

    fn and(&mut self, left: bool, right: bool) -> bool {
        left && right
    }

    fn or(&mut self, left: bool, right: bool) -> bool {
        left || right
    }
}
