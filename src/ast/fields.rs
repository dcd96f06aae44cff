use serde::Serialize;

/// Every prefix the query language recognises.
///
/// The surface spelling is part of the language and must not change:
/// `t:`, `al:`, `a:`, `y:`, `e:`, `d:`, `b:`, a leading `+` / `-` for tags,
/// and no prefix at all for the default multi-field search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldPrefix {
    /// `t:`
    Title,
    /// `al:`
    Album,
    /// `a:`
    Artist,
    /// `y:`
    Year,
    /// `e:`
    Explicit,
    /// `d:`
    Duration,
    /// `b:`
    Bitrate,
    /// Leading `+`
    TagInclude,
    /// Leading `-`
    TagExclude,
    /// No prefix
    Default,
}

impl FieldPrefix {
    /// Resolve the text before a `:` into a prefix.
    ///
    /// Only the colon-style prefixes are returned here; tags and the default
    /// search are recognised by the classifier from the token shape.
    ///
    /// ```
    /// use track_query::ast::FieldPrefix;
    ///
    /// assert_eq!(FieldPrefix::from_prefix("al"), Some(FieldPrefix::Album));
    /// assert_eq!(FieldPrefix::from_prefix("AL"), None);
    /// ```
    pub fn from_prefix(s: &str) -> Option<Self> {
        match s {
            "t" => Some(Self::Title),
            "al" => Some(Self::Album),
            "a" => Some(Self::Artist),
            "y" => Some(Self::Year),
            "e" => Some(Self::Explicit),
            "d" => Some(Self::Duration),
            "b" => Some(Self::Bitrate),
            _ => None,
        }
    }

    /// The field a colon-style prefix filters on; `None` for tags and the
    /// default search.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Title => Some(Field::Text(StringField::Title)),
            Self::Album => Some(Field::Text(StringField::Album)),
            Self::Artist => Some(Field::Text(StringField::Artist)),
            Self::Year => Some(Field::Numeric(NumericField::Year)),
            Self::Duration => Some(Field::Numeric(NumericField::Duration)),
            Self::Bitrate => Some(Field::Numeric(NumericField::Bitrate)),
            Self::Explicit => Some(Field::Flag(BooleanField::Explicit)),
            Self::TagInclude | Self::TagExclude | Self::Default => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "t",
            Self::Album => "al",
            Self::Artist => "a",
            Self::Year => "y",
            Self::Explicit => "e",
            Self::Duration => "d",
            Self::Bitrate => "b",
            Self::TagInclude => "+",
            Self::TagExclude => "-",
            Self::Default => "",
        }
    }
}

/// The field a `prefix:value` term filters on.
///
/// Unlike [`FieldPrefix`], this only covers the colon-style prefixes, so a
/// field term can never name a tag directive or the default search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    Text(StringField),
    Numeric(NumericField),
    Flag(BooleanField),
}

impl Field {
    /// ```
    /// use track_query::ast::{Field, NumericField};
    ///
    /// assert_eq!(Field::from_prefix("y"), Some(Field::Numeric(NumericField::Year)));
    /// assert_eq!(Field::from_prefix("+"), None);
    /// ```
    pub fn from_prefix(s: &str) -> Option<Self> {
        FieldPrefix::from_prefix(s)?.field()
    }

    pub fn prefix(&self) -> FieldPrefix {
        match self {
            Self::Text(StringField::Title) => FieldPrefix::Title,
            Self::Text(StringField::Album) => FieldPrefix::Album,
            Self::Text(StringField::Artist) => FieldPrefix::Artist,
            Self::Numeric(NumericField::Year) => FieldPrefix::Year,
            Self::Numeric(NumericField::Duration) => FieldPrefix::Duration,
            Self::Numeric(NumericField::Bitrate) => FieldPrefix::Bitrate,
            Self::Flag(BooleanField::Explicit) => FieldPrefix::Explicit,
        }
    }
}

/// Text fields matched by case-insensitive substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StringField {
    Title,
    Album,
    Artist,
}

impl StringField {
    /// Album and artist live in their own tables and are reached through a
    /// join table; title is a column on the track row.
    pub fn is_relation(&self) -> bool {
        matches!(self, Self::Album | Self::Artist)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Album => "Album",
            Self::Artist => "Artist",
        }
    }
}

/// Numeric fields matched by exact value or range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NumericField {
    /// Release year
    Year,
    /// Length in seconds
    Duration,
    /// Bitrate in kbps
    Bitrate,
}

impl NumericField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Duration => "Duration",
            Self::Bitrate => "Bitrate",
        }
    }
}

/// Boolean flags on a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BooleanField {
    Explicit,
}

impl BooleanField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Explicit => "Explicit",
        }
    }
}
