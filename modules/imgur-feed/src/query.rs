use std::fmt;
use std::str::FromStr;

use crate::error::FeedError;

/// The four ways to query Imgur, one variant per upstream endpoint shape.
/// Construction guarantees every required parameter is present, so the
/// router can dispatch exhaustively with no runtime mode checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    /// Newest submissions of one account.
    User { username: String },
    /// Gallery filtered by a tag.
    Tag { tag: String },
    /// A curated gallery section. All three parameters are required; there
    /// is no defaulting here.
    Gallery {
        section: GallerySection,
        sort: GallerySort,
        window: GalleryWindow,
    },
    /// Platform-wide top-comments leaderboard.
    Leaderboard,
}

/// Raw request parameters as a caller (CLI flag, query string) supplies
/// them, before the mode decides which ones matter.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    pub username: Option<String>,
    pub tag: Option<String>,
    pub section: Option<String>,
    pub sort: Option<String>,
    pub window: Option<String>,
}

impl QueryMode {
    /// Build a query from a raw mode string and its parameters. This is the
    /// single boundary where an unrecognized mode or a missing parameter can
    /// surface; past it, the type system carries the proof.
    pub fn from_request(mode: &str, params: &RequestParams) -> Result<Self, FeedError> {
        match mode.to_ascii_lowercase().as_str() {
            "user" => Ok(QueryMode::User {
                username: required(&params.username, "username", "user")?,
            }),
            "tag" => Ok(QueryMode::Tag {
                tag: required(&params.tag, "tag", "tag")?,
            }),
            "gallery" => Ok(QueryMode::Gallery {
                section: required(&params.section, "section", "gallery")?.parse()?,
                sort: required(&params.sort, "sort", "gallery")?.parse()?,
                window: required(&params.window, "window", "gallery")?.parse()?,
            }),
            "leaderboard" => Ok(QueryMode::Leaderboard),
            _ => Err(FeedError::InvalidQueryMode(mode.to_string())),
        }
    }
}

fn required(value: &Option<String>, name: &str, mode: &str) -> Result<String, FeedError> {
    value
        .clone()
        .ok_or_else(|| FeedError::InvalidParameter(format!("{name} is required in {mode} mode")))
}

impl fmt::Display for QueryMode {
    /// Human-readable feed title for the query.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryMode::User { username } => write!(f, "{username}"),
            QueryMode::Tag { tag } => write!(f, "tag: {tag}"),
            QueryMode::Gallery {
                section,
                sort,
                window,
            } => write!(
                f,
                "gallery: {}/{}/{}",
                section.as_str(),
                sort.as_str(),
                window.as_str()
            ),
            QueryMode::Leaderboard => write!(f, "Leaderboard"),
        }
    }
}

/// Curated gallery section. The value set is fixed upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GallerySection {
    Hot,
    Top,
    User,
}

impl GallerySection {
    pub fn as_str(&self) -> &'static str {
        match self {
            GallerySection::Hot => "hot",
            GallerySection::Top => "top",
            GallerySection::User => "user",
        }
    }
}

impl FromStr for GallerySection {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hot" => Ok(GallerySection::Hot),
            "top" => Ok(GallerySection::Top),
            "user" => Ok(GallerySection::User),
            _ => Err(FeedError::InvalidParameter(format!(
                "unknown gallery section: {s:?}"
            ))),
        }
    }
}

/// Sort order within a gallery section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GallerySort {
    Viral,
    Top,
    Time,
    Rising,
}

impl GallerySort {
    pub fn as_str(&self) -> &'static str {
        match self {
            GallerySort::Viral => "viral",
            GallerySort::Top => "top",
            GallerySort::Time => "time",
            GallerySort::Rising => "rising",
        }
    }
}

impl FromStr for GallerySort {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "viral" => Ok(GallerySort::Viral),
            "top" => Ok(GallerySort::Top),
            "time" => Ok(GallerySort::Time),
            "rising" => Ok(GallerySort::Rising),
            _ => Err(FeedError::InvalidParameter(format!(
                "unknown gallery sort: {s:?}"
            ))),
        }
    }
}

/// Time window for sorted gallery queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryWindow {
    Day,
    Week,
    Month,
    Year,
    All,
}

impl GalleryWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryWindow::Day => "day",
            GalleryWindow::Week => "week",
            GalleryWindow::Month => "month",
            GalleryWindow::Year => "year",
            GalleryWindow::All => "all",
        }
    }
}

impl FromStr for GalleryWindow {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(GalleryWindow::Day),
            "week" => Ok(GalleryWindow::Week),
            "month" => Ok(GalleryWindow::Month),
            "year" => Ok(GalleryWindow::Year),
            "all" => Ok(GalleryWindow::All),
            _ => Err(FeedError::InvalidParameter(format!(
                "unknown gallery window: {s:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_mode_requires_username() {
        let params = RequestParams {
            username: Some("Sarah".to_string()),
            ..Default::default()
        };
        let mode = QueryMode::from_request("user", &params).unwrap();
        assert_eq!(
            mode,
            QueryMode::User {
                username: "Sarah".to_string()
            }
        );

        let err = QueryMode::from_request("user", &RequestParams::default()).unwrap_err();
        assert!(matches!(err, FeedError::InvalidParameter(_)));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = QueryMode::from_request("Bogus", &RequestParams::default()).unwrap_err();
        match err {
            FeedError::InvalidQueryMode(mode) => assert_eq!(mode, "Bogus"),
            other => panic!("expected InvalidQueryMode, got {other:?}"),
        }
    }

    #[test]
    fn gallery_mode_parses_all_three_params() {
        let params = RequestParams {
            section: Some("hot".to_string()),
            sort: Some("viral".to_string()),
            window: Some("day".to_string()),
            ..Default::default()
        };
        let mode = QueryMode::from_request("gallery", &params).unwrap();
        assert_eq!(
            mode,
            QueryMode::Gallery {
                section: GallerySection::Hot,
                sort: GallerySort::Viral,
                window: GalleryWindow::Day,
            }
        );
        assert_eq!(mode.to_string(), "gallery: hot/viral/day");
    }

    #[test]
    fn gallery_mode_rejects_unknown_values() {
        let params = RequestParams {
            section: Some("hot".to_string()),
            sort: Some("sideways".to_string()),
            window: Some("day".to_string()),
            ..Default::default()
        };
        let err = QueryMode::from_request("gallery", &params).unwrap_err();
        assert!(matches!(err, FeedError::InvalidParameter(_)));
    }

    #[test]
    fn mode_string_is_case_insensitive() {
        let params = RequestParams {
            tag: Some("movies_and_tv".to_string()),
            ..Default::default()
        };
        let mode = QueryMode::from_request("Tag", &params).unwrap();
        assert_eq!(mode.to_string(), "tag: movies_and_tv");
    }
}
