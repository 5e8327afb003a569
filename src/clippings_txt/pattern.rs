use anyhow::Result;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::ClippingError;

// ファームウェアごとの書式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClippingPatternKind {
    // Title (Author)
    // - Your Highlight at location 6-6 | Added on ...
    AuthorLocation,

    // Title (Author)
    // - Your Highlight on page 128 | location 1950-1956 | Added on ...
    AuthorPageLocation,

    // Title
    // - Your Note on page 1 | Added on ...
    Page,

    // Title
    // - Your Highlight on page 1-1 | Added on ...
    // ページの終わりは捨てる
    PageRange,
}

// 先に一致したものを採用するので順番を変えてはいけない
pub const PATTERN_PRIORITY: [ClippingPatternKind; 4] = [
    ClippingPatternKind::AuthorLocation,
    ClippingPatternKind::AuthorPageLocation,
    ClippingPatternKind::Page,
    ClippingPatternKind::PageRange,
];

impl ClippingPatternKind {
    fn source(self) -> &'static str {
        // ブックマークは本文が無く、ファイル末尾では空行ごと消えている
        // 本文を省略できるのはヘッダーで終わる場合だけ
        match self {
            Self::AuthorLocation => concat!(
                r"(?P<title>.*) \((?P<author>.*)\)\n",
                r"- Your (?P<type>\w+) at location ",
                r"(?:(?P<location_start>\d+)-(?P<location_end>\d+)|(?P<location>\d+))",
                r" \| Added on (?P<timestamp>.*)",
                r"(?:\n\n(?P<content>.*)|\n*$)",
            ),
            Self::AuthorPageLocation => concat!(
                r"(?P<title>.*) \((?P<author>.*)\)\n",
                r"- Your (?P<type>\w+) on page (?P<page>\d+) \| location ",
                r"(?:(?P<location_start>\d+)-(?P<location_end>\d+)|(?P<location>\d+))",
                r" \| Added on (?P<timestamp>.*)",
                r"(?:\n\n(?P<content>.*)|\n*$)",
            ),
            Self::Page => concat!(
                r"(?P<title>.*)\n",
                r"- Your (?P<type>\w+) on page (?P<page>\d+)",
                r" \| Added on (?P<timestamp>.*)",
                r"(?:\n\n(?P<content>.*)|\n*$)",
            ),
            Self::PageRange => concat!(
                r"(?P<title>.*)\n",
                r"- Your (?P<type>\w+) on page (?P<page>\d+)-\d+",
                r" \| Added on (?P<timestamp>.*)",
                r"(?:\n\n(?P<content>.*)|\n*$)",
            ),
        }
    }

    fn regex(self) -> &'static Regex {
        static REGEX_AUTHOR_LOCATION: Lazy<Regex> =
            Lazy::new(|| Regex::new(ClippingPatternKind::AuthorLocation.source()).unwrap());
        static REGEX_AUTHOR_PAGE_LOCATION: Lazy<Regex> =
            Lazy::new(|| Regex::new(ClippingPatternKind::AuthorPageLocation.source()).unwrap());
        static REGEX_PAGE: Lazy<Regex> =
            Lazy::new(|| Regex::new(ClippingPatternKind::Page.source()).unwrap());
        static REGEX_PAGE_RANGE: Lazy<Regex> =
            Lazy::new(|| Regex::new(ClippingPatternKind::PageRange.source()).unwrap());

        match self {
            Self::AuthorLocation => &*REGEX_AUTHOR_LOCATION,
            Self::AuthorPageLocation => &*REGEX_AUTHOR_PAGE_LOCATION,
            Self::Page => &*REGEX_PAGE,
            Self::PageRange => &*REGEX_PAGE_RANGE,
        }
    }

    pub fn is_match(self, record: &str) -> bool {
        self.regex().is_match(record)
    }

    pub fn captures(self, record: &str) -> Option<RawClipping<'_>> {
        self.regex()
            .captures(record)
            .map(|captures| RawClipping::from_captures(self, &captures))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawLocation<'a> {
    Single(&'a str),
    Range(&'a str, &'a str),
}

// パターンから取り出したままの文字列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawClipping<'a> {
    pub kind: ClippingPatternKind,
    pub title: &'a str,
    pub author: Option<&'a str>,
    pub clipping_type: &'a str,
    pub page: Option<&'a str>,
    pub location: Option<RawLocation<'a>>, // パターンに location が無ければ None
    pub timestamp: &'a str,
    pub content: &'a str,
}

impl<'a> RawClipping<'a> {
    fn from_captures(kind: ClippingPatternKind, captures: &Captures<'a>) -> Self {
        let group = |name: &str| captures.name(name).map(|m| m.as_str());

        let location = match (
            group("location"),
            group("location_start"),
            group("location_end"),
        ) {
            (Some(location), _, _) => Some(RawLocation::Single(location)),
            (None, Some(start), Some(end)) => Some(RawLocation::Range(start, end)),
            _ => None,
        };

        RawClipping {
            kind,
            title: group("title").unwrap_or_default(),
            author: group("author"),
            clipping_type: group("type").unwrap_or_default(),
            page: group("page"),
            location,
            timestamp: group("timestamp").unwrap_or_default(),
            content: group("content").unwrap_or_default(),
        }
    }
}

// 優先順に試し、最初に一致したものを返す
pub fn match_clipping(record: &str) -> Result<RawClipping<'_>> {
    for kind in PATTERN_PRIORITY {
        if let Some(raw) = kind.captures(record) {
            return Ok(raw);
        }
    }

    Err(ClippingError::MalformedRecord(record.to_owned()).into())
}
