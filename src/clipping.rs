use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Book {
    pub author: String, // 空文字列なら著者なし
    pub title: String,
}

impl Book {
    pub fn new(author: &str, title: &str) -> Self {
        Book {
            author: author.to_owned(),
            title: title.to_owned(),
        }
    }
}

// 出力ファイル名と見出しに使う
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.author.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{} - {}", self.author, self.title)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case", tag = "type", content = "token")]
pub enum ClippingType {
    Note,
    Highlight,
    Bookmark,

    // 描画時にエラーとする
    Unknown(String),
}

impl ClippingType {
    pub fn of(token: &str) -> Self {
        match token {
            "Note" => Self::Note,
            "Highlight" => Self::Highlight,
            "Bookmark" => Self::Bookmark,
            token => Self::Unknown(token.to_owned()),
        }
    }
}

impl fmt::Display for ClippingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClippingType::Note => write!(f, "Note"),
            ClippingType::Highlight => write!(f, "Highlight"),
            ClippingType::Bookmark => write!(f, "Bookmark"),
            ClippingType::Unknown(token) => write!(f, "{}", token),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub start: u32,
    pub end: u32,
}

impl Location {
    pub fn single(location: u32) -> Self {
        Location {
            start: location,
            end: location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Clipping {
    pub book: Book,
    pub clipping_type: ClippingType,
    pub timestamp: String, // "Tuesday, 5 May 2020 23:26:59" のまま
    pub content: String,
    pub location: Option<Location>,
    pub page: Option<u32>,
}
