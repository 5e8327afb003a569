use std::path::Path;

use anyhow::{ensure, Context, Result};
use tracing::debug;

use crate::{
    clipping::{Book, Clipping, ClippingType, Location},
    clippings_txt::{
        pattern::{match_clipping, RawClipping, RawLocation},
        splitter::{
            is_record, normalize_clippings_txt, read_clippings_txt, split_clippings_txt,
            CLIPPING_SEPARATOR,
        },
    },
    error::ClippingError,
};

// 正規化済みの "My Clippings.txt" 全体
pub struct ClippingsTxt {
    txt: String,
}

impl ClippingsTxt {
    pub fn open(path: &Path) -> Result<Self> {
        let txt = read_clippings_txt(path)?;
        Ok(ClippingsTxt { txt })
    }

    pub fn new(txt: &str) -> Self {
        ClippingsTxt {
            txt: normalize_clippings_txt(txt),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.txt
    }

    // 呼ぶたびに先頭からやり直す
    pub fn records(&self) -> impl Iterator<Item = &str> {
        split_clippings_txt(&self.txt)
    }

    pub fn clippings(&self) -> impl Iterator<Item = Result<Clipping>> + '_ {
        self.records().map(parse_clipping)
    }

    pub fn into_clippings(self) -> IntoClippings {
        IntoClippings {
            txt: self.txt,
            offset: 0,
        }
    }
}

// 本文を所有したまま 1 件ずつ解析する
pub struct IntoClippings {
    txt: String,
    offset: usize,
}

impl Iterator for IntoClippings {
    type Item = Result<Clipping>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.offset <= self.txt.len() {
            let rest = &self.txt[self.offset..];
            let (record, consumed) = match rest.find(CLIPPING_SEPARATOR) {
                Some(i) => (&rest[..i], i + CLIPPING_SEPARATOR.len()),
                None => (rest, rest.len() + 1),
            };
            self.offset += consumed;

            if is_record(record) {
                return Some(parse_clipping(record));
            }
        }

        None
    }
}

// 読み込み・分割・解析をまとめて行う
pub fn parse_clippings_file(path: &Path) -> Result<IntoClippings> {
    Ok(ClippingsTxt::open(path)?.into_clippings())
}

// 1 件分の文字列を Clipping にする
// どのパターンにも一致しなければエラー
pub fn parse_clipping(record: &str) -> Result<Clipping> {
    let raw = match_clipping(record)?;

    let clipping = build_clipping(&raw)
        .with_context(|| ClippingError::MalformedRecord(record.to_owned()))?;

    debug!(
        "Matched {:?}: {} ({})",
        raw.kind, clipping.book, clipping.clipping_type
    );

    Ok(clipping)
}

pub fn build_clipping(raw: &RawClipping) -> Result<Clipping> {
    let title = raw.title.trim();
    ensure!(!title.is_empty(), "Title is empty");

    let author = raw.author.map(str::trim).unwrap_or_default();

    let location = match raw.location {
        Some(RawLocation::Single(location)) => {
            Some(Location::single(parse_number(location, "location")?))
        }
        Some(RawLocation::Range(start, end)) => Some(Location {
            start: parse_number(start, "location start")?,
            end: parse_number(end, "location end")?,
        }),
        None => None,
    };

    let page = match raw.page {
        Some(page) => Some(parse_number(page, "page")?),
        None => None,
    };

    Ok(Clipping {
        book: Book::new(author, title),
        clipping_type: ClippingType::of(raw.clipping_type),
        timestamp: raw.timestamp.to_owned(),
        content: raw.content.to_owned(),
        location,
        page,
    })
}

fn parse_number(s: &str, name: &str) -> Result<u32> {
    s.parse()
        .with_context(|| format!("Invalid {}: {:?}", name, s))
}
