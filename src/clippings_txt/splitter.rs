use std::{fs, path::Path};

use anyhow::{ensure, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::error::ClippingError;

pub static CLIPPING_SEPARATOR: &str = "==========";

// ファイル全体を読み込み、正規化まで済ませる
pub fn read_clippings_txt(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| ClippingError::Decode {
        path: path.to_owned(),
    })?;

    // BOM があれば取り除かれる
    let (txt, _, had_errors) = encoding_rs::UTF_8.decode(&bytes);
    ensure!(
        !had_errors,
        ClippingError::Decode {
            path: path.to_owned()
        }
    );

    Ok(normalize_clippings_txt(&txt))
}

// 本によって正規化が揃っていないので NFKD に寄せる
pub fn normalize_clippings_txt(txt: &str) -> String {
    // CR+LF のファイルもある
    static REGEX_NEW_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r").unwrap());

    let txt = txt.nfkd().collect::<String>().replace('\u{feff}', "");

    REGEX_NEW_LINE.replace_all(txt.trim(), "\n").into_owned()
}

// 区切り行で分割する
// 空の断片（末尾の区切りの後など）は飛ばす
pub fn split_clippings_txt(txt: &str) -> impl Iterator<Item = &str> {
    txt.split(CLIPPING_SEPARATOR).filter(|record| is_record(record))
}

pub(crate) fn is_record(record: &str) -> bool {
    if record.trim().is_empty() {
        if !record.is_empty() {
            debug!("Skipping blank record between separators");
        }
        return false;
    }
    true
}
