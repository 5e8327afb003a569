use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressIterator};
use tracing::info;

use crate::{
    clipping::{Book, Clipping, ClippingType},
    error::ClippingError,
    grouper::{BookClippings, GroupedClippings},
};

pub static NOTES_HEADING: &str = "## Notes & Highlights from Kindle";

pub static CLIPPINGS_JSON_FILE_NAME: &str = "clippings.json";

// ノートは箇条書き、ハイライトは引用
pub fn render_clipping(clipping: &Clipping) -> Result<String> {
    match &clipping.clipping_type {
        ClippingType::Note => Ok(format!("- {}\n\n", clipping.content)),
        ClippingType::Highlight => Ok(format!("> {}\n\n", clipping.content)),
        clipping_type => {
            Err(ClippingError::UnknownAnnotationType(clipping_type.to_string()).into())
        }
    }
}

// 日時は並べ替えず、現れた順の最初と最後
pub fn render_book(book_clippings: &BookClippings) -> Result<String> {
    let BookClippings { book, clippings } = book_clippings;

    let first = clippings
        .first()
        .with_context(|| format!("No clippings for {}", book))?;
    let last = clippings.last().unwrap_or(first);

    let mut markdown = String::new();
    writeln!(markdown, "# {}\n", book)?;
    writeln!(markdown, "First note: {}", first.timestamp)?;
    writeln!(markdown, "Last note: {}\n", last.timestamp)?;
    writeln!(markdown, "{}\n", NOTES_HEADING)?;

    for clipping in clippings {
        markdown.push_str(&render_clipping(clipping)?);
    }

    Ok(markdown)
}

pub fn markdown_file_name(book: &Book) -> String {
    format!("{}.md", book)
}

pub fn ensure_target_directory(target: &Path) -> Result<()> {
    if !target.is_dir() {
        return Err(ClippingError::TargetNotDirectory(target.to_owned()).into());
    }
    Ok(())
}

// 書き込む前に全体を描画するので、途中で失敗しても中途半端なファイルは残らない
pub fn write_book(book_clippings: &BookClippings, target: &Path) -> Result<PathBuf> {
    let markdown = render_book(book_clippings)
        .with_context(|| format!("Failed to render {}", book_clippings.book))?;

    let path = target.join(markdown_file_name(&book_clippings.book));
    fs::write(&path, markdown).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

pub fn write_books(
    grouped: &GroupedClippings,
    target: &Path,
    pb: &ProgressBar,
) -> Result<Vec<PathBuf>> {
    ensure_target_directory(target)?;

    pb.set_length(grouped.len() as u64);

    let paths = grouped
        .iter()
        .progress_with(pb.clone())
        .map(|book_clippings| write_book(book_clippings, target))
        .collect::<Result<Vec<_>>>()?;

    pb.finish();

    info!("Wrote {} books to {}", paths.len(), target.display());

    Ok(paths)
}

pub fn write_clippings_json(grouped: &GroupedClippings, target: &Path) -> Result<PathBuf> {
    ensure_target_directory(target)?;

    let path = target.join(CLIPPINGS_JSON_FILE_NAME);
    fs::write(&path, serde_json::to_string_pretty(grouped.as_slice())?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
