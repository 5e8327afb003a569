use std::{fs, path::Path};

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tracing::info;

use crate::{
    clipping::Clipping,
    clippings_txt::parser::parse_clippings_file,
    grouper::{group_clippings, GroupedClippings},
    renderer::{write_books, write_clippings_json},
};

// "My Clippings.txt" から本ごとの markdown を書き出す
//
// 全件の解析が終わるまで出力先には触れない
// 途中の本で失敗した場合、それまでに書いたファイルは残る
pub fn convert_clippings_txt(
    input: &Path,
    output: &Path,
    json: bool,
    pb: &ProgressBar,
) -> Result<GroupedClippings> {
    let clippings = parse_clippings_file(input)?
        .collect::<Result<Vec<Clipping>>>()
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    info!("Parsed {} clippings", clippings.len());

    let grouped = group_clippings(clippings);

    if !output.exists() {
        fs::create_dir(output).with_context(|| {
            format!("Failed to create output directory: {}", output.display())
        })?;
    }

    write_books(&grouped, output, pb)?;

    if json {
        write_clippings_json(&grouped, output)?;
    }

    Ok(grouped)
}
