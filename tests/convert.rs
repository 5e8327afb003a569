use std::{fs, path::Path};

use anyhow::Result;
use indicatif::ProgressBar;

use kindleparse::{
    clipping::Book, convert::convert_clippings_txt, error::ClippingError,
    renderer::CLIPPINGS_JSON_FILE_NAME,
};

static EXAMPLE_PATH: &str = "tests/resources/My Clippings - example.txt";

#[test]
fn test_convert_example_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("notes");

    let grouped = convert_clippings_txt(
        Path::new(EXAMPLE_PATH),
        &output,
        true,
        &ProgressBar::hidden(),
    )?;

    // ブックマークしか無い本は出力されない
    assert_eq!(grouped.len(), 3);

    let mut files = fs::read_dir(&output)?
        .map(|entry| -> Result<String> { Ok(entry?.file_name().to_string_lossy().into_owned()) })
        .collect::<Result<Vec<_>>>()?;
    files.sort();

    let mut expected = grouped
        .books()
        .map(|book: &Book| format!("{}.md", book))
        .chain([CLIPPINGS_JSON_FILE_NAME.to_owned()])
        .collect::<Vec<_>>();
    expected.sort();

    assert_eq!(files, expected);

    let markdown = fs::read_to_string(output.join("Anne Frank - Dziennik.md"))?;
    assert!(markdown.starts_with(
        "# Anne Frank - Dziennik\n\nFirst note: Wednesday, 3 February 2021 23:00:55\nLast note: Wednesday, 3 February 2021 23:05:01\n\n"
    ));

    Ok(())
}

#[test]
fn test_convert_malformed_first_record_writes_nothing() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("My Clippings.txt");
    fs::write(
        &input,
        "garbage\n==========\nT (A)\n- Your Note at location 1 | Added on X\n\nY\n==========\n",
    )?;
    let output = dir.path().join("notes");

    let err = convert_clippings_txt(&input, &output, true, &ProgressBar::hidden()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ClippingError>(),
        Some(ClippingError::MalformedRecord(_))
    ));
    assert!(!output.exists());

    Ok(())
}

#[test]
fn test_convert_into_existing_directory() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let grouped = convert_clippings_txt(
        Path::new(EXAMPLE_PATH),
        dir.path(),
        false,
        &ProgressBar::hidden(),
    )?;

    assert_eq!(fs::read_dir(dir.path())?.count(), grouped.len());

    Ok(())
}

#[test]
fn test_convert_output_is_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("notes.md");
    fs::write(&output, "")?;

    let err = convert_clippings_txt(Path::new(EXAMPLE_PATH), &output, false, &ProgressBar::hidden())
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ClippingError>(),
        Some(ClippingError::TargetNotDirectory(_))
    ));

    Ok(())
}
