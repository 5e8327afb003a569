use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;

use kindleparse::convert::convert_clippings_txt;

static DESCRIPTION: &str = "kindleparse parses clippings from Kindle's `My Clippings.txt` into manageable markdown files.

Usage:
    kindleparse [options] <input_file> <output_dir>

Example:
    kindleparse \"My Clippings.txt\" some_directory";

struct Args {
    input_path: String,
    output_path: String,
    json: bool,
}

fn get_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optflag("j", "json", "also write every parsed clipping to clippings.json");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!("{}\n\n{}", f, opts.usage(DESCRIPTION)),
    };

    if matches.opt_present("h") {
        println!("{}", opts.usage(DESCRIPTION));
        return Ok(None);
    }

    let [input_path, output_path] = match matches.free.as_slice() {
        [input_path, output_path] => [input_path.clone(), output_path.clone()],
        _ => bail!("{}", opts.usage(DESCRIPTION)),
    };

    Ok(Some(Args {
        input_path,
        output_path,
        json: matches.opt_present("j"),
    }))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = get_args()? else {
        return Ok(());
    };

    let input_path = PathBuf::from(&args.input_path);
    let output_path = PathBuf::from(&args.output_path);

    println!("Processing {}...", input_path.display());

    let pb = create_progress_bar(0);
    let grouped = convert_clippings_txt(&input_path, &output_path, args.json, &pb)?;

    println!("Wrote {} books to {}", grouped.len(), output_path.display());
    println!("Finished.");

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
