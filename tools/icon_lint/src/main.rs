use anyhow::{anyhow, bail, Context, Result};
use mdi_codegen::{load_icon_catalog, DuplicatePolicy, GeneratedHeader, DEFAULT_INPUT_PATH};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    let mut input = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow!("--input requires a path"))?;
                input = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                eprintln!("usage: icon_lint [--input <path>]");
                return Ok(());
            }
            other => return Err(anyhow!("unknown argument: {other}")),
        }
    }
    let input = input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH));

    let icons = load_icon_catalog(&input)?;
    let header = GeneratedHeader::build(&icons, DuplicatePolicy::Allow)
        .with_context(|| format!("icon lint failed for {}", input.display()))?;
    for duplicate in &header.duplicates {
        println!("error {duplicate}");
    }
    println!("{}", header.summary());
    if !header.duplicates.is_empty() {
        bail!(
            "{} duplicate constant identifier(s) in {}",
            header.duplicates.len(),
            input.display()
        );
    }
    Ok(())
}
