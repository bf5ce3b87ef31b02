use anyhow::{Context, Result};
use clap::Parser;
use markdown_doc_ops_config::BackendProfile;
use markdown_doc_ops_engine::{BatchUpdate, DEFAULT_START_INDEX, MarkdownConverter};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

/// Convert Markdown into a JSON batch update of document edit operations.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "markdown-doc-ops-cli", version)]
struct Args {
    /// Markdown file to read; stdin when omitted or "-"
    file: Option<PathBuf>,

    /// Document index the first inserted character lands at
    #[arg(long, default_value_t = DEFAULT_START_INDEX)]
    start_index: usize,

    /// Backend profile to use instead of the default config file
    #[arg(long = "profile", value_name = "PATH")]
    profile_path: Option<PathBuf>,

    /// Print the batch update on a single line
    #[arg(long)]
    compact: bool,
}

impl Args {
    fn input(&self) -> Input {
        match &self.file {
            Some(path) if path != Path::new("-") => Input::File(path.clone()),
            _ => Input::Stdin,
        }
    }
}

/// An explicit profile must exist; the default one falls back to the
/// reference backend when missing.
fn load_profile(profile_path: Option<&Path>) -> Result<BackendProfile> {
    match profile_path {
        Some(path) => BackendProfile::load_from_path(path)?
            .with_context(|| format!("profile '{}' not found", path.display())),
        None => match BackendProfile::load()? {
            Some(profile) => {
                log::info!(
                    "using profile from {}",
                    BackendProfile::config_path().display()
                );
                Ok(profile)
            }
            None => Ok(BackendProfile::default()),
        },
    }
}

fn read_input(input: &Input) -> Result<String> {
    match input {
        Input::Stdin => {
            let mut markdown = String::new();
            io::stdin()
                .read_to_string(&mut markdown)
                .context("failed to read stdin")?;
            Ok(markdown)
        }
        Input::File(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
    }
}

fn run(args: &Args) -> Result<String> {
    let profile = load_profile(args.profile_path.as_deref())?;
    let markdown = read_input(&args.input())?;

    let converter = MarkdownConverter::new(profile);
    let converted = converter.convert_document(&markdown, args.start_index)?;
    log::info!(
        "{} operations, content ends at index {}",
        converted.operations.len(),
        converted.end_index
    );

    let body = BatchUpdate::from_operations(&converted.operations);
    Ok(body.to_json(!args.compact)?)
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    fn parse(list: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("markdown-doc-ops-cli").chain(list.iter().copied()))
    }

    #[test]
    fn defaults_read_stdin_from_index_one() {
        let parsed = parse(&[]).unwrap();
        assert_eq!(
            parsed,
            Args {
                file: None,
                start_index: 1,
                profile_path: None,
                compact: false,
            }
        );
        assert_eq!(parsed.input(), Input::Stdin);
    }

    #[test]
    fn dash_reads_stdin() {
        assert_eq!(parse(&["-"]).unwrap().input(), Input::Stdin);
    }

    #[test]
    fn all_options() {
        let parsed = parse(&[
            "notes.md",
            "--start-index",
            "42",
            "--profile",
            "p.toml",
            "--compact",
        ])
        .unwrap();
        assert_eq!(
            parsed,
            Args {
                file: Some(PathBuf::from("notes.md")),
                start_index: 42,
                profile_path: Some(PathBuf::from("p.toml")),
                compact: true,
            }
        );
        assert_eq!(parsed.input(), Input::File(PathBuf::from("notes.md")));
    }

    #[rstest]
    #[case(&["--start-index"])]
    #[case(&["--start-index", "x"])]
    #[case(&["--profile"])]
    #[case(&["--verbose"])]
    #[case(&["a.md", "b.md"])]
    fn bad_arguments_are_rejected(#[case] list: &[&str]) {
        assert!(parse(list).is_err());
    }

    #[test]
    fn converts_file_to_compact_batch_update() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "# Hi").unwrap();

        let json = run(&Args {
            file: Some(path),
            start_index: 1,
            profile_path: None,
            compact: true,
        })
        .unwrap();

        assert_eq!(
            json,
            r#"{"requests":[{"insertText":{"location":{"index":1},"text":"Hi\n"}},{"updateParagraphStyle":{"range":{"startIndex":1,"endIndex":3},"paragraphStyle":{"namedStyleType":"HEADING_1"},"fields":"namedStyleType"}}]}"#
        );
    }

    #[test]
    fn missing_explicit_profile_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_profile(Some(missing.as_path())).is_err());
    }

    #[test]
    fn explicit_profile_is_used() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.toml");
        fs::write(&path, "[table]\ncell_offset = 5\n").unwrap();

        let profile = load_profile(Some(path.as_path())).unwrap();
        assert_eq!(profile.table.cell_offset, 5);
    }
}
