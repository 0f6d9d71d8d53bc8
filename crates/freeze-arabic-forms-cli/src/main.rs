use anyhow::{Context, Result};
use clap::Parser;
use freeze_arabic_forms_config::Config;
use freeze_arabic_forms_engine::{FreezeOptions, FreezeReport, default_output_path, freeze_file};
use std::path::{Path, PathBuf};
use std::process;

mod clap_config;

use clap_config::CLIArgs;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CLIArgs::parse();
    log::debug!("{args:?}");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let result = Config::load()
        .with_context(|| format!("Failed to load config file {}", config_path.display()))
        .and_then(|config| run(&args, &config));

    match result {
        Ok((output, report)) => {
            log::info!(
                "{} lines, {} joining letters, {} join marks, {} separator marks",
                report.lines,
                report.joining_letters,
                report.join_marks,
                report.separator_marks
            );
            print!("{}", status_message(&args.filename, &output));
        }
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Freeze the input file named on the command line. Returns where the output
/// went along with the counts.
fn run(args: &CLIArgs, config: &Config) -> Result<(PathBuf, FreezeReport)> {
    let output = resolve_output(args, config);
    log::info!("Freezing {} into {}", args.filename.display(), output.display());

    let options = FreezeOptions {
        write_bom: config.write_bom,
    };
    let report = freeze_file(&args.filename, &output, &options)
        .with_context(|| format!("Failed to process \"{}\"", args.filename.display()))?;

    Ok((output, report))
}

fn resolve_output(args: &CLIArgs, config: &Config) -> PathBuf {
    match &args.output {
        Some(output) => output.clone(),
        None => default_output_path(&args.filename, &config.output_suffix),
    }
}

fn status_message(input: &Path, output: &Path) -> String {
    format!(
        "\nFreezeArabicForms has processed the file \"{}\".\n\
         All of the Arabic script letters were frozen to their Arabic Presentation Forms.\n\
         The resulting text was written to \"{}\".\n",
        input.display(),
        output.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn args(filename: &Path, output: Option<&Path>) -> CLIArgs {
        CLIArgs {
            filename: filename.to_path_buf(),
            output: output.map(Path::to_path_buf),
        }
    }

    #[test]
    fn output_defaults_to_suffixed_name() {
        let config = Config::default();

        let output = resolve_output(&args(Path::new("texts/story.txt"), None), &config);

        assert_eq!(output, PathBuf::from("texts/story-forms.txt"));
    }

    #[test]
    fn output_uses_configured_suffix() {
        let config = Config {
            output_suffix: ".frozen".to_string(),
            ..Config::default()
        };

        let output = resolve_output(&args(Path::new("story.txt"), None), &config);

        assert_eq!(output, PathBuf::from("story.frozen.txt"));
    }

    #[test]
    fn explicit_output_wins() {
        let output = resolve_output(
            &args(Path::new("story.txt"), Some(Path::new("elsewhere.txt"))),
            &Config::default(),
        );

        assert_eq!(output, PathBuf::from("elsewhere.txt"));
    }

    #[test]
    fn status_message_names_both_files() {
        let message = status_message(Path::new("in.txt"), Path::new("in-forms.txt"));

        assert_eq!(
            message,
            "\nFreezeArabicForms has processed the file \"in.txt\".\n\
             All of the Arabic script letters were frozen to their Arabic Presentation Forms.\n\
             The resulting text was written to \"in-forms.txt\".\n"
        );
    }

    #[test]
    fn run_writes_frozen_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("story.txt");
        std::fs::write(&input, "با\n").unwrap();
        let config = Config {
            write_bom: false,
            ..Config::default()
        };

        let (output, report) = run(&args(&input, None), &config).unwrap();

        assert_eq!(output, dir.path().join("story-forms.txt"));
        assert_eq!(report.lines, 1);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "ب\u{200D}\u{2060}\u{200D}ا\n"
        );
    }

    #[test]
    fn run_reports_missing_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("missing.txt");

        let err = run(&args(&input, None), &Config::default()).unwrap_err();

        let message = format!("{err:#}");
        assert!(message.contains("Failed to process"));
        assert!(message.contains("File not found"));
    }
}
