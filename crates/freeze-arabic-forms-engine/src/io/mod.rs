use crate::reshape::{JOIN_MARK, SEPARATOR_MARK, reshape};
use crate::tables::is_joining;
use regex::Regex;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const BOM: &str = "\u{FEFF}";

/// Suffix inserted into derived output file names.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "-forms";

fn extension_regex() -> &'static Regex {
    static EXTENSION_REGEX: OnceLock<Regex> = OnceLock::new();
    EXTENSION_REGEX.get_or_init(|| Regex::new(r"(\.\w+)$").expect("Invalid extension regex"))
}

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is not valid UTF-8 (line {line}, byte {offset}): {source}")]
    Encoding {
        path: PathBuf,
        line: usize,
        offset: usize,
        source: std::str::Utf8Error,
    },
}

/// How the output file is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreezeOptions {
    /// Prefix the output with a byte order mark.
    pub write_bom: bool,
}

impl Default for FreezeOptions {
    fn default() -> Self {
        Self { write_bom: true }
    }
}

/// Counts collected while freezing a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreezeReport {
    pub lines: usize,
    pub joining_letters: usize,
    pub join_marks: usize,
    pub separator_marks: usize,
}

/// Read a UTF-8 text file as lines, each keeping its `\n` terminator.
///
/// A leading byte order mark is dropped. Line endings are kept as written:
/// `\r\n` stays `\r\n` and a lone `\r` does not end a line.
pub fn read_lines(path: &Path) -> Result<Vec<String>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let body = bytes.strip_prefix(BOM.as_bytes()).unwrap_or(&bytes[..]);
    let text = std::str::from_utf8(body).map_err(|source| {
        let offset = source.valid_up_to();
        IoError::Encoding {
            path: path.to_path_buf(),
            line: body[..offset].iter().filter(|&&b| b == b'\n').count() + 1,
            offset,
            source,
        }
    })?;
    Ok(text.split_inclusive('\n').map(str::to_string).collect())
}

/// Write lines back to back, creating parent directories as needed.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S], with_bom: bool) -> Result<(), IoError> {
    let io_err = |source| IoError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    if with_bom {
        writer.write_all(BOM.as_bytes()).map_err(io_err)?;
    }
    for line in lines {
        writer.write_all(line.as_ref().as_bytes()).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)
}

/// Freeze every line of `input` and write the result to `output`.
///
/// The input is read and decoded completely before the output is created.
pub fn freeze_file(
    input: &Path,
    output: &Path,
    options: &FreezeOptions,
) -> Result<FreezeReport, IoError> {
    let lines = read_lines(input)?;
    log::debug!("read {} lines from {}", lines.len(), input.display());

    let mut report = FreezeReport {
        lines: lines.len(),
        ..FreezeReport::default()
    };
    let frozen: Vec<String> = lines
        .iter()
        .map(|line| {
            let chars: Vec<char> = line.chars().collect();
            let reshaped = reshape(&chars);
            report.joining_letters += chars.iter().filter(|&&c| is_joining(c)).count();
            report.join_marks += reshaped.iter().filter(|&&c| c == JOIN_MARK).count()
                - chars.iter().filter(|&&c| c == JOIN_MARK).count();
            report.separator_marks += reshaped.iter().filter(|&&c| c == SEPARATOR_MARK).count()
                - chars.iter().filter(|&&c| c == SEPARATOR_MARK).count();
            reshaped.into_iter().collect()
        })
        .collect();

    write_lines(output, &frozen, options.write_bom)?;
    log::debug!("wrote {}", output.display());
    Ok(report)
}

/// Output path used when none is given: `suffix` goes in front of the file
/// extension (`story.txt` becomes `story-forms.txt`), or at the end of the
/// name when there is no extension.
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let Some(name) = input.file_name() else {
        return input.with_file_name(suffix);
    };
    let name = name.to_string_lossy();
    let extension = extension_regex();
    let renamed = if extension.is_match(&name) && !name.starts_with('.') {
        extension
            .replace(&name, |caps: &regex::Captures| {
                format!("{suffix}{}", &caps[1])
            })
            .into_owned()
    } else {
        format!("{name}{suffix}")
    };
    input.with_file_name(renamed)
}
