use clap::Parser;
use std::path::PathBuf;

const EPILOG: &str = "\
In most cases Arabic script letters are automatically displayed in their
proper contextual forms depending on their position in the word (initial,
medial, final, or isolated). This program identifies the proper contextual
form of each Arabic script letter in an input text file and \"freezes\" it
into its proper contextual form, using Zero Width Joiners (ZWJs), and by
placing Word Joiners (WJs) between the letters to avoid any confusion
about which letter is joining. This can facilitate the analysis of different
Arabic script contextual forms used in a text, particularly using PrimerPrep.";

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "freeze-arabic-forms")]
#[command(about = "Freeze Arabic script letters in their contextual forms.")]
#[command(version)]
#[command(after_help = EPILOG)]
pub struct CLIArgs {
    /// Name of file with Arabic text to convert to contextual forms
    pub filename: PathBuf,

    /// Name of output file (default adds -forms to filename)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}
