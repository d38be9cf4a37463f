use std::ffi::{OsStr, OsString};

use clap::Parser;

use crate::config::Config;
use crate::ffmpeg::FFmpeg;

pub const USAGE: &str = "-input <input_file> -output <output_directory>";

#[derive(Parser, Debug)]
#[command(about = "Generate 1080p, 720p and 480p HLS renditions of a Full HD (or larger) video.")]
#[command(override_usage = concat!(env!("CARGO_PKG_NAME"), " -input <input_file> -output <output_directory>"))]
struct Args {
    /// Path to video file
    #[arg(long, value_name = "input_file")]
    input: Option<String>,

    /// Path to output directory
    #[arg(long, value_name = "output_directory")]
    output: Option<String>,
}

/// Parses the command line (program name first). `Ok(None)` means a required
/// path is missing and usage should be shown.
///
/// Both `-input`/`-output` and `--input`/`--output` are accepted, with the
/// value either as the next argument or after `=`. Stray positional arguments
/// are an error.
pub fn parse_cli<I, T>(args: I, ffmpeg: FFmpeg) -> Result<Option<Config>, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let program = args.next().unwrap_or_else(|| OsString::from(env!("CARGO_PKG_NAME")));
    let args = Args::try_parse_from(std::iter::once(program).chain(args.map(long_flag)))?;
    Ok(Config::from_args(args.input, args.output, ffmpeg))
}

fn long_flag(arg: OsString) -> OsString {
    let single_dash = match arg.to_str() {
        Some(s) => ["-input", "-output"].iter().any(|flag| {
            s == *flag || s.strip_prefix(flag).is_some_and(|rest| rest.starts_with('='))
        }),
        None => false,
    };
    if single_dash {
        let mut long = OsString::from("-");
        long.push(OsStr::new(&arg));
        long
    } else {
        arg
    }
}
