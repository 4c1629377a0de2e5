use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use slack_icon_merger::{merge_files, MergeReport, DEFAULT_OUTPUT_PATH};

const USAGE: &str = "Usage:\n\tslack-icon-merger {SRC_IMAGE_FILE} {OVER_IMAGE_FILE}";

/// Exit status for open, decode, encode, and write failures.
const EXIT_FAILURE: i32 = 2;

#[derive(Parser)]
#[command(
    name = "slack-icon-merger",
    about = "Merge two images into a rounded icon with a circular badge",
    version,
    after_help = "The result is always written to ./merged.png.\n\
                  Input formats are detected from file contents, not extensions."
)]
struct Cli {
    /// Source image, cropped and kept at full size
    #[arg(allow_hyphen_values = true)]
    src: PathBuf,

    /// Overlay image, shrunk into the top-right badge
    #[arg(allow_hyphen_values = true)]
    over: PathBuf,

    /// Anything after the two images is ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<OsString>,

    /// Print image sizes and badge geometry to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Suppress the success message
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    let output = Path::new(DEFAULT_OUTPUT_PATH);
    let report = match merge_files(&cli.src, &cli.over, output) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Fatal: {e}");
            process::exit(EXIT_FAILURE);
        }
    };

    if cli.verbose {
        print_report(&report);
    }
    if !cli.quiet {
        println!("PNG image generated: {}", report.output.display());
    }
}

fn print_report(report: &MergeReport) {
    let (sw, sh) = report.source_size;
    let (ow, oh) = report.overlay_size;
    let (bw, bh) = report.layout.badge_size();
    eprintln!("source:  {sw}x{sh}");
    eprintln!("overlay: {ow}x{oh} -> {bw}x{bh}");
    eprintln!("  circle: {:?}", report.layout.circle_rect);
    eprintln!("  corner: {:?}", report.layout.corner_rect);
    eprintln!("  badge:  {:?}", report.layout.dog_rect);
    eprintln!("  -> {} bytes", report.bytes_written);
}
