//! A CLI tool for inspecting DICOM images:
//! print their elements in a human readable format,
//! decode one of their frames,
//! or order them as a series.
use clap::Parser;
use dcmview_dump::{ColorMode, DumpOptions};
use dcmview_object::{open_file, Image};
use dcmview_pixeldata::FrameDecoder;
use dcmview_series::group_by_series;
use snafu::{Report, ResultExt, Whatever};
use std::io::{stdout, ErrorKind};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;

/// Exit code for when an error emerged while reading the DICOM file.
const ERROR_READ: i32 = -2;
/// Exit code for when an error emerged while dumping the file.
const ERROR_PRINT: i32 = -3;

/// Dump the contents of DICOM files
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// The DICOM file(s) to read
    #[clap(required = true)]
    files: Vec<PathBuf>,
    /// Decode the frame with this index of each file
    /// and describe it instead of dumping the elements
    #[clap(long = "frame", conflicts_with = "series")]
    frame: Option<u32>,
    /// Group the files into series
    /// and print the order of each instead of dumping the elements
    #[clap(long = "series")]
    series: bool,
    /// Print text values to the end
    /// (limited to `width` by default)
    #[clap(long = "no-text-limit")]
    no_text_limit: bool,
    /// Print all values to the end
    /// (implies `no_text_limit`, limited to `width` by default)
    #[clap(long = "no-limit")]
    no_limit: bool,
    /// The width of the display
    /// (default is to check automatically)
    #[clap(short = 'w', long = "width")]
    width: Option<u32>,
    /// The color mode
    #[clap(long = "color", default_value = "auto")]
    color: ColorMode,
    /// Fail if any errors are encountered
    #[clap(long = "fail-first")]
    fail_first: bool,
    /// Print more information about the process
    #[clap(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    run().unwrap_or_else(|e| {
        eprintln!("{}", Report::from_error(e));
        std::process::exit(ERROR_READ);
    });
}

fn run() -> Result<(), Whatever> {
    let App {
        files: filenames,
        frame,
        series,
        no_text_limit,
        no_limit,
        width,
        color,
        fail_first,
        verbose,
    } = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
            .with_writer(std::io::stderr)
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    let mut options = DumpOptions::new();
    options
        .no_text_limit(no_text_limit)
        .no_limit(no_limit)
        .color_mode(color);
    if let Some(width) = width {
        options.width(width);
    }
    let fail_first = filenames.len() == 1 || fail_first;
    let mut errors: i32 = 0;
    let mut images = Vec::with_capacity(filenames.len());

    for filename in &filenames {
        let image = match open_file(filename) {
            Ok(image) => image,
            Err(e) => {
                eprintln!("{}: {}", filename.display(), Report::from_error(e));
                if fail_first {
                    std::process::exit(ERROR_READ);
                }
                errors += 1;
                continue;
            }
        };

        if series {
            images.push(Arc::new(image));
            continue;
        }

        println!("{}: ", filename.display());
        let outcome = match frame {
            Some(frame) => describe_frame(&options, image, frame),
            None => options
                .dump_image(&image)
                .whatever_context("Could not dump image"),
        };
        if let Err(e) = outcome {
            if is_broken_pipe(&e) {
                break;
            }
            eprintln!("[ERROR] {}", Report::from_error(e));
            if fail_first {
                std::process::exit(ERROR_PRINT);
            }
            errors += 1;
        }
    }

    if series {
        if let Err(e) = describe_series(&options, images) {
            eprintln!("[ERROR] {}", Report::from_error(e));
            std::process::exit(ERROR_PRINT);
        }
    }

    std::process::exit(errors);
}

fn describe_frame(options: &DumpOptions, image: Image, frame: u32) -> Result<(), Whatever> {
    let decoder = FrameDecoder::new(Arc::new(image)).whatever_context("Could not read pixel data")?;
    tracing::debug!(
        "Decoding frame {} of {} with the {} decoder",
        frame,
        decoder.number_of_frames(),
        decoder.kind()
    );
    let descriptor = decoder
        .get_frame(frame)
        .whatever_context("Could not decode frame")?;
    options
        .describe_frame_to(stdout(), &descriptor)
        .whatever_context("Could not describe frame")
}

fn describe_series(options: &DumpOptions, images: Vec<Arc<Image>>) -> Result<(), Whatever> {
    for (i, mut series) in group_by_series(images).into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        series
            .build_series()
            .whatever_context("Could not build series")?;
        options
            .describe_series_to(stdout(), &series)
            .whatever_context("Could not describe series")?;
    }
    Ok(())
}

fn is_broken_pipe(e: &Whatever) -> bool {
    std::error::Error::source(e)
        .and_then(|source| source.downcast_ref::<std::io::Error>())
        .map_or(false, |e| e.kind() == ErrorKind::BrokenPipe)
}

#[cfg(test)]
mod tests {
    use crate::App;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        App::command().debug_assert();
    }
}
