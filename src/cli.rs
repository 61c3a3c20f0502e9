use clap::{Parser, ValueEnum};

use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use std::fs::{self, File};
use std::io::{self, IsTerminal, Read, Write};
use std::{path::Path, sync::mpsc::channel, time::Duration};
use tempfile::NamedTempFile;

use crate::document::path_data;
use crate::errors::{Error, Result};
use crate::{convert, to_clip_path, to_polygon, PolygonConfig, Quality};

/// Which clip-path declaration(s) to produce
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `clip-path: path(...)` only
    ClipPath,
    /// `clip-path: polygon(...)` only
    Polygon,
    /// Both declarations, path first
    #[default]
    Both,
}

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// File to process ('-' for stdin)
    #[arg(default_value = "-")]
    file: String,

    /// Target output file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Watch file for changes; update output on change. (FILE must be given)
    #[arg(short, long, requires = "file")]
    watch: bool,

    /// Output declaration(s) to produce
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Both)]
    format: OutputFormat,

    /// Polygon flattening quality (low, medium, high)
    #[arg(short, long, default_value = "medium")]
    quality: Quality,

    /// Segments per Bézier curve, overriding the quality preset
    #[arg(long)]
    curve_segments: Option<u32>,

    /// Segments per elliptical arc, overriding the quality preset
    #[arg(long)]
    arc_segments: Option<u32>,

    /// Treat input as an SVG document and convert each `<path>` element's `d` attribute
    #[arg(long)]
    svg: bool,
}

/// Top-level configuration used by the `svgclip` command-line process.
///
/// This is typically derived from command line arguments and passed to `run()`.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path to input file, or '-' for stdin
    pub input_path: String,
    /// Path to output file, or '-' for stdout
    pub output_path: String,
    /// Stay monitoring `input_path` for changes (Requires input_path is not stdin)
    pub watch: bool,
    pub format: OutputFormat,
    /// Input is an SVG document rather than raw path data
    pub svg_input: bool,
    pub polygon: PolygonConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        if args.watch && args.file == "-" {
            // Should already be enforced by clap validation
            return Err(Error::Cli(
                "A non-stdin file must be provided with -w/--watch argument".into(),
            ));
        }
        if args.file != "-" && args.output != "-" {
            let in_path = Path::new(&args.file);
            let out_path = Path::new(&args.output);
            if out_path.exists()
                && out_path.canonicalize().map_err(Error::from_err)?
                    == in_path.canonicalize().map_err(Error::from_err)?
            {
                return Err(Error::Cli(
                    "Output path must not refer to the same file as the input file.".into(),
                ));
            }
        }
        let polygon =
            PolygonConfig::with_overrides(args.quality, args.curve_segments, args.arc_segments);
        polygon.validate()?;
        Ok(Self {
            input_path: args.file,
            output_path: args.output,
            watch: args.watch,
            format: args.format,
            svg_input: args.svg,
            polygon,
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args = Arguments::try_parse_from(args.iter()).map_err(Error::from_err)?;
        Self::from_args(args)
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

/// Convert input text to one line per requested declaration.
///
/// Each conversion is independent: failures are reported to stderr and
/// the remaining output is still produced. An error is returned only if
/// nothing at all could be converted.
pub fn convert_text(input: &str, config: &Config) -> Result<String> {
    let sources = if config.svg_input {
        path_data(input)?
    } else {
        vec![input.to_string()]
    };

    let mut lines = Vec::new();
    let mut first_err = None;
    for (idx, data) in sources.iter().enumerate() {
        let results = match config.format {
            OutputFormat::ClipPath => vec![("clip-path", to_clip_path(data))],
            OutputFormat::Polygon => vec![("polygon", to_polygon(data, &config.polygon))],
            OutputFormat::Both => {
                let conversion = convert(data, &config.polygon);
                vec![
                    ("clip-path", conversion.clip_path),
                    ("polygon", conversion.polygon),
                ]
            }
        };
        for (label, result) in results {
            match result {
                Ok(css) => lines.push(css),
                Err(e) => {
                    if sources.len() > 1 {
                        eprintln!("path {}: {label} conversion failed: {e}", idx + 1);
                    } else {
                        eprintln!("{label} conversion failed: {e}");
                    }
                    first_err.get_or_insert(e);
                }
            }
        }
    }

    if lines.is_empty() {
        return Err(first_err.unwrap_or_else(|| Error::Cli("no output produced".into())));
    }
    let mut output = lines.join("\n");
    output.push('\n');
    Ok(output)
}

/// Read from `input` (file or '-' for stdin), write converted output to
/// `output` (file or '-' for stdout).
pub fn convert_file(input: &str, output: &str, config: &Config) -> Result<()> {
    let mut text = String::new();
    if input == "-" {
        let mut stdin = io::stdin().lock();
        if stdin.is_terminal() {
            eprintln!("Reading path data from stdin; press Ctrl-D to finish");
        }
        stdin.read_to_string(&mut text)?;
    } else {
        File::open(input)?.read_to_string(&mut text)?;
    }

    let result = convert_text(&text, config)?;

    if output == "-" {
        io::stdout().write_all(result.as_bytes())?;
    } else {
        // Write to a temporary file first so a failed write never leaves a
        // truncated output in place.
        let mut tmp_file = NamedTempFile::new()?;
        tmp_file.write_all(result.as_bytes())?;
        tmp_file.flush()?;
        fs::copy(tmp_file.path(), output)?;
    }

    Ok(())
}

/// Run the `svgclip` program with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    if !config.watch {
        convert_file(&config.input_path, &config.output_path, &config)?;
    } else if config.input_path != "-" {
        let watch = config.input_path.clone();
        let (tx, rx) = channel();
        let mut watcher =
            new_debouncer(Duration::from_millis(250), tx).map_err(Error::from_err)?;
        let watch_path = Path::new(&watch);
        watcher
            .watcher()
            .watch(watch_path, RecursiveMode::NonRecursive)
            .map_err(Error::from_err)?;
        convert_file(&watch, &config.output_path, &config).unwrap_or_else(|e| {
            eprintln!("conversion failed: {e}");
        });
        eprintln!("Watching {watch} for changes");
        loop {
            match rx.recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if event.path.canonicalize()? == watch_path.canonicalize()? {
                            eprintln!("{} changed", event.path.to_string_lossy());
                            convert_file(&watch, &config.output_path, &config).unwrap_or_else(
                                |e| {
                                    eprintln!("conversion failed: {e}");
                                },
                            );
                        }
                    }
                }
                Ok(Err(e)) => eprintln!("Watch error {e:?}"),
                Err(e) => eprintln!("Channel error: {e:?}"),
            }
        }
    }

    Ok(())
}
