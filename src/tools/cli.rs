use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, warn};

use crate::error::{Error, Result};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    File(String),
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::File(name) => write!(f, "file {}", name),
            Output::Stdout => write!(f, "stdout"),
        }
    }
}

/// Everything the drivers need to know about one run.
#[derive(Debug, Clone)]
pub struct HuffOpts {
    /// Name of file to read for input, stdin when None
    pub input: Option<String>,
    /// Location where output is sent
    pub output: Output,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            input: None,
            output: Output::Stdout,
            force_overwrite: false,
            op_mode: Mode::Zip,
            verbose: Verbosity::Errors,
        }
    }

    /// Read the whole input, from the named file or stdin.
    pub fn read_input(&self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        let result = match &self.input {
            Some(name) => File::open(name).and_then(|mut f| f.read_to_end(&mut data)),
            None => io::stdin().lock().read_to_end(&mut data),
        };
        result.map_err(Error::InputUnavailable)?;
        Ok(data)
    }

    /// Write a finished result to the output. An existing file is only replaced when forced,
    /// and a file that fails part way through is removed.
    pub fn write_output(&self, data: &[u8]) -> Result<()> {
        match &self.output {
            Output::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(data)
                    .and_then(|_| out.flush())
                    .map_err(Error::OutputUnavailable)
            }
            Output::File(name) => {
                if !self.force_overwrite && fs::metadata(name).is_ok() {
                    return Err(Error::OutputUnavailable(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("{} already exists (use --force to overwrite)", name),
                    )));
                }
                let result = File::create(name).and_then(|mut f| {
                    f.write_all(data)?;
                    f.sync_all()
                });
                if let Err(e) = result {
                    warn!("Removing incomplete output file {}", name);
                    let _ = fs::remove_file(name);
                    return Err(Error::OutputUnavailable(e));
                }
                Ok(())
            }
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman coding compressor",
    long_about = "
    Compresses a single input into a huffpack container, or restores the original bytes
    from one. Input is read from the named file or stdin. Output goes to the file named
    with --output, otherwise to stdout."
)]
pub struct Args {
    /// Filename of file to process (stdin when absent)
    #[clap()]
    filename: Option<String>,

    /// Perform compression on the input (the default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Perform decompression on the input
    #[clap(short = 'd', long = "decompress", conflicts_with = "compress")]
    decompress: bool,

    /// Test container integrity without writing output
    #[clap(short = 't', long = "test", conflicts_with_all = &["compress", "decompress"])]
    test: bool,

    /// Write output to this file
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout", conflicts_with = "output")]
    stdout: bool,

    ///Force overwriting output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Suppress noncritical messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Be verbose (repeat for more, -vvvv gives trace output)
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    verbose: u64,
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        let mut opts = HuffOpts::new();
        opts.input = args.filename;
        if args.compress {
            opts.op_mode = Mode::Zip;
        }
        if args.decompress {
            opts.op_mode = Mode::Unzip;
        }
        if args.test {
            opts.op_mode = Mode::Test;
        }
        opts.output = match (args.stdout, args.output) {
            (false, Some(name)) => Output::File(name),
            _ => Output::Stdout,
        };
        opts.force_overwrite = args.force;
        opts.verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            match args.verbose {
                0 => Verbosity::Errors,
                1 => Verbosity::Warnings,
                2 => Verbosity::Info,
                3 => Verbosity::Debug,
                _ => Verbosity::Trace,
            }
        };
        opts
    }
}

/// Parse the command line into HuffOpts and set the log level to match.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());

    // Set the log level
    match opts.verbose {
        Verbosity::Quiet => log::set_max_level(log::LevelFilter::Off),
        Verbosity::Errors => log::set_max_level(log::LevelFilter::Error),
        Verbosity::Warnings => log::set_max_level(log::LevelFilter::Warn),
        Verbosity::Info => log::set_max_level(log::LevelFilter::Info),
        Verbosity::Debug => log::set_max_level(log::LevelFilter::Debug),
        Verbosity::Trace => log::set_max_level(log::LevelFilter::Trace),
    };

    // Below we report initialization status to the user
    info!("---- Huffpack Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    match &opts.input {
        Some(s) => info!("Getting input from the file {}", s),
        None => info!("Getting input from stdin"),
    }
    info!("Sending output to {}", opts.output);
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    info!("---- Huffpack Initialization End ----");
    opts
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> HuffOpts {
        HuffOpts::from(Args::parse_from(args))
    }

    #[test]
    fn defaults_test() {
        let opts = parse(&["huffpack"]);
        assert_eq!(opts.op_mode, Mode::Zip);
        assert_eq!(opts.input, None);
        assert_eq!(opts.output, Output::Stdout);
        assert_eq!(opts.verbose, Verbosity::Errors);
        assert!(!opts.force_overwrite);
    }

    #[test]
    fn decompress_to_file_test() {
        let opts = parse(&["huffpack", "-d", "in.huff", "-o", "out.bin", "-f", "-vv"]);
        assert_eq!(opts.op_mode, Mode::Unzip);
        assert_eq!(opts.input.as_deref(), Some("in.huff"));
        assert_eq!(opts.output, Output::File("out.bin".to_string()));
        assert!(opts.force_overwrite);
        assert_eq!(opts.verbose, Verbosity::Info);
    }

    #[test]
    fn quiet_wins_test() {
        let opts = parse(&["huffpack", "-t", "-q", "-vvv"]);
        assert_eq!(opts.op_mode, Mode::Test);
        assert_eq!(opts.verbose, Verbosity::Quiet);
    }

    #[test]
    fn refuses_overwrite_test() {
        let path = std::env::temp_dir().join(format!("huffpack_cli_{}", std::process::id()));
        let name = path.to_string_lossy().to_string();
        fs::write(&path, b"keep me").unwrap();

        let mut opts = HuffOpts::new();
        opts.output = Output::File(name.clone());
        assert!(matches!(
            opts.write_output(b"new"),
            Err(Error::OutputUnavailable(_))
        ));
        assert_eq!(fs::read(&path).unwrap(), b"keep me");

        opts.force_overwrite = true;
        opts.write_output(b"new").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"new");
        fs::remove_file(&path).unwrap();
    }
}
