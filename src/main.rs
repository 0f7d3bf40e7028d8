//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use huffpack::compression::compress::compress_with_opts;
use huffpack::compression::decompress::{decompress_with_opts, verify_with_opts};
use huffpack::tools::cli::{huffopts_init, Mode};

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace. Stdout may carry data, so
    // everything goes to stderr.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Unable to start logging: {}", e);
    }

    let options = huffopts_init();

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Zip => compress_with_opts(&options).map(|stats| {
            info!(
                "Wrote {} bytes ({} body bits) from {} input bytes.",
                stats.output_bytes, stats.encoded_bits, stats.input_bytes
            )
        }),
        Mode::Unzip => decompress_with_opts(&options)
            .map(|n| info!("Wrote {} decompressed bytes.", n)),
        Mode::Test => verify_with_opts(&options).map(|_| ()),
    };

    match result {
        Ok(()) => info!("Done."),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
