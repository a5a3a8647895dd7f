// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "pixel-picker")]
#[command(about = "Pick exact pixel coordinates from an image with a magnifier", long_about = None)]
pub struct Cli {
    /// Image to inspect (any format the `image` crate decodes)
    pub image: PathBuf,

    /// Pixels shown on each side of the focus in the magnifier
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(0..=64))]
    pub margin: u32,

    /// Screen pixels per magnified image pixel
    #[arg(long = "cell-size", default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..=32))]
    pub cell_size: u32,
}
