use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Numeral style for the array body (hex, decimal, binary, char)
    #[arg(short, long, default_value = "hex")]
    pub style: String,

    /// Emit a std::array annotated with the element count instead of a
    /// C-style array plus trailing size constant
    #[arg(long)]
    pub std_array: bool,

    /// Declaration qualifier (const, constexpr, inline)
    #[arg(short, long, default_value = "const")]
    pub qualifier: String,

    /// Smallest possible output: plain decimal tokens, no padding, no
    /// line breaks (overrides --style)
    #[arg(long)]
    pub compact: bool,

    /// Compress the payload before encoding (gzip, zlib)
    #[arg(short, long)]
    pub compress: Option<String>,

    /// Compression level (default, fast, best)
    #[arg(short, long, default_value = "default")]
    pub level: String,

    /// Decode the input as an image (png, jpeg, gif) and embed its raw
    /// pixels plus width/height/channel properties
    #[arg(long)]
    pub image: bool,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file containing the array text
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Decompress the payload after parsing (gzip, zlib); must match the
    /// algorithm used when encoding
    #[arg(short, long)]
    pub compress: Option<String>,

    /// Re-encode the parsed pixels as an image file (png, jpeg); requires
    /// an array created with --image
    #[arg(long)]
    pub image_format: Option<String>,
}
