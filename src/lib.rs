pub mod batch;
pub mod cli;
pub mod constants;
pub mod convert;
pub mod error;
pub mod logger;
pub mod scan;
pub mod utils;

pub use batch::{convert_directory, BatchSummary};
pub use convert::{convert_file, encode_webp, load_image, ConversionStats};
pub use error::{ConvertError, Result};
pub use scan::{collect_image_files, is_convertible_image, webp_output_path};
