use thiserror::Error;

/// Error type for the fallible conversion surface.
/// The silent-default functions (`convert_base`, the `get_*` family) absorb these
/// internally; the `try_*`, `parse_*` and encoding lookup functions return them.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("{0}")]
    ParseIntError(#[from] std::num::ParseIntError),

    #[error("{0}")]
    ParseDateTimeError(#[from] chrono::ParseError),

    #[error("unsupported radix: {0}")]
    UnsupportedRadixError(u32),

    #[error("unknown encoding label: '{0}'")]
    UnknownEncodingLabelError(String),

    #[error("unknown code page: {0}")]
    UnknownCodePageError(u16),
}
