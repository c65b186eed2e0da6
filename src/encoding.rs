//! String/byte conversions for named text encodings, backed by `encoding_rs`.

use crate::error::ConvertError;
use encoding_rs::Encoding;

/// Encodes `text` into bytes using the given encoding.
///
/// Delegates entirely to [`Encoding::encode`]: unmappable characters become
/// numeric character references, and UTF-16 encodings encode through their UTF-8
/// output encoding per the WHATWG rules.
pub fn string_to_bytes(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    let (bytes, _, _) = encoding.encode(text);
    bytes.into_owned()
}

/// Decodes `bytes` into text using the given encoding.
///
/// Malformed sequences follow the encoding's own substitution behavior and come
/// back as U+FFFD replacement characters; decoding never fails.
pub fn bytes_to_string(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

/// Resolves a WHATWG encoding label such as `"utf-8"`, `"gbk"` or `"latin1"`.
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding, ConvertError> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| ConvertError::UnknownEncodingLabelError(label.to_owned()))
}

/// Resolves a Windows code page number such as 936 (GBK) or 65001 (UTF-8).
pub fn encoding_for_codepage(code_page: u16) -> Result<&'static Encoding, ConvertError> {
    codepage::to_encoding(code_page).ok_or(ConvertError::UnknownCodePageError(code_page))
}
