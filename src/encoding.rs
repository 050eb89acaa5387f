use encoding_rs::{UTF_8, WINDOWS_874};

use crate::error::{Result, SatangError};

/// The account-type column header. Every genuine statement export carries it,
/// so it doubles as the probe for which byte encoding the file was saved in.
pub const SENTINEL_HEADER: &str = "ประเภทบัญชี";

/// Decode an uploaded statement file. UTF-8 is tried first; if the decoded
/// text lacks the sentinel header the legacy Thai code page (windows-874) is
/// tried next. Neither containing the sentinel means this is not a statement
/// export.
pub fn decode_statement(buf: &[u8]) -> Result<String> {
    let (utf8_text, _, _) = UTF_8.decode(buf);
    if utf8_text.contains(SENTINEL_HEADER) {
        return Ok(utf8_text.into_owned());
    }
    let (legacy_text, _, _) = WINDOWS_874.decode(buf);
    if legacy_text.contains(SENTINEL_HEADER) {
        return Ok(legacy_text.into_owned());
    }
    Err(SatangError::MalformedFile(format!(
        "header row \"{SENTINEL_HEADER}\" not found in either UTF-8 or windows-874 decoding"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_file_decodes() {
        let content = format!("{SENTINEL_HEADER},ธนาคาร\nx,y\n");
        let text = decode_statement(content.as_bytes()).unwrap();
        assert!(text.contains(SENTINEL_HEADER));
        assert!(text.contains("ธนาคาร"));
    }

    #[test]
    fn test_legacy_codepage_fallback() {
        let content = format!("{SENTINEL_HEADER},ธนาคาร\nx,y\n");
        let (encoded, _, had_errors) = WINDOWS_874.encode(&content);
        assert!(!had_errors);
        // The windows-874 bytes are not valid UTF-8 Thai, so the first pass
        // misses the sentinel and the legacy pass must find it.
        let text = decode_statement(&encoded).unwrap();
        assert!(text.contains(SENTINEL_HEADER));
    }

    #[test]
    fn test_no_sentinel_is_malformed() {
        let err = decode_statement(b"Date,Description,Amount\n1,2,3\n");
        assert!(matches!(err, Err(SatangError::MalformedFile(_))));
    }

    #[test]
    fn test_garbage_bytes_are_malformed() {
        let err = decode_statement(&[0xFF, 0xFE, 0x00, 0x81]);
        assert!(matches!(err, Err(SatangError::MalformedFile(_))));
    }
}
