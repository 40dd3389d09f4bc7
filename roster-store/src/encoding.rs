//! Encoding-detection fallback chain for the roster file
//!
//! Roster files written on older systems arrive in a handful of encodings:
//! UTF-8 (with or without a BOM) and the Arabic single-byte code pages
//! windows-1256 and ISO-8859-6. The chain tries strict decodes in that
//! order, then lets a byte-level sniffer take one last guess.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, ISO_8859_6, UTF_8, WINDOWS_1256};
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One successful strict decode of the raw file bytes
#[derive(Debug)]
pub(crate) struct Decoded {
    pub text: String,
    /// Label for logging ("utf-8-sig", "windows-1256", ...)
    pub encoding: String,
}

/// Decode the raw bytes under every supported encoding, in fallback order.
///
/// Returns the candidates that decoded cleanly; the load path parses them
/// in turn and takes the first that yields a table. The sniffer guess is
/// appended last, skipped when it repeats an earlier candidate.
pub(crate) fn decode_candidates(raw: &[u8]) -> Vec<Decoded> {
    let mut candidates = Vec::new();
    let mut tried: Vec<&'static Encoding> = Vec::new();

    // A BOM marks the file as UTF-8-with-signature; strip it so the first
    // header cell comes out clean.
    match raw.strip_prefix(UTF8_BOM) {
        Some(stripped) => {
            tried.push(UTF_8);
            if let Some(text) = strict_decode(UTF_8, stripped) {
                candidates.push(Decoded {
                    text,
                    encoding: "utf-8-sig".to_string(),
                });
            }
        }
        None => try_push(&mut candidates, &mut tried, UTF_8, raw),
    }

    // Legacy single-byte code pages, in order.
    for encoding in [WINDOWS_1256, ISO_8859_6] {
        try_push(&mut candidates, &mut tried, encoding, raw);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(raw, true);
    let guess = detector.guess(None, true);
    if !tried.contains(&guess) {
        debug!(encoding = guess.name(), "sniffer guess");
        try_push(&mut candidates, &mut tried, guess, raw);
    }

    candidates
}

fn try_push(
    candidates: &mut Vec<Decoded>,
    tried: &mut Vec<&'static Encoding>,
    encoding: &'static Encoding,
    raw: &[u8],
) {
    tried.push(encoding);
    if let Some(text) = strict_decode(encoding, raw) {
        candidates.push(Decoded {
            text,
            encoding: encoding.name().to_ascii_lowercase(),
        });
    }
}

/// Strict decode: any malformed byte sequence fails the attempt.
fn strict_decode(encoding: &'static Encoding, raw: &[u8]) -> Option<String> {
    match encoding.decode_without_bom_handling_and_without_replacement(raw) {
        Some(text) => Some(text.into_owned()),
        None => {
            debug!(encoding = encoding.name(), "strict decode failed");
            None
        }
    }
}
