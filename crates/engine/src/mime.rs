//! Media-type guessing: extension lookup first, then leading-byte signatures.

use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const PDF: &str = "application/pdf";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Bytes read from the start of a file for signature matching.
pub const SNIFF_LEN: u64 = 16;

/// `(offset, magic, media type)`; first match wins.
const SIGNATURES: &[(usize, &[u8], &str)] = &[
    (0, b"%PDF-", PDF),
    (0, b"\x89PNG", "image/png"),
    (0, b"\xff\xd8\xff", "image/jpeg"),
    (0, b"GIF8", "image/gif"),
    (0, b"RIFF", "audio/wav"),
    (0, b"ID3", "audio/mpeg"),
    (0, b"\xff\xfb", "audio/mpeg"),
    (0, b"\xff\xf3", "audio/mpeg"),
    (0, b"\xff\xf2", "audio/mpeg"),
    (4, b"ftyp", "video/mp4"),
    (0, b"\x1a\x45\xdf\xa3", "video/webm"),
];

/// Read at most `limit` bytes from the start of `path`.
pub(crate) fn read_head(path: &Path, limit: u64) -> std::io::Result<Vec<u8>> {
    let mut head = Vec::with_capacity(usize::try_from(limit).unwrap_or(0).min(1 << 20));
    File::open(path)?.take(limit).read_to_end(&mut head)?;
    Ok(head)
}

/// Match `head` against the signature table.
#[must_use]
pub fn sniff_signature(head: &[u8]) -> Option<&'static str> {
    let (_, _, mime) = SIGNATURES
        .iter()
        .find(|(offset, magic, _)| head.get(*offset..offset + magic.len()) == Some(*magic))?;
    if *mime == "audio/wav" {
        return Some(riff_subtype(head));
    }
    Some(mime)
}

fn riff_subtype(head: &[u8]) -> &'static str {
    match head.get(8..12) {
        Some(b"WEBP") => "image/webp",
        Some(b"AVI ") => "video/x-msvideo",
        _ => "audio/wav",
    }
}

/// Media type of `path`: extension lookup, then signature sniffing, then
/// `application/octet-stream`. Unreadable files fall through to the default.
#[must_use]
pub fn guess_mime_type(path: &Path) -> &'static str {
    if let Some(mime) = mime_guess::from_path(path).first_raw() {
        return mime;
    }
    match read_head(path, SNIFF_LEN) {
        Ok(head) => sniff_signature(&head).unwrap_or(OCTET_STREAM),
        Err(err) => {
            log::debug!("cannot sniff {}: {err}", path.display());
            OCTET_STREAM
        }
    }
}
