//! Byte-order-mark sniffing.

use std::io::{self, Read};

/// Text encoding of a source file, decided once from its first bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// No recognised byte-order mark: 8-bit text, decoded as Latin-1.
    Ansi,
    /// `EF BB BF`.
    Utf8,
    /// `FF FE`.
    Utf16Le,
}

const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];
const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];

impl Encoding {
    /// Detect the encoding from the start of a file.
    ///
    /// Returns the encoding and the length of the byte-order mark to skip. The longest mark is
    /// tried first.
    pub fn detect(prefix: &[u8]) -> (Encoding, usize) {
        if prefix.starts_with(BOM_UTF8) {
            (Encoding::Utf8, BOM_UTF8.len())
        } else if prefix.starts_with(BOM_UTF16_LE) {
            (Encoding::Utf16Le, BOM_UTF16_LE.len())
        } else {
            (Encoding::Ansi, 0)
        }
    }
}

/// Read up to three bytes from `reader`, detect the encoding and return the bytes that follow
/// the byte-order mark (if any) so they can be replayed in front of the rest of the stream.
pub(crate) fn sniff(reader: &mut impl Read) -> io::Result<(Encoding, Vec<u8>)> {
    let mut prefix = [0u8; 3];
    let mut filled = 0;
    while filled < prefix.len() {
        match reader.read(&mut prefix[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    let (encoding, skip) = Encoding::detect(&prefix[..filled]);
    Ok((encoding, prefix[skip..filled].to_vec()))
}
