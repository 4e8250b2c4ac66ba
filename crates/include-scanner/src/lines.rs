//! Lazy, encoding-aware line reader.

use std::io::{self, BufRead, BufReader, Chain, Cursor, Read};

use crate::encoding::{Encoding, sniff};

/// Substitute character (CTRL+Z): ends the current line and the whole stream.
const EOF_MARK: u16 = 0x1A;
const CR: u16 = b'\r' as u16;
const LF: u16 = b'\n' as u16;

/// Iterator over the decoded lines of a text stream.
///
/// The encoding is detected from the byte-order mark on construction. Lines end at `\n`,
/// `\r\n` or a lone `\r`; terminators are not included in the yielded text. A final line
/// without terminator is yielded, a trailing terminator does not produce an empty line.
pub struct TextLines<R: Read> {
    reader: BufReader<Chain<Cursor<Vec<u8>>, R>>,
    encoding: Encoding,
    peeked: Option<u16>,
    done: bool,
}

impl<R: Read> TextLines<R> {
    /// Wrap `reader`, consuming its byte-order mark.
    pub fn new(mut reader: R) -> io::Result<Self> {
        let (encoding, replay) = sniff(&mut reader)?;
        Ok(Self {
            reader: BufReader::new(Cursor::new(replay).chain(reader)),
            encoding,
            peeked: None,
            done: false,
        })
    }

    /// Encoding detected for this stream.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let buf = self.reader.fill_buf()?;
        let Some(&byte) = buf.first() else {
            return Ok(None);
        };
        self.reader.consume(1);
        Ok(Some(byte))
    }

    fn next_unit(&mut self) -> io::Result<Option<u16>> {
        if let Some(unit) = self.peeked.take() {
            return Ok(Some(unit));
        }
        match self.encoding {
            Encoding::Ansi | Encoding::Utf8 => Ok(self.read_byte()?.map(u16::from)),
            Encoding::Utf16Le => {
                let Some(lo) = self.read_byte()? else {
                    return Ok(None);
                };
                // A dangling odd byte is dropped.
                let Some(hi) = self.read_byte()? else {
                    return Ok(None);
                };
                Ok(Some(u16::from_le_bytes([lo, hi])))
            }
        }
    }

    fn decode(&self, units: &[u16]) -> String {
        match self.encoding {
            Encoding::Ansi => units.iter().map(|&u| char::from(u as u8)).collect(),
            Encoding::Utf8 => {
                let bytes: Vec<u8> = units.iter().map(|&u| u as u8).collect();
                String::from_utf8_lossy(&bytes).into_owned()
            }
            Encoding::Utf16Le => String::from_utf16_lossy(units),
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        if self.done {
            return Ok(None);
        }

        let mut units = Vec::new();
        loop {
            match self.next_unit()? {
                None => {
                    self.done = true;
                    break;
                }
                Some(EOF_MARK) => {
                    self.done = true;
                    break;
                }
                Some(LF) => return Ok(Some(self.decode(&units))),
                Some(CR) => {
                    match self.next_unit()? {
                        Some(LF) | None => {}
                        Some(other) => self.peeked = Some(other),
                    }
                    return Ok(Some(self.decode(&units)));
                }
                Some(unit) => units.push(unit),
            }
        }

        if units.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.decode(&units)))
        }
    }
}

impl<R: Read> Iterator for TextLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => None,
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
