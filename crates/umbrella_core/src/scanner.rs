use log::{debug, trace, warn};
use std::{
    fs::File,
    io::{BufReader, Bytes, Read},
    mem,
    path::Path,
};

use crate::{
    constants::INCLUDE_TOKEN,
    error::{Result, UmbrellaError},
};

/// Where the scanner currently is in the byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Normal,
    /// Position of the next expected byte of `INCLUDE_TOKEN`
    MatchingToken(usize),
    BlockComment,
    LineComment,
    /// Capturing an include literal until the given quote recurs
    InLiteral(u8),
}

/// Streams include literals out of a source file in a single forward pass.
///
/// Comments are skipped entirely, so directives inside `/* */` or after `//`
/// are never reported. Literals are captured verbatim with no escape
/// processing. A literal still open when the stream ends is dropped.
pub struct IncludeScanner<R> {
    bytes: Bytes<R>,
    state: ScanState,
    prev: Option<u8>,
    literal: Vec<u8>,
    finished: bool,
}

impl<R: Read> IncludeScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: reader.bytes(),
            state: ScanState::Normal,
            prev: None,
            literal: Vec::new(),
            finished: false,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    fn step(&mut self, byte: u8) -> Option<String> {
        match self.state {
            ScanState::BlockComment => {
                if self.prev == Some(b'*') && byte == b'/' {
                    self.state = ScanState::Normal;
                    self.prev = None;
                } else {
                    self.prev = Some(byte);
                }
                None
            }
            ScanState::LineComment => {
                if byte == b'\n' {
                    self.state = ScanState::Normal;
                }
                None
            }
            ScanState::InLiteral(quote) => {
                if byte == quote {
                    self.state = ScanState::Normal;
                    self.prev = None;
                    let captured = mem::take(&mut self.literal);
                    return Some(String::from_utf8_lossy(&captured).into_owned());
                }
                self.literal.push(byte);
                None
            }
            ScanState::Normal | ScanState::MatchingToken(_) => {
                if self.prev == Some(b'/') && (byte == b'*' || byte == b'/') {
                    self.state =
                        if byte == b'*' { ScanState::BlockComment } else { ScanState::LineComment };
                    self.prev = None;
                    return None;
                }
                self.prev = Some(byte);
                self.state = advance_token(self.state, byte);
                None
            }
        }
    }
}

impl<R: Read> Iterator for IncludeScanner<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        while let Some(res) = self.bytes.next() {
            match res {
                Ok(byte) => {
                    if let Some(literal) = self.step(byte) {
                        trace!("Found include literal: '{}'", literal);
                        return Some(literal);
                    }
                }
                Err(e) => {
                    warn!("Stopped scanning after read error: {}", e);
                    break;
                }
            }
        }
        if let ScanState::InLiteral(_) = self.state {
            trace!("Dropping unterminated include literal ({} bytes)", self.literal.len());
        }
        self.finished = true;
        None
    }
}

fn advance_token(state: ScanState, byte: u8) -> ScanState {
    let mut pos = match state {
        ScanState::MatchingToken(pos) => pos,
        _ => 0,
    };

    // A space in the token accepts any run of whitespace, including none
    if INCLUDE_TOKEN.get(pos) == Some(&b' ') {
        if byte.is_ascii_whitespace() {
            return ScanState::MatchingToken(pos);
        }
        pos += 1;
    }

    if pos == INCLUDE_TOKEN.len() {
        return if byte == b'\'' || byte == b'"' {
            ScanState::InLiteral(byte)
        } else {
            restart_token(byte)
        };
    }

    if INCLUDE_TOKEN[pos] == byte { ScanState::MatchingToken(pos + 1) } else { restart_token(byte) }
}

fn restart_token(byte: u8) -> ScanState {
    if INCLUDE_TOKEN[0] == byte { ScanState::MatchingToken(1) } else { ScanState::Normal }
}

/// Scans an in-memory source for include literals.
pub fn scan_includes(src: &[u8]) -> Vec<String> {
    IncludeScanner::new(src).collect()
}

/// Opens a file and returns a lazy scanner over it.
pub fn open_scanner(file: &Path) -> Result<IncludeScanner<BufReader<File>>> {
    let fp = File::open(file)
        .map_err(|source| UmbrellaError::Read { path: file.to_path_buf(), source })?;
    Ok(IncludeScanner::new(BufReader::new(fp)))
}

/// Reads a file and returns its include literals in source order.
pub fn includes_for(file: &Path) -> Result<Vec<String>> {
    trace!("Scanning file for includes: {}", file.display());
    let includes: Vec<String> = open_scanner(file)?.collect();
    debug!("Found {} includes in {}", includes.len(), file.display());
    Ok(includes)
}
