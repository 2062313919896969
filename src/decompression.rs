//! Transparent decompression for input files
//!
//! Compression is detected from magic bytes, not the file extension:
//! gzip (1F 8B 08) and zstd (28 B5 2F FD) are supported, anything else is
//! passed through unchanged.

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Chain, Cursor, Read};
use std::path::Path;

type Rewound = Chain<Cursor<Vec<u8>>, File>;

/// Buffered reader over a possibly-compressed input file.
pub enum InputReader {
    Gzip(BufReader<MultiGzDecoder<Rewound>>),
    Zstd(BufReader<zstd::Decoder<'static, BufReader<Rewound>>>),
    Plain(BufReader<Rewound>),
}

// Manually implement Debug since zstd::Decoder doesn't implement it
impl std::fmt::Debug for InputReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputReader::Gzip(_) => write!(f, "InputReader::Gzip"),
            InputReader::Zstd(_) => write!(f, "InputReader::Zstd"),
            InputReader::Plain(_) => write!(f, "InputReader::Plain"),
        }
    }
}

/// Open an input file, sniffing its first bytes for a compression magic.
pub fn open_input(path: &Path) -> Result<InputReader> {
    let mut file =
        File::open(path).with_context(|| format!("cannot open input file {}", path.display()))?;

    let mut head = [0u8; 4];
    let n = read_head(&mut file, &mut head)
        .with_context(|| format!("cannot read input file {}", path.display()))?;

    // The sniffed bytes are chained back in front of the rest of the file
    let rewound = Cursor::new(head[..n].to_vec()).chain(file);

    if n >= 3 && head[..3] == [0x1F, 0x8B, 0x08] {
        Ok(InputReader::Gzip(BufReader::new(MultiGzDecoder::new(
            rewound,
        ))))
    } else if n >= 4 && head == [0x28, 0xB5, 0x2F, 0xFD] {
        let decoder = zstd::Decoder::new(rewound)
            .with_context(|| format!("cannot initialize zstd decoder for {}", path.display()))?;
        Ok(InputReader::Zstd(BufReader::new(decoder)))
    } else {
        Ok(InputReader::Plain(BufReader::new(rewound)))
    }
}

/// Read up to 4 bytes, tolerating shorter files.
fn read_head(file: &mut File, head: &mut [u8; 4]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < head.len() {
        match file.read(&mut head[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}

impl Read for InputReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            InputReader::Gzip(reader) => reader.read(buf),
            InputReader::Zstd(reader) => reader.read(buf),
            InputReader::Plain(reader) => reader.read(buf),
        }
    }
}

impl BufRead for InputReader {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        match self {
            InputReader::Gzip(reader) => reader.fill_buf(),
            InputReader::Zstd(reader) => reader.fill_buf(),
            InputReader::Plain(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            InputReader::Gzip(reader) => reader.consume(amt),
            InputReader::Zstd(reader) => reader.consume(amt),
            InputReader::Plain(reader) => reader.consume(amt),
        }
    }
}
