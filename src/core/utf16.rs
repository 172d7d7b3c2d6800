//! Purpose: Decode UTF-16 byte buffers into Rust strings.
//! Exports: `ByteOrder`, `decode`.
//! Role: Text boundary between raw file bytes and the JSON parser.
//! Invariants: A leading BOM selects byte order and is stripped; absent BOM means little-endian.
//! Invariants: Odd lengths and unpaired surrogates fail with the byte offset of the fault.

use crate::core::error::{Error, ErrorKind};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// Detects a BOM, returning the byte order and the BOM's length.
    pub fn detect(bytes: &[u8]) -> (Self, usize) {
        match bytes {
            [0xff, 0xfe, ..] => (ByteOrder::Little, 2),
            [0xfe, 0xff, ..] => (ByteOrder::Big, 2),
            _ => (ByteOrder::Little, 0),
        }
    }

    fn unit(self, pair: [u8; 2]) -> u16 {
        match self {
            ByteOrder::Little => u16::from_le_bytes(pair),
            ByteOrder::Big => u16::from_be_bytes(pair),
        }
    }
}

pub fn decode(bytes: &[u8]) -> Result<String, Error> {
    let (order, bom_len) = ByteOrder::detect(bytes);
    tracing::debug!(?order, bom = bom_len > 0, "detected byte order");
    let body = &bytes[bom_len..];

    if body.len() % 2 != 0 {
        return Err(Error::new(ErrorKind::Decode)
            .with_message("truncated data: odd number of bytes")
            .with_offset((bytes.len() - 1) as u64));
    }

    let units = body
        .chunks_exact(2)
        .map(|pair| order.unit([pair[0], pair[1]]));

    let mut out = String::with_capacity(body.len() / 2);
    let mut index = 0usize;
    for decoded in char::decode_utf16(units) {
        match decoded {
            Ok(ch) => {
                out.push(ch);
                index += ch.len_utf16();
            }
            Err(err) => {
                let offset = bom_len + index * 2;
                return Err(Error::new(ErrorKind::Decode)
                    .with_message(format!(
                        "illegal UTF-16 surrogate 0x{:04x}",
                        err.unpaired_surrogate()
                    ))
                    .with_offset(offset as u64));
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{ByteOrder, decode};
    use crate::core::error::ErrorKind;

    fn le(text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(u16::to_le_bytes).collect()
    }

    fn be(text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(u16::to_be_bytes).collect()
    }

    #[test]
    fn little_endian_bom_is_stripped() {
        let mut bytes = vec![0xff, 0xfe];
        bytes.extend(le("[1]"));
        assert_eq!(decode(&bytes).expect("decode"), "[1]");
    }

    #[test]
    fn big_endian_bom_is_honored() {
        let mut bytes = vec![0xfe, 0xff];
        bytes.extend(be("{\"a\": \"\u{e9}\"}"));
        assert_eq!(decode(&bytes).expect("decode"), "{\"a\": \"\u{e9}\"}");
    }

    #[test]
    fn missing_bom_defaults_to_little_endian() {
        assert_eq!(ByteOrder::detect(&le("[]")), (ByteOrder::Little, 0));
        assert_eq!(decode(&le("[]")).expect("decode"), "[]");
    }

    #[test]
    fn surrogate_pairs_decode() {
        let mut bytes = vec![0xff, 0xfe];
        bytes.extend(le("\u{1f980}"));
        assert_eq!(decode(&bytes).expect("decode"), "\u{1f980}");
    }

    #[test]
    fn odd_length_is_truncated() {
        let mut bytes = vec![0xff, 0xfe];
        bytes.extend(le("[]"));
        bytes.push(b' ');
        let err = decode(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.offset(), Some(6));
    }

    #[test]
    fn lone_surrogate_reports_offset() {
        let mut bytes = vec![0xff, 0xfe];
        bytes.extend(le("ab"));
        bytes.extend(0xdc00u16.to_le_bytes());
        let err = decode(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.offset(), Some(6));
        assert!(err.to_string().contains("0xdc00"));
    }

    #[test]
    fn empty_input_is_empty_text() {
        assert_eq!(decode(&[]).expect("decode"), "");
    }
}
