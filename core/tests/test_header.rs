// Fixed-prefix codec: byte layout, derived offsets, and failure isolation.

use imgstore_core::constants::SIGNATURE;
use imgstore_core::error::{fmt_bytes, ContainerError};
use imgstore_core::header::{build_header, parse_prefix, HeaderPrefix, FIXED_PREFIX_LEN};

#[test]
fn fixed_prefix_is_twenty_bytes() {
    assert_eq!(FIXED_PREFIX_LEN, 20);
}

#[test]
fn build_header_layout_is_exact() {
    let sub = [0xAB_u8; 16];
    let out = build_header(7, &sub, 99);

    assert_eq!(out.len(), FIXED_PREFIX_LEN + 16);
    assert_eq!(&out[0..8], b"IMGSTORE");
    assert_eq!(&out[8..12], &7u32.to_be_bytes());
    assert_eq!(&out[12..16], &16u32.to_be_bytes());
    assert_eq!(&out[16..20], &99u32.to_be_bytes());
    assert_eq!(&out[20..], &sub);
}

#[test]
fn build_header_empty_sub_header() {
    let out = build_header(0, &[], 0);
    assert_eq!(out.len(), FIXED_PREFIX_LEN);
    assert_eq!(&out[12..16], &0u32.to_be_bytes());
}

#[test]
fn prefix_round_trip() {
    let out = build_header(3, &[1, 2, 3, 4], 55);
    let prefix = parse_prefix(&out).unwrap();

    assert_eq!(
        prefix,
        HeaderPrefix {
            version_num: 3,
            version_header_len: 4,
            end_padding_size: 55,
        }
    );
    assert_eq!(prefix.data_offset(), FIXED_PREFIX_LEN + 4);
}

#[test]
fn parse_prefix_reads_big_endian() {
    let mut buf = Vec::new();
    buf.extend_from_slice(&SIGNATURE);
    buf.extend_from_slice(&[0x00, 0x00, 0x01, 0x00]); // version 256
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x40]); // sub-header len 64
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x37]); // padding 55

    let prefix = parse_prefix(&buf).unwrap();
    assert_eq!(prefix.version_num, 256);
    assert_eq!(prefix.version_header_len, 64);
    assert_eq!(prefix.end_padding_size, 55);
}

#[test]
fn parse_prefix_truncated() {
    let err = parse_prefix(&[0u8; 10]).unwrap_err();
    assert!(matches!(
        err,
        ContainerError::TruncatedBuffer { have: 10, need: 20 }
    ));
}

#[test]
fn parse_prefix_empty_buffer() {
    let err = parse_prefix(&[]).unwrap_err();
    assert!(matches!(
        err,
        ContainerError::TruncatedBuffer { have: 0, need: 20 }
    ));
}

#[test]
fn parse_prefix_signature_mismatch() {
    let mut buf = build_header(0, &[], 0);
    buf[0] = b'X';
    let err = parse_prefix(&buf).unwrap_err();
    assert!(matches!(err, ContainerError::SignatureMismatch { .. }));
}

#[test]
fn signature_mismatch_reports_found_bytes() {
    let mut buf = build_header(0, &[], 0);
    buf[..8].copy_from_slice(b"NOTMAGIC");
    match parse_prefix(&buf).unwrap_err() {
        ContainerError::SignatureMismatch { have } => assert_eq!(&have, b"NOTMAGIC"),
        other => panic!("expected SignatureMismatch, got {other:?}"),
    }
}

#[test]
fn fmt_bytes_ascii() {
    assert_eq!(fmt_bytes(b"IMGSTORE"), r#"b"IMGSTORE""#);
}

#[test]
fn fmt_bytes_binary() {
    assert_eq!(fmt_bytes(&[0x00, 0xFF, 0x01]), "0x00ff01");
}

#[test]
fn signature_error_message_names_both_signatures() {
    let mut buf = build_header(0, &[], 0);
    buf[..8].copy_from_slice(b"PNGSTORE");
    let msg = parse_prefix(&buf).unwrap_err().to_string();
    assert!(msg.contains("IMGSTORE"), "{msg}");
    assert!(msg.contains("PNGSTORE"), "{msg}");
}

#[test]
fn signature_checked_before_lengths() {
    // Garbage everywhere after a bad signature: the signature error must win.
    let mut buf = vec![0xFF_u8; FIXED_PREFIX_LEN];
    buf[..8].copy_from_slice(b"????????");
    let err = parse_prefix(&buf).unwrap_err();
    assert!(matches!(err, ContainerError::SignatureMismatch { .. }));
}
