use bytes::Bytes;

use crate::{
    NALUnitHeader, NALUnitType, bitstream_to_nalus, nalu_type, pps_id, sps_id, stream_to_nalus, write_bitstream,
    write_length_prefixed,
};

// AUD, SPS (seq_parameter_set_id 1), PPS (pic_parameter_set_id 2), an IDR slice
// with an escaped start code emulation and a non-IDR slice.
const BITSTREAM: &[u8] = &[
    0x00, 0x00, 0x00, 0x01, 0x09, 0xF0, //
    0x00, 0x00, 0x00, 0x01, 0x67, 0x64, 0x00, 0x1F, 0x40, 0xAC, 0xD9, 0x40, //
    0x00, 0x00, 0x00, 0x01, 0x68, 0x60, 0xE3, 0xCB, 0x22, //
    0x00, 0x00, 0x01, 0x65, 0x88, 0x84, 0x00, 0x00, 0x03, 0x01, 0x2F, 0xF0, 0x10, //
    0x00, 0x00, 0x01, 0x41, 0x9A, 0x21, 0x6C,
];

#[test]
fn test_split_and_inspect() {
    let nalus = bitstream_to_nalus(BITSTREAM).unwrap();

    let types = nalus.iter().map(|nalu| nalu_type(nalu).unwrap()).collect::<Vec<_>>();
    assert_eq!(
        types,
        vec![
            NALUnitType::AccessUnitDelimiter,
            NALUnitType::SPS,
            NALUnitType::PPS,
            NALUnitType::IDRSliceLayerWithoutPartitioning,
            NALUnitType::NonIDRSliceLayerWithoutPartitioning,
        ]
    );

    assert_eq!(sps_id(&nalus[1]).unwrap(), 1);
    assert_eq!(pps_id(&nalus[2]).unwrap(), 2);
    assert_eq!(
        nalus[3],
        Bytes::from_static(&[0x65, 0x88, 0x84, 0x00, 0x00, 0x01, 0x2F, 0xF0, 0x10])
    );

    let header = NALUnitHeader::from_nalu(&nalus[4]).unwrap();
    assert_eq!(header.nal_ref_idc, 2);
    assert!(!header.forbidden_zero_bit);
}

#[test]
fn test_annexb_to_length_prefixed() {
    let nalus = bitstream_to_nalus(BITSTREAM).unwrap();

    let mut stream = Vec::new();
    write_length_prefixed(&nalus, &mut stream).unwrap();

    let result = stream_to_nalus(&stream).unwrap();
    assert_eq!(result.idr_count, 1);
    assert_eq!(result.nalus, nalus);
}

#[test]
fn test_length_prefixed_to_annexb() {
    let stream = [
        0x00, 0x00, 0x00, 0x02, 0x65, 0xAA, //
        0x00, 0x00, 0x00, 0x02, 0x41, 0xBB, //
        0x00, 0x00, 0x00, 0x03, 0x65, 0xCC, 0xDD,
    ];
    let result = stream_to_nalus(&stream).unwrap();
    assert_eq!(result.idr_count, 2);

    let mut bitstream = Vec::new();
    write_bitstream(&result.nalus, &mut bitstream).unwrap();

    insta::assert_debug_snapshot!(bitstream_to_nalus(&bitstream).unwrap(), @r#"
    [
        b"e\xaa",
        b"A\xbb",
        b"e\xcc\xdd",
    ]
    "#);
}

#[test]
fn test_annexb_rewrite_keeps_escapes() {
    let nalus = bitstream_to_nalus(BITSTREAM).unwrap();

    let mut bitstream = Vec::new();
    write_bitstream(&nalus, &mut bitstream).unwrap();

    assert!(
        bitstream
            .windows(6)
            .any(|window| window == [0x84, 0x00, 0x00, 0x03, 0x01, 0x2F])
    );
    assert_eq!(bitstream_to_nalus(&bitstream).unwrap(), nalus);
}

#[test]
fn test_write_escapes_start_code_emulation() {
    let mut bitstream = Vec::new();
    write_bitstream([&[0x65u8, 0x88, 0x84, 0x00, 0x00, 0x01, 0x2F, 0xF0, 0x10][..]], &mut bitstream).unwrap();

    assert_eq!(
        bitstream,
        vec![0x00, 0x00, 0x00, 0x01, 0x65, 0x88, 0x84, 0x00, 0x00, 0x03, 0x01, 0x2F, 0xF0, 0x10]
    );
}
