use nalsplit_bytes_util::BitReader;
use nalsplit_expgolomb::BitReaderExpGolombExt;

use crate::error::{NaluError, Result};

/// Byte offset of `seq_parameter_set_id` in an SPS NAL unit.
///
/// The header byte is followed by `profile_idc`, the constraint flags and
/// `level_idc`, one byte each, so the id starts at the fifth byte.
pub const SPS_ID_OFFSET: usize = 4;

/// Byte offset of `pic_parameter_set_id` in a PPS NAL unit, right after the header byte.
pub const PPS_ID_OFFSET: usize = 1;

/// Decodes `seq_parameter_set_id` from a sequence parameter set.
///
/// `sps` must be a whole SPS NAL unit, header byte included. The type is not
/// checked; any other unit yields whatever exp-golomb code sits at the same
/// position.
pub fn sps_id(sps: &[u8]) -> Result<u64> {
    read_exp_golomb_at(sps, SPS_ID_OFFSET)
}

/// Decodes `pic_parameter_set_id` from a picture parameter set.
///
/// `pps` must be a whole PPS NAL unit, header byte included.
pub fn pps_id(pps: &[u8]) -> Result<u64> {
    read_exp_golomb_at(pps, PPS_ID_OFFSET)
}

fn read_exp_golomb_at(nalu: &[u8], offset: usize) -> Result<u64> {
    let payload = match nalu.get(offset..) {
        Some(payload) if !payload.is_empty() => payload,
        _ => {
            return Err(NaluError::TruncatedStream {
                offset,
                needed: 1,
                remaining: 0,
            });
        }
    };

    let mut bit_reader = BitReader::new_from_slice(payload);
    bit_reader
        .read_exp_golomb()
        .map_err(|err| NaluError::from_exp_golomb(err, offset, payload))
}

#[cfg(test)]
#[cfg_attr(all(test, coverage_nightly), coverage(off))]
mod tests {
    use nalsplit_bytes_util::BitWriter;
    use nalsplit_expgolomb::BitWriterExpGolombExt;

    use super::{pps_id, sps_id};
    use crate::error::NaluError;

    fn parameter_set(header: &[u8], id: u64) -> Vec<u8> {
        let mut bit_writer = BitWriter::new(header.to_vec());
        bit_writer.write_exp_golomb(id).unwrap();
        // a few more fields so the id is not the last thing in the unit
        bit_writer.write_exp_golomb(2).unwrap();
        bit_writer.write_bit(true).unwrap();
        bit_writer.finish().unwrap()
    }

    #[test]
    fn test_sps_id() {
        // Baseline profile, level 3.0, seq_parameter_set_id = 0
        assert_eq!(sps_id(&[0x67, 0x42, 0xC0, 0x1E, 0xD9, 0x00, 0xA0]).unwrap(), 0);
        // 0001_0000: three leading zeros, suffix 000
        assert_eq!(sps_id(&[0x67, 0x64, 0x00, 0x1F, 0x10, 0x00]).unwrap(), 7);

        for id in [0, 1, 5, 31] {
            assert_eq!(sps_id(&parameter_set(&[0x67, 0x64, 0x00, 0x28], id)).unwrap(), id);
        }
    }

    #[test]
    fn test_pps_id() {
        assert_eq!(pps_id(&[0x68, 0xEB, 0xE3, 0xCB]).unwrap(), 0);
        // 0011_0000: two leading zeros, suffix 10
        assert_eq!(pps_id(&[0x68, 0x30]).unwrap(), 5);

        for id in [0, 3, 17, 255] {
            assert_eq!(pps_id(&parameter_set(&[0x68], id)).unwrap(), id);
        }
    }

    #[test]
    fn test_id_missing() {
        let err = sps_id(&[0x67, 0x42, 0x00, 0x1E]).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"stream truncated at offset 4: 1 bytes needed, 0 remaining");

        let err = pps_id(&[]).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"stream truncated at offset 1: 1 bytes needed, 0 remaining");
    }

    #[test]
    fn test_id_truncated_code() {
        // the zero prefix runs off the end of the unit
        let err = pps_id(&[0x68, 0x00]).unwrap_err();
        assert!(matches!(
            err,
            NaluError::TruncatedStream {
                offset: 1,
                needed: 2,
                remaining: 1,
            }
        ));

        // the suffix runs off the end: fifteen zeros need 31 bits in total
        let err = pps_id(&[0x68, 0x00, 0x01]).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"stream truncated at offset 1: 4 bytes needed, 2 remaining");

        let err = sps_id(&[0x67, 0x64, 0x00, 0x1F, 0x01]).unwrap_err();
        assert!(matches!(
            err,
            NaluError::TruncatedStream {
                offset: 4,
                needed: 2,
                remaining: 1,
            }
        ));
    }

    #[test]
    fn test_id_unbounded() {
        let mut pps = vec![0x68];
        pps.extend_from_slice(&[0x00; 8]);

        let err = pps_id(&pps).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"exp-golomb code at offset 1 has more than 32 leading zero bits");
    }
}
