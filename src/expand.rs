use std::io;

use crate::bitio::{BitRead, BitWrite};
use crate::RUN_WIDTH;

/// Expands run-length records back into the original bit sequence.
///
/// The first record is taken as a run of `0` bits and the value flips
/// after every record, zero-length records included, which is how runs
/// split across a continuation marker come back out in one piece.
/// Consumes `input` to exhaustion and closes `output`.
pub fn expand<R: BitRead, W: BitWrite>(input: &mut R, output: &mut W) -> io::Result<()> {
    let mut current = false;
    let mut bits: u64 = 0;

    while !input.is_empty()? {
        let run = input.read_bits(RUN_WIDTH)?;
        trace!("run of {run} {}s", current as u8);
        for _ in 0..run {
            output.write_bit(current)?;
        }
        bits += u64::from(run);
        current = !current;
    }
    output.close()?;
    debug!("expanded into {bits} bits");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::expand;
    use crate::bitio::{BitBuf, BitReader, BitWriter};
    use crate::compress;
    use std::io::Cursor;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Setup function that is only run once, even if called multiple times.
    fn setup() {
        INIT.call_once(|| {
            let _ = pretty_env_logger::try_init();
        });
    }

    fn expand_bytes(encoded: &[u8]) -> Vec<u8> {
        let mut decoded = Vec::new();
        expand(
            &mut BitReader::new(Cursor::new(encoded)),
            &mut BitWriter::new(&mut decoded),
        )
        .unwrap();
        decoded
    }

    fn roundtrip_bits(bits: &[bool]) {
        let mut encoded = Vec::new();
        compress(
            &mut BitBuf::from_bits(bits.to_vec()),
            &mut BitWriter::new(&mut encoded),
        )
        .unwrap();
        let mut decoded = BitBuf::new();
        expand(&mut BitReader::new(Cursor::new(&encoded[..])), &mut decoded).unwrap();
        assert_eq!(decoded.bits, bits, "{} bits", bits.len());
    }

    #[test]
    fn known_encodings_decode_exactly() {
        setup();
        for (expected, input) in crate::TEST_VECTOR.into_iter() {
            let input = hex::decode(input).unwrap();
            let expected = hex::decode(expected).unwrap();
            assert_eq!(
                expected,
                expand_bytes(&input),
                "encoding {}",
                hex::encode(&input)
            );
        }
    }

    #[test]
    fn empty_input_expands_to_nothing() {
        setup();
        assert!(expand_bytes(&[]).is_empty());
    }

    #[test]
    fn zero_length_record_emits_no_bits() {
        setup();
        // a lone zero record flips the value and produces nothing
        assert!(expand_bytes(&[0]).is_empty());
        assert_eq!(expand_bytes(&[0, 8]), [0xff]);
    }

    #[test]
    fn continuation_marker_keeps_the_bit_value() {
        setup();
        let mut decoded = BitBuf::new();
        expand(
            &mut BitReader::new(Cursor::new([255u8, 0, 1])),
            &mut decoded,
        )
        .unwrap();
        assert_eq!(decoded.bits.len(), 256);
        assert!(decoded.bits.iter().all(|&bit| !bit));
    }

    #[test]
    fn record_sum_matches_payload_length() {
        setup();
        let mut encoded = Vec::new();
        compress(
            &mut BitBuf::from_bits(vec![true; 777]),
            &mut BitWriter::new(&mut encoded),
        )
        .unwrap();
        let total: u32 = encoded.iter().map(|&record| record as u32).sum();
        assert_eq!(total, 777);
    }

    #[test]
    fn roundtrip_structural_payloads() {
        setup();
        roundtrip_bits(&[]);
        roundtrip_bits(&[false]);
        roundtrip_bits(&[true]);
        roundtrip_bits(&[false; 255]);
        roundtrip_bits(&[true; 255]);
        roundtrip_bits(&[false; 256]);
        roundtrip_bits(&[true; 256]);
        roundtrip_bits(&[false; 1000]);
        roundtrip_bits(&[true; 1000]);
    }

    #[test]
    fn roundtrip_alternating_pattern() {
        setup();
        // 4 zeros, 3 ones, 5 zeros
        let mut bits = vec![false; 4];
        bits.extend_from_slice(&[true; 3]);
        bits.extend_from_slice(&[false; 5]);
        roundtrip_bits(&bits);
    }

    #[test]
    fn roundtrip_dense_bytes() {
        setup();
        for payload in [
            "f21cad8766dec123488d4c386770951b9022d3",
            "ffffffffff21cad8766dec12",
            "00ff00ff00ff",
            "deadbeef",
        ] {
            let payload = hex::decode(payload).unwrap();
            let mut encoded = Vec::new();
            compress(
                &mut BitReader::new(Cursor::new(&payload[..])),
                &mut BitWriter::new(&mut encoded),
            )
            .unwrap();
            assert_eq!(
                expand_bytes(&encoded),
                payload,
                "payload {}",
                hex::encode(&payload)
            );
        }
    }
}
