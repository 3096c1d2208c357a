use std::io;

use crate::bitio::{BitRead, BitWrite};
use crate::{MAX_RUN, RUN_WIDTH};

/// Compresses a bit sequence into run-length records.
///
/// Consumes `input` to exhaustion, writes one 8-bit record per run and
/// closes `output`. A run longer than [`MAX_RUN`] is split with a
/// continuation marker, a maximal record followed by a zero-length one.
///
/// The first record describes a run of `0` bits; an input starting with a
/// `1` bit gets a leading zero-length record.
pub fn compress<R: BitRead, W: BitWrite>(input: &mut R, output: &mut W) -> io::Result<()> {
    let mut current = false;
    let mut run: u32 = 0;
    let mut bits: u64 = 0;
    let mut records: u64 = 0;

    while !input.is_empty()? {
        let bit = input.read_bit()?;
        bits += 1;
        if bit != current || run == MAX_RUN {
            trace!("run of {run} {}s ends", current as u8);
            output.write_bits(run, RUN_WIDTH)?;
            records += 1;
            run = 0;
            if bit == current {
                // the run only hit the record cap: a zero-length record
                // of the other value keeps the decoder on the same bit
                output.write_bits(0, RUN_WIDTH)?;
                records += 1;
            } else {
                current = bit;
            }
        }
        run += 1;
        debug_assert!(run <= MAX_RUN);
    }
    if run > 0 {
        trace!("final run of {run} {}s", current as u8);
        output.write_bits(run, RUN_WIDTH)?;
        records += 1;
    }
    output.close()?;
    debug!("compressed {bits} bits into {records} records");
    Ok(())
}
