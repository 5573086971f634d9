//! Reorders stored scanlines into a top-down buffer.
//!
//! No pixel conversion happens here: each stored row, padding included, is
//! copied byte for byte into its destination slot. When the destination
//! pitch is wider than the stride, the remainder of each slot is zeroed so
//! that every destination byte is written exactly once.

use log::trace;

use super::header::RowOrder;
use super::scanline::ScanlineStore;
use crate::error::BmpError;

/// Bytes needed for `rows` destination rows of `pitch` bytes. A surface
/// whose size does not fit in `usize` can never be allocated.
pub(crate) fn surface_len(pitch: usize, rows: usize) -> Result<usize, BmpError> {
    pitch
        .checked_mul(rows)
        .ok_or(BmpError::OutOfMemory { bytes: usize::MAX })
}

/// Copy the first `rows` stored scanlines into `dst` in top-down order.
///
/// Destination row `y` starts at `y * pitch`. For bottom-up files it is
/// sourced from stored row `rows - 1 - y`; for top-down files from row `y`.
pub(crate) fn compose_into(
    store: &ScanlineStore,
    order: RowOrder,
    rows: usize,
    dst: &mut [u8],
    pitch: usize,
) -> Result<(), BmpError> {
    let stride = store.geometry().stride;
    if pitch < stride {
        return Err(BmpError::PitchTooSmall { pitch, stride });
    }
    let needed = surface_len(pitch, rows)?;
    if dst.len() < needed {
        return Err(BmpError::BufferTooSmall {
            needed,
            actual: dst.len(),
        });
    }
    // Check before touching the destination so a failure never leaves it
    // half written.
    if store.len() < rows {
        return Err(BmpError::IncompleteSurface { row: store.len() });
    }

    let dst = &mut dst[..needed];
    let write_row = |src_row: usize, out: &mut [u8]| -> Result<(), BmpError> {
        let line = store
            .row(src_row)
            .ok_or(BmpError::IncompleteSurface { row: src_row })?;
        let (data, tail) = out.split_at_mut(stride);
        data.copy_from_slice(line.bytes());
        tail.fill(0);
        Ok(())
    };

    // Stored row `i` is visited in file order in both branches; only the
    // destination walk direction changes.
    match order {
        RowOrder::BottomUp => {
            for (src_row, out) in dst.rchunks_exact_mut(pitch).enumerate() {
                write_row(src_row, out)?;
            }
        }
        RowOrder::TopDown => {
            for (src_row, out) in dst.chunks_exact_mut(pitch).enumerate() {
                write_row(src_row, out)?;
            }
        }
    }
    trace!("composed {rows} rows (stride {stride}, pitch {pitch}, {order:?})");
    Ok(())
}
