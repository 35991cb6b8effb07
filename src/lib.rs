//! Radix Blocks \
//! Integer to text conversion in any radix from 2 to 36, several digits per step.
//! This crate provides:
//! - [`BlockTable`]: every digit string of a fixed width in one radix, in numeric order.
//! - [`IntegerPrinter`]: prints signed integers by copying whole blocks out of a [`BlockTable`].
//! - [`sweep`]: runs one integer sequence through many block widths and reports the timings.

mod digit_blocks;
mod error;
mod integer_printer;
pub mod radix_cache;
pub mod radix_constants;
pub mod sweep;

pub use digit_blocks::BlockTable;
pub use error::{RadixError, Result};
pub use integer_printer::{buffer_capacity, IntegerPrinter, SignedInt};

#[cfg(test)]
mod tests {
    use crate::IntegerPrinter;

    #[test]
    fn it_works() {
        let mut printer = IntegerPrinter::new(10, 3).unwrap();
        let mut out = Vec::new();
        printer.print(&mut out, &[0_i64, 5, 1234, -42]).unwrap();
        assert_eq!(out, b"0 5 1234 -42 ");

        let mut printer = IntegerPrinter::new(2, 4).unwrap();
        assert_eq!(printer.format(10_i64), "1010");
        assert_eq!(printer.format(-10_i64), "-1010");

        let mut printer = IntegerPrinter::new(16, 2).unwrap();
        assert_eq!(printer.format(255_i64), "FF");
    }
}
