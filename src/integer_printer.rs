//! # IntegerPrinter
//! Writes signed integers as radix-`r` text, `w` digits at a time, by looking up
//! `n mod r^w` in a precomputed [`BlockTable`].
//! # Example
//! ```
//! use radix_blocks::IntegerPrinter;
//!
//! let mut printer = IntegerPrinter::new(10, 3).unwrap();
//! let mut out = Vec::new();
//! printer.print(&mut out, &[0_i64, 5, 1234, -42]).unwrap();
//! assert_eq!(out, b"0 5 1234 -42 ");
//! assert_eq!(printer.format(-10_i32), "-10");
//! ```

use std::io::Write;
use std::sync::Arc;

use log::trace;

use crate::digit_blocks::BlockTable;
use crate::error::{RadixError, Result};
use crate::radix_cache;
use crate::radix_constants::*;

/// Fixed-width two's-complement integers the printer accepts.
pub trait SignedInt: Copy {
    const BITS: u32;

    fn is_negative(self) -> bool;

    /// Absolute value, widened so that `MIN` has a magnitude too.
    fn magnitude(self) -> u64;
}

macro_rules! impl_signed_int {
    ($($i: ty),*) => {
    $(
    impl SignedInt for $i {
        const BITS: u32 = <$i>::BITS;

        #[inline]
        fn is_negative(self) -> bool {
            self < 0
        }

        #[inline]
        fn magnitude(self) -> u64 {
            <$i>::unsigned_abs(self) as u64
        }
    }
    )*
    };
}
impl_signed_int!(i8, i16, i32, i64, isize);

/// Bytes needed for sign, the widest run of whole blocks and the trailing separator.
/// `width == 0` sizes for plain digit-by-digit output.
pub fn buffer_capacity(radix: u32, width: usize, bit_width: u32) -> usize {
    let digits = max_digit_count(radix, bit_width);
    let body = if width == 0 {
        digits
    } else {
        digits.div_ceil(width) * width
    };
    1 + body + 1
}

#[derive(Debug)]
pub struct IntegerPrinter {
    radix: u32,
    width: usize,
    // `None` when `width == 0`
    table: Option<Arc<BlockTable>>,
    buf: Vec<u8>,
}

// construction
impl IntegerPrinter {
    /// Printer for `radix` with blocks of `width` digits, sharing the process-wide table.
    /// `width == 0` selects the digit-by-digit baseline and needs no table.
    pub fn new(radix: u32, width: u32) -> Result<Self> {
        if !is_valid_radix(radix) {
            return Err(RadixError::RadixOutOfRange(radix));
        }
        if width == 0 {
            return Ok(IntegerPrinter { radix, width: 0, table: None, buf: Vec::new() });
        }
        let table = radix_cache::block_table(radix, width)?;
        Ok(IntegerPrinter::with_table(table))
    }

    pub fn with_table(table: Arc<BlockTable>) -> Self {
        IntegerPrinter {
            radix: table.radix(),
            width: table.width(),
            table: Some(table),
            buf: Vec::new(),
        }
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn table(&self) -> Option<&BlockTable> {
        self.table.as_deref()
    }
}

// printing
impl IntegerPrinter {
    /// Writes every integer followed by a space, in order.
    pub fn print<T: SignedInt, W: Write>(&mut self, out: &mut W, integers: &[T]) -> Result<()> {
        trace!("printing {} integers, radix {}, width {}", integers.len(), self.radix, self.width);
        for &n in integers {
            self.write_one(out, n)?;
        }
        Ok(())
    }

    pub fn write_one<T: SignedInt, W: Write>(&mut self, out: &mut W, n: T) -> Result<()> {
        let start = self.render(n);
        out.write_all(&self.buf[start..])?;
        Ok(())
    }

    /// Text of `n` alone, without separator.
    pub fn format<T: SignedInt>(&mut self, n: T) -> String {
        let start = self.render(n);
        let end = self.buf.len() - 1;
        self.buf[start..end].iter().map(|&b| b as char).collect()
    }

    /// Renders `n` and the separator at the tail of the buffer, returning where the text starts.
    fn render<T: SignedInt>(&mut self, n: T) -> usize {
        let capacity = buffer_capacity(self.radix, self.width, T::BITS);
        if self.buf.len() < capacity {
            self.buf.resize(capacity, ZERO_DIGIT);
        }
        let buf = &mut self.buf;
        let last = buf.len() - 1;
        buf[last] = SEPARATOR;

        if n.magnitude() == 0 {
            buf[last - 1] = ZERO_DIGIT;
            return last - 1;
        }

        let mut m = n.magnitude();
        let mut pos = last;
        match &self.table {
            Some(table) => {
                let width = self.width;
                let block_count = table.block_count() as u64;
                while m > 0 {
                    let r = (m % block_count) as usize;
                    m /= block_count;
                    pos = IntegerPrinter::step_back(pos, width);
                    buf[pos..pos + width].copy_from_slice(table.block(r));
                }
                // the leading block is zero-padded
                while buf[pos] == ZERO_DIGIT {
                    pos += 1;
                }
            }
            None => {
                let radix = self.radix as u64;
                while m > 0 {
                    pos = IntegerPrinter::step_back(pos, 1);
                    buf[pos] = digit_char((m % radix) as u32);
                    m /= radix;
                }
            }
        }

        if n.is_negative() {
            pos -= 1;
            buf[pos] = MINUS_SIGN;
        }
        pos
    }

    // slot 0 always stays free for the sign
    #[inline]
    fn step_back(pos: usize, len: usize) -> usize {
        assert!(pos > len, "integer buffer too small: {} bytes left, {} needed", pos, len + 1);
        pos - len
    }
}

#[cfg(test)]
fn print_to_string<T: SignedInt>(radix: u32, width: u32, integers: &[T]) -> String {
    let mut printer = IntegerPrinter::new(radix, width).unwrap();
    let mut out = Vec::new();
    printer.print(&mut out, integers).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_radix_10() {
    assert_eq!(print_to_string(10, 3, &[0_i64]), "0 ");
    assert_eq!(print_to_string(10, 3, &[5_i64]), "5 ");
    assert_eq!(print_to_string(10, 3, &[1234_i64]), "1234 ");
    assert_eq!(print_to_string(10, 3, &[-42_i64]), "-42 ");
    assert_eq!(print_to_string(10, 3, &[0_i64, 5, 1234, -42]), "0 5 1234 -42 ");
    assert_eq!(print_to_string(10, 3, &[1000_i64, -1_000_000]), "1000 -1000000 ");
}

#[test]
fn test_radix_2_and_16() {
    assert_eq!(print_to_string(2, 4, &[10_i64, -10]), "1010 -1010 ");
    assert_eq!(print_to_string(16, 2, &[255_i64]), "FF ");
    assert_eq!(print_to_string(16, 2, &[-256_i64, 4096]), "-100 1000 ");
    assert_eq!(print_to_string(36, 2, &[35_i64, 36, 1295, 1296]), "Z 10 ZZ 100 ");
}

#[test]
fn test_zero_every_radix() {
    for radix in MIN_RADIX..=MAX_RADIX {
        for width in 0..=2 {
            assert_eq!(print_to_string(radix, width, &[0_i32]), "0 ");
        }
    }
}

#[test]
fn test_min_and_max() {
    let mut printer = IntegerPrinter::new(10, 4).unwrap();
    assert_eq!(printer.format(i64::MIN), "-9223372036854775808");
    assert_eq!(printer.format(i64::MAX), "9223372036854775807");
    assert_eq!(printer.format(i8::MIN), "-128");
    assert_eq!(printer.format(i16::MIN), "-32768");
    assert_eq!(printer.format(i32::MIN), "-2147483648");

    let mut printer = IntegerPrinter::new(2, 16).unwrap();
    let expected = format!("-1{}", "0".repeat(63));
    assert_eq!(printer.format(i64::MIN), expected);
    assert_eq!(printer.format(i8::MIN), "-10000000");
    assert_eq!(printer.format(i8::MAX), "1111111");

    let mut printer = IntegerPrinter::new(16, 0).unwrap();
    assert_eq!(printer.format(i64::MIN), "-8000000000000000");
}

#[test]
fn test_buffer_reused_across_types() {
    let mut printer = IntegerPrinter::new(3, 5).unwrap();
    let wide = printer.format(i64::MIN);
    assert_eq!(printer.format(-7_i8), "-21");
    assert_eq!(printer.format(i64::MIN), wide);
    assert_eq!(printer.format(0_isize), "0");
}

#[test]
fn test_buffer_capacity() {
    assert_eq!(buffer_capacity(10, 3, 64), 23);
    assert_eq!(buffer_capacity(2, 16, 64), 82);
    assert_eq!(buffer_capacity(2, 0, 64), 67);
    assert_eq!(buffer_capacity(2, 16, 8), 18);
}

#[test]
fn test_widths_agree() {
    let values = [1_i64, -1, 7, 100, -99_999, 23948724552, 3232485432521, 32142142574354398, -2458789213847, i64::MAX, i64::MIN];
    for radix in MIN_RADIX..=MAX_RADIX {
        let baseline = print_to_string(radix, 0, &values);
        let mut width = 1;
        while BlockTable::block_count_of(radix, width).is_some() && width <= 4 {
            assert_eq!(print_to_string(radix, width, &values), baseline, "radix {}, width {}", radix, width);
            width += 1;
        }
    }
}

#[test]
fn test_edges_round_trip() {
    for radix in MIN_RADIX..=MAX_RADIX {
        let cube = (radix as i64).pow(3);
        let values = [i64::MIN, i64::MAX, -1, 1, cube, -cube];
        for width in 0..=4 {
            if width > 0 && BlockTable::block_count_of(radix, width).is_none() {
                continue;
            }
            let mut printer = IntegerPrinter::new(radix, width).unwrap();
            for &n in &values {
                let text = printer.format(n);
                assert_eq!(i64::from_str_radix(&text, radix).unwrap(), n, "radix {}, width {}", radix, width);
            }
            for &n in &[i8::MIN, i8::MAX] {
                let text = printer.format(n);
                assert_eq!(i8::from_str_radix(&text, radix).unwrap(), n, "radix {}, width {}", radix, width);
            }
        }
    }
}

#[test]
fn test_with_table() {
    let table = Arc::new(BlockTable::new(8, 2).unwrap());
    let mut printer = IntegerPrinter::with_table(Arc::clone(&table));
    assert_eq!(printer.radix(), 8);
    assert_eq!(printer.width(), 2);
    assert_eq!(printer.table(), Some(table.as_ref()));
    assert_eq!(printer.format(-511_i16), "-777");
}

#[test]
fn test_new_rejects_bad_config() {
    assert!(matches!(IntegerPrinter::new(0, 0), Err(RadixError::RadixOutOfRange(0))));
    assert!(matches!(IntegerPrinter::new(37, 2), Err(RadixError::RadixOutOfRange(37))));
    assert!(matches!(IntegerPrinter::new(2, 21), Err(RadixError::TableTooLarge { radix: 2, width: 21 })));
    assert!(IntegerPrinter::new(2, 0).unwrap().table().is_none());
}

#[test]
fn test_sink_error_propagates() {
    struct Broken;
    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
    let mut printer = IntegerPrinter::new(10, 2).unwrap();
    assert!(matches!(printer.print(&mut Broken, &[1_i64, 2]), Err(RadixError::Io(_))));
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn radix_and_width() -> impl Strategy<Value = (u32, u32)> {
        (2u32..=36, 0u32..=5)
            .prop_filter("table too large", |&(r, w)| w == 0 || BlockTable::block_count_of(r, w).is_some())
    }

    proptest! {
        #[test]
        fn test_round_trip((radix, width) in radix_and_width(), n in any::<i64>()) {
            let mut printer = IntegerPrinter::new(radix, width).unwrap();
            let text = printer.format(n);
            prop_assert_eq!(i64::from_str_radix(&text, radix).unwrap(), n, "text {}", text);
        }

        #[test]
        fn test_no_leading_zero_or_plus((radix, width) in radix_and_width(), n in any::<i32>()) {
            prop_assume!(n != 0);
            let mut printer = IntegerPrinter::new(radix, width).unwrap();
            let text = printer.format(n);
            let digits = text.strip_prefix('-').unwrap_or(&text);
            prop_assert_eq!(text.starts_with('-'), n < 0);
            prop_assert!(!digits.starts_with('0'));
            prop_assert!(!text.contains('+'));
        }

        #[test]
        fn test_width_independent(radix in 2u32..=36, w in 1u32..=4, n in any::<i64>()) {
            prop_assume!(BlockTable::block_count_of(radix, w).is_some());
            let mut blocked = IntegerPrinter::new(radix, w).unwrap();
            let mut plain = IntegerPrinter::new(radix, 0).unwrap();
            prop_assert_eq!(blocked.format(n), plain.format(n));
        }
    }
}
