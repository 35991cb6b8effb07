//! # Digit blocks
//! A [`BlockTable`] holds every digit string of a fixed width in one radix, in increasing
//! numeric order: entry `i` is `i` written in base `radix`, left-padded with `'0'`.
//! # Example
//! ```
//! use radix_blocks::BlockTable;
//!
//! let table = BlockTable::new(16, 2).unwrap();
//! assert_eq!(table.block_count(), 256);
//! assert_eq!(table.block(0xA7), b"A7");
//! assert_eq!(table.block(5), b"05");
//! ```

use std::fmt::{self, Display, Write};

use log::debug;

use crate::error::{RadixError, Result};
use crate::radix_constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTable {
    radix: u32,
    width: usize,
    block_count: usize,
    // `block_count` blocks of `width` bytes, back to back
    blocks: Vec<u8>,
}

// construction
impl BlockTable {
    pub fn new(radix: u32, width: u32) -> Result<Self> {
        if !is_valid_radix(radix) {
            return Err(RadixError::RadixOutOfRange(radix));
        }
        if width == 0 {
            return Err(RadixError::ZeroBlockWidth);
        }
        let block_count = BlockTable::block_count_of(radix, width)
            .ok_or(RadixError::TableTooLarge { radix, width })?;

        let blocks = BlockTable::generate(radix, width as usize, block_count);
        debug!("generated block table: radix {}, width {}, {} blocks", radix, width, block_count);

        Ok(BlockTable { radix, width: width as usize, block_count, blocks })
    }

    /// `radix^width`, or `None` when it exceeds [`MAX_BLOCK_COUNT`].
    pub fn block_count_of(radix: u32, width: u32) -> Option<usize> {
        radix
            .checked_pow(width)
            .map(|n| n as usize)
            .filter(|&n| n <= MAX_BLOCK_COUNT)
    }

    /// Counts from `0` to `radix^width - 1` with an odometer, least significant digit
    /// first, emitting the counter as one block per step.
    fn generate(radix: u32, width: usize, block_count: usize) -> Vec<u8> {
        let mut blocks = Vec::with_capacity(block_count * width);
        let mut counter = vec![0u32; width];
        for _ in 0..block_count {
            blocks.extend(counter.iter().map(|&d| digit_char(d)));
            for d in counter.iter_mut().rev() {
                *d += 1;
                if *d < radix {
                    break;
                }
                *d = 0;
            }
        }
        blocks
    }
}

impl BlockTable {
    #[inline]
    pub fn radix(&self) -> u32 {
        self.radix
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn block_count(&self) -> usize {
        self.block_count
    }

    /// Digits of `index`, `width` bytes long. Panics if `index >= block_count`.
    #[inline]
    pub fn block(&self, index: usize) -> &[u8] {
        let start = index * self.width;
        &self.blocks[start..start + self.width]
    }

    #[cfg(test)]
    fn as_bytes(&self) -> &[u8] {
        &self.blocks
    }
}

// every block followed by a space
impl Display for BlockTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in self.blocks.chunks_exact(self.width) {
            for &b in block {
                f.write_char(b as char)?;
            }
            f.write_char(SEPARATOR as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
fn padded_digits(mut n: usize, radix: u32, width: usize) -> Vec<u8> {
    let mut digits = vec![ZERO_DIGIT; width];
    for slot in digits.iter_mut().rev() {
        *slot = digit_char((n % radix as usize) as u32);
        n /= radix as usize;
    }
    digits
}

#[test]
fn test_new_rejects_bad_config() {
    assert!(matches!(BlockTable::new(1, 3), Err(RadixError::RadixOutOfRange(1))));
    assert!(matches!(BlockTable::new(37, 1), Err(RadixError::RadixOutOfRange(37))));
    assert!(matches!(BlockTable::new(10, 0), Err(RadixError::ZeroBlockWidth)));
    assert!(matches!(
        BlockTable::new(10, 7),
        Err(RadixError::TableTooLarge { radix: 10, width: 7 })
    ));
    assert!(matches!(
        BlockTable::new(36, 40),
        Err(RadixError::TableTooLarge { radix: 36, width: 40 })
    ));
}

#[test]
fn test_block_count() {
    assert_eq!(BlockTable::block_count_of(2, 20), Some(1 << 20));
    assert_eq!(BlockTable::block_count_of(2, 21), None);
    assert_eq!(BlockTable::block_count_of(10, 6), Some(1_000_000));
    assert_eq!(BlockTable::block_count_of(36, 3), Some(46656));
    assert_eq!(BlockTable::block_count_of(36, 4), None);
}

#[test]
fn test_blocks_radix_10() {
    let table = BlockTable::new(10, 3).unwrap();
    assert_eq!(table.block_count(), 1000);
    assert_eq!(table.as_bytes().len(), 3000);
    assert_eq!(table.block(0), b"000");
    assert_eq!(table.block(7), b"007");
    assert_eq!(table.block(42), b"042");
    assert_eq!(table.block(234), b"234");
    assert_eq!(table.block(999), b"999");
}

#[test]
fn test_blocks_match_padded_digits() {
    for radix in MIN_RADIX..=MAX_RADIX {
        for width in 1..=3 {
            let table = BlockTable::new(radix, width).unwrap();
            for i in 0..table.block_count() {
                assert_eq!(
                    table.block(i),
                    padded_digits(i, radix, width as usize).as_slice(),
                    "radix {}, width {}, index {}", radix, width, i
                );
            }
        }
    }
}

#[test]
fn test_display() {
    let table = BlockTable::new(2, 2).unwrap();
    assert_eq!(table.to_string(), "00 01 10 11 ");
    let table = BlockTable::new(36, 1).unwrap();
    assert_eq!(table.to_string(), "0 1 2 3 4 5 6 7 8 9 A B C D E F G H I J K L M N O P Q R S T U V W X Y Z ");
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_entry_is_padded_index(radix in 2u32..=36, width in 1u32..=4, seed in any::<u64>()) {
            prop_assume!(BlockTable::block_count_of(radix, width).is_some());
            let table = BlockTable::new(radix, width).unwrap();
            let index = (seed % table.block_count() as u64) as usize;
            let expected = padded_digits(index, radix, width as usize);
            prop_assert_eq!(table.block(index), expected.as_slice());
        }
    }
}
