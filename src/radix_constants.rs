pub const MIN_RADIX: u32 = 2;

pub const MAX_RADIX: u32 = 36;

pub const DIGITS: [u8; 36] = [
    b'0', b'1', b'2', b'3', b'4', b'5',
    b'6', b'7', b'8', b'9', b'A', b'B',
    b'C', b'D', b'E', b'F', b'G', b'H',
    b'I', b'J', b'K', b'L', b'M', b'N',
    b'O', b'P', b'Q', b'R', b'S', b'T',
    b'U', b'V', b'W', b'X', b'Y', b'Z'
];

/// The zero digit of every radix.
pub const ZERO_DIGIT: u8 = DIGITS[0];

/// `log2(radix)` as `(numerator, denominator)`, truncated to two decimals and reduced.
/// Always a lower bound, so digit counts derived from it never fall short.
pub const BITS_PER_DIGIT: [(u32, u32); 37] = [
    (0, 0), (0, 0),
    (1, 1), (79, 50), (2, 1), (58, 25), (129, 50), (14, 5),
    (3, 1), (79, 25), (83, 25), (69, 20), (179, 50), (37, 10),
    (19, 5), (39, 10), (4, 1), (102, 25), (104, 25), (106, 25),
    (108, 25), (439, 100), (89, 20), (113, 25), (229, 50), (116, 25),
    (47, 10), (19, 4), (24, 5), (97, 20), (49, 10), (99, 20),
    (5, 1), (126, 25), (127, 25), (128, 25), (129, 25)
];

/// Upper bound on `radix^width` for a single block table.
pub const MAX_BLOCK_COUNT: usize = 1 << 20;

pub const SEPARATOR: u8 = b' ';

pub const MINUS_SIGN: u8 = b'-';

#[inline]
pub fn digit_char(value: u32) -> u8 {
    DIGITS[value as usize]
}

#[inline]
pub fn is_valid_radix(radix: u32) -> bool {
    (MIN_RADIX..=MAX_RADIX).contains(&radix)
}

/// Upper bound on the digits needed to write a `bit_width`-bit magnitude in `radix`.
pub fn max_digit_count(radix: u32, bit_width: u32) -> usize {
    let (num, den) = BITS_PER_DIGIT[radix as usize];
    let bits = bit_width as u64 * den as u64;
    (bits.div_ceil(num as u64) + 1) as usize
}

#[test]
fn test_digit_char() {
    assert_eq!(digit_char(0), b'0');
    assert_eq!(digit_char(9), b'9');
    assert_eq!(digit_char(10), b'A');
    assert_eq!(digit_char(35), b'Z');
}

#[test]
fn test_bits_per_digit_is_lower_bound() {
    for radix in MIN_RADIX..=MAX_RADIX {
        let (num, den) = BITS_PER_DIGIT[radix as usize];
        let approx = num as f64 / den as f64;
        let exact = (radix as f64).log2();
        assert!(approx <= exact, "radix {}: {} > {}", radix, approx, exact);
        assert!(exact - approx < 0.01, "radix {}: {} too coarse", radix, approx);
    }
}

#[test]
fn test_max_digit_count_covers_u64() {
    for radix in MIN_RADIX..=MAX_RADIX {
        let needed = {
            let mut n = u64::MAX;
            let mut count = 0;
            while n > 0 {
                n /= radix as u64;
                count += 1;
            }
            count
        };
        assert!(max_digit_count(radix, 64) >= needed, "radix {}", radix);
    }
    assert_eq!(max_digit_count(2, 64), 65);
    assert_eq!(max_digit_count(16, 64), 17);
}
