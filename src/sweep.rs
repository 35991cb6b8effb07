//! Block-width sweep: prints one integer sequence with many `(radix, width)` printers
//! and records how long each run took.
//!
//! Report lines look like `RADIX: 10, BLOCK_WIDTH: 3; 1520`, the last field in microseconds.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use log::info;

use crate::error::{RadixError, Result};
use crate::integer_printer::IntegerPrinter;

/// Used when no input is given.
pub const DEFAULT_INTEGERS: [i64; 4] = [23948724552, 3232485432521, 32142142574354398, -2458789213847];

pub const DEFAULT_RANGES: [SweepRange; 2] = [
    SweepRange { radix: 10, min_width: 0, max_width: 5, step: 1 },
    SweepRange { radix: 2, min_width: 0, max_width: 16, step: 1 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepRange {
    pub radix: u32,
    pub min_width: u32,
    pub max_width: u32,
    pub step: u32,
}

impl SweepRange {
    /// `min_width, min_width + step, ...` up to `max_width`. A zero step counts as one.
    pub fn widths(&self) -> impl Iterator<Item = u32> {
        (self.min_width..=self.max_width).step_by(self.step.max(1) as usize)
    }
}

/// Parses whitespace-delimited integers.
pub fn read_integers<R: BufRead>(reader: R) -> Result<Vec<i64>> {
    let mut integers = Vec::new();
    for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let n = token.parse::<i64>().map_err(|_| RadixError::InvalidInteger {
                index: integers.len(),
                token: token.to_string(),
            })?;
            integers.push(n);
        }
    }
    Ok(integers)
}

pub fn report_line(radix: u32, width: u32, elapsed: Duration) -> String {
    format!("RADIX: {}, BLOCK_WIDTH: {}; {}", radix, width, elapsed.as_micros())
}

/// Prints `integers` once followed by a newline. Table construction is not timed.
pub fn run_one<W: Write>(radix: u32, width: u32, integers: &[i64], out: &mut W) -> Result<Duration> {
    let mut printer = IntegerPrinter::new(radix, width)?;
    let begin = Instant::now();
    printer.print(out, integers)?;
    let elapsed = begin.elapsed();
    out.write_all(b"\n")?;
    Ok(elapsed)
}

/// Runs every width of every range, appending one report line per run.
pub fn run_sweep<W: Write, R: Write>(
    ranges: &[SweepRange],
    integers: &[i64],
    out: &mut W,
    mut report: Option<&mut R>,
) -> Result<Vec<(u32, u32, Duration)>> {
    let mut timings = Vec::new();
    for range in ranges {
        for width in range.widths() {
            let elapsed = run_one(range.radix, width, integers, out)?;
            let line = report_line(range.radix, width, elapsed);
            info!("{}", line);
            if let Some(report) = report.as_mut() {
                writeln!(report, "{}", line)?;
            }
            timings.push((range.radix, width, elapsed));
        }
    }
    if let Some(report) = report {
        report.flush()?;
    }
    Ok(timings)
}

#[test]
fn test_read_integers() {
    let input = "23948724552 -17\n\n  0\t42  \n-2458789213847";
    let integers = read_integers(input.as_bytes()).unwrap();
    assert_eq!(integers, vec![23948724552, -17, 0, 42, -2458789213847]);
    assert!(read_integers("".as_bytes()).unwrap().is_empty());
}

#[test]
fn test_read_integers_rejects_garbage() {
    match read_integers("1 2\nthree 4".as_bytes()) {
        Err(RadixError::InvalidInteger { index, token }) => {
            assert_eq!(index, 2);
            assert_eq!(token, "three");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_widths() {
    let range = SweepRange { radix: 10, min_width: 0, max_width: 5, step: 2 };
    assert_eq!(range.widths().collect::<Vec<_>>(), vec![0, 2, 4]);
    let range = SweepRange { radix: 2, min_width: 3, max_width: 3, step: 0 };
    assert_eq!(range.widths().collect::<Vec<_>>(), vec![3]);
    assert_eq!(DEFAULT_RANGES[1].widths().count(), 17);
}

#[test]
fn test_report_line() {
    assert_eq!(report_line(10, 3, Duration::from_micros(1520)), "RADIX: 10, BLOCK_WIDTH: 3; 1520");
}

#[test]
fn test_run_sweep() {
    let ranges = [SweepRange { radix: 16, min_width: 0, max_width: 2, step: 1 }];
    let mut out = Vec::new();
    let mut report = Vec::new();
    let timings = run_sweep(&ranges, &[255, -4096], &mut out, Some(&mut report)).unwrap();
    assert_eq!(timings.len(), 3);
    assert_eq!(String::from_utf8(out).unwrap(), "FF -1000 \nFF -1000 \nFF -1000 \n");

    let report = String::from_utf8(report).unwrap();
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines.len(), 3);
    for (width, line) in lines.iter().enumerate() {
        assert!(line.starts_with(&format!("RADIX: 16, BLOCK_WIDTH: {}; ", width)), "{}", line);
    }
}

#[test]
fn test_run_sweep_stops_on_bad_range() {
    let ranges = [SweepRange { radix: 10, min_width: 6, max_width: 7, step: 1 }];
    let mut out = Vec::new();
    let result = run_sweep::<_, Vec<u8>>(&ranges, &DEFAULT_INTEGERS, &mut out, None);
    assert!(matches!(result, Err(RadixError::TableTooLarge { radix: 10, width: 7 })));
}
