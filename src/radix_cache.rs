use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use lazy_static::*;
use log::debug;

use crate::digit_blocks::BlockTable;
use crate::error::Result;

lazy_static! {
    static ref BLOCK_TABLES: Mutex<HashMap<(u32, u32), Arc<BlockTable>>> = Mutex::new(HashMap::new());
}

/// Shared table for `(radix, width)`, generated on first request.
/// Failed configurations are reported every time and never stored.
pub fn block_table(radix: u32, width: u32) -> Result<Arc<BlockTable>> {
    let mut tables = BLOCK_TABLES.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(table) = tables.get(&(radix, width)) {
        debug!("block table cache hit: radix {}, width {}", radix, width);
        return Ok(Arc::clone(table));
    }
    let table = Arc::new(BlockTable::new(radix, width)?);
    tables.insert((radix, width), Arc::clone(&table));
    Ok(table)
}

#[cfg(test)]
fn is_cached(radix: u32, width: u32) -> bool {
    BLOCK_TABLES
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .contains_key(&(radix, width))
}

#[test]
fn test_block_table_is_shared() {
    let a = block_table(7, 3).unwrap();
    let b = block_table(7, 3).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert!(is_cached(7, 3));
    assert_eq!(a.block(48), b"066");
}

#[test]
fn test_failed_config_not_cached() {
    assert!(block_table(40, 2).is_err());
    assert!(!is_cached(40, 2));
    assert!(block_table(11, 0).is_err());
    assert!(!is_cached(11, 0));
}

#[test]
fn test_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| block_table(13, 2).unwrap()))
        .collect();
    let tables: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for t in &tables[1..] {
        assert!(Arc::ptr_eq(&tables[0], t));
    }
}
