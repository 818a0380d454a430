//! Largest value in a zero-terminated list of data items
//!
//! The scan is written as a small register machine so it reads like the
//! book's program: `edi` indexes the data, `eax` holds the current item and
//! `ebx` the largest item seen so far.

use thiserror::Error;

/// Sentinel marking the logical end of a data list
pub const TERMINATOR: i32 = 0;

/// The book's data section
pub const DATA_ITEMS: [i32; 11] = [3, 67, 34, 22, 45, 75, 2, 35, 63, 214, 0];

/// Errors raised while preparing or scanning data items
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaximumError {
    #[error("groundup:maximum: ERR_NO_TERMINATOR: {len} data items without a terminating 0")]
    MissingTerminator { len: usize },

    #[error("groundup:maximum: ERR_INVALID_ITEM: item {} `{item}` is not an integer", .position + 1)]
    InvalidItem { item: String, position: usize },
}

/// Register file used by the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    /// Index of the current data item
    pub edi: usize,
    /// Current data item
    pub eax: i32,
    /// Largest data item found so far
    pub ebx: i32,
}

impl Registers {
    /// Load the first item and seed the running maximum with it
    #[must_use]
    pub const fn load(first: i32) -> Self {
        Self {
            edi: 0,
            eax: first,
            ebx: first,
        }
    }

    /// Advance to the next item, keeping `ebx` unless `next` is strictly larger
    ///
    /// Loading the terminator never touches `ebx`.
    pub const fn step(&mut self, next: i32) {
        self.edi += 1;
        self.eax = next;
        if !self.at_end() && self.eax > self.ebx {
            self.ebx = self.eax;
        }
    }

    /// True once `eax` holds the terminator
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.eax == TERMINATOR
    }
}

/// Find the largest item before the first terminator
///
/// A list that starts with the terminator reports `0`.
///
/// # Errors
///
/// Returns `MaximumError::MissingTerminator` if `items` contains no `0`
pub fn find_maximum(items: &[i32]) -> Result<i32, MaximumError> {
    let end = items
        .iter()
        .position(|&item| item == TERMINATOR)
        .ok_or(MaximumError::MissingTerminator { len: items.len() })?;

    let mut regs = Registers::load(items[0]);
    while !regs.at_end() {
        regs.step(items[regs.edi + 1]);
    }
    debug_assert_eq!(regs.edi, end);

    Ok(regs.ebx)
}

/// Format the result line printed by the example
#[must_use]
pub fn report(largest: i32) -> String {
    format!("The largest value in the array is: {largest}")
}

/// Parse data items separated by whitespace or commas
///
/// # Errors
///
/// Returns `MaximumError::InvalidItem` for the first item that is not an `i32`
pub fn parse_items(text: &str) -> Result<Vec<i32>, MaximumError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|item| !item.is_empty())
        .enumerate()
        .map(|(position, item)| {
            item.parse().map_err(|_| MaximumError::InvalidItem {
                item: item.to_string(),
                position,
            })
        })
        .collect()
}
