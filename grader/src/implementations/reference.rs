//! The reference character counter.

use crate::error::ImplementationFault;
use crate::traits::implementation::Implementation;

/// Counts `key_char` with a naive left-to-right scan. This is the ground truth every
/// candidate is compared against.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceCounter;

impl Implementation for ReferenceCounter {
    fn evaluate(&self, string_value: &str, key_char: char) -> Result<i64, ImplementationFault> {
        let mut count: i64 = 0;
        for c in string_value.chars() {
            if c == key_char {
                count += 1;
            }
        }
        Ok(count)
    }

    fn name(&self) -> &str {
        "reference"
    }
}
