//! Function-backed implementations.

use crate::error::ImplementationFault;
use crate::traits::implementation::Implementation;

/// Wraps a function of shape `(string, char) -> Result<i64, ImplementationFault>` so it can be
/// injected wherever an [`Implementation`] is expected.
pub struct FnImplementation<F> {
    name: String,
    func: F,
}

impl<F> FnImplementation<F>
where
    F: Fn(&str, char) -> Result<i64, ImplementationFault>,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Implementation for FnImplementation<F>
where
    F: Fn(&str, char) -> Result<i64, ImplementationFault>,
{
    fn evaluate(&self, string_value: &str, key_char: char) -> Result<i64, ImplementationFault> {
        (self.func)(string_value, key_char)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
