//! Edge Notifier
//!
//! Wird aus dem GPIO-Interrupt aufgerufen, sobald der Schalter den Pegel
//! wechselt, und sendet genau ein [`TOGGLE_NOTIFICATION`] Byte an MAX.

use critical_section::CriticalSection;

use crate::traits::{ByteSink, LinkError, spin_until_ready};
use crate::types::TOGGLE_NOTIFICATION;

pub struct EdgeNotifier<S: ByteSink> {
    sink: S,
}

impl<S: ByteSink> EdgeNotifier<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Meldet einen Flankenwechsel an MAX
    ///
    /// Der `CriticalSection`-Token belegt, dass Interrupts maskiert sind: der
    /// Handler kann sich nicht selbst unterbrechen. Wartet ohne Timeout auf die
    /// Sende-Hardware und kehrt erst zurück, wenn das Byte übergeben ist.
    pub fn on_edge(&mut self, _cs: CriticalSection<'_>) -> Result<(), LinkError> {
        spin_until_ready(&mut self.sink);
        self.sink.write_byte(TOGGLE_NOTIFICATION)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
