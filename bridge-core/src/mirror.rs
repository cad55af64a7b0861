//! Status Mirror
//!
//! Spiegelt das Port-Muster auf die Status-LED. Schreibfehler werden nur
//! gemerkt (für das Logging im Task), sie erreichen nie den LED-Port.

use crate::traits::{LedError, StatusIndicator};
use crate::types::OutputPattern;

pub struct StatusMirror<L: StatusIndicator> {
    led: L,
    brightness: u8,
    last_error: Option<LedError>,
    failures: u32,
}

impl<L: StatusIndicator> StatusMirror<L> {
    pub fn new(led: L, brightness: u8) -> Self {
        Self {
            led,
            brightness,
            last_error: None,
            failures: 0,
        }
    }

    /// Zeigt ein Muster auf der Status-LED
    pub fn show(&mut self, pattern: OutputPattern) {
        if let Err(e) = self.led.write(pattern.indicator_color(self.brightness)) {
            self.last_error = Some(e);
            self.failures = self.failures.wrapping_add(1);
        }
    }

    /// Letzter Schreibfehler seit dem vorigen Aufruf
    pub fn take_error(&mut self) -> Option<LedError> {
        self.last_error.take()
    }

    /// Anzahl fehlgeschlagener Schreibversuche seit Start
    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn led(&self) -> &L {
        &self.led
    }
}
