//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Port-, UART- und Status-LED-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::types::OutputPattern;

/// Fehler-Typ für die serielle Verbindung zu MAX
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// RX FIFO übergelaufen, Bytes gingen verloren
    Overrun,
    /// Stop-Bit fehlt
    Framing,
    Parity,
    /// Störimpuls auf der RX-Leitung
    Glitch,
    /// Sende-Hardware hat das Byte nicht angenommen
    Transmit,
}

/// Ungültige Pin-Belegung für den LED-Port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortLayoutError {
    /// Pins liegen nicht lückenlos in Bit-Reihenfolge
    NotConsecutive,
    /// Port ragt über das 32-Bit OUT Register hinaus
    OutOfRange,
}

/// Fehler-Typ für die Status-LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Trait für den 4-Bit LED-Port
///
/// # Implementierungen
/// - **Production:** GpioPatternPort (ein Store ins GPIO OUT Register)
/// - **Testing:** MockPatternPort (zeichnet jeden Port-Wert auf)
pub trait PatternPort {
    /// Legt ein Muster auf den Port
    ///
    /// Muss für einen externen Beobachter atomar sein: zwischen altem und neuem
    /// Muster darf kein anderer Port-Wert sichtbar werden.
    fn set_pattern(&mut self, pattern: OutputPattern);
}

/// Empfangsseite der seriellen Verbindung
pub trait ByteSource {
    /// Non-blocking: liegt mindestens ein Byte bereit?
    fn read_ready(&mut self) -> bool;

    /// Liest genau ein Byte
    ///
    /// Darf nur nach `read_ready() == true` aufgerufen werden.
    fn read_byte(&mut self) -> Result<u8, LinkError>;

    /// Poll-and-return: `Ok(None)` wenn nichts anliegt
    fn try_read_byte(&mut self) -> Result<Option<u8>, LinkError> {
        if !self.read_ready() {
            return Ok(None);
        }
        self.read_byte().map(Some)
    }
}

/// Sendeseite der seriellen Verbindung
pub trait ByteSink {
    /// Kann die Sende-Hardware gerade ein Byte annehmen?
    fn transmit_ready(&mut self) -> bool;

    /// Schreibt ein Byte in die Sende-Hardware
    ///
    /// Darf nur nach `transmit_ready() == true` aufgerufen werden.
    fn write_byte(&mut self, byte: u8) -> Result<(), LinkError>;
}

/// Trait für die Status-LED auf dem Board (WS2812/Neopixel)
///
/// # Implementierungen
/// - **Production:** RmtStatusLed (ESP32 RMT Peripheral)
/// - **Testing:** MockStatusLed (in-memory Mock)
pub trait StatusIndicator {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

/// Fehlende Status-LED: Schreiben ist ein No-Op
impl<T: StatusIndicator> StatusIndicator for Option<T> {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        match self {
            Some(led) => led.write(color),
            None => Ok(()),
        }
    }
}

/// Wartet aktiv, bis die Sende-Hardware bereit ist
///
/// Ohne Timeout: meldet die Hardware nie "ready", kehrt die Funktion nie zurück.
/// Das ist das gewollte Fehlerverhalten (kein Watchdog, kein Fehlerpfad).
pub fn spin_until_ready<S: ByteSink + ?Sized>(sink: &mut S) {
    while !sink.transmit_ready() {
        core::hint::spin_loop();
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LinkError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LinkError::Overrun => defmt::write!(fmt, "RX overrun"),
            LinkError::Framing => defmt::write!(fmt, "Framing error"),
            LinkError::Parity => defmt::write!(fmt, "Parity error"),
            LinkError::Glitch => defmt::write!(fmt, "RX glitch"),
            LinkError::Transmit => defmt::write!(fmt, "TX failed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PortLayoutError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PortLayoutError::NotConsecutive => defmt::write!(fmt, "LED pins not consecutive"),
            PortLayoutError::OutOfRange => defmt::write!(fmt, "LED pins out of range"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::WriteFailed => defmt::write!(fmt, "LED write failed"),
        }
    }
}
