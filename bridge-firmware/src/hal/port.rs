// LED-Port: vier active-low Leitungen auf aufeinanderfolgenden GPIOs
//
// Die Output-Treiber konfigurieren die Pins (GPIO-Matrix, Push-Pull),
// das Muster selbst wird direkt ins GPIO OUT Register geschrieben.
// Vier einzelne set_low()/set_high() Aufrufe würden Zwischenzustände
// (zwei LEDs an oder alle aus) kurz sichtbar machen.

use bridge_core::{OutputPattern, PatternPort, PortLayoutError, merge_port_bits, port_shift_for};
use esp_hal::gpio::Output;

/// LED-Port auf vier aufeinanderfolgenden GPIOs
pub struct GpioPatternPort<'d> {
    // Pins bleiben konfiguriert, solange der Port lebt
    _pins: [Output<'d>; 4],
    shift: u32,
}

impl<'d> GpioPatternPort<'d> {
    /// Erstellt den Port
    ///
    /// # Parameter
    /// - `pins`: Output-Treiber in Bit-Reihenfolge (Bit 0 zuerst), initial High (= aus)
    /// - `gpios`: GPIO-Nummern derselben Pins, daraus ergibt sich die Lage im OUT-Register
    pub fn new(pins: [Output<'d>; 4], gpios: [u8; 4]) -> Result<Self, PortLayoutError> {
        let shift = port_shift_for(gpios)?;
        Ok(Self { _pins: pins, shift })
    }
}

impl PatternPort for GpioPatternPort<'_> {
    fn set_pattern(&mut self, pattern: OutputPattern) {
        let shift = self.shift;
        // Read-Modify-Write darf nicht vom Interrupt-Handler unterbrochen werden
        critical_section::with(|_| {
            // SAFETY: merge_port_bits ersetzt nur die vier Port-Bits, alle anderen
            // Bits von OUT werden so zurückgeschrieben, wie sie gelesen wurden.
            esp_hal::peripherals::GPIO::regs().out().modify(|r, w| unsafe {
                w.bits(merge_port_bits(r.bits(), shift, pattern))
            });
        });
    }
}
