// Status-LED (WS2812 auf dem DevKit) über das RMT Peripheral
//
// Spiegelt das aktuelle Port-Muster, rein zur Diagnose.

use bridge_core::{LedError, StatusIndicator};
use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

// Buffer-Größe für 1 LED (3 Farben * 8 Bits + 1 Reset)
pub const STATUS_LED_BUFFER_SIZE: usize = 25;

/// Real Hardware Status-LED
///
/// Hinweis: Der Buffer muss länger leben als der Adapter, daher wird er im Task
/// erstellt (smart_led_buffer!(1)) und als Parameter übergeben.
pub struct RmtStatusLed<'a> {
    led: SmartLedsAdapter<'a, STATUS_LED_BUFFER_SIZE>,
}

impl<'a> RmtStatusLed<'a> {
    /// Erstellt die Status-LED
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; STATUS_LED_BUFFER_SIZE],
    ) -> Result<Self, LedError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::WriteFailed)?;

        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Ok(Self { led })
    }
}

impl StatusIndicator for RmtStatusLed<'_> {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        self.led
            .write([color].into_iter())
            .map_err(|_| LedError::WriteFailed)
    }
}
