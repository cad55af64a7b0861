// Hardware Abstraction Layer (HAL) Module
//
// Bindet die Traits aus bridge-core an die ESP32-C6 Peripherals:
// GPIO-Port für die LEDs, UART1 zu MAX, RMT für die Status-LED
// und den GPIO-Interrupt für den Schalter.

pub mod port;
pub mod status_led;
pub mod switch;
pub mod uart;

pub use port::GpioPatternPort;
pub use status_led::RmtStatusLed;
pub use switch::{SwitchNotifier, install_switch_interrupt};
pub use uart::{UartByteSink, UartByteSource};
