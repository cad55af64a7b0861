// Projekt-Konfiguration: Konstanten
//
// Pins werden in main.rs über die typisierten Peripherals gewählt
// (LED-Port GPIO18..21, Schalter GPIO9, UART1 RX GPIO4 / TX GPIO5,
// Status-LED GPIO8). Die Lage des LED-Ports im OUT-Register wird aus
// den Pin-Nummern berechnet, nicht hier konfiguriert.

// ============================================================================
// Serielle Verbindung zu MAX
// ============================================================================

/// Baudrate der Verbindung (8N1, keine Flusskontrolle)
pub const MAX_BAUD_RATE: u32 = 9600;

// ============================================================================
// Status-LED Konfiguration
// ============================================================================

/// Helligkeits-Level für die Status-LED (0-255)
/// Wert ist gedimmt für Augenschonung
pub const STATUS_LED_BRIGHTNESS: u8 = 10;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Selbsttest
// ============================================================================

/// Haltezeit pro Muster beim Startup-Selbsttest in Millisekunden
/// 0 = Selbsttest überspringen
pub const SELF_TEST_STEP_MS: u64 = 250;
