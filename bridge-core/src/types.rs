//! Core Types für die LED-Bridge
//!
//! Ausgabe-Muster und Protokoll-Konstanten ohne Hardware-Dependencies

use rgb::RGB8;

/// Notification-Byte an MAX: Schalter hat den Zustand gewechselt ('C')
pub const TOGGLE_NOTIFICATION: u8 = b'C';

/// Maske der vier LED-Leitungen im Port (Bits 0..3)
pub const PATTERN_MASK: u8 = 0b1111;

/// Ausgabe-Muster für den 4-Bit LED-Port
///
/// Die LEDs hängen active-low am Port: ein 0-Bit schaltet die LED ein.
/// Jedes Muster hat genau ein 0-Bit, es leuchtet also nie mehr als eine LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputPattern {
    /// 'r' → `1101`
    Red,
    /// 'g' → `1011`
    Green,
    /// 'b' → `0111`
    Blue,
    /// Jedes andere Byte → `1110`
    #[default]
    None,
}

impl OutputPattern {
    /// Alle vier Muster in Port-Reihenfolge
    pub const ALL: [OutputPattern; 4] = [
        OutputPattern::Red,
        OutputPattern::Green,
        OutputPattern::Blue,
        OutputPattern::None,
    ];

    /// Bit-Muster für den LED-Port (active-low, nur Bits 0..3 belegt)
    pub const fn port_bits(self) -> u8 {
        match self {
            OutputPattern::Red => 0b1101,
            OutputPattern::Green => 0b1011,
            OutputPattern::Blue => 0b0111,
            OutputPattern::None => 0b1110,
        }
    }

    /// Rück-Abbildung eines Port-Werts auf ein Muster
    ///
    /// Gibt `None` zurück für jeden Wert, der keinem der vier Muster entspricht.
    pub fn from_port_bits(bits: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.port_bits() == bits)
    }

    /// Übersetzt einen Color Code von MAX
    ///
    /// Case-sensitive, jedes unbekannte Byte wird zu [`OutputPattern::None`].
    pub const fn from_color_code(code: u8) -> Self {
        match code {
            b'r' => OutputPattern::Red,
            b'g' => OutputPattern::Green,
            b'b' => OutputPattern::Blue,
            _ => OutputPattern::None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            OutputPattern::Red => "Rot",
            OutputPattern::Green => "Grün",
            OutputPattern::Blue => "Blau",
            OutputPattern::None => "Aus",
        }
    }

    /// Farbe für die Status-LED auf dem Board (Spiegel des Port-Musters)
    ///
    /// `None` schaltet die Status-LED komplett aus.
    pub const fn indicator_color(self, brightness: u8) -> RGB8 {
        match self {
            OutputPattern::Red => RGB8 {
                r: brightness,
                g: 0,
                b: 0,
            },
            OutputPattern::Green => RGB8 {
                r: 0,
                g: brightness,
                b: 0,
            },
            OutputPattern::Blue => RGB8 {
                r: 0,
                g: 0,
                b: brightness,
            },
            OutputPattern::None => RGB8 { r: 0, g: 0, b: 0 },
        }
    }
}

/// Ergebnis eines Poll-Durchlaufs des Color Renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStep {
    /// Kein Byte verfügbar (IDLE)
    Idle,
    /// Byte gelesen und Muster angewendet (DISPATCH)
    Dispatched { code: u8, pattern: OutputPattern },
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for OutputPattern {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} ({=u8:b})", self.name(), self.port_bits())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RenderStep {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            RenderStep::Idle => defmt::write!(fmt, "Idle"),
            RenderStep::Dispatched { code, pattern } => {
                defmt::write!(
                    fmt,
                    "Dispatched {{ code: {=u8:#x}, pattern: {} }}",
                    code,
                    pattern
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_bit_low() {
        for pattern in OutputPattern::ALL {
            let low = (!pattern.port_bits() & PATTERN_MASK).count_ones();
            assert_eq!(low, 1, "{:?}", pattern);
        }
    }

    #[test]
    fn test_port_bits_roundtrip() {
        for pattern in OutputPattern::ALL {
            assert_eq!(OutputPattern::from_port_bits(pattern.port_bits()), Some(pattern));
        }
        assert_eq!(OutputPattern::from_port_bits(0b1111), None);
        assert_eq!(OutputPattern::from_port_bits(0b1100), None);
    }

    #[test]
    fn test_color_codes_are_case_sensitive() {
        assert_eq!(OutputPattern::from_color_code(b'r'), OutputPattern::Red);
        assert_eq!(OutputPattern::from_color_code(b'R'), OutputPattern::None);
        assert_eq!(OutputPattern::from_color_code(b'G'), OutputPattern::None);
    }

    #[test]
    fn test_indicator_color_none_is_off() {
        assert_eq!(OutputPattern::None.indicator_color(10), RGB8 { r: 0, g: 0, b: 0 });
        assert_eq!(OutputPattern::Blue.indicator_color(10), RGB8 { r: 0, g: 0, b: 10 });
    }
}
