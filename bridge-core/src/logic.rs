//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::traits::PortLayoutError;
use crate::types::{OutputPattern, PATTERN_MASK};

/// Startup-Selbsttest: jede LED einmal, danach aus
pub const SELF_TEST_SEQUENCE: [OutputPattern; 4] = [
    OutputPattern::Red,
    OutputPattern::Green,
    OutputPattern::Blue,
    OutputPattern::None,
];

/// Übersetzt ein empfangenes Byte in ein Ausgabe-Muster
///
/// # Beispiele
///
/// ```
/// # use bridge_core::{pattern_for_code, OutputPattern};
/// assert_eq!(pattern_for_code(b'g'), OutputPattern::Green);
/// assert_eq!(pattern_for_code(b'x'), OutputPattern::None);
/// ```
pub fn pattern_for_code(code: u8) -> OutputPattern {
    OutputPattern::from_color_code(code)
}

/// Setzt das Muster in einen Registerwert ein
///
/// Die vier Port-Bits liegen ab Bit `shift` im Register, alle anderen Bits
/// bleiben unverändert. Das Ergebnis wird mit einem einzigen Store geschrieben.
///
/// ```
/// # use bridge_core::{merge_port_bits, OutputPattern};
/// let reg = merge_port_bits(0xFFFF_FFFF, 18, OutputPattern::Red);
/// assert_eq!(reg, 0xFFFF_FFFF & !(0b0010 << 18));
/// ```
pub fn merge_port_bits(register: u32, shift: u32, pattern: OutputPattern) -> u32 {
    let mask = (PATTERN_MASK as u32) << shift;
    (register & !mask) | ((pattern.port_bits() as u32) << shift)
}

/// Bestimmt die Bit-Position des LED-Ports aus den GPIO-Nummern der Pins
///
/// Die Pins müssen in Bit-Reihenfolge übergeben werden und direkt
/// aufeinander folgen, sonst kann das Muster nicht mit einem Store
/// geschrieben werden.
///
/// ```
/// # use bridge_core::{port_shift_for, PortLayoutError};
/// assert_eq!(port_shift_for([18, 19, 20, 21]), Ok(18));
/// assert_eq!(port_shift_for([18, 19, 21, 20]), Err(PortLayoutError::NotConsecutive));
/// ```
pub fn port_shift_for(gpios: [u8; 4]) -> Result<u32, PortLayoutError> {
    let first = gpios[0];
    if u32::from(first) + gpios.len() as u32 > u32::BITS {
        return Err(PortLayoutError::OutOfRange);
    }
    let consecutive = gpios
        .iter()
        .enumerate()
        .all(|(bit, gpio)| *gpio as usize == first as usize + bit);
    if !consecutive {
        return Err(PortLayoutError::NotConsecutive);
    }
    Ok(u32::from(first))
}
