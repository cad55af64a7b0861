// UART-Anbindung an MAX
//
// UART1 wird in main.rs in RX und TX geteilt: RX gehört dem Render-Task,
// TX gehört ausschließlich dem Schalter-Interrupt.

use bridge_core::{ByteSink, ByteSource, LinkError};
use esp_hal::Blocking;
use esp_hal::uart::{RxError, UartRx, UartTx};

/// Empfangsseite (Color Codes von MAX)
pub struct UartByteSource<'d> {
    rx: UartRx<'d, Blocking>,
}

impl<'d> UartByteSource<'d> {
    pub fn new(rx: UartRx<'d, Blocking>) -> Self {
        Self { rx }
    }
}

impl ByteSource for UartByteSource<'_> {
    fn read_ready(&mut self) -> bool {
        self.rx.read_ready()
    }

    fn read_byte(&mut self) -> Result<u8, LinkError> {
        let mut buf = [0u8; 1];
        // read() blockiert bis mindestens ein Byte da ist - nach read_ready() sofort
        self.rx.read(&mut buf).map_err(link_error_from_rx)?;
        Ok(buf[0])
    }
}

/// Sendeseite (Toggle Notifications an MAX)
pub struct UartByteSink<'d> {
    tx: UartTx<'d, Blocking>,
}

impl<'d> UartByteSink<'d> {
    pub fn new(tx: UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl ByteSink for UartByteSink<'_> {
    fn transmit_ready(&mut self) -> bool {
        // TX FIFO hat Platz für mindestens ein Byte
        self.tx.write_ready()
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), LinkError> {
        match self.tx.write(&[byte]) {
            Ok(1) => Ok(()),
            _ => Err(LinkError::Transmit),
        }
    }
}

fn link_error_from_rx(err: RxError) -> LinkError {
    match err {
        RxError::FifoOverflowed => LinkError::Overrun,
        RxError::GlitchOccurred => LinkError::Glitch,
        RxError::FrameFormatViolated => LinkError::Framing,
        RxError::ParityMismatch => LinkError::Parity,
        #[allow(unreachable_patterns)]
        _ => LinkError::Framing,
    }
}
