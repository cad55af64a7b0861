//! Color Renderer
//!
//! Pollt die serielle Empfangsseite und legt für jedes Byte sofort das
//! passende Muster auf den LED-Port. Zwischen zwei Bytes wird nichts gespeichert.

use crate::logic::{SELF_TEST_SEQUENCE, pattern_for_code};
use crate::mirror::StatusMirror;
use crate::traits::{ByteSource, LinkError, PatternPort, StatusIndicator};
use crate::types::{OutputPattern, RenderStep};

pub struct ColorRenderer<P: PatternPort> {
    port: P,
    current: OutputPattern,
}

impl<P: PatternPort> ColorRenderer<P> {
    /// Übernimmt den Port und setzt ihn auf [`OutputPattern::None`]
    pub fn new(mut port: P) -> Self {
        port.set_pattern(OutputPattern::None);
        Self {
            port,
            current: OutputPattern::None,
        }
    }

    /// Übersetzt ein Byte und wendet das Muster an
    pub fn render(&mut self, code: u8) -> OutputPattern {
        let pattern = pattern_for_code(code);
        self.apply(pattern);
        pattern
    }

    /// Legt ein Muster direkt auf den Port (Selbsttest)
    pub fn apply(&mut self, pattern: OutputPattern) {
        self.port.set_pattern(pattern);
        self.current = pattern;
    }

    /// Ein IDLE → DISPATCH → IDLE Durchlauf
    ///
    /// Kehrt sofort mit [`RenderStep::Idle`] zurück, wenn kein Byte anliegt.
    /// Bei einem Empfangsfehler bleibt der Port unverändert.
    pub fn poll<R: ByteSource + ?Sized>(
        &mut self,
        source: &mut R,
    ) -> Result<RenderStep, LinkError> {
        match source.try_read_byte()? {
            None => Ok(RenderStep::Idle),
            Some(code) => {
                let pattern = self.render(code);
                Ok(RenderStep::Dispatched { code, pattern })
            }
        }
    }

    /// Wie [`poll`](Self::poll), spiegelt ein neues Muster zusätzlich auf die Status-LED
    ///
    /// Der Port wird immer zuerst geschrieben. Ein Fehler der Status-LED landet
    /// im Mirror und ändert weder Port noch Rückgabewert.
    pub fn poll_mirrored<R: ByteSource + ?Sized, L: StatusIndicator>(
        &mut self,
        source: &mut R,
        mirror: &mut StatusMirror<L>,
    ) -> Result<RenderStep, LinkError> {
        let step = self.poll(source)?;
        if let RenderStep::Dispatched { pattern, .. } = step {
            mirror.show(pattern);
        }
        Ok(step)
    }

    /// Startup-Selbsttest: Rot, Grün, Blau, dann aus
    ///
    /// `hold` wartet nach jedem Muster `step_ms` Millisekunden (im Task ein
    /// embassy Timer). Mit `step_ms == 0` passiert nichts.
    pub async fn self_test<L, H, F>(
        &mut self,
        mirror: &mut StatusMirror<L>,
        step_ms: u64,
        mut hold: H,
    ) where
        L: StatusIndicator,
        H: FnMut(u64) -> F,
        F: Future<Output = ()>,
    {
        if step_ms == 0 {
            return;
        }

        for pattern in SELF_TEST_SEQUENCE {
            self.apply(pattern);
            mirror.show(pattern);
            hold(step_ms).await;
        }
    }

    /// Zuletzt angewendetes Muster
    pub fn current(&self) -> OutputPattern {
        self.current
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn into_port(self) -> P {
        self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingPort {
        last: Option<OutputPattern>,
        writes: usize,
    }

    impl PatternPort for RecordingPort {
        fn set_pattern(&mut self, pattern: OutputPattern) {
            self.last = Some(pattern);
            self.writes += 1;
        }
    }

    struct OneShot(Option<u8>);

    impl ByteSource for OneShot {
        fn read_ready(&mut self) -> bool {
            self.0.is_some()
        }

        fn read_byte(&mut self) -> Result<u8, LinkError> {
            self.0.take().ok_or(LinkError::Overrun)
        }
    }

    #[test]
    fn test_new_clears_port() {
        let renderer = ColorRenderer::new(RecordingPort { last: None, writes: 0 });
        assert_eq!(renderer.port().last, Some(OutputPattern::None));
        assert_eq!(renderer.current(), OutputPattern::None);
    }

    #[test]
    fn test_poll_dispatch_then_idle() {
        let mut renderer = ColorRenderer::new(RecordingPort { last: None, writes: 0 });
        let mut rx = OneShot(Some(b'r'));

        let step = renderer.poll(&mut rx).unwrap();
        assert_eq!(
            step,
            RenderStep::Dispatched {
                code: b'r',
                pattern: OutputPattern::Red
            }
        );

        let step = renderer.poll(&mut rx).unwrap();
        assert_eq!(step, RenderStep::Idle);
        assert_eq!(renderer.current(), OutputPattern::Red);
        // 1x new() + 1x dispatch
        assert_eq!(renderer.port().writes, 2);
    }
}
