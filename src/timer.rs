// src/timer.rs

use std::time::{Duration, Instant};

/// Retardo fijo del auto-avance tras una respuesta correcta. No es
/// configurable por el usuario.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(2000);

/// Handle de la única tarea diferida del sistema: el avance automático a la
/// siguiente pregunta. Se crea al armar y se suelta al cancelar o disparar;
/// la sesión guarda como mucho un handle, así que nunca hay dos pendientes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvance {
    deadline: Instant,
}

impl AutoAdvance {
    pub fn arm(now: Instant) -> Self {
        Self {
            deadline: now + AUTO_ADVANCE_DELAY,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_due_before_the_delay() {
        let t0 = Instant::now();
        let timer = AutoAdvance::arm(t0);
        assert!(!timer.is_due(t0));
        assert!(!timer.is_due(t0 + AUTO_ADVANCE_DELAY - Duration::from_millis(1)));
    }

    #[test]
    fn due_exactly_at_the_deadline() {
        let t0 = Instant::now();
        let timer = AutoAdvance::arm(t0);
        assert!(timer.is_due(t0 + AUTO_ADVANCE_DELAY));
        assert!(timer.is_due(t0 + AUTO_ADVANCE_DELAY * 2));
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let t0 = Instant::now();
        let timer = AutoAdvance::arm(t0);
        assert_eq!(timer.remaining(t0), AUTO_ADVANCE_DELAY);
        assert_eq!(timer.remaining(t0 + AUTO_ADVANCE_DELAY * 3), Duration::ZERO);
    }
}
