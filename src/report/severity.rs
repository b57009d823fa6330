//! Severity classification for table cells.

use crate::ping::types::PacketLoss;
use crossterm::style::Color;

/// Packet loss above this percentage is critical.
pub const CRITICAL_LOSS_PERCENT: f64 = 5.0;

/// How alarming a value is, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Nothing to flag
    Plain,
    /// Healthy (green)
    Ok,
    /// Degraded (yellow)
    Warn,
    /// Broken or unknown (red)
    Critical,
}

impl Severity {
    /// Classify packet loss: 0% is ok, up to 5% is a warning, more than 5%
    /// or a missing value is critical.
    #[must_use]
    pub fn of_packet_loss(loss: PacketLoss) -> Self {
        match loss {
            PacketLoss::Percent(p) if p > CRITICAL_LOSS_PERCENT => Self::Critical,
            PacketLoss::Percent(p) if p > 0.0 => Self::Warn,
            PacketLoss::Percent(_) => Self::Ok,
            PacketLoss::Error => Self::Critical,
        }
    }

    /// Any request timeout is a warning.
    #[must_use]
    pub fn of_timeouts(count: u32) -> Self {
        if count > 0 {
            Self::Warn
        } else {
            Self::Plain
        }
    }

    /// Terminal color for this severity, `None` for plain text.
    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self {
            Self::Plain => None,
            Self::Ok => Some(Color::Green),
            Self::Warn => Some(Color::Yellow),
            Self::Critical => Some(Color::Red),
        }
    }
}
