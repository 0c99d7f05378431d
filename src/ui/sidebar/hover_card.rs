// SPDX-License-Identifier: MPL-2.0
//! Hover-intent controller for the server info card.
//!
//! The card opens after the pointer has rested on the trigger for the show
//! delay and closes after it has left both the trigger and the card for the
//! hide delay. Moving from the trigger onto the card keeps it open.

use crate::config::SidebarConfig;
use iced::Point;
use std::time::{Duration, Instant};

/// Visibility phase of the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Hidden,
    PendingShow { deadline: Instant, position: Point },
    Visible { position: Point },
    PendingHide { deadline: Instant, position: Point },
}

#[derive(Debug, Clone)]
pub struct HoverCard {
    phase: Phase,
    /// Last pointer position over the trigger.
    pointer: Point,
    over_trigger: bool,
    over_card: bool,
    show_delay: Duration,
    hide_delay: Duration,
}

impl Default for HoverCard {
    fn default() -> Self {
        Self::new(&SidebarConfig::default())
    }
}

impl HoverCard {
    #[must_use]
    pub fn new(config: &SidebarConfig) -> Self {
        Self::with_delays(config.show_delay(), config.hide_delay())
    }

    #[must_use]
    pub fn with_delays(show_delay: Duration, hide_delay: Duration) -> Self {
        Self {
            phase: Phase::Hidden,
            pointer: Point::ORIGIN,
            over_trigger: false,
            over_card: false,
            show_delay,
            hide_delay,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the card is on screen (including while a hide is pending).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Visible { .. } | Phase::PendingHide { .. })
    }

    /// Anchor of the visible card.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match self.phase {
            Phase::Visible { position } | Phase::PendingHide { position, .. } => Some(position),
            Phase::Hidden | Phase::PendingShow { .. } => None,
        }
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::PendingShow { deadline, .. } | Phase::PendingHide { deadline, .. } => {
                Some(deadline)
            }
            Phase::Hidden | Phase::Visible { .. } => None,
        }
    }

    pub fn trigger_entered(&mut self, now: Instant) {
        self.over_trigger = true;
        match self.phase {
            Phase::Hidden => {
                self.phase = Phase::PendingShow {
                    deadline: now + self.show_delay,
                    position: self.pointer,
                };
            }
            Phase::PendingHide { position, .. } => {
                self.phase = Phase::Visible { position };
            }
            Phase::PendingShow { .. } | Phase::Visible { .. } => {}
        }
    }

    pub fn trigger_moved(&mut self, point: Point) {
        self.pointer = point;
        if let Phase::PendingShow { position, .. } = &mut self.phase {
            *position = point;
        }
    }

    pub fn trigger_left(&mut self, now: Instant) {
        self.over_trigger = false;
        match self.phase {
            Phase::PendingShow { .. } => self.phase = Phase::Hidden,
            Phase::Visible { position } if !self.over_card => {
                self.phase = Phase::PendingHide {
                    deadline: now + self.hide_delay,
                    position,
                };
            }
            _ => {}
        }
    }

    pub fn card_entered(&mut self) {
        self.over_card = true;
        if let Phase::PendingHide { position, .. } = self.phase {
            self.phase = Phase::Visible { position };
        }
    }

    pub fn card_left(&mut self, now: Instant) {
        self.over_card = false;
        if let Phase::Visible { position } = self.phase {
            if !self.over_trigger {
                self.phase = Phase::PendingHide {
                    deadline: now + self.hide_delay,
                    position,
                };
            }
        }
    }

    /// Completes a due show or hide. Returns whether visibility changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let was_visible = self.is_visible();
        match self.phase {
            Phase::PendingShow { deadline, position } if deadline <= now => {
                self.phase = if self.over_trigger {
                    Phase::Visible { position }
                } else {
                    Phase::Hidden
                };
            }
            Phase::PendingHide { deadline, position } if deadline <= now => {
                self.phase = if self.over_trigger || self.over_card {
                    Phase::Visible { position }
                } else {
                    Phase::Hidden
                };
            }
            _ => {}
        }
        was_visible != self.is_visible()
    }

    /// Hides the card and cancels pending transitions.
    pub fn reset(&mut self) {
        self.phase = Phase::Hidden;
        self.over_trigger = false;
        self.over_card = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn card() -> HoverCard {
        HoverCard::with_delays(ms(700), ms(300))
    }

    #[test]
    fn default_delays_come_from_config() {
        let card = HoverCard::default();
        assert_eq!(card.show_delay, ms(700));
        assert_eq!(card.hide_delay, ms(300));
    }

    #[test]
    fn shows_after_delay_while_hovered() {
        let now = Instant::now();
        let mut card = card();
        card.trigger_moved(Point::new(12.0, 40.0));
        card.trigger_entered(now);

        assert!(!card.tick(now + ms(699)));
        assert!(!card.is_visible());
        assert!(card.tick(now + ms(700)));
        assert_eq!(card.position(), Some(Point::new(12.0, 40.0)));
    }

    #[test]
    fn leaving_before_delay_cancels_show() {
        let now = Instant::now();
        let mut card = card();
        card.trigger_entered(now);
        card.trigger_left(now + ms(300));

        assert_eq!(card.phase(), Phase::Hidden);
        assert!(!card.tick(now + ms(1000)));
        assert_eq!(card.next_deadline(), None);
    }

    #[test]
    fn reentering_does_not_restart_show_delay() {
        let now = Instant::now();
        let mut card = card();
        card.trigger_entered(now);
        card.trigger_entered(now + ms(500));
        assert_eq!(card.next_deadline(), Some(now + ms(700)));
    }

    #[test]
    fn pointer_moves_update_pending_position() {
        let now = Instant::now();
        let mut card = card();
        card.trigger_entered(now);
        card.trigger_moved(Point::new(5.0, 6.0));
        card.tick(now + ms(700));
        assert_eq!(card.position(), Some(Point::new(5.0, 6.0)));
    }

    #[test]
    fn hides_after_delay_once_pointer_is_gone() {
        let now = Instant::now();
        let mut card = card();
        card.trigger_entered(now);
        card.tick(now + ms(700));

        card.trigger_left(now + ms(1000));
        assert!(card.is_visible());
        assert!(!card.tick(now + ms(1299)));
        assert!(card.tick(now + ms(1300)));
        assert_eq!(card.phase(), Phase::Hidden);
    }

    #[test]
    fn moving_onto_card_keeps_it_open() {
        let now = Instant::now();
        let mut card = card();
        card.trigger_entered(now);
        card.tick(now + ms(700));

        card.trigger_left(now + ms(1000));
        card.card_entered();
        assert!(!card.tick(now + ms(2000)));
        assert!(card.is_visible());

        card.card_left(now + ms(3000));
        assert!(card.tick(now + ms(3300)));
        assert!(!card.is_visible());
    }

    #[test]
    fn returning_to_trigger_cancels_hide() {
        let now = Instant::now();
        let mut card = card();
        card.trigger_entered(now);
        card.tick(now + ms(700));

        card.trigger_left(now + ms(800));
        card.trigger_entered(now + ms(900));
        assert!(matches!(card.phase(), Phase::Visible { .. }));
        assert!(!card.tick(now + ms(5000)));
    }

    #[test]
    fn leaving_card_while_over_trigger_keeps_it_open() {
        let now = Instant::now();
        let mut card = card();
        card.trigger_entered(now);
        card.tick(now + ms(700));
        card.card_entered();
        card.card_left(now + ms(900));
        assert!(matches!(card.phase(), Phase::Visible { .. }));
    }

    #[test]
    fn reset_cancels_everything() {
        let now = Instant::now();
        let mut card = card();
        card.trigger_entered(now);
        card.reset();
        assert_eq!(card.phase(), Phase::Hidden);
        assert!(!card.tick(now + ms(700)));

        card.trigger_entered(now);
        card.tick(now + ms(700));
        card.trigger_left(now + ms(800));
        card.reset();
        assert_eq!(card.next_deadline(), None);
        assert!(!card.is_visible());
    }
}
