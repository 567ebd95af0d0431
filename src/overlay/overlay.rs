use super::*;
use crate::round::*;
use std::time::Instant;

/// Every caption for one frame, in drawing order: phase specific lines
/// first, then the footer that is shown in every phase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay(Vec<Caption>);

impl Overlay {
    pub fn captions(&self) -> &[Caption] {
        &self.0
    }
    pub fn texts(&self) -> Vec<&str> {
        self.0.iter().map(|c| c.text.as_str()).collect()
    }
    fn push(&mut self, caption: Caption) {
        self.0.push(caption);
    }
}

impl<O> From<(&Session<O>, Instant)> for Overlay
where
    O: Opponent,
{
    fn from((session, now): (&Session<O>, Instant)) -> Self {
        let mut overlay = Self::default();
        let remaining = session
            .remaining(now)
            .map(|d| d.as_secs_f32())
            .unwrap_or_default();
        match *session.phase() {
            Phase::Waiting => overlay.push(
                Caption::new("Press SPACE to play!", Anchor::Top(50)).color(Color::GREEN),
            ),
            Phase::Countdown { .. } => overlay.push(
                Caption::new(format!("Get Ready: {}", remaining.ceil() as u32), Anchor::Top(50))
                    .color(Color::YELLOW)
                    .scale(2.)
                    .thickness(3),
            ),
            Phase::Playing { .. } => overlay.push(
                Caption::new(format!("Show your gesture: {:.1}s", remaining), Anchor::Top(50))
                    .color(Color::BLUE),
            ),
            Phase::Result {
                player,
                computer,
                outcome,
                ..
            } => {
                overlay.push(Caption::new(format!("You: {}", player), Anchor::Top(100)));
                overlay.push(Caption::new(format!("Computer: {}", computer), Anchor::Top(140)));
                overlay.push(
                    Caption::new(outcome.to_string(), Anchor::Top(180)).color(match outcome.is_win() {
                        true => Color::GREEN,
                        false => Color::RED,
                    }),
                );
            }
        }
        overlay.push(
            Caption::new(format!("Current Gesture: {}", session.gesture()), Anchor::Bottom(120))
                .color(Color::CYAN),
        );
        overlay.push(Caption::new(session.to_string(), Anchor::Bottom(80)));
        overlay.push(
            Caption::new("Press SPACE for new game, 'q' to quit", Anchor::Bottom(40))
                .color(Color::GREY)
                .scale(0.7),
        );
        overlay
    }
}
