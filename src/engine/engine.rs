use super::*;
use crate::device::*;
use crate::gesture::*;
use crate::overlay::Overlay;
use crate::round::*;

/// Owns the devices and the session, and drives both one frame at a time.
///
/// Single threaded: each iteration blocks on the camera, then detects,
/// classifies, advances the session, draws, and polls the keyboard. The time
/// is sampled once at the top of the iteration and used for everything in it.
pub struct Engine<C, D, S, O = Random, K = System> {
    camera: C,
    detector: D,
    screen: S,
    clock: K,
    session: Session<O>,
}

impl<C, D, S, O> Engine<C, D, S, O, System>
where
    C: Camera,
    D: Detector<C::Frame>,
    S: Screen<C::Frame>,
    O: Opponent,
{
    pub fn new(camera: C, detector: D, screen: S, opponent: O) -> Self {
        Self::with_clock(camera, detector, screen, opponent, System)
    }
}

impl<C, D, S, O, K> Engine<C, D, S, O, K>
where
    C: Camera,
    D: Detector<C::Frame>,
    S: Screen<C::Frame>,
    O: Opponent,
    K: Clock,
{
    pub fn with_clock(camera: C, detector: D, screen: S, opponent: O, clock: K) -> Self {
        Self {
            camera,
            detector,
            screen,
            clock,
            session: Session::new(opponent),
        }
    }

    pub fn session(&self) -> &Session<O> {
        &self.session
    }

    /// Loop until the player quits or the camera stream ends.
    pub fn run(&mut self) -> anyhow::Result<Summary> {
        let mut frames = 0;
        while self.step()? {
            frames += 1;
        }
        Ok(Summary {
            player: self.session.player_score(),
            computer: self.session.computer_score(),
            rounds: self.session.rounds(),
            frames,
        })
    }

    /// One frame. Returns false when the loop should stop.
    pub fn step(&mut self) -> anyhow::Result<bool> {
        let Some(mut frame) = self.camera.capture()? else {
            return Ok(false);
        };
        let now = self.clock.now();
        let hand = self.detector.detect(&frame)?;
        let gesture = hand.as_ref().map(classify).unwrap_or(Gesture::None);
        self.session.tick(now, gesture);
        let overlay = Overlay::from((&self.session, now));
        self.screen.present(&mut frame, hand.as_ref(), &overlay)?;
        match self.screen.poll()? {
            Some(Key::Quit) => {
                log::info!("[engine] quit requested");
                Ok(false)
            }
            Some(Key::Start) => {
                self.session.start(now);
                Ok(true)
            }
            None => Ok(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hands::*;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::time::Duration;
    use std::time::Instant;

    /// One scripted frame: what the camera sees and what the player types.
    #[derive(Clone, Copy)]
    struct Beat {
        at: Duration,
        hand: Option<Fingers>,
        key: Option<Key>,
    }

    fn beat(at: f32, hand: Option<Fingers>, key: Option<Key>) -> Beat {
        Beat {
            at: Duration::from_secs_f32(at),
            hand,
            key,
        }
    }

    /// Camera yields the scripted beats, then closes.
    struct Tape(VecDeque<Beat>, Rc<Cell<Duration>>);

    impl Camera for Tape {
        type Frame = Beat;
        fn capture(&mut self) -> anyhow::Result<Option<Beat>> {
            let beat = self.0.pop_front();
            if let Some(beat) = beat {
                self.1.set(beat.at);
            }
            Ok(beat)
        }
    }

    /// Detector that poses whatever hand the beat carries.
    struct Poser;

    impl Detector<Beat> for Poser {
        fn detect(&mut self, frame: &Beat) -> anyhow::Result<Option<Hand>> {
            Ok(frame.hand.map(Hand::posed))
        }
    }

    /// Screen that records the overlay and replays the beat's key.
    #[derive(Default)]
    struct Monitor {
        shown: Vec<Vec<String>>,
        pending: Option<Key>,
    }

    impl Screen<Beat> for Monitor {
        fn present(&mut self, frame: &mut Beat, _: Option<&Hand>, overlay: &Overlay) -> anyhow::Result<()> {
            self.shown.push(overlay.texts().into_iter().map(String::from).collect());
            self.pending = frame.key;
            Ok(())
        }
        fn poll(&mut self) -> anyhow::Result<Option<Key>> {
            Ok(self.pending.take())
        }
    }

    /// Clock that follows the timestamp of the frame just captured.
    struct Manual(Instant, Rc<Cell<Duration>>);

    impl Clock for Manual {
        fn now(&self) -> Instant {
            self.0 + self.1.get()
        }
    }

    fn engine(beats: Vec<Beat>, computer: Gesture) -> Engine<Tape, Poser, Monitor, Fixed, Manual> {
        let offset = Rc::new(Cell::new(Duration::ZERO));
        Engine::with_clock(
            Tape(beats.into(), offset.clone()),
            Poser,
            Monitor::default(),
            Fixed::new(computer).unwrap(),
            Manual(Instant::now(), offset),
        )
    }

    fn scissors() -> Option<Fingers> {
        Some(Fingers::from(&[Finger::Index, Finger::Middle][..]))
    }

    #[test]
    fn scissors_over_paper_scores_for_player() {
        let mut engine = engine(
            vec![
                beat(0.0, None, Some(Key::Start)),
                beat(1.0, None, None),
                beat(3.0, None, None),
                beat(4.0, scissors(), None),
                beat(5.0, scissors(), None),
                beat(6.0, None, None),
            ],
            Gesture::Paper,
        );
        let summary = engine.run().unwrap();
        assert_eq!(summary.player, 1);
        assert_eq!(summary.computer, 0);
        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.frames, 6);
        assert_eq!(engine.session().result(), Some(Outcome::Win));
        let last = engine.screen.shown.last().unwrap();
        assert_eq!(last[2], "You Win!");
        assert_eq!(last[4], "Player: 1 | Computer: 0");
    }

    #[test]
    fn scissors_under_rock_scores_for_computer() {
        let mut engine = engine(
            vec![
                beat(0.0, None, Some(Key::Start)),
                beat(3.0, None, None),
                beat(5.0, scissors(), None),
            ],
            Gesture::Rock,
        );
        let summary = engine.run().unwrap();
        assert_eq!(summary.player, 0);
        assert_eq!(summary.computer, 1);
        assert_eq!(engine.session().result(), Some(Outcome::Loss));
        assert_eq!(engine.screen.shown.last().unwrap()[2], "Computer Wins!");
    }

    #[test]
    fn no_hand_means_no_score() {
        let mut engine = engine(
            vec![
                beat(0.0, None, Some(Key::Start)),
                beat(3.0, None, None),
                beat(5.0, None, None),
            ],
            Gesture::Paper,
        );
        let summary = engine.run().unwrap();
        assert_eq!(summary.player, 0);
        assert_eq!(summary.computer, 0);
        assert_eq!(engine.session().result(), Some(Outcome::Undetected));
        assert_eq!(engine.screen.shown.last().unwrap()[2], "No gesture detected!");
    }

    #[test]
    fn start_uses_the_frame_timestamp() {
        let mut engine = engine(
            vec![
                beat(10.0, None, Some(Key::Start)),
                beat(12.9, None, None),
                beat(13.0, None, None),
            ],
            Gesture::Rock,
        );
        engine.step().unwrap();
        engine.step().unwrap();
        assert!(matches!(engine.session().phase(), Phase::Countdown { .. }));
        engine.step().unwrap();
        assert!(matches!(engine.session().phase(), Phase::Playing { .. }));
    }

    #[test]
    fn quit_stops_before_the_stream_ends() {
        let mut engine = engine(
            vec![
                beat(0.0, None, None),
                beat(0.1, None, Some(Key::Quit)),
                beat(0.2, None, None),
            ],
            Gesture::Rock,
        );
        let summary = engine.run().unwrap();
        assert_eq!(summary.frames, 1);
        assert_eq!(engine.camera.0.len(), 1);
    }

    #[test]
    fn start_is_ignored_mid_round() {
        let mut engine = engine(
            vec![
                beat(0.0, None, Some(Key::Start)),
                beat(2.0, None, Some(Key::Start)),
                beat(3.0, None, Some(Key::Start)),
            ],
            Gesture::Rock,
        );
        engine.run().unwrap();
        match engine.session().phase() {
            Phase::Playing { computer, .. } => assert_eq!(*computer, Gesture::Rock),
            phase => panic!("expected playing, got {}", phase),
        }
    }

    #[test]
    fn gesture_is_tracked_while_waiting() {
        let open = Some(Fingers::from(0b11111));
        let mut engine = engine(vec![beat(0.0, open, None)], Gesture::Rock);
        engine.run().unwrap();
        assert_eq!(engine.session().gesture(), Gesture::Paper);
        assert_eq!(engine.screen.shown[0][1], "Current Gesture: Paper");
        assert_eq!(engine.session().phase(), &Phase::Waiting);
    }

    #[test]
    fn closed_stream_ends_cleanly() {
        let mut engine = engine(vec![], Gesture::Rock);
        assert_eq!(engine.run().unwrap(), Summary::default());
    }
}
