use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// How long a press counts as held when the terminal never reports releases,
/// once auto-repeat is running. Each repeat refreshes it.
pub const HOLD_WINDOW: Duration = Duration::from_millis(150);

/// Hold window between the first press and the first auto-repeat.
/// Must outlast the OS repeat delay, which runs up to about 660 ms.
pub const FIRST_REPEAT_WINDOW: Duration = Duration::from_millis(700);

/// Which of the three game keys are down this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub fire: bool,
    pub left: bool,
    pub right: bool,
}

/// Keys the scene reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Fire,
    Left,
    Right,
}

impl GameKey {
    pub fn from_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char('f') | KeyCode::Char('F') => Some(GameKey::Fire),
            KeyCode::Left => Some(GameKey::Left),
            KeyCode::Right => Some(GameKey::Right),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            GameKey::Fire => 0,
            GameKey::Left => 1,
            GameKey::Right => 2,
        }
    }
}

/// Last press of a key that has not been released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hold {
    at: Instant,
    /// Set once auto-repeat has kicked in for this press
    repeating: bool,
}

impl Hold {
    fn window(&self) -> Duration {
        if self.repeating {
            HOLD_WINDOW
        } else {
            FIRST_REPEAT_WINDOW
        }
    }

    fn is_live(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.at) <= self.window()
    }
}

/// One-shot actions outside the scene itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
}

/// Manages input polling and translates raw key events into held keys and actions
pub struct InputManager {
    /// Whether the terminal sends release events (keyboard enhancement)
    reports_releases: bool,
    /// Last press per game key, cleared on release
    holds: [Option<Hold>; 3],
    oneshot_actions: Vec<InputAction>,
}

impl InputManager {
    pub fn new(reports_releases: bool) -> Self {
        Self {
            reports_releases,
            holds: [None; 3],
            oneshot_actions: Vec::new(),
        }
    }

    /// Drains all pending terminal events without blocking.
    /// Should be called once per frame before reading key state.
    pub fn poll_events(&mut self) -> color_eyre::Result<()> {
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()? {
                self.handle_key_event(key_event, Instant::now());
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent, now: Instant) {
        if key_event.kind != KeyEventKind::Release && is_quit(&key_event) {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        let Some(key) = GameKey::from_code(key_event.code) else {
            return;
        };

        let slot = &mut self.holds[key.index()];
        match key_event.kind {
            // Without release events, auto-repeat arrives as more presses
            KeyEventKind::Press => {
                let repeating = slot.is_some_and(|hold| hold.is_live(now));
                *slot = Some(Hold { at: now, repeating });
            }
            KeyEventKind::Repeat => {
                *slot = Some(Hold {
                    at: now,
                    repeating: true,
                });
            }
            KeyEventKind::Release => {
                *slot = None;
            }
        }
    }

    pub fn is_held(&self, key: GameKey, now: Instant) -> bool {
        match self.holds[key.index()] {
            Some(_) if self.reports_releases => true,
            Some(hold) => hold.is_live(now),
            None => false,
        }
    }

    pub fn key_state(&self, now: Instant) -> KeyState {
        KeyState {
            fire: self.is_held(GameKey::Fire, now),
            left: self.is_held(GameKey::Left, now),
            right: self.is_held(GameKey::Right, now),
        }
    }

    /// Returns and clears the one-shot actions gathered since the last call
    pub fn take_actions(&mut self) -> Vec<InputAction> {
        std::mem::take(&mut self.oneshot_actions)
    }
}

fn is_quit(key_event: &KeyEvent) -> bool {
    matches!(
        key_event.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key_event.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
    }

    #[test]
    fn test_press_and_release_with_enhancement() {
        let mut input = InputManager::new(true);
        let start = Instant::now();

        input.handle_key_event(press(KeyCode::Left), start);
        input.handle_key_event(press(KeyCode::Char('f')), start);
        let later = start + Duration::from_secs(2);
        assert_eq!(
            input.key_state(later),
            KeyState {
                fire: true,
                left: true,
                right: false
            }
        );

        input.handle_key_event(release(KeyCode::Left), later);
        assert!(!input.is_held(GameKey::Left, later));
        assert!(input.is_held(GameKey::Fire, later));
    }

    #[test]
    fn test_held_key_survives_until_first_repeat() {
        let mut input = InputManager::new(false);
        let start = Instant::now();
        input.handle_key_event(press(KeyCode::Left), start);

        // No repeat yet: the OS repeat delay has not elapsed
        for ms in (0..=600).step_by(50) {
            assert!(
                input.is_held(GameKey::Left, start + Duration::from_millis(ms)),
                "released at {ms}ms"
            );
        }
        assert!(!input.is_held(GameKey::Left, start + Duration::from_millis(750)));
    }

    #[test]
    fn test_press_expires_without_release_events() {
        let mut input = InputManager::new(false);
        let start = Instant::now();
        let at = |ms| start + Duration::from_millis(ms);

        input.handle_key_event(press(KeyCode::Right), start);
        assert!(input.is_held(GameKey::Right, at(300)));

        // Terminals without enhancement send auto-repeat as further presses
        input.handle_key_event(press(KeyCode::Right), at(500));
        input.handle_key_event(press(KeyCode::Right), at(530));
        assert!(input.is_held(GameKey::Right, at(600)));
        // Once repeating, the key drops soon after the repeats stop
        assert!(!input.is_held(GameKey::Right, at(700)));

        // A fresh press after expiry waits for the repeat delay again
        input.handle_key_event(press(KeyCode::Right), at(1000));
        assert!(input.is_held(GameKey::Right, at(1300)));
    }

    #[test]
    fn test_repeat_events_keep_the_key_alive() {
        let mut input = InputManager::new(false);
        let start = Instant::now();
        let at = |ms| start + Duration::from_millis(ms);
        let repeat =
            KeyEvent::new_with_kind(KeyCode::Right, KeyModifiers::NONE, KeyEventKind::Repeat);

        input.handle_key_event(press(KeyCode::Right), start);
        input.handle_key_event(repeat, at(400));
        input.handle_key_event(repeat, at(430));
        assert!(input.is_held(GameKey::Right, at(550)));
        assert!(!input.is_held(GameKey::Right, at(600)));
    }

    #[test]
    fn test_left_and_right_can_be_held_together() {
        let mut input = InputManager::new(true);
        let now = Instant::now();
        input.handle_key_event(press(KeyCode::Left), now);
        input.handle_key_event(press(KeyCode::Right), now);
        let keys = input.key_state(now);
        assert!(keys.left && keys.right);
    }

    #[test]
    fn test_quit_keys() {
        let mut input = InputManager::new(true);
        let now = Instant::now();
        input.handle_key_event(press(KeyCode::Char('q')), now);
        input.handle_key_event(press(KeyCode::Esc), now);
        input.handle_key_event(
            KeyEvent::new_with_kind(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyEventKind::Press,
            ),
            now,
        );
        assert_eq!(input.take_actions(), vec![InputAction::Quit; 3]);
        assert!(input.take_actions().is_empty());
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut input = InputManager::new(true);
        let now = Instant::now();
        input.handle_key_event(press(KeyCode::Char(' ')), now);
        input.handle_key_event(press(KeyCode::Up), now);
        assert_eq!(input.key_state(now), KeyState::default());
        assert!(input.take_actions().is_empty());
    }
}
