// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{Algorithm, Control};

pub const SPEED_STEP: i16 = 1;
pub const SPEED_PAGE_STEP: i16 = 10;
pub const BAR_COUNT_STEP: isize = 5;

/// Everything a key press can ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    SelectAlgorithm(Algorithm),
    NextAlgorithm,
    PrevAlgorithm,
    Start,
    Stop,
    AdjustSpeed(i16),
    AdjustBarCount(isize),
    Shuffle,
    Reset,
    CycleCodeListing,
    Exit,
}

impl AppAction {
    /// The control this action operates, which decides whether it is allowed right now.
    #[must_use]
    pub fn control(self) -> Control {
        match self {
            AppAction::SelectAlgorithm(_)
            | AppAction::NextAlgorithm
            | AppAction::PrevAlgorithm => Control::AlgorithmSelector,
            AppAction::Start => Control::Start,
            AppAction::Stop => Control::Stop,
            AppAction::AdjustSpeed(_) => Control::Speed,
            AppAction::AdjustBarCount(_) => Control::BarCount,
            AppAction::Shuffle => Control::Shuffle,
            AppAction::Reset => Control::Reset,
            AppAction::CycleCodeListing => Control::CodeListing,
            AppAction::Exit => Control::Exit,
        }
    }
}

/// Key bindings. Only presses count, so key repeat works and releases are ignored.
impl TryFrom<KeyEvent> for AppAction {
    type Error = ();

    fn try_from(key_event: KeyEvent) -> Result<Self, Self::Error> {
        if key_event.kind != KeyEventKind::Press {
            return Err(());
        }

        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return match key_event.code {
                KeyCode::Char('c') => Ok(AppAction::Exit),
                _ => Err(()),
            };
        }

        let action = match key_event.code {
            KeyCode::Char(ch @ '1'..='9') => {
                AppAction::SelectAlgorithm(Algorithm::from_shortcut(ch).ok_or(())?)
            }
            KeyCode::Right => AppAction::NextAlgorithm,
            KeyCode::Left => AppAction::PrevAlgorithm,
            KeyCode::Enter | KeyCode::Char(' ') => AppAction::Start,
            KeyCode::Esc | KeyCode::Char('x') => AppAction::Stop,
            KeyCode::Up | KeyCode::Char('+' | '=') => AppAction::AdjustSpeed(SPEED_STEP),
            KeyCode::Down | KeyCode::Char('-') => AppAction::AdjustSpeed(-SPEED_STEP),
            KeyCode::PageUp => AppAction::AdjustSpeed(SPEED_PAGE_STEP),
            KeyCode::PageDown => AppAction::AdjustSpeed(-SPEED_PAGE_STEP),
            KeyCode::Char(']') => AppAction::AdjustBarCount(BAR_COUNT_STEP),
            KeyCode::Char('[') => AppAction::AdjustBarCount(-BAR_COUNT_STEP),
            KeyCode::Char('s') => AppAction::Shuffle,
            KeyCode::Char('r') => AppAction::Reset,
            KeyCode::Char('c') => AppAction::CycleCodeListing,
            KeyCode::Char('q') => AppAction::Exit,
            _ => return Err(()),
        };
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn press(code: KeyCode) -> KeyEvent { KeyEvent::new(code, KeyModifiers::NONE) }

    #[test_case(KeyCode::Char('1'), AppAction::SelectAlgorithm(Algorithm::Bubble))]
    #[test_case(KeyCode::Char('4'), AppAction::SelectAlgorithm(Algorithm::Merge))]
    #[test_case(KeyCode::Right, AppAction::NextAlgorithm)]
    #[test_case(KeyCode::Enter, AppAction::Start)]
    #[test_case(KeyCode::Char(' '), AppAction::Start)]
    #[test_case(KeyCode::Esc, AppAction::Stop)]
    #[test_case(KeyCode::Char('+'), AppAction::AdjustSpeed(1))]
    #[test_case(KeyCode::PageDown, AppAction::AdjustSpeed(-10))]
    #[test_case(KeyCode::Char('['), AppAction::AdjustBarCount(-5))]
    #[test_case(KeyCode::Char('s'), AppAction::Shuffle)]
    #[test_case(KeyCode::Char('r'), AppAction::Reset)]
    #[test_case(KeyCode::Char('c'), AppAction::CycleCodeListing)]
    #[test_case(KeyCode::Char('q'), AppAction::Exit)]
    fn test_key_bindings(code: KeyCode, expected: AppAction) {
        assert_eq!(AppAction::try_from(press(code)), Ok(expected));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(AppAction::try_from(press(KeyCode::Char('5'))), Err(()));
        assert_eq!(AppAction::try_from(press(KeyCode::Tab)), Err(()));
    }

    #[test]
    fn test_ctrl_c_exits_and_other_ctrl_keys_do_not() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(AppAction::try_from(ctrl_c), Ok(AppAction::Exit));
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(AppAction::try_from(ctrl_s), Err(()));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(AppAction::try_from(release), Err(()));
    }

    #[test]
    fn test_every_action_maps_to_its_control() {
        assert_eq!(AppAction::Reset.control(), Control::Reset);
        assert_eq!(AppAction::PrevAlgorithm.control(), Control::AlgorithmSelector);
        assert_eq!(AppAction::AdjustSpeed(-1).control(), Control::Speed);
    }
}
