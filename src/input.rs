use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{AppMode, MENU_ENTRIES};
use crate::messages::UiEvent;

/// Map keyboard input to UiEvent based on current mode
pub fn handle_key(key: KeyEvent, mode: AppMode, menu_open: bool) -> Option<UiEvent> {
    // While the menu is open it captures all input: digits pick an entry,
    // M toggles it shut, anything else dismisses it
    if menu_open {
        return Some(match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index < MENU_ENTRIES.len() {
                    UiEvent::MenuSelect(index)
                } else {
                    UiEvent::MenuDismiss
                }
            }
            KeyCode::Char('m') => UiEvent::ToggleMenu,
            KeyCode::Esc => UiEvent::MenuDismiss,
            _ => UiEvent::MenuDismiss,
        });
    }

    // Global keys (all modes)
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Tab => return Some(UiEvent::CycleMode),
        KeyCode::Char('m') => return Some(UiEvent::ToggleMenu),
        _ => {}
    }

    match mode {
        AppMode::Dashboard => handle_dashboard_key(key),
        AppMode::Signal => handle_signal_key(key),
    }
}

fn handle_dashboard_key(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('a') => Some(UiEvent::AddSensor),
        KeyCode::Char('t') => Some(UiEvent::CycleSensorKind),
        KeyCode::Char('s') => Some(UiEvent::ToggleStream),
        KeyCode::Char('x') | KeyCode::Delete => Some(UiEvent::RemoveSelectedSensor),
        KeyCode::Char('c') => Some(UiEvent::ClearDashboard),
        KeyCode::Char(c @ '1'..='9') => {
            Some(UiEvent::SelectSensor((c as usize) - ('1' as usize)))
        }
        KeyCode::Left => Some(UiEvent::SelectPrevSensor),
        KeyCode::Right => Some(UiEvent::SelectNextSensor),
        _ => None,
    }
}

fn handle_signal_key(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('w') => Some(UiEvent::CycleWave),
        KeyCode::Char('f') => Some(UiEvent::CycleFilter),
        KeyCode::Char('o') => Some(UiEvent::CycleModulation),
        KeyCode::Up => Some(UiEvent::AdjustFrequency(1.0)),
        KeyCode::Down => Some(UiEvent::AdjustFrequency(-1.0)),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(UiEvent::AdjustAmplitude(0.1)),
        KeyCode::Char('-') => Some(UiEvent::AdjustAmplitude(-0.1)),
        KeyCode::Char(']') => Some(UiEvent::AdjustCutoff(1.0)),
        KeyCode::Char('[') => Some(UiEvent::AdjustCutoff(-1.0)),
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(UiEvent::ToggleAudio),
        _ => None,
    }
}

/// Key labels for the hint bar
pub fn key_hints(mode: AppMode, menu_open: bool) -> Vec<(&'static str, &'static str)> {
    if menu_open {
        return vec![
            ("1-2", "Go To"),
            ("M", "Close Menu"),
            ("Any", "Dismiss"),
        ];
    }

    let mut hints = vec![("M", "Menu"), ("Tab", "Mode"), ("Q", "Quit")];

    match mode {
        AppMode::Dashboard => {
            hints.insert(0, ("A", "Add"));
            hints.insert(1, ("T", "Type"));
            hints.insert(2, ("S", "Stream"));
            hints.insert(3, ("X", "Remove"));
            hints.insert(4, ("C", "Clear"));
            hints.insert(5, ("←/→", "Select"));
        }
        AppMode::Signal => {
            hints.insert(0, ("W", "Wave"));
            hints.insert(1, ("F", "Filter"));
            hints.insert(2, ("O", "Mod"));
            hints.insert(3, ("↑/↓", "Freq"));
            hints.insert(4, ("+/-", "Amp"));
            hints.insert(5, ("[/]", "Cutoff"));
            hints.insert(6, ("Space", "Play"));
        }
    }

    hints
}
