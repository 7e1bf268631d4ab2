use crate::bmi::UnitSystem;
use crate::state::{BmiField, ContactField, Section, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration, time::Instant};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => (),
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => {
                state.on_tick(Instant::now());
                Ok(true)
            }
        }
    }
}

/// Apply a key press to state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    match key {
        KeyEvent {
            code: KeyCode::Char('c') | KeyCode::Char('q'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyEvent {
            code: KeyCode::Char('n'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => state.toggle_nav(),
        // The open panel takes all other input; the page underneath is locked.
        _ if state.nav().is_open() => handle_nav_key(state, key),
        _ => match state.current_section() {
            Section::Calculator => handle_calculator_key(state, key),
            Section::Contact => handle_contact_key(state, key),
        },
    }
    true
}

fn handle_nav_key(state: &mut State, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.previous_nav_link(),
        KeyCode::Down | KeyCode::Char('j') => state.next_nav_link(),
        KeyCode::Enter => state.follow_nav_link(),
        KeyCode::Esc => state.toggle_nav(),
        _ => (),
    }
}

fn handle_calculator_key(state: &mut State, key: KeyEvent) {
    if key.modifiers == KeyModifiers::CONTROL {
        match key.code {
            KeyCode::Char('r') => state.reset_calculator(),
            KeyCode::Char('u') => state.toggle_units(),
            _ => (),
        }
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => state.next_bmi_field(),
        KeyCode::BackTab | KeyCode::Up => state.previous_bmi_field(),
        KeyCode::Enter => state.calculate_bmi(),
        KeyCode::Backspace => state.remove_bmi_char(),
        KeyCode::Left if state.bmi_field() == BmiField::Units => {
            state.select_units(UnitSystem::Metric)
        }
        KeyCode::Right if state.bmi_field() == BmiField::Units => {
            state.select_units(UnitSystem::Imperial)
        }
        KeyCode::Char(' ') if state.bmi_field() == BmiField::Units => state.toggle_units(),
        KeyCode::Char('m') if state.bmi_field() == BmiField::Units => {
            state.select_units(UnitSystem::Metric)
        }
        KeyCode::Char('i') if state.bmi_field() == BmiField::Units => {
            state.select_units(UnitSystem::Imperial)
        }
        KeyCode::Char(c) => state.add_bmi_char(c),
        _ => (),
    }
}

fn handle_contact_key(state: &mut State, key: KeyEvent) {
    match key {
        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => submit_contact(state),
        KeyEvent {
            code: KeyCode::Tab, ..
        } => state.next_contact_field(),
        KeyEvent {
            code: KeyCode::BackTab,
            ..
        } => state.previous_contact_field(),
        // Everything else typed in the message goes to its editor.
        _ if state.contact_field() == ContactField::Message => state.input_message(key),
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => submit_contact(state),
        KeyEvent {
            code: KeyCode::Down,
            ..
        } => state.next_contact_field(),
        KeyEvent {
            code: KeyCode::Up, ..
        } => state.previous_contact_field(),
        KeyEvent {
            code: KeyCode::Char(' '),
            ..
        } if state.contact_field() == ContactField::Submit => submit_contact(state),
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            ..
        } => state.add_contact_char(c),
        KeyEvent {
            code: KeyCode::Backspace,
            ..
        } => state.remove_contact_char(),
        _ => (),
    }
}

fn submit_contact(state: &mut State) {
    match state.submit_contact() {
        Ok(true) => (),
        Ok(false) => debug!("Contact submission not queued."),
        Err(e) => error!("Failed to submit contact form: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::{Category, VALUE_PLACEHOLDER};
    use crate::contact::SubmissionState;
    use crate::logger::LogBuffer;
    use crate::ui::Theme;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            assert!(handle_key(state, press(KeyCode::Char(c))));
        }
    }

    fn new_state() -> (State, mpsc::Receiver<crate::events::network::Event>) {
        let (tx, rx) = mpsc::channel();
        let state = State::new(tx, UnitSystem::Metric, Theme::default(), LogBuffer::default());
        (state, rx)
    }

    #[test]
    fn test_exit_keys() {
        let (mut state, _rx) = new_state();
        assert!(!handle_key(&mut state, ctrl('c')));
        assert!(!handle_key(&mut state, ctrl('q')));
    }

    #[test]
    fn test_imperial_calculation_by_keys() {
        let (mut state, _rx) = new_state();
        handle_key(&mut state, press(KeyCode::Right));
        assert_eq!(state.units().selected(), UnitSystem::Imperial);
        handle_key(&mut state, press(KeyCode::Tab));
        type_text(&mut state, "5");
        handle_key(&mut state, press(KeyCode::Tab));
        type_text(&mut state, "10");
        handle_key(&mut state, press(KeyCode::Tab));
        type_text(&mut state, "160");
        handle_key(&mut state, press(KeyCode::Enter));
        assert_eq!(state.result().highlighted(), Some(Category::Normal));
        assert_eq!(state.result().label_text, "Normal weight");
    }

    #[test]
    fn test_unit_toggle_round_trip_by_keys() {
        let (mut state, _rx) = new_state();
        handle_key(&mut state, press(KeyCode::Char(' ')));
        assert!(state.units().is_visible(UnitSystem::Imperial));
        handle_key(&mut state, press(KeyCode::Char(' ')));
        assert!(state.units().is_visible(UnitSystem::Metric));
        assert!(!state.units().is_visible(UnitSystem::Imperial));
    }

    #[test]
    fn test_reset_by_keys() {
        let (mut state, _rx) = new_state();
        handle_key(&mut state, press(KeyCode::Tab));
        type_text(&mut state, "170");
        handle_key(&mut state, press(KeyCode::Enter));
        assert_eq!(state.result().value_text, VALUE_PLACEHOLDER);
        handle_key(&mut state, ctrl('r'));
        assert_eq!(state.bmi_form().height_cm, "");
    }

    #[test]
    fn test_open_nav_locks_page() {
        let (mut state, _rx) = new_state();
        handle_key(&mut state, press(KeyCode::Tab));
        handle_key(&mut state, ctrl('n'));
        assert!(state.nav().is_open());
        type_text(&mut state, "170");
        assert_eq!(state.bmi_form().height_cm, "");

        handle_key(&mut state, press(KeyCode::Down));
        handle_key(&mut state, press(KeyCode::Enter));
        assert!(!state.nav().is_open());
        assert_eq!(state.current_section(), Section::Contact);
    }

    #[test]
    fn test_escape_closes_nav() {
        let (mut state, _rx) = new_state();
        handle_key(&mut state, ctrl('n'));
        handle_key(&mut state, press(KeyCode::Esc));
        assert!(!state.nav().is_open());
        assert!(!state.nav().aria_expanded());
        assert_eq!(state.current_section(), Section::Calculator);
    }

    #[test]
    fn test_contact_form_by_keys() {
        let (mut state, rx) = new_state();
        state.set_section(Section::Contact);
        type_text(&mut state, "Ada");
        handle_key(&mut state, press(KeyCode::Tab));
        type_text(&mut state, "ada@example.com");
        handle_key(&mut state, press(KeyCode::Tab));
        type_text(&mut state, "Hi");
        handle_key(&mut state, press(KeyCode::Enter));
        type_text(&mut state, "there");
        // Enter in the message adds a line instead of submitting.
        assert_eq!(state.contact().state(), SubmissionState::Idle);
        assert_eq!(state.contact().form().message, "Hi\nthere");

        handle_key(&mut state, ctrl('s'));
        assert_eq!(state.contact().state(), SubmissionState::Loading);
        assert!(rx.try_recv().is_ok());

        // The control is disabled while loading.
        handle_key(&mut state, ctrl('s'));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_enter_on_single_line_field_submits() {
        let (mut state, rx) = new_state();
        state.set_section(Section::Contact);
        type_text(&mut state, "Ada");
        handle_key(&mut state, press(KeyCode::Enter));
        assert!(rx.try_recv().is_ok());
    }
}
