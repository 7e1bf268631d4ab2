use crate::app::NetworkEventSender;
use crate::bmi::{ResultView, UnitSystem};
use crate::contact::{ContactError, SubmissionController};
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogBuffer;
use crate::ui::Theme;
use crossterm::event::KeyEvent;
use log::*;
use std::time::Instant;
use tui_textarea::TextArea;

use super::error::StateError;
use super::form::{cycle, is_numeric_input, BmiField, BmiForm, ContactField, UnitToggle};
use super::navigation::{NavToggle, Section};

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    section: Section,
    nav: NavToggle,
    nav_index: usize,
    units: UnitToggle,
    bmi_form: BmiForm,
    bmi_field: BmiField,
    result: ResultView,
    contact: SubmissionController,
    contact_field: ContactField,
    message_editor: TextArea<'static>, // Mirrors contact.form().message
    log: LogBuffer,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            section: Section::default(),
            nav: NavToggle::default(),
            nav_index: 0,
            units: UnitToggle::default(),
            bmi_form: BmiForm::default(),
            bmi_field: BmiField::Units,
            result: ResultView::reset(),
            contact: SubmissionController::default(),
            contact_field: ContactField::Name,
            message_editor: new_message_editor(),
            log: LogBuffer::default(),
            theme: Theme::default(),
        }
    }
}

impl State {
    /// Return new state with the network channel, starting unit system,
    /// theme and log buffer.
    ///
    pub fn new(net_sender: NetworkEventSender, units: UnitSystem, theme: Theme, log: LogBuffer) -> Self {
        State {
            net_sender: Some(net_sender),
            units: UnitToggle::new(units),
            theme,
            log,
            ..State::default()
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Return a snapshot of captured log lines, oldest first.
    ///
    pub fn log_entries(&self) -> Vec<String> {
        self.log.entries()
    }

    pub fn current_section(&self) -> Section {
        self.section
    }

    pub fn set_section(&mut self, section: Section) {
        debug!("Switching to section {:?}.", section);
        self.section = section;
    }

    pub fn nav(&self) -> &NavToggle {
        &self.nav
    }

    /// Open or close the navigation panel. Opening it preselects the link of
    /// the current section.
    ///
    pub fn toggle_nav(&mut self) {
        if self.nav.toggle() {
            self.nav_index = Section::ALL
                .iter()
                .position(|s| *s == self.section)
                .unwrap_or(0);
        }
    }

    pub fn nav_index(&self) -> usize {
        self.nav_index
    }

    pub fn next_nav_link(&mut self) {
        self.nav_index = (self.nav_index + 1) % Section::ALL.len();
    }

    pub fn previous_nav_link(&mut self) {
        let len = Section::ALL.len();
        self.nav_index = (self.nav_index + len - 1) % len;
    }

    /// Navigate to the selected link and close the panel.
    ///
    pub fn follow_nav_link(&mut self) {
        if !self.nav.follow_link() {
            return;
        }
        let section = Section::ALL[self.nav_index % Section::ALL.len()];
        self.set_section(section);
    }

    /// Return whether the main content currently ignores navigation and
    /// input.
    ///
    pub fn is_scroll_locked(&self) -> bool {
        self.nav.is_scroll_locked()
    }

    // Calculator

    pub fn units(&self) -> &UnitToggle {
        &self.units
    }

    pub fn select_units(&mut self, unit: UnitSystem) {
        if self.units.select(unit) {
            debug!("Selected {} units.", unit);
        }
        self.unfocus_hidden_field();
    }

    pub fn toggle_units(&mut self) {
        self.units.toggle();
        debug!("Selected {} units.", self.units.selected());
        self.unfocus_hidden_field();
    }

    /// Move focus back to the unit selector if the focused input was hidden.
    ///
    fn unfocus_hidden_field(&mut self) {
        if !BmiField::for_units(self.units.selected()).contains(&self.bmi_field) {
            self.bmi_field = BmiField::Units;
        }
    }

    pub fn bmi_form(&self) -> &BmiForm {
        &self.bmi_form
    }

    pub fn bmi_field(&self) -> BmiField {
        self.bmi_field
    }

    pub fn next_bmi_field(&mut self) {
        let order = BmiField::for_units(self.units.selected());
        self.bmi_field = cycle(order, self.bmi_field, true);
    }

    pub fn previous_bmi_field(&mut self) {
        let order = BmiField::for_units(self.units.selected());
        self.bmi_field = cycle(order, self.bmi_field, false);
    }

    /// Type a character into the focused measurement input. Characters a
    /// number input would refuse are dropped.
    ///
    pub fn add_bmi_char(&mut self, c: char) {
        if !is_numeric_input(c) {
            return;
        }
        if let Some(value) = self.bmi_form.value_mut(self.bmi_field) {
            value.push(c);
        }
    }

    pub fn remove_bmi_char(&mut self) {
        if let Some(value) = self.bmi_form.value_mut(self.bmi_field) {
            value.pop();
        }
    }

    /// Calculate from the visible inputs and present the result.
    ///
    pub fn calculate_bmi(&mut self) {
        let result = self.bmi_form.evaluate(self.units.selected());
        match (result.value, result.category) {
            (Some(value), Some(category)) => info!(
                "Calculated BMI {} ({} units, row '{}').",
                value,
                self.units.selected(),
                category.range_id()
            ),
            _ => debug!("BMI inputs incomplete or invalid."),
        }
        self.result = ResultView::present(&result);
    }

    /// Clear the measurement inputs and the results region.
    ///
    pub fn reset_calculator(&mut self) {
        self.bmi_form.clear();
        self.result = ResultView::reset();
    }

    pub fn result(&self) -> &ResultView {
        &self.result
    }

    // Contact

    pub fn contact(&self) -> &SubmissionController {
        &self.contact
    }

    pub fn contact_field(&self) -> ContactField {
        self.contact_field
    }

    pub fn message_editor(&self) -> &TextArea<'static> {
        &self.message_editor
    }

    pub fn message_editor_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.message_editor
    }

    pub fn next_contact_field(&mut self) {
        self.contact_field = cycle(&ContactField::ALL, self.contact_field, true);
    }

    pub fn previous_contact_field(&mut self) {
        self.contact_field = cycle(&ContactField::ALL, self.contact_field, false);
    }

    /// Type a character into the focused single-line contact input.
    ///
    pub fn add_contact_char(&mut self, c: char) {
        let form = self.contact.form_mut();
        match self.contact_field {
            ContactField::Name => form.name.push(c),
            ContactField::Email => form.email.push(c),
            ContactField::Message | ContactField::Submit => (),
        }
    }

    pub fn remove_contact_char(&mut self) {
        let form = self.contact.form_mut();
        match self.contact_field {
            ContactField::Name => {
                form.name.pop();
            }
            ContactField::Email => {
                form.email.pop();
            }
            ContactField::Message | ContactField::Submit => (),
        }
    }

    /// Forward a key to the message editor and mirror its text into the form.
    ///
    pub fn input_message(&mut self, key: KeyEvent) {
        if self.message_editor.input(key) {
            self.contact.form_mut().message = self.message_editor.lines().join("\n");
        }
    }

    /// Submit the contact form. Returns whether a submission was queued; a
    /// honeypot hit or a submission already in flight queue nothing.
    ///
    pub fn submit_contact(&mut self) -> Result<bool, StateError> {
        let sender = self
            .net_sender
            .as_ref()
            .ok_or(StateError::NetworkSenderNotSet)?
            .clone();
        let submission = match self.contact.submit() {
            Some(submission) => submission,
            None => return Ok(false),
        };
        let attempt = submission.attempt;
        if let Err(e) = sender.send(NetworkEvent::SubmitContact(submission)) {
            self.resolve_contact(attempt, Err(ContactError::Dispatch(e.to_string())), Instant::now());
            return Err(StateError::NetworkSendFailed(e.to_string()));
        }
        Ok(true)
    }

    /// Feed the outcome of a delivery back into the submission controller.
    ///
    pub fn resolve_contact(&mut self, attempt: u64, outcome: Result<(), ContactError>, now: Instant) {
        let sent = outcome.is_ok();
        if self.contact.resolve(attempt, outcome, now) && sent {
            self.message_editor = new_message_editor();
            self.contact_field = ContactField::Name;
        }
    }

    /// Advance timers. Called on every terminal tick.
    ///
    pub fn on_tick(&mut self, now: Instant) {
        self.contact.tick(now);
    }

    /// Test-only access to the contact form, including the hidden honeypot.
    ///
    #[cfg(test)]
    pub(crate) fn contact_mut(&mut self) -> &mut SubmissionController {
        &mut self.contact
    }
}

fn new_message_editor() -> TextArea<'static> {
    let mut editor = TextArea::default();
    editor.set_placeholder_text("Your message");
    editor.set_cursor_line_style(ratatui::style::Style::default());
    editor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::{Category, INVALID_INPUT_PROMPT, VALUE_PLACEHOLDER};
    use crate::contact::{SubmissionState, SUCCESS_REVERT_DELAY};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::mpsc;

    fn state_with_channel() -> (State, mpsc::Receiver<NetworkEvent>) {
        let (tx, rx) = mpsc::channel();
        let state = State::new(tx, UnitSystem::Metric, Theme::default(), LogBuffer::default());
        (state, rx)
    }

    fn type_into(state: &mut State, text: &str) {
        text.chars().for_each(|c| state.add_bmi_char(c));
    }

    #[test]
    fn test_metric_calculation() {
        let (mut state, _rx) = state_with_channel();
        state.next_bmi_field();
        type_into(&mut state, "170");
        state.next_bmi_field();
        type_into(&mut state, "70");
        state.calculate_bmi();
        assert_eq!(state.result().value_text, "24.2");
        assert_eq!(state.result().highlighted(), Some(Category::Normal));
    }

    #[test]
    fn test_missing_weight_shows_placeholder() {
        let (mut state, _rx) = state_with_channel();
        state.next_bmi_field();
        type_into(&mut state, "170");
        state.calculate_bmi();
        assert_eq!(state.result().value_text, VALUE_PLACEHOLDER);
        assert_eq!(state.result().label_text, INVALID_INPUT_PROMPT);
        assert_eq!(state.result().highlighted(), None);
    }

    #[test]
    fn test_units_field_takes_no_text() {
        let (mut state, _rx) = state_with_channel();
        assert_eq!(state.bmi_field(), BmiField::Units);
        type_into(&mut state, "12");
        assert_eq!(state.bmi_form(), &BmiForm::default());
    }

    #[test]
    fn test_switching_units_refocuses_hidden_field() {
        let (mut state, _rx) = state_with_channel();
        state.next_bmi_field();
        assert_eq!(state.bmi_field(), BmiField::HeightCm);
        state.toggle_units();
        assert_eq!(state.units().selected(), UnitSystem::Imperial);
        assert_eq!(state.bmi_field(), BmiField::Units);
    }

    #[test]
    fn test_reset_calculator() {
        let (mut state, _rx) = state_with_channel();
        state.next_bmi_field();
        type_into(&mut state, "170");
        state.calculate_bmi();
        state.reset_calculator();
        assert_eq!(state.result(), &ResultView::reset());
        assert_eq!(state.bmi_form(), &BmiForm::default());
    }

    #[test]
    fn test_nav_follow_link() {
        let (mut state, _rx) = state_with_channel();
        state.toggle_nav();
        assert!(state.is_scroll_locked());
        assert_eq!(state.nav_index(), 0);
        state.next_nav_link();
        state.follow_nav_link();
        assert_eq!(state.current_section(), Section::Contact);
        assert!(!state.nav().is_open());
        assert!(!state.is_scroll_locked());
    }

    #[test]
    fn test_submit_contact_queues_event() {
        let (mut state, rx) = state_with_channel();
        "Ada".chars().for_each(|c| state.add_contact_char(c));
        assert!(state.submit_contact().unwrap());
        match rx.try_recv().unwrap() {
            NetworkEvent::SubmitContact(submission) => {
                assert_eq!(submission.attempt, 1);
                assert_eq!(submission.form.name, "Ada");
            }
        }
        assert_eq!(state.contact().state(), SubmissionState::Loading);
    }

    #[test]
    fn test_honeypot_queues_nothing() {
        let (mut state, rx) = state_with_channel();
        state.contact_mut().form_mut().honeypot = "bot".to_string();
        assert!(!state.submit_contact().unwrap());
        assert!(rx.try_recv().is_err());
        assert_eq!(state.contact().state(), SubmissionState::Idle);
    }

    #[test]
    fn test_submit_without_sender() {
        let mut state = State::default();
        assert!(matches!(state.submit_contact(), Err(StateError::NetworkSenderNotSet)));
        assert_eq!(state.contact().state(), SubmissionState::Idle);
    }

    #[test]
    fn test_submit_with_closed_channel_does_not_stay_loading() {
        let (mut state, rx) = state_with_channel();
        drop(rx);
        assert!(matches!(state.submit_contact(), Err(StateError::NetworkSendFailed(_))));
        assert_eq!(state.contact().state(), SubmissionState::Error);
    }

    #[test]
    fn test_success_clears_message_editor() {
        let (mut state, _rx) = state_with_channel();
        state.next_contact_field();
        state.next_contact_field();
        assert_eq!(state.contact_field(), ContactField::Message);
        state.input_message(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE));
        state.input_message(KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE));
        assert_eq!(state.contact().form().message, "hi");

        state.submit_contact().unwrap();
        let now = Instant::now();
        state.resolve_contact(1, Ok(()), now);
        assert_eq!(state.contact().form().message, "");
        assert_eq!(state.message_editor().lines().join(""), "");
        assert_eq!(state.contact_field(), ContactField::Name);

        state.on_tick(now + SUCCESS_REVERT_DELAY);
        assert_eq!(state.contact().state(), SubmissionState::Idle);
    }
}
