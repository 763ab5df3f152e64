//! UI state management
//!
//! Tab, theme and cable category changes. Each one is remembered for the next
//! launch, so it also schedules a config save.

use crate::app::{Message, State};
use cablegen::core::Generator;
use cablegen::core::cable::CableCategory;
use cablegen::theme::ThemeChoice;
use iced::Task;

pub(crate) fn handle_tab_changed(state: &mut State, tab: Generator) -> Task<Message> {
    if state.active_tab == tab {
        return Task::none();
    }
    state.active_tab = tab;
    state.save_config()
}

pub(crate) fn handle_theme_changed(state: &mut State, choice: ThemeChoice) -> Task<Message> {
    state.current_theme = choice;
    state.theme = choice.to_theme();
    tracing::info!("Theme changed to {choice}");
    state.save_config()
}

pub(crate) fn handle_category_selected(state: &mut State, category: CableCategory) -> Task<Message> {
    state.cable_form.select_category(category);
    state.save_config()
}
