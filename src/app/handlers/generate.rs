//! Generator actions on the active tab

use crate::app::forms::Output;
use crate::app::{Message, State};
use cablegen::core::Generator;
use cablegen::utils::copyable_output;
use iced::Task;

/// Output panel of the active tab
pub(crate) fn active_output(state: &State) -> &Output {
    match state.active_tab {
        Generator::CableName => &state.cable_form.output,
        Generator::ClusterLength => &state.cluster_form.output,
        Generator::FeederLength => &state.feeder_form.output,
    }
}

pub(crate) fn handle_generate(state: &mut State) {
    match state.active_tab {
        Generator::CableName => state.cable_form.generate(),
        Generator::ClusterLength => state.cluster_form.generate(),
        Generator::FeederLength => state.feeder_form.generate(),
    }
    tracing::debug!("Generated output on {}", state.active_tab.title());
}

pub(crate) fn handle_reset(state: &mut State) {
    match state.active_tab {
        Generator::CableName => state.cable_form.reset(),
        Generator::ClusterLength => state.cluster_form.reset(),
        Generator::FeederLength => state.feeder_form.reset(),
    }
}

/// Copies the active result to the system clipboard; empty panels copy nothing.
pub(crate) fn handle_copy(state: &State) -> Task<Message> {
    match copyable_output(active_output(state).text()) {
        Some(content) => {
            tracing::info!("Copied {} result to clipboard", state.active_tab.title());
            iced::clipboard::write(content)
        }
        None => Task::none(),
    }
}
