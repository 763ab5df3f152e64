//! Cluster and feeder description tabs

use super::{input_card, labeled_input};
use crate::app::{Message, State};
use iced::Element;
use iced::widget::column;

pub(super) fn view_cluster_inputs(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.cluster_form;

    input_card(
        theme,
        column![
            labeled_input(theme, "Route (m):", &form.route, Message::ClusterRouteChanged),
            labeled_input(
                theme,
                "Slack FDT (unit):",
                &form.slack_fdt,
                Message::ClusterSlackFdtChanged
            ),
            labeled_input(
                theme,
                "Slack FAT (unit):",
                &form.slack_fat,
                Message::ClusterSlackFatChanged
            ),
            labeled_input(theme, "By OTDR (m):", &form.otdr, Message::ClusterOtdrChanged),
        ],
    )
}

pub(super) fn view_feeder_inputs(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.feeder_form;

    input_card(
        theme,
        column![
            labeled_input(theme, "Route (m):", &form.route, Message::FeederRouteChanged),
            labeled_input(theme, "Slack (unit):", &form.slack, Message::FeederSlackChanged),
            labeled_input(theme, "By OTDR (m):", &form.otdr, Message::FeederOtdrChanged),
        ],
    )
}
