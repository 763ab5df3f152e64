//! Cable generator tab

use super::{input_card, labeled_input, labeled_pick_list};
use crate::app::ui_components::{inactive_choice_button, success_button};
use crate::app::{Message, State};
use cablegen::core::cable::{CableCategory, ClusterCableType, FeederCableType, FeederType};
use iced::widget::{button, column, row, text};
use iced::{Element, Length};
use strum::IntoEnumIterator;

pub(super) fn view_cable_inputs(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.cable_form;

    let categories = CableCategory::iter().fold(row![].spacing(8), |choices, category| {
        let is_selected = form.category == category;
        choices.push(
            button(text(category.display_name()).size(12).width(Length::Fill).center())
                .width(Length::Fill)
                .padding([8, 16])
                .on_press(Message::CategorySelected(category))
                .style(move |_, status| {
                    if is_selected {
                        success_button(theme, status)
                    } else {
                        inactive_choice_button(theme, status)
                    }
                }),
        )
    });

    let mut fields = column![
        text("Cable Category:").size(12).color(theme.fg_muted),
        categories,
    ];

    fields = match form.category {
        CableCategory::Cluster => fields
            .push(labeled_input(theme, "FDT Code:", &form.fdt_code, Message::CableFdtChanged))
            .push(labeled_input(theme, "Line Code:", &form.line_code, Message::CableLineChanged))
            .push(labeled_pick_list(
                theme,
                "Cable Type:",
                ClusterCableType::iter().collect(),
                form.cluster_cable_type,
                Message::ClusterCableTypeSelected,
            )),
        CableCategory::Feeder => fields
            .push(labeled_input(theme, "OLT Code:", &form.olt_code, Message::CableOltChanged))
            .push(labeled_input(theme, "FDT Code:", &form.fdt_code, Message::CableFdtChanged))
            .push(labeled_pick_list(
                theme,
                "Feeder Type:",
                FeederType::iter().collect(),
                form.feeder_type,
                Message::FeederTypeSelected,
            ))
            .push(labeled_pick_list(
                theme,
                "Cable Type:",
                FeederCableType::iter().collect(),
                form.feeder_cable_type,
                Message::FeederCableTypeSelected,
            )),
    };

    fields = fields.push(labeled_input(
        theme,
        "Length by OTDR (m):",
        &form.length,
        Message::CableLengthChanged,
    ));

    input_card(theme, fields)
}
