//! Window layout: header, tab strip, generator panel and footer
//!
//! Every generator tab shares the same two-column shape: an input card with
//! GENERATE / RESET / COPY underneath on the left, the result panel on the right.

mod cable;
mod lengths;

use crate::app::handlers::active_output;
use crate::app::ui_components::{
    card_container, header_container, inactive_choice_button, main_container, neutral_button,
    output_container, primary_button, success_button, themed_pick_list, themed_pick_list_menu,
    themed_text_input,
};
use crate::app::{Message, State};
use cablegen::core::Generator;
use cablegen::theme::{AppTheme, ThemeChoice};
use iced::widget::{button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Font, Length};
use strum::IntoEnumIterator;

const TITLE: &str = "EMR Cable Generator Tools";

pub fn view(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let header = container(
        text(TITLE)
            .size(22)
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            })
            .color(theme.fg_primary),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fixed(80.0))
    .style(move |_| header_container(theme));

    let panel = match state.active_tab {
        Generator::CableName => cable::view_cable_inputs(state),
        Generator::ClusterLength => lengths::view_cluster_inputs(state),
        Generator::FeederLength => lengths::view_feeder_inputs(state),
    };

    let body = column![
        view_tab_strip(state),
        row![
            column![panel, view_actions(theme)]
                .spacing(24)
                .width(Length::FillPortion(1)),
            view_output(state).width(Length::FillPortion(1)),
        ]
        .spacing(12)
        .height(Length::Fill),
        view_footer(state),
    ]
    .spacing(16)
    .padding(16);

    container(column![header, body])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| main_container(theme))
        .into()
}

fn view_tab_strip(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let tabs = Generator::iter().fold(row![].spacing(8), |tabs, tab| {
        let is_active = state.active_tab == tab;
        tabs.push(
            button(text(tab.title()).size(12))
                .padding([8, 24])
                .on_press(Message::TabChanged(tab))
                .style(move |_, status| {
                    if is_active {
                        primary_button(theme, status)
                    } else {
                        inactive_choice_button(theme, status)
                    }
                }),
        )
    });

    container(tabs).center_x(Length::Fill).into()
}

fn view_actions(theme: &AppTheme) -> Element<'_, Message> {
    let action = |label: &'static str, message: Message| {
        button(text(label).size(13).width(Length::Fill).center())
            .width(Length::Fill)
            .padding([10, 16])
            .on_press(message)
    };

    row![
        action("GENERATE", Message::GenerateClicked)
            .style(move |_, status| primary_button(theme, status)),
        action("RESET", Message::ResetClicked)
            .style(move |_, status| neutral_button(theme, status)),
        action("COPY", Message::CopyClicked)
            .style(move |_, status| success_button(theme, status)),
    ]
    .spacing(12)
    .into()
}

fn view_output(state: &State) -> iced::widget::Column<'_, Message> {
    let theme = &state.theme;
    let output = active_output(state);
    let is_error = output.is_error();

    column![
        text("Output").size(14).color(theme.fg_primary),
        container(text(output.text()).size(13).font(Font::MONOSPACE))
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| output_container(theme, is_error)),
    ]
    .spacing(8)
}

fn view_footer(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    row![
        text(cablegen::version_string())
            .size(9)
            .font(Font::MONOSPACE)
            .color(theme.fg_muted),
        container(row![]).width(Length::Fill), // Spacer
        text("Theme").size(12).color(theme.fg_muted),
        pick_list(
            ThemeChoice::iter().collect::<Vec<_>>(),
            Some(state.current_theme),
            Message::ThemeChanged,
        )
        .text_size(12)
        .padding([4, 8])
        .style(move |_, status| themed_pick_list(theme, status))
        .menu_style(move |_| themed_pick_list_menu(theme)),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

/// Card wrapping a tab's input fields
fn input_card<'a>(theme: &'a AppTheme, fields: iced::widget::Column<'a, Message>) -> Element<'a, Message> {
    container(
        column![
            text("Input Parameters").size(14).color(theme.fg_primary),
            fields.spacing(12),
        ]
        .spacing(16),
    )
    .padding(16)
    .width(Length::Fill)
    .style(move |_| card_container(theme))
    .into()
}

fn labeled_input<'a>(
    theme: &'a AppTheme,
    label: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    column![
        text(label).size(12).color(theme.fg_muted),
        text_input("", value)
            .on_input(on_input)
            .padding(8)
            .size(13)
            .style(move |_, status| themed_text_input(theme, status)),
    ]
    .spacing(6)
    .into()
}

fn labeled_pick_list<'a, T>(
    theme: &'a AppTheme,
    label: &'a str,
    options: Vec<T>,
    selected: T,
    on_select: fn(T) -> Message,
) -> Element<'a, Message>
where
    T: ToString + PartialEq + Clone + 'a,
{
    column![
        text(label).size(12).color(theme.fg_muted),
        pick_list(options, Some(selected), on_select)
            .width(Length::Fill)
            .padding(8)
            .text_size(13)
            .style(move |_, status| themed_pick_list(theme, status))
            .menu_style(move |_| themed_pick_list_menu(theme)),
    ]
    .spacing(6)
    .into()
}
