use cablegen::theme::AppTheme;
use iced::widget::{button, container, pick_list, text_input};
use iced::{Border, Color, Shadow, Vector};

pub fn main_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_base.into()),
        text_color: Some(theme.fg_primary),
        ..Default::default()
    }
}

/// Title banner across the top of the window
pub fn header_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_header.into()),
        text_color: Some(theme.fg_primary),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

pub fn card_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_surface.into()),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Result panel; errors swap the text color
pub fn output_container(theme: &AppTheme, is_error: bool) -> container::Style {
    container::Style {
        background: Some(theme.output_bg.into()),
        text_color: Some(if is_error {
            theme.output_error
        } else {
            theme.output_text
        }),
        border: Border {
            color: theme.output_border,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Solid action button shared by the GENERATE, RESET and COPY variants
fn filled_button(
    theme: &AppTheme,
    fill: Color,
    hover: Color,
    status: button::Status,
) -> button::Style {
    let base = button::Style {
        background: Some(fill.into()),
        text_color: theme.fg_on_accent,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(hover.into()),
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 2.5),
                blur_radius: 4.0,
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(
                Color {
                    r: (fill.r * 0.95).min(1.0),
                    g: (fill.g * 0.95).min(1.0),
                    b: (fill.b * 0.95).min(1.0),
                    ..fill
                }
                .into(),
            ),
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 0.5),
                blur_radius: 1.5,
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Color { a: 0.5, ..fill }.into()),
            text_color: Color {
                a: 0.5,
                ..theme.fg_on_accent
            },
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Active => base,
    }
}

pub fn primary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    filled_button(theme, theme.accent, theme.accent_hover, status)
}

pub fn success_button(theme: &AppTheme, status: button::Status) -> button::Style {
    filled_button(theme, theme.success, theme.success_hover, status)
}

pub fn neutral_button(theme: &AppTheme, status: button::Status) -> button::Style {
    filled_button(theme, theme.neutral, theme.neutral_hover, status)
}

/// Unselected tab or category choice
pub fn inactive_choice_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(theme.bg_elevated.into()),
        text_color: theme.fg_secondary,
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(theme.bg_hover.into()),
            text_color: theme.fg_primary,
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: theme.fg_muted,
            ..base
        },
        button::Status::Active => base,
    }
}

pub fn themed_text_input(theme: &AppTheme, status: text_input::Status) -> text_input::Style {
    let base = text_input::Style {
        background: theme.bg_elevated.into(),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        icon: theme.fg_muted,
        placeholder: theme.fg_muted,
        value: theme.fg_primary,
        selection: theme.accent,
    };

    match status {
        text_input::Status::Active => base,
        text_input::Status::Hovered => text_input::Style {
            background: theme.bg_hover.into(),
            ..base
        },
        text_input::Status::Focused { .. } => text_input::Style {
            border: Border {
                color: theme.accent,
                width: 2.0,
                radius: 4.0.into(),
            },
            icon: theme.accent,
            ..base
        },
        text_input::Status::Disabled => text_input::Style {
            background: Color {
                a: 0.5,
                ..theme.bg_elevated
            }
            .into(),
            value: theme.fg_muted,
            ..base
        },
    }
}

pub fn themed_pick_list(theme: &AppTheme, status: pick_list::Status) -> pick_list::Style {
    let base = pick_list::Style {
        background: theme.bg_elevated.into(),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        handle_color: theme.fg_secondary,
        placeholder_color: theme.fg_muted,
        text_color: theme.fg_primary,
    };

    match status {
        pick_list::Status::Active => base,
        pick_list::Status::Hovered => pick_list::Style {
            background: theme.bg_hover.into(),
            handle_color: theme.fg_primary,
            ..base
        },
        pick_list::Status::Opened { .. } => pick_list::Style {
            border: Border {
                color: theme.accent,
                width: 2.0,
                radius: 4.0.into(),
            },
            handle_color: theme.accent,
            ..base
        },
    }
}

/// Pick list menu styling (the dropdown menu itself)
pub fn themed_pick_list_menu(theme: &AppTheme) -> iced::overlay::menu::Style {
    iced::overlay::menu::Style {
        background: theme.bg_surface.into(),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 8.0,
        },
        text_color: theme.fg_primary,
        selected_background: theme.bg_hover.into(),
        selected_text_color: theme.fg_primary,
    }
}
