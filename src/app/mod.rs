pub mod forms;
pub mod handlers;
pub mod ui_components;
pub mod view;

use cablegen::config::AppConfig;
use cablegen::core::Generator;
use cablegen::core::cable::{CableCategory, ClusterCableType, FeederCableType, FeederType};
use cablegen::theme::{AppTheme, ThemeChoice};
use forms::{CableForm, ClusterLengthForm, FeederLengthForm};
use iced::{Element, Task};

pub struct State {
    pub active_tab: Generator,
    pub cable_form: CableForm,
    pub cluster_form: ClusterLengthForm,
    pub feeder_form: FeederLengthForm,
    pub current_theme: ThemeChoice,
    pub theme: AppTheme,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabChanged(Generator),
    ThemeChanged(ThemeChoice),
    // Cable generator
    CategorySelected(CableCategory),
    CableOltChanged(String),
    CableFdtChanged(String),
    CableLineChanged(String),
    FeederTypeSelected(FeederType),
    ClusterCableTypeSelected(ClusterCableType),
    FeederCableTypeSelected(FeederCableType),
    CableLengthChanged(String),
    // Cluster description
    ClusterRouteChanged(String),
    ClusterSlackFdtChanged(String),
    ClusterSlackFatChanged(String),
    ClusterOtdrChanged(String),
    // Feeder description
    FeederRouteChanged(String),
    FeederSlackChanged(String),
    FeederOtdrChanged(String),
    // Actions on the active tab
    GenerateClicked,
    ResetClicked,
    CopyClicked,
    ConfigSaved(Result<(), String>),
}

impl State {
    pub fn new() -> (Self, Task<Message>) {
        Self::from_config(cablegen::config::load_config())
    }

    pub fn from_config(config: AppConfig) -> (Self, Task<Message>) {
        tracing::info!(
            "Starting on {} with {} theme",
            config.initial_tab.title(),
            config.theme_choice
        );
        (
            Self {
                active_tab: config.initial_tab,
                cable_form: CableForm::new(config.initial_category),
                cluster_form: ClusterLengthForm::default(),
                feeder_form: FeederLengthForm::default(),
                current_theme: config.theme_choice,
                theme: config.theme_choice.to_theme(),
            },
            Task::none(),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn iced_theme(&self) -> iced::Theme {
        if self.theme.is_light() {
            iced::Theme::Light
        } else {
            iced::Theme::Dark
        }
    }

    /// Preferences as they should be restored on next launch
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            theme_choice: self.current_theme,
            initial_tab: self.active_tab,
            initial_category: self.cable_form.category,
        }
    }

    fn save_config(&self) -> Task<Message> {
        Task::perform(
            cablegen::config::save_config(self.to_config()),
            Message::ConfigSaved,
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabChanged(tab) => return handlers::handle_tab_changed(self, tab),
            Message::ThemeChanged(choice) => return handlers::handle_theme_changed(self, choice),
            Message::CategorySelected(category) => {
                return handlers::handle_category_selected(self, category);
            }
            Message::CableOltChanged(s) => self.cable_form.olt_code = s,
            Message::CableFdtChanged(s) => self.cable_form.fdt_code = s,
            Message::CableLineChanged(s) => self.cable_form.line_code = s,
            Message::FeederTypeSelected(t) => self.cable_form.feeder_type = t,
            Message::ClusterCableTypeSelected(t) => self.cable_form.cluster_cable_type = t,
            Message::FeederCableTypeSelected(t) => self.cable_form.feeder_cable_type = t,
            Message::CableLengthChanged(s) => self.cable_form.length = s,
            Message::ClusterRouteChanged(s) => self.cluster_form.route = s,
            Message::ClusterSlackFdtChanged(s) => self.cluster_form.slack_fdt = s,
            Message::ClusterSlackFatChanged(s) => self.cluster_form.slack_fat = s,
            Message::ClusterOtdrChanged(s) => self.cluster_form.otdr = s,
            Message::FeederRouteChanged(s) => self.feeder_form.route = s,
            Message::FeederSlackChanged(s) => self.feeder_form.slack = s,
            Message::FeederOtdrChanged(s) => self.feeder_form.otdr = s,
            Message::GenerateClicked => handlers::handle_generate(self),
            Message::ResetClicked => handlers::handle_reset(self),
            Message::CopyClicked => return handlers::handle_copy(self),
            Message::ConfigSaved(result) => {
                if let Err(e) = result {
                    tracing::error!("{e}");
                }
            }
        }
        Task::none()
    }
}
