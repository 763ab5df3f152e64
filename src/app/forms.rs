//! Generator form state
//!
//! Each tab owns its raw field text and the last result shown in its output
//! panel. Fields are only parsed when GENERATE is pressed.

use cablegen::core::cable::{
    CableCategory, CableRecord, ClusterCable, ClusterCableType, FeederCable, FeederCableType,
    FeederType,
};
use cablegen::core::{generate_cluster_report, generate_feeder_report};
use cablegen::utils::OUTPUT_PLACEHOLDER;

/// Content of a result panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Output {
    #[default]
    Empty,
    Ready(String),
    Error(String),
}

impl Output {
    /// Classifies rendered generator text; `Error:` prefixed text is an error.
    pub fn from_rendered(text: String) -> Self {
        if text.starts_with("Error:") {
            Output::Error(text)
        } else {
            Output::Ready(text)
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Output::Empty => OUTPUT_PLACEHOLDER,
            Output::Ready(text) | Output::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Output::Error(_))
    }
}

/// Cable generator tab
#[derive(Debug, Clone, Default)]
pub struct CableForm {
    pub category: CableCategory,
    pub olt_code: String,
    pub fdt_code: String,
    pub line_code: String,
    pub feeder_type: FeederType,
    pub cluster_cable_type: ClusterCableType,
    pub feeder_cable_type: FeederCableType,
    pub length: String,
    pub output: Output,
}

impl CableForm {
    pub fn new(category: CableCategory) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    /// Switches category and rebuilds the field set.
    ///
    /// Codes and length are cleared and the selectors return to their first
    /// entry. The last result stays on screen.
    pub fn select_category(&mut self, category: CableCategory) {
        let output = std::mem::take(&mut self.output);
        *self = Self {
            output,
            ..Self::new(category)
        };
    }

    pub fn to_record(&self) -> CableRecord {
        match self.category {
            CableCategory::Cluster => CableRecord::Cluster(ClusterCable {
                fdt_code: self.fdt_code.clone(),
                line_code: self.line_code.clone(),
                cable_type: self.cluster_cable_type,
                length: self.length.clone(),
            }),
            CableCategory::Feeder => CableRecord::Feeder(FeederCable {
                olt_code: self.olt_code.clone(),
                fdt_code: self.fdt_code.clone(),
                feeder_type: self.feeder_type,
                cable_type: self.feeder_cable_type,
                length: self.length.clone(),
            }),
        }
    }

    pub fn generate(&mut self) {
        self.output = Output::Ready(self.to_record().format_name());
    }

    /// Clears the text fields and the result; category and selectors are kept.
    pub fn reset(&mut self) {
        self.olt_code.clear();
        self.fdt_code.clear();
        self.line_code.clear();
        self.length.clear();
        self.output = Output::Empty;
    }
}

/// Cluster description tab
#[derive(Debug, Clone, Default)]
pub struct ClusterLengthForm {
    pub route: String,
    pub slack_fdt: String,
    pub slack_fat: String,
    pub otdr: String,
    pub output: Output,
}

impl ClusterLengthForm {
    pub fn generate(&mut self) {
        self.output = Output::from_rendered(generate_cluster_report(
            &self.route,
            &self.slack_fdt,
            &self.slack_fat,
            &self.otdr,
        ));
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Feeder description tab
#[derive(Debug, Clone, Default)]
pub struct FeederLengthForm {
    pub route: String,
    pub slack: String,
    pub otdr: String,
    pub output: Output,
}

impl FeederLengthForm {
    pub fn generate(&mut self) {
        self.output =
            Output::from_rendered(generate_feeder_report(&self.route, &self.slack, &self.otdr));
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_output_shows_placeholder() {
        let output = Output::default();
        assert_eq!(output.text(), OUTPUT_PLACEHOLDER);
        assert!(!output.is_error());
    }

    #[test]
    fn test_cluster_cable_name() {
        let mut form = CableForm::new(CableCategory::Cluster);
        form.fdt_code = "fdt-01".to_string();
        form.line_code = "a1".to_string();
        form.cluster_cable_type = ClusterCableType::C36T3;
        form.length = "150".to_string();
        form.generate();
        assert_eq!(
            form.output,
            Output::Ready("FDT-01 - CABLE LINE A1 (FO 36C/3T) - AE - 150 M".to_string())
        );
    }

    #[test]
    fn test_select_category_clears_fields_keeps_output() {
        let mut form = CableForm::new(CableCategory::Cluster);
        form.fdt_code = "FDT-01".to_string();
        form.cluster_cable_type = ClusterCableType::C48T4;
        form.generate();
        let shown = form.output.clone();

        form.select_category(CableCategory::Feeder);
        assert_eq!(form.category, CableCategory::Feeder);
        assert!(form.fdt_code.is_empty());
        assert_eq!(form.cluster_cable_type, ClusterCableType::C24T2);
        assert_eq!(form.feeder_type, FeederType::Subfeeder);
        assert_eq!(form.output, shown);
    }

    #[test]
    fn test_cable_reset_keeps_selectors() {
        let mut form = CableForm::new(CableCategory::Feeder);
        form.olt_code = "OLT-1".to_string();
        form.feeder_type = FeederType::Hubfeeder;
        form.generate();
        form.reset();
        assert!(form.olt_code.is_empty());
        assert_eq!(form.feeder_type, FeederType::Hubfeeder);
        assert_eq!(form.output, Output::Empty);
    }

    #[test]
    fn test_cluster_length_form() {
        let mut form = ClusterLengthForm {
            route: "1000".to_string(),
            slack_fdt: "2".to_string(),
            slack_fat: "3".to_string(),
            otdr: "1160".to_string(),
            ..ClusterLengthForm::default()
        };
        form.generate();
        assert!(!form.output.is_error());
        assert!(form.output.text().contains("= 1155 M"));
    }

    #[test]
    fn test_feeder_length_form_error() {
        let mut form = FeederLengthForm {
            route: "five hundred".to_string(),
            ..FeederLengthForm::default()
        };
        form.generate();
        assert!(form.output.is_error());
        assert!(form.output.text().starts_with("Error:"));

        form.reset();
        assert!(form.route.is_empty());
        assert_eq!(form.output, Output::Empty);
    }
}
