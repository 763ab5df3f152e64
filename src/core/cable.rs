//! Cable naming records and the name formatter
//!
//! A cable run is identified by a single upper-cased label that field teams
//! paste into documentation systems verbatim:
//!
//! - Cluster: `{FDT} - CABLE LINE {LINE} (FO {TYPE}) - AE - {LENGTH} M`
//! - Feeder: `{OLT} - {FDT} ({FEEDER TYPE} CABLE FO {TYPE}) - AE - {LENGTH} M`
//!
//! The category decides which codes and which cable types are valid, so
//! [`CableRecord`] is an enum over two category-specific structs and each
//! category carries its own cable type enum. A feeder-only type such as
//! `96C/8T` cannot be attached to a cluster record.
//!
//! # Example
//!
//! ```
//! use cablegen::core::cable::{CableRecord, ClusterCable, ClusterCableType};
//!
//! let record = CableRecord::Cluster(ClusterCable {
//!     fdt_code: "fdt-01".to_string(),
//!     line_code: "a1".to_string(),
//!     cable_type: ClusterCableType::C24T2,
//!     length: "150".to_string(),
//! });
//! assert_eq!(record.format_name(), "FDT-01 - CABLE LINE A1 (FO 24C/2T) - AE - 150 M");
//! ```

use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Cable record category
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum CableCategory {
    /// Distribution cabling from an FDT out to the access terminals
    #[default]
    #[strum(serialize = "cluster")]
    Cluster,
    /// Backbone cabling from the OLT to an FDT
    #[strum(serialize = "feeder")]
    Feeder,
}

impl CableCategory {
    /// Button label used by the category selector
    pub const fn display_name(self) -> &'static str {
        match self {
            CableCategory::Cluster => "Cluster Cable",
            CableCategory::Feeder => "Feeder Cable",
        }
    }

    /// Cable type tokens offered for this category, in selector order
    pub fn cable_type_tokens(self) -> Vec<&'static str> {
        match self {
            CableCategory::Cluster => ClusterCableType::iter().map(ClusterCableType::as_str).collect(),
            CableCategory::Feeder => FeederCableType::iter().map(FeederCableType::as_str).collect(),
        }
    }

    /// Parses a category token (`cluster` / `feeder`, any case).
    pub fn parse_token(value: &str) -> Result<Self> {
        value
            .trim()
            .parse()
            .map_err(|_| Error::UnknownCategory {
                value: value.to_string(),
            })
    }
}

/// Fiber/tube counts available for cluster cable
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ClusterCableType {
    #[default]
    #[strum(serialize = "24C/2T")]
    C24T2,
    #[strum(serialize = "36C/3T")]
    C36T3,
    #[strum(serialize = "48C/4T")]
    C48T4,
}

impl ClusterCableType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ClusterCableType::C24T2 => "24C/2T",
            ClusterCableType::C36T3 => "36C/3T",
            ClusterCableType::C48T4 => "48C/4T",
        }
    }

    pub fn parse_token(value: &str) -> Result<Self> {
        value
            .trim()
            .parse()
            .map_err(|_| Error::UnknownCableType {
                category: CableCategory::Cluster.to_string(),
                value: value.to_string(),
                expected: CableCategory::Cluster.cable_type_tokens().join(", "),
            })
    }
}

/// Fiber/tube counts available for feeder cable
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum FeederCableType {
    #[default]
    #[strum(serialize = "24C/2T")]
    C24T2,
    #[strum(serialize = "48C/4T")]
    C48T4,
    #[strum(serialize = "96C/8T")]
    C96T8,
    #[strum(serialize = "144C/12T")]
    C144T12,
    #[strum(serialize = "288C/24T")]
    C288T24,
}

impl FeederCableType {
    pub const fn as_str(self) -> &'static str {
        match self {
            FeederCableType::C24T2 => "24C/2T",
            FeederCableType::C48T4 => "48C/4T",
            FeederCableType::C96T8 => "96C/8T",
            FeederCableType::C144T12 => "144C/12T",
            FeederCableType::C288T24 => "288C/24T",
        }
    }

    pub fn parse_token(value: &str) -> Result<Self> {
        value
            .trim()
            .parse()
            .map_err(|_| Error::UnknownCableType {
                category: CableCategory::Feeder.to_string(),
                value: value.to_string(),
                expected: CableCategory::Feeder.cable_type_tokens().join(", "),
            })
    }
}

/// Position of a feeder run in the backbone hierarchy
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum FeederType {
    #[default]
    #[strum(serialize = "SUBFEEDER")]
    Subfeeder,
    #[strum(serialize = "HUBFEEDER")]
    Hubfeeder,
    #[strum(serialize = "MAINFEEDER")]
    Mainfeeder,
}

impl FeederType {
    pub const fn as_str(self) -> &'static str {
        match self {
            FeederType::Subfeeder => "SUBFEEDER",
            FeederType::Hubfeeder => "HUBFEEDER",
            FeederType::Mainfeeder => "MAINFEEDER",
        }
    }

    pub fn parse_token(value: &str) -> Result<Self> {
        value.trim().parse().map_err(|_| Error::UnknownFeederType {
            value: value.to_string(),
            expected: FeederType::iter()
                .map(FeederType::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

/// Inputs for a cluster cable name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterCable {
    pub fdt_code: String,
    pub line_code: String,
    pub cable_type: ClusterCableType,
    /// Length by OTDR, echoed as typed
    pub length: String,
}

/// Inputs for a feeder cable name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeederCable {
    pub olt_code: String,
    pub fdt_code: String,
    pub feeder_type: FeederType,
    pub cable_type: FeederCableType,
    /// Length by OTDR, echoed as typed
    pub length: String,
}

/// One cable run to be named
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CableRecord {
    Cluster(ClusterCable),
    Feeder(FeederCable),
}

impl CableRecord {
    pub fn category(&self) -> CableCategory {
        match self {
            CableRecord::Cluster(_) => CableCategory::Cluster,
            CableRecord::Feeder(_) => CableCategory::Feeder,
        }
    }

    /// Builds the upper-cased cable name.
    ///
    /// Codes and length are trimmed but otherwise taken as-is. Blank fields are
    /// not an error; they simply leave gaps in the label.
    pub fn format_name(&self) -> String {
        let name = match self {
            CableRecord::Cluster(c) => format!(
                "{} - CABLE LINE {} (FO {}) - AE - {} M",
                c.fdt_code.trim(),
                c.line_code.trim(),
                c.cable_type,
                c.length.trim(),
            ),
            CableRecord::Feeder(f) => format!(
                "{} - {} ({} CABLE FO {}) - AE - {} M",
                f.olt_code.trim(),
                f.fdt_code.trim(),
                f.feeder_type,
                f.cable_type,
                f.length.trim(),
            ),
        }
        .to_uppercase();

        tracing::debug!(category = %self.category(), %name, "Generated cable name");
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(fdt: &str, line: &str, cable_type: ClusterCableType, length: &str) -> CableRecord {
        CableRecord::Cluster(ClusterCable {
            fdt_code: fdt.to_string(),
            line_code: line.to_string(),
            cable_type,
            length: length.to_string(),
        })
    }

    #[test]
    fn test_cluster_name() {
        let record = cluster("FDT-01", "A1", ClusterCableType::C24T2, "150");
        assert_eq!(
            record.format_name(),
            "FDT-01 - CABLE LINE A1 (FO 24C/2T) - AE - 150 M"
        );
    }

    #[test]
    fn test_feeder_name() {
        let record = CableRecord::Feeder(FeederCable {
            olt_code: "OLT-5".to_string(),
            fdt_code: "FDT-9".to_string(),
            feeder_type: FeederType::Mainfeeder,
            cable_type: FeederCableType::C96T8,
            length: "300".to_string(),
        });
        assert_eq!(
            record.format_name(),
            "OLT-5 - FDT-9 (MAINFEEDER CABLE FO 96C/8T) - AE - 300 M"
        );
    }

    #[test]
    fn test_lowercase_input_is_uppercased() {
        let record = cluster("fdt-jkt-02", "b3", ClusterCableType::C48T4, "1.2k");
        assert_eq!(
            record.format_name(),
            "FDT-JKT-02 - CABLE LINE B3 (FO 48C/4T) - AE - 1.2K M"
        );
    }

    #[test]
    fn test_fields_are_trimmed() {
        let record = cluster("  FDT-01 ", "\tA1", ClusterCableType::C36T3, " 75 ");
        assert_eq!(
            record.format_name(),
            "FDT-01 - CABLE LINE A1 (FO 36C/3T) - AE - 75 M"
        );
    }

    #[test]
    fn test_blank_fields_still_format() {
        let record = cluster("", "", ClusterCableType::C24T2, "");
        assert_eq!(record.format_name(), " - CABLE LINE  (FO 24C/2T) - AE -  M");
    }

    #[test]
    fn test_record_category() {
        assert_eq!(
            cluster("a", "b", ClusterCableType::C24T2, "1").category(),
            CableCategory::Cluster
        );
        assert_eq!(
            CableRecord::Feeder(FeederCable::default()).category(),
            CableCategory::Feeder
        );
    }

    #[test]
    fn test_cable_type_tokens_per_category() {
        assert_eq!(
            CableCategory::Cluster.cable_type_tokens(),
            vec!["24C/2T", "36C/3T", "48C/4T"]
        );
        assert_eq!(
            CableCategory::Feeder.cable_type_tokens(),
            vec!["24C/2T", "48C/4T", "96C/8T", "144C/12T", "288C/24T"]
        );
    }

    #[test]
    fn test_display_matches_as_str() {
        for t in ClusterCableType::iter() {
            assert_eq!(t.to_string(), t.as_str());
        }
        for t in FeederCableType::iter() {
            assert_eq!(t.to_string(), t.as_str());
        }
        for t in FeederType::iter() {
            assert_eq!(t.to_string(), t.as_str());
        }
    }

    #[test]
    fn test_parse_tokens_case_insensitive() {
        assert_eq!(
            FeederCableType::parse_token("144c/12t"),
            Ok(FeederCableType::C144T12)
        );
        assert_eq!(
            ClusterCableType::parse_token(" 36C/3T "),
            Ok(ClusterCableType::C36T3)
        );
        assert_eq!(FeederType::parse_token("hubfeeder"), Ok(FeederType::Hubfeeder));
        assert_eq!(CableCategory::parse_token("FEEDER"), Ok(CableCategory::Feeder));
    }

    #[test]
    fn test_cluster_rejects_feeder_only_type() {
        let err = ClusterCableType::parse_token("96C/8T").unwrap_err();
        assert!(matches!(err, Error::UnknownCableType { .. }));
        assert!(err.to_string().contains("cluster"));
    }

    #[test]
    fn test_unknown_feeder_type() {
        let err = FeederType::parse_token("MEGAFEEDER").unwrap_err();
        assert!(err.to_string().contains("SUBFEEDER, HUBFEEDER, MAINFEEDER"));
    }

    #[test]
    fn test_defaults_match_first_choice() {
        assert_eq!(CableCategory::default(), CableCategory::Cluster);
        assert_eq!(ClusterCableType::default(), ClusterCableType::C24T2);
        assert_eq!(FeederCableType::default(), FeederCableType::C24T2);
        assert_eq!(FeederType::default(), FeederType::Subfeeder);
    }
}
