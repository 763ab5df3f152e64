//! Slack and tolerance length calculation for cluster and feeder cable
//!
//! Every junction reserves slack in fixed [`SLACK_UNIT_METERS`] units, and the
//! route plus slack is then padded by a flat installation tolerance:
//!
//! ```text
//! route_plus_slack = route + slack_units * 20
//! total_length     = ceil(route_plus_slack * 1.05)
//! ```
//!
//! Cluster records split the slack between the FDT and the FAT; feeder records
//! carry a single slack count. The OTDR length is echoed in the report and
//! never takes part in the arithmetic.

use crate::core::error::{Error, Result};
use crate::validators::{measurement_text, parse_number_field};
use std::fmt;

/// Meters reserved per slack unit
pub const SLACK_UNIT_METERS: f64 = 20.0;

/// Multiplier applied to route plus slack
pub const TOLERANCE_FACTOR: f64 = 1.05;

/// Tolerance as shown in the report
pub const TOLERANCE_PERCENT: u32 = 5;

/// How the slack units were reserved
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlackBreakdown {
    Cluster { fdt: f64, fat: f64 },
    Feeder { units: f64 },
}

impl SlackBreakdown {
    pub fn total_units(&self) -> f64 {
        match *self {
            SlackBreakdown::Cluster { fdt, fat } => fdt + fat,
            SlackBreakdown::Feeder { units } => units,
        }
    }
}

/// Result of a length calculation, rendered through [`fmt::Display`]
#[derive(Debug, Clone, PartialEq)]
pub struct LengthReport {
    pub route: f64,
    pub slack: SlackBreakdown,
    pub slack_units: f64,
    pub slack_meters: f64,
    pub route_plus_slack: f64,
    /// Whole meters after tolerance, rounded up
    pub total_length: i64,
    pub otdr: String,
}

impl LengthReport {
    fn compute(route: f64, slack: SlackBreakdown, otdr: &str) -> Result<Self> {
        let slack_units = slack.total_units();
        let slack_meters = slack_units * SLACK_UNIT_METERS;
        let route_plus_slack = route + slack_meters;
        let total_length = round_up_meters(route_plus_slack * TOLERANCE_FACTOR)?;

        Ok(Self {
            route,
            slack,
            slack_units,
            slack_meters,
            route_plus_slack,
            total_length,
            otdr: measurement_text(otdr),
        })
    }
}

impl fmt::Display for LengthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let route = format_decimal(self.route);
        let route_plus_slack = format_decimal(self.route_plus_slack);

        writeln!(f, "TOTAL ROUTE : {route} M")?;
        match self.slack {
            SlackBreakdown::Cluster { fdt, fat } => writeln!(
                f,
                "TOTAL SLACK : {} UNIT ({} SLACK FDT & {} SLACK FAT) @{} M",
                format_decimal(self.slack_units),
                format_decimal(fdt),
                format_decimal(fat),
                SLACK_UNIT_METERS,
            )?,
            SlackBreakdown::Feeder { units } => writeln!(
                f,
                "TOTAL SLACK : {} UNIT @{} M",
                format_decimal(units),
                SLACK_UNIT_METERS,
            )?,
        }
        writeln!(f, "TOLERANSI : {TOLERANCE_PERCENT}%")?;
        writeln!(
            f,
            "TOTAL LENGTH CABLE : {route} + {} = {route_plus_slack} M + ({route_plus_slack} M X {TOLERANCE_PERCENT}%) = {} M",
            format_decimal(self.slack_meters),
            self.total_length,
        )?;
        write!(f, "BY OTDR : {} M", self.otdr.to_uppercase())
    }
}

/// Cluster (CI) length inputs: route plus FDT and FAT slack
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterLengthInput {
    pub route: f64,
    pub slack_fdt: f64,
    pub slack_fat: f64,
    pub otdr: String,
}

impl ClusterLengthInput {
    /// Parses raw form fields; blank numeric fields count as zero.
    pub fn from_fields(route: &str, slack_fdt: &str, slack_fat: &str, otdr: &str) -> Result<Self> {
        Ok(Self {
            route: parse_number_field("route", route)?,
            slack_fdt: parse_number_field("slack FDT", slack_fdt)?,
            slack_fat: parse_number_field("slack FAT", slack_fat)?,
            otdr: otdr.to_string(),
        })
    }

    pub fn compute(&self) -> Result<LengthReport> {
        let report = LengthReport::compute(
            self.route,
            SlackBreakdown::Cluster {
                fdt: self.slack_fdt,
                fat: self.slack_fat,
            },
            &self.otdr,
        )?;
        tracing::debug!(
            route = self.route,
            slack_units = report.slack_units,
            total_length = report.total_length,
            "Computed cluster cable length"
        );
        Ok(report)
    }
}

/// Feeder length inputs: route plus a single slack count
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeederLengthInput {
    pub route: f64,
    pub slack: f64,
    pub otdr: String,
}

impl FeederLengthInput {
    /// Parses raw form fields; blank numeric fields count as zero.
    pub fn from_fields(route: &str, slack: &str, otdr: &str) -> Result<Self> {
        Ok(Self {
            route: parse_number_field("route", route)?,
            slack: parse_number_field("slack", slack)?,
            otdr: otdr.to_string(),
        })
    }

    pub fn compute(&self) -> Result<LengthReport> {
        let report = LengthReport::compute(
            self.route,
            SlackBreakdown::Feeder { units: self.slack },
            &self.otdr,
        )?;
        tracing::debug!(
            route = self.route,
            slack_units = report.slack_units,
            total_length = report.total_length,
            "Computed feeder cable length"
        );
        Ok(report)
    }
}

/// Rounds a scaled length up to the next whole meter.
///
/// Lengths outside the `i64` range are rejected along with NaN and infinity.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn round_up_meters(value: f64) -> Result<i64> {
    let ceiled = value.ceil();
    if !ceiled.is_finite() || ceiled.abs() >= i64::MAX as f64 {
        return Err(Error::NonFinite {
            field: "total length".to_string(),
        });
    }
    Ok(ceiled as i64)
}

/// Decimal rendering used by the report: whole values keep a trailing `.0`
/// (`1000.0`), fractional values use the shortest exact form (`2.5`).
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_scenario() {
        let input = ClusterLengthInput {
            route: 1000.0,
            slack_fdt: 2.0,
            slack_fat: 3.0,
            otdr: "1160".to_string(),
        };
        let report = input.compute().unwrap();
        assert_eq!(report.slack_units, 5.0);
        assert_eq!(report.slack_meters, 100.0);
        assert_eq!(report.route_plus_slack, 1100.0);
        assert_eq!(report.total_length, 1155);
    }

    #[test]
    fn test_cluster_report_text() {
        let report = ClusterLengthInput::from_fields("1000", "2", "3", "1160")
            .unwrap()
            .compute()
            .unwrap();
        assert_eq!(
            report.to_string(),
            "TOTAL ROUTE : 1000.0 M\n\
             TOTAL SLACK : 5.0 UNIT (2.0 SLACK FDT & 3.0 SLACK FAT) @20 M\n\
             TOLERANSI : 5%\n\
             TOTAL LENGTH CABLE : 1000.0 + 100.0 = 1100.0 M + (1100.0 M X 5%) = 1155 M\n\
             BY OTDR : 1160 M"
        );
    }

    #[test]
    fn test_feeder_scenario() {
        let report = FeederLengthInput {
            route: 500.0,
            slack: 1.0,
            otdr: String::new(),
        }
        .compute()
        .unwrap();
        assert_eq!(report.route_plus_slack, 520.0);
        assert_eq!(report.total_length, 546);
    }

    #[test]
    fn test_feeder_report_text() {
        let report = FeederLengthInput::from_fields("500", "1", "530 m")
            .unwrap()
            .compute()
            .unwrap();
        assert_eq!(
            report.to_string(),
            "TOTAL ROUTE : 500.0 M\n\
             TOTAL SLACK : 1.0 UNIT @20 M\n\
             TOLERANSI : 5%\n\
             TOTAL LENGTH CABLE : 500.0 + 20.0 = 520.0 M + (520.0 M X 5%) = 546 M\n\
             BY OTDR : 530 M M"
        );
    }

    #[test]
    fn test_all_zero_is_zero() {
        let report = ClusterLengthInput::default().compute().unwrap();
        assert_eq!(report.total_length, 0);

        let report = FeederLengthInput::default().compute().unwrap();
        assert_eq!(report.total_length, 0);
    }

    #[test]
    fn test_blank_fields_default_to_zero() {
        let input = ClusterLengthInput::from_fields("", "", "", "").unwrap();
        assert_eq!(input, ClusterLengthInput::default());

        let report = input.compute().unwrap();
        assert!(report.to_string().ends_with("BY OTDR : 0 M"));
    }

    #[test]
    fn test_fractional_rounds_up() {
        let report = FeederLengthInput {
            route: 101.0,
            slack: 0.0,
            otdr: String::new(),
        }
        .compute()
        .unwrap();
        // 101 * 1.05 = 106.05
        assert_eq!(report.total_length, 107);
    }

    #[test]
    fn test_fractional_inputs_render_shortest() {
        let report = ClusterLengthInput::from_fields("12.5", "0.5", "1", "")
            .unwrap()
            .compute()
            .unwrap();
        let text = report.to_string();
        assert!(text.starts_with("TOTAL ROUTE : 12.5 M\n"));
        assert!(text.contains("TOTAL SLACK : 1.5 UNIT (0.5 SLACK FDT & 1.0 SLACK FAT)"));
    }

    #[test]
    fn test_non_numeric_route_is_error() {
        let err = ClusterLengthInput::from_fields("abc", "1", "1", "").unwrap_err();
        assert!(matches!(err, Error::InvalidNumber { ref field, .. } if field == "route"));

        let err = FeederLengthInput::from_fields("500", "two", "").unwrap_err();
        assert!(matches!(err, Error::InvalidNumber { ref field, .. } if field == "slack"));
    }

    #[test]
    fn test_infinite_route_is_error() {
        let input = FeederLengthInput::from_fields("inf", "0", "").unwrap();
        assert!(matches!(input.compute(), Err(Error::NonFinite { .. })));

        let input = FeederLengthInput::from_fields("nan", "0", "").unwrap();
        assert!(matches!(input.compute(), Err(Error::NonFinite { .. })));
    }

    #[test]
    fn test_otdr_is_uppercased() {
        let report = FeederLengthInput::from_fields("0", "0", "approx 10")
            .unwrap()
            .compute()
            .unwrap();
        assert!(report.to_string().ends_with("BY OTDR : APPROX 10 M"));
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(1000.0), "1000.0");
        assert_eq!(format_decimal(2.5), "2.5");
        assert_eq!(format_decimal(-3.0), "-3.0");
        assert_eq!(format_decimal(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_negative_small_total_is_zero() {
        let report = FeederLengthInput {
            route: -0.5,
            slack: 0.0,
            otdr: String::new(),
        }
        .compute()
        .unwrap();
        assert_eq!(report.total_length, 0);
    }
}
