//! Tunable settings for statistics and export.

use serde::{Deserialize, Serialize};

/// Two per-student averages closer than this count as tied for top spot.
pub const DEFAULT_TOP_AVERAGE_TOLERANCE: f64 = 0.001;

/// Default attendance export file name.
pub const ATTENDANCE_EXPORT_FILE: &str = "rekap-kehadiran.csv";
/// Default grade export file name.
pub const GRADES_EXPORT_FILE: &str = "rekap-nilai.csv";

/// Grade statistics settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeStatsConfig {
    pub top_average_tolerance: f64,
}

impl Default for GradeStatsConfig {
    fn default() -> Self {
        Self {
            top_average_tolerance: DEFAULT_TOP_AVERAGE_TOLERANCE,
        }
    }
}

impl GradeStatsConfig {
    /// Uses `tolerance` when it is finite and non-negative, else the default.
    pub fn with_tolerance(tolerance: f64) -> Self {
        if tolerance.is_finite() && tolerance >= 0.0 {
            Self {
                top_average_tolerance: tolerance,
            }
        } else {
            Self::default()
        }
    }
}

/// Export file naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub attendance_file_name: String,
    pub grades_file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            attendance_file_name: ATTENDANCE_EXPORT_FILE.to_string(),
            grades_file_name: GRADES_EXPORT_FILE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GradeStatsConfig, DEFAULT_TOP_AVERAGE_TOLERANCE};

    #[test]
    fn invalid_tolerance_falls_back_to_default() {
        assert_eq!(
            GradeStatsConfig::with_tolerance(-1.0).top_average_tolerance,
            DEFAULT_TOP_AVERAGE_TOLERANCE
        );
        assert_eq!(
            GradeStatsConfig::with_tolerance(f64::NAN).top_average_tolerance,
            DEFAULT_TOP_AVERAGE_TOLERANCE
        );
        assert_eq!(GradeStatsConfig::with_tolerance(0.5).top_average_tolerance, 0.5);
    }
}
