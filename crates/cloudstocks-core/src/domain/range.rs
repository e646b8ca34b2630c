use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Duration;

use crate::ValidationError;

/// Requested span of a historical chart.
///
/// Each code maps to a fixed `(points, spacing)` shape via [`RangeCode::shape`];
/// the shape table approximates real trading calendars rather than computing
/// them (22 trading days per month, 52 weeks per year, and so on).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeCode {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "5d")]
    FiveDays,
    #[default]
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "10y")]
    TenYears,
    #[serde(rename = "max")]
    Max,
}

/// Fixed sampling shape for one range code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeShape {
    /// Number of bars in the series. Always non-zero.
    pub points: usize,
    /// Gap between consecutive bars.
    pub spacing: Duration,
}

impl RangeCode {
    pub const ALL: [Self; 7] = [
        Self::OneDay,
        Self::FiveDays,
        Self::OneMonth,
        Self::OneYear,
        Self::FiveYears,
        Self::TenYears,
        Self::Max,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::FiveDays => "5d",
            Self::OneMonth => "1m",
            Self::OneYear => "1y",
            Self::FiveYears => "5y",
            Self::TenYears => "10y",
            Self::Max => "max",
        }
    }

    /// Range-to-shape lookup table.
    ///
    /// 1D covers a 6.5-hour session in 10-minute bars; 1M is daily bars over
    /// 22 trading days; 1Y is weekly; the long ranges are monthly over
    /// 5/10/15 years.
    pub const fn shape(self) -> RangeShape {
        match self {
            Self::OneDay => RangeShape {
                points: 39,
                spacing: Duration::minutes(10),
            },
            Self::FiveDays => RangeShape {
                points: 32,
                spacing: Duration::minutes(48),
            },
            Self::OneMonth => RangeShape {
                points: 22,
                spacing: Duration::days(1),
            },
            Self::OneYear => RangeShape {
                points: 52,
                spacing: Duration::weeks(1),
            },
            Self::FiveYears => RangeShape {
                points: 60,
                spacing: Duration::days(30),
            },
            Self::TenYears => RangeShape {
                points: 120,
                spacing: Duration::days(30),
            },
            Self::Max => RangeShape {
                points: 180,
                spacing: Duration::days(30),
            },
        }
    }

    /// Whether the synthetic walk starts from a shifted anchor instead of
    /// the current price.
    pub const fn is_long_range(self) -> bool {
        matches!(self, Self::FiveYears | Self::TenYears | Self::Max)
    }

    /// Parse leniently: unrecognized or missing codes fall back to the
    /// default one-month shape instead of erroring.
    pub fn parse_or_default(input: Option<&str>) -> Self {
        input
            .and_then(|value| Self::from_str(value).ok())
            .unwrap_or_default()
    }
}

impl Display for RangeCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeCode {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1d" => Ok(Self::OneDay),
            "5d" => Ok(Self::FiveDays),
            "1m" => Ok(Self::OneMonth),
            "1y" => Ok(Self::OneYear),
            "5y" => Ok(Self::FiveYears),
            "10y" => Ok(Self::TenYears),
            "max" => Ok(Self::Max),
            other => Err(ValidationError::InvalidRange {
                value: other.to_owned(),
            }),
        }
    }
}
