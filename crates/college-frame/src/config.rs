//! Configuration types for reports, plots and derivations

use crate::schema::CollegeColumn::{self, *};
use std::fmt;
use std::str::FromStr;

/// Upper bound applied by percentage guards
pub const PERCENT_MAX: f64 = 100.0;

/// Number of rows a report prints unless configured otherwise
pub const DEFAULT_REPORT_ROWS: usize = 20;

/// How a derived ratio treats a zero denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivisionPolicy {
    /// Ratio is null for that row
    #[default]
    Null,

    /// Ratio is NaN for that row
    NaN,

    /// Derivation fails with [`crate::Error::ArithmeticAnomaly`]
    Fail,
}

impl DivisionPolicy {
    /// Get the name of this policy
    pub fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::NaN => "nan",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for DivisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DivisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "null" => Ok(Self::Null),
            "nan" => Ok(Self::NaN),
            "fail" => Ok(Self::Fail),
            other => Err(format!(
                "unknown division policy '{other}' (expected null, nan or fail)"
            )),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Sort key for a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: CollegeColumn,
    pub order: SortOrder,
}

impl SortKey {
    pub const fn ascending(column: CollegeColumn) -> Self {
        Self {
            column,
            order: SortOrder::Ascending,
        }
    }

    pub const fn descending(column: CollegeColumn) -> Self {
        Self {
            column,
            order: SortOrder::Descending,
        }
    }
}

/// Row-exclusion predicate: keeps rows where every guarded column is
/// non-null and `<= max`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuardFilter {
    pub columns: &'static [CollegeColumn],
    pub max: f64,
}

impl GuardFilter {
    /// Guard that keeps every row
    pub const NONE: GuardFilter = GuardFilter {
        columns: &[],
        max: PERCENT_MAX,
    };

    /// Percentage guard over the given columns
    pub const fn percent(columns: &'static [CollegeColumn]) -> Self {
        Self {
            columns,
            max: PERCENT_MAX,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// A fixed projection with optional guard and sort, printed under a caption
#[derive(Debug, Clone, Copy)]
pub struct ReportSpec {
    pub caption: &'static str,
    pub columns: &'static [CollegeColumn],
    pub guard: GuardFilter,
    pub sort: Option<SortKey>,
}

/// A guarded scatter query
#[derive(Debug, Clone, Copy)]
pub struct PlotSpec {
    /// File-system friendly identifier
    pub slug: &'static str,
    pub x: CollegeColumn,
    pub y: CollegeColumn,
    pub guard: GuardFilter,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

const COST_COLUMNS: &[CollegeColumn] = &[
    Name,
    CostOutstate,
    CostRoomBoard,
    CostBooks,
    CostPersonal,
    TotalCost,
];

/// Reports printed by the pipeline, in order
pub const REPORTS: [ReportSpec; 6] = [
    ReportSpec {
        caption: "Public vs. Private",
        columns: &[Name, IsPrivate, IsPublic],
        guard: GuardFilter::NONE,
        sort: None,
    },
    ReportSpec {
        caption: "Working Schools (lowest percentage of fulltime students)",
        columns: &[Name, NumFtUndergrad, NumPtUndergrad, PctFtUndergrad],
        guard: GuardFilter::NONE,
        sort: None,
    },
    ReportSpec {
        caption: "Reach Schools (lowest acceptance rates)",
        columns: &[Name, NumApplied, NumAccepted, PctAccepted],
        guard: GuardFilter::NONE,
        sort: Some(SortKey::ascending(PctAccepted)),
    },
    ReportSpec {
        caption: "Safety Schools (lowest enrollment rate)",
        columns: &[Name, NumAccepted, NumEnrolled, PctEnrolled],
        guard: GuardFilter::NONE,
        sort: Some(SortKey::ascending(PctEnrolled)),
    },
    ReportSpec {
        caption: "Most Expensive",
        columns: COST_COLUMNS,
        guard: GuardFilter::NONE,
        sort: Some(SortKey::descending(TotalCost)),
    },
    ReportSpec {
        caption: "Least Expensive",
        columns: COST_COLUMNS,
        guard: GuardFilter::NONE,
        sort: Some(SortKey::ascending(TotalCost)),
    },
];

const GRADUATION: &str = "Graduation Rate (%)";
const TOP10: &str = "Percentage of Incoming Students in Top 10% of H.S. Class";
const TOP25: &str = "Percentage of Incoming Students in Top 25% of H.S. Class";
const ALUMNI: &str = "Percentage of Alumni Who Give";
const COST: &str = "Total Cost ($)";

/// Scatter queries rendered by the pipeline, in order
///
/// Guards are kept per plot; some only bound one of the two percentage
/// columns and plot 5 bounds a column it does not draw.
pub const PLOTS: [PlotSpec; 10] = [
    PlotSpec {
        slug: "01_sf_ratio_vs_grad_rate",
        x: SfRatio,
        y: GradRate,
        guard: GuardFilter::percent(&[GradRate]),
        title: "What is the relationship between student \n faculty ratios and graduation rates?",
        x_label: "Student Faculty Ratio",
        y_label: GRADUATION,
    },
    PlotSpec {
        slug: "02_top10_vs_grad_rate",
        x: PctTop10,
        y: GradRate,
        guard: GuardFilter::percent(&[GradRate, PctTop10]),
        title: "What is the relationship between \n prestige (Top 10%) and graduation rates?",
        x_label: TOP10,
        y_label: GRADUATION,
    },
    PlotSpec {
        slug: "03_top25_vs_grad_rate",
        x: PctTop25,
        y: GradRate,
        guard: GuardFilter::percent(&[GradRate, PctTop25]),
        title: "What is the relationship between \n prestige (Top 25%) and graduation rates?",
        x_label: TOP25,
        y_label: GRADUATION,
    },
    PlotSpec {
        slug: "04_top10_vs_alumni_give",
        x: PctTop10,
        y: PctAlumniGive,
        guard: GuardFilter::percent(&[PctTop10, PctAlumniGive]),
        title: "What is the relationship between \n prestige (Top 10%) and alumni giving?",
        x_label: TOP10,
        y_label: ALUMNI,
    },
    PlotSpec {
        slug: "05_top25_vs_alumni_give",
        x: PctTop25,
        y: PctAlumniGive,
        guard: GuardFilter::percent(&[GradRate, PctTop25]),
        title: "What is the relationship between \n prestige (Top 25%) and alumni giving?",
        x_label: TOP25,
        y_label: ALUMNI,
    },
    PlotSpec {
        slug: "06_alumni_give_vs_grad_rate",
        x: PctAlumniGive,
        y: GradRate,
        guard: GuardFilter::percent(&[GradRate, PctAlumniGive]),
        title: "What is the relationship between \n graduation rates and alumni giving?",
        x_label: ALUMNI,
        y_label: GRADUATION,
    },
    PlotSpec {
        slug: "07_alumni_give_vs_total_cost",
        x: PctAlumniGive,
        y: TotalCost,
        guard: GuardFilter::percent(&[PctAlumniGive]),
        title: "What is the relationship between \n cost and alumni giving?",
        x_label: ALUMNI,
        y_label: COST,
    },
    PlotSpec {
        slug: "08_accepted_vs_total_cost",
        x: PctAccepted,
        y: TotalCost,
        guard: GuardFilter::percent(&[PctAccepted]),
        title: "What is the relationship between \n cost and acceptance rate?",
        x_label: "Acceptance Rate (%)",
        y_label: COST,
    },
    PlotSpec {
        slug: "09_enrolled_vs_total_cost",
        x: PctEnrolled,
        y: TotalCost,
        guard: GuardFilter::percent(&[PctEnrolled]),
        title: "What is the relationship between \n cost and enrollment rate?",
        x_label: "Enrollment Rate (%)",
        y_label: COST,
    },
    PlotSpec {
        slug: "10_total_cost_vs_grad_rate",
        x: TotalCost,
        y: GradRate,
        guard: GuardFilter::percent(&[GradRate]),
        title: "What is the relationship between \n cost and graduation rate?",
        x_label: COST,
        y_label: GRADUATION,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_policy_parse() {
        assert_eq!("null".parse::<DivisionPolicy>().unwrap(), DivisionPolicy::Null);
        assert_eq!("NaN".parse::<DivisionPolicy>().unwrap(), DivisionPolicy::NaN);
        assert_eq!("fail".parse::<DivisionPolicy>().unwrap(), DivisionPolicy::Fail);
        assert!("skip".parse::<DivisionPolicy>().is_err());
        assert_eq!(DivisionPolicy::default(), DivisionPolicy::Null);
    }

    #[test]
    fn test_plot_slugs_are_unique() {
        let mut slugs: Vec<_> = PLOTS.iter().map(|p| p.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), PLOTS.len());
    }

    #[test]
    fn test_guards_are_preserved_per_plot() {
        // Plot 5 guards grad_rate even though it draws pct_alumni_give.
        assert_eq!(PLOTS[4].guard.columns, &[GradRate, PctTop25]);
        assert_eq!(PLOTS[0].guard.columns, &[GradRate]);
        assert!(PLOTS.iter().all(|p| p.guard.max == PERCENT_MAX));
    }

    #[test]
    fn test_reports_start_with_name() {
        for report in REPORTS {
            assert_eq!(report.columns[0], Name, "{}", report.caption);
            if let Some(key) = report.sort {
                assert!(report.columns.contains(&key.column));
            }
        }
    }
}
