//! Canonical column schema for the college dataset
//!
//! Every column the pipeline touches is named through [`CollegeColumn`], so
//! projections and derivations never match on raw strings.

use std::fmt;

/// Canonical columns of a college record after renaming and derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollegeColumn {
    Name,
    IsPrivate,
    IsPublic,
    NumApplied,
    NumAccepted,
    NumEnrolled,
    PctTop10,
    PctTop25,
    NumFtUndergrad,
    NumPtUndergrad,
    CostOutstate,
    CostRoomBoard,
    CostBooks,
    CostPersonal,
    PctFacPhd,
    PctFacTermDeg,
    SfRatio,
    PctAlumniGive,
    ExpensePerSdnt,
    GradRate,
    PctFtUndergrad,
    PctAccepted,
    PctEnrolled,
    TotalCost,
}

impl CollegeColumn {
    /// Columns expected in the source file, in source order
    pub const SOURCE: [CollegeColumn; 19] = [
        Self::Name,
        Self::IsPrivate,
        Self::NumApplied,
        Self::NumAccepted,
        Self::NumEnrolled,
        Self::PctTop10,
        Self::PctTop25,
        Self::NumFtUndergrad,
        Self::NumPtUndergrad,
        Self::CostOutstate,
        Self::CostRoomBoard,
        Self::CostBooks,
        Self::CostPersonal,
        Self::PctFacPhd,
        Self::PctFacTermDeg,
        Self::SfRatio,
        Self::PctAlumniGive,
        Self::ExpensePerSdnt,
        Self::GradRate,
    ];

    /// Columns appended by the deriver, in derivation order
    pub const DERIVED: [CollegeColumn; 5] = [
        Self::IsPublic,
        Self::PctFtUndergrad,
        Self::PctAccepted,
        Self::PctEnrolled,
        Self::TotalCost,
    ];

    /// Canonical (renamed) column name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::IsPrivate => "is_private",
            Self::IsPublic => "is_public",
            Self::NumApplied => "num_applied",
            Self::NumAccepted => "num_accepted",
            Self::NumEnrolled => "num_enrolled",
            Self::PctTop10 => "pct_top10",
            Self::PctTop25 => "pct_top25",
            Self::NumFtUndergrad => "num_ft_undergrad",
            Self::NumPtUndergrad => "num_pt_undergrad",
            Self::CostOutstate => "cost_outstate",
            Self::CostRoomBoard => "cost_room_board",
            Self::CostBooks => "cost_books",
            Self::CostPersonal => "cost_personal",
            Self::PctFacPhd => "pct_fac_phd",
            Self::PctFacTermDeg => "pct_fac_term_deg",
            Self::SfRatio => "sf_ratio",
            Self::PctAlumniGive => "pct_alumni_give",
            Self::ExpensePerSdnt => "expense_per_sdnt",
            Self::GradRate => "grad_rate",
            Self::PctFtUndergrad => "pct_ft_undergrad",
            Self::PctAccepted => "pct_accepted",
            Self::PctEnrolled => "pct_enrolled",
            Self::TotalCost => "total_cost",
        }
    }

    /// Header this column carries in the source file
    ///
    /// `Name` has no fixed header (it is the leading, usually unnamed,
    /// column) and derived columns have none at all.
    pub fn source_header(&self) -> Option<&'static str> {
        match self {
            Self::IsPrivate => Some("Private"),
            Self::NumApplied => Some("Apps"),
            Self::NumAccepted => Some("Accept"),
            Self::NumEnrolled => Some("Enroll"),
            Self::PctTop10 => Some("Top10perc"),
            Self::PctTop25 => Some("Top25perc"),
            Self::NumFtUndergrad => Some("F.Undergrad"),
            Self::NumPtUndergrad => Some("P.Undergrad"),
            Self::CostOutstate => Some("Outstate"),
            Self::CostRoomBoard => Some("Room.Board"),
            Self::CostBooks => Some("Books"),
            Self::CostPersonal => Some("Personal"),
            Self::PctFacPhd => Some("PhD"),
            Self::PctFacTermDeg => Some("Terminal"),
            Self::SfRatio => Some("S.F.Ratio"),
            Self::PctAlumniGive => Some("perc.alumni"),
            Self::ExpensePerSdnt => Some("Expend"),
            Self::GradRate => Some("Grad.Rate"),
            Self::Name
            | Self::IsPublic
            | Self::PctFtUndergrad
            | Self::PctAccepted
            | Self::PctEnrolled
            | Self::TotalCost => None,
        }
    }

    /// Whether this column is computed rather than loaded
    pub fn is_derived(&self) -> bool {
        Self::DERIVED.contains(self)
    }

    /// Columns that must exist before this one can be derived
    pub fn dependencies(&self) -> &'static [CollegeColumn] {
        match self {
            Self::IsPublic => &[Self::IsPrivate],
            Self::PctFtUndergrad => &[Self::NumFtUndergrad, Self::NumPtUndergrad],
            Self::PctAccepted => &[Self::NumAccepted, Self::NumApplied],
            Self::PctEnrolled => &[Self::NumEnrolled, Self::NumAccepted],
            Self::TotalCost => &[
                Self::CostOutstate,
                Self::CostRoomBoard,
                Self::CostBooks,
                Self::CostPersonal,
            ],
            _ => &[],
        }
    }
}

impl fmt::Display for CollegeColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical names for a projection, in order
pub fn column_names(columns: &[CollegeColumn]) -> Vec<&'static str> {
    columns.iter().map(CollegeColumn::as_str).collect()
}
