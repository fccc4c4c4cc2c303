//! Typed per-institution records

use crate::frame::{float_values, DerivedFrame};
use crate::schema::CollegeColumn::{self, IsPrivate, IsPublic, Name};
use crate::Result;
use polars::prelude::*;

/// One institution after renaming and derivation
///
/// Numeric fields are `None` where the source cell was empty or a derived
/// ratio had no defined value.
#[derive(Debug, Clone, PartialEq)]
pub struct CollegeRecord {
    pub name: String,
    pub is_private: i32,
    pub is_public: i32,
    pub num_applied: Option<f64>,
    pub num_accepted: Option<f64>,
    pub num_enrolled: Option<f64>,
    pub pct_top10: Option<f64>,
    pub pct_top25: Option<f64>,
    pub num_ft_undergrad: Option<f64>,
    pub num_pt_undergrad: Option<f64>,
    pub cost_outstate: Option<f64>,
    pub cost_room_board: Option<f64>,
    pub cost_books: Option<f64>,
    pub cost_personal: Option<f64>,
    pub pct_fac_phd: Option<f64>,
    pub pct_fac_term_deg: Option<f64>,
    pub sf_ratio: Option<f64>,
    pub pct_alumni_give: Option<f64>,
    pub expense_per_sdnt: Option<f64>,
    pub grad_rate: Option<f64>,
    pub pct_ft_undergrad: Option<f64>,
    pub pct_accepted: Option<f64>,
    pub pct_enrolled: Option<f64>,
    pub total_cost: Option<f64>,
}

fn indicator_values(df: &DataFrame, column: CollegeColumn) -> Result<Vec<i32>> {
    let values = df.column(column.as_str())?.cast(&DataType::Int32)?;
    Ok(values.i32()?.into_iter().map(|v| v.unwrap_or(0)).collect())
}

impl DerivedFrame {
    /// Materialize every row as a [`CollegeRecord`], in table order
    pub fn records(&self) -> Result<Vec<CollegeRecord>> {
        let df = self.dataframe();
        let names = df.column(Name.as_str())?.cast(&DataType::String)?;
        let names: Vec<String> = names
            .str()?
            .into_iter()
            .map(|v| v.unwrap_or_default().to_string())
            .collect();
        let is_private = indicator_values(df, IsPrivate)?;
        let is_public = indicator_values(df, IsPublic)?;

        let mut numeric = Vec::with_capacity(21);
        for column in CollegeColumn::SOURCE
            .iter()
            .chain(CollegeColumn::DERIVED.iter())
            .filter(|c| !matches!(**c, Name | IsPrivate | IsPublic))
        {
            numeric.push(float_values(df, *column)?);
        }
        // Source order followed by derived order, minus the three above.
        let [
            num_applied,
            num_accepted,
            num_enrolled,
            pct_top10,
            pct_top25,
            num_ft_undergrad,
            num_pt_undergrad,
            cost_outstate,
            cost_room_board,
            cost_books,
            cost_personal,
            pct_fac_phd,
            pct_fac_term_deg,
            sf_ratio,
            pct_alumni_give,
            expense_per_sdnt,
            grad_rate,
            pct_ft_undergrad,
            pct_accepted,
            pct_enrolled,
            total_cost,
        ]: [Vec<Option<f64>>; 21] = numeric
            .try_into()
            .map_err(|_| crate::Error::missing_column("numeric columns", "records"))?;

        Ok((0..df.height())
            .map(|i| CollegeRecord {
                name: names[i].clone(),
                is_private: is_private[i],
                is_public: is_public[i],
                num_applied: num_applied[i],
                num_accepted: num_accepted[i],
                num_enrolled: num_enrolled[i],
                pct_top10: pct_top10[i],
                pct_top25: pct_top25[i],
                num_ft_undergrad: num_ft_undergrad[i],
                num_pt_undergrad: num_pt_undergrad[i],
                cost_outstate: cost_outstate[i],
                cost_room_board: cost_room_board[i],
                cost_books: cost_books[i],
                cost_personal: cost_personal[i],
                pct_fac_phd: pct_fac_phd[i],
                pct_fac_term_deg: pct_fac_term_deg[i],
                sf_ratio: sf_ratio[i],
                pct_alumni_give: pct_alumni_give[i],
                expense_per_sdnt: expense_per_sdnt[i],
                grad_rate: grad_rate[i],
                pct_ft_undergrad: pct_ft_undergrad[i],
                pct_accepted: pct_accepted[i],
                pct_enrolled: pct_enrolled[i],
                total_cost: total_cost[i],
            })
            .collect())
    }
}
