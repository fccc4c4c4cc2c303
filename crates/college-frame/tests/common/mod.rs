//! Common test utilities for college-frame tests

#![allow(dead_code)]

use college_frame::{DerivedFrame, DivisionPolicy, RawFrame};
use std::io::Write;
use tempfile::NamedTempFile;

/// Source header row, leading column unnamed
pub const HEADER: &str = ",Private,Apps,Accept,Enroll,Top10perc,Top25perc,F.Undergrad,P.Undergrad,Outstate,Room.Board,Books,Personal,PhD,Terminal,S.F.Ratio,perc.alumni,Expend,Grad.Rate";

/// One source row, defaults taken from the "Alpha" reference institution
#[derive(Debug, Clone)]
pub struct Row {
    pub name: &'static str,
    pub private: &'static str,
    pub apps: i64,
    pub accept: i64,
    pub enroll: i64,
    pub top10: i64,
    pub top25: i64,
    pub ft_undergrad: i64,
    pub pt_undergrad: i64,
    pub outstate: i64,
    pub room_board: i64,
    pub books: i64,
    pub personal: i64,
    pub phd: i64,
    pub terminal: i64,
    pub sf_ratio: f64,
    pub alumni: i64,
    pub expend: i64,
    pub grad_rate: i64,
}

impl Row {
    pub fn alpha() -> Self {
        Self {
            name: "Alpha",
            private: "Yes",
            apps: 100,
            accept: 50,
            enroll: 20,
            top10: 10,
            top25: 20,
            ft_undergrad: 500,
            pt_undergrad: 100,
            outstate: 8000,
            room_board: 5000,
            books: 500,
            personal: 1000,
            phd: 90,
            terminal: 95,
            sf_ratio: 12.0,
            alumni: 30,
            expend: 15000,
            grad_rate: 80,
        }
    }

    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            ..Self::alpha()
        }
    }

    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{:.1},{},{},{}",
            self.name,
            self.private,
            self.apps,
            self.accept,
            self.enroll,
            self.top10,
            self.top25,
            self.ft_undergrad,
            self.pt_undergrad,
            self.outstate,
            self.room_board,
            self.books,
            self.personal,
            self.phd,
            self.terminal,
            self.sf_ratio,
            self.alumni,
            self.expend,
            self.grad_rate,
        )
    }
}

/// Write raw CSV text to a temporary `.csv` file
pub fn write_text(text: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Write a header plus rows to a temporary CSV file
pub fn write_csv(rows: &[Row]) -> NamedTempFile {
    let mut text = String::from(HEADER);
    text.push('\n');
    for row in rows {
        text.push_str(&row.to_csv());
        text.push('\n');
    }
    write_text(&text)
}

/// Load, rename and derive the given rows
pub fn derive_rows(rows: &[Row], policy: DivisionPolicy) -> college_frame::Result<DerivedFrame> {
    let file = write_csv(rows);
    RawFrame::load(file.path())?.rename()?.derive(policy)
}

/// Values of a column as f64
pub fn floats(df: &college_frame::polars::prelude::DataFrame, column: &str) -> Vec<Option<f64>> {
    use college_frame::polars::prelude::DataType;
    df.column(column)
        .unwrap()
        .cast(&DataType::Float64)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}

/// Values of a string column
pub fn strings(df: &college_frame::polars::prelude::DataFrame, column: &str) -> Vec<String> {
    df.column(column)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect()
}
