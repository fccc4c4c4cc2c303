//! Common test utilities for pipeline tests

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str = ",Private,Apps,Accept,Enroll,Top10perc,Top25perc,F.Undergrad,P.Undergrad,Outstate,Room.Board,Books,Personal,PhD,Terminal,S.F.Ratio,perc.alumni,Expend,Grad.Rate";

/// A handful of institutions, one with an out-of-range graduation rate
pub const ROWS: &[&str] = &[
    "Alpha,Yes,100,50,20,10,20,500,100,8000,5000,500,1000,90,95,12.0,30,15000,80",
    "Beta,No,1200,900,400,15,45,3000,1500,2500,5000,500,1000,70,80,18.5,12,7000,55",
    "Gamma,Yes,3000,600,250,60,90,1200,40,13500,5000,500,1000,95,98,8.0,45,25000,118",
    "Delta,No,800,700,500,5,25,4500,3000,4000,3000,600,1500,55,60,22.0,5,5500,40",
];

pub fn write_csv(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    writeln!(file, "{header}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

pub fn dataset() -> NamedTempFile {
    write_csv(HEADER, ROWS)
}
