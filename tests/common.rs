#![allow(dead_code)]
use std::{fs, path::Path};

use json_syntax::Parse;
use serde::Deserialize;

/// Version 3 document storing first and middle names in the given names
/// element.
pub const V3_DOCUMENT: &str = "@\n\u{1e}\rANSI 636020030001DL00310242DLDAQ123456789\r\nDCF1234567\r\nDBD01012022\r\nDBB01011970\r\nDBA01012027\r\nDCTFIRSTNAME,MIDDLENAME\r\nDDFN\r\nDDGN\r\nDCSLASTNAME\r\nDDEN\r\nDAU069 IN\r\nDBC1\r\nDAYBLK\r\nDAG123 MAIN STREET\r\nDAIDENVER\r\nDAJCO\r\nDAK800120000 \r\nDCGUSA\r\nDDAF\r\nDCJCODL_0_082418_04105\r\nDCLU\r\n                      ";

/// Same cardholder as [`V3_DOCUMENT`], encoded as a version 9 document with
/// separate first and middle name elements.
pub const V9_DOCUMENT: &str = "@\n\u{1e}\rANSI 636020090001DL00310242DLDAQ123456789\r\nDCF1234567\r\nDBD01012022\r\nDBB01011970\r\nDBA01012027\r\nDACFIRSTNAME\r\nDDFN\r\nDADMIDDLENAME\r\nDDGN\r\nDCSLASTNAME\r\nDDEN\r\nDAU069 IN\r\nDBC1\r\nDAYBLK\r\nDAG123 MAIN STREET\r\nDAIDENVER\r\nDAJCO\r\nDAK800120000 \r\nDCGUSA\r\nDDAF\r\nDCJCODL_0_082418_04105\r\nDCLU\r\n                      ";

pub fn load_json(path: impl AsRef<Path>) -> json_syntax::Value {
    let content = fs::read_to_string(path).unwrap();
    json_syntax::Value::parse_str(&content).unwrap().0
}

#[derive(Debug, Deserialize)]
pub struct DateCase {
    pub raw: String,
    pub country: Option<String>,
    pub expected: Option<String>,
}

pub fn load_date_cases(path: impl AsRef<Path>) -> Vec<DateCase> {
    csv::Reader::from_path(path)
        .unwrap()
        .deserialize::<DateCase>()
        .collect::<Result<_, _>>()
        .unwrap()
}
