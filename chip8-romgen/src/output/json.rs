//! JSON renderer

use super::{ByteArray, Declaration};
use crate::error::Result;
use crate::table::ProgramRecord;
use serde::Serialize;

#[derive(Serialize)]
struct JsonProgram<'a> {
    #[serde(flatten)]
    record: &'a ProgramRecord,
    load_address: u16,
    code: Vec<u8>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    program_count: usize,
    programs: Vec<JsonProgram<'a>>,
}

/// Serialize the program table, with each program's code bytes, as JSON
pub fn render_json(decls: &[Declaration]) -> Result<String> {
    let arrays: Vec<&ByteArray> = decls
        .iter()
        .filter_map(|decl| match decl {
            Declaration::ByteArray(array) => Some(array),
            _ => None,
        })
        .collect();

    let records: &[ProgramRecord] = decls
        .iter()
        .find_map(|decl| match decl {
            Declaration::ProgramTable(records) => Some(records.as_slice()),
            _ => None,
        })
        .unwrap_or(&[]);

    // Arrays and records are pushed pairwise, so they line up by position
    let programs = records
        .iter()
        .zip(arrays)
        .map(|(record, array)| JsonProgram {
            record,
            load_address: array.load_address,
            code: array.bytes(),
        })
        .collect();

    let output = JsonOutput {
        program_count: records.len(),
        programs,
    };

    let mut text = serde_json::to_string_pretty(&output)?;
    text.push('\n');
    Ok(text)
}
