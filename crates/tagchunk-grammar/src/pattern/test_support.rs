//! Test helpers for asserting group scanner outcomes.
use super::group::{GroupSpec, scan_group};
use crate::errors::GrammarSyntaxError;

pub(crate) fn scan_ok(grammar: &str) -> (usize, GroupSpec) {
    match scan_group(grammar, 0) {
        Ok(result) => result,
        Err(err) => panic!("group should scan: {err}"),
    }
}

pub(crate) fn scan_err(grammar: &str) -> GrammarSyntaxError {
    match scan_group(grammar, 0) {
        Ok(_) => panic!("group scanning should fail"),
        Err(err) => err,
    }
}
