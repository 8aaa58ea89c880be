//! Flattens an annotated project report into build instructions.

use crate::audit::report::{BuildInstruction, ProjectReport, UnitReport};

/// Unrolls a project report into an ordered list of build instructions.
///
/// Per report node the policy is fixed:
///
/// - cycle terminator: nothing, the branch was never evaluated;
/// - fresh: nothing, everything below it is accounted for;
/// - stale because of dependencies: an instruction for the unit, then
///   recurse into every dependency report, since each stale dependency
///   needs its own instruction;
/// - stale on own files only: an instruction for the unit, no recursion,
///   the dependencies are confirmed fresh.
///
/// The list is deliberately not deduplicated: a unit reached from several
/// branches appears once per branch and the build executor dedupes.
#[must_use]
pub fn unroll(report: &ProjectReport) -> Vec<BuildInstruction> {
    let mut instructions = Vec::new();
    for unit_report in report.units.values() {
        unroll_node(unit_report, &mut instructions);
    }
    instructions
}

fn unroll_node(report: &UnitReport, instructions: &mut Vec<BuildInstruction>) {
    if report.is_cycle() {
        return;
    }
    if report.is_fresh == Some(true) {
        return;
    }

    instructions.push(BuildInstruction { unit: report.unit.clone() });

    if report.dependencies_were_fresh == Some(false) {
        for child in report.dependencies.values() {
            unroll_node(child, instructions);
        }
    }
}
