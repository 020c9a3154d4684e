use std::collections::BTreeSet;

use dm_core::{CompileWarning, CompileWarningKind, PatternKind, Step};

pub(crate) fn collect_warnings(steps: &[Step]) -> Vec<CompileWarning> {
    let targets = steps
        .iter()
        .flat_map(|step| step.candidate_positions.iter().copied())
        .collect::<BTreeSet<_>>();

    let mut warnings = Vec::new();
    for step in steps {
        if step.action.trim().is_empty() {
            warnings.push(CompileWarning {
                kind: CompileWarningKind::EmptyAction,
                row: step.index,
                message: format!(
                    "Row {} has an empty action; user input reaches it only when empty.",
                    step.index
                ),
            });
        }

        if let PatternKind::Unsupported { raw } = &step.pattern {
            warnings.push(CompileWarning {
                kind: CompileWarningKind::UnsupportedPattern,
                row: step.index,
                message: format!(
                    "Row {} uses unsupported pattern \"{}\"; it never matches.",
                    step.index, raw
                ),
            });
        }

        if step.index != 0 && !targets.contains(&step.index) {
            warnings.push(CompileWarning {
                kind: CompileWarningKind::UnreachableStep,
                row: step.index,
                message: format!(
                    "Row {} is not a candidate of any row; only sequential advance reaches it.",
                    step.index
                ),
            });
        }
    }
    warnings
}
