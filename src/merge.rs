use crate::diagnostics::Diagnostics;
use crate::gap::{Gap, GapScan, locate_gap};
use crate::lines::split_lines;
use crate::validate::validate_scaffold;

/// How much of a task file a reset restores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetMode {
    /// Replace the whole file with the pristine template.
    #[default]
    Full,
    /// Restore the scaffold but keep the user's current editable region.
    NonEditableOnly,
}

/// Extract the part of `answer` worth submitting for grading.
///
/// When both the answer and the template carry an editable region, the
/// result is the answer's region joined with `\n`; the scaffold is
/// validated against the template on the way and any tampering is reported
/// through `diagnostics` without blocking the submission. When either side
/// has no region, the whole answer is the submission and is returned
/// verbatim.
#[must_use]
pub fn extract_submittable(
    answer: &str,
    template: &str,
    diagnostics: &dyn Diagnostics,
) -> String {
    let answer_lines = split_lines(answer);
    let template_lines = split_lines(template);

    let answer_gap = scan_reporting(&answer_lines, "answer", diagnostics);
    let template_gap = scan_reporting(&template_lines, "template", diagnostics);

    let (Some(answer_gap), Some(template_gap)) = (answer_gap, template_gap) else {
        diagnostics.debug("No editable region, submitting the whole file");
        return answer.to_owned();
    };

    let submitted = answer_gap.editable(&answer_lines);
    diagnostics.debug(&format!(
        "Text in the editable region:\n{}",
        submitted.join("\n")
    ));

    // The verdict is advisory; the sink has already reported any tampering.
    let _ = validate_scaffold(
        &answer_gap.scaffold(&answer_lines),
        &template_gap.scaffold(&template_lines),
        diagnostics,
    );

    submitted.join("\n")
}

/// Rebuild a task file from its pristine template.
///
/// [`ResetMode::Full`] always yields the template. [`ResetMode::NonEditableOnly`]
/// splices the user's current editable region into the template's scaffold,
/// restoring everything the exercise author owns while keeping in-progress
/// work; when either side has no editable region there is nothing to splice
/// and the current content is returned unchanged.
///
/// The caller is responsible for writing the result back to disk.
#[must_use]
pub fn reset_file(
    current: &str,
    template: &str,
    mode: ResetMode,
    diagnostics: &dyn Diagnostics,
) -> String {
    let current_lines = split_lines(current);
    let template_lines = split_lines(template);

    let current_gap = scan_reporting(&current_lines, "current file", diagnostics);
    let template_gap = scan_reporting(&template_lines, "template", diagnostics);

    match mode {
        ResetMode::Full => template.to_owned(),
        ResetMode::NonEditableOnly => match (current_gap, template_gap) {
            (Some(current_gap), Some(template_gap)) => {
                let mut lines = Vec::with_capacity(template_lines.len());
                lines.extend_from_slice(&template_lines[..=template_gap.begin]);
                lines.extend_from_slice(current_gap.editable(&current_lines));
                lines.extend_from_slice(&template_lines[template_gap.end..]);
                lines.join("\n")
            }
            _ => {
                diagnostics.debug("No editable region to splice, leaving the file as is");
                current.to_owned()
            }
        },
    }
}

fn scan_reporting(lines: &[&str], side: &str, diagnostics: &dyn Diagnostics) -> Option<Gap> {
    match locate_gap(lines) {
        GapScan::Found(gap) => Some(gap),
        GapScan::Missing => None,
        GapScan::OutOfOrder { begin, end } => {
            diagnostics.warn(&format!(
                "Editable-region markers in the {side} are out of order \
                 (begin on line {}, end on line {}); treating the file as \
                 having no editable region",
                begin + 1,
                end + 1
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::diagnostics::{NullDiagnostics, RecordingDiagnostics};

    const TEMPLATE: &str = "x = 1\n\
                            # --- Write your code below this line. ---\n\
                            pass\n\
                            # --- Write your code above this line. ---\n\
                            print(x)";

    const ANSWER: &str = "x = 1\n\
                          # --- Write your code below this line. ---\n\
                          y = 2\n\
                          print(y)\n\
                          # --- Write your code above this line. ---\n\
                          print(x)";

    #[test]
    fn test_extract_submittable_returns_gap_content() {
        assert_eq!(
            extract_submittable(ANSWER, TEMPLATE, &NullDiagnostics),
            "y = 2\nprint(y)"
        );
    }

    #[test]
    fn test_extract_submittable_without_markers_returns_answer() {
        let answer = "print('hello')\nprint('world')";

        assert_eq!(
            extract_submittable(answer, answer, &NullDiagnostics),
            answer
        );
    }

    #[test]
    fn test_extract_submittable_when_only_template_has_markers() {
        let answer = "print('the user deleted the markers')";

        assert_eq!(
            extract_submittable(answer, TEMPLATE, &NullDiagnostics),
            answer
        );
    }

    #[test]
    fn test_extract_submittable_accepts_crlf_input() {
        let answer = ANSWER.replace('\n', "\r\n");

        assert_eq!(
            extract_submittable(&answer, TEMPLATE, &NullDiagnostics),
            "y = 2\nprint(y)"
        );
    }

    #[test]
    fn test_extract_submittable_warns_on_tampered_scaffold() {
        let tampered = ANSWER.replace("x = 1", "x = 100");
        let diagnostics = RecordingDiagnostics::new();

        assert_eq!(
            extract_submittable(&tampered, TEMPLATE, &diagnostics),
            "y = 2\nprint(y)"
        );
        assert_eq!(
            diagnostics.warnings(),
            vec!["File has been modified outside of the editable region".to_owned()]
        );
    }

    #[test]
    fn test_extract_submittable_treats_reversed_markers_as_plain_file() {
        let reversed = "# --- Write your code above this line. ---\n\
                        whatever\n\
                        # --- Write your code below this line. ---";
        let diagnostics = RecordingDiagnostics::new();

        assert_eq!(
            extract_submittable(reversed, TEMPLATE, &diagnostics),
            reversed
        );
        assert_eq!(diagnostics.warnings().len(), 1);
    }

    #[test_case(ResetMode::Full; "full mode")]
    #[test_case(ResetMode::NonEditableOnly; "non editable only mode")]
    fn test_reset_of_pristine_file_is_identity(mode: ResetMode) {
        assert_eq!(
            reset_file(TEMPLATE, TEMPLATE, mode, &NullDiagnostics),
            TEMPLATE
        );
    }

    #[test]
    fn test_reset_full_discards_all_edits() {
        assert_eq!(
            reset_file(ANSWER, TEMPLATE, ResetMode::Full, &NullDiagnostics),
            TEMPLATE
        );
    }

    #[test]
    fn test_reset_full_without_markers_still_restores_template() {
        let template = "print('plain exercise')";

        assert_eq!(
            reset_file("user text", template, ResetMode::Full, &NullDiagnostics),
            template
        );
    }

    #[test]
    fn test_reset_non_editable_only_keeps_gap_and_restores_scaffold() {
        let corrupted = "HACKED\n\
                         # --- Write your code below this line. ---\n\
                         y = 2\n\
                         print(y)\n\
                         # --- Write your code above this line. ---\n\
                         HACKED2";

        assert_eq!(
            reset_file(corrupted, TEMPLATE, ResetMode::NonEditableOnly, &NullDiagnostics),
            ANSWER
        );
    }

    #[test]
    fn test_reset_non_editable_only_without_markers_is_a_noop() {
        let current = "print('no markers here')";

        assert_eq!(
            reset_file(current, TEMPLATE, ResetMode::NonEditableOnly, &NullDiagnostics),
            current
        );
    }
}
