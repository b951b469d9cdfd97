use crate::diagnostics::Diagnostics;
use crate::normalize::normalize_lines;

/// Check that the scaffold of the user's answer still matches the template's.
///
/// Returns `true` when no line was added or changed outside the editable
/// region, modulo blank lines and ordering. The comparison is asymmetric on
/// purpose: lines the user deleted are not flagged, the validator exists to
/// catch additions and tampering. Two empty inputs cannot be validated and
/// yield `false`.
///
/// The verdict is advisory; callers report it and carry on.
#[must_use]
pub fn validate_scaffold(
    answer: &[&str],
    template: &[&str],
    diagnostics: &dyn Diagnostics,
) -> bool {
    if answer.is_empty() && template.is_empty() {
        diagnostics.debug("Both scaffolds are empty, nothing to validate");
        return false;
    }

    let answer_set = normalize_lines(answer);
    let template_set = normalize_lines(template);

    let mut unexpected: Vec<&str> = answer_set.difference(&template_set).copied().collect();
    unexpected.sort_unstable();

    if unexpected.is_empty() {
        return true;
    }

    diagnostics.debug(&format!(
        "Lines not present in the template scaffold: {unexpected:?}"
    ));
    diagnostics.warn("File has been modified outside of the editable region");

    false
}
