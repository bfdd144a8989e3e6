use crate::scanner::ReferenceOccurrence;

/// Splices rewritten external references into one parameter's text, copying
/// internal references and all surrounding text verbatim. Occurrences must be
/// in source order and non-overlapping, as produced by the scanner.
pub(super) fn rewrite_parameter(
    text: &str,
    occurrences: &[(ReferenceOccurrence, Option<String>)],
    start_node_name: &str,
) -> String {
    let mut rewritten = String::with_capacity(text.len());
    let mut cursor = 0;
    for (occurrence, variable) in occurrences {
        rewritten.push_str(&text[cursor..occurrence.span.start]);
        match variable {
            Some(variable) => {
                // The entry node reference keeps the original accessor and
                // drills into the synthesized field.
                rewritten.push_str(&format!(
                    "$('{}'){}.json.{}",
                    start_node_name, occurrence.accessor, variable
                ));
            }
            None => rewritten.push_str(&occurrence.raw),
        }
        cursor = occurrence.span.end;
    }
    rewritten.push_str(&text[cursor..]);
    rewritten
}
