use std::collections::HashMap;

/// Substitutes `{key}` placeholders in a prompt template.
///
/// For each key, only the FIRST occurrence of `{key}` is replaced; repeated
/// occurrences are left as-is. The pass is single and static: occurrences are
/// located in the original template, so values are never escaped and a value
/// containing `{otherKey}` is not substituted again. The prompt corpus was
/// authored against these semantics, so do not switch to global replacement.
pub fn render_template(template: &str, values: &HashMap<String, String>) -> String {
    let mut sites: Vec<(usize, &str, &str)> = values
        .iter()
        .filter_map(|(key, value)| {
            let placeholder = format!("{{{key}}}");
            template
                .find(&placeholder)
                .map(|pos| (pos, key.as_str(), value.as_str()))
        })
        .collect();
    sites.sort_by_key(|(pos, _, _)| *pos);

    let mut rendered = String::with_capacity(template.len());
    let mut cursor = 0;
    for (pos, key, value) in sites {
        rendered.push_str(&template[cursor..pos]);
        rendered.push_str(value);
        cursor = pos + key.len() + 2;
    }
    rendered.push_str(&template[cursor..]);
    rendered
}
