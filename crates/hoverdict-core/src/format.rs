use crate::record::DictRecord;

/// Marker joining sub-lines inside `definition`/`translation` fields: a
/// literal backslash followed by `n`, as stored in the csv, not a newline.
const SUBLINE_MARKER: &str = r"\n";

/// Render a matched word and its record into hover display lines.
///
/// The header is unconditional; each later section appears only when its
/// field is non-empty. Lines are joined with `\n` by the caller.
pub fn format_doc(word: &str, rec: &DictRecord) -> Vec<String> {
    let mut values = vec![format!("_{word}_")];

    if !rec.phonetic.is_empty() {
        values.push(String::new());
        values.push(format!("__音标：__{}", rec.phonetic));
    }

    if !rec.definition.is_empty() {
        values.push(String::new());
        values.push("__英文解释：__".to_string());
        values.push(String::new());
        values.extend(sublines(&rec.definition));
    }

    if !rec.translation.is_empty() {
        values.push(String::new());
        values.push("__中文解释：__".to_string());
        values.push(String::new());
        values.extend(sublines(&rec.translation));
    }

    if !rec.pos.is_empty() {
        values.push(String::new());
        values.push(format!("__词语位置：__{}", rec.pos.replace('\n', " ")));
    }

    values
}

fn sublines(field: &str) -> impl Iterator<Item = String> + '_ {
    field
        .split(SUBLINE_MARKER)
        .map(|line| line.strip_prefix('"').unwrap_or(line).to_string())
}
