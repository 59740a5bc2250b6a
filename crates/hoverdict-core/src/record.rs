/// A single ECDICT entry.
///
/// Fields default to empty when the source row leaves them blank; a missing
/// word is represented by a missing store key, never by an all-empty record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictRecord {
    pub phonetic: String,
    /// English gloss. Sub-lines are joined with the literal two-character
    /// sequence `\n` in the source data, not real newlines.
    pub definition: String,
    /// Chinese gloss, same sub-line convention as `definition`.
    pub translation: String,
    /// Part-of-speech; may contain real embedded newlines.
    pub pos: String,
}
