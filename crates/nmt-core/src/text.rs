/// Whitespace-delimited word count, the demo's coarse token metric.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
