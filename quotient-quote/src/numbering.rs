/// Prefix carried over from the original numbering scheme
pub const QUOTE_NUMBER_PREFIX: &str = "TKL";

/// Next sequential quote number for `year`, formatted `TKL-YYYY-NNNN`.
///
/// Scans the existing numbers for the year's prefix and continues after
/// the highest numeric suffix; suffixes that fail to parse are ignored.
pub fn next_quote_number<'a, I>(existing: I, year: i32) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let prefix = format!("{QUOTE_NUMBER_PREFIX}-{year}-");
    let max = existing
        .into_iter()
        .filter_map(|number| number.strip_prefix(prefix.as_str()))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max()
        .unwrap_or(0);

    format!("{prefix}{:04}", max + 1)
}
