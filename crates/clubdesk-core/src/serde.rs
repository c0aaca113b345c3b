use serde::{Deserialize, Deserializer};

/// Treat `null`, a missing value and `""` alike as `None`.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.trim().is_empty()))
}

/// Read a string field that the API sometimes sends as `null`.
pub fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Int(i64),
    Float(f64),
}

/// Read a value the API stores either as a number or a string (e.g. the
/// study `year` of a member) into its string form, so filters can compare
/// it the way the console displays it.
pub fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<StringOrNumber> = Option::deserialize(deserializer)?;
    Ok(match opt {
        Some(StringOrNumber::String(s)) if s.trim().is_empty() => None,
        Some(StringOrNumber::String(s)) => Some(s),
        Some(StringOrNumber::Int(n)) => Some(n.to_string()),
        Some(StringOrNumber::Float(f)) => Some(f.to_string()),
        None => None,
    })
}
