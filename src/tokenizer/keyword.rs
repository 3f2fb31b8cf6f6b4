use serde::{Deserialize, Serialize};

/// Boolean connectives joining two sub-expressions.
///
/// Keyword matching is case-insensitive: `AND`, `and` and `And` all
/// tokenize to [`Connective::And`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connective {
    And,
    Or,
}
