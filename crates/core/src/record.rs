//! Output record types.
//!
//! A [`Record`] is the flattened output unit: one row per aired clue,
//! stamped with the episode fields shared by every row of its page.

/// Episode-wide fields parsed once from the page title.
///
/// Both fields default to empty strings when the title carries no match;
/// a missing title is never fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Episode {
    /// Episode number as a digit string.
    pub number: String,
    /// Air date as an ISO `YYYY-MM-DD` string.
    pub air_date: String,
}

/// Literal CSV header, in canonical column order.
pub const CSV_HEADER: [&str; 8] = [
    "epNum",
    "airDate",
    "round_name",
    "category",
    "value",
    "daily_double",
    "question",
    "answer",
];

/// One question/answer row.
///
/// A Record is either fully assembled (possibly with empty fields) or not
/// emitted at all; the engine never produces partial rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub ep_num: String,
    pub air_date: String,
    pub round_name: String,
    pub category: String,
    /// Digit string, or the missing-value sentinel.
    pub value: String,
    pub daily_double: bool,
    pub question: String,
    pub answer: String,
}

impl Record {
    /// The row's fields in canonical column order, with the daily-double
    /// flag rendered as `"true"`/`"false"`.
    pub fn fields(&self) -> [&str; 8] {
        [
            &self.ep_num,
            &self.air_date,
            &self.round_name,
            &self.category,
            &self.value,
            if self.daily_double { "true" } else { "false" },
            &self.question,
            &self.answer,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_order_matches_header() {
        let record = Record {
            ep_num: "9000".to_string(),
            air_date: "2024-05-01".to_string(),
            round_name: "Jeopardy".to_string(),
            category: "HISTORY".to_string(),
            value: "400".to_string(),
            daily_double: true,
            question: "q".to_string(),
            answer: "a".to_string(),
        };
        let fields = record.fields();
        assert_eq!(fields.len(), CSV_HEADER.len());
        assert_eq!(fields[0], "9000");
        assert_eq!(fields[5], "true");
        assert_eq!(fields[7], "a");
    }

    #[test]
    fn test_header_literals() {
        assert_eq!(CSV_HEADER[0], "epNum");
        assert_eq!(CSV_HEADER[1], "airDate");
        assert_eq!(CSV_HEADER[5], "daily_double");
    }
}
