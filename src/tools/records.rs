use crate::tools::catalogs::{hawkins_fallback, lookup, HAWKINS_RECORDS};
use crate::tools::registry::Tool;
use crate::tools::string_arg;
use crate::types::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

/// Record for the first known topic mentioned in `query`, or a generic note.
pub fn check_hawkins_records(query: &str) -> String {
    lookup(&HAWKINS_RECORDS, query)
        .map(str::to_string)
        .unwrap_or_else(|| hawkins_fallback(query))
}

/// `check_hawkins_records` as a [`Tool`].
pub struct CheckHawkinsRecords;

#[async_trait]
impl Tool for CheckHawkinsRecords {
    fn name(&self) -> &str {
        "check_hawkins_records"
    }

    fn description(&self) -> &str {
        "Search Hawkins historical records for information."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "What to look up, e.g. portal, monsters, psychics, electricity"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let query = string_arg(&args, "query")?;
        Ok(Value::String(check_hawkins_records(query)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("portal", 0)]
    #[case("Are the MONSTERS hungry?", 1)]
    #[case("psychics", 2)]
    #[case("the ElEcTrIcItY keeps flickering", 3)]
    fn test_keyword_match(#[case] query: &str, #[case] index: usize) {
        assert_eq!(check_hawkins_records(query), HAWKINS_RECORDS[index].1);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(check_hawkins_records("PORTAL"), check_hawkins_records("portal"));
    }

    #[test]
    fn test_fallback_quotes_original_query() {
        let out = check_hawkins_records("Who Ate The Waffles?");
        assert!(out.contains("'Who Ate The Waffles?'"));
        assert!(out.starts_with("Records don't contain specific information"));
    }
}
