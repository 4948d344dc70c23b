//! Search result and wire payload types.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single ranked result as returned by the search API.
///
/// Missing or null fields default to empty values so partially populated
/// items still render. `rank` is the API's ordering position and is never
/// recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(deserialize_with = "nullable_string")]
    pub url: String,
    #[serde(deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(deserialize_with = "nullable_string")]
    pub snippet: String,
    #[serde(deserialize_with = "nullable_string")]
    pub host_name: String,
    #[serde(deserialize_with = "whole_number")]
    pub rank: u32,
    #[serde(deserialize_with = "nullable_string")]
    pub date: String,
    #[serde(deserialize_with = "nullable_string")]
    pub favicon: String,
}

/// `null` reads as an empty string.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts integers and integral floats (`1.0`); `null` reads as 0.
fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(0),
        Some(n) if n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n) => Ok(n as u32),
        Some(n) => Err(de::Error::invalid_value(
            Unexpected::Float(n),
            &"a non-negative whole number",
        )),
    }
}

/// Outbound request body.
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
}

/// Outcome of decoding a success payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultList {
    /// The `results` field held a well-formed list.
    Parsed(Vec<SearchResult>),
    /// The payload had no `results` field (or it was null).
    Missing,
    /// The payload or its `results` field could not be decoded.
    Malformed(String),
}

impl ResultList {
    /// Collapses the outcome to a result sequence (empty unless parsed).
    pub fn into_results(self) -> Vec<SearchResult> {
        match self {
            ResultList::Parsed(results) => results,
            ResultList::Missing | ResultList::Malformed(_) => Vec::new(),
        }
    }
}

/// Decodes the `results` list from a success response body.
///
/// Never fails: anything that is not a list of result objects is reported as
/// `Missing` or `Malformed` so the caller can log it and treat it as empty.
pub fn parse_result_list(body: &[u8]) -> ResultList {
    let payload: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => return ResultList::Malformed(format!("invalid JSON body: {e}")),
    };

    let Some(results) = payload.get("results") else {
        return ResultList::Missing;
    };
    if results.is_null() {
        return ResultList::Missing;
    }

    match Vec::<SearchResult>::deserialize(results) {
        Ok(list) => ResultList::Parsed(list),
        Err(e) => ResultList::Malformed(format!("invalid results list: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_preserves_api_order() {
        let body = json!({
            "results": [
                {"url": "https://b.example", "name": "B", "rank": 2},
                {"url": "https://a.example", "name": "A", "rank": 1},
                {"url": "https://c.example", "name": "C", "rank": 3}
            ]
        });
        let list = parse_result_list(body.to_string().as_bytes()).into_results();

        let names: Vec<&str> = list.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        let ranks: Vec<u32> = list.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![2, 1, 3]);
    }

    #[test]
    fn test_parse_full_item() {
        let body = json!({
            "results": [{
                "url": "https://a.example",
                "name": "A",
                "snippet": "s1",
                "host_name": "a.example",
                "rank": 1,
                "date": "2024-01-01",
                "favicon": ""
            }]
        });
        let list = parse_result_list(body.to_string().as_bytes());
        assert_eq!(
            list,
            ResultList::Parsed(vec![SearchResult {
                url: "https://a.example".to_string(),
                name: "A".to_string(),
                snippet: "s1".to_string(),
                host_name: "a.example".to_string(),
                rank: 1,
                date: "2024-01-01".to_string(),
                favicon: String::new(),
            }])
        );
    }

    #[test]
    fn test_parse_missing_results_key() {
        assert_eq!(parse_result_list(b"{}"), ResultList::Missing);
        assert_eq!(
            parse_result_list(br#"{"results": null}"#),
            ResultList::Missing
        );
    }

    #[test]
    fn test_parse_malformed_is_empty() {
        for body in [
            r#"{"results": "nope"}"#,
            r#"{"results": [1, 2]}"#,
            r#"{"results": [{"rank": "first"}]}"#,
            "not json",
            "",
        ] {
            let list = parse_result_list(body.as_bytes());
            assert!(
                matches!(list, ResultList::Malformed(_)),
                "expected malformed for {body:?}"
            );
            assert!(list.into_results().is_empty());
        }
    }

    #[test]
    fn test_missing_fields_default() {
        let list = parse_result_list(br#"{"results": [{"name": "Only name"}]}"#).into_results();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Only name");
        assert_eq!(list[0].rank, 0);
        assert!(list[0].url.is_empty());
    }

    #[test]
    fn test_null_fields_keep_the_list() {
        let body = br#"{"results": [
            {"name": "A", "rank": 1, "date": null, "favicon": null, "snippet": null},
            {"name": "B", "rank": 2, "date": "2024-01-01", "favicon": ""}
        ]}"#;
        let list = parse_result_list(body).into_results();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "A");
        assert!(list[0].date.is_empty());
        assert!(list[0].favicon.is_empty());
        assert!(list[0].snippet.is_empty());
        assert_eq!(list[1].date, "2024-01-01");
    }

    #[test]
    fn test_integral_float_rank() {
        let body = br#"{"results": [
            {"name": "A", "rank": 1.0},
            {"name": "B", "rank": 2},
            {"name": "C", "rank": null}
        ]}"#;
        let list = parse_result_list(body).into_results();

        let ranks: Vec<u32> = list.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 0]);
    }

    #[test]
    fn test_fractional_or_negative_rank_is_malformed() {
        for body in [
            r#"{"results": [{"name": "A", "rank": 1.5}]}"#,
            r#"{"results": [{"name": "A", "rank": -1}]}"#,
        ] {
            assert!(
                matches!(parse_result_list(body.as_bytes()), ResultList::Malformed(_)),
                "expected malformed for {body}"
            );
        }
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(SearchRequest {
            query: "neural networks",
        })
        .unwrap();
        assert_eq!(body, json!({"query": "neural networks"}));
    }
}
