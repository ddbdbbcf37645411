use crate::error::ParseError;
use serde_json::Value;

/// Parsed label input. `labels` is `None` when the input is a literal `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLabels {
    pub labels: Option<Vec<Option<String>>>,
}

/// Reads a label list from text.
///
/// A document starting with `[` is a JSON5 array of strings and nulls. A bare
/// `null` means "no list". Anything else is one label per line.
pub fn parse_labels(input: &str) -> Result<ParsedLabels, ParseError> {
    let trimmed = input.trim_start_matches('\u{feff}').trim();
    if trimmed == "null" {
        return Ok(ParsedLabels { labels: None });
    }
    if trimmed.starts_with('[') {
        return parse_label_array(trimmed).map(|labels| ParsedLabels {
            labels: Some(labels),
        });
    }
    if trimmed.is_empty() {
        return Ok(ParsedLabels {
            labels: Some(Vec::new()),
        });
    }

    let labels = input
        .trim_start_matches('\u{feff}')
        .lines()
        .map(|line| Some(line.trim_end_matches('\r').to_string()))
        .collect();
    Ok(ParsedLabels {
        labels: Some(labels),
    })
}

fn parse_label_array(input: &str) -> Result<Vec<Option<String>>, ParseError> {
    let value: Value =
        json5::from_str(input).map_err(|err| ParseError::InvalidJson(err.to_string()))?;
    let Value::Array(entries) = value else {
        return Err(ParseError::InvalidJson("expected an array".to_string()));
    };
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::String(label) => Ok(Some(label)),
            Value::Null => Ok(None),
            _ => Err(ParseError::InvalidEntry { index }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_label_per_line() {
        let parsed = parse_labels("90后\n小鲜肉\r\n文艺青年\n").unwrap();
        assert_eq!(
            parsed.labels,
            Some(vec![
                Some("90后".to_string()),
                Some("小鲜肉".to_string()),
                Some("文艺青年".to_string()),
            ])
        );
    }

    #[test]
    fn blank_lines_inside_the_list_are_empty_labels() {
        let parsed = parse_labels("a\n\nb").unwrap();
        assert_eq!(parsed.labels.unwrap().len(), 3);
    }

    #[test]
    fn json_array_with_nulls() {
        let parsed = parse_labels(r#"["学霸", null, "", 'hahah',]"#).unwrap();
        assert_eq!(
            parsed.labels,
            Some(vec![
                Some("学霸".to_string()),
                None,
                Some(String::new()),
                Some("hahah".to_string()),
            ])
        );
    }

    #[test]
    fn null_and_empty_documents() {
        assert_eq!(parse_labels(" null ").unwrap().labels, None);
        assert_eq!(parse_labels("").unwrap().labels, Some(Vec::new()));
        assert_eq!(parse_labels("[]").unwrap().labels, Some(Vec::new()));
    }

    #[test]
    fn rejects_non_string_entries() {
        let err = parse_labels("[\"a\", 3]").unwrap_err();
        assert!(matches!(err, ParseError::InvalidEntry { index: 1 }));
        assert!(matches!(
            parse_labels("[\"a\""),
            Err(ParseError::InvalidJson(_))
        ));
    }
}
