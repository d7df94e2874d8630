//! Lenient codec for `?key=value&...` query strings.
//!
//! Parsing never fails: undecodable pairs are skipped, placeholder tokens
//! are dropped. Serialization percent-encodes each list item separately and
//! keeps the separating commas literal, so `provinces=Kigali,Huye` stays
//! readable in the address bar.

/// Tokens treated as "no value" when they show up in a list parameter
const PLACEHOLDER_TOKENS: &[&str] = &["undefined", "null"];

/// `(key, value)` pairs in URL order with decoded keys and values still
/// percent-encoded. List parameters are split on literal commas before
/// their items are decoded.
pub fn parse_raw_pairs(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key)?;
            (!key.is_empty()).then(|| (key, value.to_string()))
        })
        .collect()
}

/// Decoded `(key, value)` pairs in URL order
pub fn parse_pairs(search: &str) -> Vec<(String, String)> {
    parse_raw_pairs(search)
        .into_iter()
        .filter_map(|(key, value)| Some((key, decode_component(&value)?)))
        .collect()
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(e) => {
            log::warn!("skipping undecodable query component `{}`: {}", raw, e);
            None
        }
    }
}

/// Last value of `key`, if present
pub fn get_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn is_placeholder(token: &str) -> bool {
    token.is_empty() || PLACEHOLDER_TOKENS.contains(&token)
}

/// Trimmed, non-placeholder, de-duplicated values in first-seen order
pub fn sanitize_values<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for value in values {
        let token = value.as_ref().trim();
        if is_placeholder(token) || out.iter().any(|v| v == token) {
            continue;
        }
        out.push(token.to_string());
    }
    out
}

/// Comma-separated list parameter, given still encoded. Each item is
/// decoded on its own, so an encoded comma (`%2C`) stays inside its value.
pub fn split_list(raw: &str) -> Vec<String> {
    sanitize_values(raw.split(',').filter_map(decode_component))
}

/// Single text parameter; placeholders count as absent
pub fn clean_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if is_placeholder(trimmed) {
        String::new()
    } else {
        trimmed.to_string()
    }
}

/// 1-based page number; anything unparsable or < 1 becomes 1
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

pub fn encode_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| urlencoding::encode(v).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// Builds a search string (with leading `?`, or empty) from the pairs of
/// `existing` whose keys are not in `owned_keys`, followed by `ours`.
/// `ours` values must already be encoded.
pub fn merge_search(existing: &str, owned_keys: &[&str], ours: &[(String, String)]) -> String {
    let foreign = existing
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let raw_key = pair.split_once('=').map(|(k, _)| k).unwrap_or(pair);
            let key = decode_component(raw_key).unwrap_or_else(|| raw_key.to_string());
            !owned_keys.contains(&key.as_str())
        })
        .map(str::to_string);

    let parts: Vec<String> = foreign
        .chain(ours.iter().map(|(k, v)| format!("{}={}", urlencoding::encode(k), v)))
        .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs_decodes() {
        let pairs = parse_pairs("?q=hello+world&provinces=Kigali,Huye&name=a%20b");
        assert_eq!(get_param(&pairs, "q"), Some("hello world"));
        assert_eq!(get_param(&pairs, "provinces"), Some("Kigali,Huye"));
        assert_eq!(get_param(&pairs, "name"), Some("a b"));
        assert_eq!(get_param(&pairs, "missing"), None);
    }

    #[test]
    fn test_parse_pairs_tolerates_garbage() {
        let pairs = parse_pairs("&&=x&flag&q=%E0%A4%A");
        assert_eq!(get_param(&pairs, "flag"), Some(""));
        assert_eq!(get_param(&pairs, "q"), None);
        assert!(pairs.iter().all(|(k, _)| !k.is_empty()));
    }

    #[test]
    fn test_split_list_drops_placeholders() {
        assert_eq!(split_list("Kigali,,undefined, Huye ,null,Kigali"), vec!["Kigali", "Huye"]);
        assert!(split_list("").is_empty());
        assert!(split_list("undefined").is_empty());
    }

    #[test]
    fn test_encoded_comma_stays_inside_value() {
        let values = vec!["Math, Physics".to_string(), "HEG".to_string()];
        let encoded = encode_list(&values);
        assert_eq!(encoded, "Math%2C%20Physics,HEG");

        let pairs = parse_raw_pairs(&format!("?combinations={}", encoded));
        assert_eq!(split_list(get_param(&pairs, "combinations").unwrap()), values);
    }

    #[test]
    fn test_split_list_skips_undecodable_item() {
        assert_eq!(split_list("Kigali,%E0%A4%A,Huye+Town"), vec!["Kigali", "Huye Town"]);
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  abc "), "abc");
        assert_eq!(clean_text("undefined"), "");
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("-2")), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(None), 1);
    }

    #[test]
    fn test_encode_list_keeps_commas() {
        let values = vec!["Kigali".to_string(), "Eastern Province".to_string()];
        assert_eq!(encode_list(&values), "Kigali,Eastern%20Province");
    }

    #[test]
    fn test_merge_search_keeps_foreign_params() {
        let ours = vec![("q".to_string(), "abc".to_string())];
        assert_eq!(
            merge_search("?view=schools&q=old&page=2", &["q", "page"], &ours),
            "?view=schools&q=abc"
        );
        assert_eq!(merge_search("?q=old", &["q"], &[]), "");
    }
}
