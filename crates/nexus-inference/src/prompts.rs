//! Fixed prompt templates for the assistant operations, plus lenient
//! parsing of model output.
//!
//! Models are asked for strict JSON but routinely wrap it in markdown
//! fences or lead with prose; `extract_json` recovers the payload before
//! deserialization.

use serde::de::DeserializeOwned;

use nexus_core::{defaults, Error, PivotEngine, Result};

/// Prompt for constructing a dork from a free-text objective.
pub fn suggest(objective: &str) -> String {
    format!(
        "You are an expert Google Dork generator. Generate a precise Google \
         Dork search query based on this user objective: \"{objective}\". \
         Ensure the syntax is valid for Google Search (using operators like \
         site:, filetype:, intitle:, etc.).\n\n\
         Return strict JSON with exactly these keys:\n\
         {{\"dork\": string, \"explanation\": string, \
         \"risk_level\": \"Low\"|\"Medium\"|\"High\"}}\n\
         No prose outside the JSON."
    )
}

/// Prompt for deep analysis of an existing dork.
pub fn analyze(dork: &str) -> String {
    format!(
        "Act as a senior cyber intelligence analyst. Analyze the following \
         Google Dork for effectiveness, syntax errors, logical fallacies, \
         and noise ratio: \"{dork}\". Think about how Google indexes pages: \
         does this dork target the right parts of the page? Is it too broad? \
         Construct a more precise version.\n\n\
         Return strict JSON with exactly these keys:\n\
         {{\"rating\": integer 0-{max}, \"critique\": [string], \
         \"optimized_dork\": string, \"logic_check\": string, \
         \"estimated_noise\": \"Low\"|\"Medium\"|\"High\"}}\n\
         No prose outside the JSON.",
        max = defaults::ANALYSIS_RATING_MAX
    )
}

/// Prompt for translating a dork's intent to the other search engines.
pub fn translate(dork: &str) -> String {
    let engines: Vec<String> = PivotEngine::ALL.iter().map(|e| e.to_string()).collect();
    format!(
        "Translate the intent of this Google Dork: \"{dork}\" into search \
         queries for {engines}. If a direct translation is not possible \
         (Shodan scans ports, Google scans HTML), provide the closest \
         infrastructure query.\n\n\
         Return a strict JSON array of objects with exactly these keys:\n\
         {{\"engine\": {variants}, \"query\": string, \"explanation\": string}}\n\
         No prose outside the JSON.",
        engines = engines.join(", "),
        variants = engines
            .iter()
            .map(|e| format!("\"{}\"", e))
            .collect::<Vec<_>>()
            .join("|")
    )
}

/// Prompt for the research hub.
pub fn research(topic: &str) -> String {
    format!(
        "Research the following topic related to Google Dorks, OSINT, or \
         security vulnerabilities: \"{topic}\". Provide a concise summary of \
         the syntax, use cases, or recent news related to this query type."
    )
}

/// Prompt for the terminal's simulated live search.
pub fn live_search(dork: &str) -> String {
    format!(
        "Act as a Google Search proxy. Execute this exact search query: \
         \"{dork}\" and return the results you find.\n\n\
         Return a strict JSON array of objects with exactly these keys:\n\
         {{\"title\": string, \"url\": string, \"snippet\": string}}\n\
         Do not add conversational text."
    )
}

/// Recover the JSON payload from model output.
///
/// Strips a markdown code fence (with or without a `json` language tag)
/// and any prose before the first `{`/`[` or after the matching final
/// closer.
pub fn extract_json(text: &str) -> Result<&str> {
    let body = match text.find("```") {
        Some(open) => {
            let after = &text[open + 3..];
            let after = after.strip_prefix("json").unwrap_or(after);
            match after.find("```") {
                Some(close) => &after[..close],
                None => after,
            }
        }
        None => text,
    };

    let start = match (body.find('{'), body.find('[')) {
        (Some(o), Some(a)) => o.min(a),
        (Some(o), None) => o,
        (None, Some(a)) => a,
        (None, None) => {
            return Err(Error::Inference(
                "model response contains no JSON payload".to_string(),
            ))
        }
    };
    let closer = if body.as_bytes()[start] == b'{' { '}' } else { ']' };
    let end = body
        .rfind(closer)
        .filter(|end| *end >= start)
        .ok_or_else(|| Error::Inference("model response contains unterminated JSON".to_string()))?;

    Ok(body[start..=end].trim())
}

/// Extract and deserialize the JSON payload of a model response.
pub fn parse_payload<T: DeserializeOwned>(text: &str) -> Result<T> {
    let json = extract_json(text)?;
    serde_json::from_str(json)
        .map_err(|e| Error::Inference(format!("malformed JSON from model: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_core::DorkSuggestion;

    const PAYLOAD: &str =
        r#"{"dork":"site:example.com","explanation":"scopes to one domain","risk_level":"Low"}"#;

    #[test]
    fn prompts_embed_their_input() {
        assert!(suggest("find exposed backups").contains("find exposed backups"));
        assert!(analyze("inurl:admin").contains("inurl:admin"));
        assert!(translate("intitle:webcam").contains("intitle:webcam"));
        assert!(research("log4shell").contains("log4shell"));
        assert!(live_search("filetype:env").contains("filetype:env"));
    }

    #[test]
    fn translate_names_every_engine() {
        let prompt = translate("inurl:admin");
        for engine in PivotEngine::ALL {
            assert!(prompt.contains(&engine.to_string()), "missing {}", engine);
        }
    }

    #[test]
    fn extracts_bare_json() {
        assert_eq!(extract_json(PAYLOAD).unwrap(), PAYLOAD);
    }

    #[test]
    fn extracts_fenced_json() {
        let fenced = format!("```json\n{}\n```", PAYLOAD);
        assert_eq!(extract_json(&fenced).unwrap(), PAYLOAD);
    }

    #[test]
    fn extracts_fence_without_language_tag() {
        let fenced = format!("```\n{}\n```", PAYLOAD);
        assert_eq!(extract_json(&fenced).unwrap(), PAYLOAD);
    }

    #[test]
    fn extracts_json_after_prose() {
        let chatty = format!("Sure! Here is the query you asked for:\n\n{}", PAYLOAD);
        assert_eq!(extract_json(&chatty).unwrap(), PAYLOAD);
    }

    #[test]
    fn extracts_arrays() {
        let text = "```json\n[{\"engine\":\"Shodan\",\"query\":\"product:webcam\",\"explanation\":\"x\"}]\n```";
        assert!(extract_json(text).unwrap().starts_with('['));
    }

    #[test]
    fn rejects_responses_without_json() {
        assert!(extract_json("I cannot help with that.").is_err());
    }

    #[test]
    fn parse_payload_round_trips_a_suggestion() {
        let fenced = format!("```json\n{}\n```", PAYLOAD);
        let suggestion: DorkSuggestion = parse_payload(&fenced).unwrap();
        assert_eq!(suggestion.dork, "site:example.com");
    }

    #[test]
    fn parse_payload_reports_malformed_json_as_inference_error() {
        let err = parse_payload::<DorkSuggestion>("{\"dork\": }").unwrap_err();
        match err {
            nexus_core::Error::Inference(msg) => assert!(msg.contains("malformed")),
            other => panic!("expected inference error, got {:?}", other),
        }
    }
}
