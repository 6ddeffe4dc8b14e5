/*!
 * Tests for MyMemory response handling
 */

use cascadeanime::errors::ProviderError;
use cascadeanime::providers::TranslationRequest;
use cascadeanime::providers::mymemory::MyMemory;

#[test]
fn test_parseResponse_withTranslatedText_shouldReturnIt() {
    let body = r#"{
        "responseData": { "translatedText": "Hola mundo", "match": 0.98 },
        "responseDetails": "",
        "responseStatus": 200
    }"#;

    assert_eq!(MyMemory::parse_response(200, body).unwrap(), "Hola mundo");
}

#[test]
fn test_parseResponse_withHttpError_shouldReturnApiError() {
    let result = MyMemory::parse_response(429, "Too many requests");

    match result {
        Err(ProviderError::ApiError { status_code, message }) => {
            assert_eq!(status_code, 429);
            assert_eq!(message, "Too many requests");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_parseResponse_withMalformedJson_shouldReturnParseError() {
    let result = MyMemory::parse_response(200, "<html>oops</html>");
    assert!(matches!(result, Err(ProviderError::ParseError(_))));
}

#[test]
fn test_parseResponse_withMissingField_shouldReturnMissingTranslation() {
    for body in [
        r#"{ "responseStatus": 200 }"#,
        r#"{ "responseData": null }"#,
        r#"{ "responseData": {} }"#,
        r#"{ "responseData": { "translatedText": "" } }"#,
    ] {
        let result = MyMemory::parse_response(200, body);
        assert!(matches!(result, Err(ProviderError::MissingTranslation)), "body: {}", body);
    }
}

#[test]
fn test_parseResponse_withStringStatus_shouldStillDecode() {
    let body = r#"{ "responseData": { "translatedText": "Adiós" }, "responseStatus": "200" }"#;
    assert_eq!(MyMemory::parse_response(200, body).unwrap(), "Adiós");
}

#[test]
fn test_requestUrl_shouldCarryContactAddress() {
    let client = MyMemory::new("https://api.mymemory.translated.net", "ops@example.org");
    let url = client
        .request_url(&TranslationRequest::new("One. Two.", "en", "es"))
        .unwrap();

    assert!(url.query_pairs().any(|(k, v)| k == "de" && v == "ops@example.org"));
    assert!(url.query_pairs().any(|(k, v)| k == "q" && v == "One. Two."));
}

#[test]
fn test_parseResponse_withQuotaWarning_shouldReturnApiError() {
    let body = r#"{
        "responseData": { "translatedText": "MYMEMORY WARNING: YOU USED ALL AVAILABLE FREE TRANSLATIONS FOR TODAY." },
        "responseDetails": "MYMEMORY WARNING: YOU USED ALL AVAILABLE FREE TRANSLATIONS FOR TODAY.",
        "responseStatus": 429
    }"#;

    match MyMemory::parse_response(200, body) {
        Err(ProviderError::ApiError { status_code, message }) => {
            assert_eq!(status_code, 429);
            assert!(message.starts_with("MYMEMORY WARNING"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_parseResponse_withStringErrorStatus_shouldReturnApiError() {
    let body = r#"{
        "responseData": { "translatedText": "INVALID LANGUAGE PAIR SPECIFIED" },
        "responseDetails": "",
        "responseStatus": "403"
    }"#;

    match MyMemory::parse_response(200, body) {
        Err(ProviderError::ApiError { status_code, message }) => {
            assert_eq!(status_code, 403);
            assert_eq!(message, "INVALID LANGUAGE PAIR SPECIFIED");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
