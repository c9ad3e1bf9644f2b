use pdf_assistant::presentation::config::{ApiToken, SettingsError, TOKEN_ENV_VAR};

#[test]
fn given_absent_token_when_building_then_returns_missing_token() {
    let result = ApiToken::new(None);

    assert!(matches!(result, Err(SettingsError::MissingToken(name)) if name == TOKEN_ENV_VAR));
}

#[test]
fn given_blank_token_when_building_then_returns_missing_token() {
    assert!(ApiToken::new(Some("   ".to_string())).is_err());
}

#[test]
fn given_token_when_debug_formatting_then_value_is_hidden() {
    let token = ApiToken::new(Some(" hf_secret ".to_string())).unwrap();

    assert_eq!(token.expose(), "hf_secret");
    assert!(!format!("{token:?}").contains("hf_secret"));
}
