//! Runs in its own binary: `init_plugin` replaces the process-wide plugin.

use elizaos_plugin_signbot::actions::GenerateResponseAction;
use elizaos_plugin_signbot::interop::{get_provider, init_plugin, invoke_action};
use elizaos_plugin_signbot::SessionContext;
use pretty_assertions::assert_eq;

const WEATHER_CATALOG: &str = r#"{
    "greeting": "Custom greeting",
    "fallback": "Ask me about the weather.",
    "categories": [
        {"key": "weather", "responses": ["It will rain."]}
    ],
    "patterns": [
        {"category": "weather", "weight": 0.9, "keywords": ["rain"]}
    ]
}"#;

#[test]
fn test_installed_catalog_reaches_every_entry_point() {
    init_plugin(WEATHER_CATALOG).unwrap();

    let greeting = get_provider("signbot-greeting", "{}", "{}");
    assert_eq!(greeting.text.as_deref(), Some("Custom greeting"));
    let data = greeting.data.unwrap();
    assert_eq!(data["suggestions"][0], "About Project");

    let reply = GenerateResponseAction.handler("will it rain today", &SessionContext::default());
    assert!(reply.success);
    assert_eq!(reply.text.as_deref(), Some("It will rain."));

    let invoked = invoke_action(
        "generate-response",
        r#"{"content": {"text": "User: rain tomorrow?"}}"#,
        "{}",
        "{}",
    );
    assert_eq!(invoked.text.as_deref(), Some("It will rain."));
    assert_eq!(invoked.data.unwrap()["category"], "weather");

    let unknown = invoke_action("generate-response", "{}", "{}", r#"{"input": "hello"}"#);
    assert_eq!(unknown.text.as_deref(), Some("Ask me about the weather."));

    // A rejected catalog leaves the installed one in place.
    assert!(init_plugin(r#"{"fallback": "x", "categories": []}"#).is_err());
    let greeting = get_provider("signbot-greeting", "{}", "{}");
    assert_eq!(greeting.text.as_deref(), Some("Custom greeting"));
}
