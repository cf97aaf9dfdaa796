#![allow(missing_docs)]

use crate::providers::{self, ProviderContext};
use crate::suggestions::suggestions_for;
use crate::types::{EngineConfig, OperatingMode, SessionContext};
use crate::{extract_user_message, SignBotPlugin};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::warn;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifest {
    pub name: String,
    pub description: String,
    pub version: String,
    pub language: String,
    pub interop_protocols: Vec<String>,
    pub actions: Vec<ActionManifest>,
    pub providers: Vec<ProviderManifest>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionManifest {
    pub name: String,
    pub description: String,
    pub similes: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderManifest {
    pub name: String,
    pub description: String,
}

impl Default for PluginManifest {
    fn default() -> Self {
        Self {
            name: "signbot".to_string(),
            description: "SignBot keyword and fuzzy intent matching - no LLM required".to_string(),
            version: "1.0.0".to_string(),
            language: "rust".to_string(),
            interop_protocols: vec!["wasm".to_string(), "ffi".to_string(), "ipc".to_string()],
            actions: vec![ActionManifest {
                name: "generate-response".to_string(),
                description: "Answer a question about the recognition app".to_string(),
                similes: vec![
                    "chat".to_string(),
                    "respond".to_string(),
                    "signbot".to_string(),
                    "help".to_string(),
                ],
            }],
            providers: vec![
                ProviderManifest {
                    name: "signbot-greeting".to_string(),
                    description: "Provides the SignBot greeting message".to_string(),
                },
                ProviderManifest {
                    name: "signbot-suggestions".to_string(),
                    description: "Provides context-aware follow-up suggestions".to_string(),
                },
            ],
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<HashMap<String, serde_json::Value>>,
}

impl ActionResult {
    pub fn success_with_text(text: &str) -> Self {
        Self {
            success: true,
            text: Some(text.to_string()),
            error: None,
            data: None,
        }
    }

    pub fn failure(error: &str) -> Self {
        Self {
            success: false,
            text: None,
            error: Some(error.to_string()),
            data: None,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

lazy_static::lazy_static! {
    static ref PLUGIN_INSTANCE: RwLock<SignBotPlugin> = RwLock::new(SignBotPlugin::new());
}

/// Runs `f` against the plugin currently installed by [`init_plugin`]
/// (the bundled catalog until a custom one is loaded).
pub(crate) fn with_active_plugin<R>(f: impl FnOnce(&SignBotPlugin) -> R) -> R {
    let instance = PLUGIN_INSTANCE.read().unwrap_or_else(|e| e.into_inner());
    f(&instance)
}

pub fn get_manifest_json() -> String {
    serde_json::to_string(&PluginManifest::default())
        .unwrap_or_else(|e| format!(r#"{{"error": "{}"}}"#, e))
}

/// Swaps in a custom catalog. An empty config keeps the bundled one; an
/// invalid catalog is rejected and the current one stays in place.
pub fn init_plugin(config_json: &str) -> Result<(), String> {
    if config_json.is_empty() || config_json == "null" || config_json == "{}" {
        return Ok(());
    }
    let plugin = EngineConfig::from_json(config_json)
        .and_then(SignBotPlugin::with_config)
        .map_err(|e| {
            let catalog_error = e.is_catalog_error();
            warn!(error = %e, catalog_error, "Rejected SignBot catalog");
            if catalog_error {
                e.to_string()
            } else {
                format!("Could not parse catalog: {}", e)
            }
        })?;
    let mut instance = PLUGIN_INSTANCE.write().map_err(|e| e.to_string())?;
    *instance = plugin;
    Ok(())
}

pub fn validate_action(name: &str, _memory_json: &str, _state_json: &str) -> bool {
    name == "generate-response"
}

pub fn invoke_action(
    name: &str,
    memory_json: &str,
    state_json: &str,
    options_json: &str,
) -> ActionResult {
    if name != "generate-response" {
        return ActionResult::failure(&format!("Unknown action: {}", name));
    }

    let input = extract_user_input(memory_json, options_json);
    if input.is_empty() {
        return ActionResult::failure("No user input provided");
    }

    let context = extract_session_context(state_json, options_json);
    let result = with_active_plugin(|p| p.generate_response(&input, &context));
    let mut data = HashMap::new();
    data.insert(
        "suggestions".to_string(),
        serde_json::json!(result.suggestions),
    );
    data.insert("strategy".to_string(), serde_json::json!(result.strategy));
    if let Some(category) = &result.category {
        data.insert("category".to_string(), serde_json::json!(category));
    }

    ActionResult {
        data: Some(data),
        ..ActionResult::success_with_text(&result.response_text)
    }
}

pub fn get_provider(name: &str, _memory_json: &str, state_json: &str) -> ProviderResult {
    let context = ProviderContext {
        session: extract_session_context(state_json, "{}"),
        ..ProviderContext::default()
    };
    match providers::get_provider(name, &context) {
        Some(result) => ProviderResult {
            text: Some(result.text),
            values: Some(result.values),
            data: Some(result.data),
        },
        None => ProviderResult::default(),
    }
}

fn extract_user_input(memory_json: &str, options_json: &str) -> String {
    if let Ok(options) = serde_json::from_str::<serde_json::Value>(options_json) {
        for key in ["input", "prompt", "text"] {
            if let Some(value) = options.get(key).and_then(|v| v.as_str()) {
                return extract_user_message(value);
            }
        }
    }

    if let Ok(memory) = serde_json::from_str::<serde_json::Value>(memory_json) {
        if let Some(text) = memory
            .get("content")
            .and_then(|c| c.get("text"))
            .and_then(|v| v.as_str())
        {
            return extract_user_message(text);
        }
    }

    String::new()
}

/// Reads `activeMode` / `toggleActive` from the options, falling back to
/// the state blob, then to defaults.
fn extract_session_context(state_json: &str, options_json: &str) -> SessionContext {
    let mut context = SessionContext::default();
    for raw in [state_json, options_json] {
        let value = match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(v) => v,
            Err(_) => continue,
        };
        if let Some(mode) = value
            .get("activeMode")
            .and_then(|v| v.as_str())
            .and_then(OperatingMode::parse)
        {
            context.active_mode = mode;
        }
        if let Some(toggle) = value.get("toggleActive").and_then(|v| v.as_bool()) {
            context.toggle_active = toggle;
        }
    }
    context
}

#[cfg(feature = "wasm")]
pub mod wasm {
    use super::*;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn wasm_init() {
        console_error_panic_hook::set_once();
    }

    #[wasm_bindgen]
    pub fn get_manifest() -> String {
        get_manifest_json()
    }

    #[wasm_bindgen]
    pub fn init(config_json: &str) -> bool {
        init_plugin(config_json).is_ok()
    }

    #[wasm_bindgen]
    pub fn wasm_validate_action(name: &str, memory_json: &str, state_json: &str) -> bool {
        validate_action(name, memory_json, state_json)
    }

    #[wasm_bindgen]
    pub fn wasm_invoke_action(
        name: &str,
        memory_json: &str,
        state_json: &str,
        options_json: &str,
    ) -> String {
        let result = invoke_action(name, memory_json, state_json, options_json);
        serde_json::to_string(&result)
            .unwrap_or_else(|e| format!(r#"{{"success": false, "error": "{}"}}"#, e))
    }

    #[wasm_bindgen]
    pub fn wasm_get_provider(name: &str, memory_json: &str, state_json: &str) -> String {
        let result = get_provider(name, memory_json, state_json);
        serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string())
    }

    #[wasm_bindgen]
    pub fn signbot_respond(input: &str, active_mode: &str, toggle_active: bool) -> String {
        let context = SessionContext::new(
            OperatingMode::parse(active_mode).unwrap_or_default(),
            toggle_active,
        );
        let result = with_active_plugin(|p| p.generate_response(input, &context));
        serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(feature = "ffi")]
pub mod ffi {
    use super::*;
    use std::ffi::{CStr, CString};
    use std::os::raw::{c_char, c_int};

    fn cstr_to_string(ptr: *const c_char) -> Option<String> {
        if ptr.is_null() {
            return None;
        }
        unsafe { CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string()) }
    }

    fn string_to_cstr(s: String) -> *mut c_char {
        match CString::new(s) {
            Ok(cs) => cs.into_raw(),
            Err(_) => std::ptr::null_mut(),
        }
    }

    #[no_mangle]
    pub extern "C" fn elizaos_get_manifest() -> *mut c_char {
        string_to_cstr(get_manifest_json())
    }

    #[no_mangle]
    pub extern "C" fn elizaos_init(config_json: *const c_char) -> c_int {
        let config = cstr_to_string(config_json).unwrap_or_default();
        match init_plugin(&config) {
            Ok(()) => 0,
            Err(_) => -1,
        }
    }

    #[no_mangle]
    pub extern "C" fn elizaos_invoke_action(
        name: *const c_char,
        memory_json: *const c_char,
        state_json: *const c_char,
        options_json: *const c_char,
    ) -> *mut c_char {
        let name = match cstr_to_string(name) {
            Some(s) => s,
            None => {
                return string_to_cstr(r#"{"success": false, "error": "Invalid name"}"#.to_string())
            }
        };
        let memory = cstr_to_string(memory_json).unwrap_or_default();
        let state = cstr_to_string(state_json).unwrap_or_default();
        let options = cstr_to_string(options_json).unwrap_or_else(|| "{}".to_string());

        let result = invoke_action(&name, &memory, &state, &options);
        string_to_cstr(
            serde_json::to_string(&result)
                .unwrap_or_else(|e| format!(r#"{{"success": false, "error": "{}"}}"#, e)),
        )
    }

    #[no_mangle]
    pub extern "C" fn elizaos_get_provider(
        name: *const c_char,
        memory_json: *const c_char,
        state_json: *const c_char,
    ) -> *mut c_char {
        let name = match cstr_to_string(name) {
            Some(s) => s,
            None => return string_to_cstr("{}".to_string()),
        };
        let memory = cstr_to_string(memory_json).unwrap_or_default();
        let state = cstr_to_string(state_json).unwrap_or_default();

        let result = get_provider(&name, &memory, &state);
        string_to_cstr(serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string()))
    }

    #[no_mangle]
    pub extern "C" fn elizaos_validate_action(
        name: *const c_char,
        memory_json: *const c_char,
        state_json: *const c_char,
    ) -> c_int {
        let name = match cstr_to_string(name) {
            Some(s) => s,
            None => return 0,
        };
        let memory = cstr_to_string(memory_json).unwrap_or_default();
        let state = cstr_to_string(state_json).unwrap_or_default();
        validate_action(&name, &memory, &state) as c_int
    }

    /// Frees a string that was allocated and returned by this library.
    ///
    /// # Safety
    ///
    /// - `ptr` must have been returned by one of the `elizaos_*` functions
    ///   that return `*mut c_char`.
    /// - `ptr` must not have been previously freed.
    /// - The string must not be accessed after this call.
    #[no_mangle]
    pub unsafe extern "C" fn elizaos_free_string(ptr: *mut c_char) {
        if !ptr.is_null() {
            let _ = CString::from_raw(ptr);
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpcRequest {
    pub id: u64,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpcResponse {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IpcResponse {
    pub fn success(id: u64, result: serde_json::Value) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: u64, error: &str) -> Self {
        Self {
            id,
            result: None,
            error: Some(error.to_string()),
        }
    }

    fn from_serializable<T: Serialize>(id: u64, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => Self::success(id, v),
            Err(e) => Self::error(id, &e.to_string()),
        }
    }
}

fn param_str<'a>(params: &'a serde_json::Value, key: &str) -> &'a str {
    params.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

fn param_json(params: &serde_json::Value, key: &str, default: &str) -> String {
    params
        .get(key)
        .map(|v| v.to_string())
        .unwrap_or_else(|| default.to_string())
}

fn param_context(params: &serde_json::Value) -> SessionContext {
    params
        .get("context")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

pub fn handle_ipc_request(request: &IpcRequest) -> IpcResponse {
    let params = &request.params;
    match request.method.as_str() {
        "getManifest" => IpcResponse::from_serializable(request.id, &PluginManifest::default()),
        "init" => {
            let config = param_json(params, "config", "{}");
            match init_plugin(&config) {
                Ok(()) => {
                    IpcResponse::success(request.id, serde_json::json!({"initialized": true}))
                }
                Err(e) => IpcResponse::error(request.id, &e),
            }
        }
        "validateAction" => {
            let valid = validate_action(
                param_str(params, "name"),
                &param_json(params, "memory", ""),
                &param_json(params, "state", ""),
            );
            IpcResponse::success(request.id, serde_json::json!({"valid": valid}))
        }
        "invokeAction" => {
            let result = invoke_action(
                param_str(params, "name"),
                &param_json(params, "memory", ""),
                &param_json(params, "state", ""),
                &param_json(params, "options", "{}"),
            );
            IpcResponse::from_serializable(request.id, &result)
        }
        "getProvider" => {
            let result = get_provider(
                param_str(params, "name"),
                &param_json(params, "memory", ""),
                &param_json(params, "state", ""),
            );
            IpcResponse::from_serializable(request.id, &result)
        }
        "generateResponse" => {
            let input = param_str(params, "input");
            let context = param_context(params);
            let result = with_active_plugin(|p| p.generate_response(input, &context));
            IpcResponse::from_serializable(request.id, &result)
        }
        "suggestions" => {
            let context = param_context(params);
            IpcResponse::success(
                request.id,
                serde_json::json!({"suggestions": suggestions_for(&context)}),
            )
        }
        _ => IpcResponse::error(request.id, &format!("Unknown method: {}", request.method)),
    }
}
