//! ホストページからの設定読み込み
//!
//! `<script id="c2pa-inspect-config" type="application/json">{"endpoint": "..."}</script>`
//! があればそれを使い、なければ既定値

use c2pa_inspect_common::ServiceConfig;
use gloo::console;

const CONFIG_ELEMENT_ID: &str = "c2pa-inspect-config";

pub fn load_service_config() -> ServiceConfig {
    let embedded = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    resolve(embedded.as_deref())
}

fn resolve(embedded: Option<&str>) -> ServiceConfig {
    let Some(json) = embedded.map(str::trim).filter(|s| !s.is_empty()) else {
        return ServiceConfig::default();
    };

    match ServiceConfig::from_json(json) {
        Ok(config) => config,
        Err(e) => {
            console::warn!(format!("Ignoring invalid {}: {}", CONFIG_ELEMENT_ID, e));
            ServiceConfig::default()
        }
    }
}
