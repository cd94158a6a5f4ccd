//! Station sidebar: directory fetch, scan trigger, PATCH tuning, and the
//! show/hide animation. Consumed by the controller's sibling UI only; the
//! renderer never touches any of this.

use std::cell::RefCell;

use radio_core::{parse_directory, ScanStatus, Station, SCAN_FAILED_RESET_MS, SCAN_PATH, STATIONS_PATH};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::dom;

// Highlighted sidebar entry; wasm is single-threaded so this is just a slot.
thread_local! {
    static SELECTED: RefCell<Option<web::Element>> = const { RefCell::new(None) };
}

async fn request(url: &str, method: &str) -> Result<(u16, String), JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let init = web::RequestInit::new();
    init.set_method(method);
    let request = web::Request::new_with_str_and_init(url, &init)?;
    let resp: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    let status = resp.status();
    let body = JsFuture::from(resp.text()?)
        .await?
        .as_string()
        .unwrap_or_default();
    Ok((status, body))
}

/// Highlight the tuned entry, clearing any previous highlight. A failed tune
/// clears the selection entirely.
fn update_selection(entry: &web::Element, tuned: bool) {
    SELECTED.with(|slot| {
        if let Some(prev) = slot.borrow_mut().take() {
            let _ = prev.set_attribute("style", "");
        }
        if tuned {
            let _ = entry.set_attribute("style", "background-color: green; border-radius: 10px");
            *slot.borrow_mut() = Some(entry.clone());
        } else {
            let _ = entry.set_attribute("style", "");
        }
    });
}

fn tune(url: String, entry: web::Element) {
    spawn_local(async move {
        match request(&url, "PATCH").await {
            Ok((204, _)) => update_selection(&entry, true),
            Ok((status, _)) => {
                log::warn!("tune {} returned {}", url, status);
                update_selection(&entry, false);
            }
            Err(e) => {
                log::error!("tune request error: {:?}", e);
                update_selection(&entry, false);
            }
        }
    });
}

fn set_scan_status(document: &web::Document, status: ScanStatus) {
    if let Some(button) = document.get_element_by_id("scan-button") {
        let _ = button.set_attribute("style", status.style());
        button.set_text_content(Some(status.label()));
    }
}

fn render_station_list(document: &web::Document, stations: &[Station]) {
    let Some(container) = document.get_element_by_id("station-items") else {
        return;
    };
    container.set_inner_html("");
    for station in stations {
        let Ok(entry) = document.create_element("a") else {
            continue;
        };
        let _ = entry.set_attribute("href", "javascript:void(0)");
        entry.set_text_content(Some(&station.name));
        let url = station.url.clone();
        let entry_for_click = entry.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            tune(url.clone(), entry_for_click.clone());
        }) as Box<dyn FnMut()>);
        let _ = entry.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        let _ = container.append_child(&entry);
    }
}

async fn fetch_directory(document: &web::Document, path: &str) -> Result<(), JsValue> {
    let (status, body) = request(path, "GET").await?;
    if status != 200 {
        return Err(JsValue::from_str(&format!("{} returned {}", path, status)));
    }
    match parse_directory(&body) {
        Ok(stations) => {
            render_station_list(document, &stations);
            Ok(())
        }
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    }
}

/// Initial directory load at page startup.
pub fn load_stations(document: &web::Document) {
    let document = document.clone();
    spawn_local(async move {
        if let Err(e) = fetch_directory(&document, STATIONS_PATH).await {
            log::error!("station list load failed: {:?}", e);
        }
    });
}

/// Scan trigger: the button reflects scanning/failed/idle, and a failure
/// resets back to idle after a short delay.
pub fn scan_stations(document: &web::Document) {
    set_scan_status(document, ScanStatus::Scanning);
    let document = document.clone();
    spawn_local(async move {
        match fetch_directory(&document, SCAN_PATH).await {
            Ok(()) => set_scan_status(&document, ScanStatus::Idle),
            Err(e) => {
                log::error!("scan failed: {:?}", e);
                set_scan_status(&document, ScanStatus::Failed);
                let document = document.clone();
                dom::set_timeout(
                    move || set_scan_status(&document, ScanStatus::Idle),
                    SCAN_FAILED_RESET_MS,
                );
            }
        }
    });
}

/// Slide the sidebar away (and back), shifting the main view with it.
pub fn toggle_sidebar(document: &web::Document) {
    let Some(sidebar) = document.get_element_by_id("station-list") else {
        return;
    };
    let visible = !matches!(sidebar.get_attribute("data-visible").as_deref(), Some("0"));
    let _ = sidebar.set_attribute("data-visible", if visible { "0" } else { "1" });

    let (sidebar_style, header_style, main_style) = if visible {
        ("width: 0", "color: #222", "margin-left: 0")
    } else {
        ("width: 250px", "color: #ccc", "margin-left: 250px")
    };

    let _ = sidebar.set_attribute("style", sidebar_style);
    if let Some(header) = document.get_element_by_id("station-list-header") {
        let _ = header.set_attribute("style", header_style);
    }
    if let Some(main) = document.get_element_by_id("main") {
        let _ = main.set_attribute("style", main_style);
    }
}
