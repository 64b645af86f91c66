//! Browser binding over jQuery and select2
//!
//! [`DomHost`] patches rendered markup onto a live `<select>` and resolves
//! selectors against the document. [`JQueryEnhancer`] constructs select2
//! instances through the page's global `jQuery`.
//!
//! Locale resources are not fetched here. They must be on the page before the
//! first construction (the `select2/i18n/{locale}` script), since select2
//! resolves `language` synchronously when it is built.
//!
//! jQuery keeps listeners on the element, not on the select2 instance, so the
//! closures backing them are owned by the enhancer and outlive any single
//! [`DomWidget`].

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use js_sys::{Function, Reflect, JSON};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, trace};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::callback::Callback;
use crate::event::{EventName, WidgetEvent};
use crate::markup::Element as Markup;
use crate::options::{ResolvedOptions, DROPDOWN_PARENT_KEY};
use crate::patch::{LiveElement, Patch};
use crate::widget::{Enhancer, Host, WidgetHandle};

#[wasm_bindgen]
extern "C" {
    type JQuery;

    #[wasm_bindgen(js_name = jQuery)]
    fn jquery(target: &JsValue) -> JQuery;

    #[wasm_bindgen(method, catch)]
    fn select2(this: &JQuery, arg: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = val)]
    fn get_val(this: &JQuery) -> JsValue;

    #[wasm_bindgen(method, js_name = val)]
    fn set_val(this: &JQuery, value: &JsValue) -> JQuery;

    #[wasm_bindgen(method)]
    fn trigger(this: &JQuery, event: &str) -> JQuery;

    #[wasm_bindgen(method)]
    fn on(this: &JQuery, event: &str, handler: &Function) -> JQuery;

    #[wasm_bindgen(method)]
    fn off(this: &JQuery, event: &str) -> JQuery;
}

#[derive(Debug, Error)]
pub enum DomError {
    #[error("javascript error: {0}")]
    Js(String),
    #[error("value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{value:?}"))
    }
}

fn to_js(value: &Value) -> Result<JsValue, DomError> {
    let text = serde_json::to_string(value)?;
    Ok(JSON::parse(&text)?)
}

fn from_js(value: &JsValue) -> Value {
    if value.is_undefined() || value.is_null() {
        return Value::Null;
    }
    JSON::stringify(value)
        .ok()
        .and_then(|s| serde_json::from_str(&String::from(s)).ok())
        .unwrap_or(Value::Null)
}

/// Host backed by a live `<select>` element
pub struct DomHost {
    document: web_sys::Document,
    root: web_sys::Element,
    last: Option<Markup>,
}

impl DomHost {
    pub fn new(root: web_sys::Element) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self {
            document,
            root,
            last: None,
        })
    }
}

impl LiveElement for web_sys::Element {
    fn write_attribute(&self, name: &str, text: &str) {
        if let Err(err) = self.set_attribute(name, text) {
            error!(attr = %name, error = %DomError::from(err), "Failed to set attribute");
        }
    }

    fn clear_attribute(&self, name: &str) {
        if let Err(err) = self.remove_attribute(name) {
            error!(attr = %name, error = %DomError::from(err), "Failed to remove attribute");
        }
    }

    fn replace_children(&self, html: &str) {
        self.set_inner_html(html);
    }

    fn selection(&self) -> Value {
        from_js(&jquery(self.as_ref()).get_val())
    }

    fn restore_selection(&self, value: &Value) {
        match to_js(value) {
            Ok(js) => {
                jquery(self.as_ref()).set_val(&js);
            }
            Err(err) => error!(error = %err, "Selection not convertible"),
        }
    }
}

impl Host for DomHost {
    type Element = web_sys::Element;

    fn root_element(&self) -> Option<web_sys::Element> {
        Some(self.root.clone())
    }

    fn query_selector(&self, selector: &str) -> Option<web_sys::Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn commit(&mut self, markup: &Markup) {
        let patch = Patch::between(self.last.as_ref(), markup);
        if patch.is_empty() {
            trace!("Render unchanged, nothing to commit");
        } else {
            patch.apply(&self.root);
        }
        self.last = Some(markup.clone());
    }
}

type Listeners = Rc<RefCell<Vec<(EventName, Closure<dyn FnMut(JsValue)>)>>>;

/// AMD module name select2 registers a locale under
fn locale_module(locale: &str) -> String {
    format!("select2/i18n/{locale}")
}

/// select2's bundled AMD `require`, if select2 is on the page
fn select2_require() -> Option<Function> {
    let mut target: JsValue = js_sys::global().into();
    for key in ["jQuery", "fn", "select2", "amd", "require"] {
        target = Reflect::get(&target, &JsValue::from_str(key)).ok()?;
        if target.is_undefined() || target.is_null() {
            return None;
        }
    }
    target.dyn_into::<Function>().ok()
}

/// select2 through the page's global `jQuery`
pub struct JQueryEnhancer {
    loaded_locales: HashSet<String>,
    listeners: Listeners,
}

impl JQueryEnhancer {
    pub fn new() -> Self {
        Self {
            loaded_locales: HashSet::new(),
            listeners: Rc::default(),
        }
    }
}

impl Default for JQueryEnhancer {
    fn default() -> Self {
        Self::new()
    }
}

impl Enhancer for JQueryEnhancer {
    type Element = web_sys::Element;
    type Handle = DomWidget;

    fn load_locale(&mut self, locale: &str) -> bool {
        if self.loaded_locales.contains(locale) {
            return true;
        }
        let Some(require) = select2_require() else {
            debug!(locale, "Select2 not on the page, locale unavailable");
            return false;
        };
        let module = locale_module(locale);
        match require.call1(&JsValue::NULL, &JsValue::from_str(&module)) {
            Ok(_) => {
                self.loaded_locales.insert(locale.to_string());
                debug!(module = %module, "Widget locale available");
                true
            }
            Err(err) => {
                debug!(module = %module, error = %DomError::from(err), "Widget locale not preloaded");
                false
            }
        }
    }

    fn construct(
        &mut self,
        element: &web_sys::Element,
        options: ResolvedOptions<web_sys::Element>,
    ) -> DomWidget {
        let jq = jquery(element.as_ref());
        let config = match to_js(&Value::Object(options.settings)) {
            Ok(config) => config,
            Err(err) => {
                error!(error = %err, "Widget options not convertible, using defaults");
                js_sys::Object::new().into()
            }
        };
        if let Some(parent) = &options.dropdown_parent {
            let parent = jquery(parent.as_ref());
            if let Err(err) = Reflect::set(&config, &DROPDOWN_PARENT_KEY.into(), parent.as_ref()) {
                error!(error = %DomError::from(err), "Failed to set dropdownParent");
            }
        }
        if let Err(err) = jq.select2(&config) {
            error!(error = %DomError::from(err), "Select2 construction failed");
        }
        debug!("Select2 constructed");
        DomWidget {
            jq,
            listeners: Rc::clone(&self.listeners),
        }
    }
}

/// A live select2 instance
pub struct DomWidget {
    jq: JQuery,
    listeners: Listeners,
}

impl WidgetHandle for DomWidget {
    fn value(&self) -> Value {
        from_js(&self.jq.get_val())
    }

    fn set_value(&mut self, value: &Value) {
        match to_js(value) {
            Ok(js) => {
                self.jq.set_val(&js);
            }
            Err(err) => error!(error = %err, "Value not convertible"),
        }
    }

    fn trigger_change(&mut self) {
        self.jq.trigger("change");
    }

    fn on(&mut self, event: &str, callback: Callback) {
        let name = EventName::parse(event);
        let kind = name.kind.clone();
        let jq = jquery(self.jq.as_ref());
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| {
            callback.call(&WidgetEvent::new(kind.clone(), from_js(&jq.get_val())));
        });
        self.jq.on(event, closure.as_ref().unchecked_ref());
        self.listeners.borrow_mut().push((name, closure));
    }

    fn off(&mut self, event: &str) {
        self.jq.off(event);
        let filter = EventName::parse(event);
        self.listeners
            .borrow_mut()
            .retain(|(name, _)| !name.matched_by(&filter));
    }

    fn destroy(self) {
        if let Err(err) = self.jq.select2(&JsValue::from_str("destroy")) {
            error!(error = %DomError::from(err), "Select2 destroy failed");
        }
    }
}
