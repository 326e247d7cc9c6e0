// Platform bindings for hosting elements

/// Browser binding built on web-sys
///
/// Attaches a shadow root to a host element, builds the internal subtree and
/// wires the attribute bridge (a `MutationObserver` filtered to the observed
/// attributes) and the `slotchange` listener to a [`WebButton`].
///
/// [`WebButton`]: crate::kit::components::button::WebButton
#[cfg(feature = "web")]
pub mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{
        Document, Element, HtmlButtonElement, HtmlElement, HtmlLinkElement, HtmlSlotElement,
        MutationObserver, MutationObserverInit, MutationRecord, ShadowRootInit, ShadowRootMode, Text,
    };

    use crate::component::{AttributeChange, AttributeSource, CustomElement, ElementRegistry};
    use crate::kit::components::button::{RenderState, WebButton};
    use crate::renderer::{ButtonSurface, SlotContent, SCREEN_READER_CLASS};
    use crate::Error;

    fn platform_error(err: JsValue) -> Error {
        Error::Platform(format!("{err:?}"))
    }

    fn log_failure<T>(operation: &str, result: Result<T, JsValue>) {
        if let Err(err) = result {
            log::warn!("{operation} failed: {err:?}");
        }
    }

    impl AttributeSource for Element {
        fn get_attribute(&self, name: &str) -> Option<String> {
            Element::get_attribute(self, name)
        }

        fn has_attribute(&self, name: &str) -> bool {
            Element::has_attribute(self, name)
        }
    }

    impl SlotContent for HtmlSlotElement {
        fn assigned_node_count(&self) -> usize {
            self.assigned_nodes().length() as usize
        }
    }

    /// The internal `<button>` inside a shadow root
    #[derive(Debug)]
    pub struct WebSurface {
        document: Document,
        button: HtmlButtonElement,
        label: Text,
        accessibility: Option<Element>,
        icon: Option<Element>,
    }

    impl WebSurface {
        fn new(document: &Document) -> Result<Self, Error> {
            let button = document
                .create_element("button")
                .map_err(platform_error)?
                .dyn_into::<HtmlButtonElement>()
                .map_err(|_| Error::Platform("<button> is not an HtmlButtonElement".to_string()))?;
            let label = document.create_text_node("");
            button.append_child(&label).map_err(platform_error)?;

            Ok(Self {
                document: document.clone(),
                button,
                label,
                accessibility: None,
                icon: None,
            })
        }

        /// The internal button element
        pub fn button(&self) -> &HtmlButtonElement {
            &self.button
        }
    }

    impl ButtonSurface for WebSurface {
        fn set_id(&mut self, id: &str) {
            self.button.set_id(id);
        }

        fn set_disabled(&mut self, disabled: bool) {
            self.button.set_disabled(disabled);
        }

        fn add_class(&mut self, class: &str) {
            log_failure("classList.add", self.button.class_list().add_1(class));
        }

        fn remove_class(&mut self, class: &str) {
            log_failure("classList.remove", self.button.class_list().remove_1(class));
        }

        fn set_label_text(&mut self, text: &str) {
            self.label.set_data(text);
        }

        fn create_accessibility_node(&mut self, text: &str) {
            match self.document.create_element("span") {
                Ok(span) => {
                    span.set_class_name(SCREEN_READER_CLASS);
                    span.set_text_content(Some(text));
                    log_failure("appendChild", self.button.append_child(&span));
                    self.accessibility = Some(span);
                }
                Err(err) => log::warn!("createElement(span) failed: {err:?}"),
            }
        }

        fn set_accessibility_text(&mut self, text: &str) {
            if let Some(span) = &self.accessibility {
                span.set_text_content(Some(text));
            }
        }

        fn create_icon_node(&mut self, classes: &[String]) {
            match self.document.create_element("i") {
                Ok(icon) => {
                    icon.set_class_name(&classes.join(" "));
                    log_failure("setAttribute", icon.set_attribute("aria-hidden", "true"));
                    log_failure(
                        "insertBefore",
                        self.button.insert_before(&icon, Some(&self.label)),
                    );
                    self.icon = Some(icon);
                }
                Err(err) => log::warn!("createElement(i) failed: {err:?}"),
            }
        }

        fn set_icon_classes(&mut self, classes: &[String]) {
            if let Some(icon) = &self.icon {
                icon.set_class_name(&classes.join(" "));
            }
        }
    }

    type MutationCallback = Closure<dyn FnMut(js_sys::Array, MutationObserver)>;

    /// A button mounted into a host element; dropping it stops observation
    pub struct MountedButton {
        element: Rc<RefCell<WebButton<WebSurface>>>,
        observer: MutationObserver,
        _on_mutation: MutationCallback,
        _on_slot_change: Closure<dyn FnMut()>,
    }

    impl MountedButton {
        /// The state of the last render pass
        pub fn state(&self) -> Option<RenderState> {
            self.element.borrow().state().cloned()
        }
    }

    impl Drop for MountedButton {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    /// Mount a button into `host` using the definition registered for the
    /// configured tag name
    pub fn mount(registry: &ElementRegistry, host: &HtmlElement) -> Result<MountedButton, Error> {
        let definition = registry.get(&registry.options().tag_name)?;
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| Error::Init("no document available".to_string()))?;

        let shadow = host
            .attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
            .map_err(platform_error)?;

        let link = document
            .create_element("link")
            .map_err(platform_error)?
            .dyn_into::<HtmlLinkElement>()
            .map_err(|_| Error::Platform("<link> is not an HtmlLinkElement".to_string()))?;
        link.set_rel("stylesheet");
        link.set_href(&definition.stylesheet_href);

        let surface = WebSurface::new(&document)?;
        let slot = document
            .create_element("slot")
            .map_err(platform_error)?
            .dyn_into::<HtmlSlotElement>()
            .map_err(|_| Error::Platform("<slot> is not an HtmlSlotElement".to_string()))?;

        shadow.append_child(&link).map_err(platform_error)?;
        shadow.append_child(surface.button()).map_err(platform_error)?;
        shadow.append_child(&slot).map_err(platform_error)?;

        let element = Rc::new(RefCell::new(
            WebButton::new(surface).warn_on_missing_id(registry.options().warn_on_missing_id),
        ));
        let host_element: Element = host.clone().into();

        // Attributes present before mounting are delivered like fresh additions.
        for name in &definition.observed_attributes {
            if let Some(value) = host_element.get_attribute(name) {
                let change = AttributeChange::new(*name, None, Some(value));
                element
                    .borrow_mut()
                    .attribute_changed(&host_element, &change);
            }
        }
        element.borrow_mut().connected(&host_element);

        let on_slot_change = {
            let element = Rc::clone(&element);
            let slot = slot.clone();
            Closure::<dyn FnMut()>::new(move || element.borrow_mut().slot_changed(&slot))
        };
        slot.add_event_listener_with_callback("slotchange", on_slot_change.as_ref().unchecked_ref())
            .map_err(platform_error)?;

        let on_mutation: MutationCallback = {
            let element = Rc::clone(&element);
            let host = host_element.clone();
            let definition = definition.clone();
            Closure::new(move |records: js_sys::Array, _observer: MutationObserver| {
                for record in records.iter() {
                    let Ok(record) = record.dyn_into::<MutationRecord>() else {
                        continue;
                    };
                    let Some(name) = record
                        .attribute_name()
                        .and_then(|name| definition.observed_name(&name))
                    else {
                        continue;
                    };
                    let new_value = host.get_attribute(name);
                    let change = AttributeChange::new(name, record.old_value(), new_value);
                    element.borrow_mut().attribute_changed(&host, &change);
                }
            })
        };

        let observer =
            MutationObserver::new(on_mutation.as_ref().unchecked_ref()).map_err(platform_error)?;
        let init = MutationObserverInit::new();
        init.set_attributes(true);
        init.set_attribute_old_value(true);
        let filter: js_sys::Array = definition
            .attribute_filter()
            .iter()
            .map(|name| JsValue::from_str(name))
            .collect();
        init.set_attribute_filter(&filter);
        observer
            .observe_with_options(&host_element, &init)
            .map_err(platform_error)?;

        log::debug!("Mounted <{}>", definition.tag_name);

        Ok(MountedButton {
            element,
            observer,
            _on_mutation: on_mutation,
            _on_slot_change: on_slot_change,
        })
    }
}
