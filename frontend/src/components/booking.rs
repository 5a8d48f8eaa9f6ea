//! Contact and booking actions.
//!
//! Buttons on the page send an action key; the key becomes a
//! [`BookingIntent`], the intent is looked up in the link table and the
//! result is either opened by the [`Navigator`] or, for anything the table
//! does not know, shown as a notice.

use log::{info, warn};
use thiserror::Error;
use yew::Callback;

use crate::content::ContactLinks;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingIntent {
    Phone,
    Email,
    WhatsApp,
    Book,
    Unknown(String),
}

impl BookingIntent {
    pub fn from_action(action: &str) -> Self {
        match action.trim().to_ascii_lowercase().as_str() {
            "phone" => BookingIntent::Phone,
            "email" => BookingIntent::Email,
            "whatsapp" => BookingIntent::WhatsApp,
            "book" | "trial" => BookingIntent::Book,
            _ => BookingIntent::Unknown(action.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowTarget {
    SameTab,
    NewTab,
}

impl WindowTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowTarget::SameTab => "_self",
            WindowTarget::NewTab => "_blank",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub uri: String,
    pub window: WindowTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("unrecognized contact action `{0}`")]
    UnrecognizedIntent(String),
}

/// The dispatch table. URIs are not validated.
pub fn resolve(intent: &BookingIntent, links: &ContactLinks) -> Result<NavigationRequest, DispatchError> {
    let (uri, window) = match intent {
        BookingIntent::Phone => (&links.phone, WindowTarget::SameTab),
        BookingIntent::Email => (&links.email, WindowTarget::SameTab),
        BookingIntent::WhatsApp => (&links.whatsapp, WindowTarget::SameTab),
        BookingIntent::Book => (&links.booking, WindowTarget::NewTab),
        BookingIntent::Unknown(action) => {
            return Err(DispatchError::UnrecognizedIntent(action.clone()))
        }
    };
    Ok(NavigationRequest {
        uri: uri.clone(),
        window,
    })
}

pub trait Navigator {
    fn open(&self, request: &NavigationRequest);
    /// Blocking notice shown to the visitor.
    fn notify(&self, message: &str);
}

/// `window.open` / `window.alert`. A blocked popup goes unnoticed.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open(&self, request: &NavigationRequest) {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(&request.uri, request.window.as_str());
        }
    }

    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

pub fn dispatch<N: Navigator>(intent: BookingIntent, links: &ContactLinks, notice: &str, navigator: &N) {
    match resolve(&intent, links) {
        Ok(request) => {
            info!("contact: opening {:?} link", intent);
            navigator.open(&request);
        }
        Err(e) => {
            warn!("contact: {}", e);
            navigator.notify(notice);
        }
    }
}

/// Click handler dispatching `action` through the browser.
pub fn on_action<E: 'static>(action: &str, links: &ContactLinks, notice: &str) -> Callback<E> {
    let intent = BookingIntent::from_action(action);
    let links = links.clone();
    let notice = notice.to_string();
    Callback::from(move |_: E| {
        dispatch(intent.clone(), &links, &notice, &BrowserNavigator);
    })
}
