//! Viewport classification shared through context.
//!
//! Exactly one of desktop / tablet / mobile is active, derived from the current
//! window width on every resize.

use leptos::prelude::*;
use web_sys::window;

pub const DESKTOP_MIN_WIDTH: f64 = 1280.0;
pub const TABLET_MIN_WIDTH: f64 = 768.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ViewportClass {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl ViewportClass {
    /// desktop ≥ 1280, tablet 768..1280, mobile < 768
    pub fn classify(width: f64) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            ViewportClass::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            ViewportClass::Tablet
        } else {
            ViewportClass::Mobile
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewportClass::Desktop => "Desktop Screen",
            ViewportClass::Tablet => "Tablet Screen",
            ViewportClass::Mobile => "Mobile Screen",
        }
    }
}

/// Flag triple published to descendants.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MediaInfo {
    pub is_desktop: bool,
    pub is_tablet: bool,
    pub is_mobile: bool,
}

impl MediaInfo {
    pub fn from_width(width: f64) -> Self {
        ViewportClass::classify(width).into()
    }

    pub fn class(&self) -> ViewportClass {
        if self.is_mobile {
            ViewportClass::Mobile
        } else if self.is_tablet {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }
}

impl Default for MediaInfo {
    fn default() -> Self {
        ViewportClass::Desktop.into()
    }
}

impl From<ViewportClass> for MediaInfo {
    fn from(class: ViewportClass) -> Self {
        Self {
            is_desktop: class == ViewportClass::Desktop,
            is_tablet: class == ViewportClass::Tablet,
            is_mobile: class == ViewportClass::Mobile,
        }
    }
}

/// Context type: read-only for consumers.
#[derive(Clone, Copy)]
pub struct MediaInfoContext {
    pub info: Memo<MediaInfo>,
}

fn current_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(DESKTOP_MIN_WIDTH)
}

/// Tracks the window width and provides [`MediaInfoContext`] to children.
#[component]
pub fn MediaInfoProvider(children: Children) -> impl IntoView {
    let width = RwSignal::new(current_width());

    let handle = window_event_listener(leptos::ev::resize, move |_| {
        width.set(current_width());
    });
    on_cleanup(move || handle.remove());

    // Memo only notifies when a breakpoint is crossed
    let info = Memo::new(move |_| MediaInfo::from_width(width.get()));

    Effect::new(move |_| {
        log::debug!("viewport: {}", info.get().class().label());
    });

    provide_context(MediaInfoContext { info });

    children()
}

/// Current viewport flags; desktop when no provider is mounted.
pub fn use_media_info() -> Signal<MediaInfo> {
    match use_context::<MediaInfoContext>() {
        Some(ctx) => ctx.info.into(),
        None => Signal::derive(MediaInfo::default),
    }
}
