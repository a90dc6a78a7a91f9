//! Theme marker classes on the `<html>` element.
//!
//! Exactly one of `theme-light` / `theme-dark` is present after every call
//! to [`ThemeRoot::mark`]. Requires a browser environment; SSR and native
//! builds no-op.

use crate::state::theme::Theme;

/// Target that displays the active theme.
pub trait ThemeRoot {
    fn mark(&mut self, theme: Theme);
}

/// The document root element of the current page.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl ThemeRoot for DocumentRoot {
    fn mark(&mut self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            let class_list = el.class_list();
            let _ = class_list.remove_1(theme.toggled().root_class());
            let _ = class_list.add_1(theme.root_class());
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}
