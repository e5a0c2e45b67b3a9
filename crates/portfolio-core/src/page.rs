use crate::constants::LOADING_MS;

/// Top-level view shown by the host page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// No 3D capability: static links only, nothing is rendered in 3D.
    Fallback,
    /// Loading overlay is up; the main content is mounted but transparent.
    Loading,
    Ready,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub loading_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            loading_ms: LOADING_MS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PageState {
    cfg: PageConfig,
    view: View,
}

impl PageState {
    /// Start in `Loading` when the probe succeeded, `Fallback` otherwise.
    pub fn new(cfg: PageConfig, capable: bool) -> Self {
        let view = if capable { View::Loading } else { View::Fallback };
        log::info!("[page] start in {view:?}");
        Self { cfg, view }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn loading_ms(&self) -> u32 {
        self.cfg.loading_ms
    }

    /// The loading timer fired. Only moves `Loading` forward.
    pub fn loading_elapsed(&mut self) -> View {
        if self.view == View::Loading {
            self.view = View::Ready;
            log::info!("[page] ready");
        }
        self.view
    }

    /// 3D setup failed after the probe said it would work.
    pub fn degrade(&mut self) -> View {
        if self.view != View::Fallback {
            log::warn!("[page] falling back to static view");
            self.view = View::Fallback;
        }
        self.view
    }

    pub fn shows_main_content(&self) -> bool {
        self.view != View::Fallback
    }

    /// Whether a page-hide should tear the page down. A page kept in the
    /// back/forward cache (`persisted`) comes back as-is, so it stays mounted.
    pub fn unmounts_on_hide(persisted: bool) -> bool {
        !persisted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capable_page_loads_then_readies() {
        let mut page = PageState::new(PageConfig::default(), true);
        assert_eq!(page.view(), View::Loading);
        assert_eq!(page.loading_ms(), 2000);
        assert_eq!(page.loading_elapsed(), View::Ready);
        assert_eq!(page.loading_elapsed(), View::Ready);
    }

    #[test]
    fn fallback_is_terminal() {
        let mut page = PageState::new(PageConfig::default(), false);
        assert_eq!(page.loading_elapsed(), View::Fallback);
        assert!(!page.shows_main_content());

        let mut page = PageState::new(PageConfig::default(), true);
        assert_eq!(page.degrade(), View::Fallback);
        assert_eq!(page.loading_elapsed(), View::Fallback);
    }

    #[test]
    fn cached_page_survives_page_hide() {
        assert!(PageState::unmounts_on_hide(false));
        assert!(!PageState::unmounts_on_hide(true));
    }
}
