use crate::section::SectionId;

type Observer = Box<dyn FnMut(Option<SectionId>)>;

/// The currently open section, if any. Observers hear about real changes only.
#[derive(Default)]
pub struct Selection {
    active: Option<SectionId>,
    observers: Vec<Observer>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    pub fn subscribe(&mut self, observer: impl FnMut(Option<SectionId>) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Open `id`. Returns whether anything changed.
    pub fn select(&mut self, id: SectionId) -> bool {
        self.set(Some(id))
    }

    /// Close the open section. A no-op when nothing is open.
    pub fn close(&mut self) -> bool {
        self.set(None)
    }

    fn set(&mut self, next: Option<SectionId>) -> bool {
        if self.active == next {
            return false;
        }
        log::info!("[page] section {:?} -> {:?}", self.active, next);
        self.active = next;
        for observer in &mut self.observers {
            observer(next);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_only_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut sel = Selection::new();
        let sink = seen.clone();
        sel.subscribe(move |s| sink.borrow_mut().push(s));

        assert!(!sel.close());
        assert!(sel.select(SectionId::Skills));
        assert!(!sel.select(SectionId::Skills));
        assert!(sel.select(SectionId::Resume));
        assert!(sel.close());
        assert_eq!(
            *seen.borrow(),
            vec![Some(SectionId::Skills), Some(SectionId::Resume), None]
        );
        assert_eq!(sel.active(), None);
    }
}
