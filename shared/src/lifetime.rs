use std::cell::Cell;
use std::rc::Rc;

/// Ties in-flight requests to the view that issued them.
///
/// A view holds one `RequestLifetime` and hands a [`LifetimeToken`] to each
/// request it spawns. When the view is torn down it calls [`end`], and any
/// response that arrives afterwards sees a dead token and is dropped
/// instead of writing into state nobody renders.
///
/// [`end`]: RequestLifetime::end
#[derive(Debug, Clone)]
pub struct RequestLifetime {
    live: Rc<Cell<bool>>,
}

/// Read side of a [`RequestLifetime`]
#[derive(Debug, Clone)]
pub struct LifetimeToken {
    live: Rc<Cell<bool>>,
}

impl RequestLifetime {
    pub fn new() -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
        }
    }

    pub fn token(&self) -> LifetimeToken {
        LifetimeToken {
            live: Rc::clone(&self.live),
        }
    }

    pub fn end(&self) {
        self.live.set(false);
    }
}

impl Default for RequestLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl LifetimeToken {
    pub fn is_live(&self) -> bool {
        self.live.get()
    }
}
