//! Component trait and the mount state machine driving it

use tracing::{debug, trace};

use crate::markup::Element;
use crate::widget::Host;

/// A component rendered from props, with lifecycle hooks for imperative work
///
/// Components follow these rules:
/// 1. `render` is a pure function of props
/// 2. Hooks run after the host has committed the matching render, so the
///    root element reflects the props the hook receives
/// 3. Hooks never fail; out-of-order calls are no-ops inside the component
///
/// Components do not drive themselves. A [`Mount`] owns the props and calls
/// the hooks in order, so any host framework's lifecycle callbacks can be
/// mapped onto `attach`, `update` and `detach`.
pub trait Component<H: Host> {
    type Props;

    /// Render the component's markup
    fn render(&self, props: &Self::Props) -> Element;

    /// The root element exists and holds the first render
    #[allow(unused_variables)]
    fn on_attach(&mut self, host: &H, props: &Self::Props) {}

    /// Props changed and the new render has been committed
    #[allow(unused_variables)]
    fn on_props_change(&mut self, host: &H, prev: &Self::Props, next: &Self::Props) {}

    /// The root element is about to go away
    #[allow(unused_variables)]
    fn on_detach(&mut self, host: &H, props: &Self::Props) {}
}

/// Lifecycle phase of a mounted component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unmounted,
    Mounted,
    Detached,
}

/// Drives a component through attach, update and detach
///
/// ```ignore
/// let mut mount = Mount::new(host, Select::new(enhancer), props);
/// mount.attach();
/// mount.update(next_props);
/// mount.detach();
/// ```
pub struct Mount<H: Host, C: Component<H>> {
    host: H,
    component: C,
    props: C::Props,
    phase: Phase,
}

impl<H: Host, C: Component<H>> Mount<H, C> {
    pub fn new(host: H, component: C, props: C::Props) -> Self {
        Self {
            host,
            component,
            props,
            phase: Phase::Unmounted,
        }
    }

    /// Commit the first render and run `on_attach`
    ///
    /// Ignored unless the component is unmounted.
    pub fn attach(&mut self) {
        if self.phase != Phase::Unmounted {
            trace!(phase = ?self.phase, "Attach ignored");
            return;
        }
        let markup = self.component.render(&self.props);
        self.host.commit(&markup);
        self.phase = Phase::Mounted;
        debug!("Component attached");
        self.component.on_attach(&self.host, &self.props);
    }

    /// Replace the props, committing the new render
    ///
    /// While mounted, `on_props_change` runs after the commit. Before attach
    /// the props are only stored; after detach they are dropped.
    pub fn update(&mut self, next: C::Props) {
        match self.phase {
            Phase::Unmounted => self.props = next,
            Phase::Mounted => {
                let markup = self.component.render(&next);
                self.host.commit(&markup);
                let prev = std::mem::replace(&mut self.props, next);
                self.component
                    .on_props_change(&self.host, &prev, &self.props);
            }
            Phase::Detached => trace!("Update after detach ignored"),
        }
    }

    /// Run `on_detach`; the mount cannot be reattached afterwards
    pub fn detach(&mut self) {
        if self.phase != Phase::Mounted {
            trace!(phase = ?self.phase, "Detach ignored");
            return;
        }
        self.component.on_detach(&self.host, &self.props);
        self.phase = Phase::Detached;
        debug!("Component detached");
    }

    /// Render the current props without committing
    pub fn render(&self) -> Element {
        self.component.render(&self.props)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn props(&self) -> &C::Props {
        &self.props
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
