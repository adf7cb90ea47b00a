//! Viewport-triggered reveal scheduler.
//!
//! Each revealable region on the page is guarded by a [`VisibilityGate`]: a
//! one-shot, monotonic flag that flips false→true the first time the region's
//! on-screen intersection ratio crosses a threshold, and never flips back.
//!
//! The platform's visibility primitive is consumed through the
//! [`VisibilityHost`] seam. `observe` hands back an owned
//! [`ObservationBinding`] — the live subscription — which the gate releases on
//! both exit paths: immediately when the first qualifying sample arrives (so
//! no second sample can ever race the first), and on teardown when the gate is
//! dropped before anything qualified. Release is idempotent on every path.
//!
//! When the host has no visibility primitive at all, the gate fails open:
//! `visible` is true from construction. Content must never become permanently
//! invisible because a platform capability is missing.
//!
//! [`project`] is the animator half: a pure function from [`RevealState`] to
//! the two-valued presentation (hidden/offset vs shown/neutral) plus the
//! caller's stagger delay. The actual transition — duration, easing — is
//! delegated to the CSS emitted by the config layer; nothing here interpolates
//! frames.

/// Default intersection ratio that counts as "entered the viewport".
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Identifies one revealable region to the host primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(pub u32);

/// A live subscription linking a region to the visibility primitive.
///
/// Implementations must make `release` idempotent and should also release in
/// `Drop`, so a binding can never outlive its gate.
pub trait ObservationBinding {
    fn release(&mut self);
}

/// The host's visibility-detection primitive.
///
/// `observe` returns `None` when the primitive is unavailable; gates treat
/// that as fail-open rather than an error.
pub trait VisibilityHost {
    type Binding: ObservationBinding;

    fn observe(&self, region: RegionId, threshold: f32) -> Option<Self::Binding>;
}

/// A host with no visibility primitive. Every gate constructed against it
/// fails open. Used for the static (no-script) rendering mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsentHost;

/// Binding type for [`AbsentHost`]; uninhabited, since `observe` never
/// succeeds there.
#[derive(Debug)]
pub enum NeverBinding {}

impl ObservationBinding for NeverBinding {
    fn release(&mut self) {
        match *self {}
    }
}

impl VisibilityHost for AbsentHost {
    type Binding = NeverBinding;

    fn observe(&self, _region: RegionId, _threshold: f32) -> Option<NeverBinding> {
        None
    }
}

/// Reveal flag plus the caller's stagger delay. Owned exclusively by one
/// gate; mutated at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    visible: bool,
    delay_ms: u32,
}

impl RevealState {
    pub fn hidden(delay_ms: u32) -> Self {
        Self {
            visible: false,
            delay_ms,
        }
    }

    pub fn shown(delay_ms: u32) -> Self {
        Self {
            visible: true,
            delay_ms,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

/// One-shot visibility gate for a single region.
pub struct VisibilityGate<B: ObservationBinding> {
    state: RevealState,
    threshold: f32,
    binding: Option<B>,
}

impl<B: ObservationBinding> VisibilityGate<B> {
    /// Establish the gate and its observation binding.
    ///
    /// If the host reports no visibility primitive, the gate is visible
    /// immediately and holds no binding.
    pub fn new<H>(host: &H, region: RegionId, delay_ms: u32, threshold: f32) -> Self
    where
        H: VisibilityHost<Binding = B>,
    {
        match host.observe(region, threshold) {
            Some(binding) => Self {
                state: RevealState::hidden(delay_ms),
                threshold,
                binding: Some(binding),
            },
            None => Self {
                state: RevealState::shown(delay_ms),
                threshold,
                binding: None,
            },
        }
    }

    pub fn with_default_threshold<H>(host: &H, region: RegionId, delay_ms: u32) -> Self
    where
        H: VisibilityHost<Binding = B>,
    {
        Self::new(host, region, delay_ms, DEFAULT_THRESHOLD)
    }

    /// Feed one intersection sample from the host.
    ///
    /// The first sample at or above the threshold flips the flag and releases
    /// the binding; everything after that is ignored, so the gate cannot
    /// re-trigger and never transitions true→false.
    pub fn on_intersection(&mut self, ratio: f32) {
        if self.state.visible {
            return;
        }
        if ratio >= self.threshold {
            self.state.visible = true;
            self.release();
        }
    }

    /// Release the observation binding. Safe to call any number of times.
    pub fn release(&mut self) {
        if let Some(mut binding) = self.binding.take() {
            binding.release();
        }
    }

    pub fn visible(&self) -> bool {
        self.state.visible
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Whether an observation binding is still live.
    pub fn is_observing(&self) -> bool {
        self.binding.is_some()
    }
}

impl<B: ObservationBinding> Drop for VisibilityGate<B> {
    fn drop(&mut self) {
        self.release();
    }
}

/// The two presentation values a region can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Reduced opacity, offset position.
    Hidden,
    /// Full opacity, neutral position.
    Shown,
}

/// Pure projection of a [`RevealState`] onto the presentation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub phase: Phase,
    pub delay_ms: u32,
}

impl Presentation {
    /// CSS class list for the region wrapper.
    pub fn class(&self) -> &'static str {
        match self.phase {
            Phase::Hidden => "reveal",
            Phase::Shown => "reveal is-shown",
        }
    }

    /// Inline style carrying the stagger delay. `None` for zero delay so the
    /// common case emits no style attribute.
    pub fn style(&self) -> Option<String> {
        (self.delay_ms > 0).then(|| format!("transition-delay: {}ms", self.delay_ms))
    }
}

/// Derive the presentation for a reveal state. Deterministic; the transition
/// between the two phases is owned entirely by CSS.
pub fn project(state: RevealState) -> Presentation {
    Presentation {
        phase: if state.visible() {
            Phase::Shown
        } else {
            Phase::Hidden
        },
        delay_ms: state.delay_ms(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    /// Shared ledger of live subscriptions plus a release counter, so tests
    /// can assert both liveness and how many times release actually ran.
    #[derive(Debug, Default)]
    struct HostLedger {
        active: BTreeSet<u32>,
        releases: u32,
    }

    #[derive(Clone, Default)]
    struct FakeHost {
        ledger: Rc<RefCell<HostLedger>>,
    }

    struct FakeBinding {
        region: u32,
        released: bool,
        ledger: Rc<RefCell<HostLedger>>,
    }

    impl ObservationBinding for FakeBinding {
        fn release(&mut self) {
            if self.released {
                return;
            }
            self.released = true;
            let mut ledger = self.ledger.borrow_mut();
            ledger.active.remove(&self.region);
            ledger.releases += 1;
        }
    }

    impl Drop for FakeBinding {
        fn drop(&mut self) {
            self.release();
        }
    }

    impl VisibilityHost for FakeHost {
        type Binding = FakeBinding;

        fn observe(&self, region: RegionId, _threshold: f32) -> Option<FakeBinding> {
            self.ledger.borrow_mut().active.insert(region.0);
            Some(FakeBinding {
                region: region.0,
                released: false,
                ledger: Rc::clone(&self.ledger),
            })
        }
    }

    impl FakeHost {
        fn active_count(&self) -> usize {
            self.ledger.borrow().active.len()
        }

        fn releases(&self) -> u32 {
            self.ledger.borrow().releases
        }
    }

    #[test]
    fn gate_starts_hidden_with_live_binding() {
        let host = FakeHost::default();
        let gate = VisibilityGate::with_default_threshold(&host, RegionId(1), 0);
        assert!(!gate.visible());
        assert!(gate.is_observing());
        assert_eq!(host.active_count(), 1);
    }

    #[test]
    fn qualifying_sample_flips_flag_and_releases() {
        let host = FakeHost::default();
        let mut gate = VisibilityGate::with_default_threshold(&host, RegionId(1), 0);
        gate.on_intersection(0.5);
        assert!(gate.visible());
        assert!(!gate.is_observing());
        assert_eq!(host.active_count(), 0);
    }

    #[test]
    fn sub_threshold_sample_is_ignored() {
        let host = FakeHost::default();
        let mut gate = VisibilityGate::with_default_threshold(&host, RegionId(1), 0);
        gate.on_intersection(0.05);
        assert!(!gate.visible());
        assert!(gate.is_observing());
    }

    #[test]
    fn threshold_boundary_qualifies() {
        let host = FakeHost::default();
        let mut gate = VisibilityGate::with_default_threshold(&host, RegionId(1), 0);
        gate.on_intersection(DEFAULT_THRESHOLD);
        assert!(gate.visible());
    }

    #[test]
    fn flag_is_monotonic() {
        let host = FakeHost::default();
        let mut gate = VisibilityGate::with_default_threshold(&host, RegionId(1), 0);
        gate.on_intersection(0.9);
        assert!(gate.visible());
        // A later zero-ratio sample must not lower the flag.
        gate.on_intersection(0.0);
        assert!(gate.visible());
    }

    #[test]
    fn only_first_qualifying_sample_releases() {
        let host = FakeHost::default();
        let mut gate = VisibilityGate::with_default_threshold(&host, RegionId(1), 0);
        gate.on_intersection(0.9);
        gate.on_intersection(0.9);
        gate.on_intersection(0.9);
        assert_eq!(host.releases(), 1);
    }

    #[test]
    fn release_is_idempotent() {
        let host = FakeHost::default();
        let mut gate = VisibilityGate::with_default_threshold(&host, RegionId(1), 0);
        gate.release();
        gate.release();
        gate.release();
        assert_eq!(host.releases(), 1);
        assert_eq!(host.active_count(), 0);
    }

    #[test]
    fn teardown_before_trigger_releases_and_stays_hidden() {
        let host = FakeHost::default();
        let final_state;
        {
            let gate = VisibilityGate::with_default_threshold(&host, RegionId(7), 200);
            final_state = gate.state();
            // Region unmounts without ever becoming visible.
        }
        assert!(!final_state.visible());
        assert_eq!(host.active_count(), 0, "teardown must leak no binding");
        assert_eq!(host.releases(), 1);
    }

    #[test]
    fn drop_after_trigger_does_not_double_release() {
        let host = FakeHost::default();
        {
            let mut gate = VisibilityGate::with_default_threshold(&host, RegionId(1), 0);
            gate.on_intersection(1.0);
        }
        assert_eq!(host.releases(), 1);
    }

    #[test]
    fn absent_primitive_fails_open() {
        let gate = VisibilityGate::with_default_threshold(&AbsentHost, RegionId(1), 150);
        assert!(gate.visible());
        assert!(!gate.is_observing());
        assert_eq!(gate.state().delay_ms(), 150);
    }

    #[test]
    fn gates_are_independent() {
        let host = FakeHost::default();
        let mut first = VisibilityGate::with_default_threshold(&host, RegionId(1), 0);
        let second = VisibilityGate::with_default_threshold(&host, RegionId(2), 100);
        first.on_intersection(1.0);
        assert!(first.visible());
        assert!(!second.visible());
        assert_eq!(host.active_count(), 1);
    }

    #[test]
    fn custom_threshold_is_honored() {
        let host = FakeHost::default();
        let mut gate = VisibilityGate::new(&host, RegionId(1), 0, 0.5);
        gate.on_intersection(0.4);
        assert!(!gate.visible());
        gate.on_intersection(0.5);
        assert!(gate.visible());
    }

    #[test]
    fn projection_of_hidden_state() {
        let p = project(RevealState::hidden(200));
        assert_eq!(p.phase, Phase::Hidden);
        assert_eq!(p.class(), "reveal");
        assert_eq!(p.style().as_deref(), Some("transition-delay: 200ms"));
    }

    #[test]
    fn projection_of_shown_state() {
        let p = project(RevealState::shown(0));
        assert_eq!(p.phase, Phase::Shown);
        assert_eq!(p.class(), "reveal is-shown");
        assert_eq!(p.style(), None);
    }

    #[test]
    fn projection_preserves_delay_verbatim() {
        for delay in [1, 100, 300, 12345] {
            let p = project(RevealState::hidden(delay));
            assert_eq!(p.delay_ms, delay);
            assert_eq!(
                p.style().as_deref(),
                Some(format!("transition-delay: {delay}ms").as_str())
            );
        }
    }

    #[test]
    fn projection_is_pure() {
        let state = RevealState::hidden(100);
        assert_eq!(project(state), project(state));
    }
}
