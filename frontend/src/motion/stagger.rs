use super::binding::ViewportMotion;
use super::reveal::{Reveal, RevealSpec, RevealTrigger};
use super::value::VisualState;

/// A child reveal and the delay the group adds in front of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerEntry {
    pub spec: RevealSpec,
    pub delay: f64,
}

impl StaggerEntry {
    /// Seconds from group visibility to the start of this child's transition.
    pub fn start_offset(&self) -> f64 {
        self.delay + self.spec.start_delay()
    }
}

/// Ordered children with `delay[i] = base + i * interval`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaggerPlan {
    entries: Vec<StaggerEntry>,
}

impl StaggerPlan {
    /// Pushes every child back by `base` seconds. Negative or non-finite
    /// values count as zero, so delays never decrease.
    pub fn with_base_delay(mut self, base: f64) -> Self {
        let base = clamp_time(base);
        for entry in &mut self.entries {
            entry.delay += base;
        }
        self
    }

    pub fn entries(&self) -> &[StaggerEntry] {
        &self.entries
    }

    pub fn initial_states(&self) -> Vec<VisualState> {
        self.entries.iter().map(|e| e.spec.initial).collect()
    }
}

fn clamp_time(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

/// Derives the stagger plan for `children`: child `i` waits `i * interval`.
/// A negative or non-finite `interval` counts as zero.
pub fn stagger(children: impl IntoIterator<Item = RevealSpec>, interval: f64) -> StaggerPlan {
    let interval = clamp_time(interval);
    let entries = children
        .into_iter()
        .enumerate()
        .map(|(i, spec)| StaggerEntry {
            spec,
            delay: i as f64 * interval,
        })
        .collect();
    StaggerPlan { entries }
}

/// Children of a group, all started by the group's own visibility. Child
/// thresholds and triggers are ignored; the group's apply.
#[derive(Clone, Debug)]
pub struct StaggerGroup {
    reveals: Vec<Reveal>,
    trigger: RevealTrigger,
    started: bool,
}

impl StaggerGroup {
    pub fn new(plan: &StaggerPlan) -> Self {
        let reveals = plan
            .entries()
            .iter()
            .map(|e| Reveal::new(e.spec.with_delay(e.start_offset())))
            .collect();
        Self {
            reveals,
            trigger: RevealTrigger::Viewport,
            started: false,
        }
    }

    pub fn with_trigger(mut self, trigger: RevealTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    #[cfg(test)]
    pub fn reveals(&self) -> &[Reveal] {
        &self.reveals
    }
}

impl ViewportMotion for StaggerGroup {
    type Frame = Vec<VisualState>;

    /// Any visible pixel of the container starts the group.
    fn threshold(&self) -> f64 {
        0.0
    }

    fn trigger(&self) -> RevealTrigger {
        self.trigger
    }

    fn start(&mut self, now: f64) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        for reveal in &mut self.reveals {
            reveal.start(now);
        }
        true
    }

    fn sample(&mut self, now: f64) -> Vec<VisualState> {
        self.reveals.iter_mut().map(|r| r.sample(now)).collect()
    }

    fn settle(&mut self) {
        self.started = true;
        for reveal in &mut self.reveals {
            reveal.settle();
        }
    }

    fn is_settled(&self) -> bool {
        self.reveals.iter().all(|r| r.is_settled())
    }

    fn dispose(&mut self) {
        self.started = true;
        for reveal in &mut self.reveals {
            reveal.dispose();
        }
    }
}
