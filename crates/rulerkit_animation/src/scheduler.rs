//! Animation scheduler
//!
//! Owns all active scroll tweens and deferred one-shot tasks, and advances
//! them each frame. Owners hold ids and poll: a widget reads its tween's
//! current value during `update`, and collects fired task ids with
//! [`AnimationScheduler::take_fired`]. Cancelling a pending task by id is
//! always safe; a cancelled task never fires.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::easing::Easing;

new_key_type! {
    pub struct AnimationId;
    pub struct TaskId;
}

/// An eased tween between two scroll offsets
#[derive(Clone, Copy, Debug)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl ScrollAnimation {
    /// Create a tween over `duration` seconds
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Current offset along the tween
    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Final offset the tween lands on
    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn step(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }
}

/// A pending one-shot task
#[derive(Clone, Copy, Debug)]
struct DeferredTask {
    remaining: f32,
}

/// The animation scheduler that ticks all active animations and timers
pub struct AnimationScheduler {
    animations: SlotMap<AnimationId, ScrollAnimation>,
    tasks: SlotMap<TaskId, DeferredTask>,
    fired: SmallVec<[TaskId; 4]>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            animations: SlotMap::with_key(),
            tasks: SlotMap::with_key(),
            fired: SmallVec::new(),
        }
    }

    pub fn add_animation(&mut self, animation: ScrollAnimation) -> AnimationId {
        self.animations.insert(animation)
    }

    pub fn get_animation(&self, id: AnimationId) -> Option<&ScrollAnimation> {
        self.animations.get(id)
    }

    pub fn remove_animation(&mut self, id: AnimationId) -> Option<ScrollAnimation> {
        self.animations.remove(id)
    }

    /// Schedule a one-shot task to fire after `delay` seconds
    pub fn schedule_once(&mut self, delay: f32) -> TaskId {
        self.tasks.insert(DeferredTask {
            remaining: delay.max(0.0),
        })
    }

    /// Cancel a task. Returns true if it was still pending or already fired
    /// but not yet collected; either way it will never be observed.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let pending = self.tasks.remove(id).is_some();
        let fired_pos = self.fired.iter().position(|f| *f == id);
        if let Some(pos) = fired_pos {
            self.fired.remove(pos);
        }
        pending || fired_pos.is_some()
    }

    /// Collect a fired task by id. Returns true exactly once per firing.
    pub fn take_fired(&mut self, id: TaskId) -> bool {
        if let Some(pos) = self.fired.iter().position(|f| *f == id) {
            self.fired.remove(pos);
            true
        } else {
            false
        }
    }

    /// Tick all animations and timers by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        for (_, animation) in self.animations.iter_mut() {
            animation.step(dt);
        }

        let mut due: SmallVec<[TaskId; 4]> = SmallVec::new();
        for (id, task) in self.tasks.iter_mut() {
            task.remaining -= dt;
            if task.remaining <= 0.0 {
                due.push(id);
            }
        }
        for id in due {
            self.tasks.remove(id);
            tracing::trace!(?id, "deferred task fired");
            self.fired.push(id);
        }
    }

    /// Check if any animations are still running
    pub fn has_active_animations(&self) -> bool {
        self.animations.iter().any(|(_, a)| !a.is_finished())
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    pub fn pending_task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
