use gloo::timers::callback::Timeout;

/// Runs a task once after a delay. There is no way to cancel it.
pub trait ResetScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Browser timer backed scheduler
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl ResetScheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
