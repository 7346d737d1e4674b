use std::cell::RefCell;
use std::rc::Rc;

use shared::{CaregiverField, MedicineField, UserField};

use super::setup_form::{AfterSubmit, SetupForm};
use crate::services::api::SetupApi;
use crate::services::timers::ResetScheduler;

/// Owns the form state and drives submissions against a `SetupApi`.
///
/// Every mutation calls `on_change` so the view can re-render. The form is
/// never borrowed across an `.await`.
pub struct SetupController<A, S> {
    form: Rc<RefCell<SetupForm>>,
    api: A,
    scheduler: S,
    reset_delay_ms: u32,
    on_change: Rc<dyn Fn()>,
}

impl<A: SetupApi, S: ResetScheduler> SetupController<A, S> {
    pub fn new(api: A, scheduler: S, reset_delay_ms: u32, on_change: Rc<dyn Fn()>) -> Self {
        Self {
            form: Rc::new(RefCell::new(SetupForm::new())),
            api,
            scheduler,
            reset_delay_ms,
            on_change,
        }
    }

    /// Current state, cloned for rendering
    pub fn snapshot(&self) -> SetupForm {
        self.form.borrow().clone()
    }

    fn mutate(&self, f: impl FnOnce(&mut SetupForm)) {
        f(&mut *self.form.borrow_mut());
        (self.on_change)();
    }

    pub fn update_user_field(&self, field: UserField, value: String) {
        self.mutate(|form| form.update_user_field(field, value));
    }

    pub fn update_medicine_field(&self, index: usize, field: MedicineField, value: String) {
        self.mutate(|form| form.update_medicine_field(index, field, value));
    }

    pub fn update_caregiver_field(&self, index: usize, field: CaregiverField, value: String) {
        self.mutate(|form| form.update_caregiver_field(index, field, value));
    }

    pub fn add_medicine(&self) {
        self.mutate(SetupForm::add_medicine);
    }

    pub fn remove_medicine(&self, index: usize) {
        self.mutate(|form| {
            form.remove_medicine(index);
        });
    }

    pub fn add_caregiver(&self) {
        self.mutate(SetupForm::add_caregiver);
    }

    pub fn remove_caregiver(&self, index: usize) {
        self.mutate(|form| {
            form.remove_caregiver(index);
        });
    }

    /// Validate, send and record the outcome.
    ///
    /// On success a one-shot reset is handed to the scheduler. It is not
    /// cancelled by later edits.
    pub async fn submit(&self) {
        let request = self.form.borrow_mut().begin_submission();
        (self.on_change)();

        let Some(request) = request else {
            return;
        };

        let outcome = self.api.submit_setup(&request).await;
        let after = self.form.borrow_mut().finish_submission(outcome);
        (self.on_change)();

        if after == AfterSubmit::ScheduleReset {
            let form = Rc::clone(&self.form);
            let on_change = Rc::clone(&self.on_change);
            self.scheduler.schedule(
                self.reset_delay_ms,
                Box::new(move || {
                    form.borrow_mut().reset();
                    on_change();
                }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use shared::{SetupRequest, UserInfo};
    use tokio::sync::oneshot;

    use crate::errors::{SubmitError, CONNECTION_MESSAGE, USER_FIELDS_MESSAGE};
    use crate::state::setup_form::{SubmissionAlert, SubmissionPhase, SUCCESS_MESSAGE};

    /// Answers every request with a canned outcome and records what was sent
    #[derive(Clone)]
    struct FakeApi {
        outcome: Result<(), SubmitError>,
        sent: Rc<RefCell<Vec<SetupRequest>>>,
    }

    impl FakeApi {
        fn new(outcome: Result<(), SubmitError>) -> Self {
            Self {
                outcome,
                sent: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    #[async_trait(?Send)]
    impl SetupApi for FakeApi {
        async fn submit_setup(&self, request: &SetupRequest) -> Result<(), SubmitError> {
            self.sent.borrow_mut().push(request.clone());
            self.outcome.clone()
        }
    }

    /// Answers immediately unless a gate is queued, in which case the
    /// response waits until the test releases it
    #[derive(Clone, Default)]
    struct GatedApi {
        gates: Rc<RefCell<VecDeque<oneshot::Receiver<Result<(), SubmitError>>>>>,
        sent: Rc<RefCell<Vec<SetupRequest>>>,
    }

    impl GatedApi {
        fn hold_next(&self) -> oneshot::Sender<Result<(), SubmitError>> {
            let (release, gate) = oneshot::channel();
            self.gates.borrow_mut().push_back(gate);
            release
        }
    }

    #[async_trait(?Send)]
    impl SetupApi for GatedApi {
        async fn submit_setup(&self, request: &SetupRequest) -> Result<(), SubmitError> {
            self.sent.borrow_mut().push(request.clone());
            let gate = self.gates.borrow_mut().pop_front();
            match gate {
                Some(gate) => gate
                    .await
                    .unwrap_or_else(|_| Err(SubmitError::Transport("gate dropped".to_string()))),
                None => Ok(()),
            }
        }
    }

    /// Holds scheduled tasks until the test advances the clock
    #[derive(Clone, Default)]
    struct ManualScheduler {
        now_ms: Rc<Cell<u32>>,
        pending: Rc<RefCell<Vec<(u32, Box<dyn FnOnce()>)>>>,
    }

    impl ManualScheduler {
        fn advance(&self, ms: u32) -> usize {
            let now = self.now_ms.get() + ms;
            self.now_ms.set(now);

            let due = {
                let mut pending = self.pending.borrow_mut();
                let (due, waiting): (Vec<_>, Vec<_>) = pending.drain(..).partition(|(at, _)| *at <= now);
                *pending = waiting;
                due
            };
            let fired = due.len();
            for (_, task) in due {
                task();
            }
            fired
        }
    }

    impl ResetScheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
            self.pending.borrow_mut().push((self.now_ms.get() + delay_ms, task));
        }
    }

    fn build(
        outcome: Result<(), SubmitError>,
    ) -> (SetupController<FakeApi, ManualScheduler>, FakeApi, ManualScheduler, Rc<Cell<usize>>) {
        let api = FakeApi::new(outcome);
        let scheduler = ManualScheduler::default();
        let renders = Rc::new(Cell::new(0));
        let on_change: Rc<dyn Fn()> = {
            let renders = Rc::clone(&renders);
            Rc::new(move || renders.set(renders.get() + 1))
        };
        let controller = SetupController::new(api.clone(), scheduler.clone(), 5000, on_change);
        (controller, api, scheduler, renders)
    }

    fn fill<A: SetupApi>(controller: &SetupController<A, ManualScheduler>) {
        controller.update_user_field(UserField::Name, "Alice".to_string());
        controller.update_user_field(UserField::Phone, "555-1111".to_string());
        controller.update_medicine_field(0, MedicineField::Name, "Aspirin".to_string());
        controller.update_medicine_field(0, MedicineField::Dosage, "81mg".to_string());
        controller.update_medicine_field(0, MedicineField::Time, "8:00 AM".to_string());
        controller.update_caregiver_field(0, CaregiverField::Name, "Bob".to_string());
        controller.update_caregiver_field(0, CaregiverField::Phone, "555-2222".to_string());
    }

    #[tokio::test]
    async fn test_success_resets_once_after_delay() {
        let (controller, api, scheduler, _) = build(Ok(()));
        fill(&controller);

        controller.submit().await;

        assert_eq!(api.sent.borrow().len(), 1);
        let state = controller.snapshot();
        assert_eq!(state.alert(), Some(&SubmissionAlert::Success(SUCCESS_MESSAGE.to_string())));
        assert_eq!(state.phase(), SubmissionPhase::Succeeded);

        assert_eq!(scheduler.advance(4999), 0);
        assert_eq!(controller.snapshot().user().name, "Alice");

        assert_eq!(scheduler.advance(1), 1);
        assert_eq!(controller.snapshot(), SetupForm::new());

        assert_eq!(scheduler.advance(10_000), 0);
    }

    #[tokio::test]
    async fn test_reset_is_not_cancelled_by_edits() {
        let (controller, _, scheduler, _) = build(Ok(()));
        fill(&controller);
        controller.submit().await;

        controller.add_medicine();
        controller.update_user_field(UserField::Name, "Carol".to_string());

        assert_eq!(scheduler.advance(5000), 1);
        assert_eq!(controller.snapshot().user(), &UserInfo::default());
        assert_eq!(controller.snapshot().medicines().len(), 1);
    }

    #[tokio::test]
    async fn test_earlier_reset_does_not_reopen_submit_while_in_flight() {
        let api = GatedApi::default();
        let scheduler = ManualScheduler::default();
        let controller = SetupController::new(api.clone(), scheduler.clone(), 5000, Rc::new(|| {}));

        fill(&controller);
        controller.submit().await;
        assert_eq!(api.sent.borrow().len(), 1);

        // Second submit inside the reset window, response held open
        let release = api.hold_next();
        fill(&controller);

        let second = controller.submit();
        let driver = async {
            while api.sent.borrow().len() < 2 {
                tokio::task::yield_now().await;
            }
            assert!(controller.snapshot().is_submitting());

            assert_eq!(scheduler.advance(5000), 1);
            assert!(controller.snapshot().is_submitting());

            fill(&controller);
            controller.submit().await;
            assert_eq!(api.sent.borrow().len(), 2);

            release.send(Ok(())).unwrap();
        };
        tokio::join!(second, driver);

        assert_eq!(api.sent.borrow().len(), 2);
        assert_eq!(controller.snapshot().phase(), SubmissionPhase::Succeeded);
        assert_eq!(scheduler.advance(5000), 1);
        assert_eq!(controller.snapshot(), SetupForm::new());
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let (controller, api, scheduler, renders) = build(Ok(()));

        controller.submit().await;

        assert!(api.sent.borrow().is_empty());
        assert_eq!(
            controller.snapshot().alert(),
            Some(&SubmissionAlert::Error(USER_FIELDS_MESSAGE.to_string()))
        );
        assert_eq!(renders.get(), 1);
        assert_eq!(scheduler.advance(5000), 0);
    }

    #[tokio::test]
    async fn test_rejection_surfaces_server_message() {
        let (controller, api, scheduler, _) = build(Err(SubmitError::Rejected {
            status: 400,
            message: Some("Phone already registered".to_string()),
        }));
        fill(&controller);

        controller.submit().await;

        assert_eq!(api.sent.borrow().len(), 1);
        let state = controller.snapshot();
        assert_eq!(state.alert().map(SubmissionAlert::message), Some("Phone already registered"));
        assert!(!state.is_submitting());
        assert_eq!(scheduler.advance(5000), 0);
        assert_eq!(controller.snapshot().user().name, "Alice");
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_connection_message() {
        let (controller, _, _, _) = build(Err(SubmitError::Transport("offline".to_string())));
        fill(&controller);

        controller.submit().await;

        let state = controller.snapshot();
        assert_eq!(state.alert(), Some(&SubmissionAlert::Error(CONNECTION_MESSAGE.to_string())));
        assert_eq!(state.phase(), SubmissionPhase::Failed);
    }

    #[test]
    fn test_list_edits_notify_view() {
        let (controller, _, _, renders) = build(Ok(()));

        controller.add_medicine();
        controller.remove_medicine(1);
        controller.remove_medicine(0);
        controller.remove_caregiver(0);

        let state = controller.snapshot();
        assert_eq!(state.medicines().len(), 1);
        assert!(state.caregivers().is_empty());
        assert_eq!(renders.get(), 4);
    }
}
