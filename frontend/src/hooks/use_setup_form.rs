use std::rc::Rc;

use shared::{CaregiverField, MedicineField, UserField};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::services::api::ApiClient;
use crate::services::timers::TimeoutScheduler;
use crate::state::{SetupController, SetupForm};

type Controller = SetupController<ApiClient, TimeoutScheduler>;

pub struct UseSetupFormResult {
    pub state: SetupForm,
    pub actions: UseSetupFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseSetupFormActions {
    pub on_user_change: Callback<(UserField, String)>,
    pub on_medicine_change: Callback<(usize, MedicineField, String)>,
    pub on_caregiver_change: Callback<(usize, CaregiverField, String)>,
    pub add_medicine: Callback<()>,
    pub remove_medicine: Callback<usize>,
    pub add_caregiver: Callback<()>,
    pub remove_caregiver: Callback<usize>,
    pub submit: Callback<()>,
}

/// Hook owning the setup form for the lifetime of the component.
///
/// The controller is created on mount and kept for every later render, so
/// `config` changes after mount are ignored.
#[hook]
pub fn use_setup_form(api_client: &ApiClient, config: &AppConfig) -> UseSetupFormResult {
    let trigger = use_force_update();

    let controller: Rc<Controller> = {
        let api_client = api_client.clone();
        let reset_delay_ms = config.reset_delay_ms;
        use_memo((), move |_| {
            let on_change: Rc<dyn Fn()> = Rc::new(move || trigger.force_update());
            SetupController::new(api_client, TimeoutScheduler, reset_delay_ms, on_change)
        })
    };

    let on_user_change = {
        let controller = controller.clone();
        Callback::from(move |(field, value): (UserField, String)| {
            controller.update_user_field(field, value);
        })
    };

    let on_medicine_change = {
        let controller = controller.clone();
        Callback::from(move |(index, field, value): (usize, MedicineField, String)| {
            controller.update_medicine_field(index, field, value);
        })
    };

    let on_caregiver_change = {
        let controller = controller.clone();
        Callback::from(move |(index, field, value): (usize, CaregiverField, String)| {
            controller.update_caregiver_field(index, field, value);
        })
    };

    let add_medicine = {
        let controller = controller.clone();
        Callback::from(move |_| controller.add_medicine())
    };

    let remove_medicine = {
        let controller = controller.clone();
        Callback::from(move |index: usize| controller.remove_medicine(index))
    };

    let add_caregiver = {
        let controller = controller.clone();
        Callback::from(move |_| controller.add_caregiver())
    };

    let remove_caregiver = {
        let controller = controller.clone();
        Callback::from(move |index: usize| controller.remove_caregiver(index))
    };

    let submit = {
        let controller = controller.clone();
        Callback::from(move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.submit().await;
            });
        })
    };

    UseSetupFormResult {
        state: controller.snapshot(),
        actions: UseSetupFormActions {
            on_user_change,
            on_medicine_change,
            on_caregiver_change,
            add_medicine,
            remove_medicine,
            add_caregiver,
            remove_caregiver,
            submit,
        },
    }
}
