use yew::prelude::*;

mod components;
mod config;
mod errors;
mod hooks;
mod services;
mod state;

use components::setup_form::SetupFormView;
use config::AppConfig;
use hooks::use_setup_form::use_setup_form;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_env());
    let api_client = use_memo((), {
        let base_url = config.api_base_url.clone();
        move |_| ApiClient::with_base_url(base_url)
    });

    let form = use_setup_form(&api_client, &config);

    html! {
        <SetupFormView state={form.state} actions={form.actions} />
    }
}

fn main() {
    let config = AppConfig::from_env();
    services::logging::init(config.log_level);
    log::info!("Starting medicine reminder setup, API at {}", config.api_base_url);

    yew::Renderer::<App>::new().render();
}
