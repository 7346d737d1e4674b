use yew::prelude::*;

use crate::state::SubmissionAlert;

#[derive(Properties, PartialEq)]
pub struct AlertBannerProps {
    pub alert: Option<SubmissionAlert>,
}

#[function_component(AlertBanner)]
pub fn alert_banner(props: &AlertBannerProps) -> Html {
    let Some(alert) = props.alert.as_ref() else {
        return html! {};
    };

    let class = if alert.is_success() {
        "form-message success"
    } else {
        "form-message error"
    };

    html! {
        <div class={class} role="status">
            {alert.message()}
        </div>
    }
}
