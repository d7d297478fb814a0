use yew::prelude::*;

use crate::countdown::pad;

#[derive(Properties, PartialEq)]
pub struct TimeBoxProps {
    pub value: i64,
    pub label: AttrValue,
}

#[function_component(TimeBox)]
pub fn time_box(props: &TimeBoxProps) -> Html {
    html! {
        <div class="time-box">
            <div class="time-box-value">{pad(props.value)}</div>
            <div class="time-box-label">{props.label.clone()}</div>
        </div>
    }
}
