use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::sound::SoundState;

#[derive(Properties, PartialEq)]
pub struct SoundToggleProps {
    /// The mobile hero video whose mute flag is flipped.
    pub video: NodeRef,
}

#[function_component(SoundToggle)]
pub fn sound_toggle(props: &SoundToggleProps) -> Html {
    let sound = use_state(SoundState::default);

    {
        let sound = sound.clone();
        use_effect_with_deps(
            move |video: &NodeRef| {
                if let Some(video) = video.cast::<HtmlVideoElement>() {
                    sound.set(SoundState::sync(&video));
                }
                || ()
            },
            props.video.clone(),
        );
    }

    let onclick = {
        let sound = sound.clone();
        let video = props.video.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(video) = video.cast::<HtmlVideoElement>() else {
                return;
            };
            sound.set(SoundState::toggle(&video));
        })
    };

    html! {
        <div class="sound-toggle" {onclick}>
            {sound.label()}
        </div>
    }
}
