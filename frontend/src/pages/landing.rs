use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlVideoElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::sound_toggle::SoundToggle;
use crate::components::time_box::TimeBox;
use crate::config::SiteConfig;
use crate::contact::HttpContactClient;
use crate::countdown::use_countdown;
use crate::form::{submit, EmailForm};
use crate::parallax::{use_scroll_progress, HeroStyle};
use crate::sound::SoundState;

fn alert(message: &str) {
    if let Some(window) = window() {
        if window.alert_with_message(message).is_err() {
            gloo_console::error!("Could not show alert:", message.to_string());
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: SiteConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let config = &props.config;
    let countdown = use_countdown(config.target);
    let scroll = use_scroll_progress(config.parallax);
    let hero_style = if config.parallax {
        HeroStyle::at(scroll)
    } else {
        HeroStyle::default()
    };

    let form = use_mut_ref(EmailForm::default);
    let redraw = use_force_update();
    let is_mounted = use_is_mounted();
    let client = use_memo(
        |endpoint: &String| HttpContactClient::new(endpoint.clone()),
        config.contact_endpoint.clone(),
    );
    let desktop_video = use_node_ref();
    let mobile_video = use_node_ref();

    {
        let desktop_video = desktop_video.clone();
        use_effect_with_deps(
            move |_| {
                info!("Landing page mounted");
                // The mobile video is synced by its sound toggle.
                if let Some(video) = desktop_video.cast::<HtmlVideoElement>() {
                    SoundState::sync(&video);
                }
                || ()
            },
            (),
        );
    }

    let oninput = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.borrow_mut().edit(input.value());
            redraw.force_update();
        })
    };

    let on_submit = {
        let form = form.clone();
        let redraw = redraw.clone();
        let client = client.clone();
        let is_mounted = is_mounted.clone();
        Callback::from(move |_: MouseEvent| {
            let form = form.clone();
            let redraw = redraw.clone();
            let client = client.clone();
            let is_mounted = is_mounted.clone();

            spawn_local(async move {
                let changed = {
                    let is_mounted = is_mounted.clone();
                    move || {
                        if is_mounted() {
                            redraw.force_update();
                        }
                    }
                };

                if let Some(notice) = submit(&*client, &form, changed).await {
                    // A page torn down mid-request has nobody left to tell.
                    if is_mounted() {
                        alert(notice.message());
                    }
                }
            });
        })
    };

    let (email, submitting, button_label) = {
        let form = form.borrow();
        (form.value.clone(), form.submitting, form.button_label())
    };

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        width: 100%;
                        font-family: 'Poppins', sans-serif;
                    }
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        background: #fff;
                        height: 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .site-header img {
                        height: 4rem;
                    }
                    .hero {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                    }
                    .hero-layer {
                        position: absolute;
                        inset: 0;
                        will-change: transform, opacity;
                    }
                    .hero-media {
                        position: absolute;
                        inset: 0;
                    }
                    .hero-video {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                    }
                    .mobile-only {
                        display: none;
                    }
                    .sound-toggle {
                        position: absolute;
                        bottom: 7rem;
                        left: 50%;
                        transform: translateX(-50%);
                        color: #fff;
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                        cursor: pointer;
                    }
                    .scroll-hint {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        width: 2.5rem;
                        height: 2.5rem;
                        margin-left: -1.25rem;
                        border: 1px solid #fff;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        animation: bounce 1s infinite;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
                        50% { transform: translateY(0); animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
                    }
                    .content {
                        background: #fff;
                        color: #000;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        padding: 6rem 1rem 2.5rem;
                    }
                    .content h1, .content h2 {
                        font-family: 'Montserrat', sans-serif;
                        letter-spacing: 0.2em;
                        font-size: 3rem;
                        margin: 0 0 1.5rem;
                    }
                    .content h1 { font-weight: 300; }
                    .content h2 { font-weight: 100; margin: 0; }
                    .email-input {
                        margin-top: 2.5rem;
                        width: 420px;
                        background: #f9fafb;
                        padding: 0.75rem 1rem;
                        text-align: center;
                        font-size: 1rem;
                        letter-spacing: 0.1em;
                        border: none;
                        outline: none;
                    }
                    .email-input::placeholder {
                        color: #4b5563;
                        font-size: 0.875rem;
                        font-style: italic;
                    }
                    .submit-button {
                        margin-top: 1.25rem;
                        background: none;
                        border: none;
                        font-family: 'Montserrat', sans-serif;
                        letter-spacing: 0.2em;
                        font-size: 1.25rem;
                        position: relative;
                        cursor: pointer;
                    }
                    .submit-button::after {
                        content: '';
                        position: absolute;
                        left: 50%;
                        bottom: 0;
                        height: 2px;
                        width: 0;
                        background: #000;
                        transition: all 0.5s;
                    }
                    .submit-button:hover::after {
                        left: 0;
                        width: 100%;
                    }
                    .submit-button:disabled {
                        cursor: default;
                        opacity: 0.6;
                    }
                    .unveiling {
                        margin-top: 3.5rem;
                        font-weight: 200;
                        letter-spacing: 0.2em;
                    }
                    .countdown {
                        margin-top: 1.5rem;
                        display: flex;
                        justify-content: center;
                        gap: 5rem;
                    }
                    .time-box {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        width: 96px;
                    }
                    .time-box-value {
                        font-size: 3.75rem;
                        font-weight: 100;
                        line-height: 1;
                        letter-spacing: 0.15em;
                    }
                    .time-box-label {
                        margin-top: 0.25rem;
                        font-family: 'Montserrat', sans-serif;
                        font-size: 0.875rem;
                        color: #6b7280;
                        letter-spacing: 0.15em;
                        transform: translateX(-0.16em);
                    }
                    .social {
                        margin-top: 4rem;
                        font-weight: 200;
                        letter-spacing: 0.2em;
                        color: inherit;
                        text-decoration: none;
                    }
                    .copyright {
                        margin-top: 1.25rem;
                        font-size: 10px;
                        letter-spacing: 0.1em;
                    }
                    @media (max-width: 767px) {
                        .desktop-only { display: none; }
                        .mobile-only { display: block; }
                        .content { padding-top: 4rem; }
                        .content h1, .content h2 { font-size: 1.125rem; font-weight: 500; margin-bottom: 0.5rem; }
                        .email-input { width: 70%; }
                        .submit-button { font-size: 1.125rem; font-weight: 500; margin-top: 1.25rem; }
                        .countdown { gap: 2rem; }
                        .time-box { width: 64px; }
                        .time-box-value { font-size: 1.875rem; }
                        .time-box-label { font-size: 10px; }
                        .social { font-size: 0.75rem; }
                    }
                "#}
            </style>

            <header class="site-header">
                <img src={config.logo_src.clone()} alt="Logo" />
            </header>

            <section class="hero">
                <div class="hero-layer" style={hero_style.wrapper_css()}>
                    <div class="hero-media" style={hero_style.media_css()}>
                        <video ref={desktop_video.clone()} class="hero-video desktop-only"
                            autoplay=true loop=true muted=true playsinline=true>
                            <source src={config.desktop_video_src.clone()} type="video/mp4" />
                        </video>
                        <div class="hero-overlay desktop-only"></div>

                        <video ref={mobile_video.clone()} class="hero-video mobile-only"
                            autoplay=true loop=true muted=true playsinline=true>
                            <source src={config.mobile_video_src.clone()} type="video/mp4" />
                        </video>
                    </div>
                </div>

                <div class="mobile-only">
                    <SoundToggle video={mobile_video.clone()} />
                </div>

                <div class="scroll-hint">
                    <svg width="14" height="18" viewBox="0 0 24 32" fill="none" xmlns="http://www.w3.org/2000/svg">
                        <path
                            d="M12 4V26M12 26L6 20M12 26L18 20"
                            stroke="white"
                            stroke-width="1.4"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        />
                    </svg>
                </div>
            </section>

            <section class="content">
                <h1>{"AN OLFACTIVE JOURNEY"}</h1>
                <h2>{"UNFOLDS WITHIN"}</h2>

                <input
                    type="email"
                    class="email-input"
                    placeholder="Email Address"
                    value={email}
                    {oninput}
                />

                <button class="submit-button desktop-only" onclick={on_submit.clone()} disabled={submitting}>
                    {button_label}
                </button>
                <button class="submit-button mobile-only" onclick={on_submit} disabled={submitting}>
                    {button_label}
                </button>

                <p class="unveiling">{"Unveiling In"}</p>
                <div class="countdown">
                    <TimeBox value={countdown.days} label="Days" />
                    <TimeBox value={countdown.hours} label="Hours" />
                    <TimeBox value={countdown.minutes} label="Mins" />
                </div>

                <a class="social" href={config.social_url.clone()} target="_blank" rel="noopener noreferrer">
                    {"JOIN US ON INSTAGRAM"}
                </a>

                <p class="copyright">{"©2026 All Copyrights Reserved"}</p>
            </section>
        </div>
    }
}
