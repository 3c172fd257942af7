//! The browser app: wizard -> matching delay -> swipe results -> chat,
//! all driven from a single function component.

use crate::catalog::{
    catalog, tier_id, CandidateProfile, Game, COMM_STYLE_TAGS, GAME_STYLE_TAGS, TIER_FAMILIES,
};
use crate::chat::{self, ChatMessage, SELF_SENDER};
use crate::filter::{assign_ranks, filter_candidates};
use crate::matches::{self, MatchQueue, MatchedCandidate};
use crate::storage::BrowserStore;
use crate::swipe::{SwipeDirection, SwipeEngine, TickOutcome, VISIBLE_CARDS};
use crate::wizard::{AdvanceOutcome, MicPreference, RetreatOutcome, Wizard};
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

const MATCHING_DELAY_MS: u32 = 1_500;
const TOAST_DURATION_MS: u32 = 1_600;
const FALLBACK_VIEWPORT_WIDTH: f64 = 800.0;

#[derive(Clone, PartialEq)]
enum AppView {
    Wizard,
    Matching,
    Results,
    Chat(String),
}

/// Steps the release animation one frame at a time; the pending frame
/// handle is owned here and dropping it cancels the loop.
#[derive(Clone)]
struct ReleaseDriver {
    engine: UseStateHandle<SwipeEngine>,
    queue: UseStateHandle<Option<MatchQueue>>,
    accepted: UseStateHandle<Vec<MatchedCandidate>>,
    show_toast: UseStateHandle<bool>,
    toast_timer: Rc<RefCell<Option<Timeout>>>,
    raf: Rc<RefCell<Option<AnimationFrame>>>,
    last_frame_ts: Rc<RefCell<Option<f64>>>,
}

impl ReleaseDriver {
    fn schedule(&self) {
        let driver = self.clone();
        let handle = request_animation_frame(move |timestamp| driver.step(timestamp));
        *self.raf.borrow_mut() = Some(handle);
    }

    fn step(&self, timestamp: f64) {
        let dt = {
            let mut last = self.last_frame_ts.borrow_mut();
            let dt = last.map(|previous| timestamp - previous).unwrap_or(0.0);
            *last = Some(timestamp);
            dt
        };

        let mut engine = (*self.engine).clone();
        match engine.tick(dt) {
            TickOutcome::Running => {
                self.engine.set(engine);
                self.schedule();
            }
            TickOutcome::Done(decision) => {
                *self.last_frame_ts.borrow_mut() = None;
                self.raf.borrow_mut().take();
                self.engine.set(engine);
                if let Some(direction) = decision {
                    self.record_decision(direction);
                }
            }
            TickOutcome::Idle => {
                *self.last_frame_ts.borrow_mut() = None;
                self.raf.borrow_mut().take();
            }
        }
    }

    fn record_decision(&self, direction: SwipeDirection) {
        let Some(mut queue) = (*self.queue).clone() else {
            return;
        };
        let matched = queue.decide(direction);
        self.queue.set(Some(queue));

        if let Some(matched) = matched {
            let store = BrowserStore;
            let updated = matches::append_match(&store, matched.clone());
            chat::get_or_create_room(&store, &matched, js_sys::Date::now());
            self.accepted.set(updated);

            self.show_toast.set(true);
            let show_toast = self.show_toast.clone();
            *self.toast_timer.borrow_mut() = Some(Timeout::new(TOAST_DURATION_MS, move || {
                show_toast.set(false);
            }));
        }
    }
}

fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
}

#[function_component(App)]
fn app() -> Html {
    let view = use_state(|| AppView::Wizard);
    let wizard = use_state(Wizard::new);
    let queue = use_state(|| None::<MatchQueue>);
    let accepted = use_state(|| matches::load_matches(&BrowserStore));
    let engine = use_state(SwipeEngine::new);
    let show_toast = use_state(|| false);
    let chat_messages = use_state(Vec::<ChatMessage>::new);
    let chat_draft = use_state(String::new);

    let raf = use_mut_ref(|| None::<AnimationFrame>);
    let last_frame_ts = use_mut_ref(|| None::<f64>);
    let toast_timer = use_mut_ref(|| None::<Timeout>);
    let matching_timer = use_mut_ref(|| None::<Timeout>);

    let driver = ReleaseDriver {
        engine: engine.clone(),
        queue: queue.clone(),
        accepted: accepted.clone(),
        show_toast: show_toast.clone(),
        toast_timer: toast_timer.clone(),
        raf: raf.clone(),
        last_frame_ts: last_frame_ts.clone(),
    };

    // Pending frames and timers must not outlive the component.
    {
        let raf = raf.clone();
        let toast_timer = toast_timer.clone();
        let matching_timer = matching_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    raf.borrow_mut().take();
                    toast_timer.borrow_mut().take();
                    matching_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_select_game = {
        let wizard = wizard.clone();
        Callback::from(move |game: Game| {
            let mut next = (*wizard).clone();
            next.select_game(game);
            wizard.set(next);
        })
    };

    let on_toggle_position = {
        let wizard = wizard.clone();
        Callback::from(move |position: String| {
            let mut next = (*wizard).clone();
            next.toggle_position(&position);
            wizard.set(next);
        })
    };

    let on_select_tier = {
        let wizard = wizard.clone();
        Callback::from(move |tier: String| {
            let mut next = (*wizard).clone();
            next.selection.tier = Some(tier);
            wizard.set(next);
        })
    };

    let on_select_mic = {
        let wizard = wizard.clone();
        Callback::from(move |mic: MicPreference| {
            let mut next = (*wizard).clone();
            next.selection.mic = Some(mic);
            wizard.set(next);
        })
    };

    let on_toggle_game_style = {
        let wizard = wizard.clone();
        Callback::from(move |tag: String| {
            let mut next = (*wizard).clone();
            next.toggle_game_style(&tag);
            wizard.set(next);
        })
    };

    let on_toggle_comm_style = {
        let wizard = wizard.clone();
        Callback::from(move |tag: String| {
            let mut next = (*wizard).clone();
            next.toggle_comm_style(&tag);
            wizard.set(next);
        })
    };

    let on_next = {
        let wizard = wizard.clone();
        let queue = queue.clone();
        let view = view.clone();
        let matching_timer = matching_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            match next.advance() {
                AdvanceOutcome::Blocked => {}
                AdvanceOutcome::Moved(_) => wizard.set(next),
                AdvanceOutcome::Finished => {
                    let Some(spec) = next.filter_spec() else {
                        return;
                    };
                    let filtered = filter_candidates(catalog(), &spec);
                    let mut rng = rand::thread_rng();
                    let ranks = assign_ranks(&filtered, &spec.tier, &mut rng);
                    queue.set(Some(MatchQueue::new(
                        filtered.into_iter().cloned().collect(),
                        ranks,
                    )));
                    view.set(AppView::Matching);

                    let view = view.clone();
                    *matching_timer.borrow_mut() =
                        Some(Timeout::new(MATCHING_DELAY_MS, move || {
                            view.set(AppView::Results);
                        }));
                }
            }
        })
    };

    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            match next.retreat() {
                RetreatOutcome::Moved(_) | RetreatOutcome::Exited => wizard.set(next),
            }
        })
    };

    let pointer_down = {
        let engine = engine.clone();
        Callback::from(move |event: PointerEvent| {
            event.prevent_default();
            let mut next = (*engine).clone();
            if next.start(f64::from(event.client_x()), f64::from(event.client_y())) {
                if let Some(target) = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                {
                    let _ = target.set_pointer_capture(event.pointer_id());
                }
                engine.set(next);
            }
        })
    };

    let pointer_move = {
        let engine = engine.clone();
        Callback::from(move |event: PointerEvent| {
            if engine.is_dragging() {
                event.prevent_default();
                let mut next = (*engine).clone();
                next.drag_to(f64::from(event.client_x()), f64::from(event.client_y()));
                engine.set(next);
            }
        })
    };

    let pointer_up = {
        let engine = engine.clone();
        let driver = driver.clone();
        Callback::from(move |event: PointerEvent| {
            if !engine.is_dragging() {
                return;
            }
            if let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.release_pointer_capture(event.pointer_id());
            }
            let mut next = (*engine).clone();
            if next.release(viewport_width()).is_some() {
                engine.set(next);
                driver.schedule();
            }
        })
    };

    let pointer_cancel = {
        let engine = engine.clone();
        Callback::from(move |event: PointerEvent| {
            if !engine.is_dragging() {
                return;
            }
            if let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.release_pointer_capture(event.pointer_id());
            }
            let mut next = (*engine).clone();
            next.abort();
            engine.set(next);
        })
    };

    let on_restart = {
        let view = view.clone();
        let wizard = wizard.clone();
        let queue = queue.clone();
        let accepted = accepted.clone();
        let engine = engine.clone();
        Callback::from(move |_: MouseEvent| {
            matches::clear_matches(&BrowserStore);
            accepted.set(Vec::new());
            queue.set(None);
            engine.set(SwipeEngine::new());
            wizard.set(Wizard::new());
            view.set(AppView::Wizard);
        })
    };

    let on_open_chat = {
        let view = view.clone();
        let chat_messages = chat_messages.clone();
        Callback::from(move |matched: MatchedCandidate| {
            let store = BrowserStore;
            let room = chat::get_or_create_room(&store, &matched, js_sys::Date::now());
            chat_messages.set(chat::room_messages(&store, &room.id));
            view.set(AppView::Chat(room.id));
        })
    };

    let on_leave_chat = {
        let view = view.clone();
        let chat_draft = chat_draft.clone();
        Callback::from(move |_: MouseEvent| {
            chat_draft.set(String::new());
            view.set(AppView::Results);
        })
    };

    let on_draft_input = {
        let chat_draft = chat_draft.clone();
        Callback::from(move |event: InputEvent| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            chat_draft.set(input.value());
        })
    };

    let on_send = {
        let view = view.clone();
        let chat_draft = chat_draft.clone();
        let chat_messages = chat_messages.clone();
        Callback::from(move |_: MouseEvent| {
            let AppView::Chat(room_id) = (*view).clone() else {
                return;
            };
            let content = chat_draft.trim().to_string();
            if content.is_empty() {
                return;
            }
            chat_draft.set(String::new());

            let store = BrowserStore;
            let sequence = chat::room_messages(&store, &room_id).len();
            let message =
                chat::new_message(&room_id, sequence, SELF_SENDER, &content, js_sys::Date::now());
            let history = chat::append_message(&store, message);
            chat_messages.set(history.clone());

            let chat_messages = chat_messages.clone();
            spawn_local(async move {
                // An empty trimmed reply is dropped; failures arrive as
                // the single fallback reply.
                let Some(reply) = chat::request_reply(&room_id, &history).await else {
                    return;
                };
                let store = BrowserStore;
                let sequence = chat::room_messages(&store, &room_id).len();
                let message =
                    chat::new_message(&room_id, sequence, &room_id, &reply, js_sys::Date::now());
                chat_messages.set(chat::append_message(&store, message));
            });
        })
    };

    let body = match &*view {
        AppView::Wizard => render_wizard(
            &wizard,
            &on_select_game,
            &on_toggle_position,
            &on_select_tier,
            &on_select_mic,
            &on_toggle_game_style,
            &on_toggle_comm_style,
            &on_next,
            &on_back,
        ),
        AppView::Matching => html! {
            <div class="matching-screen">
                <div class="spinner"></div>
                <p>{ "조건에 맞는 듀오를 찾는 중..." }</p>
            </div>
        },
        AppView::Results => render_results(
            &queue,
            &engine,
            &accepted,
            *show_toast,
            &pointer_down,
            &pointer_move,
            &pointer_up,
            &pointer_cancel,
            &on_restart,
            &on_open_chat,
        ),
        AppView::Chat(room_id) => render_chat(
            room_id,
            &chat_messages,
            &chat_draft,
            &on_draft_input,
            &on_send,
            &on_leave_chat,
        ),
    };

    html! {
        <div class="app-container">
            { body }
        </div>
    }
}

#[allow(clippy::too_many_arguments)]
fn render_wizard(
    wizard: &UseStateHandle<Wizard>,
    on_select_game: &Callback<Game>,
    on_toggle_position: &Callback<String>,
    on_select_tier: &Callback<String>,
    on_select_mic: &Callback<MicPreference>,
    on_toggle_game_style: &Callback<String>,
    on_toggle_comm_style: &Callback<String>,
    on_next: &Callback<MouseEvent>,
    on_back: &Callback<MouseEvent>,
) -> Html {
    let (current, total) = wizard.progress();
    let progress_style = format!(
        "width: {:.0}%;",
        wizard.progress_fraction() * 100.0
    );

    let step_body = match wizard.step() {
        1 => {
            let selected = wizard.selection.game;
            html! {
                <div class="step-options game-options">
                    { for Game::ALL.iter().map(|game| {
                        let game = *game;
                        let on_click = {
                            let on_select_game = on_select_game.clone();
                            Callback::from(move |_| on_select_game.emit(game))
                        };
                        let class = if selected == Some(game) {
                            "option-button active"
                        } else {
                            "option-button"
                        };
                        html! {
                            <button class={class} onclick={on_click}>{ game.label() }</button>
                        }
                    }) }
                </div>
            }
        }
        2 => {
            let game = wizard.selection.game.unwrap_or(Game::Lol);
            let chosen = wizard.selection.positions.clone();
            html! {
                <div class="step-options">
                    <p class="step-hint">{ format!("원하는 {}을 모두 골라주세요", game.role_noun()) }</p>
                    { for game.positions().iter().map(|position| {
                        let id = position.id.to_string();
                        let active = chosen.iter().any(|p| p == position.id);
                        let on_click = {
                            let on_toggle_position = on_toggle_position.clone();
                            let id = id.clone();
                            Callback::from(move |_| on_toggle_position.emit(id.clone()))
                        };
                        let class = if active { "option-button active" } else { "option-button" };
                        html! {
                            <button class={class} onclick={on_click}>{ position.label }</button>
                        }
                    }) }
                </div>
            }
        }
        3 => {
            let chosen = wizard.selection.tier.clone();
            html! {
                <div class="tier-grid">
                    { for TIER_FAMILIES.iter().map(|family| {
                        html! {
                            <div class="tier-row">
                                <span class="tier-name">{ family.label }</span>
                                { for (1..=4u8).map(|division| {
                                    let id = tier_id(family, division);
                                    let active = chosen.as_deref() == Some(id.as_str());
                                    let on_click = {
                                        let on_select_tier = on_select_tier.clone();
                                        let id = id.clone();
                                        Callback::from(move |_| on_select_tier.emit(id.clone()))
                                    };
                                    let class = if active { "option-button active" } else { "option-button" };
                                    html! {
                                        <button class={class} onclick={on_click}>{ division }</button>
                                    }
                                }) }
                            </div>
                        }
                    }) }
                </div>
            }
        }
        4 => {
            let chosen = wizard.selection.mic;
            html! {
                <div class="step-options">
                    { for MicPreference::ALL.iter().map(|mic| {
                        let mic = *mic;
                        let on_click = {
                            let on_select_mic = on_select_mic.clone();
                            Callback::from(move |_| on_select_mic.emit(mic))
                        };
                        let class = if chosen == Some(mic) {
                            "option-button active"
                        } else {
                            "option-button"
                        };
                        html! {
                            <button class={class} onclick={on_click}>{ mic.label() }</button>
                        }
                    }) }
                </div>
            }
        }
        _ => {
            let game_chosen = wizard.selection.game_styles.clone();
            let comm_chosen = wizard.selection.comm_styles.clone();
            html! {
                <div class="style-sections">
                    <h3>{ "플레이 스타일" }</h3>
                    <div class="step-options">
                        { for GAME_STYLE_TAGS.iter().map(|tag| {
                            render_style_tag(tag, &game_chosen, on_toggle_game_style)
                        }) }
                    </div>
                    <h3>{ "소통 스타일" }</h3>
                    <div class="step-options">
                        { for COMM_STYLE_TAGS.iter().map(|tag| {
                            render_style_tag(tag, &comm_chosen, on_toggle_comm_style)
                        }) }
                    </div>
                </div>
            }
        }
    };

    let next_label = if wizard.step() == crate::wizard::LAST_STEP {
        "듀오 찾기"
    } else {
        "다음"
    };

    html! {
        <div class="wizard">
            <div class="progress-track">
                <div class="progress-fill" style={progress_style}></div>
            </div>
            <p class="progress-label">{ format!("{current} / {total}") }</p>
            { step_body }
            <div class="wizard-actions">
                <button class="back-button" onclick={on_back.clone()}>{ "이전" }</button>
                <button class="next-button"
                    disabled={!wizard.can_advance()}
                    onclick={on_next.clone()}>
                    { next_label }
                </button>
            </div>
        </div>
    }
}

fn render_style_tag(tag: &str, chosen: &[String], on_toggle: &Callback<String>) -> Html {
    let active = chosen.iter().any(|t| t == tag);
    let on_click = {
        let on_toggle = on_toggle.clone();
        let tag = tag.to_string();
        Callback::from(move |_| on_toggle.emit(tag.clone()))
    };
    let class = if active {
        "option-button active"
    } else {
        "option-button"
    };
    html! {
        <button class={class} onclick={on_click}>{ tag }</button>
    }
}

#[allow(clippy::too_many_arguments)]
fn render_results(
    queue: &UseStateHandle<Option<MatchQueue>>,
    engine: &UseStateHandle<SwipeEngine>,
    accepted: &UseStateHandle<Vec<MatchedCandidate>>,
    show_toast: bool,
    pointer_down: &Callback<PointerEvent>,
    pointer_move: &Callback<PointerEvent>,
    pointer_up: &Callback<PointerEvent>,
    pointer_cancel: &Callback<PointerEvent>,
    on_restart: &Callback<MouseEvent>,
    on_open_chat: &Callback<MatchedCandidate>,
) -> Html {
    let Some(queue) = (&**queue).as_ref() else {
        return html! { <p>{ "매칭을 먼저 시작해주세요." }</p> };
    };

    if queue.is_empty() {
        return html! {
            <div class="empty-results">
                <h2>{ "조건에 맞는 듀오를 찾지 못했어요" }</h2>
                <p>{ "조건을 바꿔서 다시 찾아볼까요?" }</p>
                <button class="next-button" onclick={on_restart.clone()}>{ "다시 찾기" }</button>
            </div>
        };
    }

    if queue.exhausted() {
        let matched_list = if accepted.is_empty() {
            html! { <p class="empty-note">{ "아직 수락한 듀오가 없어요." }</p> }
        } else {
            html! {
                <ul class="matched-list">
                    { for accepted.iter().map(|matched| {
                        let entry = matched.clone();
                        let on_click = {
                            let on_open_chat = on_open_chat.clone();
                            Callback::from(move |_| on_open_chat.emit(entry.clone()))
                        };
                        html! {
                            <li key={matched.id} class="matched-entry" onclick={on_click}>
                                <span class="matched-name">{ &matched.name }</span>
                                <span class="matched-rank">{ &matched.rank }</span>
                            </li>
                        }
                    }) }
                </ul>
            }
        };
        return html! {
            <div class="results-done">
                <h2>{ "오늘의 추천을 모두 확인했어요" }</h2>
                { matched_list }
                <button class="next-button" onclick={on_restart.clone()}>{ "다시 매칭하기" }</button>
            </div>
        };
    }

    let toast = if show_toast {
        html! { <div class="match-toast">{ "매칭 성공!" }</div> }
    } else {
        html! {}
    };

    html! {
        <div class="results">
            { toast }
            <div class="card-stack">
                { for queue.visible().iter().enumerate().rev().map(|(index, candidate)| {
                    render_card(
                        queue,
                        &**engine,
                        candidate,
                        index,
                        pointer_down,
                        pointer_move,
                        pointer_up,
                        pointer_cancel,
                    )
                }) }
            </div>
            <p class="swipe-hint">{ "오른쪽으로 밀면 수락, 왼쪽으로 밀면 거절" }</p>
        </div>
    }
}

#[allow(clippy::too_many_arguments)]
fn render_card(
    queue: &MatchQueue,
    engine: &SwipeEngine,
    candidate: &CandidateProfile,
    index: usize,
    pointer_down: &Callback<PointerEvent>,
    pointer_move: &Callback<PointerEvent>,
    pointer_up: &Callback<PointerEvent>,
    pointer_cancel: &Callback<PointerEvent>,
) -> Html {
    debug_assert!(index < VISIBLE_CARDS);
    let is_top = index == 0;

    let style = if is_top {
        let (dx, dy) = engine.offset();
        // While a drag or the raf loop positions the card, CSS must not
        // interpolate on top of it.
        let transition = if engine.is_dragging() || engine.is_releasing() {
            "transition: transform 0s;"
        } else {
            "transition: transform 0.2s ease;"
        };
        format!(
            "transform: translate({dx:.1}px, {dy:.1}px) rotate({:.2}deg); z-index: 3; {transition}",
            engine.rotation_deg()
        )
    } else {
        format!(
            "transform: translateY({}px) scale({:.2}); z-index: {};",
            index * 14,
            1.0 - index as f64 * 0.05,
            VISIBLE_CARDS - index
        )
    };

    let overlay = if is_top {
        let overlay = engine.overlay();
        let (class, text) = match overlay.label {
            Some(SwipeDirection::Accept) => ("card-overlay accept", "수락"),
            Some(SwipeDirection::Reject) => ("card-overlay reject", "거절"),
            None => ("card-overlay", ""),
        };
        html! {
            <div class={class} style={format!("opacity: {:.3};", overlay.opacity)}>
                { text }
            </div>
        }
    } else {
        html! {}
    };

    let kda = candidate
        .kda
        .map(|kda| format!("KDA {kda:.1}"))
        .unwrap_or_default();
    let role_label = candidate
        .game
        .positions()
        .iter()
        .find(|position| position.id == candidate.role)
        .map(|position| position.label)
        .unwrap_or("전체");

    let card_inner = html! {
        <>
            { overlay }
            <div class="card-header">
                <span class="candidate-name">{ &candidate.name }</span>
                <span class="candidate-rank">{ queue.rank_of(candidate) }</span>
            </div>
            <p class="candidate-tag">{ &candidate.tag }</p>
            <div class="candidate-stats">
                <span>{ role_label }</span>
                <span>{ format!("승률 {:.0}%", candidate.win_rate * 100.0) }</span>
                <span>{ kda }</span>
            </div>
            <p class="candidate-bio">{ &candidate.bio }</p>
            <div class="candidate-styles">
                { for candidate.game_styles.iter().chain(candidate.comm_styles.iter()).map(|tag| {
                    html! { <span class="style-chip">{ tag }</span> }
                }) }
            </div>
        </>
    };

    if is_top {
        html! {
            <div class="candidate-card top" key={candidate.id} style={style}
                onpointerdown={pointer_down.clone()}
                onpointermove={pointer_move.clone()}
                onpointerup={pointer_up.clone()}
                onpointercancel={pointer_cancel.clone()}>
                { card_inner }
            </div>
        }
    } else {
        html! {
            <div class="candidate-card" key={candidate.id} style={style}>
                { card_inner }
            </div>
        }
    }
}

fn render_chat(
    room_id: &str,
    messages: &UseStateHandle<Vec<ChatMessage>>,
    draft: &UseStateHandle<String>,
    on_draft_input: &Callback<InputEvent>,
    on_send: &Callback<MouseEvent>,
    on_leave: &Callback<MouseEvent>,
) -> Html {
    // A room id that no longer resolves gets the dedicated not-found
    // view with a single way back, never a raw error.
    let Some(room) = chat::load_rooms(&BrowserStore).remove(room_id) else {
        return html! {
            <div class="not-found">
                <p>{ "채팅방을 찾을 수 없어요." }</p>
                <button class="back-button" onclick={on_leave.clone()}>{ "돌아가기" }</button>
            </div>
        };
    };
    html! {
        <div class="chat">
            <div class="chat-header">
                <button class="back-button" onclick={on_leave.clone()}>{ "←" }</button>
                <span class="chat-title">{ room.name }</span>
            </div>
            <ul class="chat-messages">
                { for messages.iter().map(|message| {
                    let class = if message.sender_id == SELF_SENDER {
                        "chat-message mine"
                    } else {
                        "chat-message theirs"
                    };
                    html! {
                        <li key={message.id.clone()} class={class}>{ &message.content }</li>
                    }
                }) }
            </ul>
            <div class="chat-input">
                <input type="text" value={draft.to_string()} oninput={on_draft_input.clone()} />
                <button onclick={on_send.clone()} disabled={draft.trim().is_empty()}>
                    { "보내기" }
                </button>
            </div>
        </div>
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
