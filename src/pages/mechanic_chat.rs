use crate::components::star_rating::StarRating;
use crate::fixtures;
use crate::models::chat::{Attachment, Conversation, Message, Sender, MAX_ATTACHMENTS, MECHANIC_AUTO_REPLY};
use crate::error::MarketError;
use crate::store::{use_config, use_toasts};
use crate::utils::format::{initials, short_time};
use crate::utils::leptos_owner::Timers;
use chrono::Utc;
use leptos::logging::{log, warn};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FileList, HtmlInputElement, Url};

/// Specialties listed under the mechanic's name.
const SPECIALTIES_SHOWN: usize = 3;

/// Object URLs for picked image files. Files the browser refuses to expose
/// are skipped.
fn attachments_from(files: &FileList) -> Vec<Attachment> {
    js_sys::Array::from(files)
        .iter()
        .filter_map(|value| value.dyn_into::<File>().ok())
        .filter_map(|file| match Url::create_object_url_with_blob(&file) {
            Ok(url) => Some(Attachment { name: file.name(), url }),
            Err(err) => {
                warn!("[CHAT] could not read {}: {:?}", file.name(), err);
                None
            }
        })
        .collect()
}

fn release(url: &str) {
    if Url::revoke_object_url(url).is_err() {
        warn!("[CHAT] could not revoke {}", url);
    }
}

#[component]
pub fn MechanicChatPage() -> impl IntoView {
    let config = store_value(use_config());
    let timers = Timers::new("mechanic-chat");
    let toasts = use_toasts();
    let mechanic = fixtures::mechanic();
    let conversation = create_rw_signal(Conversation::new(fixtures::opening_messages(Utc::now())));
    let (draft, set_draft) = create_signal(String::new());
    let message_list = create_node_ref::<html::Div>();

    // object URLs die with the page
    on_cleanup(move || {
        conversation.with_untracked(|c| {
            c.staged().iter().for_each(|a| release(&a.url));
            c.messages().iter().filter_map(Message::image_url).for_each(release);
        });
    });

    create_effect(move |_| {
        conversation.track();
        if let Some(list) = message_list.get() {
            list.set_scroll_top(list.scroll_height());
        }
    });

    let attachments_full = create_memo(move |_| conversation.with(Conversation::attachments_full));
    let can_send = create_memo(move |_| draft.with(|d| conversation.with(|c| c.can_send(d))));

    let send = move || {
        let text = draft.get_untracked();
        match conversation.try_update(|c| c.send(&text, Utc::now())) {
            Some(Ok(count)) => {
                log!("[CHAT] sent {} message(s)", count);
                set_draft.set(String::new());
                let delay = config.with_value(|c| c.mechanic_reply_delay);
                timers.after(delay, move || {
                    conversation.update(|c| c.receive(MECHANIC_AUTO_REPLY, Utc::now()));
                });
            }
            Some(Err(err)) => log!("[CHAT] {}", err),
            None => {}
        }
    };

    let on_files = move |ev: ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let picked = input.files().map(|files| attachments_from(&files)).unwrap_or_default();
        let rejected = conversation.try_update(|c| c.stage(picked)).unwrap_or_default();
        if !rejected.is_empty() {
            log!("[CHAT] {} image(s) over the limit of {}", rejected.len(), MAX_ATTACHMENTS);
            rejected.iter().for_each(|a| release(&a.url));
            let duration = config.with_value(|c| c.toast_short);
            toasts.show(
                "Attachment limit reached",
                MarketError::TooManyAttachments(MAX_ATTACHMENTS).to_string(),
                duration,
            );
        }
        // allow picking the same file again
        input.set_value("");
    };

    let unstage = move |index: usize| {
        if let Some(attachment) = conversation.try_update(|c| c.unstage(index)).flatten() {
            release(&attachment.url);
        }
    };

    let undo = move |id: &str| {
        if let Some(message) = conversation.try_update(|c| c.undo(id)).flatten() {
            log!("[CHAT] undid {}", message.id);
            if let Some(url) = message.image_url() {
                release(url);
            }
        }
    };

    let specialties = mechanic
        .specialties
        .iter()
        .take(SPECIALTIES_SHOWN)
        .map(|s| view! { <span class="badge specialty">{s.clone()}</span> })
        .collect_view();

    view! {
        <main class="page chat-page">
            <header class="card mechanic-header">
                <div class="avatar">
                    <span class="avatar-initials">{initials(&mechanic.name)}</span>
                    <span class=mechanic.status.dot_class() title=mechanic.status.label()></span>
                </div>
                <div class="mechanic-info">
                    <h2>{mechanic.name.clone()}</h2>
                    <div class="mechanic-meta">
                        <StarRating rating=mechanic.rating/>
                        <span class="muted">{format!("Responds {}", mechanic.response_time)}</span>
                    </div>
                    <div class="specialties">{specialties}</div>
                </div>
            </header>

            <div class="card message-list" node_ref=message_list>
                <For
                    each=move || conversation.with(|c| c.messages().to_vec())
                    key=|message| message.id.clone()
                    children=move |message: Message| {
                        let id = store_value(message.id.clone());
                        let from_user = message.sender == Sender::User;
                        view! {
                            <div class="message" class:from-user=from_user class:from-mechanic=!from_user>
                                <div class="bubble">
                                    {match message.image_url() {
                                        Some(url) => view! {
                                            <figure class="message-image">
                                                <img src=url.to_string() alt=message.caption()/>
                                                <figcaption>{message.caption()}</figcaption>
                                            </figure>
                                        }
                                        .into_view(),
                                        None => view! { <p>{message.caption()}</p> }.into_view(),
                                    }}
                                </div>
                                <div class="message-meta">
                                    <span class="muted time">{short_time(message.sent_at)}</span>
                                    {message.is_undoable().then(|| view! {
                                        <button class="button ghost undo" on:click=move |_| undo(&id.get_value())>
                                            "Undo"
                                        </button>
                                    })}
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || conversation.with(|c| !c.staged().is_empty())>
                <div class="staged-strip">
                    {move || {
                        conversation
                            .with(|c| c.staged().to_vec())
                            .into_iter()
                            .enumerate()
                            .map(|(index, attachment)| view! {
                                <div class="staged-image">
                                    <img src=attachment.url alt=attachment.name.clone()/>
                                    <button
                                        class="icon-button unstage"
                                        title=format!("Remove {}", attachment.name)
                                        on:click=move |_| unstage(index)
                                    >
                                        "✕"
                                    </button>
                                </div>
                            })
                            .collect_view()
                    }}
                    <span class="muted staged-count">
                        {move || format!("{}/{}", conversation.with(|c| c.staged().len()), MAX_ATTACHMENTS)}
                    </span>
                </div>
            </Show>

            <div class="card composer">
                <label class="icon-button picker" class:disabled=move || attachments_full.get() title="Take photo">
                    "📷"
                    <input
                        type="file"
                        accept="image/*"
                        capture="environment"
                        class="hidden camera-input"
                        disabled=move || attachments_full.get()
                        on:change=on_files
                    />
                </label>
                <label class="icon-button picker" class:disabled=move || attachments_full.get() title="Attach images">
                    "🖼"
                    <input
                        type="file"
                        accept="image/*"
                        multiple
                        class="hidden image-input"
                        disabled=move || attachments_full.get()
                        on:change=on_files
                    />
                </label>
                <input
                    type="text"
                    class="message-input"
                    placeholder="Describe your issue or ask a question..."
                    prop:value=draft
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            send();
                        }
                    }
                />
                <button class="button primary send" disabled=move || !can_send.get() on:click=move |_| send()>
                    "Send"
                </button>
            </div>
        </main>
    }
}
