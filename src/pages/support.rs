use crate::fixtures;
use crate::models::support::{filter_faqs, toggle_expanded, ContactForm};
use crate::routes::{self, Navigator};
use crate::store::{use_config, use_toasts};
use leptos::logging::log;
use leptos::*;

const CONTACT_CHANNELS: [(&str, &str, &str, &str); 3] = [
    ("💬", "Live Chat", "Talk to a certified mechanic right now", "Start Chat"),
    ("📞", "Phone Support", "Mon-Fri 8am-8pm EST · 1-800-GEAR-NEST", "Call Now"),
    ("✉", "Email Support", "We reply within 24 hours", "Send Email"),
];

#[component]
pub fn SupportPage() -> impl IntoView {
    let navigator = Navigator::new();
    let faqs = store_value(fixtures::faqs());
    let (query, set_query) = create_signal(String::new());
    let (category, set_category) = create_signal(None::<String>);
    let (expanded, set_expanded) = create_signal(None::<String>);

    let visible = create_memo(move |_| {
        query.with(|q| category.with(|c| faqs.with_value(|f| filter_faqs(f, q, c.as_deref()))))
    });
    let clear_filters = move || {
        set_query.set(String::new());
        set_category.set(None);
    };

    view! {
        <main class="page support-page">
            <section class="support-hero">
                <h1>"How can we help?"</h1>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search for answers..."
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </section>

            <section class="support-categories">
                {fixtures::support_categories()
                    .into_iter()
                    .map(|topic| {
                        let id = store_value(topic.id.clone());
                        let active = move || id.with_value(|id| category.with(|c| c.as_deref() == Some(id.as_str())));
                        view! {
                            <article
                                class="card support-category"
                                class:active=active
                                on:click=move |_| {
                                    let id = id.get_value();
                                    set_category.update(|c| *c = toggle_expanded(c.as_deref(), &id));
                                }
                            >
                                <span class="category-icon">{topic.icon.clone()}</span>
                                <h3>{topic.title.clone()}</h3>
                                <p class="muted">{topic.description.clone()}</p>
                                <span class="muted">{format!("{} articles", topic.articles)}</span>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="faq-section">
                <div class="split">
                    <h2 class="section-title">"Frequently Asked Questions"</h2>
                    <Show when=move || category.with(Option::is_some)>
                        <button class="button ghost show-all" on:click=move |_| set_category.set(None)>
                            "Show All FAQs"
                        </button>
                    </Show>
                </div>
                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=move || view! {
                        <div class="empty-state">
                            <h3>"No results found"</h3>
                            <p class="muted">"Try different keywords or browse all topics."</p>
                            <button class="button primary" on:click=move |_| clear_filters()>"Clear Filters"</button>
                        </div>
                    }
                >
                    <For
                        each=move || visible.get()
                        key=|faq| faq.id.clone()
                        children=move |faq| {
                            let id = store_value(faq.id.clone());
                            let open = move || id.with_value(|id| expanded.with(|e| e.as_deref() == Some(id.as_str())));
                            view! {
                                <article class="card faq" class:open=open>
                                    <button
                                        class="faq-question"
                                        on:click=move |_| {
                                            let id = id.get_value();
                                            set_expanded.update(|e| *e = toggle_expanded(e.as_deref(), &id));
                                        }
                                    >
                                        <span>{faq.question.clone()}</span>
                                        <span class="chevron">{move || if open() { "▲" } else { "▼" }}</span>
                                    </button>
                                    <Show when=open>
                                        <p class="faq-answer">{faq.answer.clone()}</p>
                                    </Show>
                                </article>
                            }
                        }
                    />
                </Show>
            </section>

            <section class="contact-channels">
                {CONTACT_CHANNELS
                    .into_iter()
                    .map(|(icon, title, detail, action)| {
                        let is_chat = action == "Start Chat";
                        view! {
                            <article class="card contact-channel">
                                <span class="category-icon">{icon}</span>
                                <h3>{title}</h3>
                                <p class="muted">{detail}</p>
                                <button
                                    class="button outline"
                                    on:click=move |_| {
                                        if is_chat {
                                            navigator.go(routes::CHAT);
                                        } else {
                                            log!("[SUPPORT] {} selected", title);
                                        }
                                    }
                                >
                                    {action}
                                </button>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>

            <ContactFormCard/>
        </main>
    }
}

#[component]
fn ContactFormCard() -> impl IntoView {
    let toasts = use_toasts();
    let toast_duration = use_config().toast_long;
    let form = create_rw_signal(ContactForm::default());
    let (form_error, set_form_error) = create_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(ContactForm::validate) {
            Ok(()) => {
                log!("[SUPPORT] contact form sent");
                form.set(ContactForm::default());
                set_form_error.set(None);
                toasts.show(
                    "Message sent!",
                    "We'll get back to you within 24 hours.",
                    toast_duration,
                );
            }
            Err(err) => set_form_error.set(Some(err.to_string())),
        }
    };

    view! {
        <form class="card contact-form" on:submit=on_submit>
            <h2>"Send us a message"</h2>
            <div class="form-grid">
                <input
                    type="text"
                    class="name-input"
                    placeholder="Your name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    type="email"
                    class="email-input"
                    placeholder="Email address"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
            </div>
            <input
                type="text"
                class="subject-input"
                placeholder="Subject"
                prop:value=move || form.with(|f| f.subject.clone())
                on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
            />
            <textarea
                class="message-input"
                rows="5"
                placeholder="How can we help?"
                prop:value=move || form.with(|f| f.message.clone())
                on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
            ></textarea>
            {move || form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button type="submit" class="button primary">"Send Message"</button>
        </form>
    }
}
