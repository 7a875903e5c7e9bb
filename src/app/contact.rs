use leptos::prelude::*;
use leptos_router::components::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::clipboard::copy_and_confirm;
use crate::{
    config::SiteConfig,
    contact::{ContactForm, CopyTarget, Field, Notice},
};

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Your Name",
        Field::Company => "Company (Optional)",
        Field::Phone => "Phone Number (Optional)",
        Field::Email => "Your Email",
        Field::Message => "Your Message",
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.field(field).to_string());
    let error = move || form.with(|f| f.error(field).map(str::to_string));
    let class = move || {
        if error().is_some() {
            "form-control is-invalid"
        } else {
            "form-control"
        }
    };
    let input_type = match field {
        Field::Email => "email",
        Field::Phone => "tel",
        _ => "text",
    };

    let control = if multiline {
        view! {
            <textarea
                id=field.as_str()
                name=field.as_str()
                class=class
                rows="5"
                placeholder=placeholder(field)
                required=field.is_required()
                prop:value=value
                on:input:target=move |ev| form.update(|f| f.update_field(field, ev.target().value()))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type
                id=field.as_str()
                name=field.as_str()
                class=class
                placeholder=placeholder(field)
                required=field.is_required()
                prop:value=value
                on:input:target=move |ev| form.update(|f| f.update_field(field, ev.target().value()))
            />
        }
        .into_any()
    };

    view! {
        <div class="mb-3">
            {control}
            {move || error().map(|msg| view! { <div class="invalid-feedback">{msg}</div> })}
        </div>
    }
}

#[component]
fn ManualContactPanel(form: RwSignal<ContactForm>) -> impl IntoView {
    let copy = move |target: CopyTarget| {
        let text = form.with_untracked(|f| {
            f.manual_contact()
                .map(|m| m.text_for(target).to_string())
        });
        match text {
            Some(text) => copy_and_confirm(text, target),
            None => log::warn!("nothing to copy yet"),
        }
    };

    view! {
        {move || {
            form.with(|f| f.manual_contact().cloned())
                .map(|manual| {
                    view! {
                        <div class="manual-contact mt-4 p-3">
                            <h5 class="text-cyan mb-3">"Send Email Manually"</h5>
                            <div class="mb-3">
                                <label class="form-label">"Email Address:"</label>
                                <div class="flex gap-2">
                                    <input
                                        type="text"
                                        class="form-control"
                                        readonly
                                        prop:value=manual.address.clone()
                                    />
                                    <button
                                        type="button"
                                        class="copy-btn"
                                        on:click=move |_| copy(CopyTarget::Email)
                                    >
                                        "Copy"
                                    </button>
                                </div>
                            </div>
                            <div class="mb-3">
                                <label class="form-label">"Message:"</label>
                                <textarea
                                    class="form-control"
                                    rows="10"
                                    readonly
                                    prop:value=manual.message.clone()
                                ></textarea>
                                <button
                                    type="button"
                                    class="copy-btn mt-2"
                                    on:click=move |_| copy(CopyTarget::Message)
                                >
                                    "Copy Message"
                                </button>
                            </div>
                            <p class="text-sm">
                                "Open your email client, paste the address in \"To\" and the message in the body."
                            </p>
                        </div>
                    }
                })
        }}
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let form = RwSignal::new(ContactForm::new(site.contact_address.clone()));

    let UseTimeoutFnReturn {
        start: start_reset, ..
    } = use_timeout_fn(
        move |_: ()| form.update(ContactForm::reset_fields),
        site.mail_reset_ms as f64,
    );
    let UseTimeoutFnReturn {
        start: start_finish, ..
    } = use_timeout_fn(
        move |_: ()| form.update(ContactForm::finish_submitting),
        site.submitting_ms as f64,
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(result) = form.try_update(ContactForm::submit_via_mail_client) else {
            return;
        };
        match result {
            Ok(link) => {
                match window().location().set_href(&link) {
                    Ok(()) => {
                        form.update(ContactForm::mail_client_opened);
                        start_reset(());
                    }
                    Err(e) => log::error!("couldn't open mail client: {e:?}"),
                }
                start_finish(());
            }
            Err(e) => log::info!("{e}"),
        }
    };

    let on_manual = move |_| {
        let result = form.try_update(|f| f.submit_via_clipboard().map(|_| ()));
        if let Some(Err(e)) = result {
            log::info!("{e}");
        }
    };

    let notice = move || form.with(ContactForm::notice);
    let submitting = move || form.with(ContactForm::is_submitting);

    view! {
        <div class="contact-page min-h-screen flex items-center justify-center px-4 py-12">
            <div class="contact-card w-full max-w-2xl p-8">
                <h2 class="section-title text-center mb-8">"Contact Me"</h2>
                {move || {
                    notice()
                        .map(|n| {
                            let class = match n {
                                Notice::MailClient => "alert alert-success",
                                Notice::Manual => "alert alert-info",
                            };
                            view! { <div class=class role="alert">{n.text()}</div> }
                        })
                }}
                <form novalidate on:submit=on_submit>
                    <FormField form=form field=Field::Name />
                    <FormField form=form field=Field::Company />
                    <FormField form=form field=Field::Phone />
                    <FormField form=form field=Field::Email />
                    <FormField form=form field=Field::Message multiline=true />
                    <div class="flex flex-wrap gap-3">
                        <button type="submit" class="contact-btn" disabled=submitting>
                            {move || if submitting() { "Opening Email..." } else { "Send via Email App" }}
                        </button>
                        <button type="button" class="contact-btn" on:click=on_manual>
                            "Copy Message Instead"
                        </button>
                    </div>
                </form>
                <ManualContactPanel form=form />
                <div class="text-center mt-8">
                    <A href="/" attr:class="nav-custom-btn">
                        "Back to Home"
                    </A>
                </div>
            </div>
        </div>
    }
}
